use std::collections::HashSet;

use crate::{
    config,
    error::Error,
    types::{PlaylistItem, PlaylistTracksResponse, TrackArtistPair},
    warning,
};

/// Retrieves every (track uri, primary artist id) pair of a playlist.
///
/// Walks the playlist-tracks listing starting at its first page and follows
/// the `next` URL returned by each response until it is absent. Pairs from
/// all pages accumulate into one de-duplicated set.
///
/// # Arguments
///
/// * `playlist_id` - Spotify ID of the source playlist
/// * `token` - Valid access token for Spotify API authentication
///
/// # Partial-Failure Policy
///
/// Any non-success status, transport error, or undecodable page body is
/// logged as a warning and stops pagination early. Pairs collected up to
/// that point are kept, not discarded. There is no retry.
///
/// # Example
///
/// ```
/// let pairs = get_all_playlist_tracks("37i9dQZF1DX4SBhb3fqCJd", token).await;
/// println!("collected {} track entries", pairs.len());
/// ```
pub async fn get_all_playlist_tracks(playlist_id: &str, token: &str) -> HashSet<TrackArtistPair> {
    let mut pairs: HashSet<TrackArtistPair> = HashSet::new();
    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    ));

    while let Some(api_url) = next_url.take() {
        let client = match super::http_client() {
            Ok(client) => client,
            Err(e) => {
                warning!("Failed to build HTTP client: {}", e);
                break;
            }
        };

        let response = match client.get(&api_url).bearer_auth(token).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warning!("Failed to fetch tracks page: {}", e);
                break;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let err = Error::Fetch {
                status,
                url: api_url,
            };
            warning!("{} (keeping partial results)", err);
            break;
        }

        let page = match response.json::<PlaylistTracksResponse>().await {
            Ok(page) => page,
            Err(e) => {
                warning!("Failed to decode tracks page: {} (keeping partial results)", e);
                break;
            }
        };

        next_url = page.next.clone();
        collect_page_pairs(page.items, &mut pairs);
    }

    pairs
}

/// Folds one page of playlist items into the pair set.
///
/// Entries whose track is null are skipped. The artist id is taken from the
/// first listed artist; a missing artist or artist id becomes the empty
/// string, which is retained in the pair but never matches a lookup.
pub fn collect_page_pairs(items: Vec<PlaylistItem>, pairs: &mut HashSet<TrackArtistPair>) {
    for item in items {
        let Some(track) = item.track else {
            continue;
        };

        let artist_id = track
            .artists
            .first()
            .and_then(|a| a.id.clone())
            .unwrap_or_default();

        pairs.insert(TrackArtistPair {
            track_uri: track.uri,
            artist_id,
        });
    }
}
