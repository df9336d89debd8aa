use std::collections::HashSet;

use genrelist::error::Error;
use genrelist::pipeline::GenreFilter;
use genrelist::spotify::{playlist, tracks};
use genrelist::types::{Artist, PlaylistTracksResponse, TrackArtistPair};
use genrelist::utils;

// Helper function to create a track/artist pair
fn pair(track: &str, artist: &str) -> TrackArtistPair {
    TrackArtistPair {
        track_uri: track.to_string(),
        artist_id: artist.to_string(),
    }
}

// Helper function to create a test artist
fn artist(id: &str, name: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

#[test]
fn test_pair_accumulation_collapses_duplicates() {
    let mut filter = GenreFilter::new("r&b");

    // The same pair encountered on two pages collapses
    assert!(filter.add_pair(pair("spotify:track:1", "artist_a")));
    assert!(!filter.add_pair(pair("spotify:track:1", "artist_a")));

    // The same artist under another track is retained per pair
    assert!(filter.add_pair(pair("spotify:track:2", "artist_a")));

    assert_eq!(filter.pair_count(), 2);
    assert_eq!(filter.artist_count(), 1);
}

#[test]
fn test_matching_tracks_empty_before_classification() {
    let mut filter = GenreFilter::new("r&b");
    filter.add_pair(pair("spotify:track:1", "artist_a"));

    // Nothing approved yet, so nothing matches
    assert!(filter.matching_tracks().is_empty());
}

#[test]
fn test_approve_artist_is_idempotent() {
    let mut filter = GenreFilter::new("r&b");
    filter.approve_artist(artist("artist_a", "First Name", &["r&b"]));
    filter.approve_artist(artist("artist_a", "Second Name", &["r&b"]));

    assert_eq!(filter.approved_count(), 1);

    // The first record for an id wins
    assert_eq!(filter.approved_artists()[0].name, "First Name");
}

#[test]
fn test_matching_tracks_scenario() {
    // 250 tracks spanning 40 distinct artists, 10 of whom are approved.
    let mut filter = GenreFilter::new("r&b");
    for i in 0..250 {
        filter.add_pair(pair(
            &format!("spotify:track:{:03}", i),
            &format!("artist_{:02}", i % 40),
        ));
    }
    for a in 0..10 {
        filter.approve_artist(artist(
            &format!("artist_{:02}", a),
            &format!("Artist {}", a),
            &["canadian r&b"],
        ));
    }

    assert_eq!(filter.pair_count(), 250);
    assert_eq!(filter.artist_count(), 40);

    let matching = filter.matching_tracks();

    // Tracks 0..250 with index % 40 < 10: six full cycles of 10 plus the
    // final partial cycle 240..249.
    assert_eq!(matching.len(), 70);

    // Every matching track belongs to an approved artist
    let approved: HashSet<String> = (0..10).map(|a| format!("artist_{:02}", a)).collect();
    for uri in &matching {
        let owner = filter
            .pairs()
            .iter()
            .find(|p| &p.track_uri == uri)
            .map(|p| p.artist_id.clone())
            .unwrap();
        assert!(approved.contains(&owner));
    }

    // 70 tracks fit into a single append batch
    assert_eq!(utils::track_batches(&matching).len(), 1);
}

#[test]
fn test_page_decoding_tolerates_gaps() {
    let body = r#"{
        "items": [
            {"track": {"uri": "spotify:track:1", "artists": [{"id": "artist_a", "name": "A"}]}},
            {"track": null},
            {"track": {"uri": "spotify:track:2", "artists": []}},
            {"track": {"uri": "spotify:track:3", "artists": [{"id": null, "name": "Local"}]}}
        ],
        "next": null
    }"#;

    let page: PlaylistTracksResponse = serde_json::from_str(body).unwrap();
    assert!(page.next.is_none());

    let mut pairs = HashSet::new();
    tracks::collect_page_pairs(page.items, &mut pairs);

    // The null-track entry is skipped; artist-less and id-less tracks keep
    // an empty artist id
    assert_eq!(pairs.len(), 3);
    assert!(pairs.contains(&pair("spotify:track:1", "artist_a")));
    assert!(pairs.contains(&pair("spotify:track:2", "")));
    assert!(pairs.contains(&pair("spotify:track:3", "")));

    // Empty artist ids never reach the lookup stage
    let ids = utils::unique_artist_ids(&pairs);
    assert_eq!(ids.len(), 1);
}

#[test]
fn test_accumulation_keeps_earlier_pages() {
    // Page 1 decodes, page 2 is never delivered: the set holds page 1.
    let page_one = r#"{
        "items": [
            {"track": {"uri": "spotify:track:1", "artists": [{"id": "artist_a", "name": "A"}]}},
            {"track": {"uri": "spotify:track:2", "artists": [{"id": "artist_b", "name": "B"}]}}
        ],
        "next": "https://api.spotify.com/v1/playlists/x/tracks?offset=100"
    }"#;

    let page: PlaylistTracksResponse = serde_json::from_str(page_one).unwrap();
    assert!(page.next.is_some());

    let mut pairs = HashSet::new();
    tracks::collect_page_pairs(page.items, &mut pairs);

    assert_eq!(pairs.len(), 2);
    assert!(pairs.contains(&pair("spotify:track:1", "artist_a")));

    // A duplicate of page 1 re-delivered later collapses instead of doubling
    let replay: PlaylistTracksResponse = serde_json::from_str(page_one).unwrap();
    tracks::collect_page_pairs(replay.items, &mut pairs);
    assert_eq!(pairs.len(), 2);
}

#[tokio::test]
async fn test_add_tracks_rejects_empty_track_list() {
    let err = playlist::add_tracks("token", "playlist_id", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_add_tracks_rejects_missing_playlist_id() {
    let uris = vec!["spotify:track:1".to_string()];
    let err = playlist::add_tracks("token", "", &uris).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_add_tracks_rejects_empty_token() {
    let uris = vec!["spotify:track:1".to_string()];
    let err = playlist::add_tracks("", "playlist_id", &uris)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
}
