use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::TrackArtistPair;

/// Upper bound the Web API places on uris per playlist-append request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

/// Builds the value of the Authorization header for the token exchange:
/// `Basic ` followed by the base64 of `client_id:client_secret`.
pub fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Whether any genre tag contains the target substring.
///
/// Both sides are lowercased before the test, so `--genre R&B` matches the
/// tag "canadian r&b" and vice versa.
pub fn genre_matches(genres: &[String], target: &str) -> bool {
    let needle = target.to_lowercase();
    genres.iter().any(|g| g.to_lowercase().contains(&needle))
}

/// The distinct artist ids behind a pair set.
///
/// Empty ids are skipped; they cannot match and would produce a malformed
/// lookup URL. This bounds the number of remote lookups to the number of
/// distinct artists rather than the number of tracks.
pub fn unique_artist_ids(pairs: &HashSet<TrackArtistPair>) -> HashSet<String> {
    pairs
        .iter()
        .filter(|p| !p.artist_id.is_empty())
        .map(|p| p.artist_id.clone())
        .collect()
}

/// The track uris whose artist is in the approved set.
///
/// Pure and deterministic: membership of the result depends only on the
/// inputs, never on iteration order. An empty approved set yields an empty
/// result.
pub fn matching_tracks(
    pairs: &HashSet<TrackArtistPair>,
    approved: &HashSet<String>,
) -> HashSet<String> {
    pairs
        .iter()
        .filter(|p| approved.contains(&p.artist_id))
        .map(|p| p.track_uri.clone())
        .collect()
}

/// Partitions uris into contiguous, in-order chunks of at most
/// [`MAX_TRACKS_PER_REQUEST`], boundaries at multiples of the chunk size.
pub fn track_batches(uris: &[String]) -> Vec<Vec<String>> {
    uris.chunks(MAX_TRACKS_PER_REQUEST)
        .map(|chunk| chunk.to_vec())
        .collect()
}
