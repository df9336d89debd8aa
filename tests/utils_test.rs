use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::STANDARD};
use genrelist::types::TrackArtistPair;
use genrelist::utils::*;

// Helper function to create a track/artist pair
fn pair(track: &str, artist: &str) -> TrackArtistPair {
    TrackArtistPair {
        track_uri: track.to_string(),
        artist_id: artist.to_string(),
    }
}

fn genres(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_genre_matches_substring() {
    let tags = genres(&["canadian r&b", "pop"]);

    // A tag containing the target matches
    assert!(genre_matches(&tags, "r&b"));

    // The target must appear somewhere in a tag
    assert!(!genre_matches(&tags, "rock"));

    // Exact tag matches too
    assert!(genre_matches(&genres(&["r&b"]), "r&b"));
}

#[test]
fn test_genre_matches_ignores_case() {
    // Uppercase tag against lowercase target
    assert!(genre_matches(&genres(&["Contemporary R&B"]), "r&b"));

    // Lowercase tag against uppercase target
    assert!(genre_matches(&genres(&["alternative r&b"]), "R&B"));
}

#[test]
fn test_genre_matches_empty_tag_list() {
    assert!(!genre_matches(&[], "r&b"));
}

#[test]
fn test_unique_artist_ids_deduplicates() {
    let pairs: HashSet<TrackArtistPair> = [
        pair("spotify:track:1", "artist_a"),
        pair("spotify:track:2", "artist_a"),
        pair("spotify:track:3", "artist_b"),
    ]
    .into_iter()
    .collect();

    let ids = unique_artist_ids(&pairs);

    // Two tracks of the same artist yield one id
    assert_eq!(ids.len(), 2);
    assert!(ids.contains("artist_a"));
    assert!(ids.contains("artist_b"));
}

#[test]
fn test_unique_artist_ids_skips_empty_ids() {
    let pairs: HashSet<TrackArtistPair> = [
        pair("spotify:track:1", "artist_a"),
        pair("spotify:track:2", ""),
    ]
    .into_iter()
    .collect();

    let ids = unique_artist_ids(&pairs);

    assert_eq!(ids.len(), 1);
    assert!(!ids.contains(""));
}

#[test]
fn test_unique_artist_ids_is_idempotent() {
    let pairs: HashSet<TrackArtistPair> = [
        pair("spotify:track:1", "artist_a"),
        pair("spotify:track:2", "artist_b"),
        pair("spotify:track:3", "artist_b"),
    ]
    .into_iter()
    .collect();

    let first = unique_artist_ids(&pairs);
    let second = unique_artist_ids(&pairs);

    assert_eq!(first, second);
}

#[test]
fn test_matching_tracks_filters_by_approved_set() {
    let pairs: HashSet<TrackArtistPair> = [
        pair("spotify:track:1", "artist_a"),
        pair("spotify:track:2", "artist_b"),
        pair("spotify:track:3", "artist_a"),
    ]
    .into_iter()
    .collect();

    let approved: HashSet<String> = ["artist_a".to_string()].into_iter().collect();
    let tracks = matching_tracks(&pairs, &approved);

    assert_eq!(tracks.len(), 2);
    assert!(tracks.contains("spotify:track:1"));
    assert!(tracks.contains("spotify:track:3"));
    assert!(!tracks.contains("spotify:track:2"));
}

#[test]
fn test_matching_tracks_empty_approved_set() {
    let pairs: HashSet<TrackArtistPair> =
        [pair("spotify:track:1", "artist_a")].into_iter().collect();

    let tracks = matching_tracks(&pairs, &HashSet::new());

    assert!(tracks.is_empty());
}

#[test]
fn test_matching_tracks_is_deterministic() {
    let pairs: HashSet<TrackArtistPair> = (0..50)
        .map(|i| pair(&format!("spotify:track:{}", i), &format!("artist_{}", i % 7)))
        .collect();
    let approved: HashSet<String> = ["artist_0".to_string(), "artist_3".to_string()]
        .into_iter()
        .collect();

    let first = matching_tracks(&pairs, &approved);
    let second = matching_tracks(&pairs, &approved);

    assert_eq!(first, second);
}

#[test]
fn test_track_batches_chunking() {
    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:{}", i)).collect();

    let batches = track_batches(&uris);

    // ceil(250 / 100) batches
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 100);
    assert_eq!(batches[1].len(), 100);
    assert_eq!(batches[2].len(), 50);

    // Contiguous, in-order slices with boundaries at multiples of 100
    assert_eq!(batches[0][0], "spotify:track:0");
    assert_eq!(batches[0][99], "spotify:track:99");
    assert_eq!(batches[1][0], "spotify:track:100");
    assert_eq!(batches[2][49], "spotify:track:249");
}

#[test]
fn test_track_batches_exact_multiple() {
    let uris: Vec<String> = (0..200).map(|i| format!("spotify:track:{}", i)).collect();

    let batches = track_batches(&uris);

    // The last batch holds 100 items when N is a multiple of 100
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].len(), 100);
}

#[test]
fn test_track_batches_small_and_empty_inputs() {
    let uris: Vec<String> = (0..7).map(|i| format!("spotify:track:{}", i)).collect();
    let batches = track_batches(&uris);
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 7);

    let empty: Vec<String> = Vec::new();
    assert!(track_batches(&empty).is_empty());
}

#[test]
fn test_basic_auth_value_encoding() {
    let value = basic_auth_value("my_client", "my_secret");

    assert!(value.starts_with("Basic "));

    let encoded = value.trim_start_matches("Basic ");
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(decoded, b"my_client:my_secret");
}
