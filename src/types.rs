use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access token returned by the token exchange endpoint.
///
/// Short-lived; obtained once per run and passed explicitly to every
/// component that talks to the Web API. Never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub scope: Option<String>,
    pub expires_in: u64,
}

/// One (track, primary artist) observation from the source playlist.
///
/// Keyed by the full pair: the same track/artist combination collapses on
/// insertion, while the same artist under different tracks is retained per
/// pair. An empty `artist_id` is legal but will never match a genre lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackArtistPair {
    pub track_uri: String,
    pub artist_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// One page of the playlist-tracks listing. `next` carries the absolute URL
/// of the following page, or null on the terminal page.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

/// A playlist entry. `track` is null for entries whose track is no longer
/// available.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

/// Artist reference embedded in a track object. Local tracks may carry
/// artists without an id.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Row of the `preview` output table.
#[derive(Tabled)]
pub struct MatchTableRow {
    pub artist: String,
    pub genres: String,
    pub tracks: usize,
}
