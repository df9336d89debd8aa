//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API operations the
//! pipeline needs: token exchange, paginated playlist-track retrieval,
//! artist genre lookup, and playlist creation and population. It handles all
//! HTTP communication, JSON decoding, and the mapping of bad responses onto
//! the structured errors in [`crate::error`].
//!
//! ## Architecture
//!
//! Each submodule covers one domain of the Web API:
//!
//! ```text
//! Application Layer (CLI, Pipeline)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (refresh-token exchange)
//!     ├── Track Retrieval (cursor-paginated playlist listing)
//!     ├── Artist Lookup (genre tags)
//!     └── Playlist Operations (create, batched append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - refresh-token exchange (basic auth)
//! - `GET /playlists/{id}/tracks` - playlist tracks with `next`-URL pagination
//! - `GET /artists/{id}` - single artist with genre tags
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - append up to 100 uris per call
//!
//! All calls except the token exchange authenticate with a bearer token in
//! the Authorization header. The token is an explicit parameter of every
//! function; nothing here reads ambient credential state.
//!
//! ## Error Handling
//!
//! Functions return `Result<_, crate::error::Error>`. Non-success statuses
//! become the stage-specific variant; transport failures pass through as
//! `Error::Http`. Whether a failure is fatal is the caller's policy, not
//! this layer's: page and lookup failures are absorbed upstream, while
//! auth, create, and append failures abort the run.
//!
//! Every client carries a fixed request timeout so a hung call cannot stall
//! the pipeline indefinitely. There is no retry or backoff.

use std::time::Duration;

use reqwest::Client;

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod tracks;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}
