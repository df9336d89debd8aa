//! Structured error values for the pipeline stages.
//!
//! Every stage failure is represented as a variant carrying the stage's
//! context (status code, offending URL, artist id, batch number) so the
//! caller can log or surface it without string parsing. The propagation
//! policy lives with the callers: track-page and artist-lookup failures are
//! absorbed and logged, while authentication, playlist creation, and track
//! population failures abort the run.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Token exchange was answered with a non-200 status. Fatal for the run.
    #[error("token exchange failed ({status}): {body}")]
    Auth { status: StatusCode, body: String },

    /// A playlist-tracks page was answered with a non-success status.
    /// Pagination stops early and partial results are kept.
    #[error("tracks page request failed ({status}): {url}")]
    Fetch { status: StatusCode, url: String },

    /// A single artist lookup failed; the artist is omitted from the
    /// approved set.
    #[error("genre lookup for artist {artist_id} failed ({status})")]
    Lookup {
        artist_id: String,
        status: StatusCode,
    },

    /// Playlist creation was answered with a non-success status. Fatal;
    /// population is not attempted.
    #[error("playlist creation failed ({status}): {body}")]
    Create { status: StatusCode, body: String },

    /// A batch append failed. Remaining batches are not attempted; batches
    /// already appended stay on the remote playlist.
    #[error("failed to add batch {batch} to playlist: {detail}")]
    Populate { batch: usize, detail: String },

    /// Input checks before any external call was made.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Transport-level failure from the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
