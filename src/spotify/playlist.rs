use crate::{
    config,
    error::Error,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
    utils,
};

/// Creates a new playlist owned by the configured user.
///
/// One external call; a non-success status is fatal for the publishing
/// stage and population is never attempted afterwards.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `name` - Display name of the new playlist
/// * `description` - Playlist description shown in clients
/// * `public` - Whether the playlist is publicly visible
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - id and name of the created playlist
/// - `Err(Error::Create)` - The endpoint answered with a non-success status
/// - `Err(Error::Http)` - Transport-level failure
pub async fn create(
    token: &str,
    name: String,
    description: String,
    public: bool,
) -> Result<CreatePlaylistResponse, Error> {
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = &config::spotify_user()
    );

    let request = CreatePlaylistRequest {
        name,
        description,
        public,
        collaborative: false,
    };

    let client = super::http_client()?;
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Create { status, body });
    }

    Ok(response.json::<CreatePlaylistResponse>().await?)
}

/// Appends tracks to a playlist in batches of at most 100 uris.
///
/// Validates its inputs before making any external call: an empty token,
/// playlist id, or track list fails fast with [`Error::Validation`]. The
/// uris are then partitioned into contiguous in-order chunks
/// ([`utils::track_batches`]) and appended one call per chunk.
///
/// # Failure Semantics
///
/// The first bad status or malformed response body aborts the stage:
/// remaining batches are not attempted and the function reports failure,
/// even though batches already appended stay on the remote playlist. There
/// is no rollback.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(usize)` - the number of batches appended
/// - `Err(Error::Validation)` - empty token, playlist id, or track list
/// - `Err(Error::Populate)` - a batch was rejected or its response body
///   could not be decoded
/// - `Err(Error::Http)` - Transport-level failure
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    track_uris: &[String],
) -> Result<usize, Error> {
    if token.is_empty() {
        return Err(Error::Validation("access token is empty".to_string()));
    }
    if playlist_id.is_empty() {
        return Err(Error::Validation("playlist id is empty".to_string()));
    }
    if track_uris.is_empty() {
        return Err(Error::Validation("track list is empty".to_string()));
    }

    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let batches = utils::track_batches(track_uris);
    for (index, batch) in batches.iter().enumerate() {
        let request = AddTrackToPlaylistRequest {
            uris: batch.clone(),
        };

        let client = super::http_client()?;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Populate {
                batch: index + 1,
                detail: format!("status {}: {}", status, body),
            });
        }

        response
            .json::<AddTrackToPlaylistResponse>()
            .await
            .map_err(|e| Error::Populate {
                batch: index + 1,
                detail: format!("malformed response body: {}", e),
            })?;
    }

    Ok(batches.len())
}
