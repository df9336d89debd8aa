use crate::{config, error::Error, types::Artist};

/// Retrieves a single artist, including its genre tags, from the Spotify Web API.
///
/// One lookup per distinct artist is issued by the genre classifier; the
/// genre tags on the returned [`Artist`] drive the match decision.
///
/// # Arguments
///
/// * `artist_id` - Spotify ID of the artist to fetch
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Artist)` - The artist with id, name, and genre tags
/// - `Err(Error::Lookup)` - The endpoint answered with a non-success status
/// - `Err(Error::Http)` - Transport-level failure
///
/// # Error Handling
///
/// Failures are per-artist: the classifier logs them and omits the artist
/// from the approved set; a single failed lookup never aborts the
/// classification stage.
///
/// # Example
///
/// ```
/// let artist = get_artist("4NHQUGzhtTLFvgF5SZesLK", token).await?;
/// println!("{} is tagged {:?}", artist.name, artist.genres);
/// ```
pub async fn get_artist(artist_id: &str, token: &str) -> Result<Artist, Error> {
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = artist_id
    );

    let client = super::http_client()?;
    let response = client.get(&api_url).bearer_auth(token).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Lookup {
            artist_id: artist_id.to_string(),
            status,
        });
    }

    Ok(response.json::<Artist>().await?)
}
