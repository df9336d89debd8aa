use reqwest::{StatusCode, header::AUTHORIZATION};

use crate::{config, error::Error, types::Token, utils};

/// Exchanges the configured refresh credential for a short-lived access token.
///
/// Performs a single token-exchange call with grant type "refresh_token",
/// authenticating with the pre-shared client id and secret as an HTTP
/// basic-auth header. This is the only call in the application that does not
/// use bearer authentication.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - The deserialized token response; `access_token` is handed
///   to every downstream component
/// - `Err(Error::Auth)` - The endpoint answered with a non-200 status; the
///   variant carries the status and response body
/// - `Err(Error::Http)` - Transport-level failure
///
/// # Error Handling
///
/// Any failure here is fatal for the run: the caller must not retry and
/// cannot proceed without a bearer token.
///
/// # Example
///
/// ```
/// let token = request_access_token().await?;
/// println!("token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_access_token() -> Result<Token, Error> {
    let refresh_token = config::spotify_refresh_token();
    let auth_header =
        utils::basic_auth_value(&config::spotify_client_id(), &config::spotify_client_secret());

    let client = super::http_client()?;
    let response = client
        .post(config::spotify_apitoken_url())
        .header(AUTHORIZATION, auth_header)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", &refresh_token),
        ])
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Auth { status, body });
    }

    Ok(response.json::<Token>().await?)
}
