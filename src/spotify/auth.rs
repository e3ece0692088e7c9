use std::future::Future;

use reqwest::Client;

use crate::{
    errors::Error,
    types::{Credentials, Token},
    warning,
};

/// Source of fresh access tokens for the paginated fetcher.
///
/// The fetcher calls [`TokenProvider::fetch_token`] whenever a request is
/// rejected with 401 Unauthorized. A token without an `access_token`
/// field counts as a failed refresh.
pub trait TokenProvider {
    fn fetch_token(&self) -> impl Future<Output = Token>;
}

impl TokenProvider for Credentials {
    fn fetch_token(&self) -> impl Future<Output = Token> {
        get_token(&self.client_id, &self.client_secret, &self.token_url)
    }
}

/// Requests an access token with the OAuth 2.0 client-credentials grant.
///
/// Sends a single form-encoded `POST` to `token_url` and returns the
/// decoded JSON body unchanged, whatever the HTTP status was. Error
/// responses therefore come back as a token without `access_token`.
///
/// # Arguments
///
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Spotify application client secret
/// * `token_url` - Token endpoint, usually `https://accounts.spotify.com/api/token`
///
/// # Returns
///
/// The provider's response as a [`Token`]. On a network failure or a body
/// that is not a JSON object the error is logged and an empty token is
/// returned instead.
///
/// # Example
///
/// ```
/// let token = get_token("abc123", "def456", config::SPOTIFY_API_TOKEN_URL).await;
/// if let Some(access_token) = token.access_token() {
///     println!("Got token: {}", access_token);
/// }
/// ```
pub async fn get_token(client_id: &str, client_secret: &str, token_url: &str) -> Token {
    match request_token(client_id, client_secret, token_url).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Error: {}", e);
            Token::default()
        }
    }
}

async fn request_token(
    client_id: &str,
    client_secret: &str,
    token_url: &str,
) -> Result<Token, Error> {
    let client = Client::new();
    let res = client
        .post(token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await?;

    let body = res.bytes().await?;
    let token: Token = serde_json::from_slice(&body)?;

    Ok(token)
}
