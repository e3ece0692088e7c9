use serde_json::Value;

use crate::{
    spotify::{TokenProvider, fetch_all},
    types::NewReleasesResponse,
};

/// Retrieves the complete new releases listing.
///
/// Walks `/browse/new-releases` page by page. Items are the album objects
/// exactly as Spotify returns them.
///
/// # Arguments
///
/// * `api_url` - Spotify Web API base URL, e.g. `https://api.spotify.com/v1`
/// * `access_token` - Current access token, if the initial request succeeded
/// * `refresher` - Used to obtain a new token on 401 Unauthorized
///
/// # Returns
///
/// All album objects, or an empty vector if any page could not be fetched.
pub async fn get_new_releases<T: TokenProvider>(
    api_url: &str,
    access_token: Option<&str>,
    refresher: &T,
) -> Vec<Value> {
    let api_url = format!("{uri}/browse/new-releases", uri = api_url);
    fetch_all::<NewReleasesResponse, T>(&api_url, access_token, refresher).await
}
