//! # Spotify Integration Module
//!
//! This module is the integration layer between newrel and the Spotify Web
//! API. It handles the client-credentials token exchange and walks cursor
//! paginated listings.
//!
//! ## Architecture
//!
//! ```text
//! Orchestrator (cli::extract)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Pagination (fetch_all)
//!     ├── New Releases (browse/new-releases)
//!     └── Album Tracks (albums/{id}/tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Failure Model
//!
//! Nothing in this module returns an error to its caller. A failed token
//! request yields an empty [`Token`](crate::types::Token); a failed
//! pagination yields an empty item list, even if earlier pages had been
//! fetched. There is no retry and no rate limit handling: a 429 response
//! fails to decode as a page and aborts the listing like any other error.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials grant
//! - `GET /browse/new-releases` - paging object nested under `albums`
//! - `GET /albums/{id}/tracks` - top-level paging object

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{errors::Error, info, success, types::Page, warning};

pub mod albums;
pub mod auth;
pub mod releases;

pub use auth::{TokenProvider, get_token};

/// Retrieves every item of a cursor paginated listing.
///
/// Starts at `start_url` and keeps following the `next` URL of each page
/// until it is null, collecting the items of all pages in order. The page
/// type `P` decides where the items and the cursor live in the response.
///
/// # Token Refresh
///
/// A 401 Unauthorized response triggers `refresher`. When it hands back an
/// `access_token`, the same URL is requested again with the new bearer
/// token and nothing from the 401 response is kept. Otherwise the listing
/// is abandoned.
///
/// # Returns
///
/// All items on success. An empty vector when a refresh fails or any
/// request or decode fails; items gathered from earlier pages are
/// discarded in that case.
///
/// # Example
///
/// ```
/// let albums = fetch_all::<NewReleasesResponse, _>(
///     "https://api.spotify.com/v1/browse/new-releases",
///     token.access_token(),
///     &credentials,
/// )
/// .await;
/// ```
pub async fn fetch_all<P, T>(
    start_url: &str,
    access_token: Option<&str>,
    refresher: &T,
) -> Vec<Value>
where
    P: Page,
    T: TokenProvider,
{
    match try_fetch_all::<P, T>(start_url, access_token, refresher).await {
        Ok(items) => items,
        Err(Error::TokenRefresh) => {
            warning!("Failed to refresh token.");
            Vec::new()
        }
        Err(e) => {
            warning!("Error occurred during request: {}", e);
            Vec::new()
        }
    }
}

async fn try_fetch_all<P, T>(
    start_url: &str,
    access_token: Option<&str>,
    refresher: &T,
) -> Result<Vec<Value>, Error>
where
    P: Page,
    T: TokenProvider,
{
    let client = Client::new();
    let mut token = access_token.unwrap_or_default().to_string();
    let mut current_url = Some(start_url.to_string());
    let mut items = Vec::new();

    while let Some(url) = current_url.take() {
        info!("Requesting to: {}", url);
        let response = client.get(&url).bearer_auth(&token).send().await?;
        info!("Response status: {}", response.status());

        if response.status() == StatusCode::UNAUTHORIZED {
            let refreshed = refresher.fetch_token().await;
            match refreshed.access_token() {
                Some(new_token) => {
                    token = new_token.to_string();
                    success!("Token has been refreshed");
                    current_url = Some(url);
                    continue;
                }
                None => return Err(Error::TokenRefresh),
            }
        }

        let body = response.bytes().await?;
        let (page_items, next) = serde_json::from_slice::<P>(&body)?.into_parts();
        items.extend(page_items);
        current_url = next;
    }

    Ok(items)
}
