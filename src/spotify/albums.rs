use serde_json::Value;

use crate::{
    spotify::{TokenProvider, fetch_all},
    types::Paging,
};

/// Retrieves every track of a single album.
///
/// Walks `/albums/{id}/tracks` page by page, returning the simplified
/// track objects verbatim. An empty vector means either an album without
/// tracks or a listing that failed part way.
pub async fn get_album_tracks<T: TokenProvider>(
    api_url: &str,
    album_id: &str,
    access_token: Option<&str>,
    refresher: &T,
) -> Vec<Value> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks",
        uri = api_url,
        id = album_id
    );
    fetch_all::<Paging, T>(&api_url, access_token, refresher).await
}
