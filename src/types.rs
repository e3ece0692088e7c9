use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Client credentials used for the OAuth2 client-credentials grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

/// Raw token endpoint response.
///
/// Kept as the decoded JSON object so every provider supplied field
/// survives. An empty token signals a failed request; callers check for
/// the presence of `access_token` instead of an error value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub Map<String, Value>);

impl Token {
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    pub fn token_type(&self) -> Option<&str> {
        self.0.get("token_type").and_then(Value::as_str)
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.0.get("expires_in").and_then(Value::as_u64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single page of a cursor paginated listing.
///
/// Implementors know where their response nests the item list and the
/// URL of the following page. `None` marks the last page.
pub trait Page: DeserializeOwned {
    fn into_parts(self) -> (Vec<Value>, Option<String>);
}

/// Plain paging object with `items` and `next` at the top level, as
/// returned by `/albums/{id}/tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging {
    pub items: Vec<Value>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Page for Paging {
    fn into_parts(self) -> (Vec<Value>, Option<String>) {
        (self.items, self.next)
    }
}

/// Paging object of `/browse/new-releases`.
///
/// Unlike [`Paging`], the `next` key must be present. A null value still
/// marks the last page; a page without the key is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleasesPaging {
    pub items: Vec<Value>,
    #[serde(deserialize_with = "present_or_null")]
    pub next: Option<String>,
}

// serde fills a missing plain `Option` field with `None`; going through
// `deserialize_with` turns the missing key into an error instead.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Response of `/browse/new-releases`, which wraps its paging object
/// in an `albums` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReleasesResponse {
    pub albums: ReleasesPaging,
}

impl Page for NewReleasesResponse {
    fn into_parts(self) -> (Vec<Value>, Option<String>) {
        (self.albums.items, self.albums.next)
    }
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    #[tabled(rename = "Album")]
    pub album_id: String,
    #[tabled(rename = "Tracks")]
    pub tracks: usize,
}
