use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{errors::Error, utils};

/// Result set of a run: album id mapped to that album's track list.
///
/// Keys keep the order in which albums were discovered. An album is only
/// added once its track pagination has finished, successfully or not.
pub struct AlbumItemsManager {
    album_items: Map<String, Value>,
}

impl AlbumItemsManager {
    pub fn new() -> Self {
        Self {
            album_items: Map::new(),
        }
    }

    pub fn add_album_tracks(&mut self, album_id: &str, tracks: Vec<Value>) -> &mut Self {
        self.album_items
            .insert(album_id.to_string(), Value::Array(tracks));
        self
    }

    pub fn get_tracks_for_album(&self, album_id: &str) -> Option<&Vec<Value>> {
        self.album_items.get(album_id).and_then(Value::as_array)
    }

    pub fn count_albums(&self) -> usize {
        self.album_items.len()
    }

    pub fn count_tracks(&self) -> usize {
        self.album_items
            .values()
            .map(|tracks| tracks.as_array().map_or(0, Vec::len))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.album_items.is_empty()
    }

    pub fn all(&self) -> &Map<String, Value> {
        &self.album_items
    }

    /// Writes the result set as indented JSON to
    /// `<dir>/album_items_<YYYYMMDD_HHMMSS>.json` and returns the path.
    ///
    /// `dir` is created if missing. Filesystem failures come back as
    /// [`Error::Io`].
    pub async fn persist(&self, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf, Error> {
        async_fs::create_dir_all(dir).await?;

        let path = dir.join(utils::output_file_name(now));
        let json = serde_json::to_string_pretty(&self.album_items)?;
        async_fs::write(&path, json).await?;

        Ok(path)
    }

    /// Reads a result file written by [`persist`](Self::persist).
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let content = async_fs::read_to_string(path).await?;
        let album_items: Map<String, Value> = serde_json::from_str(&content)?;
        Ok(Self { album_items })
    }
}

impl Default for AlbumItemsManager {
    fn default() -> Self {
        Self::new()
    }
}
