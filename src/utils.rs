use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{errors::Error, types::AlbumTableRow};

/// Prefix of every output file name.
pub const OUTPUT_FILE_PREFIX: &str = "album_items_";

/// Extracts the `id` of every release item, in listing order.
///
/// Every new release is expected to carry a string `id`; the first item
/// without one fails the whole extraction.
pub fn album_ids(releases: &[Value]) -> Result<Vec<String>, Error> {
    releases
        .iter()
        .enumerate()
        .map(|(index, album)| {
            album
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(Error::MissingField { index, field: "id" })
        })
        .collect()
}

/// Builds the output file name for a run started at `now`, e.g.
/// `album_items_20240131_235959.json`.
pub fn output_file_name(now: DateTime<Utc>) -> String {
    format!(
        "{prefix}{stamp}.json",
        prefix = OUTPUT_FILE_PREFIX,
        stamp = now.format("%Y%m%d_%H%M%S")
    )
}

/// Checks whether `name` looks like a file produced by [`output_file_name`].
pub fn is_output_file_name(name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix(OUTPUT_FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(".json"))
    else {
        return false;
    };

    match stamp.split_once('_') {
        Some((date, time)) => {
            date.len() == 8
                && time.len() == 6
                && date.chars().all(|c| c.is_ascii_digit())
                && time.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

pub fn summary_rows(album_items: &Map<String, Value>) -> Vec<AlbumTableRow> {
    album_items
        .iter()
        .map(|(album_id, tracks)| AlbumTableRow {
            album_id: album_id.clone(),
            tracks: tracks.as_array().map_or(0, Vec::len),
        })
        .collect()
}
