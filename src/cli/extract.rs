use std::path::{Path, PathBuf};

use chrono::Utc;
use tabled::Table;

use crate::{
    Res,
    cli::AlbumProgress,
    config::Settings,
    error, info,
    management::AlbumItemsManager,
    spotify::{albums, get_token, releases},
    success, utils, warning,
};

/// Runs the extraction with settings taken from the environment and
/// reports the outcome.
///
/// Terminates the process with exit code 1 if the run fails with an
/// unrecoverable error, such as a release without an `id`.
pub async fn extract(output_dir: &Path) {
    let settings = Settings::from_env(output_dir);

    match run(&settings).await {
        Ok(Some(path)) => success!("Data has been saved successfully to {}", path.display()),
        Ok(None) => warning!("No data was available to be saved."),
        Err(e) => error!("Extraction failed: {}", e),
    }
}

/// Fetches all new releases and their tracks, then persists the result.
///
/// The initial token is requested once and never validated; if it is
/// missing, the first API call answers 401 and the fetcher refreshes it.
/// Albums are processed strictly one after another, each starting from
/// the initial token.
///
/// # Returns
///
/// - `Ok(Some(path))` - the result file that was written
/// - `Ok(None)` - no album was found, nothing was written
/// - `Err(_)` - a release item had no `id` or the file could not be written
pub async fn run(settings: &Settings) -> Res<Option<PathBuf>> {
    let credentials = &settings.credentials;
    let token = get_token(
        &credentials.client_id,
        &credentials.client_secret,
        &credentials.token_url,
    )
    .await;

    let new_releases =
        releases::get_new_releases(&settings.api_url, token.access_token(), credentials).await;
    info!(
        "New album releases have been extracted {}",
        new_releases.len()
    );

    let album_ids = utils::album_ids(&new_releases)?;
    info!(
        "Total number of new album releases extracted: {}",
        album_ids.len()
    );
    info!("Processing track information for each album");

    let progress = AlbumProgress::new(album_ids.len() as u64);

    let mut album_items = AlbumItemsManager::new();
    for album_id in &album_ids {
        progress.before_fetch();

        let tracks = albums::get_album_tracks(
            &settings.api_url,
            album_id,
            token.access_token(),
            credentials,
        )
        .await;
        album_items.add_album_tracks(album_id, tracks);

        success!("Album {} has been processed successfully", album_id);
        progress.album_done(album_id);
    }
    progress.finish();

    if album_items.is_empty() {
        return Ok(None);
    }

    let path = album_items
        .persist(&settings.output_dir, Utc::now())
        .await?;

    let table = Table::new(utils::summary_rows(album_items.all()));
    println!(
        "Albums: {albums}\tTracks: {tracks}\n{table}\n",
        albums = album_items.count_albums(),
        tracks = album_items.count_tracks(),
        table = table
    );

    Ok(Some(path))
}
