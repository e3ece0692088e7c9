//! Configuration management for the Spotify New Releases Extractor.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage the Spotify API credentials and endpoints.
//!
//! The configuration system follows a hierarchical approach:
//! 1. `.env` file in the current working directory (highest priority)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::types::Credentials;

/// Default Spotify OAuth token endpoint.
pub const SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default Spotify Web API base URL.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from `.env` files.
///
/// The `.env` file in the current working directory is applied first and
/// overrides variables already set in the shell. The file in the
/// platform-specific local data directory under `newrel/.env` is applied
/// afterwards and only fills in variables that are still unset.
///
/// Must be called before any other thread is started, since it mutates
/// the process environment.
///
/// # Directory Structure
///
/// The fallback `.env` file is looked up in:
/// - Linux: `~/.local/share/newrel/.env`
/// - macOS: `~/Library/Application Support/newrel/.env`
/// - Windows: `%LOCALAPPDATA%/newrel/.env`
///
/// # Errors
///
/// Missing files are skipped. A file that exists but cannot be read or
/// parsed results in an error string.
pub fn load_env() -> Result<(), String> {
    override_env_file(Path::new(".env"))?;
    load_env_file(&data_env_path())
}

/// Applies every variable of the `.env` file at `path`, replacing values
/// already present in the process environment.
///
/// Same single-thread requirement as [`load_env`].
pub fn override_env_file(path: &Path) -> Result<(), String> {
    let iter = match dotenv::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(()),
        Err(e) => return Err(format!("{}: {}", path.display(), e)),
    };

    for item in iter {
        let (key, value) = item.map_err(|e| format!("{}: {}", path.display(), e))?;
        // SAFETY: only called while the process is still single-threaded.
        unsafe { env::set_var(key, value) };
    }

    Ok(())
}

/// Applies the variables of the `.env` file at `path` that are not set yet.
pub fn load_env_file(path: &Path) -> Result<(), String> {
    match dotenv::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("newrel/.env");
    path
}

/// Returns the Spotify API client ID.
///
/// Reads `CLIENT_ID`; an unset variable yields an empty string, which the
/// token endpoint will simply reject.
pub fn client_id() -> String {
    env::var("CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify API client secret.
///
/// Reads `CLIENT_SECRET`; an unset variable yields an empty string.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn client_secret() -> String {
    env::var("CLIENT_SECRET").unwrap_or_default()
}

/// Returns the Spotify OAuth token URL.
///
/// `SPOTIFY_API_TOKEN_URL` overrides [`SPOTIFY_API_TOKEN_URL`].
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// `SPOTIFY_API_URL` overrides [`SPOTIFY_API_URL`].
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| SPOTIFY_API_URL.to_string())
}

/// Everything a single extraction run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub api_url: String,
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn from_env(output_dir: &Path) -> Self {
        Settings {
            credentials: Credentials {
                client_id: client_id(),
                client_secret: client_secret(),
                token_url: spotify_apitoken_url(),
            },
            api_url: spotify_apiurl(),
            output_dir: output_dir.to_path_buf(),
        }
    }
}
