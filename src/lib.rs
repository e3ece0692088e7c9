//! Spotify New Releases Extractor Library
//!
//! This library pulls the Spotify "new releases" album listing together with
//! the track listing of every album and stores the result as a timestamped
//! JSON file. It handles client-credentials authentication and cursor based
//! pagination with reactive token refresh.
//!
//! # Modules
//!
//! - `cli` - Command-line pipeline implementation
//! - `config` - Configuration management and environment variables
//! - `errors` - Error type for the HTTP layer
//! - `management` - Result set handling and persistence
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use newrel::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> newrel::Res<()> {
//!     config::load_env()?;
//!     cli::extract(std::path::Path::new(".")).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the orchestration layer where failures of different kinds
/// (HTTP, storage, malformed release data) end up in the same place.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Requesting to: {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Token has been refreshed");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for failures the run cannot continue from. Recoverable failures go
/// through [`warning!`] instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for failures that are logged and then collapsed into an empty
/// result, such as a failed token request or an aborted pagination.
///
/// # Example
///
/// ```
/// warning!("Failed to refresh token.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
