//! # CLI Module
//!
//! This module provides the command-line layer for newrel. There is a single
//! operation: extract the current Spotify new releases together with the
//! tracks of every album and store them in a timestamped JSON file.
//!
//! ## Data Flow
//!
//! 1. **Authentication**: Request a client-credentials token
//! 2. **Release Listing**: Page through `/browse/new-releases`
//! 3. **Track Fan-out**: Page through `/albums/{id}/tracks` for each album,
//!    one album at a time
//! 4. **Persistence**: Write `album_items_<YYYYMMDD_HHMMSS>.json`
//!
//! ## Error Handling
//!
//! Failed requests are reported as warnings and leave empty results
//! behind; the run carries on with what it has. Only malformed release
//! data or a failed file write stops the program.
//!
//! ## Usage
//!
//! ```bash
//! newrel                          # Write the result into the current directory
//! newrel --output-dir ./dumps     # Write the result somewhere else
//! ```

mod extract;
mod progress;

pub use extract::extract;
pub use extract::run;
pub use progress::AlbumProgress;
