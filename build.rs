//! Build script for the Spotify New Releases Extractor.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to where the application looks for its fallback
//! `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to `<local data dir>/newrel/`.
///
/// - Linux: `~/.local/share/newrel/.env.example`
/// - macOS: `~/Library/Application Support/newrel/.env.example`
/// - Windows: `%LOCALAPPDATA%/newrel/.env.example`
///
/// A missing template or an unwritable data directory only produces a
/// cargo warning.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("newrel");

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        let copied = fs::create_dir_all(&out_dir)
            .and_then(|_| fs::write(out_dir.join(".env.example"), contents));
        if let Err(e) = copied {
            println!(
                "cargo:warning=cannot copy .env.example to {}: {}",
                out_dir.display(),
                e
            );
        }
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
