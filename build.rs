//! Build script for the Obscurify backend.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory, next to the `.env` file that `config::load_env` reads, so a fresh
//! install has a template to start from.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to the local data directory.
///
/// # Destination Location
///
/// - Linux: `~/.local/share/obscurify/.env.example`
/// - macOS: `~/Library/Application Support/obscurify/.env.example`
/// - Windows: `%LOCALAPPDATA%/obscurify/.env.example`
///
/// # Error Handling Strategy
///
/// A missing template or an unwritable data directory only produces a cargo
/// warning: the crate builds fine without the copy, for example in sandboxed
/// CI where the home directory is read-only.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("obscurify");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
