// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! Label font lookup and caching.
//!
//! Fonts are cached under the user config directory and downloaded on first
//! use. Every function here degrades to `None` on failure; callers skip label
//! drawing rather than failing the render.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Assets URL for downloading fonts
const ASSETS_URL: &str = "https://github.com/pose-render/assets/releases/download/v0.1.0";

/// Default label font.
pub const DEFAULT_FONT: &str = "DejaVuSans.ttf";

/// Check if a font exists locally or download it.
pub fn check_font(font: &str) -> Option<PathBuf> {
    let font_name = Path::new(font).file_name()?.to_string_lossy();
    let config_dir = dirs::config_dir()?.join("pose-render");
    let font_path = config_dir.join(font_name.as_ref());

    if font_path.exists() {
        return Some(font_path);
    }

    if let Err(e) = fs::create_dir_all(&config_dir) {
        eprintln!("Failed to create config directory: {e}");
        return None;
    }

    let url = format!("{ASSETS_URL}/{font_name}");
    println!("Downloading {url} to {}", font_path.display());

    match ureq::get(&url).call() {
        Ok(response) => {
            let mut file = match File::create(&font_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Failed to create font file: {e}");
                    return None;
                }
            };

            let mut reader = response.into_body().into_reader();
            if let Err(e) = io::copy(&mut reader, &mut file) {
                eprintln!("Failed to download font: {e}");
                // Remove the partial file so the next run retries
                let _ = fs::remove_file(&font_path);
                return None;
            }

            Some(font_path)
        }
        Err(e) => {
            eprintln!("Failed to download font from {url}: {e}");
            None
        }
    }
}

/// Load the default label font's raw bytes from the cache (downloading if
/// needed).
pub fn load_font_bytes() -> Option<Vec<u8>> {
    let path = check_font(DEFAULT_FONT)?;
    let mut file = File::open(path).ok()?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).ok()?;
    Some(buffer)
}
