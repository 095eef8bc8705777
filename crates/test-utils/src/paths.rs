//! Path utilities for locating test assets.
//!
//! Fonts are not checked into the repository, so tests that rasterize text
//! look for one across common system locations.

use std::path::PathBuf;

/// Font locations tried after `TEST_FONT_PATH`, in order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/gnu-free/FreeMono.otf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "/Library/Fonts/Courier New.ttf",
];

/// Returns the workspace root directory.
///
/// This is determined by walking up from the current crate's manifest directory
/// until we find the workspace Cargo.toml.
pub fn workspace_root() -> PathBuf {
    // Start from the test-utils crate manifest dir
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Searches for a font file usable by label rendering tests.
///
/// This function checks the following locations in order:
/// 1. Environment variable `TEST_FONT_PATH` (if set)
/// 2. `testdata/` at the workspace root (`*.ttf` / `*.otf`)
/// 3. Common system font paths
///
/// # Returns
///
/// `Some(PathBuf)` if a font is found, `None` otherwise.
pub fn find_test_font() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(font) = std::env::var("TEST_FONT_PATH") {
        candidates.push(PathBuf::from(font));
    }

    if let Ok(entries) = std::fs::read_dir(workspace_root().join("testdata")) {
        let mut local: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("ttf") | Some("otf")
                )
            })
            .collect();
        local.sort();
        candidates.extend(local);
    }

    candidates.extend(FONT_CANDIDATES.iter().map(PathBuf::from));

    candidates.into_iter().find(|path| path.is_file())
}

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        // Should contain Cargo.toml at workspace level
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_find_test_font_returns_existing_file() {
        if let Some(path) = find_test_font() {
            assert!(path.is_file());
        }
    }

    #[test]
    fn test_temp_test_dir() {
        let dir = temp_test_dir();
        assert!(dir.path().exists());
        // Dir is cleaned up when dropped
    }
}
