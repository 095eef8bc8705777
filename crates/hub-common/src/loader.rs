//! Loading hub records from a JSON array on disk.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{HubError, HubResult};
use crate::hub::HubRecord;

/// Read and parse the hub file at `path`.
pub fn load_hubs(path: impl AsRef<Path>) -> HubResult<Vec<HubRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| HubError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let hubs = parse_hubs(&text)?;
    info!(path = %path.display(), count = hubs.len(), "Loaded hub records");
    Ok(hubs)
}

/// Parse a JSON array of `{"name": ..., "polygon": ...}` objects.
pub fn parse_hubs(text: &str) -> HubResult<Vec<HubRecord>> {
    let hubs: Vec<HubRecord> = serde_json::from_str(text)?;
    debug!(hubs = ?hubs, "Parsed hub list");
    Ok(hubs)
}
