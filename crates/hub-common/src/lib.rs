//! Common types shared across the hub-map workspace.

pub mod error;
pub mod hub;
pub mod loader;

pub use error::{HubError, HubResult};
pub use hub::HubRecord;
pub use loader::{load_hubs, parse_hubs};
