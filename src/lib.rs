pub mod client;
pub mod config;
pub mod normalize;
pub mod render;
pub mod server;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::client::{RainforestClient, MAX_RESULTS, RAINFOREST_ENDPOINT};
    pub use crate::config::Config;
    pub use crate::server::{router, AppState, DEFAULT_QUERY};
    pub use crate::types::{Listing, SearchError, SearchOutcome};
}
