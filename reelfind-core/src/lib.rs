//! reelfind core - search model for the movie recommendation service
//!
//! Holds everything about a search that does not touch the network: the
//! search modes, request construction, result interpretation (including the
//! exact-match heuristic for title searches) and the `SearchState` machine a
//! rendering layer reads from.

pub mod config;
pub mod error;
pub mod mode;
pub mod request;
pub mod results;
pub mod state;

pub use config::Config;
pub use error::{ErrorEnvelope, ReelfindError, SearchError};
pub use mode::{InputKind, SearchMode};
pub use request::SearchRequest;
pub use results::{is_exact_match, SearchResult};
pub use state::{Completion, Generation, Phase, SearchState, SearchTicket, SearchView};

/// Result type alias for reelfind operations
pub type Result<T> = std::result::Result<T, ReelfindError>;
