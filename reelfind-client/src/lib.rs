//! reelfind client - talks to the recommendation service
//!
//! `SearchClient` issues the HTTP request for one search. `SearchSession`
//! wraps it with a `SearchState` so a rendering layer only reads views and
//! triggers searches.

pub mod service_client;
pub mod session;

pub use service_client::SearchClient;
pub use session::SearchSession;
