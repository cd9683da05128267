//! Wire contracts and user-content extraction for an OpenAI-compatible
//! content-audit gateway.

pub mod audit;
pub mod config;
pub mod error;
pub mod http_client;
pub mod providers;

pub use audit::{ExtractMode, UserContent};
pub use config::Settings;
pub use error::{AuditError, Result};
