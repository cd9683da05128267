pub mod settings;

pub use settings::{AuditConfig, ModerationConfig, Settings};
