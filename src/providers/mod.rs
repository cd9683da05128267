pub mod openai;

pub use openai::ModerationProvider;
