pub mod extract;
pub mod mode;

pub use extract::UserContent;
pub use mode::ExtractMode;
