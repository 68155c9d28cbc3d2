mod configuration_error;
mod cover;

pub use configuration_error::ConfigurationError;
pub use cover::Cover;
pub use cover::CoverResult;
