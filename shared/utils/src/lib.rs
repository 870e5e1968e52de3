pub mod config;
pub mod error;
pub mod export;
pub mod logging;

pub use self::config::*;
pub use self::error::*;
pub use self::export::*;
pub use self::logging::*;
