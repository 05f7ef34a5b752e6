#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use self::core::engine::TemplateEngine;
pub use self::core::template::{add, get_message, print_welcome};
pub use utils::error::{Result, TemplateError};
