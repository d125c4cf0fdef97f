//! Configuration file loading for response-foreach
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RESPONSE_FOREACH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./response-foreach.toml` or `./.response-foreach.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/response-foreach/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileSessionConfig,
};
pub use loader::ConfigLoader;
