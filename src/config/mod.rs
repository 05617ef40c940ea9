//! Configuration loading and management.

mod file;
mod paths;
mod settings;
mod types;
mod validate;

pub use file::{load_config_file, load_default_config, save_config, save_default_config};
pub use paths::{config_dir, config_file_path};
pub use settings::{RunSettings, output_path_for};
pub use types::{Config, DefaultsConfig, NetworkConfig, ToolsConfig};
pub use validate::validate_config;
