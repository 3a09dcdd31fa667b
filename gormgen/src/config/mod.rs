//! Configuration: defaults, dotenv loading and layered settings

pub mod defaults;
mod env_file;
mod settings;

pub use env_file::load_env_file;
pub use settings::{process_env, GeneratorConfig, Overrides};
