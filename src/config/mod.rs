pub mod config;

pub use config::{get_access_token, get_default_path, load_config, save_config, Config};
