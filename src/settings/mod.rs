pub mod storage;
pub mod types;

pub use storage::{get_config_dir, get_settings_path, load_settings, save_settings};
pub use types::Settings;
