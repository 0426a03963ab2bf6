pub mod build_config;
pub mod builtin_presets;
pub mod config_fixtures;
pub mod content;
pub mod map;
pub mod theme;
pub mod zephyr_rc;
pub mod zephyr_rc_config_loader;
mod partial_build_config;

pub use build_config::BuildConfig;
pub use build_config::BuildMode;
pub use build_config::PluginNode;
pub use theme::DarkMode;
