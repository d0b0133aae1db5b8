use crossgen::engine::config as core_config;
use std::path::PathBuf;

pub struct AppConfig {
    pub plot_dir: Option<PathBuf>,
    pub core_config: core_config::GenerationConfig,
}
