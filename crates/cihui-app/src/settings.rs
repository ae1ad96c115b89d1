use std::path::Path;

use cihui_config::Config;

/// Config file picked up from the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "cihui.json";

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        Config::load(default_path)
    } else {
        tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
        Ok(Config::new())
    }
}
