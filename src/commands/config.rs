//! Remote Config Persistence
//!
//! Keeps the collection settings in `localStorage`, with build-time
//! environment values as a fallback.

use todo_core::{TodoError, TodoResult};

use crate::models::RemoteConfig;

const STORAGE_KEY: &str = "todo-board.remote-config";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the saved config, else the one baked in at build time
pub fn load_remote_config() -> Option<RemoteConfig> {
    if let Some(raw) = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
        match RemoteConfig::from_json(&raw) {
            Ok(config) => return Some(config),
            Err(e) => log::warn!("Ignoring stored remote config: {}", e),
        }
    }

    let project_id = option_env!("TODO_BOARD_PROJECT_ID")?;
    let api_key = option_env!("TODO_BOARD_API_KEY")?;
    let config = RemoteConfig::new(project_id, api_key);
    config.validate().ok().map(|_| config)
}

/// Validate and persist a config
pub fn save_remote_config(config: &RemoteConfig) -> TodoResult<()> {
    config.validate()?;
    let json = config.to_json()?;
    let storage = local_storage().ok_or_else(|| TodoError::Config("localStorage unavailable".into()))?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| TodoError::Config(format!("Failed to save config: {:?}", e)))
}
