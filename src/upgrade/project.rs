use crate::domain::constants::CONFIG_JSON_FILE;
use crate::domain::models::Project;
use std::path::Path;

/// Reads the parts of an SPFx project the upgrade rules look at.
///
/// Only a missing project directory is an error. A missing or malformed
/// `config/config.json` leaves `config_json` empty so the rules report it.
pub fn load_project(path: &Path) -> anyhow::Result<Project> {
    if !path.is_dir() {
        anyhow::bail!("Project directory not found: {}", path.display());
    }
    let config_path = path.join(CONFIG_JSON_FILE);
    let config_json = match std::fs::read_to_string(&config_path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!("{} is not valid JSON: {}", config_path.display(), e);
                None
            }
        },
        Err(e) => {
            tracing::debug!("could not read {}: {}", config_path.display(), e);
            None
        }
    };
    Ok(Project {
        path: path.to_path_buf(),
        config_json,
    })
}
