use crate::domain::models::{ConfigFile, Site};
use std::path::PathBuf;

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/o365"))
}

fn session_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("session.json"))
}

fn config_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn load_session() -> anyhow::Result<Site> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(Site::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_session(site: &Site) -> anyhow::Result<()> {
    let p = session_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(site)?)?;
    Ok(())
}

pub fn clear_session() -> anyhow::Result<()> {
    let p = session_path()?;
    if p.exists() {
        std::fs::remove_file(p)?;
    }
    Ok(())
}
