use crate::domain::models::{Site, StatusReport};
use crate::services::spo_client::site_resource;
use crate::services::storage::{clear_session, save_session};

pub fn connect(url: &str, access_token: Option<String>) -> anyhow::Result<Site> {
    let site = new_site(url, access_token)?;
    save_session(&site)?;
    tracing::info!("connected to {}", site.url);
    Ok(site)
}

pub fn disconnect() -> anyhow::Result<()> {
    clear_session()
}

fn new_site(url: &str, access_token: Option<String>) -> anyhow::Result<Site> {
    site_resource(url)?;
    Ok(Site {
        url: url.trim().trim_end_matches('/').to_string(),
        connected: true,
        access_token: access_token.filter(|t| !t.trim().is_empty()),
    })
}

pub fn status_of(site: &Site) -> StatusReport {
    StatusReport {
        connected: site.connected,
        url: site.connected.then(|| site.url.clone()),
    }
}
