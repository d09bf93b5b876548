use crate::domain::models::Site;
use crate::services::spo_client::{
    request_digest, site_resource, AccessTokenProvider, ODataResponse, SpoError, SpoRequest,
    SpoTransport, ACCEPT_JSON_NOMETADATA,
};
use crate::services::validation::validate_file_path;
use serde_json::Value;
use std::path::Path;

/// Uploads a solution package to the tenant app catalog without overwriting.
///
/// Returns the catalog entry SharePoint created. Validation and session
/// failures are reported before any request is sent.
pub fn add_app(
    site: &Site,
    file_path: &str,
    transport: &dyn SpoTransport,
    tokens: &dyn AccessTokenProvider,
) -> anyhow::Result<Value> {
    validate_file_path(file_path)?;
    if !site.connected {
        return Err(SpoError::NotConnected.into());
    }

    let resource = site_resource(&site.url)?;
    let access_token = tokens
        .ensure_access_token(&resource)
        .map_err(|e| SpoError::AccessToken(e.to_string()))?;

    tracing::info!("Retrieving request digest...");
    let digest = request_digest(transport, &site.url, &access_token)?;

    let full_path = Path::new(file_path);
    let file_name = full_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string());
    let contents = std::fs::read(full_path)?;

    tracing::info!("Adding app '{}' to the tenant app catalog...", file_name);
    let request = SpoRequest::new(add_url(&site.url, &file_name))
        .header("authorization", format!("Bearer {}", access_token))
        .header("accept", ACCEPT_JSON_NOMETADATA)
        .header("X-RequestDigest", digest)
        .header("binaryStringRequestBody", "true")
        .body(contents);

    Ok(ODataResponse::decode(transport.post(&request)).into_result()?)
}

fn add_url(site_url: &str, file_name: &str) -> String {
    format!(
        "{}/_api/web/tenantappcatalog/Add(overwrite=false, url='{}')",
        site_url.trim_end_matches('/'),
        file_name.replace('\'', "''")
    )
}

/// `UniqueId` of the added app, or the whole entry when it carries none.
pub fn unique_id(entry: &Value) -> String {
    match entry.get("UniqueId").and_then(|v| v.as_str()) {
        Some(id) => id.to_string(),
        None => entry.to_string(),
    }
}
