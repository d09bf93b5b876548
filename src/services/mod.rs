//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `app_catalog.rs` — tenant app catalog upload flow.
//! - `spo_client.rs` — SharePoint REST requests, transport/token seams, response decoding.
//! - `session.rs` — connect/disconnect/status of the site session.
//! - `validation.rs` — local option checks that run before any request.
//! - `storage.rs` — session persistence and config loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod app_catalog;
pub mod output;
pub mod session;
pub mod spo_client;
pub mod storage;
pub mod validation;
