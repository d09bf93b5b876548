//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep DTO/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — session, config, project/finding and report structs.
//! - `constants.rs` — command names and expected SPFx configuration values.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `Finding` is emitted verbatim by `spfx project upgrade --output json`.
//! Keep it synchronized with `docs/contracts/findings.schema.json`.

pub mod constants;
pub mod models;
