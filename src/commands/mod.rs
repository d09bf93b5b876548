//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `spo.rs` — connect/disconnect/status and the tenant app catalog commands.
//! - `spfx.rs` — SharePoint Framework project commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `upgrade/*`.
//! - Keep behavior and output schema stable.

pub mod spfx;
pub mod spo;

pub use spfx::handle_spfx_commands;
pub use spo::handle_spo_commands;
