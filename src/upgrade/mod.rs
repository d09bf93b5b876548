//! SharePoint Framework project upgrade checks.
//!
//! A project is loaded once, then every rule visits it and may append a
//! finding. Rules are independent: none reads what another produced, so the
//! order in `default_rules` only decides the order of the report.

pub mod project;
pub mod rules;

use crate::domain::constants::{CONFIG_SCHEMA_URL, CONFIG_VERSION};
use crate::domain::models::{Finding, Project};
use rules::{ConfigSchemaRule, ConfigVersionRule, Rule};

pub use project::load_project;

pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConfigSchemaRule::new(CONFIG_SCHEMA_URL)),
        Box::new(ConfigVersionRule::new(CONFIG_VERSION)),
    ]
}

pub fn upgrade(project: &Project, rules: &[Box<dyn Rule>]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for rule in rules {
        rule.visit(project, &mut findings);
    }
    findings
}
