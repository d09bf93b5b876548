use super::{config_str, json_resolution, Rule};
use crate::domain::models::{Finding, Project, Severity};

/// FN003002: `config/config.json` must declare the expected `version`.
pub struct ConfigVersionRule {
    version: String,
}

impl ConfigVersionRule {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Rule for ConfigVersionRule {
    fn id(&self) -> &'static str {
        "FN003002"
    }

    fn title(&self) -> &'static str {
        "config.json version"
    }

    fn description(&self) -> &'static str {
        "Update config.json version number"
    }

    fn severity(&self) -> Severity {
        Severity::Required
    }

    fn visit(&self, project: &Project, findings: &mut Vec<Finding>) {
        if config_str(project, "version") == Some(self.version.as_str()) {
            return;
        }
        findings.push(self.finding(json_resolution("version", &self.version)));
    }
}
