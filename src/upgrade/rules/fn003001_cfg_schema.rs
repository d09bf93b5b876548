use super::{config_str, json_resolution, Rule};
use crate::domain::models::{Finding, Project, Severity};

/// FN003001: `config/config.json` must point at the expected `$schema`.
pub struct ConfigSchemaRule {
    schema: String,
}

impl ConfigSchemaRule {
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
        }
    }
}

impl Rule for ConfigSchemaRule {
    fn id(&self) -> &'static str {
        "FN003001"
    }

    fn title(&self) -> &'static str {
        "config.json schema"
    }

    fn description(&self) -> &'static str {
        "Update config.json schema URL"
    }

    fn severity(&self) -> Severity {
        Severity::Required
    }

    fn visit(&self, project: &Project, findings: &mut Vec<Finding>) {
        if config_str(project, "$schema") == Some(self.schema.as_str()) {
            return;
        }
        findings.push(self.finding(json_resolution("$schema", &self.schema)));
    }
}
