use crate::domain::constants::CONFIG_JSON_FILE;
use crate::domain::models::{Finding, Project, ResolutionType, Severity};

mod fn003001_cfg_schema;
mod fn003002_cfg_version;

pub use fn003001_cfg_schema::ConfigSchemaRule;
pub use fn003002_cfg_version::ConfigVersionRule;

/// A single upgrade check.
///
/// Implementations carry only the expected values they were built with and
/// must not panic or fail inside `visit`: anything unreadable in the project
/// counts as a mismatch.
pub trait Rule {
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn severity(&self) -> Severity;

    fn resolution_type(&self) -> ResolutionType {
        ResolutionType::Json
    }

    fn file(&self) -> &'static str {
        CONFIG_JSON_FILE
    }

    fn visit(&self, project: &Project, findings: &mut Vec<Finding>);

    fn finding(&self, resolution: String) -> Finding {
        Finding {
            id: self.id().to_string(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            resolution,
            resolution_type: self.resolution_type(),
            severity: self.severity(),
            file: self.file().to_string(),
        }
    }
}

/// String value of a top-level field in `config/config.json`, if there is one.
fn config_str<'a>(project: &'a Project, field: &str) -> Option<&'a str> {
    project
        .config_json
        .as_ref()
        .and_then(|c| c.get(field))
        .and_then(|v| v.as_str())
}

fn json_resolution(field: &str, expected: &str) -> String {
    let mut obj = serde_json::Map::new();
    obj.insert(field.to_string(), serde_json::Value::from(expected));
    serde_json::to_string_pretty(&serde_json::Value::Object(obj)).unwrap_or_default()
}
