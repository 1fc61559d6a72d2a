use crate::error::{CoreError, CoreResult};
use crate::projection::filter::ControlFilter;
use crate::projection::framework::{FrameworkDescriptor, ViewMode};
use crate::projection::model::Control;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Projection settings as stored alongside a control export.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectionConfig {
    pub framework_code: String,
    pub framework_id: Option<u64>,
    pub framework_name: Option<String>,
    pub view: ViewMode,
    pub filter: ControlFilter,
}

impl ProjectionConfig {
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let cfg: ProjectionConfig = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            framework = %cfg.framework_code,
            view = %cfg.view,
            "loaded projection config"
        );
        Ok(cfg)
    }

    pub fn descriptor(&self) -> FrameworkDescriptor {
        let mut descriptor = FrameworkDescriptor::from_code(self.framework_code.clone());
        if let Some(id) = self.framework_id {
            descriptor = descriptor.with_id(id);
        }
        if let Some(name) = self.framework_name.as_deref().filter(|n| !n.trim().is_empty()) {
            descriptor = descriptor.with_name(name);
        }
        descriptor
    }
}

/// Reads controls from a JSON array or from a list envelope
/// `{"controls": [...]}`.
pub fn load_controls(path: impl AsRef<Path>) -> CoreResult<Vec<Control>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let controls = parse_controls(&bytes)?;
    tracing::debug!(path = %path.display(), count = controls.len(), "loaded controls");
    Ok(controls)
}

pub fn parse_controls(bytes: &[u8]) -> CoreResult<Vec<Control>> {
    let value: Value = serde_json::from_slice(bytes)?;
    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("controls") {
            Some(inner @ Value::Array(_)) => inner,
            _ => {
                return Err(CoreError::InvalidInput(
                    "control envelope must carry a controls array".to_string(),
                ))
            }
        },
        _ => {
            return Err(CoreError::InvalidInput(
                "controls must be a JSON array".to_string(),
            ))
        }
    };
    Ok(serde_json::from_value(list)?)
}
