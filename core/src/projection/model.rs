use serde::{Deserialize, Serialize};

/// A compliance control as returned by the backend list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Control {
    pub id: u64,
    pub control_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub framework_id: u64,
    #[serde(default = "default_applicable")]
    pub is_applicable: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub process_name: Option<String>,
    #[serde(default)]
    pub classification: Option<String>,
}

fn default_applicable() -> bool {
    true
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Control {
    pub fn new(id: u64, control_id: impl Into<String>) -> Self {
        Self {
            id,
            control_id: control_id.into(),
            title: String::new(),
            description: String::new(),
            category: None,
            domain: None,
            framework_id: 0,
            is_applicable: true,
            status: None,
            owner: None,
            process_name: None,
            classification: None,
        }
    }

    pub fn category_hint(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn domain_hint(&self) -> Option<&str> {
        non_blank(&self.domain)
    }

    pub fn process_hint(&self) -> Option<&str> {
        non_blank(&self.process_name)
    }

    pub fn status_label(&self) -> Option<&str> {
        non_blank(&self.status)
    }

    pub fn owner_label(&self) -> Option<&str> {
        non_blank(&self.owner)
    }
}

/// One section of a projected view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControlGroup {
    pub key: String,
    pub controls: Vec<Control>,
}

impl ControlGroup {
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
