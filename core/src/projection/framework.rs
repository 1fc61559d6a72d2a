use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification ruleset, resolved once from a framework code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkKind {
    Iso27001,
    Iso42001,
    Soc2,
    Nist,
    Generic,
}

impl FrameworkKind {
    /// Resolves a backend framework code such as `ISO27001`, `SOC 2` or
    /// `NIST-CSF-2.0`. Unknown codes resolve to [`FrameworkKind::Generic`].
    pub fn from_code(code: &str) -> Self {
        let upper = code.trim().to_ascii_uppercase();
        let compact: String = upper
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '/')
            .collect();
        if compact.contains("SOC2") {
            FrameworkKind::Soc2
        } else if compact.contains("ISO27001") {
            FrameworkKind::Iso27001
        } else if compact.contains("ISO42001") || compact.contains("AI_FRAMEWORK") {
            FrameworkKind::Iso42001
        } else if compact.contains("NIST") {
            FrameworkKind::Nist
        } else {
            FrameworkKind::Generic
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameworkDescriptor {
    /// Backend framework id; when present, controls of other frameworks are dropped.
    pub id: Option<u64>,
    pub code: String,
    pub name: String,
    pub kind: FrameworkKind,
}

impl FrameworkDescriptor {
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            id: None,
            name: code.clone(),
            kind: FrameworkKind::from_code(&code),
            code,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// The framework's own clause, annex or function structure.
    #[default]
    Standard,
    /// Cross-framework business-process grouping.
    #[serde(alias = "business")]
    Intent,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Standard => "standard",
            ViewMode::Intent => "intent",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ViewMode::Standard),
            "intent" | "business" => Ok(ViewMode::Intent),
            other => Err(CoreError::InvalidInput(format!(
                "unknown view mode: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_codes_resolve() {
        assert_eq!(FrameworkKind::from_code("ISO27001"), FrameworkKind::Iso27001);
        assert_eq!(FrameworkKind::from_code("iso 27001:2022"), FrameworkKind::Iso27001);
        assert_eq!(FrameworkKind::from_code("ISO-42001"), FrameworkKind::Iso42001);
        assert_eq!(FrameworkKind::from_code("AI_FRAMEWORK"), FrameworkKind::Iso42001);
        assert_eq!(FrameworkKind::from_code("SOC 2"), FrameworkKind::Soc2);
        assert_eq!(FrameworkKind::from_code("NIST_CSF"), FrameworkKind::Nist);
        assert_eq!(FrameworkKind::from_code("HIPAA"), FrameworkKind::Generic);
        assert_eq!(FrameworkKind::from_code(""), FrameworkKind::Generic);
    }

    #[test]
    fn view_mode_parses_aliases() {
        assert_eq!("Standard".parse::<ViewMode>().unwrap(), ViewMode::Standard);
        assert_eq!("business".parse::<ViewMode>().unwrap(), ViewMode::Intent);
        assert!("tabular".parse::<ViewMode>().is_err());
    }
}
