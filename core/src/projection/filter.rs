use crate::catalog::soc2::{trust_principle_for, TrustPrinciple};
use serde::{Deserialize, Serialize};

use super::framework::FrameworkKind;
use super::model::Control;

/// Statement-of-Applicability scope settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScopeSettings {
    /// SOC 2 optional principles in scope. `None` keeps every principle;
    /// Security is always in scope.
    pub soc2_included_principles: Option<Vec<TrustPrinciple>>,
}

impl ScopeSettings {
    pub fn includes(&self, control: &Control, kind: FrameworkKind) -> bool {
        if kind != FrameworkKind::Soc2 {
            return true;
        }
        let Some(included) = &self.soc2_included_principles else {
            return true;
        };
        match trust_principle_for(&control.control_id) {
            Some(principle) if principle.is_optional() => included.contains(&principle),
            _ => true,
        }
    }
}

/// Search, status and owner filters shared by the list views.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ControlFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub owner: Option<String>,
    pub scope: ScopeSettings,
}

impl ControlFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_scope(mut self, scope: ScopeSettings) -> Self {
        self.scope = scope;
        self
    }

    /// Search, status and owner checks. Scope is applied separately because
    /// it depends on the framework.
    pub fn matches(&self, control: &Control) -> bool {
        if let Some(needle) = constraint(&self.search) {
            let needle = needle.to_lowercase();
            let hit = [
                control.control_id.as_str(),
                control.title.as_str(),
                control.description.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(status) = constraint(&self.status) {
            if !equals_ignore_case(control.status_label(), status) {
                return false;
            }
        }
        if let Some(owner) = constraint(&self.owner) {
            if !equals_ignore_case(control.owner_label(), owner) {
                return false;
            }
        }
        true
    }
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn equals_ignore_case(field: Option<&str>, wanted: &str) -> bool {
    field
        .map(|f| f.to_lowercase() == wanted.to_lowercase())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Control {
        let mut c = Control::new(7, "A.8.24");
        c.title = "Use of cryptography".to_string();
        c.description = "Rules for effective use of cryptography".to_string();
        c.status = Some("Implemented".to_string());
        c.owner = Some("Security Team".to_string());
        c
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ControlFilter::default().matches(&sample()));
        assert!(ControlFilter::default().with_search("  ").matches(&sample()));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        assert!(ControlFilter::default().with_search("CRYPTO").matches(&sample()));
        assert!(ControlFilter::default().with_search("a.8.2").matches(&sample()));
        assert!(!ControlFilter::default().with_search("backup").matches(&sample()));
    }

    #[test]
    fn status_and_owner_are_exact() {
        let f = ControlFilter::default()
            .with_status("implemented")
            .with_owner("security team");
        assert!(f.matches(&sample()));
        assert!(!ControlFilter::default().with_owner("Security").matches(&sample()));
        let mut unowned = sample();
        unowned.owner = None;
        assert!(!ControlFilter::default().with_owner("Security Team").matches(&unowned));
    }

    #[test]
    fn soc2_scope_excludes_unlisted_optional_principles() {
        let scope = ScopeSettings {
            soc2_included_principles: Some(vec![TrustPrinciple::Availability]),
        };
        assert!(scope.includes(&Control::new(1, "CC6.1"), FrameworkKind::Soc2));
        assert!(scope.includes(&Control::new(2, "A1.1"), FrameworkKind::Soc2));
        assert!(!scope.includes(&Control::new(3, "C1.1"), FrameworkKind::Soc2));
        assert!(!scope.includes(&Control::new(4, "P3.1"), FrameworkKind::Soc2));
        assert!(scope.includes(&Control::new(5, "C1.1"), FrameworkKind::Iso27001));
    }
}
