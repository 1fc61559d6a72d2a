//! Grouping-key derivation for a single control.
//!
//! `classify` is total: every branch has a fallback bucket, so malformed or
//! unexpected identifiers only ever degrade to a coarser group.

use crate::catalog::business::{normalize_process, UNCATEGORIZED_CONTROLS};
use crate::catalog::{iso, nist, patterns, soc2, GENERAL, UNCATEGORIZED};

use super::framework::{FrameworkDescriptor, FrameworkKind, ViewMode};
use super::model::Control;

pub fn classify(control: &Control, framework: &FrameworkDescriptor, view: ViewMode) -> String {
    classify_kind(control, framework.kind, view)
}

pub fn classify_kind(control: &Control, kind: FrameworkKind, view: ViewMode) -> String {
    match (kind, view) {
        (FrameworkKind::Iso27001, ViewMode::Standard) => iso27001_structure(control),
        (FrameworkKind::Iso42001, ViewMode::Standard) => iso42001_structure(control),
        (FrameworkKind::Nist, ViewMode::Standard) => nist_function(control),
        (FrameworkKind::Soc2 | FrameworkKind::Generic, ViewMode::Standard) => control
            .category_hint()
            .unwrap_or(GENERAL)
            .to_string(),
        (FrameworkKind::Soc2, ViewMode::Intent) => soc2_criteria_group(&control.control_id),
        (FrameworkKind::Iso42001 | FrameworkKind::Nist, ViewMode::Intent) => control
            .domain_hint()
            .unwrap_or(GENERAL)
            .to_string(),
        (FrameworkKind::Iso27001 | FrameworkKind::Generic, ViewMode::Intent) => {
            business_process(control).to_string()
        }
    }
}

fn iso27001_structure(control: &Control) -> String {
    let id = control.control_id.trim();
    let is_annex = id
        .get(..2)
        .map(|prefix| prefix.eq_ignore_ascii_case("a."))
        .unwrap_or(false);
    if is_annex {
        return match patterns::annex_number(id) {
            Some(annex) => iso::iso27001_annex_title(annex).to_string(),
            None => iso::ANNEX_FALLBACK.to_string(),
        };
    }
    match patterns::leading_number(id) {
        Some(clause) => iso::clause_title(clause),
        None => unnumbered(control),
    }
}

fn iso42001_structure(control: &Control) -> String {
    let id = control.control_id.trim();
    if id.contains("A.") {
        return match patterns::annex_number(id) {
            Some(annex) => iso::iso42001_annex_title(annex).to_string(),
            None => iso::ANNEX_FALLBACK.to_string(),
        };
    }
    match patterns::iso42001_clause_number(id) {
        Some(clause) => iso::clause_title(clause),
        None => unnumbered(control),
    }
}

fn unnumbered(control: &Control) -> String {
    control
        .category_hint()
        .unwrap_or(UNCATEGORIZED)
        .to_string()
}

fn nist_function(control: &Control) -> String {
    let id = control.control_id.trim();
    let mut chars = id.chars();
    let prefix: String = chars.by_ref().take(2).collect();
    // `IDENTITY-1` must not read as the ID function.
    let boundary = chars.next().map(|c| !c.is_ascii_alphabetic()).unwrap_or(true);
    if prefix.chars().count() == 2 && boundary {
        if let Some(key) = nist::function_key(&prefix) {
            return key;
        }
    }
    UNCATEGORIZED.to_string()
}

/// SOC 2 intent view: COSO principles for CC1..CC5, TSC groups otherwise.
pub fn soc2_criteria_group(control_id: &str) -> String {
    if let Some((series, point)) = patterns::common_criteria(control_id) {
        return match series {
            1..=5 => point
                .and_then(|p| soc2::coso_principle(series, p))
                .map(soc2::principle_key)
                .or_else(|| soc2::component_fallback_key(series))
                .unwrap_or_else(|| soc2::ADDITIONAL_CRITERIA.to_string()),
            _ => soc2::common_criteria_key(series)
                .unwrap_or(soc2::ADDITIONAL_CRITERIA)
                .to_string(),
        };
    }
    soc2::trust_principle_for(control_id)
        .and_then(|p| p.group_key())
        .unwrap_or(soc2::ADDITIONAL_CRITERIA)
        .to_string()
}

fn business_process(control: &Control) -> &'static str {
    let source = control
        .process_hint()
        .or_else(|| control.category_hint())
        .or_else(|| {
            control
                .domain_hint()
                .filter(|d| !patterns::is_structural_label(d))
        })
        .unwrap_or(UNCATEGORIZED_CONTROLS);
    normalize_process(source)
}
