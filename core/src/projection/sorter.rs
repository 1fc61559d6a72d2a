//! Canonical ordering of group keys and of controls within a group.
//!
//! Keys found in a framework's canonical sequence sort by their score; keys
//! outside it sort after all known keys, lexically among themselves.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::catalog::{business, iso, nist, patterns, soc2};

use super::framework::{FrameworkDescriptor, FrameworkKind, ViewMode};
use super::model::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyRank {
    Known(u32),
    Unknown,
}

pub fn rank_group_key(key: &str, kind: FrameworkKind, view: ViewMode) -> KeyRank {
    let score = match (kind, view) {
        (FrameworkKind::Iso27001, ViewMode::Standard) => iso27001_structure_score(key),
        (FrameworkKind::Iso42001, ViewMode::Standard) => {
            clause_score(key).or_else(|| iso42001_annex_score(key, 100))
        }
        (FrameworkKind::Iso42001, ViewMode::Intent) => clause_score(key)
            .or_else(|| iso::ai_domain_position(key).map(|i| 100 + i as u32))
            .or_else(|| iso42001_annex_score(key, 200)),
        (FrameworkKind::Nist, ViewMode::Standard) => {
            nist::function_position(key).map(|i| i as u32)
        }
        (FrameworkKind::Nist, ViewMode::Intent) => {
            nist::business_domain_position(key).map(|i| i as u32)
        }
        (FrameworkKind::Soc2, ViewMode::Intent) => soc2_score(key),
        (FrameworkKind::Iso27001 | FrameworkKind::Generic, ViewMode::Intent) => {
            business::master_position(key).map(|i| i as u32)
        }
        (FrameworkKind::Soc2 | FrameworkKind::Generic, ViewMode::Standard) => None,
    };
    score.map(KeyRank::Known).unwrap_or(KeyRank::Unknown)
}

// Only clauses 4..10 are canonical; `Clause 2` or `Clause 55` rank unknown.
fn clause_score(key: &str) -> Option<u32> {
    patterns::clause_key_number(key).filter(|clause| iso::is_canonical_clause(*clause))
}

// Clauses score their own number; Annex A.5..A.8 score 50..80.
fn iso27001_structure_score(key: &str) -> Option<u32> {
    clause_score(key).or_else(|| {
        patterns::annex_key_number(key)
            .filter(|annex| iso::is_iso27001_annex(*annex))
            .map(|annex| annex * 10)
    })
}

fn iso42001_annex_score(key: &str, base: u32) -> Option<u32> {
    patterns::annex_key_number(key)
        .and_then(iso::iso42001_annex_position)
        .map(|i| base + i as u32)
}

// Principles score their number, COSO component fallbacks 100..500 and
// TSC groups 1000..1007.
fn soc2_score(key: &str) -> Option<u32> {
    patterns::principle_key_number(key)
        .or_else(|| patterns::coso_key_number(key).map(|component| component * 100))
        .or_else(|| soc2::tsc_position(key).map(|i| 1000 + i as u32))
}

/// Total order over group keys for one framework and view.
pub fn compare_group_keys(
    a: &str,
    b: &str,
    framework: &FrameworkDescriptor,
    view: ViewMode,
) -> Ordering {
    rank_group_key(a, framework.kind, view)
        .cmp(&rank_group_key(b, framework.kind, view))
        .then_with(|| a.cmp(b))
}

pub fn sort_groups(
    groups: BTreeMap<String, Vec<Control>>,
    framework: &FrameworkDescriptor,
    view: ViewMode,
) -> Vec<(String, Vec<Control>)> {
    let mut entries: Vec<(String, Vec<Control>)> = groups
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .collect();
    entries.sort_by(|(a, _), (b, _)| compare_group_keys(a, b, framework, view));
    entries
}

/// Stable in-group ordering: clauses before annex controls, then numeric
/// segment comparison.
pub fn sort_members(mut controls: Vec<Control>) -> Vec<Control> {
    controls.sort_by(|a, b| compare_control_ids(&a.control_id, &b.control_id));
    controls
}

pub fn compare_control_ids(a: &str, b: &str) -> Ordering {
    annex_weight(a)
        .cmp(&annex_weight(b))
        .then_with(|| compare_segments(&id_segments(a), &id_segments(b)))
}

fn annex_weight(control_id: &str) -> u8 {
    u8::from(control_id.trim_start().starts_with(['A', 'a']))
}

fn id_segments(control_id: &str) -> Vec<u64> {
    let body = control_id
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let body = body.strip_prefix('.').unwrap_or(body);
    body.split('.').map(segment_value).collect()
}

// Leading digits only, like `parseInt`; anything else counts as 0.
fn segment_value(segment: &str) -> u64 {
    let trimmed = segment.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse::<u64>().unwrap_or(0)
}

fn compare_segments(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
