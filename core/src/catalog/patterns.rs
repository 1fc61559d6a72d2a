//! Identifier and group-key patterns.
//!
//! Every helper returns `None` when the input does not match, so callers can
//! fall back to a coarser bucket instead of failing.

use regex::Regex;
use std::sync::OnceLock;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static identifier pattern must compile"))
}

fn first_number(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Annex number from ids such as `A.5.1`, `a.8.24` or `ISO42001-A.6.2`.
pub fn annex_number(control_id: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    first_number(compiled(&RE, r"(?i)A\.(\d+)"), control_id)
}

/// Leading clause integer, e.g. `4` for `4.1` or `10`.
pub fn leading_number(control_id: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    first_number(compiled(&RE, r"^(\d+)"), control_id.trim())
}

/// Clause number from ISO/IEC 42001 ids: `ISO42001-4.1`, `4.1` or a bare `4`.
pub fn iso42001_clause_number(control_id: &str) -> Option<u32> {
    static DASHED: OnceLock<Regex> = OnceLock::new();
    static LEADING: OnceLock<Regex> = OnceLock::new();
    let id = control_id.trim();
    first_number(compiled(&DASHED, r"-(\d+)\."), id)
        .or_else(|| first_number(compiled(&LEADING, r"^(\d+)(?:\.|$)"), id))
}

/// Common Criteria series and point: `CC3.2` gives `(3, Some(2))`.
pub fn common_criteria(control_id: &str) -> Option<(u32, Option<u32>)> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = compiled(&RE, r"(?i)^CC(\d+)(?:\.(\d+))?").captures(control_id.trim())?;
    let series = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let point = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
    Some((series, point))
}

/// Clause number carried by a group key such as `Clause 4: Context ...`.
pub fn clause_key_number(key: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    first_number(compiled(&RE, r"(?i)^Clause (\d+)\b"), key.trim())
}

/// Annex number carried by a group key such as `Annex A.8: ...`.
pub fn annex_key_number(key: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    first_number(compiled(&RE, r"(?i)^Annex A\.(\d+)\b"), key.trim())
}

pub fn principle_key_number(key: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    first_number(compiled(&RE, r"Principle (\d+)"), key)
}

/// COSO component number carried by a key such as `COSO 3: Risk Assessment (General)`.
pub fn coso_key_number(key: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    first_number(compiled(&RE, r"^COSO ([1-5])\b"), key.trim())
}

/// Domains that restate framework numbering rather than a business process.
pub fn is_structural_label(label: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let lower = label.trim().to_ascii_lowercase();
    lower.starts_with("clause")
        || lower.starts_with("annex")
        || compiled(&RE, r"(?i)^(?:a\.\d+|\d+)(?:\.\d+)*$").is_match(label.trim())
}
