//! ISO/IEC 27001 and ISO/IEC 42001 structure tables.

/// Management-system clauses shared by both standards.
pub const CLAUSE_TITLES: &[(u32, &str)] = &[
    (4, "Clause 4: Context of the Organization"),
    (5, "Clause 5: Leadership"),
    (6, "Clause 6: Planning"),
    (7, "Clause 7: Support"),
    (8, "Clause 8: Operation"),
    (9, "Clause 9: Performance Evaluation"),
    (10, "Clause 10: Improvement"),
];

pub const ISO27001_ANNEX_TITLES: &[(u32, &str)] = &[
    (5, "Annex A.5: Organizational Controls"),
    (6, "Annex A.6: People Controls"),
    (7, "Annex A.7: Physical Controls"),
    (8, "Annex A.8: Technological Controls"),
];

/// ISO/IEC 42001 Annex A control objectives, in catalogue order.
pub const ISO42001_ANNEX_TITLES: &[(u32, &str)] = &[
    (2, "Annex A.2: Policies Related to AI"),
    (3, "Annex A.3: Internal Organization"),
    (4, "Annex A.4: Resources for AI Systems"),
    (5, "Annex A.5: Assessing Impacts of AI Systems"),
    (6, "Annex A.6: AI System Life Cycle"),
    (7, "Annex A.7: Data for AI Systems"),
    (8, "Annex A.8: Information for Interested Parties"),
    (9, "Annex A.9: Use of AI Systems"),
    (10, "Annex A.10: Third-Party and Customer Relationships"),
];

pub const ANNEX_FALLBACK: &str = "Annex A Controls";

/// Business-domain sequence for the ISO/IEC 42001 intent view.
pub const AI_DOMAIN_ORDER: [&str; 9] = [
    "AI Governance",
    "AI Risk Management",
    "AI Impact Assessment",
    "AI System Lifecycle",
    "Data for AI Systems",
    "Transparency & Information",
    "Use of AI Systems",
    "Third-Party & Customer Relationships",
    "Monitoring & Improvement",
];

pub fn clause_title(clause: u32) -> String {
    CLAUSE_TITLES
        .iter()
        .find(|(n, _)| *n == clause)
        .map(|(_, title)| title.to_string())
        .unwrap_or_else(|| format!("Clause {}", clause))
}

/// Whether `clause` is one of the management-system clauses 4..10.
pub fn is_canonical_clause(clause: u32) -> bool {
    lookup(CLAUSE_TITLES, clause).is_some()
}

pub fn iso27001_annex_title(annex: u32) -> &'static str {
    lookup(ISO27001_ANNEX_TITLES, annex).unwrap_or(ANNEX_FALLBACK)
}

pub fn iso42001_annex_title(annex: u32) -> &'static str {
    lookup(ISO42001_ANNEX_TITLES, annex).unwrap_or(ANNEX_FALLBACK)
}

/// Position of an ISO/IEC 42001 annex number in the catalogue.
pub fn iso42001_annex_position(annex: u32) -> Option<usize> {
    ISO42001_ANNEX_TITLES.iter().position(|(n, _)| *n == annex)
}

pub fn is_iso27001_annex(annex: u32) -> bool {
    lookup(ISO27001_ANNEX_TITLES, annex).is_some()
}

pub fn ai_domain_position(key: &str) -> Option<usize> {
    AI_DOMAIN_ORDER
        .iter()
        .position(|domain| domain.eq_ignore_ascii_case(key.trim()))
}

fn lookup(table: &'static [(u32, &'static str)], number: u32) -> Option<&'static str> {
    table
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, title)| *title)
}
