//! NIST Cybersecurity Framework 2.0 tables.

/// Function codes in framework order.
pub const FUNCTIONS: [(&str, &str); 6] = [
    ("GV", "GOVERN"),
    ("ID", "IDENTIFY"),
    ("PR", "PROTECT"),
    ("DE", "DETECT"),
    ("RS", "RESPOND"),
    ("RC", "RECOVER"),
];

pub const BUSINESS_DOMAIN_ORDER: [&str; 11] = [
    "Governance & Strategy",
    "Risk Management",
    "Supply Chain Risk Management",
    "Asset Management",
    "Identity & Access Management",
    "Data Security",
    "Platform & Infrastructure Security",
    "Continuous Monitoring",
    "Incident Response",
    "Recovery",
    "Improvement",
];

/// Group key for a function code, e.g. `GOVERN (GV)`.
pub fn function_key(code: &str) -> Option<String> {
    FUNCTIONS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(c, name)| format!("{} ({})", name, c))
}

/// Position of a function group key such as `PROTECT (PR)` or a bare `PROTECT`.
pub fn function_position(key: &str) -> Option<usize> {
    let upper = key.trim().to_ascii_uppercase();
    FUNCTIONS.iter().position(|(_, name)| {
        upper
            .strip_prefix(*name)
            .map(|rest| rest.is_empty() || rest.starts_with(' '))
            .unwrap_or(false)
    })
}

pub fn business_domain_position(key: &str) -> Option<usize> {
    BUSINESS_DOMAIN_ORDER
        .iter()
        .position(|domain| domain.eq_ignore_ascii_case(key.trim()))
}
