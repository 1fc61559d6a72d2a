//! Cross-framework business-process vocabulary for the intent view.

pub const FALLBACK_PROCESS: &str = "Governance";
pub const UNCATEGORIZED_CONTROLS: &str = "Uncategorized Controls";

/// Canonical process names in display order.
pub const MASTER_PROCESSES: [&str; 22] = [
    "Governance",
    "Risk Management",
    "Compliance & Legal",
    "Asset Management",
    "Access Management",
    "Human Resources Security",
    "Awareness & Training",
    "Physical Security",
    "Operations Security",
    "Configuration Management",
    "Change Management",
    "Network Security",
    "Cryptography",
    "Secure Development",
    "Vulnerability Management",
    "Logging & Monitoring",
    "Incident Management",
    "Business Continuity",
    "Backup & Recovery",
    "Supplier Management",
    "Data Protection & Privacy",
    "Performance Evaluation & Improvement",
];

// Exact (lowercased) names that would otherwise be caught by a broader keyword.
const ALIASES: &[(&str, &str)] = &[
    ("iam", "Access Management"),
    ("identity and access management", "Access Management"),
    ("hr security", "Human Resources Security"),
    ("bcp", "Business Continuity"),
    ("bcdr", "Business Continuity"),
    ("sdlc", "Secure Development"),
    ("third-party risk management", "Supplier Management"),
    ("vendor risk management", "Supplier Management"),
    ("supply chain risk management", "Supplier Management"),
    ("security operations", "Operations Security"),
    ("secops", "Operations Security"),
    ("privacy", "Data Protection & Privacy"),
    ("internal audit", "Performance Evaluation & Improvement"),
];

// First matching rule wins. A keyword matches only at the start of a word,
// so `change` does not fire on "exchange".
const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (&["risk"], "Risk Management"),
    (
        &["access", "identity", "authentication", "authoriz", "privilege", "password"],
        "Access Management",
    ),
    (&["incident"], "Incident Management"),
    (&["continuity", "resilien", "disaster"], "Business Continuity"),
    (&["backup", "recovery", "restore"], "Backup & Recovery"),
    (
        &["supplier", "vendor", "third-party", "third party", "supply chain", "outsourc"],
        "Supplier Management",
    ),
    (
        &["privacy", "data protection", "personal data", "pii", "gdpr"],
        "Data Protection & Privacy",
    ),
    (&["crypt", "encrypt", "decrypt", "key management"], "Cryptography"),
    (&["network", "firewall"], "Network Security"),
    (&["vulnerab", "patch", "malware", "threat"], "Vulnerability Management"),
    (&["logging", "monitor", "event log"], "Logging & Monitoring"),
    (&["change"], "Change Management"),
    (&["configuration", "hardening", "baseline"], "Configuration Management"),
    (
        &["develop", "sdlc", "software", "coding", "application security"],
        "Secure Development",
    ),
    (&["asset", "inventory", "media", "information classification"], "Asset Management"),
    (
        &["physical", "facility", "facilities", "environmental", "premises"],
        "Physical Security",
    ),
    (
        &["human resource", "personnel", "people", "employ", "screening"],
        "Human Resources Security",
    ),
    (&["awareness", "training", "education", "competence"], "Awareness & Training"),
    (
        &["legal", "compliance", "regulat", "contract", "intellectual property"],
        "Compliance & Legal",
    ),
    (
        &[
            "audit",
            "review",
            "evaluation",
            "measurement",
            "improvement",
            "nonconform",
            "corrective",
        ],
        "Performance Evaluation & Improvement",
    ),
    (&["operation"], "Operations Security"),
    (
        &["policy", "policies", "governance", "leadership", "organization", "context"],
        "Governance",
    ),
];

/// Maps a free-form process, category or domain name onto the master
/// vocabulary. Unrecognized names land in [`FALLBACK_PROCESS`].
pub fn normalize_process(name: &str) -> &'static str {
    let lower = name.trim().to_lowercase();
    if lower.is_empty() {
        return FALLBACK_PROCESS;
    }
    let spelled = lower.replace(" and ", " & ");

    if let Some(canonical) = MASTER_PROCESSES
        .iter()
        .copied()
        .find(|p| p.to_lowercase() == lower || p.to_lowercase() == spelled)
    {
        return canonical;
    }
    if let Some((_, canonical)) = ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower || *alias == spelled)
    {
        return *canonical;
    }
    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| starts_word(&lower, k)))
        .map(|(_, canonical)| *canonical)
        .unwrap_or(FALLBACK_PROCESS)
}

fn starts_word(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(at, _)| {
        text[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

pub fn master_position(key: &str) -> Option<usize> {
    MASTER_PROCESSES
        .iter()
        .position(|p| p.eq_ignore_ascii_case(key.trim()))
}
