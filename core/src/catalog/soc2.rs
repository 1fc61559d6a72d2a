//! SOC 2 Trust Services Criteria and the COSO principles behind the
//! Common Criteria.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosoPrinciple {
    /// Common Criteria series, e.g. `3` for CC3.x.
    pub series: u32,
    /// Point within the series, e.g. `2` for CC3.2.
    pub point: u32,
    pub number: u32,
    pub title: &'static str,
}

const fn principle(series: u32, point: u32, number: u32, title: &'static str) -> CosoPrinciple {
    CosoPrinciple {
        series,
        point,
        number,
        title,
    }
}

pub const COSO_PRINCIPLES: [CosoPrinciple; 17] = [
    principle(1, 1, 1, "Commitment to integrity and ethical values"),
    principle(1, 2, 2, "Board independence and oversight"),
    principle(1, 3, 3, "Structures, reporting lines, and authorities"),
    principle(1, 4, 4, "Commitment to competence"),
    principle(1, 5, 5, "Accountability for internal control"),
    principle(2, 1, 13, "Uses relevant, quality information"),
    principle(2, 2, 14, "Communicates internally"),
    principle(2, 3, 15, "Communicates externally"),
    principle(3, 1, 6, "Specifies suitable objectives"),
    principle(3, 2, 7, "Identifies and analyzes risk"),
    principle(3, 3, 8, "Assesses fraud risk"),
    principle(3, 4, 9, "Identifies and analyzes significant change"),
    principle(4, 1, 16, "Conducts ongoing and separate evaluations"),
    principle(4, 2, 17, "Evaluates and communicates deficiencies"),
    principle(5, 1, 10, "Selects and develops control activities"),
    principle(5, 2, 11, "Selects and develops general controls over technology"),
    principle(5, 3, 12, "Deploys through policies and procedures"),
];

/// COSO components, keyed by Common Criteria series CC1..CC5.
pub const COSO_COMPONENTS: [(u32, &str); 5] = [
    (1, "Control Environment"),
    (2, "Communication and Information"),
    (3, "Risk Assessment"),
    (4, "Monitoring Activities"),
    (5, "Control Activities"),
];

/// Trust Services Criteria groups in reporting order.
pub const TSC_GROUPS: [&str; 8] = [
    "CC6: Logical and Physical Access (TSC)",
    "CC7: System Operations (TSC)",
    "CC8: Change Management (TSC)",
    "CC9: Risk Mitigation (TSC)",
    "Availability (TSC)",
    "Confidentiality (TSC)",
    "Processing Integrity (TSC)",
    "Privacy (TSC)",
];

pub const ADDITIONAL_CRITERIA: &str = "Additional Criteria";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrustPrinciple {
    Security,
    Availability,
    Confidentiality,
    ProcessingIntegrity,
    Privacy,
}

impl TrustPrinciple {
    /// Security is the mandatory principle; the rest are opt-in scope.
    pub fn is_optional(self) -> bool {
        self != TrustPrinciple::Security
    }

    pub fn group_key(self) -> Option<&'static str> {
        match self {
            TrustPrinciple::Security => None,
            TrustPrinciple::Availability => Some(TSC_GROUPS[4]),
            TrustPrinciple::Confidentiality => Some(TSC_GROUPS[5]),
            TrustPrinciple::ProcessingIntegrity => Some(TSC_GROUPS[6]),
            TrustPrinciple::Privacy => Some(TSC_GROUPS[7]),
        }
    }
}

/// Resolves the Trust Services principle a criteria id belongs to.
///
/// `CC` ids are Security; the optional principles are matched on the prefixes
/// `A`, `C`, `PI` and `P`, checked in that order.
pub fn trust_principle_for(control_id: &str) -> Option<TrustPrinciple> {
    let id = control_id.trim().to_ascii_uppercase();
    if id.starts_with("CC") {
        Some(TrustPrinciple::Security)
    } else if id.starts_with('A') {
        Some(TrustPrinciple::Availability)
    } else if id.starts_with('C') {
        Some(TrustPrinciple::Confidentiality)
    } else if id.starts_with("PI") {
        Some(TrustPrinciple::ProcessingIntegrity)
    } else if id.starts_with('P') {
        Some(TrustPrinciple::Privacy)
    } else {
        None
    }
}

pub fn coso_principle(series: u32, point: u32) -> Option<&'static CosoPrinciple> {
    COSO_PRINCIPLES
        .iter()
        .find(|p| p.series == series && p.point == point)
}

pub fn principle_key(p: &CosoPrinciple) -> String {
    format!("Principle {}: {}", p.number, p.title)
}

/// Key for a CC1..CC5 id whose point has no named principle.
pub fn component_fallback_key(series: u32) -> Option<String> {
    COSO_COMPONENTS
        .iter()
        .find(|(s, _)| *s == series)
        .map(|(s, name)| format!("COSO {}: {} (General)", s, name))
}

/// Key for a CC6..CC9 id.
pub fn common_criteria_key(series: u32) -> Option<&'static str> {
    match series {
        6..=9 => Some(TSC_GROUPS[(series - 6) as usize]),
        _ => None,
    }
}

pub fn tsc_position(key: &str) -> Option<usize> {
    let key = key.trim();
    TSC_GROUPS
        .iter()
        .position(|g| g.eq_ignore_ascii_case(key))
        .or_else(|| {
            // Older exports label the groups as `TSC: <name>`.
            let rest = key.strip_prefix("TSC:")?.trim();
            TSC_GROUPS.iter().position(|g| {
                g.trim_end_matches(" (TSC)")
                    .rsplit(": ")
                    .next()
                    .map(|name| name.eq_ignore_ascii_case(rest))
                    .unwrap_or(false)
            })
        })
}
