use controlmap_core::config::load_controls;
use controlmap_core::export::fingerprint::projection_fingerprint;
use controlmap_core::projection::facade::project;
use controlmap_core::projection::filter::ControlFilter;
use controlmap_core::projection::framework::{FrameworkDescriptor, ViewMode};
use controlmap_core::projection::grouper::is_projected;
use controlmap_core::projection::model::{Control, ControlGroup};
use controlmap_core::projection::sorter::{compare_control_ids, compare_group_keys};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const FRAMEWORK_CODES: [&str; 5] = ["ISO27001", "ISO42001", "SOC2", "NIST_CSF", "HIPAA"];
const VIEWS: [ViewMode; 2] = [ViewMode::Standard, ViewMode::Intent];

struct GateResult {
    gate_id: &'static str,
    passed: bool,
    message: String,
}

impl GateResult {
    fn check(gate_id: &'static str, failures: Vec<String>) -> Self {
        let passed = failures.is_empty();
        let message = if passed {
            "ok".to_string()
        } else {
            failures.join("; ")
        };
        Self {
            gate_id,
            passed,
            message,
        }
    }
}

fn main() {
    // Self-audit of the projection engine: every gate runs over fixture
    // control sets loaded from disk and prints a stable gate id with
    // PASS/FAIL. Exits non-zero on any failure.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let tmp = tempfile::tempdir().expect("tempdir");
    let fixture_path = tmp.path().join("controls_fixture.json");
    write_fixture(&fixture_path).expect("write fixture");
    let controls = load_controls(&fixture_path).expect("load fixture (1)");
    let controls_again = load_controls(&fixture_path).expect("load fixture (2)");
    tracing::info!(count = controls.len(), "loaded fixture controls");

    let gates = vec![
        gate_determinism(&controls, &controls_again),
        gate_completeness(&controls),
        gate_no_empty_groups(&controls),
        gate_iso27001_scenario(),
        gate_soc2_scenario(),
        gate_member_ordering(),
        gate_principle_ordering(),
        gate_unknown_id_safety(),
    ];

    let mut any_fail = false;
    for g in &gates {
        println!(
            "GATE {} {} {}",
            g.gate_id,
            if g.passed { "PASS" } else { "FAIL" },
            g.message
        );
        any_fail |= !g.passed;
    }
    if any_fail {
        std::process::exit(1);
    }
}

fn write_fixture(path: &Path) -> std::io::Result<()> {
    let controls = fixture_controls();
    let bytes = serde_json::to_vec_pretty(&controls)?;
    std::fs::write(path, bytes)
}

fn fixture_controls() -> Vec<Control> {
    let rows: [(&str, Option<&str>, Option<&str>, Option<&str>, bool); 16] = [
        ("4.1", None, Some("Clause 4: Context"), None, true),
        ("6.1.2", Some("Risk assessment"), None, Some("Implemented"), true),
        ("A.5.1", Some("Policies"), None, Some("In Progress"), true),
        ("A.5.10", None, Some("Acceptable use"), None, true),
        ("A.5.2", None, None, Some("Implemented"), true),
        ("A.8.24", Some("Cryptography"), None, None, true),
        ("A.7.4", None, Some("Physical monitoring"), None, false),
        ("ISO42001-A.6.2", None, Some("AI System Lifecycle"), None, true),
        ("CC1.1", None, None, Some("Implemented"), true),
        ("CC1.2", None, None, None, true),
        ("CC3.9", None, None, None, true),
        ("CC6.1", Some("Logical access"), None, None, true),
        ("PI1.1", None, None, None, true),
        ("GV.OC-01", None, Some("Governance & Strategy"), None, true),
        ("RS.MA-01", None, Some("Incident Response"), None, true),
        ("???", None, None, None, true),
    ];
    let mut controls: Vec<Control> = rows
        .iter()
        .enumerate()
        .map(|(i, (control_id, category, domain, status, applicable))| {
            let mut c = Control::new(i as u64 + 1, *control_id);
            c.title = format!("Fixture control {}", control_id);
            c.category = category.map(str::to_string);
            c.domain = domain.map(str::to_string);
            c.status = status.map(str::to_string);
            c.is_applicable = *applicable;
            c
        })
        .collect();
    // Duplicate id: the first occurrence must win.
    let mut duplicate = Control::new(1, "A.8.1");
    duplicate.title = "Duplicate of id 1".to_string();
    controls.push(duplicate);
    controls
}

fn each_projection<F>(controls: &[Control], mut visit: F)
where
    F: FnMut(&FrameworkDescriptor, ViewMode, &[ControlGroup]),
{
    let filter = ControlFilter::default();
    for code in FRAMEWORK_CODES {
        let framework = FrameworkDescriptor::from_code(code);
        for view in VIEWS {
            let groups = project(controls, &framework, view, &filter);
            visit(&framework, view, &groups);
        }
    }
}

fn gate_determinism(controls: &[Control], controls_again: &[Control]) -> GateResult {
    let mut failures = Vec::new();
    let filter = ControlFilter::default();
    for code in FRAMEWORK_CODES {
        let framework = FrameworkDescriptor::from_code(code);
        for view in VIEWS {
            let a = projection_fingerprint(&project(controls, &framework, view, &filter));
            let b = projection_fingerprint(&project(controls_again, &framework, view, &filter));
            match (a, b) {
                (Ok(a), Ok(b)) if a == b => {}
                (Ok(a), Ok(b)) => failures.push(format!("{}/{}: {} != {}", code, view, a, b)),
                (Err(e), _) | (_, Err(e)) => failures.push(format!("{}/{}: {}", code, view, e)),
            }
        }
    }
    GateResult::check("PROJECTION.DETERMINISM_V1", failures)
}

fn gate_completeness(controls: &[Control]) -> GateResult {
    let mut failures = Vec::new();
    let filter = ControlFilter::default();
    each_projection(controls, |framework, view, groups| {
        let mut expected: BTreeSet<u64> = BTreeSet::new();
        for c in controls.iter().filter(|c| is_projected(c, framework, &filter)) {
            expected.insert(c.id);
        }
        let projected: Vec<u64> = groups
            .iter()
            .flat_map(|g| g.controls.iter().map(|c| c.id))
            .collect();
        let unique: BTreeSet<u64> = projected.iter().copied().collect();
        if projected.len() != unique.len() {
            failures.push(format!("{}/{}: duplicated controls", framework.code, view));
        }
        if unique != expected {
            failures.push(format!(
                "{}/{}: projected {} of {} controls",
                framework.code,
                view,
                unique.len(),
                expected.len()
            ));
        }
    });
    GateResult::check("PROJECTION.COMPLETENESS_V1", failures)
}

fn gate_no_empty_groups(controls: &[Control]) -> GateResult {
    let mut failures = Vec::new();
    each_projection(controls, |framework, view, groups| {
        for g in groups.iter().filter(|g| g.is_empty() || g.key.trim().is_empty()) {
            failures.push(format!("{}/{}: empty group '{}'", framework.code, view, g.key));
        }
    });
    GateResult::check("PROJECTION.NO_EMPTY_GROUPS_V1", failures)
}

fn keys_of(groups: &[ControlGroup]) -> Vec<String> {
    groups.iter().map(|g| g.key.clone()).collect()
}

fn expect_keys(actual: Vec<String>, expected: &[&str]) -> Vec<String> {
    if actual == expected {
        Vec::new()
    } else {
        vec![format!("expected {:?}, got {:?}", expected, actual)]
    }
}

fn gate_iso27001_scenario() -> GateResult {
    let controls = vec![
        Control::new(1, "4.1"),
        Control::new(2, "A.5.1"),
        Control::new(3, "A.8.24"),
    ];
    let groups = project(
        &controls,
        &FrameworkDescriptor::from_code("ISO27001"),
        ViewMode::Standard,
        &ControlFilter::default(),
    );
    let failures = expect_keys(
        keys_of(&groups),
        &[
            "Clause 4: Context of the Organization",
            "Annex A.5: Organizational Controls",
            "Annex A.8: Technological Controls",
        ],
    );
    GateResult::check("PROJECTION.ISO27001_STANDARD_ORDER_V1", failures)
}

fn gate_soc2_scenario() -> GateResult {
    let controls = vec![
        Control::new(1, "CC1.1"),
        Control::new(2, "CC1.2"),
        Control::new(3, "CC6.1"),
    ];
    let groups = project(
        &controls,
        &FrameworkDescriptor::from_code("SOC2"),
        ViewMode::Intent,
        &ControlFilter::default(),
    );
    let failures = expect_keys(
        keys_of(&groups),
        &[
            "Principle 1: Commitment to integrity and ethical values",
            "Principle 2: Board independence and oversight",
            "CC6: Logical and Physical Access (TSC)",
        ],
    );
    GateResult::check("PROJECTION.SOC2_INTENT_ORDER_V1", failures)
}

fn gate_member_ordering() -> GateResult {
    let mut failures = Vec::new();
    for (a, b) in [("A.5.2", "A.5.10"), ("4.1", "A.5.1"), ("5.9", "5.10")] {
        if compare_control_ids(a, b) != Ordering::Less {
            failures.push(format!("{} should sort before {}", a, b));
        }
    }
    GateResult::check("PROJECTION.MEMBER_NUMERIC_ORDER_V1", failures)
}

fn gate_principle_ordering() -> GateResult {
    let framework = FrameworkDescriptor::from_code("SOC2");
    let mut keys = vec![
        "Principle 2: Board independence and oversight".to_string(),
        "Principle 10: Selects and develops control activities".to_string(),
        "Principle 1: Commitment to integrity and ethical values".to_string(),
    ];
    keys.sort_by(|a, b| compare_group_keys(a, b, &framework, ViewMode::Intent));
    let failures = expect_keys(
        keys,
        &[
            "Principle 1: Commitment to integrity and ethical values",
            "Principle 2: Board independence and oversight",
            "Principle 10: Selects and develops control activities",
        ],
    );
    GateResult::check("PROJECTION.SOC2_PRINCIPLE_ORDER_V1", failures)
}

fn gate_unknown_id_safety() -> GateResult {
    let mut failures = Vec::new();
    let stray = [Control::new(1, "???")];
    each_projection(&stray, |framework, view, groups| {
        if groups.len() != 1 || groups[0].key.trim().is_empty() {
            failures.push(format!("{}/{}: {:?}", framework.code, view, keys_of(groups)));
        }
    });
    GateResult::check("PROJECTION.UNKNOWN_ID_SAFETY_V1", failures)
}
