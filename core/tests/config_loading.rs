use controlmap_core::catalog::soc2::TrustPrinciple;
use controlmap_core::config::{load_controls, parse_controls, ProjectionConfig};
use controlmap_core::error::CoreError;
use controlmap_core::projection::facade::project;
use controlmap_core::projection::framework::{FrameworkKind, ViewMode};
use std::fs;

#[test]
fn controls_load_from_array_and_envelope() {
    let tmp = tempfile::tempdir().unwrap();
    let array_path = tmp.path().join("controls.json");
    let envelope_path = tmp.path().join("envelope.json");

    fs::write(
        &array_path,
        r#"[{"id": 1, "control_id": "4.1", "title": "Context"},
            {"id": 2, "control_id": "A.5.1", "is_applicable": false}]"#,
    )
    .unwrap();
    fs::write(
        &envelope_path,
        r#"{"total": 1, "controls": [{"id": 3, "control_id": "CC1.1", "framework_id": 9}]}"#,
    )
    .unwrap();

    let from_array = load_controls(&array_path).unwrap();
    assert_eq!(from_array.len(), 2);
    assert!(from_array[0].is_applicable);
    assert!(!from_array[1].is_applicable);
    assert_eq!(from_array[0].category, None);

    let from_envelope = load_controls(&envelope_path).unwrap();
    assert_eq!(from_envelope[0].framework_id, 9);
}

#[test]
fn malformed_control_lists_are_rejected() {
    let err = parse_controls(br#"{"items": []}"#).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));

    let err = parse_controls(br#""controls""#).unwrap_err();
    assert!(err.to_string().contains("JSON array"));

    let err = parse_controls(br#"[{"control_id": "4.1"}]"#).unwrap_err();
    assert!(matches!(err, CoreError::Json(_)));
}

#[test]
fn missing_files_surface_io_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_controls(tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn config_drives_the_projection() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("projection.json");
    fs::write(
        &cfg_path,
        r#"{
            "framework_code": "SOC 2 Type II",
            "framework_id": 4,
            "view": "business",
            "filter": {
                "search": "cc",
                "scope": { "soc2_included_principles": ["availability"] }
            }
        }"#,
    )
    .unwrap();

    let cfg = ProjectionConfig::load(&cfg_path).unwrap();
    assert_eq!(cfg.view, ViewMode::Intent);
    assert_eq!(
        cfg.filter.scope.soc2_included_principles,
        Some(vec![TrustPrinciple::Availability])
    );

    let descriptor = cfg.descriptor();
    assert_eq!(descriptor.kind, FrameworkKind::Soc2);
    assert_eq!(descriptor.id, Some(4));
    assert_eq!(descriptor.name, "SOC 2 Type II");

    let controls = parse_controls(
        br#"[
            {"id": 1, "control_id": "CC1.1", "framework_id": 4},
            {"id": 2, "control_id": "CC1.1", "framework_id": 5},
            {"id": 3, "control_id": "A1.1", "framework_id": 4}
        ]"#,
    )
    .unwrap();
    let groups = project(&controls, &descriptor, cfg.view, &cfg.filter);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].controls[0].id, 1);
}

#[test]
fn empty_config_defaults_to_generic_standard() {
    let cfg: ProjectionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.view, ViewMode::Standard);
    assert_eq!(cfg.descriptor().kind, FrameworkKind::Generic);
}
