use controlmap_core::projection::facade::project;
use controlmap_core::projection::filter::ControlFilter;
use controlmap_core::projection::framework::{FrameworkDescriptor, ViewMode};
use controlmap_core::projection::grouper::is_projected;
use controlmap_core::projection::model::Control;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn control_id() -> impl Strategy<Value = String> {
    prop_oneof![
        (4u32..12, 1u32..20).prop_map(|(c, s)| format!("{}.{}", c, s)),
        (1u32..10, 1u32..40).prop_map(|(a, s)| format!("A.{}.{}", a, s)),
        (1u32..10, 0u32..6).prop_map(|(s, p)| format!("CC{}.{}", s, p)),
        prop::sample::select(vec!["A1.2", "C1.1", "PI1.3", "P2.0", "X"])
            .prop_map(str::to_string),
        prop::sample::select(vec!["GV", "ID", "PR", "DE", "RS", "RC", "ZZ"])
            .prop_map(|f| format!("{}.AB-01", f)),
        "[ -~]{0,12}",
    ]
}

fn hint() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Risk treatment",
        "Access control",
        "Clause 6: Planning",
        "Vendor oversight",
        "",
        "Something else",
    ]))
    .prop_map(|h| h.map(str::to_string))
}

fn control() -> impl Strategy<Value = Control> {
    (
        0u64..30,
        control_id(),
        hint(),
        hint(),
        hint(),
        any::<bool>(),
        prop::option::of(prop::sample::select(vec!["Implemented", "In Progress"])),
    )
        .prop_map(|(id, control_id, category, domain, process, applicable, status)| {
            let mut c = Control::new(id, control_id);
            c.category = category;
            c.domain = domain;
            c.process_name = process;
            c.is_applicable = applicable;
            c.status = status.map(str::to_string);
            c
        })
}

fn framework() -> impl Strategy<Value = FrameworkDescriptor> {
    prop::sample::select(vec!["ISO27001", "ISO42001", "SOC2", "NIST_CSF", "HIPAA"])
        .prop_map(FrameworkDescriptor::from_code)
}

fn view() -> impl Strategy<Value = ViewMode> {
    prop_oneof![Just(ViewMode::Standard), Just(ViewMode::Intent)]
}

fn filter() -> impl Strategy<Value = ControlFilter> {
    prop::option::of(prop::sample::select(vec!["", "implemented", "in progress"])).prop_map(
        |status| ControlFilter {
            status: status.map(str::to_string),
            ..ControlFilter::default()
        },
    )
}

proptest! {
    #[test]
    fn projection_is_idempotent(
        controls in prop::collection::vec(control(), 0..40),
        framework in framework(),
        view in view(),
        filter in filter(),
    ) {
        let a = project(&controls, &framework, view, &filter);
        let b = project(&controls, &framework, view, &filter);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn projection_is_complete_without_duplicates(
        controls in prop::collection::vec(control(), 0..40),
        framework in framework(),
        view in view(),
        filter in filter(),
    ) {
        let groups = project(&controls, &framework, view, &filter);

        // First projected occurrence of each id is the one expected.
        let mut expected: BTreeMap<u64, Control> = BTreeMap::new();
        for c in controls.iter().filter(|c| is_projected(c, &framework, &filter)) {
            expected.entry(c.id).or_insert_with(|| c.clone());
        }

        let mut seen: BTreeMap<u64, Control> = BTreeMap::new();
        for group in &groups {
            prop_assert!(!group.controls.is_empty());
            prop_assert!(!group.key.trim().is_empty());
            for c in &group.controls {
                prop_assert!(seen.insert(c.id, c.clone()).is_none(), "id {} appears twice", c.id);
            }
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn group_keys_are_unique(
        controls in prop::collection::vec(control(), 0..40),
        framework in framework(),
        view in view(),
    ) {
        let groups = project(&controls, &framework, view, &ControlFilter::default());
        let mut keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(before, keys.len());
    }
}
