use std::collections::{BTreeMap, BTreeSet};

use super::classifier::classify;
use super::filter::ControlFilter;
use super::framework::{FrameworkDescriptor, ViewMode};
use super::model::Control;

/// Whether a control belongs in any view of `framework` under `filter`.
pub fn is_projected(
    control: &Control,
    framework: &FrameworkDescriptor,
    filter: &ControlFilter,
) -> bool {
    if !control.is_applicable {
        return false;
    }
    if let Some(framework_id) = framework.id {
        if control.framework_id != framework_id {
            return false;
        }
    }
    filter.scope.includes(control, framework.kind) && filter.matches(control)
}

/// Partitions the projected controls by grouping key.
///
/// Duplicate ids keep their first occurrence. Member order inside a bucket
/// follows input order; the sorter re-orders independently.
pub fn group(
    controls: &[Control],
    framework: &FrameworkDescriptor,
    view: ViewMode,
    filter: &ControlFilter,
) -> BTreeMap<String, Vec<Control>> {
    let mut seen: BTreeSet<u64> = BTreeSet::new();
    let mut buckets: BTreeMap<String, Vec<Control>> = BTreeMap::new();

    for control in controls.iter().filter(|c| is_projected(c, framework, filter)) {
        if !seen.insert(control.id) {
            tracing::trace!(
                id = control.id,
                control_id = %control.control_id,
                "dropping duplicate control"
            );
            continue;
        }
        let key = classify(control, framework, view);
        buckets.entry(key).or_default().push(control.clone());
    }

    buckets
}
