use serde::{Deserialize, Serialize};

use super::filter::ControlFilter;
use super::framework::{FrameworkDescriptor, FrameworkKind, ViewMode};
use super::grouper::group;
use super::model::{Control, ControlGroup};
use super::sorter::{sort_groups, sort_members};

/// Projects a flat control list into ordered groups for one framework and
/// view. Identical inputs always give identical output.
pub fn project(
    controls: &[Control],
    framework: &FrameworkDescriptor,
    view: ViewMode,
    filter: &ControlFilter,
) -> Vec<ControlGroup> {
    let buckets = group(controls, framework, view, filter);
    let groups: Vec<ControlGroup> = sort_groups(buckets, framework, view)
        .into_iter()
        .map(|(key, members)| ControlGroup {
            key,
            controls: sort_members(members),
        })
        .collect();

    tracing::debug!(
        framework = %framework.code,
        view = %view,
        input = controls.len(),
        projected = groups.iter().map(ControlGroup::len).sum::<usize>(),
        groups = groups.len(),
        "projected controls"
    );
    groups
}

/// Projection plus the inputs that produced it, as handed to exporters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectionReport {
    pub framework_code: String,
    pub framework_name: String,
    pub framework_kind: FrameworkKind,
    pub view: ViewMode,
    pub control_count: usize,
    pub groups: Vec<ControlGroup>,
}

impl ProjectionReport {
    pub fn build(
        controls: &[Control],
        framework: &FrameworkDescriptor,
        view: ViewMode,
        filter: &ControlFilter,
    ) -> Self {
        let groups = project(controls, framework, view, filter);
        Self {
            framework_code: framework.code.clone(),
            framework_name: framework.name.clone(),
            framework_kind: framework.kind,
            view,
            control_count: groups.iter().map(ControlGroup::len).sum(),
            groups,
        }
    }

    pub fn group_keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }
}
