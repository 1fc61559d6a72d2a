//! Sidebar "jump to section" index and per-group progress tallies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::model::{Control, ControlGroup};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Implemented,
    InProgress,
    NotStarted,
    Other,
}

impl StatusBucket {
    pub fn from_status(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return StatusBucket::NotStarted;
        };
        let normalized = status.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "implemented" | "complete" | "completed" | "done" => StatusBucket::Implemented,
            "in_progress" | "partial" | "partially_implemented" => StatusBucket::InProgress,
            "" | "not_started" | "not_implemented" | "todo" => StatusBucket::NotStarted,
            _ => StatusBucket::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupProgress {
    pub implemented: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub other: usize,
}

impl GroupProgress {
    pub fn from_controls(controls: &[Control]) -> Self {
        let mut progress = GroupProgress::default();
        for control in controls {
            match StatusBucket::from_status(control.status_label()) {
                StatusBucket::Implemented => progress.implemented += 1,
                StatusBucket::InProgress => progress.in_progress += 1,
                StatusBucket::NotStarted => progress.not_started += 1,
                StatusBucket::Other => progress.other += 1,
            }
        }
        progress
    }

    pub fn total(&self) -> usize {
        self.implemented + self.in_progress + self.not_started + self.other
    }

    /// Whole-number share of implemented controls; 0 for an empty group.
    pub fn percent_implemented(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((self.implemented * 100) / total) as u8
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionEntry {
    pub key: String,
    pub anchor: String,
    pub position: usize,
    pub control_count: usize,
    pub progress: GroupProgress,
}

/// Builds the sidebar index in projection order. Anchors are unique slugs.
pub fn section_index(groups: &[ControlGroup]) -> Vec<SectionEntry> {
    let mut used: BTreeSet<String> = BTreeSet::new();
    groups
        .iter()
        .enumerate()
        .map(|(position, group)| {
            let base = slugify(&group.key);
            let mut anchor = base.clone();
            let mut n = 2;
            while !used.insert(anchor.clone()) {
                anchor = format!("{}-{}", base, n);
                n += 1;
            }
            SectionEntry {
                key: group.key.clone(),
                anchor,
                position,
                control_count: group.len(),
                progress: GroupProgress::from_controls(&group.controls),
            }
        })
        .collect()
}

pub fn slugify(key: &str) -> String {
    let mut slug = String::with_capacity(key.len());
    let mut pending_dash = false;
    for c in key.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(id: u64, status: Option<&str>) -> Control {
        let mut c = Control::new(id, format!("{}.1", id));
        c.status = status.map(str::to_string);
        c
    }

    #[test]
    fn slugs_collapse_punctuation() {
        assert_eq!(
            slugify("Annex A.5: Organizational Controls"),
            "annex-a-5-organizational-controls"
        );
        assert_eq!(
            slugify("CC6: Logical and Physical Access (TSC)"),
            "cc6-logical-and-physical-access-tsc"
        );
        assert_eq!(slugify("???"), "section");
    }

    #[test]
    fn colliding_anchors_get_suffixes() {
        let groups = vec![
            ControlGroup {
                key: "Data & Privacy".to_string(),
                controls: vec![with_status(1, None)],
            },
            ControlGroup {
                key: "Data / Privacy".to_string(),
                controls: vec![with_status(2, None)],
            },
        ];
        let index = section_index(&groups);
        assert_eq!(index[0].anchor, "data-privacy");
        assert_eq!(index[1].anchor, "data-privacy-2");
        assert_eq!(index[1].position, 1);
    }

    #[test]
    fn progress_tallies_status_words() {
        let controls = vec![
            with_status(1, Some("Implemented")),
            with_status(2, Some("in progress")),
            with_status(3, None),
            with_status(4, Some("Done")),
            with_status(5, Some("waived")),
        ];
        let progress = GroupProgress::from_controls(&controls);
        assert_eq!(progress.implemented, 2);
        assert_eq!(progress.in_progress, 1);
        assert_eq!(progress.not_started, 1);
        assert_eq!(progress.other, 1);
        assert_eq!(progress.percent_implemented(), 40);
        assert_eq!(GroupProgress::default().percent_implemented(), 0);
    }
}
