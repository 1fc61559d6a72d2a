use crate::error::CoreResult;
use crate::projection::model::ControlGroup;
use crate::projection::navigation::SectionEntry;

pub fn render_projection_csv(groups: &[ControlGroup]) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(["group_key", "control_id", "title", "status", "owner"])?;
    for group in groups {
        for control in &group.controls {
            wtr.write_record([
                group.key.as_str(),
                control.control_id.as_str(),
                control.title.as_str(),
                control.status_label().unwrap_or(""),
                control.owner_label().unwrap_or(""),
            ])?;
        }
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}

pub fn render_projection_markdown(title: &str, groups: &[ControlGroup]) -> String {
    let mut out = Vec::new();
    out.push(format!("# {}", title));
    out.push("".to_string());
    if groups.is_empty() {
        out.push("_No controls match the current filters._".to_string());
        out.push("".to_string());
        return out.join("\n");
    }

    for group in groups {
        out.push(format!("## {} ({})", group.key, group.len()));
        out.push("".to_string());
        out.push("| Control ID | Title | Status | Owner |".to_string());
        out.push("|---|---|---|---|".to_string());
        for control in &group.controls {
            out.push(format!(
                "| {} | {} | {} | {} |",
                escape_cell(&control.control_id),
                escape_cell(&control.title),
                escape_cell(control.status_label().unwrap_or("-")),
                escape_cell(control.owner_label().unwrap_or("-")),
            ));
        }
        out.push("".to_string());
    }
    out.join("\n")
}

pub fn render_section_index_markdown(sections: &[SectionEntry]) -> String {
    let mut out = Vec::new();
    for section in sections {
        out.push(format!(
            "- [{}](#{}) {} controls, {}% implemented",
            section.key,
            section.anchor,
            section.control_count,
            section.progress.percent_implemented()
        ));
    }
    out.push("".to_string());
    out.join("\n")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::model::Control;
    use crate::projection::navigation::section_index;

    fn groups() -> Vec<ControlGroup> {
        let mut c = Control::new(1, "A.5.1");
        c.title = "Policies for information security".to_string();
        c.status = Some("Implemented".to_string());
        vec![ControlGroup {
            key: "Annex A.5: Organizational Controls".to_string(),
            controls: vec![c],
        }]
    }

    #[test]
    fn csv_has_header_and_lf_endings() {
        let csv = render_projection_csv(&groups()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "group_key,control_id,title,status,owner");
        assert_eq!(
            lines[1],
            "Annex A.5: Organizational Controls,A.5.1,Policies for information security,Implemented,"
        );
        assert!(!csv.contains('\r'));
    }

    #[test]
    fn markdown_sections_follow_group_order() {
        let md = render_projection_markdown("ISO 27001", &groups());
        assert!(md.starts_with("# ISO 27001\n"));
        assert!(md.contains("## Annex A.5: Organizational Controls (1)"));
        assert!(md.contains("| A.5.1 | Policies for information security | Implemented | - |"));
    }

    #[test]
    fn empty_projection_renders_placeholder() {
        let md = render_projection_markdown("SOC 2", &[]);
        assert!(md.contains("No controls match"));
    }

    #[test]
    fn section_index_links_anchors() {
        let md = render_section_index_markdown(&section_index(&groups()));
        assert_eq!(
            md,
            "- [Annex A.5: Organizational Controls](#annex-a-5-organizational-controls) 1 controls, 100% implemented\n"
        );
    }
}
