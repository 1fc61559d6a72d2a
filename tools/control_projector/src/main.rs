use clap::{Parser, ValueEnum};
use controlmap_core::config::{load_controls, ProjectionConfig};
use controlmap_core::error::CoreResult;
use controlmap_core::export::fingerprint::projection_fingerprint;
use controlmap_core::export::render::{
    render_projection_csv, render_projection_markdown, render_section_index_markdown,
};
use controlmap_core::projection::facade::ProjectionReport;
use controlmap_core::projection::framework::ViewMode;
use controlmap_core::projection::navigation::section_index;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Projects a control export into the standard or business view of a framework.
#[derive(Parser, Debug)]
#[command(name = "control_projector", version, about, long_about = None)]
struct Cli {
    /// JSON file with a control array or a `{"controls": [...]}` envelope.
    #[arg(long)]
    controls: PathBuf,

    /// Projection config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Framework code, e.g. ISO27001, SOC2, NIST_CSF.
    #[arg(long)]
    framework: Option<String>,

    /// Keep only controls of this backend framework id.
    #[arg(long)]
    framework_id: Option<u64>,

    #[arg(long)]
    view: Option<ViewMode>,

    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    status: Option<String>,

    #[arg(long)]
    owner: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
    Csv,
    Sections,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> CoreResult<String> {
    let cfg = resolve_config(cli)?;
    let controls = load_controls(&cli.controls)?;
    let descriptor = cfg.descriptor();
    tracing::info!(
        framework = %descriptor.code,
        kind = ?descriptor.kind,
        view = %cfg.view,
        "projecting {} controls",
        controls.len()
    );

    let report = ProjectionReport::build(&controls, &descriptor, cfg.view, &cfg.filter);
    match cli.format {
        OutputFormat::Json => {
            let fingerprint = projection_fingerprint(&report.groups)?;
            let mut value = serde_json::to_value(&report)?;
            value["fingerprint"] = serde_json::Value::String(fingerprint);
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Markdown => {
            let title = format!("{} ({} view)", report.framework_name, report.view);
            Ok(render_projection_markdown(&title, &report.groups))
        }
        OutputFormat::Csv => render_projection_csv(&report.groups),
        OutputFormat::Sections => Ok(render_section_index_markdown(&section_index(
            &report.groups,
        ))),
    }
}

fn resolve_config(cli: &Cli) -> CoreResult<ProjectionConfig> {
    let mut cfg = match &cli.config {
        Some(path) => ProjectionConfig::load(path)?,
        None => ProjectionConfig::default(),
    };
    if let Some(code) = &cli.framework {
        cfg.framework_code = code.clone();
    }
    if let Some(id) = cli.framework_id {
        cfg.framework_id = Some(id);
    }
    if let Some(view) = cli.view {
        cfg.view = view;
    }
    if let Some(search) = &cli.search {
        cfg.filter.search = Some(search.clone());
    }
    if let Some(status) = &cli.status {
        cfg.filter.status = Some(status.clone());
    }
    if let Some(owner) = &cli.owner {
        cfg.filter.owner = Some(owner.clone());
    }
    if cfg.framework_code.trim().is_empty() {
        tracing::warn!("no framework code given; using generic grouping");
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::parse_from([
            "control_projector",
            "--controls",
            "controls.json",
            "--framework",
            "SOC2",
            "--view",
            "intent",
            "--status",
            "Implemented",
        ]);
        let cfg = resolve_config(&cli).unwrap();
        assert_eq!(cfg.framework_code, "SOC2");
        assert_eq!(cfg.view, ViewMode::Intent);
        assert_eq!(cfg.filter.status.as_deref(), Some("Implemented"));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
