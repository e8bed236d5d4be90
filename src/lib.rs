//! logweave — weave Uyuni server logs and the Salt event bus into a single
//! browsable HTML timeline.
//!
//! The binary wires four stages together: optional archive staging
//! ([`stage`]), collection ([`logweave_collect::collect`]), rendering
//! ([`logweave_render::render`]), and console reporting ([`summary`]).

pub mod stage;
pub mod summary;

use anyhow::Context;
use clap::{ArgGroup, Parser, ValueEnum};
use logweave_core::{CollectPolicy, SeverityPolicy, TimeWindow};
use logweave_render::RenderOptions;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logweave",
    about = "Generate an HTML timeline view of Uyuni and Salt logs",
    group(
        ArgGroup::new("input")
            .required(true)
            .multiple(false)
            .args(["logs_path", "archive_path"])
    )
)]
pub struct Cli {
    /// Generated output HTML file.
    #[arg(short, long, default_value = "output.html")]
    pub output: PathBuf,

    /// Only events at or after this datetime (example: 2021-11-11T16:23:28.804535).
    #[arg(short, long)]
    pub from: Option<String>,

    /// Only events at or before this datetime.
    #[arg(short, long)]
    pub until: Option<String>,

    /// Path to a directory of log files.
    #[arg(short = 'p', long)]
    pub logs_path: Option<PathBuf>,

    /// Path to a supportconfig tarball (tar.gz, txz or tar.bz2).
    #[arg(short = 's', long)]
    pub archive_path: Option<PathBuf>,

    /// Severity filter applied to the salt master and api logs.
    #[arg(long, value_enum, default_value_t = SeverityArg::DropNoise)]
    pub severity_policy: SeverityArg,

    /// Keep the archive staging directory instead of removing it.
    #[arg(long)]
    pub skip_cleanup: bool,

    /// Enable debug diagnostics on stderr.
    #[arg(long)]
    pub debug: bool,
}

/// CLI surface for [`SeverityPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    /// Drop DEBUG and WARNING records.
    DropNoise,
    /// Drop records whose level contains ERROR.
    DropErrors,
}

impl From<SeverityArg> for SeverityPolicy {
    fn from(arg: SeverityArg) -> SeverityPolicy {
        match arg {
            SeverityArg::DropNoise => SeverityPolicy::DropNoise,
            SeverityArg::DropErrors => SeverityPolicy::DropErrors,
        }
    }
}

/// Run one full collect-and-render pass.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    summary::banner();
    summary::options(
        cli.from.as_deref(),
        cli.until.as_deref(),
        cli.logs_path.as_deref(),
        cli.archive_path.as_deref(),
    );

    let window = TimeWindow::parse(cli.from.as_deref(), cli.until.as_deref())?;
    let policy = CollectPolicy {
        severity: cli.severity_policy.into(),
        ..CollectPolicy::default()
    };

    let staged = match &cli.archive_path {
        Some(archive) => Some(stage::StagedArchive::unpack(archive)?),
        None => None,
    };
    let logs_root = match (&cli.logs_path, &staged) {
        (Some(path), _) => path.clone(),
        (None, Some(staged)) => staged.logs_root()?,
        // clap's input group guarantees exactly one of the two is set.
        (None, None) => unreachable!("argument group requires an input path"),
    };

    let outcome = logweave_collect::collect(&logs_root, &window, &policy)?;
    summary::sources(&outcome.reports);

    let html = logweave_render::render(&outcome.timeline, &RenderOptions::default());
    fs::write(&cli.output, html)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    summary::summary(&outcome.stats);
    summary::results(&cli.output);

    if let Some(staged) = staged {
        staged.cleanup(cli.skip_cleanup)?;
    }
    summary::finished();
    Ok(())
}
