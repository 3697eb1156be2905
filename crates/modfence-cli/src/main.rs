//! CLI entry point for modfence.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `modfence-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use modfence_app::{run_check, run_info, serialize_report, verdict_exit_code, CheckInput, GraphSource};
use modfence_render::{
    render_github_annotations, render_markdown, render_summary, render_uncovered,
    render_violation,
};

#[derive(Parser, Debug)]
#[command(
    name = "modfence",
    version,
    about = "Dependency fence checker: enforce architectural boundaries between module groups"
)]
struct Cli {
    /// Path to the policy JSON file.
    #[arg(long, default_value = "modfence.json")]
    policy: Utf8PathBuf,

    /// Repository root (directory containing the root Cargo.toml).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Read the module graph from a JSON file instead of inspecting the
    /// Cargo workspace.
    #[arg(long)]
    graph: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the policy against the module graph.
    Check {
        /// Where to write the JSON report (omit to skip the artifact).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown summary alongside the diagnostics.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,

        /// Emit GitHub Actions annotations on stdout.
        #[arg(long)]
        gha: bool,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        gha_max: usize,
    },

    /// List the constraints governing each module, without checking.
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = match &cli.cmd {
        Commands::Check {
            report_out,
            markdown_out,
            gha,
            gha_max,
        } => cmd_check(&cli, report_out.clone(), markdown_out.clone(), *gha, *gha_max),
        Commands::Info => cmd_info(&cli),
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            // Configuration and I/O failures exit 1; policy violations
            // exit 2 via the Ok path above.
            eprintln!("modfence error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(
    cli: &Cli,
    report_out: Option<Utf8PathBuf>,
    markdown_out: Option<Utf8PathBuf>,
    gha: bool,
    gha_max: usize,
) -> anyhow::Result<i32> {
    let policy_text = read_policy(&cli.policy)?;
    let graph_text = read_graph(&cli.graph)?;

    let graph = match graph_text.as_deref() {
        Some(text) => GraphSource::JsonText { text },
        None => GraphSource::CargoWorkspace {
            repo_root: &cli.repo_root,
        },
    };

    let output = run_check(CheckInput {
        policy_text: &policy_text,
        graph,
    })?;
    let report = &output.report;

    for violation in &report.violations {
        eprintln!("{}", render_violation(violation));
    }
    for module in &report.uncovered {
        eprintln!("{}", render_uncovered(module));
    }
    eprintln!("{}", render_summary(report));

    if gha {
        for line in render_github_annotations(report, gha_max) {
            println!("{line}");
        }
    }

    if let Some(path) = report_out {
        write_text_file(&path, &serialize_report(report)?)
            .context("write report json")?;
    }
    if let Some(path) = markdown_out {
        write_text_file(&path, &render_markdown(report)).context("write markdown")?;
    }

    Ok(verdict_exit_code(report.verdict))
}

fn cmd_info(cli: &Cli) -> anyhow::Result<i32> {
    let policy_text = read_policy(&cli.policy)?;
    let graph_text = read_graph(&cli.graph)?;

    let modules = match graph_text.as_deref() {
        Some(text) => modfence_graph::load_json_graph(text)?,
        None => modfence_graph::load_cargo_workspace(&cli.repo_root)?,
    };

    for entry in run_info(&policy_text, &modules)? {
        if entry.rules.is_empty() {
            eprintln!("{}", render_uncovered(&entry.module));
            continue;
        }
        println!("constraints for {}:", entry.module);
        for rule in &entry.rules {
            println!("\t{rule}");
        }
    }

    Ok(0)
}

fn read_policy(path: &Utf8PathBuf) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read policy file {path}"))
}

fn read_graph(path: &Option<Utf8PathBuf>) -> anyhow::Result<Option<String>> {
    match path {
        Some(path) => Ok(Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("read graph file {path}"))?,
        )),
        None => Ok(None),
    }
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write: {path}"))?;
    Ok(())
}
