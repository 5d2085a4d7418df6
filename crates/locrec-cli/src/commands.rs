use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context};
use serde_json::json;

use locrec_diff::key_set;
use locrec_sdk::{FragmentSource, MergeRequest, Reconciler, ReconcilerConfig, TargetOutcome};
use locrec_store::{DocumentStore, FsDocumentStore};

use crate::cli::*;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Diff(args) => cmd_diff(&cli.config, &cli.format, args),
        Command::Backfill(args) => cmd_backfill(&cli.config, &cli.format, args),
        Command::Merge(args) => cmd_merge(&cli.config, &cli.format, args),
        Command::Keys(args) => cmd_keys(&cli.format, args),
    }
}

/// Build the reconciler config from an optional file plus flag overrides.
pub fn build_config(args: &ConfigArgs) -> anyhow::Result<ReconcilerConfig> {
    let mut config = match (&args.config, &args.baseline) {
        (Some(path), _) => ReconcilerConfig::from_file(path)?,
        (None, Some(baseline)) => ReconcilerConfig::new(baseline),
        (None, None) => bail!("either --config or --baseline is required"),
    };
    if let Some(baseline) = &args.baseline {
        config.baseline = baseline.clone();
    }
    for (locale, path) in &args.targets {
        config.targets.insert(locale.clone(), path.clone());
    }
    if let Some(dir) = &args.locales_dir {
        config.locales_dir = Some(dir.clone());
    }
    if let Some(pages_path) = &args.pages_path {
        config.pages_path = pages_path.clone();
    }
    Ok(config.resolve()?)
}

fn cmd_diff(config: &ConfigArgs, format: &OutputFormat, args: DiffArgs) -> anyhow::Result<ExitCode> {
    let reconciler = Reconciler::open(build_config(config)?);
    let outcomes = reconciler.diff(&args.locales)?;

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                print!("{}", render::diff_text(outcome, args.list));
            }
        }
        OutputFormat::Json => print_json("diff", &outcomes)?,
    }
    report_failures(&outcomes);

    let missing: usize = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .map(|r| r.missing_count())
        .sum();
    Ok(exit_code(
        all_ok(&outcomes) && !(args.fail_on_missing && missing > 0),
    ))
}

fn cmd_backfill(config: &ConfigArgs, format: &OutputFormat, args: BackfillArgs) -> anyhow::Result<ExitCode> {
    let reconciler = Reconciler::open(build_config(config)?);
    let outcomes = reconciler.backfill(&args.locales, args.dry_run)?;

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                print!("{}", render::backfill_text(outcome));
            }
        }
        OutputFormat::Json => print_json("backfill", &outcomes)?,
    }
    report_failures(&outcomes);
    Ok(exit_code(all_ok(&outcomes)))
}

fn cmd_merge(config: &ConfigArgs, format: &OutputFormat, args: MergeArgs) -> anyhow::Result<ExitCode> {
    let source = match (args.from, args.from_dir) {
        (Some(file), None) => FragmentSource::Single(file),
        (None, Some(dir)) => FragmentSource::PerLocale(dir),
        _ => bail!("exactly one of --from or --from-dir is required"),
    };
    let request = MergeRequest {
        source,
        target_path: args.into.unwrap_or_else(|| args.path.clone()),
        source_path: args.path,
        create_missing: args.create_missing,
        dry_run: args.dry_run,
    };

    let reconciler = Reconciler::open(build_config(config)?);
    let outcomes = reconciler.merge(&request, &args.locales)?;

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                print!("{}", render::merge_text(outcome));
            }
        }
        OutputFormat::Json => print_json("merge", &outcomes)?,
    }
    report_failures(&outcomes);
    Ok(exit_code(all_ok(&outcomes)))
}

fn cmd_keys(format: &OutputFormat, args: KeysArgs) -> anyhow::Result<ExitCode> {
    let document = FsDocumentStore::new()
        .load(Path::new(&args.file))
        .with_context(|| format!("cannot list keys of {}", args.file.display()))?;
    let keys = key_set(document.root());
    match format {
        OutputFormat::Text => {
            for key in &keys {
                println!("{key}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&keys)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_json<T: serde::Serialize>(command: &str, outcomes: &[TargetOutcome<T>]) -> anyhow::Result<()> {
    let doc = json_envelope(command, outcomes)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// `{command, targets: [...]}` document for `--format json`.
fn json_envelope<T: serde::Serialize>(
    command: &str,
    outcomes: &[TargetOutcome<T>],
) -> anyhow::Result<serde_json::Value> {
    let targets = outcomes
        .iter()
        .map(render::outcome_json)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(json!({ "command": command, "targets": targets }))
}

fn report_failures<T>(outcomes: &[TargetOutcome<T>]) {
    for line in outcomes.iter().filter_map(render::failure_text) {
        eprintln!("{line}");
    }
}

fn all_ok<T>(outcomes: &[TargetOutcome<T>]) -> bool {
    outcomes.iter().all(TargetOutcome::is_ok)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
