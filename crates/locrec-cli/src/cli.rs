use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use locrec_types::KeyPath;

#[derive(Parser)]
#[command(
    name = "locrec",
    about = "Localization file reconciler: find missing keys, backfill pages, merge translated fragments",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the baseline and targets come from. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Baseline document
    #[arg(long, global = true)]
    pub baseline: Option<PathBuf>,
    /// Target document as LOCALE=PATH (repeatable)
    #[arg(long = "target", global = true, value_parser = parse_target)]
    pub targets: Vec<(String, PathBuf)>,
    /// Directory whose *.json files become targets
    #[arg(long, global = true)]
    pub locales_dir: Option<PathBuf>,
    /// Collection that gets per-item reporting and backfill
    #[arg(long, global = true)]
    pub pages_path: Option<KeyPath>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report keys the baseline has but targets lack
    Diff(DiffArgs),
    /// Copy pages that targets are missing entirely
    Backfill(BackfillArgs),
    /// Install a translated fragment subtree into targets
    Merge(MergeArgs),
    /// Print the key set of one document
    Keys(KeysArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Restrict to these locales (repeatable)
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,
    /// List every missing key, not only the grouped counts
    #[arg(long)]
    pub list: bool,
    /// Exit with status 1 if any key is missing
    #[arg(long)]
    pub fail_on_missing: bool,
}

#[derive(Args)]
pub struct BackfillArgs {
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,
    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Fragment document applied to every target
    #[arg(long, conflicts_with = "from_dir", required_unless_present = "from_dir")]
    pub from: Option<PathBuf>,
    /// Directory holding one <locale>.json fragment per target
    #[arg(long)]
    pub from_dir: Option<PathBuf>,
    /// Key path of the subtree to copy out of the fragment
    #[arg(long)]
    pub path: KeyPath,
    /// Key path to install at in each target (defaults to --path)
    #[arg(long)]
    pub into: Option<KeyPath>,
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,
    /// Start from an empty document when a target file is missing
    #[arg(long)]
    pub create_missing: bool,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct KeysArgs {
    pub file: PathBuf,
}

fn parse_target(s: &str) -> Result<(String, PathBuf), String> {
    let (locale, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LOCALE=PATH, got '{s}'"))?;
    if locale.is_empty() || path.is_empty() {
        return Err(format!("expected LOCALE=PATH, got '{s}'"));
    }
    Ok((locale.to_string(), PathBuf::from(path)))
}
