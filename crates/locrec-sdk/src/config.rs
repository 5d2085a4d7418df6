//! Reconciler configuration.
//!
//! The baseline document and the `{locale -> path}` target table are explicit
//! configuration, loaded once at startup from a TOML file and/or command-line
//! flags and then passed by reference to the [`Reconciler`](crate::Reconciler).
//!
//! ```toml
//! baseline = "src/locales/en.json"
//! locales_dir = "src/locales"
//! pages_path = "seoPages.pages"
//! indent = 4
//!
//! [targets]
//! zh-TW = "src/locales/zh-TW.json"
//! ```
//!
//! Relative paths in a config file are resolved against the file's directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use walkdir::WalkDir;

use locrec_store::DEFAULT_INDENT;
use locrec_types::KeyPath;

use crate::error::{SdkError, SdkResult};

/// Widest indentation accepted for written documents.
pub const MAX_INDENT: usize = 16;

const DEFAULT_PAGES_PATH: &str = "seoPages.pages";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReconcilerConfig {
    /// The authoritative document whose keys define complete coverage.
    pub baseline: PathBuf,
    /// Target documents by locale identifier.
    #[serde(default)]
    pub targets: BTreeMap<String, PathBuf>,
    /// Directory scanned for additional `<locale>.json` targets.
    #[serde(default)]
    pub locales_dir: Option<PathBuf>,
    /// The nested collection that gets a per-item breakdown and backfill.
    #[serde(default = "default_pages_path")]
    pub pages_path: KeyPath,
    /// Spaces per indentation level when writing documents.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_pages_path() -> KeyPath {
    KeyPath::from_segments(DEFAULT_PAGES_PATH.split('.')).unwrap_or_default()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl ReconcilerConfig {
    /// A config with the given baseline, no targets, and default settings.
    pub fn new(baseline: impl Into<PathBuf>) -> Self {
        Self {
            baseline: baseline.into(),
            targets: BTreeMap::new(),
            locales_dir: None,
            pages_path: default_pages_path(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Add or replace one target.
    pub fn with_target(mut self, locale: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.targets.insert(locale.into(), path.into());
        self
    }

    /// Parse a config from TOML text. Paths are taken as written.
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        toml::from_str(text).map_err(|e| SdkError::Config(format!("toml parse error: {e}")))
    }

    /// Read and parse a config file, resolving relative paths against the
    /// file's directory.
    pub fn from_file(path: &Path) -> SdkResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SdkError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.rebase(base))
    }

    /// Resolve every relative path against `base`.
    pub fn rebase(mut self, base: &Path) -> Self {
        let resolve = |p: &Path| if p.is_relative() { base.join(p) } else { p.to_path_buf() };
        self.baseline = resolve(self.baseline.as_path());
        self.locales_dir = self.locales_dir.as_deref().map(resolve);
        for path in self.targets.values_mut() {
            *path = resolve(path.as_path());
        }
        self
    }

    /// Add every `*.json` file directly inside `locales_dir` as a target named
    /// by its file stem. The baseline and explicitly configured locales are
    /// skipped.
    pub fn discover_targets(&mut self) -> SdkResult<()> {
        let Some(dir) = self.locales_dir.clone() else {
            return Ok(());
        };
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                SdkError::Config(format!("failed to scan '{}': {}", dir.display(), e))
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("json")
                || same_file(path, &self.baseline)
            {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if !self.targets.contains_key(locale) {
                debug!(locale, path = %path.display(), "discovered target");
                self.targets.insert(locale.to_string(), path.to_path_buf());
            }
        }
        Ok(())
    }

    /// Check the config is usable.
    pub fn validate(&self) -> SdkResult<()> {
        if self.targets.is_empty() {
            return Err(SdkError::Config("no target documents configured".into()));
        }
        if self.indent > MAX_INDENT {
            return Err(SdkError::Config(format!(
                "indent {} exceeds maximum of {MAX_INDENT}",
                self.indent
            )));
        }
        if let Some((locale, _)) = self
            .targets
            .iter()
            .find(|(_, path)| same_file(path, &self.baseline))
        {
            return Err(SdkError::Config(format!(
                "target '{locale}' is the baseline document"
            )));
        }
        Ok(())
    }

    /// Discover targets, then validate.
    pub fn resolve(mut self) -> SdkResult<Self> {
        self.discover_targets()?;
        self.validate()?;
        Ok(self)
    }

    /// The targets an operation should visit. An empty selection means all.
    pub fn select(&self, locales: &[String]) -> SdkResult<Vec<(String, PathBuf)>> {
        if locales.is_empty() {
            return Ok(self
                .targets
                .iter()
                .map(|(locale, path)| (locale.clone(), path.clone()))
                .collect());
        }
        locales
            .iter()
            .map(|locale| {
                self.targets
                    .get(locale)
                    .map(|path| (locale.clone(), path.clone()))
                    .ok_or_else(|| SdkError::UnknownLocale(locale.clone()))
            })
            .collect()
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
