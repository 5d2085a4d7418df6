use std::path::{Path, PathBuf};

use tracing::{info, warn};

use locrec_diff::{diff_documents, DiffOptions, DiffReport};
use locrec_merge::{backfill_pages, graft, BackfillReport, MergeError};
use locrec_store::{DocumentStore, FsDocumentStore, StoreError, Unavailable};
use locrec_types::{Document, KeyPath};

use crate::config::ReconcilerConfig;
use crate::error::SdkResult;
use crate::outcome::{Applied, GraftReport, TargetOutcome};

/// Where the fragments for a merge come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentSource {
    /// One document applied to every selected target.
    Single(PathBuf),
    /// One document per locale: `<dir>/<locale>.json`.
    PerLocale(PathBuf),
}

/// Parameters of a fragment merge.
#[derive(Clone, Debug)]
pub struct MergeRequest {
    pub source: FragmentSource,
    /// Subtree of the fragment to copy. The root means the whole fragment.
    pub source_path: KeyPath,
    /// Where the subtree lands in each target.
    pub target_path: KeyPath,
    /// Start from an empty document when a target file does not exist.
    pub create_missing: bool,
    pub dry_run: bool,
}

/// Batch driver over one baseline and many target documents.
pub struct Reconciler<S: DocumentStore> {
    config: ReconcilerConfig,
    store: S,
}

impl Reconciler<FsDocumentStore> {
    /// A reconciler over files on disk, writing with the configured indent.
    pub fn open(config: ReconcilerConfig) -> Self {
        let store = FsDocumentStore::with_indent(config.indent);
        Self::with_store(config, store)
    }
}

impl<S: DocumentStore> Reconciler<S> {
    pub fn with_store(config: ReconcilerConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Report the keys each selected target is missing.
    ///
    /// Fails as a whole only if the baseline is unavailable or a locale is
    /// unknown; a target that cannot be loaded yields a failed outcome.
    pub fn diff(&self, locales: &[String]) -> SdkResult<Vec<TargetOutcome<DiffReport>>> {
        let targets = self.config.select(locales)?;
        let baseline = self.store.load(&self.config.baseline)?;
        let options = DiffOptions {
            drill_down: Some(self.config.pages_path.clone()),
        };

        Ok(self.for_each_target(targets, |_, path| {
            let target = self.store.load(path)?;
            Ok(diff_documents(&baseline, &target, &options))
        }))
    }

    /// Copy pages that are wholly missing from each target.
    pub fn backfill(
        &self,
        locales: &[String],
        dry_run: bool,
    ) -> SdkResult<Vec<TargetOutcome<Applied<BackfillReport>>>> {
        let targets = self.config.select(locales)?;
        let baseline = self.store.load(&self.config.baseline)?;
        if baseline.get_container(&self.config.pages_path).is_none() {
            return Err(MergeError::SourceMissing {
                path: self.config.pages_path.to_string(),
            }
            .into());
        }

        Ok(self.for_each_target(targets, |_, path| {
            let mut target = self.store.load(path)?;
            let report = backfill_pages(&baseline, &mut target, &self.config.pages_path)?;
            let written = report.changed() && !dry_run;
            if written {
                self.store.save(path, &target)?;
            }
            Ok(Applied { report, written })
        }))
    }

    /// Install a fragment subtree into each target.
    pub fn merge(
        &self,
        request: &MergeRequest,
        locales: &[String],
    ) -> SdkResult<Vec<TargetOutcome<Applied<GraftReport>>>> {
        let targets = self.config.select(locales)?;
        let shared = match &request.source {
            FragmentSource::Single(path) => {
                let fragment = self.store.load(path)?;
                if !fragment.contains(&request.source_path) {
                    return Err(MergeError::SourceMissing {
                        path: request.source_path.to_string(),
                    }
                    .into());
                }
                Some(fragment)
            }
            FragmentSource::PerLocale(_) => None,
        };

        Ok(self.for_each_target(targets, |locale, path| {
            let per_locale;
            let fragment = match (&shared, &request.source) {
                (Some(fragment), _) => fragment,
                (None, FragmentSource::PerLocale(dir)) => {
                    per_locale = self.store.load(&dir.join(format!("{locale}.json")))?;
                    &per_locale
                }
                (None, FragmentSource::Single(path)) => {
                    per_locale = self.store.load(path)?;
                    &per_locale
                }
            };

            let (mut target, created) = self.load_or_create(path, request.create_missing)?;
            let previous = graft(fragment, &request.source_path, &mut target, &request.target_path)?;
            let written = !request.dry_run;
            if written {
                self.store.save(path, &target)?;
            }
            Ok(Applied {
                report: GraftReport {
                    replaced: previous.is_some(),
                    created,
                },
                written,
            })
        }))
    }

    fn load_or_create(&self, path: &Path, create_missing: bool) -> SdkResult<(Document, bool)> {
        match self.store.load(path) {
            Ok(document) => Ok((document, false)),
            Err(StoreError::DocumentUnavailable {
                reason: Unavailable::NotFound,
                ..
            }) if create_missing => {
                info!(path = %path.display(), "starting missing target from an empty document");
                Ok((Document::empty(), true))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn for_each_target<T, F>(&self, targets: Vec<(String, PathBuf)>, mut op: F) -> Vec<TargetOutcome<T>>
    where
        F: FnMut(&str, &Path) -> SdkResult<T>,
    {
        targets
            .into_iter()
            .map(|(locale, path)| {
                let result = op(&locale, &path);
                match &result {
                    Ok(_) => info!(locale = %locale, path = %path.display(), "target processed"),
                    Err(e) => warn!(locale = %locale, path = %path.display(), error = %e, "target failed"),
                }
                TargetOutcome { locale, path, result }
            })
            .collect()
    }
}
