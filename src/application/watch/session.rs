//! Sync session: one package, one source tree, one destination tree
//!
//! A tick walks the source tree once. Each entry's modification time is
//! compared with the [`SyncRecord`]; entries with a timestamp not seen before
//! are mirrored (directories created, files copied when strictly newer than
//! the destination). Per-entry failures are logged and skipped.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Observation, ResolvedPackage, SyncRecord};
use crate::domain::policies::InclusionFilter;
use crate::domain::value_objects::ReservedPaths;
use crate::infrastructure::fs::{list_entries, modified_time, ops, probe, walk_dirs, Visit};

use super::event::{SyncAction, SyncEvent, TickOutcome, TickStats, WatchOptions};
use super::reporter::ChangeReporter;

/// State owned by the watch of a single package.
pub struct SyncSession {
    package: ResolvedPackage,
    filter: InclusionFilter,
    reserved: ReservedPaths,
    reporter: ChangeReporter,
    record: SyncRecord,
    trigger_file: PathBuf,
    ticks: u64,
}

enum Step {
    Continue,
    ManifestChanged,
}

impl SyncSession {
    pub fn new(package: ResolvedPackage, options: &WatchOptions) -> Self {
        let filter = InclusionFilter::new(&package.source_root, package.manifest.file_spec());
        let reserved = ReservedPaths::new(
            &package.source_root,
            &options.modules_dir,
            &options.build_dir,
            &options.quiet_dirs,
        );

        Self {
            reporter: ChangeReporter::new(reserved.clone()),
            package,
            filter,
            reserved,
            record: SyncRecord::new(),
            trigger_file: options.trigger_file.clone(),
            ticks: 0,
        }
    }

    pub fn package(&self) -> &ResolvedPackage {
        &self.package
    }

    pub fn record(&self) -> &SyncRecord {
        &self.record
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Write the marker file into the destination. Idempotent.
    pub fn mark_destination(&self) -> io::Result<bool> {
        ops::touch_if_absent(&self.package.marker_path())
    }

    /// Run one full walk of the source tree.
    pub fn tick<F>(&mut self, sink: &mut F) -> TickOutcome
    where
        F: FnMut(SyncEvent),
    {
        let root = self.package.source_root.clone();
        let initial = self.ticks == 0;
        let mut stats = TickStats::default();
        let mut manifest_changed = false;

        walk_dirs(&root, |dir| {
            if self.reserved.is_within_pruned(dir) {
                return Visit::Prune;
            }

            for entry in list_entries(dir) {
                if self.reserved.is_pruned(&entry) {
                    continue;
                }
                if let Step::ManifestChanged =
                    self.process_entry(&entry, initial, &mut stats, sink)
                {
                    manifest_changed = true;
                    return Visit::Stop;
                }
            }

            Visit::Descend
        });

        self.ticks += 1;

        tracing::trace!(
            package = %self.package.name,
            tick = self.ticks,
            copied = stats.copied,
            dirs = stats.dirs_created,
            ignored = stats.ignored,
            unchanged = stats.unchanged,
            failed = stats.failed,
            "tick complete"
        );

        if manifest_changed {
            TickOutcome::ManifestChanged(stats)
        } else {
            TickOutcome::Completed(stats)
        }
    }

    fn process_entry<F>(
        &mut self,
        entry: &Path,
        initial: bool,
        stats: &mut TickStats,
        sink: &mut F,
    ) -> Step
    where
        F: FnMut(SyncEvent),
    {
        let meta = match probe(entry) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::debug!(error = %e, "skipping entry");
                return Step::Continue;
            }
        };

        let observation = self.record.observe(entry, meta.modified);
        if observation == Observation::Unchanged {
            stats.unchanged += 1;
            return Step::Continue;
        }

        if meta.is_dir() {
            if self.filter.is_of_interest(entry) {
                self.mirror_dir(entry, initial, stats, sink);
            }
            return Step::Continue;
        }

        if entry == self.package.manifest_path() {
            // The first sighting only seeds the record.
            if let Observation::Changed { .. } = observation {
                self.emit(entry, SyncAction::ManifestChanged, initial, sink);
                return Step::ManifestChanged;
            }
            return Step::Continue;
        }

        if !meta.is_file() {
            return Step::Continue;
        }

        if !self.filter.is_of_interest(entry) {
            stats.ignored += 1;
            self.emit(entry, SyncAction::Ignored, initial, sink);
            return Step::Continue;
        }

        let Some(dest) = self.package.destination_for(entry) else {
            return Step::Continue;
        };

        let newer = match modified_time(&dest) {
            Some(dest_modified) => meta.modified > dest_modified,
            None => true,
        };
        if !newer {
            stats.unchanged += 1;
            return Step::Continue;
        }

        match ops::replace_file(entry, &dest) {
            Ok(_) => {
                stats.copied += 1;
                self.emit(entry, SyncAction::Copied, initial, sink);
                self.pull_trigger(entry);
            }
            Err(e) => {
                stats.failed += 1;
                tracing::warn!(
                    source = %entry.display(),
                    destination = %dest.display(),
                    error = %e,
                    "copy failed"
                );
            }
        }

        Step::Continue
    }

    fn mirror_dir<F>(&mut self, entry: &Path, initial: bool, stats: &mut TickStats, sink: &mut F)
    where
        F: FnMut(SyncEvent),
    {
        let Some(dest) = self.package.destination_for(entry) else {
            return;
        };

        match ops::ensure_dir(&dest) {
            Ok(true) => {
                stats.dirs_created += 1;
                self.emit(entry, SyncAction::DirCreated, initial, sink);
            }
            Ok(false) => {}
            Err(e) => {
                stats.failed += 1;
                tracing::warn!(destination = %dest.display(), error = %e, "mkdir failed");
            }
        }
    }

    fn emit<F>(&self, entry: &Path, action: SyncAction, initial: bool, sink: &mut F)
    where
        F: FnMut(SyncEvent),
    {
        let root = &self.package.source_root;
        if !self.reporter.should_report(root, entry, action, initial) {
            return;
        }

        sink(SyncEvent {
            package: self.package.name.clone(),
            path: entry.strip_prefix(root).unwrap_or(entry).to_path_buf(),
            action,
        });
    }

    /// Touch the rebuild trigger so build watchers notice a dependency change.
    fn pull_trigger(&self, copied: &Path) {
        let content = format!(
            "{}: {} @ {}\n",
            self.package.name,
            self.package.relative_display(copied),
            chrono::Local::now().to_rfc3339()
        );

        if let Err(e) = ops::write_text(&self.trigger_file, &content) {
            tracing::warn!(trigger = %self.trigger_file.display(), error = %e, "cannot write trigger file");
        }
    }
}
