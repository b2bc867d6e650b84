use crate::error::SortError;
use crate::frame_sampler::interface::MediaKind;
use crate::sorter::main::Sorter;
use crate::sorter::routing::{decide, RoutingAction};
use crate::sorter::summary::{Outcome, RunSummary};
use std::ffi::OsStr;
use std::fs::{self, DirEntry};
use std::path::Path;

impl Sorter {
    /// Sorts every media file directly under `dir`, one at a time in name order.
    ///
    /// A file that fails is logged and left where it is; only an unreadable
    /// directory stops the run.
    pub fn run(&self, dir: &Path) -> Result<RunSummary, std::io::Error> {
        let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut summary = RunSummary::default();
        for entry in entries {
            let outcome = self.process_entry(dir, &entry);
            summary.record(&outcome);
        }

        let _ = self.logger.info(&format!("Done: {}", summary));
        Ok(summary)
    }

    fn process_entry(&self, dir: &Path, entry: &DirEntry) -> Outcome {
        let file_name = entry.file_name();
        let display_name = file_name.to_string_lossy();
        let _ = self.logger.info(&format!("Processing '{}' ...", display_name));

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                let _ = self
                    .logger
                    .warn(&format!("Failed to stat '{}': {}", display_name, e));
                return Outcome::Failed;
            }
        };

        if file_type.is_dir() {
            let _ = self.logger.info("Is a directory; skipping");
            return Outcome::Skipped;
        }

        let path = entry.path();
        let Some(kind) = MediaKind::from_path(&path) else {
            let _ = self.logger.info(&format!(
                "File type '{}'; skipping",
                path.extension().and_then(OsStr::to_str).unwrap_or("")
            ));
            return Outcome::Skipped;
        };

        match self.sort_file(dir, &file_name, kind) {
            Ok(action) => Outcome::Routed(action),
            Err(e) => {
                let _ = self.logger.warn(&format!(
                    "Failed to sort '{}': {}; leaving it in place",
                    display_name, e
                ));
                Outcome::Failed
            }
        }
    }

    pub fn sort_file(
        &self,
        dir: &Path,
        file_name: &OsStr,
        kind: MediaKind,
    ) -> Result<RoutingAction, SortError> {
        let frames = self.frame_sampler.sample(&dir.join(file_name), kind)?;

        let frames = frames
            .into_iter()
            .map(|frame| self.downscaler.downscale(frame, self.config.max_width))
            .collect::<Result<Vec<_>, _>>()?;

        let verdict = self.aggregator.aggregate(&frames, &self.config.region)?;
        let action = decide(&verdict);

        let _ = self.logger.info(&format!(
            "Quality {}, labels [{}]; {}",
            verdict.max_quality,
            verdict.labels.as_slice().join(", "),
            action
        ));

        self.file_action.execute(dir, file_name, &action)?;
        Ok(action)
    }
}
