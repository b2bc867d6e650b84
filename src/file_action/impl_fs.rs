use crate::file_action::interface::{
    directory_names, validate_directory_name, FileAction, FileActionError,
};
use crate::library::logger::interface::Logger;
use crate::sorter::routing::RoutingAction;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct FileActionFs {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FileActionFs {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_action"),
        }
    }

    fn move_to(&self, root: &Path, file_name: &OsStr, name: &str) -> Result<(), FileActionError> {
        let source = root.join(file_name);
        let destination = ensure_directory(root, name)?.join(file_name);
        if destination.exists() {
            return Err(FileActionError::DestinationExists(destination));
        }

        fs::rename(&source, &destination).map_err(|e| FileActionError::Move {
            from: source.clone(),
            to: destination.clone(),
            source: e,
        })?;

        let _ = self.logger.info(&format!("Moved to '{}'", name));
        Ok(())
    }

    /// Links the file into every directory and only then removes the original.
    /// If anything fails, links made so far are removed again so the original
    /// is the only copy left.
    fn hardlink_fanout(
        &self,
        root: &Path,
        file_name: &OsStr,
        names: &[String],
    ) -> Result<(), FileActionError> {
        let source = root.join(file_name);
        let mut created: Vec<PathBuf> = Vec::with_capacity(names.len());

        for name in names {
            match self.link_into(root, file_name, &source, name) {
                Ok(link) => {
                    let _ = self.logger.info(&format!("Hardlinked to '{}'", name));
                    created.push(link);
                }
                Err(error) => {
                    self.roll_back(&created);
                    return Err(error);
                }
            }
        }

        if let Err(e) = fs::remove_file(&source) {
            self.roll_back(&created);
            return Err(FileActionError::RemoveOriginal {
                path: source,
                source: e,
            });
        }

        Ok(())
    }

    fn link_into(
        &self,
        root: &Path,
        file_name: &OsStr,
        source: &Path,
        name: &str,
    ) -> Result<PathBuf, FileActionError> {
        let destination = ensure_directory(root, name)?.join(file_name);
        fs::hard_link(source, &destination).map_err(|e| FileActionError::Link {
            from: source.to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;
        Ok(destination)
    }

    fn roll_back(&self, links: &[PathBuf]) {
        for link in links {
            if let Err(e) = fs::remove_file(link) {
                let _ = self.logger.warn(&format!(
                    "Failed to remove partial hardlink '{}': {}",
                    link.display(),
                    e
                ));
            }
        }
    }
}

impl FileAction for FileActionFs {
    fn execute(
        &self,
        root: &Path,
        file_name: &OsStr,
        action: &RoutingAction,
    ) -> Result<(), FileActionError> {
        for name in directory_names(action) {
            validate_directory_name(name)?;
        }

        match action {
            RoutingAction::MoveTo(name) => self.move_to(root, file_name, name),
            RoutingAction::HardlinkFanout(names) => self.hardlink_fanout(root, file_name, names),
        }
    }
}

fn ensure_directory(root: &Path, name: &str) -> Result<PathBuf, FileActionError> {
    let directory = root.join(name);
    fs::create_dir_all(&directory).map_err(|source| FileActionError::CreateDirectory {
        path: directory.clone(),
        source,
    })?;
    Ok(directory)
}
