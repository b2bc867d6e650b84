use crate::file_action::interface::{
    directory_names, validate_directory_name, FileAction, FileActionError,
};
use crate::library::logger::interface::Logger;
use crate::sorter::routing::RoutingAction;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

/// Reports what would happen without touching the filesystem.
pub struct FileActionDryRun {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FileActionDryRun {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_action").with_namespace("dry_run"),
        }
    }
}

impl FileAction for FileActionDryRun {
    fn execute(
        &self,
        root: &Path,
        file_name: &OsStr,
        action: &RoutingAction,
    ) -> Result<(), FileActionError> {
        for name in directory_names(action) {
            validate_directory_name(name)?;
        }

        let _ = self.logger.info(&format!(
            "Would {} for '{}'",
            action,
            root.join(file_name).display()
        ));
        Ok(())
    }
}
