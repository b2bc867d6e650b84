use crate::sorter::routing::RoutingAction;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileActionError {
    #[error("invalid directory name {0:?}")]
    InvalidDirectoryName(String),

    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("destination already exists: '{}'", .0.display())]
    DestinationExists(PathBuf),

    #[error("failed to move '{}' to '{}': {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create hardlink from '{}' to '{}': {source}", .from.display(), .to.display())]
    Link {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove original file '{}': {source}", .path.display())]
    RemoveOriginal {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Applies a routing decision to a file that lives directly under `root`.
pub trait FileAction: Send + Sync {
    fn execute(
        &self,
        root: &Path,
        file_name: &OsStr,
        action: &RoutingAction,
    ) -> Result<(), FileActionError>;
}

/// Destination directories must be exactly one plain path component under the root.
pub fn validate_directory_name(name: &str) -> Result<(), FileActionError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(FileActionError::InvalidDirectoryName(name.to_string())),
    }
}

pub fn directory_names(action: &RoutingAction) -> &[String] {
    match action {
        RoutingAction::MoveTo(name) => std::slice::from_ref(name),
        RoutingAction::HardlinkFanout(names) => names,
    }
}
