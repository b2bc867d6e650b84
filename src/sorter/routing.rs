use crate::config::{LOW_QUALITY_DIRECTORY, NO_DETECTION_DIRECTORY, QUALITY_PASS_THRESHOLD};
use crate::sorter::verdict::FileVerdict;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingAction {
    MoveTo(String),
    /// Hardlink into every directory, then remove the original.
    HardlinkFanout(Vec<String>),
}

impl Display for RoutingAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveTo(name) => write!(f, "move to '{}'", name),
            Self::HardlinkFanout(names) => write!(f, "hardlink to '{}'", names.join("', '")),
        }
    }
}

/// Picks where a file goes. Low quality wins over any label; several labels
/// only fan out when they came from different frames of a video, otherwise the
/// first label seen wins.
pub fn decide(verdict: &FileVerdict) -> RoutingAction {
    if verdict.max_quality < QUALITY_PASS_THRESHOLD {
        return RoutingAction::MoveTo(LOW_QUALITY_DIRECTORY.to_string());
    }

    match verdict.labels.as_slice() {
        [] => RoutingAction::MoveTo(NO_DETECTION_DIRECTORY.to_string()),
        [only] => RoutingAction::MoveTo(only.clone()),
        [first, ..] if !verdict.is_multi_frame => RoutingAction::MoveTo(first.clone()),
        _ => RoutingAction::HardlinkFanout(verdict.labels.sorted()),
    }
}
