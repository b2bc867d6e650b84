use crate::config::{LOW_QUALITY_DIRECTORY, NO_DETECTION_DIRECTORY};
use crate::sorter::routing::RoutingAction;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Routed(RoutingAction),
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub low_quality: usize,
    pub no_detection: usize,
    pub labelled: usize,
    pub fanned_out: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Routed(RoutingAction::MoveTo(name)) if name == LOW_QUALITY_DIRECTORY => {
                self.low_quality += 1
            }
            Outcome::Routed(RoutingAction::MoveTo(name)) if name == NO_DETECTION_DIRECTORY => {
                self.no_detection += 1
            }
            Outcome::Routed(RoutingAction::MoveTo(_)) => self.labelled += 1,
            Outcome::Routed(RoutingAction::HardlinkFanout(_)) => self.fanned_out += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} labelled, {} fanned out, {} without animals, {} low quality, {} skipped, {} failed",
            self.labelled,
            self.fanned_out,
            self.no_detection,
            self.low_quality,
            self.skipped,
            self.failed
        )
    }
}
