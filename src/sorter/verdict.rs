use crate::config::QualityScore;

/// Distinct animal labels in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the label was already present.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn sorted(&self) -> Vec<String> {
        let mut labels = self.labels.clone();
        labels.sort();
        labels
    }
}

impl<'a> FromIterator<&'a str> for LabelSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVerdict {
    pub max_quality: QualityScore,
    pub labels: LabelSet,
    pub is_multi_frame: bool,
}
