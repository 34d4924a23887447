use serde::{Deserialize, Serialize};

/// Dataset-level statistics gathered by the directory scanner.
///
/// Consumed verbatim by the report formatter; this engine never computes
/// these figures itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Total number of files in the dataset.
    pub total_files: u64,
    /// Total dataset size in bytes.
    pub size_bytes: u64,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub sessions: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub modalities: Vec<String>,
}

impl DatasetSummary {
    /// Session count as displayed in the summary block.
    ///
    /// Datasets without explicit session directories still have one implicit
    /// session, so the display floor is 1.
    pub fn display_session_count(&self) -> usize {
        self.sessions.len().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_count_floors_at_one() {
        let summary = DatasetSummary::default();
        assert_eq!(summary.display_session_count(), 1);

        let summary = DatasetSummary {
            sessions: vec!["ses-01".to_string(), "ses-02".to_string()],
            ..DatasetSummary::default()
        };
        assert_eq!(summary.display_session_count(), 2);
    }

    #[test]
    fn summary_round_trips() {
        let summary = DatasetSummary {
            total_files: 128,
            size_bytes: 2_400_000,
            subjects: vec!["sub-01".to_string()],
            sessions: vec![],
            tasks: vec!["rest".to_string()],
            modalities: vec!["MRI".to_string()],
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: DatasetSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round.total_files, 128);
        assert_eq!(round.tasks, vec!["rest".to_string()]);
    }
}
