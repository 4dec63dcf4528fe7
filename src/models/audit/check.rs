use crate::models::audit::status::{Category, Effort, Impact, RagStatus};
use serde::{Deserialize, Serialize};

/// One evaluated heuristic.
///
/// `score_delta` is only subtracted from the category score when the
/// status is not green.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditCheck {
    pub id: String,
    pub category: Category,
    pub label: String,
    pub status: RagStatus,
    pub score_delta: u32,
    pub evidence: String,
    pub fix: String,
    pub effort: Effort,
    pub impact: Impact,
}

impl AuditCheck {
    pub fn penalty(&self) -> u32 {
        if self.status == RagStatus::Green {
            0
        } else {
            self.score_delta
        }
    }

    pub fn is_red(&self) -> bool {
        self.status == RagStatus::Red
    }
}
