//! Article review workflow status codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Review state of an article.
///
/// The wire form is the upper-snake literal (`PENDING_REVIEW`, ...) and
/// matching is case-sensitive. No transitions are modelled here; this is
/// display state only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStatus {
    /// Submitted and waiting for an editor.
    #[default]
    PendingReview,
    /// Accepted by an editor, not yet live.
    Approved,
    /// Sent back to the author.
    Rejected,
    /// Live on the frontend.
    Published,
}

/// Returned by the strict parser for codes outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown workflow status: {0}")]
pub struct UnknownStatus(pub String);

impl WorkflowStatus {
    /// Every status, in declaration order.
    pub const ALL: [WorkflowStatus; 4] = [
        Self::PendingReview,
        Self::Approved,
        Self::Rejected,
        Self::Published,
    ];

    /// Status used when a code is not recognised.
    pub const DEFAULT: WorkflowStatus = Self::PendingReview;

    /// Wire code of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingReview => "PENDING_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Published => "PUBLISHED",
        }
    }

    /// Parse a code, mapping anything unrecognised to [`WorkflowStatus::DEFAULT`].
    pub fn parse_lenient(code: &str) -> Self {
        code.parse().unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
