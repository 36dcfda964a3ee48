//! Display metadata for each workflow status.
//!
//! The table is static and total: every [`WorkflowStatus`] has an entry, and
//! codes outside the closed set resolve to the `PENDING_REVIEW` entry.

use serde::Serialize;

use crate::status::WorkflowStatus;

/// Colour token used for the status marker.
///
/// Tokens correspond to the admin theme's Tailwind palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorColor {
    Yellow,
    Green,
    Red,
    Blue,
}

impl IndicatorColor {
    /// Token name as used in the theme (`yellow`, `green`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    /// Tailwind background class for the marker circle.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Yellow => "bg-yellow-500",
            Self::Green => "bg-green-500",
            Self::Red => "bg-red-500",
            Self::Blue => "bg-blue-500",
        }
    }

    /// Hex value of the `500` shade.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Yellow => "#eab308",
            Self::Green => "#22c55e",
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
        }
    }
}

/// Human-readable metadata shown for a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDisplayMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub indicator: IndicatorColor,
}

static PENDING_REVIEW: StatusDisplayMetadata = StatusDisplayMetadata {
    title: "Pending Review",
    description: "The article is waiting to be reviewed by an editor.",
    indicator: IndicatorColor::Yellow,
};

static APPROVED: StatusDisplayMetadata = StatusDisplayMetadata {
    title: "Approved",
    description: "The article has been approved and is ready for publishing.",
    indicator: IndicatorColor::Green,
};

static REJECTED: StatusDisplayMetadata = StatusDisplayMetadata {
    title: "Changes Requested",
    description: "The article has been sent back to the author for changes.",
    indicator: IndicatorColor::Red,
};

static PUBLISHED: StatusDisplayMetadata = StatusDisplayMetadata {
    title: "Published",
    description: "The article has been published and is live.",
    indicator: IndicatorColor::Blue,
};

/// Metadata for a known status.
pub fn lookup(status: WorkflowStatus) -> &'static StatusDisplayMetadata {
    match status {
        WorkflowStatus::PendingReview => &PENDING_REVIEW,
        WorkflowStatus::Approved => &APPROVED,
        WorkflowStatus::Rejected => &REJECTED,
        WorkflowStatus::Published => &PUBLISHED,
    }
}

/// Metadata for a raw status code.
///
/// Never fails: unrecognised codes (stale clients, schema drift) get the
/// `PENDING_REVIEW` entry.
pub fn lookup_code(code: &str) -> &'static StatusDisplayMetadata {
    lookup(WorkflowStatus::parse_lenient(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_status_has_metadata() {
        for status in WorkflowStatus::ALL {
            assert!(!lookup(status).title.is_empty());
            assert!(!lookup(status).description.is_empty());
        }
    }

    #[test]
    fn test_titles_are_distinct() {
        let titles: HashSet<_> = WorkflowStatus::ALL
            .into_iter()
            .map(|s| lookup(s).title)
            .collect();
        assert_eq!(titles.len(), WorkflowStatus::ALL.len());
    }

    #[test]
    fn test_known_codes() {
        let approved = lookup_code("APPROVED");
        assert_eq!(approved.title, "Approved");
        assert_eq!(
            approved.description,
            "The article has been approved and is ready for publishing."
        );
        assert_eq!(approved.indicator, IndicatorColor::Green);

        let rejected = lookup_code("REJECTED");
        assert_eq!(rejected.title, "Changes Requested");
        assert_eq!(
            rejected.description,
            "The article has been sent back to the author for changes."
        );

        let published = lookup_code("PUBLISHED");
        assert_eq!(published.title, "Published");
        assert_eq!(
            published.description,
            "The article has been published and is live."
        );
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let pending = lookup_code("PENDING_REVIEW");
        for code in ["UNKNOWN_STATUS", "approved", "", " APPROVED", "DRAFT"] {
            assert_eq!(lookup_code(code), pending, "code {:?}", code);
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        for code in ["APPROVED", "garbage"] {
            assert!(std::ptr::eq(lookup_code(code), lookup_code(code)));
        }
    }

    #[test]
    fn test_indicator_classes() {
        assert_eq!(IndicatorColor::Yellow.css_class(), "bg-yellow-500");
        assert_eq!(IndicatorColor::Blue.as_str(), "blue");
        assert_eq!(IndicatorColor::Red.hex(), "#ef4444");
    }
}
