//! Status card view model.
//!
//! A card has a fixed header (branch icon, "Workflow Status" caption) and a
//! body with the status marker, title and description.

use serde::Serialize;

use crate::registry::{self, IndicatorColor};
use crate::status::WorkflowStatus;

/// Caption shown in every card header.
pub const CARD_CAPTION: &str = "Workflow Status";

/// Icon shown in the card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardIcon {
    GitBranch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader {
    pub icon: CardIcon,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardBody {
    pub marker: IndicatorColor,
    pub title: &'static str,
    pub description: &'static str,
}

/// Rendered workflow status card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCard {
    pub header: CardHeader,
    pub body: CardBody,
}

impl StatusCard {
    pub fn title(&self) -> &'static str {
        self.body.title
    }

    pub fn description(&self) -> &'static str {
        self.body.description
    }

    pub fn indicator_color(&self) -> IndicatorColor {
        self.body.marker
    }
}

/// Build the card for a status.
pub fn render(status: WorkflowStatus) -> StatusCard {
    let meta = registry::lookup(status);

    StatusCard {
        header: CardHeader {
            icon: CardIcon::GitBranch,
            caption: CARD_CAPTION,
        },
        body: CardBody {
            marker: meta.indicator,
            title: meta.title,
            description: meta.description,
        },
    }
}

/// Build the card for a raw status code, falling back to `PENDING_REVIEW`.
pub fn render_code(code: &str) -> StatusCard {
    render(WorkflowStatus::parse_lenient(code))
}
