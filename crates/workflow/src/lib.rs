//! Press Workflow Library
//!
//! Display model for the article review workflow:
//!
//! - [`status`]: the closed set of review status codes
//! - [`registry`]: static display metadata per status, with a total lookup
//! - [`render`]: status card view model
//! - [`markup`]: HTML markup for status cards
//!
//! Unknown status codes never fail; they render as `PENDING_REVIEW`.
//!
//! ## Example
//!
//! ```
//! use press_workflow::render_code;
//!
//! let card = render_code("APPROVED");
//! assert_eq!(card.title(), "Approved");
//! assert_eq!(render_code("NOPE"), render_code("PENDING_REVIEW"));
//! ```

pub mod markup;
pub mod registry;
pub mod render;
pub mod status;

pub use markup::{CardMarkup, MarkupError};
pub use registry::{lookup, lookup_code, IndicatorColor, StatusDisplayMetadata};
pub use render::{render, render_code, StatusCard};
pub use status::{UnknownStatus, WorkflowStatus};
