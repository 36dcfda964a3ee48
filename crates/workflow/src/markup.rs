//! HTML markup for status cards using minijinja.
//!
//! The markup uses the admin theme's Tailwind classes so the card can be
//! embedded directly in server-rendered pages.

use minijinja::{context, Environment};
use thiserror::Error;

use crate::render::StatusCard;

const CARD_TEMPLATE_NAME: &str = "status_card.html";

const CARD_TEMPLATE: &str = r#"<div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
  <div class="mb-3 flex items-center gap-2 text-sm font-medium text-gray-500">
    <svg class="h-4 w-4" data-icon="{{ icon }}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="6" x2="6" y1="3" y2="15"/><circle cx="18" cy="6" r="3"/><circle cx="6" cy="18" r="3"/><path d="M18 9a9 9 0 0 1-9 9"/></svg>
    <span>{{ caption }}</span>
  </div>
  <div class="flex items-start gap-3">
    <span class="mt-1 inline-block h-3 w-3 rounded-full {{ marker_class }}" style="background-color: {{ marker_hex }}" data-color="{{ marker }}"></span>
    <div>
      <p class="font-semibold text-gray-900">{{ title }}</p>
      <p class="text-sm text-gray-600">{{ description }}</p>
    </div>
  </div>
</div>"#;

/// Markup rendering failure.
#[derive(Debug, Error)]
#[error("Template error: {0}")]
pub struct MarkupError(#[from] minijinja::Error);

/// Renders [`StatusCard`]s to HTML.
#[derive(Clone)]
pub struct CardMarkup {
    env: Environment<'static>,
}

impl Default for CardMarkup {
    fn default() -> Self {
        Self::new()
    }
}

impl CardMarkup {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Render a card to an HTML fragment. Text fields are HTML-escaped.
    pub fn render(&self, card: &StatusCard) -> Result<String, MarkupError> {
        // The `.html` name turns on auto-escaping.
        let html = self.env.render_named_str(
            CARD_TEMPLATE_NAME,
            CARD_TEMPLATE,
            context! {
                icon => "git-branch",
                caption => card.header.caption,
                marker => card.body.marker.as_str(),
                marker_class => card.body.marker.css_class(),
                marker_hex => card.body.marker.hex(),
                title => card.body.title,
                description => card.body.description,
            },
        )?;

        Ok(html)
    }
}
