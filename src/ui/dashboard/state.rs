//! Dashboard state management

use super::components::nexus_card::render_nexus_queue;
use super::components::product_card::render_product_card;
use crate::model::{NexusDecision, NexusRequest, Product, Run};

/// Rendered content of a successfully loaded dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    /// One card per product, in manifest order.
    pub product_cards: Vec<String>,
    /// Rendered nexus queue, or its empty-state message.
    pub nexus_queue: String,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render and append the card for the next product.
    pub fn push_product(&mut self, product: &Product, run: Option<&Run>) {
        self.product_cards.push(render_product_card(product, run));
    }

    pub fn set_nexus_queue(&mut self, requests: &[NexusRequest], decisions: &[NexusDecision]) {
        self.nexus_queue = render_nexus_queue(requests, decisions);
    }
}

/// Where the page is in its load sequence.
#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PageState {
    /// Fixtures are still being fetched.
    Loading,
    /// Everything required loaded; the dashboard is shown.
    Loaded(Dashboard),
    /// A required load failed; only the error banner is shown.
    Failed(String),
}

impl PageState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, PageState::Loaded(_))
    }

    /// Banner text shown to the user for a failed page.
    pub fn error_text(&self) -> Option<String> {
        match self {
            PageState::Failed(message) => Some(format!("Error: {}", message)),
            _ => None,
        }
    }
}
