//! Dashboard load sequence
//!
//! Loads the manifest, then each product's last run in manifest order,
//! rendering each card as soon as its run has been fetched, then the nexus
//! queue. Only a manifest failure turns the page into an error page.

use crate::config::NexusListing;
use crate::loader::{fetch_last_run, fetch_nexus_inbox, fetch_nexus_outbox, fetch_products};
use crate::source::FixtureSource;
use crate::ui::dashboard::{Dashboard, PageState};
use tracing::{error, info};

/// Runs the whole load sequence against `source` and returns the final page state.
pub async fn run(source: &dyn FixtureSource, listing: &NexusListing) -> PageState {
    let products = match fetch_products(source).await {
        Ok(products) => products,
        Err(e) => {
            error!("{}", e);
            return PageState::Failed(e.to_string());
        }
    };

    let mut dashboard = Dashboard::new();
    let mut with_runs = 0;
    for product in &products {
        let run = fetch_last_run(source, &product.product_id).await;
        if run.is_some() {
            with_runs += 1;
        }
        dashboard.push_product(product, run.as_ref());
    }
    info!(
        "Rendered {} product cards ({} with run data)",
        products.len(),
        with_runs
    );

    let requests = fetch_nexus_inbox(source, &listing.requests).await;
    let decisions = fetch_nexus_outbox(source, &listing.decisions).await;
    info!(
        "Nexus queue: {} pending requests, {} decisions",
        requests.len(),
        decisions.len()
    );
    dashboard.set_nexus_queue(&requests, &decisions);

    PageState::Loaded(dashboard)
}
