//! Fixture loading
//!
//! Only the product manifest is required. Every other fetch degrades to
//! absence: a product without a readable run renders as "no run data" and a
//! queue item that fails to load is left out.

use crate::consts::dash_consts::{
    LAST_RUN_FILE, NEXUS_INBOX_DIR, NEXUS_OUTBOX_DIR, PRODUCTS_MANIFEST, RUNS_DIR,
};
use crate::error_classifier::ErrorClassifier;
use crate::logging;
use crate::model::{NexusDecision, NexusRequest, Product, ProductManifest, Run};
use crate::source::{FixtureSource, SourceError, fetch_json};
use tracing::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The product manifest could not be fetched or decoded.
    #[error("Failed to load products.json")]
    Manifest(#[source] SourceError),
}

pub fn last_run_path(product_id: &str) -> String {
    format!("{}/{}/{}", RUNS_DIR, product_id, LAST_RUN_FILE)
}

pub fn inbox_path(request_id: &str) -> String {
    format!("{}/{}.json", NEXUS_INBOX_DIR, request_id)
}

pub fn outbox_path(decision_id: &str) -> String {
    format!("{}/{}.json", NEXUS_OUTBOX_DIR, decision_id)
}

/// Loads the product manifest. Failure here is fatal for the page.
pub async fn fetch_products(source: &dyn FixtureSource) -> Result<Vec<Product>, LoadError> {
    let manifest: ProductManifest = fetch_json(source, PRODUCTS_MANIFEST)
        .await
        .map_err(LoadError::Manifest)?;
    debug!("Loaded {} products", manifest.products.len());
    Ok(manifest.products)
}

/// Loads the most recent run of a product, or `None` if there is no usable one.
pub async fn fetch_last_run(source: &dyn FixtureSource, product_id: &str) -> Option<Run> {
    fetch_optional(source, &last_run_path(product_id)).await
}

/// Loads the listed pending requests, skipping any that fail.
pub async fn fetch_nexus_inbox(
    source: &dyn FixtureSource,
    request_ids: &[String],
) -> Vec<NexusRequest> {
    let mut requests = Vec::new();
    for request_id in request_ids {
        if let Some(request) = fetch_optional(source, &inbox_path(request_id)).await {
            requests.push(request);
        }
    }
    requests
}

/// Loads the listed decisions, skipping any that fail.
pub async fn fetch_nexus_outbox(
    source: &dyn FixtureSource,
    decision_ids: &[String],
) -> Vec<NexusDecision> {
    let mut decisions = Vec::new();
    for decision_id in decision_ids {
        if let Some(decision) = fetch_optional(source, &outbox_path(decision_id)).await {
            decisions.push(decision);
        }
    }
    decisions
}

async fn fetch_optional<T: DeserializeOwned>(source: &dyn FixtureSource, path: &str) -> Option<T> {
    match fetch_json(source, path).await {
        Ok(value) => Some(value),
        Err(e) => {
            let level = ErrorClassifier::new().classify_fetch_error(&e);
            logging::emit(level, &format!("Skipping {}: {}", path, e));
            None
        }
    }
}
