//! Fixture data model
//!
//! Products come from the manifest, runs from each product's run directory and
//! the Nexus records from the inbox/outbox. Everything past the identifying
//! fields is defaulted so that a sparse record still renders.

use serde::{Deserialize, Serialize};

/// Top-level shape of `products.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductManifest {
    pub products: Vec<Product>,
}

/// A product tracked by the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_id: String,
    pub display_name: String,
    #[serde(default)]
    pub owner: String,
    /// Status shown when the product has no run yet.
    #[serde(default = "unknown_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<String>,
}

/// The most recent run of a product.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Run {
    #[serde(default)]
    pub run_id: String,
    #[serde(default = "unknown_status")]
    pub status: String,
    #[serde(default)]
    pub schema_version: String,
    #[serde(default)]
    pub ended_at: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, rename = "banana_economy")]
    pub usage: ResourceUsage,
    #[serde(default)]
    pub kill_switch: KillSwitch,
    #[serde(default)]
    pub pr_wave: PrWave,
    #[serde(default)]
    pub evidence: Evidence,
}

/// Tokens and minutes spent against the run's budget.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResourceUsage {
    #[serde(default)]
    pub spent_tokens: u64,
    #[serde(default)]
    pub budget_tokens: u64,
    #[serde(default)]
    pub spent_minutes: Option<f64>,
    #[serde(default)]
    pub budget_minutes: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct KillSwitch {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// State of the batch of pull requests opened by the run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrWave {
    #[serde(default = "no_wave")]
    pub state: String,
    #[serde(default)]
    pub open_prs: u32,
}

impl Default for PrWave {
    fn default() -> Self {
        Self {
            state: no_wave(),
            open_prs: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    #[serde(default)]
    pub paths: Vec<String>,
}

/// An inbound item waiting in the Nexus inbox.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NexusRequest {
    pub request_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "unknown_status")]
    pub status: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A resolved action published to the Nexus outbox.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NexusDecision {
    pub decision_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "unknown_status")]
    pub status: String,
    #[serde(default)]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance_check: Option<GovernanceCheck>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernanceCheck {
    pub compliant: bool,
}

fn unknown_status() -> String {
    "unknown".to_string()
}

fn no_wave() -> String {
    "none".to_string()
}
