//! Product card component
//!
//! One card per product, combining the manifest entry with its last run when
//! there is one.

use super::super::utils::{
    css_token, evidence_label, format_duration, format_number, format_timestamp,
};
use crate::consts::dash_consts::KNOWN_SCHEMA_VERSION;
use crate::model::{Product, Run};
use v_htmlescape::escape;

/// Status shown on the card: the run's when there is a run, else the product's fallback.
pub fn effective_status<'a>(product: &'a Product, run: Option<&'a Run>) -> &'a str {
    match run {
        Some(run) => &run.status,
        None => &product.status,
    }
}

/// Schema validity badge. Only runs get one.
pub fn render_validity_badge(run: Option<&Run>) -> String {
    match run {
        Some(run) if run.schema_version == KNOWN_SCHEMA_VERSION => {
            r#"<span class="validity valid">✅ Schema Valid</span>"#.to_string()
        }
        Some(_) => r#"<span class="validity invalid">❌ Invalid Schema</span>"#.to_string(),
        None => String::new(),
    }
}

pub fn render_evidence_list(paths: &[String]) -> String {
    if paths.is_empty() {
        return r#"<div class="empty-state">No evidence recorded</div>"#.to_string();
    }
    let items: String = paths
        .iter()
        .map(|path| {
            format!(
                r#"<li><a href="{href}" class="evidence-link" target="_blank">{label}</a></li>"#,
                href = escape(path),
                label = escape(evidence_label(path)),
            )
        })
        .collect();
    format!(r#"<ul class="evidence-list">{}</ul>"#, items)
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="row"><span class="label">{}:</span> <span>{}</span></div>"#,
        label, value
    )
}

fn render_run_details(product: &Product, run: &Run) -> String {
    let usage = &run.usage;
    let kill_label = match (run.kill_switch.enabled, run.kill_switch.reason.as_deref()) {
        (true, Some(reason)) if !reason.is_empty() => format!("ENABLED ⚠️ ({})", escape(reason)),
        (true, _) => "ENABLED ⚠️".to_string(),
        (false, _) => "OFF".to_string(),
    };
    let spent_minutes = format_number(usage.spent_minutes.unwrap_or(0.0));

    let mut html = String::new();
    html.push_str(&row("Run ID", &escape(&run.run_id).to_string()));
    html.push_str(&row("Ended", &escape(&format_timestamp(&run.ended_at)).to_string()));
    html.push_str(&row("Duration", &escape(&format_duration(usage.spent_minutes)).to_string()));
    html.push_str(&row("Summary", &escape(&run.summary).to_string()));

    html.push_str(&format!(
        r#"<div class="economy-section">{tokens}{time}<div class="row"><span class="label">Kill Switch:</span> <span class="kill-{enabled}">{kill}</span></div>{wave}</div>"#,
        tokens = row(
            "Budget (Tok)",
            &format!("{} / {}", usage.spent_tokens, usage.budget_tokens)
        ),
        time = row(
            "Time",
            &format!(
                "{} / {} min",
                spent_minutes,
                format_number(usage.budget_minutes)
            )
        ),
        enabled = run.kill_switch.enabled,
        kill = kill_label,
        wave = row(
            "PR Wave",
            &format!(
                "{} ({} open)",
                escape(&run.pr_wave.state),
                run.pr_wave.open_prs
            )
        ),
    ));

    html.push_str(&format!(
        r#"<div class="evidence-section"><p class="label">Evidence:</p>{}</div>"#,
        render_evidence_list(&run.evidence.paths)
    ));

    html.push_str(&format!(
        r#"<div class="history-section"><p class="label">Run History:</p><div class="history-note">Most recent run shown above. Previous runs in <code>runs/{}/</code></div></div>"#,
        escape(&product.product_id)
    ));
    html
}

/// Render the card for one product and its (possibly absent) last run.
pub fn render_product_card(product: &Product, run: Option<&Run>) -> String {
    let status = effective_status(product, run);
    let details = match run {
        Some(run) => render_run_details(product, run),
        None => row("Status", "No Run Data"),
    };
    let criticality = match &product.criticality {
        Some(level) => format!(
            r#"<span class="criticality criticality-{}">{}</span>"#,
            css_token(level),
            escape(level)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="card" data-product="{id}"><div class="card-header"><span class="product-name">{name}</span><div class="status-badges">{criticality}{badge}<span class="status-indicator status-{class}">{status}</span></div></div><div class="card-body">{owner}{details}</div></div>"#,
        id = escape(&product.product_id),
        name = escape(&product.display_name),
        criticality = criticality,
        badge = render_validity_badge(run),
        class = css_token(status),
        status = escape(status),
        owner = row("Owner", &escape(&product.owner).to_string()),
        details = details,
    )
}
