//! Nexus queue components
//!
//! Renders pending requests from the inbox and decisions from the outbox.

use super::super::utils::{css_token, format_timestamp, humanize_kind};
use crate::consts::dash_consts::DEFAULT_PRIORITY;
use crate::model::{NexusDecision, NexusRequest};
use v_htmlescape::escape;

pub const EMPTY_QUEUE_HTML: &str =
    r#"<div class="empty-state">No pending requests or decisions</div>"#;

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!(
        r#"<div class="row"><span class="label">{}:</span> <span>{}</span></div>"#,
        label, value
    )
}

fn header(icon: &str, kind: &str, status: &str) -> String {
    format!(
        r#"<div class="card-header"><span class="product-name">{icon} {kind}</span><span class="status-indicator status-{class}">{status}</span></div>"#,
        icon = icon,
        kind = escape(&humanize_kind(kind)),
        class = css_token(status),
        status = escape(status),
    )
}

pub fn render_request_card(request: &NexusRequest) -> String {
    let priority = request.priority.as_deref().unwrap_or(DEFAULT_PRIORITY);
    format!(
        r#"<div class="card nexus-card">{header}<div class="card-body">{id}{source}<div class="row"><span class="label">Priority:</span> <span class="priority-{class}">{priority}</span></div>{created}</div></div>"#,
        header = header("📥", &request.kind, &request.status),
        id = row("Request", escape(&request.request_id)),
        source = row("Source", escape(&request.source)),
        class = css_token(priority),
        priority = escape(priority),
        created = row("Created", escape(&format_timestamp(&request.created_at))),
    )
}

pub fn render_decision_card(decision: &NexusDecision) -> String {
    let governance = match decision.governance_check {
        Some(check) => {
            let (class, label) = if check.compliant {
                ("ok", "✅ Compliant")
            } else {
                ("fail", "❌ Violation")
            };
            format!(
                r#"<div class="row"><span class="label">Governance:</span> <span class="governance-{}">{}</span></div>"#,
                class, label
            )
        }
        None => String::new(),
    };

    format!(
        r#"<div class="card nexus-card decision">{header}<div class="card-body">{id}{target}{rationale}{governance}</div></div>"#,
        header = header("📤", &decision.kind, &decision.status),
        id = row("Decision", escape(&decision.decision_id)),
        target = row("Target", escape(&decision.target)),
        rationale = match &decision.rationale {
            Some(rationale) => row("Rationale", escape(rationale)),
            None => row("Rationale", "N/A"),
        },
        governance = governance,
    )
}

/// Requests first, then decisions; the empty-state message when there are neither.
pub fn render_nexus_queue(requests: &[NexusRequest], decisions: &[NexusDecision]) -> String {
    if requests.is_empty() && decisions.is_empty() {
        return EMPTY_QUEUE_HTML.to_string();
    }
    let mut html: String = requests.iter().map(render_request_card).collect();
    html.extend(decisions.iter().map(render_decision_card));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GovernanceCheck;

    fn request() -> NexusRequest {
        NexusRequest {
            request_id: "req_20251221_001".to_string(),
            kind: "budget_grant".to_string(),
            status: "pending".to_string(),
            source: "oracle".to_string(),
            priority: None,
            created_at: "2025-12-21T09:00:00Z".to_string(),
        }
    }

    fn decision() -> NexusDecision {
        NexusDecision {
            decision_id: "dec_20251221_001".to_string(),
            kind: "kill_switch_toggle".to_string(),
            status: "approved".to_string(),
            target: "codemonkeys-dash".to_string(),
            rationale: None,
            governance_check: None,
        }
    }

    #[test]
    fn test_request_defaults_to_normal_priority() {
        let html = render_request_card(&request());
        assert!(html.contains("📥 budget grant"));
        assert!(html.contains(r#"<span class="priority-normal">normal</span>"#));
        assert!(html.contains("req_20251221_001"));
    }

    #[test]
    fn test_request_keeps_explicit_priority() {
        let mut request = request();
        request.priority = Some("high".to_string());
        assert!(render_request_card(&request).contains(r#"class="priority-high">high<"#));
    }

    #[test]
    fn test_decision_fallbacks() {
        let html = render_decision_card(&decision());
        assert!(html.contains("📤 kill switch toggle"));
        assert!(html.contains(r#"<span class="label">Rationale:</span> <span>N/A</span>"#));
        assert!(!html.contains("Governance"));
    }

    #[test]
    fn test_decision_rationale_is_escaped() {
        let mut decision = decision();
        decision.rationale = Some("<b>within budget</b>".to_string());
        let html = render_decision_card(&decision);
        assert!(html.contains("&lt;b&gt;within budget&lt;&#x2f;b&gt;"));
        assert!(!html.contains("N/A"));
    }

    #[test]
    fn test_decision_governance_row() {
        let mut decision = decision();
        decision.governance_check = Some(GovernanceCheck { compliant: true });
        assert!(render_decision_card(&decision).contains("governance-ok\">✅ Compliant"));

        decision.governance_check = Some(GovernanceCheck { compliant: false });
        assert!(render_decision_card(&decision).contains("governance-fail\">❌ Violation"));
    }

    #[test]
    fn test_empty_queue_message() {
        assert_eq!(render_nexus_queue(&[], &[]), EMPTY_QUEUE_HTML);
    }

    #[test]
    fn test_requests_render_before_decisions() {
        let html = render_nexus_queue(&[request()], &[decision()]);
        let req_at = html.find("req_20251221_001").unwrap();
        let dec_at = html.find("dec_20251221_001").unwrap();
        assert!(req_at < dec_at);
        assert!(!html.contains("empty-state"));
    }
}
