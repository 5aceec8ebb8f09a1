//! Dashboard page renderer
//!
//! Produces the full HTML document. The page always carries the loading
//! indicator, the error banner and the dashboard; the state decides which of
//! them are hidden.

use super::state::PageState;
use v_htmlescape::escape;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; background: #101418; color: #e6e6e6; }
.hidden { display: none; }
.card { border: 1px solid #2a3139; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.card-header { display: flex; justify-content: space-between; align-items: center; }
.product-name { font-weight: bold; }
.label { color: #8a96a3; }
.status-success, .governance-ok, .valid { color: #4caf50; }
.status-failed, .governance-fail, .invalid, .kill-true { color: #f44336; }
.empty-state { color: #8a96a3; font-style: italic; }
#error { color: #f44336; font-weight: bold; }
"#;

fn hidden_unless(visible: bool) -> &'static str {
    if visible { "" } else { r#" class="hidden""# }
}

/// Render the whole page for the given state.
pub fn render_page(title: &str, state: &PageState) -> String {
    let loading = matches!(state, PageState::Loading);
    let error_text = state.error_text();

    let (products, queue) = match state {
        PageState::Loaded(dashboard) => (
            dashboard.product_cards.concat(),
            dashboard.nexus_queue.clone(),
        ),
        _ => (String::new(), String::new()),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body data-state="{state}">
<h1>{title}</h1>
<div id="loading"{loading_class}>Loading...</div>
<div id="error"{error_class}>{error}</div>
<div id="dashboard"{dashboard_class}>
<section><h2>Products</h2><div id="products-list">{products}</div></section>
<section><h2>Nexus Queue</h2><div id="nexus-pending">{queue}</div></section>
</div>
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        state = state,
        loading_class = hidden_unless(loading),
        error_class = hidden_unless(error_text.is_some()),
        error = escape(error_text.as_deref().unwrap_or("")),
        dashboard_class = hidden_unless(state.is_loaded()),
        products = products,
        queue = queue,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::state::Dashboard;

    #[test]
    fn test_loading_page_shows_only_indicator() {
        let html = render_page("Dash", &PageState::Loading);
        assert!(html.contains(r#"<div id="loading">Loading...</div>"#));
        assert!(html.contains(r#"<div id="error" class="hidden"></div>"#));
        assert!(html.contains(r#"<div id="dashboard" class="hidden">"#));
    }

    #[test]
    fn test_failed_page_hides_dashboard() {
        let state = PageState::Failed("Failed to load products.json".to_string());
        let html = render_page("Dash", &state);
        assert!(html.contains(r#"<div id="loading" class="hidden">"#));
        assert!(html.contains(r#"<div id="error">Error: Failed to load products.json</div>"#));
        assert!(html.contains(r#"<div id="dashboard" class="hidden">"#));
        assert!(html.contains(r#"data-state="failed""#));
    }

    #[test]
    fn test_loaded_page_reveals_dashboard() {
        let mut dashboard = Dashboard::new();
        dashboard.product_cards.push("<div>card-a</div>".to_string());
        dashboard.nexus_queue = "<div>queue</div>".to_string();
        let html = render_page("Dash", &PageState::Loaded(dashboard));
        assert!(html.contains(r#"<div id="loading" class="hidden">"#));
        assert!(html.contains(r#"<div id="dashboard">"#));
        assert!(html.contains(r#"<div id="products-list"><div>card-a</div></div>"#));
        assert!(html.contains(r#"<div id="nexus-pending"><div>queue</div></div>"#));
    }
}
