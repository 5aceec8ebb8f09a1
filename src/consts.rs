pub mod dash_consts {
    //! Dashboard Configuration Constants
    //!
    //! Fixture locations, rendering constants and network limits, grouped by
    //! functional area.

    // =============================================================================
    // FIXTURE LAYOUT
    // =============================================================================

    /// Product manifest, relative to the dash root.
    pub const PRODUCTS_MANIFEST: &str = "products.json";

    /// Directory holding one sub-directory of run records per product.
    pub const RUNS_DIR: &str = "runs";

    /// File name of the most recent run record inside a product's run directory.
    pub const LAST_RUN_FILE: &str = "last_run.json";

    /// Nexus inbox (pending requests), relative to the dash root.
    pub const NEXUS_INBOX_DIR: &str = "../nexus/inbox";

    /// Nexus outbox (decisions), relative to the dash root.
    pub const NEXUS_OUTBOX_DIR: &str = "../nexus/outbox";

    // =============================================================================
    // RENDERING
    // =============================================================================

    /// The only run schema version this dashboard knows how to read.
    pub const KNOWN_SCHEMA_VERSION: &str = "0.1";

    /// Priority shown for requests that carry none.
    pub const DEFAULT_PRIORITY: &str = "normal";

    /// Default page title.
    pub const DEFAULT_TITLE: &str = "Code Monkeys Factory :: Dash";

    // =============================================================================
    // DEFAULTS
    // =============================================================================

    /// Dash root used when neither flag, environment nor config names one.
    pub const DEFAULT_SOURCE: &str = "dash";

    /// Output page used when neither flag nor config names one.
    pub const DEFAULT_OUTPUT: &str = "dash/index.html";

    /// Environment variable overriding the configured source.
    pub const SOURCE_ENV_VAR: &str = "DASH_SOURCE";

    /// Requests listed by default. There is no inbox discovery; items must be named.
    pub const DEFAULT_KNOWN_REQUESTS: &[&str] = &["req_20251221_001"];

    /// Decisions listed by default.
    pub const DEFAULT_KNOWN_DECISIONS: &[&str] = &["dec_20251221_001"];

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP fixture fetching limits
    pub mod http {
        use std::time::Duration;

        /// Connect timeout for a single fixture request.
        pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

        /// Whole-request timeout for a single fixture request.
        pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    }
}
