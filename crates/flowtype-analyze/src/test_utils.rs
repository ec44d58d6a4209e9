//! Test utilities: AST fixtures and log setup.

use tracing_subscriber::{EnvFilter, fmt};

use crate::ast::Node;
use crate::refs::get_references;

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("flowtype_analyze=debug,warn"));
        fmt().with_env_filter(filter).with_test_writer().init();
    });
}

/// All references of a node, in traversal order.
pub fn refs<'a>(node: impl Into<Node<'a>>) -> Vec<&'a str> {
    get_references(node).collect()
}
