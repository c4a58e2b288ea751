//! Shared helpers for the integration tests

#![allow(dead_code)]

use svg_builder::{svg, Document, Item, ViewBox};

/// Installs env_logger once so `RUST_LOG=debug cargo test` shows printer logs
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a standalone document: `<svg [viewBox] width height xmlns>` around `content`
pub fn test_document(
    width: f64,
    height: f64,
    view_box: Option<ViewBox>,
    content: Vec<Item>,
) -> Document {
    init_logging();
    let mut root = svg();
    if let Some(vb) = view_box {
        root = root.view_box(vb);
    }
    Document::new(root.width(width).height(height).xmlns().with(content))
}
