use algos_core::errors::{AlgoError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("vertex", 7)
        .with_context("vertices", 5)
}

#[test]
fn invalid_graph_surface() {
    let err = AlgoError::InvalidGraph(sample_info("vertex-out-of-range", "bad destination"));
    assert_eq!(err.code(), "vertex-out-of-range");
    assert_eq!(err.info().context.get("vertex"), Some(&"7".to_string()));
}

#[test]
fn invalid_query_surface() {
    let err = AlgoError::invalid_query("weight-exceeds-bound", "edge too heavy")
        .with_context("bound", 10)
        .with_hint("raise max_weight");
    assert_eq!(err.info().code, "weight-exceeds-bound");
    assert_eq!(err.info().context.get("bound"), Some(&"10".to_string()));
    assert_eq!(err.info().hint.as_deref(), Some("raise max_weight"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = AlgoError::InvalidGraph(sample_info("non-square-matrix", "row too short"))
        .with_hint("pad the row");
    let rendered = err.to_string();
    assert!(rendered.starts_with("invalid graph: row too short (code: non-square-matrix)"));
    assert!(rendered.contains("vertex=7"));
    assert!(rendered.contains("hint: pad the row"));
}
