use market_scatter::telemetry::{DEFAULT_TRACING_FILTER, init_default_tracing};

#[test]
fn default_tracing_installs_at_most_once() {
    let first = init_default_tracing();
    let second = init_default_tracing();
    assert_eq!(first, cfg!(feature = "telemetry"));
    assert!(!second);
    assert!(DEFAULT_TRACING_FILTER.starts_with("market_scatter"));
}
