use lazy_static::lazy_static;
use prometheus::IntCounter;
use prometheus::IntCounterVec;
use prometheus::Opts;
use prometheus::Registry;

lazy_static! {
    pub static ref RECONCILE_CYCLES: IntCounterVec = IntCounterVec::new(
        Opts::new("reconcile_cycles_total", "Reconcile cycles by outcome"),
        &["outcome"]
    )
    .expect("metric can not be created");

    pub static ref PROFILE_TRANSITIONS: IntCounter = IntCounter::new(
        "profile_transitions_total",
        "Detected semantic TLS profile transitions"
    )
    .expect("metric can not be created");

    pub static ref CALLBACK_FAILURES: IntCounter = IntCounter::new(
        "callback_failures_total",
        "Profile change callbacks that returned an error"
    )
    .expect("metric can not be created");

    pub static ref REGISTRY: Registry = Registry::new();
}

/// Attach the watcher collectors to `registry`. Called once per registry;
/// registering the same collector twice is a caller error.
pub fn register_custom_metrics(registry: &Registry) {
    registry
        .register(Box::new(RECONCILE_CYCLES.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(PROFILE_TRANSITIONS.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(CALLBACK_FAILURES.clone()))
        .expect("collector can be registered");
}

pub(crate) fn observe_reconcile(outcome: &str) {
    RECONCILE_CYCLES.with_label_values(&[outcome]).inc();
}

/// Text-encoded snapshot of `registry`, for a host process to serve on its
/// own scrape endpoint.
pub fn encode_metrics(registry: &Registry) -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&registry.gather(), &mut buffer) {
        eprintln!("could not encode custom metrics: {}", e);
    };
    match String::from_utf8(buffer) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("custom metrics could not be from_utf8'd: {}", e);
            String::default()
        }
    }
}
