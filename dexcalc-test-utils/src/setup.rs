use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a subscriber that prints library logs for the current test binary.
///
/// Safe to call from every test; only the first call has an effect.
pub fn setup_test_environment() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing_core::Level::TRACE)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .init();
    });
}
