use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `price_service` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "price_service", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "price_service", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "price_service", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "price_service", "{}", message);
    }
}
