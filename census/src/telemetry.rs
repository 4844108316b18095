//! Logging setup shared by the binaries

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global INFO-level subscriber. Logs go to stderr so stdout keeps
/// only the report.
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[WARN] Logging already initialised: {}", e);
    }
}
