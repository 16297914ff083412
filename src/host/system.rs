//! Default system adapters for the host boundary

use tracing::info;

use super::{Notifier, UriOpener};

/// Opens URIs with the platform default handler
pub struct SystemUriOpener;

impl UriOpener for SystemUriOpener {
    fn open(&self, uri: &str) -> std::io::Result<()> {
        open::that(uri)
    }
}

/// Routes notices to the tracing log
///
/// Stands in for the host's transient notice UI in headless runs.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{message}");
    }
}
