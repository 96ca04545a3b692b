use tracing::debug;

use crate::success;

/// Services the surrounding media center provides to the favourites store.
///
/// Both calls are fire-and-forget: failures are never reported back to the
/// store.
pub trait Host {
    /// Shows a transient notification to the user.
    fn notify_user(&self, title: &str, message: &str, duration_ms: u32);

    /// Asks the host to redraw the list view currently on screen.
    fn refresh_container(&self);
}

impl<H: Host + ?Sized> Host for &H {
    fn notify_user(&self, title: &str, message: &str, duration_ms: u32) {
        (**self).notify_user(title, message, duration_ms)
    }

    fn refresh_container(&self) {
        (**self).refresh_container()
    }
}

/// Host used by the `popfavs` binary: notifications go to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost;

impl Host for TerminalHost {
    fn notify_user(&self, title: &str, message: &str, duration_ms: u32) {
        // a terminal line has no display duration
        debug!(duration_ms, "notification");
        success!("{}: {}", title, message);
    }

    fn refresh_container(&self) {
        debug!("container refresh requested");
    }
}
