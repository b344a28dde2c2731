//! Application-wide event bus.
//!
//! A thin wrapper over a tokio broadcast channel. Screens opt in through
//! their `subscribe` hook; handler tasks run on the screen's lifecycle
//! scope, so subscriptions end when the screen is destroyed. There is no
//! global instance: the bus is constructed by the host and passed in.

use crate::theme::ThemeMode;
use tokio::sync::broadcast;
use tracing::trace;

const BUS_CAPACITY: usize = 32;

/// Cross-screen notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The active theme changed; screens should re-resolve styles.
    ThemeChanged(ThemeMode),
    /// A preference key was written by the settings screen.
    PreferenceChanged(String),
    /// The book library was re-scanned.
    LibraryRefreshed,
    /// Read-aloud playback started or stopped.
    ReadAloudToggled(bool),
}

/// Shared publish/subscribe channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Publish an event to all current subscribers. Returns the number of
    /// subscribers that will see it; zero subscribers is not an error.
    pub fn publish(&self, event: AppEvent) -> usize {
        trace!(?event, "bus publish");
        self.tx.send(event).unwrap_or(0)
    }

    /// Open a new subscription. Events published before this call are not
    /// replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
