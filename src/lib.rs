//! Lectern - the screen lifecycle base for a terminal reading application
//!
//! This library provides the shared controller every screen runs inside:
//! theme resolution, system-bar configuration, a lifecycle-bound task
//! scope, menu icon tinting, and consistent back/close behavior, all
//! behind a narrow host-window adapter.

// Core modules
pub mod app;
pub mod bus;
pub mod color;
pub mod config;
pub mod host;
pub mod menu;
pub mod screens;
pub mod theme;

// Re-exports for convenience
pub use bus::{AppEvent, EventBus};
pub use color::Rgb;
pub use config::Config;
pub use host::{HostWindow, InputId, LayoutId, TerminalHost, Transition};
pub use menu::{Menu, MenuItem, MenuItemId};
pub use screens::{Lifecycle, SavedState, Screen, ScreenContext, ScreenController, TaskScope};
pub use theme::ThemeMode;
