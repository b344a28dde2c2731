//! Host window adapter.
//!
//! The screen controller never talks to a toolkit directly; it drives this
//! narrow contract, and the host runtime supplies the implementation. The
//! shipped [`TerminalHost`] maps the contract onto a crossterm terminal;
//! the test suite uses a recording mock to assert call ordering.

pub mod terminal;

pub use terminal::TerminalHost;

use crate::color::Rgb;
use crate::theme::ThemeMode;
use anyhow::Result;

use crate::screens::SavedState;

/// Layout resource bound to a screen, declared as an immutable constant by
/// each screen implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(pub u32);

/// Handle to a focusable text input owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputId(pub u32);

/// How a finished screen leaves the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Immediate removal.
    None,
    /// Animated slide-out, used by the navigate-back action.
    Slide,
}

/// Platform surface a screen lives in.
///
/// Calls arrive in the controller's creation order; implementations should
/// not reorder or defer them. Styling calls (`set_window_background`,
/// `apply_style`, the system-bar group) always precede `create_window`.
pub trait HostWindow {
    /// Suppress credential-manager/autofill overlays on the root view.
    fn disable_autofill(&mut self);

    /// Paint the window background before any content exists.
    fn set_window_background(&mut self, color: Rgb);

    /// Install the light or dark style on the window.
    fn apply_style(&mut self, mode: ThemeMode);

    /// Drop any translucent system-bar flags (full-screen strategy).
    fn clear_translucent_bars(&mut self);

    /// Lay content out full-screen with a stable inset geometry.
    fn enable_stable_fullscreen_layout(&mut self);

    /// The platform, not the theme engine, paints system-bar backgrounds.
    fn draw_system_bar_backgrounds(&mut self);

    /// Status bar color; [`Rgb::TRANSPARENT`] means see-through.
    fn set_status_bar_color(&mut self, color: Rgb);

    /// Materialize the window. Styling must already be complete.
    fn create_window(&mut self, saved: Option<&SavedState>) -> Result<()>;

    /// Bind the screen's declared layout. An unknown id is fatal.
    fn attach_layout(&mut self, layout: LayoutId) -> Result<()>;

    /// Currently focused text input, if any.
    fn focused_input(&self) -> Option<InputId>;

    /// Force-dismiss the soft input attached to `input`.
    fn dismiss_input(&mut self, input: InputId);

    /// Remove the screen from the stage.
    fn finish(&mut self, transition: Transition);

    /// Release window resources during destruction.
    fn teardown(&mut self) -> Result<()>;
}
