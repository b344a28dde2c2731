//! Terminal implementation of the host window contract.
//!
//! Maps the window vocabulary onto a crossterm terminal: full-screen means
//! the alternate screen, the status bar is the top chrome line, and
//! autofill-disable turns off bracketed paste so pasted text cannot spill
//! into custom input widgets.

use super::{HostWindow, InputId, LayoutId, Transition};
use crate::color::Rgb;
use crate::screens::SavedState;
use crate::theme::ThemeMode;
use anyhow::{Context, Result, bail};
use crossterm::{event, execute, terminal};
use std::collections::HashSet;
use std::io::stdout;
use tracing::{debug, info};

pub struct TerminalHost {
    layouts: HashSet<LayoutId>,
    attached_layout: Option<LayoutId>,
    style: Option<ThemeMode>,
    window_background: Option<Rgb>,
    status_bar: Option<Rgb>,
    autofill_disabled: bool,
    translucent_bars: bool,
    stable_fullscreen: bool,
    bar_backgrounds: bool,
    focused: Option<InputId>,
    finished: Option<Transition>,
    window_created: bool,
}

impl TerminalHost {
    /// A host that knows the given layout ids. `attach_layout` rejects
    /// anything else.
    pub fn new(layouts: impl IntoIterator<Item = LayoutId>) -> Self {
        Self {
            layouts: layouts.into_iter().collect(),
            attached_layout: None,
            style: None,
            window_background: None,
            status_bar: None,
            autofill_disabled: false,
            translucent_bars: true,
            stable_fullscreen: false,
            bar_backgrounds: false,
            focused: None,
            finished: None,
            window_created: false,
        }
    }

    /// Status bar color as configured by the controller, if any.
    pub fn status_bar_color(&self) -> Option<Rgb> {
        self.status_bar
    }

    pub fn attached_layout(&self) -> Option<LayoutId> {
        self.attached_layout
    }

    /// Whether `finish` has been requested; the event loop polls this.
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Mark a text input as focused (called by input widgets on focus).
    pub fn focus_input(&mut self, input: InputId) {
        self.focused = Some(input);
    }
}

impl HostWindow for TerminalHost {
    fn disable_autofill(&mut self) {
        self.autofill_disabled = true;
    }

    fn set_window_background(&mut self, color: Rgb) {
        self.window_background = Some(color);
    }

    fn apply_style(&mut self, mode: ThemeMode) {
        debug!(?mode, "terminal host style");
        self.style = Some(mode);
    }

    fn clear_translucent_bars(&mut self) {
        self.translucent_bars = false;
    }

    fn enable_stable_fullscreen_layout(&mut self) {
        self.stable_fullscreen = true;
    }

    fn draw_system_bar_backgrounds(&mut self) {
        self.bar_backgrounds = true;
    }

    fn set_status_bar_color(&mut self, color: Rgb) {
        self.status_bar = Some(color);
    }

    fn create_window(&mut self, _saved: Option<&SavedState>) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, terminal::EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if self.autofill_disabled {
            execute!(out, event::DisableBracketedPaste)
                .context("Failed to disable bracketed paste")?;
        }
        self.window_created = true;
        info!("terminal window created");
        Ok(())
    }

    fn attach_layout(&mut self, layout: LayoutId) -> Result<()> {
        if !self.layouts.contains(&layout) {
            bail!("unknown layout id {:?}", layout);
        }
        self.attached_layout = Some(layout);
        Ok(())
    }

    fn focused_input(&self) -> Option<InputId> {
        self.focused
    }

    fn dismiss_input(&mut self, input: InputId) {
        debug!(?input, "dismissing soft input");
        if self.focused == Some(input) {
            self.focused = None;
        }
    }

    fn finish(&mut self, transition: Transition) {
        self.finished = Some(transition);
    }

    fn teardown(&mut self) -> Result<()> {
        if !self.window_created {
            return Ok(());
        }
        self.window_created = false;
        execute!(stdout(), terminal::LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        Ok(())
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        // Terminal must come back even on an unwound stack.
        if self.window_created {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        }
    }
}
