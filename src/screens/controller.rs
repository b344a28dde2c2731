//! The shared lifecycle base every screen runs inside.
//!
//! `ScreenController` wraps a [`Screen`] implementation and a
//! [`HostWindow`] and owns the ordering that keeps screens flicker-free:
//! theme and system-bar configuration are fully applied before the window
//! materializes, the window exists before the screen's readiness hook
//! runs, and destroying the screen cancels its task scope no matter how
//! teardown goes. The entry points here are inherent methods, so screens
//! cannot opt out of the pre/post steps around their hooks.

use crate::bus::EventBus;
use crate::color::Rgb;
use crate::config::Config;
use crate::host::{HostWindow, Transition};
use crate::menu::{self, Menu, MenuItemId};
use crate::theme::{self, ThemeMode};
use anyhow::{Context, Result, bail};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tracing::{debug, info};

use super::lifecycle::Lifecycle;
use super::scope::TaskScope;
use super::screen_trait::{SavedState, Screen, ScreenContext};

pub struct ScreenController<S: Screen, H: HostWindow> {
    screen: S,
    host: H,
    config: Config,
    bus: EventBus,
    full_screen: bool,
    lifecycle: Lifecycle,
    scope: Option<TaskScope>,
    theme_mode: Option<ThemeMode>,
    status_bar: Option<Rgb>,
}

impl<S: Screen, H: HostWindow> ScreenController<S, H> {
    /// Wrap `screen` in the lifecycle base. Screens are full-screen unless
    /// [`Self::with_full_screen`] says otherwise.
    pub fn new(screen: S, host: H, config: Config, bus: EventBus) -> Self {
        Self {
            screen,
            host,
            config,
            bus,
            full_screen: true,
            lifecycle: Lifecycle::Created,
            scope: None,
            theme_mode: None,
            status_bar: None,
        }
    }

    /// Select the system-bar strategy. Captured at construction, immutable
    /// once the screen is created.
    pub fn with_full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    /// Run the creation pipeline.
    ///
    /// Order is load-bearing: autofill suppression, theme, system bar,
    /// window creation, layout binding, readiness hook, bus subscription.
    /// Styling before window creation is what prevents a visible flash of
    /// the wrong theme.
    pub fn create(&mut self, saved: Option<&SavedState>) -> Result<()> {
        self.lifecycle.advance(Lifecycle::Active)?;

        self.host.disable_autofill();
        self.init_theme();
        self.setup_system_bar();

        self.host
            .create_window(saved)
            .context("platform window creation failed")?;
        self.host
            .attach_layout(self.screen.layout())
            .context("failed to bind screen layout")?;

        let mut scope = TaskScope::new();
        {
            let mut ctx = ScreenContext {
                config: &self.config,
                bus: &self.bus,
                scope: &mut scope,
            };
            self.screen.on_view_model_ready(saved, &mut ctx)?;
        }
        self.screen.subscribe(&self.bus, &mut scope);
        self.scope = Some(scope);

        info!(mode = ?self.theme_mode, full_screen = self.full_screen, "screen created");
        Ok(())
    }

    /// Tear the screen down. The task scope is cancelled unconditionally,
    /// even when host teardown fails; the teardown error still propagates.
    pub fn destroy(&mut self) -> Result<()> {
        self.lifecycle.advance(Lifecycle::Destroyed)?;

        let teardown = self.host.teardown();
        if let Some(mut scope) = self.scope.take() {
            scope.cancel();
        }
        info!("screen destroyed");
        teardown.context("host teardown failed")
    }

    /// Sealed menu-creation entry point. An absent menu silently falls
    /// back to the platform default. A present menu is filled by the
    /// screen's `build_menu` hook and then every icon is re-tinted to the
    /// active theme before it is displayed.
    pub fn on_create_menu(&mut self, menu: Option<Menu>) -> Option<Menu> {
        let mut menu = menu?;
        self.screen.build_menu(&mut menu);
        menu::apply_theme_tint(&mut menu);
        Some(menu)
    }

    /// Sealed menu-selection entry point. The navigate-back item finishes
    /// the screen with a transition and never reaches the screen's hook;
    /// everything else is delegated.
    pub fn on_menu_selected(&mut self, item: MenuItemId) -> Result<bool> {
        if item == MenuItemId::BACK {
            self.finish_after_transition();
            return Ok(true);
        }

        let Some(scope) = self.scope.as_mut() else {
            bail!("menu selection before screen creation");
        };
        let mut ctx = ScreenContext {
            config: &self.config,
            bus: &self.bus,
            scope,
        };
        self.screen.on_menu_selected(item, &mut ctx)
    }

    /// Close the screen without a transition.
    pub fn finish(&mut self) {
        self.finish_with(Transition::None);
    }

    /// Close the screen with the slide-out transition (back navigation).
    pub fn finish_after_transition(&mut self) {
        self.finish_with(Transition::Slide);
    }

    fn finish_with(&mut self, transition: Transition) {
        // Dismissal happens on every finish path, whatever requested it.
        if let Some(input) = self.host.focused_input() {
            self.host.dismiss_input(input);
        }
        debug!(?transition, "finishing screen");
        self.host.finish(transition);
    }

    /// Draw status-bar chrome, then the screen body beneath it. With a
    /// transparent bar the body lays out under the full area.
    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let body = match self.status_bar {
            Some(color) if !color.is_transparent() && area.height > 0 => {
                let bar = Rect::new(area.x, area.y, area.width, 1);
                frame.render_widget(
                    Block::default().style(Style::default().bg(color.to_color())),
                    bar,
                );
                Rect::new(area.x, area.y + 1, area.width, area.height - 1)
            }
            _ => area,
        };
        self.screen.render(frame, body)
    }

    fn init_theme(&mut self) {
        self.host
            .set_window_background(theme::background_color(&self.config));
        let mode = ThemeMode::resolve(&self.config);
        theme::init_theme(mode);
        self.host.apply_style(mode);
        self.theme_mode = Some(mode);
        debug!(?mode, "theme applied");
    }

    fn setup_system_bar(&mut self) {
        let color = if self.full_screen {
            self.host.clear_translucent_bars();
            self.host.enable_stable_fullscreen_layout();
            self.host.draw_system_bar_backgrounds();
            if self.config.transparent_status_bar {
                Rgb::TRANSPARENT
            } else {
                theme::STATUS_BAR_BG
            }
        } else {
            theme::status_bar_color(&self.config, self.config.transparent_status_bar)
        };
        self.host.set_status_bar_color(color);
        self.status_bar = Some(color);
    }

    // === Accessors ===

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Read-only binding to the screen's view model.
    pub fn view_model(&self) -> &S::ViewModel {
        self.screen.view_model()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Theme mode resolved during creation.
    pub fn theme_mode(&self) -> Option<ThemeMode> {
        self.theme_mode
    }

    /// Status-bar color configured during creation.
    pub fn status_bar_color(&self) -> Option<Rgb> {
        self.status_bar
    }

    /// The screen's task scope; `None` outside the Active state.
    pub fn scope_mut(&mut self) -> Option<&mut TaskScope> {
        self.scope.as_mut()
    }
}
