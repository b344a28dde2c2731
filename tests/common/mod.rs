//! Shared test harness for the screen lifecycle suite.
//!
//! Provides a recording mock host and a scripted screen that share one
//! call log, so tests can assert the exact interleaving of host calls and
//! screen hooks across the creation pipeline.

use anyhow::{Result, bail};
use ratatui::Frame;
use ratatui::layout::Rect;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use lectern::color::Rgb;
use lectern::host::{HostWindow, InputId, LayoutId, Transition};
use lectern::menu::{Menu, MenuItem, MenuItemId};
use lectern::screens::{SavedState, Screen, ScreenContext, TaskScope};
use lectern::theme::ThemeMode;
use lectern::{Config, EventBus};

/// Layout id the mock host accepts by default.
pub const TEST_LAYOUT: LayoutId = LayoutId(42);

/// Screen creation installs the global theme palette, so tests whose
/// assertions read it must not interleave with other creations.
#[allow(dead_code)]
pub static THEME_LOCK: Mutex<()> = Mutex::new(());

/// Shared, clonable call recorder.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

#[allow(dead_code)]
impl CallLog {
    pub fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Position of the first call equal to `name`, if any.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.calls().iter().position(|c| c == name)
    }
}

/// Host that records every call and exposes the values it was handed.
pub struct MockHost {
    pub log: CallLog,
    pub layouts: HashSet<LayoutId>,
    pub focused: Option<InputId>,
    pub status_bar: Option<Rgb>,
    pub background: Option<Rgb>,
    pub style: Option<ThemeMode>,
    pub finished: Option<Transition>,
    pub fail_window_creation: bool,
    pub fail_teardown: bool,
}

#[allow(dead_code)]
impl MockHost {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            layouts: HashSet::from([TEST_LAYOUT]),
            focused: None,
            status_bar: None,
            background: None,
            style: None,
            finished: None,
            fail_window_creation: false,
            fail_teardown: false,
        }
    }

    pub fn with_focused_input(mut self, input: InputId) -> Self {
        self.focused = Some(input);
        self
    }
}

impl HostWindow for MockHost {
    fn disable_autofill(&mut self) {
        self.log.record("disable_autofill");
    }

    fn set_window_background(&mut self, color: Rgb) {
        self.background = Some(color);
        self.log.record("set_window_background");
    }

    fn apply_style(&mut self, mode: ThemeMode) {
        self.style = Some(mode);
        self.log.record("apply_style");
    }

    fn clear_translucent_bars(&mut self) {
        self.log.record("clear_translucent_bars");
    }

    fn enable_stable_fullscreen_layout(&mut self) {
        self.log.record("enable_stable_fullscreen_layout");
    }

    fn draw_system_bar_backgrounds(&mut self) {
        self.log.record("draw_system_bar_backgrounds");
    }

    fn set_status_bar_color(&mut self, color: Rgb) {
        self.status_bar = Some(color);
        self.log.record("set_status_bar_color");
    }

    fn create_window(&mut self, _saved: Option<&SavedState>) -> Result<()> {
        self.log.record("create_window");
        if self.fail_window_creation {
            bail!("window creation refused");
        }
        Ok(())
    }

    fn attach_layout(&mut self, layout: LayoutId) -> Result<()> {
        self.log.record("attach_layout");
        if !self.layouts.contains(&layout) {
            bail!("unknown layout id {:?}", layout);
        }
        Ok(())
    }

    fn focused_input(&self) -> Option<InputId> {
        self.focused
    }

    fn dismiss_input(&mut self, input: InputId) {
        if self.focused == Some(input) {
            self.focused = None;
        }
        self.log.record("dismiss_input");
    }

    fn finish(&mut self, transition: Transition) {
        self.finished = Some(transition);
        self.log.record("finish");
    }

    fn teardown(&mut self) -> Result<()> {
        self.log.record("teardown");
        if self.fail_teardown {
            bail!("teardown refused");
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TestViewModel {
    pub ready_count: usize,
}

/// Screen that records its hooks into the shared log.
pub struct TestScreen {
    pub log: CallLog,
    pub vm: TestViewModel,
    pub layout: LayoutId,
    pub menu_items: Vec<MenuItem>,
    pub seen_selections: Vec<MenuItemId>,
    pub consume_selections: bool,
}

#[allow(dead_code)]
impl TestScreen {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            vm: TestViewModel::default(),
            layout: TEST_LAYOUT,
            menu_items: Vec::new(),
            seen_selections: Vec::new(),
            consume_selections: false,
        }
    }

    pub fn with_layout(mut self, layout: LayoutId) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_menu_items(mut self, items: Vec<MenuItem>) -> Self {
        self.menu_items = items;
        self
    }
}

impl Screen for TestScreen {
    type ViewModel = TestViewModel;

    fn layout(&self) -> LayoutId {
        self.layout
    }

    fn view_model(&self) -> &TestViewModel {
        &self.vm
    }

    fn on_view_model_ready(
        &mut self,
        _saved: Option<&SavedState>,
        _ctx: &mut ScreenContext<'_>,
    ) -> Result<()> {
        self.vm.ready_count += 1;
        self.log.record("on_view_model_ready");
        Ok(())
    }

    fn build_menu(&mut self, menu: &mut Menu) {
        self.log.record("build_menu");
        for item in &self.menu_items {
            menu.push(item.clone());
        }
    }

    fn on_menu_selected(&mut self, item: MenuItemId, _ctx: &mut ScreenContext<'_>) -> Result<bool> {
        self.log.record(format!("on_menu_selected:{}", item.0));
        self.seen_selections.push(item);
        Ok(self.consume_selections)
    }

    fn subscribe(&mut self, _bus: &EventBus, _scope: &mut TaskScope) {
        self.log.record("subscribe");
    }

    fn render(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

/// Config with the given primary color and transparency preference.
#[allow(dead_code)]
pub fn config(primary: &str, transparent_status_bar: bool) -> Config {
    Config {
        transparent_status_bar,
        primary_color: primary.to_string(),
        ..Config::default()
    }
}
