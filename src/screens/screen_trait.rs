//! Screen trait and associated types.
//!
//! A screen implementation supplies its layout, its view model, and a set
//! of hooks; [`super::ScreenController`] owns the lifecycle plumbing around
//! them. The controller's entry points are inherent methods on the
//! controller struct, so the pre/post steps they perform (theme setup, icon
//! tinting, back-interception, input dismissal) cannot be overridden away.

use crate::bus::EventBus;
use crate::config::Config;
use crate::host::LayoutId;
use crate::menu::{Menu, MenuItemId};
use anyhow::Result;
use ratatui::Frame;
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use super::scope::TaskScope;

/// Host-preserved state handed back to a screen when it is recreated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedState {
    values: serde_json::Map<String, serde_json::Value>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<T: Serialize>(&mut self, key: &str, value: T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.values.insert(key.to_string(), value);
        }
    }

    /// Typed read; `None` when the key is absent or has the wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Context handed to screen hooks.
///
/// Gives read access to shared resources and mutable access to the
/// screen's own lifecycle scope for launching background work.
pub struct ScreenContext<'a> {
    /// Application preferences (read-only from screens).
    pub config: &'a Config,
    /// Shared event bus.
    pub bus: &'a EventBus,
    /// This screen's lifecycle-bound task scope.
    pub scope: &'a mut TaskScope,
}

/// One navigable screen of the application.
///
/// Implementations own their view model and state; the controller
/// guarantees that by the time any hook other than `layout` runs, the
/// theme is applied, the system bar is configured, and the window with
/// this screen's layout exists.
pub trait Screen {
    /// View model this screen drives. The controller never constructs it,
    /// only sequences readiness around it.
    type ViewModel;

    /// Layout resource to bind at creation.
    fn layout(&self) -> LayoutId;

    /// Read-only binding to the screen's view model.
    fn view_model(&self) -> &Self::ViewModel;

    /// Called once the view hierarchy exists. Wire observers and launch
    /// initial loads here, on `ctx.scope`.
    fn on_view_model_ready(
        &mut self,
        saved: Option<&SavedState>,
        ctx: &mut ScreenContext<'_>,
    ) -> Result<()>;

    /// Contribute items to the options menu. The controller re-tints every
    /// icon afterwards; leave tints alone.
    fn build_menu(&mut self, menu: &mut Menu) {
        let _ = menu;
    }

    /// Handle a selected menu item. Return `true` when consumed. The
    /// navigate-back item never reaches this hook.
    fn on_menu_selected(&mut self, item: MenuItemId, ctx: &mut ScreenContext<'_>) -> Result<bool> {
        let _ = (item, ctx);
        Ok(false)
    }

    /// Register event-bus handlers. Default: no subscriptions. Handlers
    /// spawned on `scope` end with the screen.
    fn subscribe(&mut self, bus: &EventBus, scope: &mut TaskScope) {
        let _ = (bus, scope);
    }

    /// Draw the screen body. `area` excludes the status-bar chrome.
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
