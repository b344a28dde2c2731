//! Options menu model and widget.
//!
//! Screens contribute items through their `build_menu` hook; the controller
//! re-tints every icon to the active theme before the menu is displayed, so
//! screens never have to track theme changes themselves.

use crate::theme::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Identifier for a menu item, unique within one screen's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItemId(pub u16);

impl MenuItemId {
    /// Reserved id for the navigate-back/up action. Selecting it always
    /// finishes the screen; screen hooks never see it.
    pub const BACK: MenuItemId = MenuItemId(0);
}

/// A single menu item
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Action id reported on selection
    pub id: MenuItemId,
    /// Icon to display before the text
    pub icon: String,
    /// Display text for the menu item
    pub label: String,
    /// Icon tint; overwritten by the theme pass before display
    pub tint: Color,
    /// Whether the item is enabled (can be selected)
    pub enabled: bool,
}

impl MenuItem {
    /// Create a new menu item
    pub fn new(id: MenuItemId, icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            icon: icon.into(),
            label: label.into(),
            tint: Color::Reset,
            enabled: true,
        }
    }

    /// Set whether the item is enabled
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// A screen's options menu.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item id at a selection index.
    pub fn id_at(&self, index: usize) -> Option<MenuItemId> {
        self.items.get(index).map(|item| item.id)
    }

    fn items_mut(&mut self) -> &mut [MenuItem] {
        &mut self.items
    }
}

/// Recolor every item icon to match the active theme. Disabled items take
/// the muted color so they read as inert.
pub fn apply_theme_tint(menu: &mut Menu) {
    let t = theme();
    for item in menu.items_mut() {
        item.tint = if item.enabled { t.primary } else { t.text_muted };
    }
}

/// State for the Menu widget
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    /// Currently selected index
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Select an item by index
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Get the currently selected index
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl StatefulWidget for &Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.y + area.height {
                break;
            }

            let is_selected = state.selected == Some(i);
            let bg = if is_selected { t.highlight_bg } else { t.background };
            let text_style = if !item.enabled {
                Style::default().fg(t.text_muted).bg(bg)
            } else if is_selected {
                Style::default()
                    .fg(t.text)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.text).bg(bg)
            };

            let marker = if is_selected { "▌" } else { " " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(t.border_focused).bg(bg)),
                Span::styled(
                    format!("{} ", item.icon),
                    Style::default().fg(item.tint).bg(bg),
                ),
                Span::styled(&item.label, text_style),
            ]);

            let width = line.width();
            let mut spans = line.spans;
            if width < area.width as usize {
                spans.push(Span::styled(
                    " ".repeat(area.width as usize - width),
                    Style::default().bg(bg),
                ));
            }
            Line::from(spans).render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeMode, init_theme};

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::new(MenuItemId(3), "↻", "Refresh");
        assert_eq!(item.id, MenuItemId(3));
        assert!(item.enabled);
    }

    #[test]
    fn test_menu_state() {
        let mut state = MenuState::new();
        assert_eq!(state.selected(), None);

        state.select(Some(2));
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_tint_covers_every_item() {
        init_theme(ThemeMode::Dark);
        let t = theme();

        let mut menu = Menu::new(vec![
            MenuItem::new(MenuItemId(1), "＋", "Add book"),
            MenuItem::new(MenuItemId(2), "⌕", "Search"),
            MenuItem::new(MenuItemId(3), "✎", "Edit").enabled(false),
        ]);
        apply_theme_tint(&mut menu);

        assert_eq!(menu.items()[0].tint, t.primary);
        assert_eq!(menu.items()[1].tint, t.primary);
        assert_eq!(menu.items()[2].tint, t.text_muted);
    }

    #[test]
    fn test_tint_on_empty_menu_is_a_no_op() {
        let mut menu = Menu::default();
        apply_theme_tint(&mut menu);
        assert!(menu.is_empty());
    }

    #[test]
    fn test_id_at() {
        let menu = Menu::new(vec![MenuItem::new(MenuItemId(7), "☰", "Shelf")]);
        assert_eq!(menu.id_at(0), Some(MenuItemId(7)));
        assert_eq!(menu.id_at(1), None);
    }
}
