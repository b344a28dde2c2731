//! Demo application: a bookshelf screen running inside the controller.
//!
//! This is the reference host runtime. It wires one screen through the
//! full lifecycle (create, menu, events, finish, destroy) against the
//! terminal host, and is what the binary runs.

use crate::bus::{AppEvent, EventBus};
use crate::config::Config;
use crate::host::{LayoutId, TerminalHost};
use crate::menu::{Menu, MenuItem, MenuItemId, MenuState};
use crate::screens::{SavedState, Screen, ScreenContext, ScreenController, TaskScope};
use crate::theme::theme;
use anyhow::{Context as _, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use std::io::{Stdout, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::info;

/// Layout resource of the bookshelf screen.
pub const SHELF_LAYOUT: LayoutId = LayoutId(1);

const MENU_REFRESH: MenuItemId = MenuItemId(1);
const MENU_READ_ALOUD: MenuItemId = MenuItemId(2);

/// Display state of the bookshelf, filled by a background scan.
#[derive(Debug, Clone, Default)]
pub struct ShelfViewModel {
    pub books: Arc<RwLock<Vec<String>>>,
    pub loading: Arc<AtomicBool>,
}

/// The bookshelf screen.
pub struct ShelfScreen {
    vm: ShelfViewModel,
    selected: usize,
    read_aloud: bool,
    last_event: Arc<RwLock<Option<String>>>,
}

impl ShelfScreen {
    pub fn new() -> Self {
        Self {
            vm: ShelfViewModel::default(),
            selected: 0,
            read_aloud: false,
            last_event: Arc::new(RwLock::new(None)),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.vm.books.read().unwrap().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn start_scan(&self, ctx: &mut ScreenContext<'_>) {
        let books = self.vm.books.clone();
        let loading = self.vm.loading.clone();
        let token = ctx.scope.token();
        let bus = ctx.bus.clone();

        loading.store(true, Ordering::SeqCst);
        ctx.scope.spawn(async move {
            // Placeholder for the real shelf scan.
            tokio::time::sleep(Duration::from_millis(400)).await;
            if token.is_cancelled() {
                return;
            }
            *books.write().unwrap() = vec![
                "Moby-Dick".to_string(),
                "The Count of Monte Cristo".to_string(),
                "Journey to the West".to_string(),
                "Dream of the Red Chamber".to_string(),
            ];
            loading.store(false, Ordering::SeqCst);
            bus.publish(AppEvent::LibraryRefreshed);
        });
    }
}

impl Default for ShelfScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ShelfScreen {
    type ViewModel = ShelfViewModel;

    fn layout(&self) -> LayoutId {
        SHELF_LAYOUT
    }

    fn view_model(&self) -> &ShelfViewModel {
        &self.vm
    }

    fn on_view_model_ready(
        &mut self,
        saved: Option<&SavedState>,
        ctx: &mut ScreenContext<'_>,
    ) -> Result<()> {
        if let Some(selected) = saved.and_then(|s| s.get::<usize>("selected")) {
            self.selected = selected;
        }
        self.start_scan(ctx);
        Ok(())
    }

    fn build_menu(&mut self, menu: &mut Menu) {
        menu.push(MenuItem::new(MenuItemId::BACK, "←", "Back"));
        menu.push(MenuItem::new(MENU_REFRESH, "↻", "Refresh shelf"));
        menu.push(MenuItem::new(MENU_READ_ALOUD, "♪", "Read aloud"));
    }

    fn on_menu_selected(&mut self, item: MenuItemId, ctx: &mut ScreenContext<'_>) -> Result<bool> {
        match item {
            MENU_REFRESH => {
                self.start_scan(ctx);
                Ok(true)
            }
            MENU_READ_ALOUD => {
                self.read_aloud = !self.read_aloud;
                ctx.bus.publish(AppEvent::ReadAloudToggled(self.read_aloud));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn subscribe(&mut self, bus: &EventBus, scope: &mut TaskScope) {
        let mut rx = bus.subscribe();
        let last_event = self.last_event.clone();
        scope.spawn(async move {
            while let Ok(event) = rx.recv().await {
                let label = match event {
                    AppEvent::ThemeChanged(mode) => format!("theme → {mode:?}"),
                    AppEvent::PreferenceChanged(key) => format!("preference {key} changed"),
                    AppEvent::LibraryRefreshed => "shelf refreshed".to_string(),
                    AppEvent::ReadAloudToggled(on) => {
                        format!("read aloud {}", if on { "on" } else { "off" })
                    }
                };
                *last_event.write().unwrap() = Some(label);
            }
        });
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let t = theme();
        let books = self.vm.books.read().unwrap();

        let title = if self.vm.loading.load(Ordering::SeqCst) {
            " Bookshelf (scanning…) "
        } else {
            " Bookshelf "
        };
        let items: Vec<ListItem> = books
            .iter()
            .enumerate()
            .map(|(i, book)| {
                let style = if i == self.selected {
                    t.highlight_style()
                } else {
                    t.text_style()
                };
                ListItem::new(Line::styled(format!("  {book}"), style))
            })
            .collect();

        let body = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style())
                    .title(Line::styled(title, t.title_style())),
            ),
            body,
        );

        let footer = self
            .last_event
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "↑/↓ select  ←/→ menu  Enter run  q quit".to_string());
        if area.height > 0 {
            frame.render_widget(
                Paragraph::new(Line::styled(footer, t.muted_style())),
                Rect::new(area.x, area.y + area.height - 1, area.width, 1),
            );
        }
        Ok(())
    }
}

/// Demo host runtime: one bookshelf screen inside a controller.
pub struct App {
    controller: ScreenController<ShelfScreen, TerminalHost>,
    menu: Menu,
    menu_state: MenuState,
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
}

impl App {
    pub fn new(config: Config, full_screen: bool) -> Result<Self> {
        let bus = EventBus::new();
        let host = TerminalHost::new([SHELF_LAYOUT]);
        let controller = ScreenController::new(ShelfScreen::new(), host, config, bus)
            .with_full_screen(full_screen);

        Ok(Self {
            controller,
            menu: Menu::default(),
            menu_state: MenuState::new(),
            terminal: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        // Screen hooks spawn onto the lifecycle scope, so the runtime
        // context must be entered before create().
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let _guard = runtime.enter();

        self.controller.create(None)?;
        self.menu = self
            .controller
            .on_create_menu(Some(Menu::default()))
            .unwrap_or_default();
        self.menu_state.select(if self.menu.is_empty() {
            None
        } else {
            Some(0)
        });

        self.terminal = Some(
            Terminal::new(CrosstermBackend::new(stdout()))
                .context("Failed to build terminal frontend")?,
        );

        // Main event loop
        loop {
            self.draw()?;

            if self.controller.host().is_finished() {
                break;
            }

            // Poll for events with 250ms timeout
            if event::poll(Duration::from_millis(250))? {
                self.handle_event(event::read()?)?;
            }
        }

        let result = self.controller.destroy();
        info!("demo app exited");
        result
    }

    fn draw(&mut self) -> Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };
        let controller = &mut self.controller;
        let menu = &self.menu;
        let menu_state = &mut self.menu_state;

        terminal.draw(|frame| {
            let _ = controller.render(frame);

            // Options menu in the top-right corner, under the status bar.
            if !menu.is_empty() {
                let area = frame.area();
                let width = 22.min(area.width);
                let height = (menu.len() as u16).min(area.height.saturating_sub(1));
                let rect = Rect::new(area.width.saturating_sub(width), 1, width, height);
                frame.render_stateful_widget(menu, rect, menu_state);
            }
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.controller.on_menu_selected(MenuItemId::BACK)?;
            }
            KeyCode::Up => self.controller.screen_mut().select_previous(),
            KeyCode::Down => self.controller.screen_mut().select_next(),
            KeyCode::Left => {
                if let Some(i) = self.menu_state.selected() {
                    self.menu_state.select(Some(i.saturating_sub(1)));
                }
            }
            KeyCode::Right => {
                if let Some(i) = self.menu_state.selected() {
                    self.menu_state
                        .select(Some((i + 1).min(self.menu.len().saturating_sub(1))));
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.menu_state.selected().and_then(|i| self.menu.id_at(i)) {
                    self.controller.on_menu_selected(id)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
