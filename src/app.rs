use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};

use crate::{
    config::Config,
    content::{CategoryId, ContentStore, ProjectId},
    error::Result,
    gallery::Gallery,
    page::{BodyStyle, Overflow, Page, TouchAction},
};

mod detail_modal_view;
mod event_handlers;
mod layout;
mod render_views;
mod ui_helpers;
mod view_style;

use layout::PageLayout;

/// Clickable things on screen, in paint order.
#[derive(Clone, Debug, PartialEq, Eq)]
enum HitTarget {
    Shortcut(CategoryId),
    Card(ProjectId),
    ScrollTop,
    Backdrop,
    ModalBody,
    ModalClose,
    ModalBack,
    ModalLink(usize),
}

/// The document scrolls vertically; horizontal panning stays with the page.
const PAGE_BODY: BodyStyle = BodyStyle {
    overflow: Overflow::Auto,
    touch_action: TouchAction::PanY,
};

struct App {
    gallery: Gallery,
    config: Config,
    layout: PageLayout,
    viewport: Rect,
    focused_card: Option<ProjectId>,
    detail_scroll: u16,
    detail_max_scroll: u16,
    detail_page_rows: u16,
    hit_regions: Vec<(Rect, HitTarget)>,
    render_needed: bool,
}

impl App {
    fn new(store: ContentStore, config: Config, page: &mut Page, area: Rect) -> Self {
        let gallery = Gallery::mount(store, &config, page);
        let mut app = Self {
            gallery,
            config,
            layout: PageLayout::default(),
            viewport: Rect::default(),
            focused_card: None,
            detail_scroll: 0,
            detail_max_scroll: 0,
            detail_page_rows: 0,
            hit_regions: Vec::new(),
            render_needed: true,
        };
        app.relayout(page, area);
        app
    }

    fn in_detail_modal(&self) -> bool {
        self.gallery.is_modal_open()
    }

    /// Recomputes the page layout when the terminal size changes and hands
    /// the new anchors and extent to the page.
    fn relayout(&mut self, page: &mut Page, area: Rect) {
        if area == self.viewport && self.layout.width == area.width {
            return;
        }

        self.layout = PageLayout::compute(self.gallery.store(), area.width);
        self.viewport = area;
        page.set_layout(self.layout.anchors(), self.layout.height, area.height);
        tracing::debug!(
            width = area.width,
            height = area.height,
            columns = self.layout.columns,
            content_rows = self.layout.height,
            "page laid out"
        );
    }

    /// Advances timers and animations. Returns whether a repaint is needed.
    fn update(&mut self, page: &mut Page, now: Instant) -> bool {
        let mut changed = page.is_animating();
        page.tick(now);

        if page.take_scroll_event() {
            self.gallery.on_scroll(page);
            changed = true;
        }

        if self.gallery.poll(page, now) {
            self.detail_scroll = 0;
            changed = true;
        }

        changed
    }
}

pub fn run_ui(store: ContentStore, config: Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, store, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, store: ContentStore, config: Config) -> Result<()> {
    let tick_rate = config.tick_rate();
    let render_rate = config.render_rate();

    let mut page = Page::new(config.row_height_px);
    page.set_body(PAGE_BODY);

    let size = terminal.size()?;
    let mut app = App::new(store, config, &mut page, size);
    let mut last_render: Option<Instant> = None;

    loop {
        if app.update(&mut page, Instant::now()) {
            app.render_needed = true;
        }

        let render_due = last_render.is_none_or(|at| at.elapsed() >= render_rate);
        if render_due && app.render_needed {
            terminal.draw(|f| {
                app.draw_frame(f, &mut page);
            })?;
            app.render_needed = false;
            last_render = Some(Instant::now());
        }

        let timeout = app
            .gallery
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()).min(tick_rate))
            .unwrap_or(tick_rate)
            .max(Duration::from_millis(1));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key, &mut page, Instant::now()) {
                        break;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, &mut page, Instant::now()),
                Event::Resize(..) => app.render_needed = true,
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{content::tests::web_apps_only, page::ScrollBehavior};

    const DELAY: Duration = Duration::from_millis(140);

    fn setup(store: ContentStore) -> (Terminal<TestBackend>, Page, App) {
        let terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut page = Page::new(16);
        page.set_body(PAGE_BODY);
        let area = Rect::new(0, 0, 120, 40);
        let app = App::new(store, Config::default(), &mut page, area);
        (terminal, page, app)
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App, page: &mut Page) {
        terminal.draw(|f| app.draw_frame(f, page)).unwrap();
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn click(app: &mut App, page: &mut Page, x: u16, y: u16, now: Instant) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(mouse, page, now);
    }

    fn region_of(app: &App, target: &HitTarget) -> Rect {
        app.hit_regions
            .iter()
            .find(|(_, t)| t == target)
            .map(|(rect, _)| *rect)
            .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_only_populated_sections_render() {
        let (mut terminal, mut page, mut app) = setup(web_apps_only());
        draw(&mut terminal, &mut app, &mut page);

        let text = screen_text(&terminal);
        assert!(text.contains("Project 403"));
        assert!(text.contains("Project 404"));
        // Every shortcut is offered, but only one section heading is drawn.
        assert_eq!(app.layout.sections.len(), 1);
        assert_eq!(app.layout.shortcuts.len(), 4);
    }

    #[test]
    fn test_clicking_card_opens_detail_after_delay() {
        let (mut terminal, mut page, mut app) = setup(ContentStore::builtin());
        draw(&mut terminal, &mut app, &mut page);
        let start = Instant::now();

        let card = region_of(&app, &HitTarget::Card(ProjectId(101)));
        click(&mut app, &mut page, card.x + 1, card.y + 1, start);
        assert_eq!(app.gallery.active_card_id(), Some(ProjectId(101)));
        assert!(!app.in_detail_modal());

        app.update(&mut page, start + DELAY);
        assert!(app.in_detail_modal());
        assert_eq!(page.body().overflow, Overflow::Hidden);

        draw(&mut terminal, &mut app, &mut page);
        assert!(screen_text(&terminal).contains("Press ESC to close"));
    }

    #[test]
    fn test_click_inside_modal_is_absorbed_and_backdrop_closes() {
        let (mut terminal, mut page, mut app) = setup(ContentStore::builtin());
        let start = Instant::now();
        app.gallery.open_project(ProjectId(301), &page, start);
        app.update(&mut page, start + DELAY);
        draw(&mut terminal, &mut app, &mut page);

        let body = region_of(&app, &HitTarget::ModalBody);
        click(&mut app, &mut page, body.x + 2, body.y + 2, start + DELAY);
        assert!(app.in_detail_modal());

        click(&mut app, &mut page, 0, 0, start + DELAY);
        assert!(!app.in_detail_modal());
        assert_eq!(app.gallery.active_card_id(), None);
        assert_eq!(page.body(), PAGE_BODY);
    }

    #[test]
    fn test_close_control_and_escape_dismiss() {
        let (mut terminal, mut page, mut app) = setup(ContentStore::builtin());
        let start = Instant::now();

        app.gallery.open_project(ProjectId(201), &page, start);
        app.update(&mut page, start + DELAY);
        draw(&mut terminal, &mut app, &mut page);
        let close = region_of(&app, &HitTarget::ModalClose);
        click(&mut app, &mut page, close.x, close.y, start + DELAY);
        assert!(!app.in_detail_modal());

        app.gallery.open_project(ProjectId(201), &page, start);
        app.update(&mut page, start + DELAY);
        assert!(!app.handle_key(key(KeyCode::Esc), &mut page, start + DELAY));
        assert!(!app.in_detail_modal());
    }

    #[test]
    fn test_shortcut_click_scrolls_to_section() {
        let (mut terminal, mut page, mut app) = setup(ContentStore::builtin());
        draw(&mut terminal, &mut app, &mut page);
        let start = Instant::now();

        let target = CategoryId::new("web-apps");
        let shortcut = region_of(&app, &HitTarget::Shortcut(target.clone()));
        click(&mut app, &mut page, shortcut.x + 1, shortcut.y, start);
        app.update(&mut page, start + Duration::from_secs(1));

        let anchor = page.element_offset(target.as_str()).unwrap();
        assert_eq!(page.scroll_y(), anchor.min(page.max_scroll()));
    }

    #[test]
    fn test_empty_section_shortcut_does_not_scroll() {
        let (mut terminal, mut page, mut app) = setup(web_apps_only());
        draw(&mut terminal, &mut app, &mut page);
        let start = Instant::now();

        let shortcut = region_of(&app, &HitTarget::Shortcut(CategoryId::new("ai-integrations")));
        click(&mut app, &mut page, shortcut.x + 1, shortcut.y, start);
        assert!(!page.is_animating());
        assert_eq!(page.scroll_y(), 0);
    }

    #[test]
    fn test_page_wheel_is_ignored_while_modal_open() {
        let (mut terminal, mut page, mut app) = setup(ContentStore::builtin());
        let start = Instant::now();
        app.gallery.open_project(ProjectId(103), &page, start);
        app.update(&mut page, start + DELAY);
        draw(&mut terminal, &mut app, &mut page);

        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel, &mut page, start + DELAY);
        assert_eq!(page.scroll_y(), 0);
    }

    #[test]
    fn test_keyboard_focus_and_enter_open_card() {
        let (_terminal, mut page, mut app) = setup(ContentStore::builtin());
        let start = Instant::now();

        app.handle_key(key(KeyCode::Right), &mut page, start);
        assert_eq!(app.focused_card, Some(ProjectId(101)));
        app.handle_key(key(KeyCode::Right), &mut page, start);
        assert_eq!(app.focused_card, Some(ProjectId(103)));

        app.handle_key(key(KeyCode::Enter), &mut page, start);
        assert_eq!(app.gallery.transitioning_card_id(), Some(ProjectId(103)));
    }

    #[test]
    fn test_large_catalog_renders_top_and_bottom() {
        for (width, height) in [(120, 40), (300, 50)] {
            let mut catalog = crate::content::builtin_catalog();
            catalog.projects = (1000..1300)
                .map(|id| crate::content::tests::project(id, "web-apps", &["Rust", "Tokio"]))
                .collect();

            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            let mut page = Page::new(16);
            page.set_body(PAGE_BODY);
            let area = Rect::new(0, 0, width, height);
            let mut app = App::new(ContentStore::new(catalog), Config::default(), &mut page, area);
            assert!(u32::from(app.layout.height) * u32::from(width) > u32::from(u16::MAX));

            draw(&mut terminal, &mut app, &mut page);
            assert!(screen_text(&terminal).contains("Project 1000"));

            page.scroll_to(page.max_scroll(), ScrollBehavior::Instant, Instant::now());
            draw(&mut terminal, &mut app, &mut page);
            assert!(screen_text(&terminal).contains("Project 1299"));
            assert!(
                app.hit_regions
                    .iter()
                    .any(|(_, target)| *target == HitTarget::Card(ProjectId(1299)))
            );
        }
    }

    #[test]
    fn test_quit_key() {
        let (_terminal, mut page, mut app) = setup(ContentStore::builtin());
        assert!(app.handle_key(key(KeyCode::Char('q')), &mut page, Instant::now()));
    }
}
