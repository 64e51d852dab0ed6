//! Interactive core of the portfolio page: card selection, the detail modal
//! lifecycle and scroll-linked navigation, independent of how it is painted.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::{
    config::Config,
    content::{ContentStore, Project, ProjectId},
    page::{ListenerKind, Page, Subscription},
};

mod scroll;
mod scroll_lock;
mod selection;

use scroll::ScrollController;
use scroll_lock::ScrollLock;
use selection::Selection;

pub use selection::OpenState;

pub struct Gallery {
    store: ContentStore,
    selection: Selection,
    scroll: ScrollController,
    scroll_lock: Option<ScrollLock>,
    _keydown_listener: Subscription,
    _scroll_listener: Subscription,
}

impl Gallery {
    /// Attaches to `page`: registers the keydown and scroll listeners and
    /// evaluates the scroll threshold once, so a page that is already
    /// scrolled shows the Top affordance immediately.
    pub fn mount(store: ContentStore, config: &Config, page: &Page) -> Self {
        let keydown_listener = page.subscribe(ListenerKind::Keydown);
        let scroll_listener = page.subscribe(ListenerKind::Scroll);

        let mut scroll =
            ScrollController::new(config.scroll_top_threshold_px, config.smooth_scroll());
        scroll.observe(page);

        tracing::info!(
            categories = store.categories().len(),
            projects = store.projects().len(),
            "gallery mounted"
        );

        Self {
            store,
            selection: Selection::new(config.open_delay()),
            scroll,
            scroll_lock: None,
            _keydown_listener: keydown_listener,
            _scroll_listener: scroll_listener,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn open_project(&mut self, id: ProjectId, page: &Page, now: Instant) {
        if self.store.project(id).is_none() {
            tracing::debug!(project = id.0, "ignoring open for unknown project");
            return;
        }

        tracing::info!(project = id.0, "opening project");
        self.selection.open(id, now);
        self.sync_scroll_lock(page);
    }

    /// Returns whether anything was open.
    pub fn close_modal(&mut self) -> bool {
        let closed = self.selection.close();
        if closed {
            tracing::info!("modal closed");
        }
        self.scroll_lock = None;
        closed
    }

    /// Fires the deferred open if it is due. Returns whether state changed.
    pub fn poll(&mut self, page: &Page, now: Instant) -> bool {
        let fired = self.selection.poll(now);
        if fired {
            tracing::debug!(
                project = ?self.selection.selected_project(),
                "open transition complete"
            );
            self.sync_scroll_lock(page);
        }
        fired
    }

    /// Keydown listener. Only the cancel key is recognized.
    pub fn on_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => self.close_modal(),
            _ => false,
        }
    }

    /// Scroll listener. Returns whether the Top affordance flipped.
    pub fn on_scroll(&mut self, page: &Page) -> bool {
        self.scroll.observe(page)
    }

    pub fn scroll_to_section(&self, page: &mut Page, section_id: &str, now: Instant) -> bool {
        self.scroll.scroll_to_section(page, section_id, now)
    }

    pub fn scroll_to_top(&self, page: &mut Page, now: Instant) {
        self.scroll.scroll_to_top(page, now);
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll.past_threshold()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selection
            .selected_project()
            .and_then(|id| self.store.project(id))
    }

    pub fn active_card_id(&self) -> Option<ProjectId> {
        self.selection.active_card()
    }

    pub fn transitioning_card_id(&self) -> Option<ProjectId> {
        self.selection.transitioning_card()
    }

    pub fn is_card_active(&self, id: ProjectId) -> bool {
        self.active_card_id() == Some(id) || self.transitioning_card_id() == Some(id)
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(
            self.open_state(),
            OpenState::Open { .. } | OpenState::Transitioning { showing: Some(_), .. }
        )
    }

    pub fn open_state(&self) -> OpenState {
        self.selection.state()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.selection.next_deadline()
    }

    fn sync_scroll_lock(&mut self, page: &Page) {
        match (self.is_modal_open(), self.scroll_lock.is_some()) {
            (true, false) => self.scroll_lock = Some(ScrollLock::acquire(page)),
            (false, true) => self.scroll_lock = None,
            _ => {}
        }
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        tracing::info!(modal_open = self.scroll_lock.is_some(), "gallery unmounted");
    }
}
