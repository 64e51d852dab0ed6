//! The scrollable document the gallery lives in: vertical scroll position,
//! section anchors, the body style that a scroll lock toggles, and the
//! registry of event listeners attached to the window.

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
    time::{Duration, Instant},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Auto,
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchAction {
    #[default]
    Auto,
    PanY,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyStyle {
    pub overflow: Overflow,
    pub touch_action: TouchAction,
}

impl BodyStyle {
    pub fn allows_user_scroll(&self) -> bool {
        self.overflow != Overflow::Hidden
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth(Duration),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Keydown,
    Scroll,
}

type ListenerRegistry = RefCell<HashMap<ListenerKind, usize>>;

/// Keeps a listener registered for as long as it is alive.
#[derive(Debug)]
pub struct Subscription {
    kind: ListenerKind,
    registry: Weak<ListenerRegistry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        if let Some(count) = registry.get_mut(&self.kind) {
            *count = count.saturating_sub(1);
            tracing::trace!(kind = ?self.kind, remaining = *count, "listener removed");
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    fn position(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }

        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).round() as u16
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

pub struct Page {
    scroll_y: u16,
    max_scroll: u16,
    row_height_px: u32,
    anchors: HashMap<String, u16>,
    body: Rc<RefCell<BodyStyle>>,
    listeners: Rc<ListenerRegistry>,
    animation: Option<ScrollAnimation>,
    scroll_event_pending: bool,
}

impl Page {
    pub fn new(row_height_px: u32) -> Self {
        Self {
            scroll_y: 0,
            max_scroll: 0,
            row_height_px: row_height_px.max(1),
            anchors: HashMap::new(),
            body: Rc::new(RefCell::new(BodyStyle::default())),
            listeners: Rc::new(RefCell::new(HashMap::new())),
            animation: None,
            scroll_event_pending: false,
        }
    }

    /// Replaces the anchor table and scroll extent after a layout pass.
    pub fn set_layout(&mut self, anchors: HashMap<String, u16>, content_rows: u16, viewport_rows: u16) {
        self.anchors = anchors;
        self.max_scroll = content_rows.saturating_sub(viewport_rows);
        if self.scroll_y > self.max_scroll {
            self.set_scroll_y(self.max_scroll);
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(self.max_scroll);
        }
    }

    pub fn scroll_y(&self) -> u16 {
        self.scroll_y
    }

    pub fn scroll_y_px(&self) -> u32 {
        u32::from(self.scroll_y).saturating_mul(self.row_height_px)
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    pub fn element_offset(&self, id: &str) -> Option<u16> {
        self.anchors.get(id).copied()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Programmatic scroll; works regardless of the body overflow setting.
    pub fn scroll_to(&mut self, row: u16, behavior: ScrollBehavior, now: Instant) {
        let target = row.min(self.max_scroll);
        match behavior {
            ScrollBehavior::Smooth(duration) if !duration.is_zero() && target != self.scroll_y => {
                self.animation = Some(ScrollAnimation {
                    from: self.scroll_y,
                    to: target,
                    started: now,
                    duration,
                });
            }
            _ => {
                self.animation = None;
                self.set_scroll_y(target);
            }
        }
    }

    /// User-initiated scroll (wheel, paging keys). Ignored while the body
    /// overflow is hidden.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if !self.body.borrow().allows_user_scroll() {
            return false;
        }

        self.animation = None;
        let target = (self.scroll_y as i32 + delta).clamp(0, self.max_scroll as i32) as u16;
        if target == self.scroll_y {
            return false;
        }
        self.set_scroll_y(target);
        true
    }

    /// Advances a running smooth scroll.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };

        self.set_scroll_y(animation.position(now));
        if animation.finished(now) {
            self.animation = None;
        }
    }

    fn set_scroll_y(&mut self, row: u16) {
        if row != self.scroll_y {
            self.scroll_y = row;
            self.scroll_event_pending = true;
        }
    }

    /// Returns whether a scroll event should be delivered, consuming it.
    /// Events with no scroll listener attached are dropped.
    pub fn take_scroll_event(&mut self) -> bool {
        let pending = std::mem::take(&mut self.scroll_event_pending);
        pending && self.listener_count(ListenerKind::Scroll) > 0
    }

    /// Whether a key press should be handed to the keydown listeners.
    /// With none attached the press goes nowhere.
    pub fn deliver_key(&self) -> bool {
        self.listener_count(ListenerKind::Keydown) > 0
    }

    pub fn body(&self) -> BodyStyle {
        *self.body.borrow()
    }

    pub fn set_body(&mut self, style: BodyStyle) {
        *self.body.borrow_mut() = style;
    }

    pub(crate) fn body_handle(&self) -> Rc<RefCell<BodyStyle>> {
        Rc::clone(&self.body)
    }

    pub fn subscribe(&self, kind: ListenerKind) -> Subscription {
        let mut registry = self.listeners.borrow_mut();
        let count = registry.entry(kind).or_insert(0);
        *count += 1;
        tracing::trace!(?kind, count = *count, "listener added");
        Subscription {
            kind,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.listeners.borrow().get(&kind).copied().unwrap_or(0)
    }
}
