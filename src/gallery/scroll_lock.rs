use std::{cell::RefCell, rc::Rc};

use crate::page::{BodyStyle, Overflow, Page, TouchAction};

/// Suspends page scrolling for as long as it is held.
///
/// The body style in effect at acquire time is captured and written back on
/// drop, so whatever the page had before is what it gets again.
#[derive(Debug)]
pub struct ScrollLock {
    body: Rc<RefCell<BodyStyle>>,
    saved: BodyStyle,
}

impl ScrollLock {
    pub fn acquire(page: &Page) -> Self {
        let body = page.body_handle();
        let saved = *body.borrow();
        *body.borrow_mut() = BodyStyle {
            overflow: Overflow::Hidden,
            touch_action: TouchAction::None,
        };
        tracing::debug!(?saved, "scroll lock acquired");
        Self { body, saved }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        *self.body.borrow_mut() = self.saved;
        tracing::debug!(restored = ?self.saved, "scroll lock released");
    }
}
