use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    page::{Page, ScrollBehavior},
    view::detail_view,
};

use super::{App, HitTarget, ui_helpers};

const WHEEL_ROWS: i32 = 3;

impl App {
    /// Returns true when the app should quit.
    pub(super) fn handle_key(&mut self, key: KeyEvent, page: &mut Page, now: Instant) -> bool {
        self.render_needed = true;

        if page.deliver_key() && self.gallery.on_key(key.code) {
            return false;
        }

        if self.in_detail_modal() {
            self.handle_modal_key(key)
        } else {
            self.handle_normal_key(key, page, now)
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Backspace => {
                self.gallery.close_modal();
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_detail(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detail(1),
            KeyCode::PageUp => self.scroll_detail(-i32::from(self.detail_page_rows)),
            KeyCode::PageDown => self.scroll_detail(i32::from(self.detail_page_rows)),
            KeyCode::Home => self.detail_scroll = 0,
            KeyCode::End => self.detail_scroll = self.detail_max_scroll,
            KeyCode::Char('o') => self.open_link(0),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.open_link(index);
            }
            _ => {}
        }
        false
    }

    fn handle_normal_key(&mut self, key: KeyEvent, page: &mut Page, now: Instant) -> bool {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Up if shift => {
                page.scroll_by(-1);
            }
            KeyCode::Down if shift => {
                page.scroll_by(1);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(category) = self
                    .gallery
                    .store()
                    .categories()
                    .get(index)
                    .map(|category| category.id.clone())
                {
                    self.gallery.scroll_to_section(page, category.as_str(), now);
                }
            }
            KeyCode::Home | KeyCode::Char('t') => self.gallery.scroll_to_top(page, now),
            KeyCode::End => page.scroll_to(
                page.max_scroll(),
                ScrollBehavior::Smooth(self.config.smooth_scroll()),
                now,
            ),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.move_focus(-1, page, now)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.move_focus(1, page, now),
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_focus(-i32::from(self.layout.columns), page, now)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_focus(i32::from(self.layout.columns), page, now)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.focused_card {
                    self.detail_scroll = 0;
                    self.gallery.open_project(id, page, now);
                }
            }
            KeyCode::PageUp => {
                page.scroll_by(-i32::from(self.viewport.height.saturating_sub(2)));
            }
            KeyCode::PageDown => {
                page.scroll_by(i32::from(self.viewport.height.saturating_sub(2)));
            }
            _ => {}
        }
        false
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent, page: &mut Page, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self
                    .hit_regions
                    .iter()
                    .rev()
                    .find(|(rect, _)| ui_helpers::rect_contains(*rect, mouse.column, mouse.row))
                    .map(|(_, target)| target.clone());
                if let Some(target) = target {
                    self.activate(target, page, now);
                    self.render_needed = true;
                }
            }
            MouseEventKind::ScrollUp => self.wheel(-WHEEL_ROWS, page),
            MouseEventKind::ScrollDown => self.wheel(WHEEL_ROWS, page),
            _ => {}
        }
    }

    fn activate(&mut self, target: HitTarget, page: &mut Page, now: Instant) {
        match target {
            HitTarget::Shortcut(category) => {
                self.gallery.scroll_to_section(page, category.as_str(), now);
            }
            HitTarget::Card(id) => {
                self.focused_card = Some(id);
                self.detail_scroll = 0;
                self.gallery.open_project(id, page, now);
            }
            HitTarget::ScrollTop => self.gallery.scroll_to_top(page, now),
            HitTarget::Backdrop | HitTarget::ModalClose | HitTarget::ModalBack => {
                self.gallery.close_modal();
            }
            HitTarget::ModalBody => {}
            HitTarget::ModalLink(index) => self.open_link(index),
        }
    }

    fn wheel(&mut self, delta: i32, page: &mut Page) {
        if self.in_detail_modal() {
            self.scroll_detail(delta);
        } else if page.scroll_by(delta) {
            self.render_needed = true;
        }
    }

    fn scroll_detail(&mut self, delta: i32) {
        let next =
            (i32::from(self.detail_scroll) + delta).clamp(0, i32::from(self.detail_max_scroll));
        self.detail_scroll = next as u16;
        self.render_needed = true;
    }

    fn move_focus(&mut self, step: i32, page: &mut Page, now: Instant) {
        let order = self.layout.card_order();
        if order.is_empty() {
            return;
        }

        let next = match self.focused_card.and_then(|id| order.iter().position(|&c| c == id)) {
            None => 0,
            Some(current) if step == -1 => ui_helpers::wrap_prev_index(current, order.len()),
            Some(current) if step == 1 => ui_helpers::wrap_next_index(current, order.len()),
            Some(current) => (current as i32 + step).clamp(0, order.len() as i32 - 1) as usize,
        };
        let id = order[next];
        self.focused_card = Some(id);

        if let Some(area) = self.layout.card_area(id) {
            let top = page.scroll_y();
            let bottom = top + self.viewport.height;
            let target = if area.y < top {
                Some(area.y.saturating_sub(1))
            } else if area.bottom() > bottom {
                Some(area.bottom().saturating_sub(self.viewport.height) + 1)
            } else {
                None
            };
            if let Some(row) = target {
                page.scroll_to(row, ScrollBehavior::Smooth(self.config.smooth_scroll()), now);
            }
        }
    }

    /// Opens link `index` of the project shown in the modal. Same-page
    /// anchors have nowhere to go in a terminal and are skipped.
    fn open_link(&self, index: usize) {
        let Some(link) = self
            .gallery
            .selected_project()
            .and_then(|project| detail_view(project).links().get(index))
        else {
            return;
        };

        if link.href.starts_with('#') || link.href.is_empty() {
            tracing::debug!(href = %link.href, "skipping in-page link");
            return;
        }

        tracing::info!(href = %link.href, label = %link.label, "opening link");
        if let Err(err) = open::that_detached(&link.href) {
            tracing::warn!(href = %link.href, error = %err, "failed to open link");
        }
    }
}
