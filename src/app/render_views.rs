use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::{ACCENT, ACCENT_CYAN, ACCENT_SOFT, BACKGROUND, BORDER, MUTED},
    content::Project,
    page::Page,
    view::card_view,
};

use super::{App, HitTarget, layout::HERO_HEIGHT, ui_helpers, view_style};

const HERO_TAGLINE: &str = "See the projects that have helped a number of businesses and people \
                            simplify their work processes and get better results.";
const TOP_BUTTON: &str = "[ ↑ Top ]";

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame, page: &mut Page) {
        let area = f.size();
        self.relayout(page, area);

        let scroll = page.scroll_y();
        f.buffer_mut().set_style(area, Style::default().bg(BACKGROUND));
        self.render_page(f.buffer_mut(), area, scroll);

        let modal_open = self.in_detail_modal();
        let mut regions = Vec::new();
        if !modal_open {
            for shortcut in &self.layout.shortcuts {
                if let Some(rect) = ui_helpers::page_to_screen(shortcut.area, scroll, area) {
                    regions.push((rect, HitTarget::Shortcut(shortcut.category.clone())));
                }
            }
            for card in self.layout.sections.iter().flat_map(|s| s.cards.iter()) {
                if let Some(rect) = ui_helpers::page_to_screen(card.area, scroll, area) {
                    regions.push((rect, HitTarget::Card(card.id)));
                }
            }
        }

        if self.gallery.show_scroll_top() {
            let width = TOP_BUTTON.width() as u16;
            let rect = Rect::new(
                area.right().saturating_sub(width + 2),
                area.bottom().saturating_sub(2),
                width.min(area.width),
                1,
            );
            f.render_widget(
                Paragraph::new(Span::styled(
                    TOP_BUTTON,
                    Style::default()
                        .fg(Color::White)
                        .bg(BORDER)
                        .add_modifier(Modifier::BOLD),
                )),
                rect,
            );
            if !modal_open {
                regions.push((rect, HitTarget::ScrollTop));
            }
        }

        self.hit_regions = regions;

        if modal_open {
            self.render_detail_modal(f, area);
        }
    }

    /// Paints the part of the page that sits in `viewport` at `scroll`.
    /// Anything wholly outside the viewport is skipped.
    fn render_page(&self, target: &mut Buffer, viewport: Rect, scroll: u16) {
        let layout = &self.layout;
        let hero = Rect::new(layout.content.x, 0, layout.content.width, HERO_HEIGHT);
        paint_clipped(target, viewport, scroll, hero, |area, buf| {
            self.render_hero(area, buf)
        });

        let store = self.gallery.store();
        for (shortcut, category) in layout.shortcuts.iter().zip(store.categories()) {
            paint_clipped(target, viewport, scroll, shortcut.area, |area, buf| {
                Paragraph::new(Span::styled(
                    view_style::shortcut_label(category),
                    Style::default().fg(Color::Gray),
                ))
                .render(area, buf);
            });
        }

        for (slot, section) in layout.sections.iter().zip(store.sections()) {
            paint_clipped(target, viewport, scroll, slot.heading, |area, buf| {
                let glyph = view_style::icon_glyph(section.category.icon);
                Paragraph::new(Line::from(vec![
                    Span::styled(format!(" {} ", glyph), Style::default().fg(ACCENT)),
                    Span::styled(
                        format!(" {}", section.category.display_name),
                        view_style::heading_style(),
                    ),
                ]))
                .render(area, buf);
            });

            for (card_slot, project) in slot.cards.iter().zip(section.projects.iter()) {
                paint_clipped(target, viewport, scroll, card_slot.area, |area, buf| {
                    self.render_card(project, area, buf)
                });
            }
        }
    }

    fn render_card(&self, project: &Project, area: Rect, buf: &mut Buffer) {
        let card = card_view(project, self.config.tag_display_limit);
        let active = self.gallery.is_card_active(card.id) || self.focused_card == Some(card.id);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(view_style::card_border_style(active));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_width = inner.width.saturating_sub(2) as usize;
        let mut lines = vec![Line::from(Span::styled(
            ui_helpers::truncate_label(card.title, text_width),
            view_style::card_title_style(active),
        ))];
        let mut subtitle = ui_helpers::wrap_text(card.subtitle, text_width);
        if subtitle.len() > 2 {
            subtitle.truncate(2);
            subtitle[1] = ui_helpers::truncate_label(&format!("{}...", subtitle[1]), text_width);
        }
        lines.extend(
            subtitle
                .into_iter()
                .map(|line| Line::from(Span::styled(line, view_style::muted_style()))),
        );
        while lines.len() < 4 {
            lines.push(Line::default());
        }

        let mut tags: Vec<Span> = Vec::new();
        for tag in card.tags {
            tags.push(view_style::tag_span(tag));
            tags.push(Span::raw(" "));
        }
        if let Some(label) = card.overflow_label() {
            tags.push(view_style::overflow_span(label));
        }
        lines.push(Line::from(tags));

        let text_area = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );
        Paragraph::new(lines).render(text_area, buf);
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let line_area = |y: u16, height: u16| Rect::new(area.x, area.y + y, area.width, height);

        Paragraph::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(ACCENT_SOFT)),
            Span::styled("Portfolio", view_style::muted_style()),
        ]))
        .render(line_area(1, 1), buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Completed ", view_style::heading_style()),
            Span::styled(
                "projects",
                Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(line_area(3, 1), buf);

        let tagline: Vec<Line> = ui_helpers::wrap_text(HERO_TAGLINE, area.width.min(80) as usize)
            .into_iter()
            .take((HERO_HEIGHT - 6) as usize)
            .map(|line| Line::from(Span::styled(line, Style::default().fg(MUTED))))
            .collect();
        Paragraph::new(tagline).render(line_area(5, HERO_HEIGHT - 6), buf);
    }
}

/// Draws one page-space item into a scratch buffer of its own size, then
/// copies the rows that fall inside `viewport` at `scroll` into `target`.
fn paint_clipped(
    target: &mut Buffer,
    viewport: Rect,
    scroll: u16,
    item: Rect,
    draw: impl FnOnce(Rect, &mut Buffer),
) {
    let Some(screen) = ui_helpers::page_to_screen(item, scroll, viewport) else {
        return;
    };

    let local = Rect::new(0, 0, item.width, item.height);
    let mut scratch = Buffer::empty(local);
    scratch.set_style(local, Style::default().bg(BACKGROUND));
    draw(local, &mut scratch);

    let first_row = scroll.saturating_sub(item.y);
    for row in 0..screen.height {
        let y = screen.y + row;
        let source_y = first_row + row;
        if y >= target.area.bottom() || source_y >= scratch.area.height {
            break;
        }
        for col in 0..scratch.area.width {
            let x = viewport.x + screen.x + col;
            if x >= target.area.right() {
                break;
            }
            *target.get_mut(x, y) = scratch.get(col, source_y).clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_clipped_copies_only_visible_rows() {
        let viewport = Rect::new(0, 0, 10, 4);
        let mut target = Buffer::empty(viewport);
        let item = Rect::new(2, 6, 3, 3);

        paint_clipped(&mut target, viewport, 7, item, |area, buf| {
            for y in area.top()..area.bottom() {
                buf.get_mut(area.x, y).set_symbol(&y.to_string());
            }
        });

        // Item rows 1 and 2 land on screen rows 0 and 1.
        assert_eq!(target.get(2, 0).symbol(), "1");
        assert_eq!(target.get(2, 1).symbol(), "2");
        assert_eq!(target.get(2, 2).symbol(), " ");
    }

    #[test]
    fn test_paint_clipped_skips_items_off_screen() {
        let viewport = Rect::new(0, 0, 10, 4);
        let mut target = Buffer::empty(viewport);
        let mut drawn = false;

        paint_clipped(&mut target, viewport, 0, Rect::new(0, 20, 5, 5), |_, _| {
            drawn = true;
        });
        assert!(!drawn);
    }
}
