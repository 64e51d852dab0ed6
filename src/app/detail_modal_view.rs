use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::{ACCENT, BORDER, PANEL},
    view::{DetailBlock, DetailView, detail_view},
};

use super::{App, HitTarget, ui_helpers, view_style};

const MODAL_MAX_WIDTH: u16 = 88;
const FOOTER_ROWS: u16 = 2;
const CLOSE_LABEL: &str = "[x]";
const BACK_LABEL: &str = "← Back";
const ESC_HINT: &str = "Press ESC to close";

/// Owned lines of the modal body plus the rows that hold links.
#[derive(Default)]
struct BodyLines {
    lines: Vec<Line<'static>>,
    link_rows: Vec<(usize, usize)>,
}

impl BodyLines {
    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn wrapped(&mut self, text: &str, width: usize, style: Style) {
        for line in ui_helpers::wrap_text(text, width) {
            self.lines.push(Line::from(Span::styled(line, style)));
        }
    }
}

fn build_body(view: &DetailView, width: usize) -> BodyLines {
    let mut body = BodyLines::default();

    if !view.tags.is_empty() {
        let mut spans = Vec::new();
        for tag in view.tags {
            spans.push(view_style::tag_span(tag));
            spans.push(Span::raw(" "));
        }
        body.push(Line::from(spans));
        body.blank();
    }

    body.wrapped(view.title, width, view_style::card_title_style(true));
    if let Some(subtitle) = view.subtitle {
        body.wrapped(subtitle, width, view_style::muted_style());
    }

    for block in &view.blocks {
        body.blank();
        body.push(Line::from(Span::styled(
            block.heading(),
            view_style::heading_style(),
        )));
        match block {
            DetailBlock::Text { body: text, .. } => {
                body.wrapped(text, width, Style::default().fg(Color::Gray));
            }
            DetailBlock::List { items, .. } => {
                for item in items.iter() {
                    let mut lines =
                        ui_helpers::wrap_text(item, width.saturating_sub(2)).into_iter();
                    if let Some(first) = lines.next() {
                        body.push(Line::from(vec![
                            Span::styled("• ", Style::default().fg(ACCENT)),
                            Span::styled(first, Style::default().fg(Color::Gray)),
                        ]));
                    }
                    for rest in lines {
                        body.push(Line::from(Span::styled(
                            format!("  {}", rest),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                }
            }
            DetailBlock::Links(links) => {
                for (index, link) in links.iter().enumerate() {
                    body.link_rows.push((body.lines.len(), index));
                    let label = ui_helpers::truncate_label(
                        &link.label,
                        width.saturating_sub(4),
                    );
                    body.push(Line::from(vec![
                        Span::styled(format!("{} ", index + 1), view_style::muted_style()),
                        Span::styled(label, view_style::link_style()),
                        Span::styled(" ↗", view_style::muted_style()),
                    ]));
                }
            }
        }
    }

    body
}

impl App {
    pub(super) fn render_detail_modal(&mut self, f: &mut Frame, area: Rect) {
        let Some(project) = self.gallery.selected_project() else {
            return;
        };

        let width = MODAL_MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
        let height = area.height.saturating_sub(4).max(8);
        let modal = ui_helpers::centered_rect(width, height, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER))
            .style(Style::default().bg(PANEL));
        let inner = block.inner(modal);
        let body_area = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(FOOTER_ROWS),
        );

        let body = build_body(&detail_view(project), body_area.width as usize);

        self.detail_page_rows = body_area.height.max(1);
        self.detail_max_scroll = u16::try_from(body.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_sub(body_area.height);
        self.detail_scroll = self.detail_scroll.min(self.detail_max_scroll);
        let scroll = self.detail_scroll as usize;

        f.render_widget(Clear, modal);
        f.render_widget(block, modal);
        let visible: Vec<Line> = body
            .lines
            .into_iter()
            .skip(scroll)
            .take(body_area.height as usize)
            .collect();
        f.render_widget(Paragraph::new(visible), body_area);

        let close = Rect::new(
            modal.right().saturating_sub(CLOSE_LABEL.len() as u16 + 2),
            modal.y,
            CLOSE_LABEL.len() as u16,
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(ACCENT))),
            close,
        );

        let footer_y = inner.bottom().saturating_sub(1);
        let separator = Rect::new(inner.x, footer_y.saturating_sub(1), inner.width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                "─".repeat(inner.width as usize),
                Style::default().fg(BORDER),
            )),
            separator,
        );
        let back = Rect::new(
            inner.x + 1,
            footer_y,
            (BACK_LABEL.width() as u16).min(inner.width),
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(BACK_LABEL, Style::default().fg(Color::Gray))),
            back,
        );
        f.render_widget(
            Paragraph::new(Span::styled(ESC_HINT, view_style::muted_style()))
                .alignment(Alignment::Right),
            Rect::new(inner.x, footer_y, inner.width.saturating_sub(1), 1),
        );

        self.hit_regions.push((area, HitTarget::Backdrop));
        self.hit_regions.push((modal, HitTarget::ModalBody));
        for (row, index) in body.link_rows {
            if row < scroll || row >= scroll + body_area.height as usize {
                continue;
            }
            let rect = Rect::new(
                body_area.x,
                body_area.y + (row - scroll) as u16,
                body_area.width,
                1,
            );
            self.hit_regions.push((rect, HitTarget::ModalLink(index)));
        }
        self.hit_regions.push((back, HitTarget::ModalBack));
        self.hit_regions.push((close, HitTarget::ModalClose));
    }
}
