use ratatui::{
    prelude::Span,
    style::{Color, Modifier, Style},
};

use crate::{
    constants::{ACCENT, BORDER, MUTED},
    content::{Category, Icon},
};

const TAG_BG: Color = Color::Rgb(39, 39, 46);

pub(super) fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Workflow => "⇄",
        Icon::Brain => "◆",
        Icon::MessageSquare => "✉",
        Icon::Globe => "◎",
    }
}

pub(super) fn shortcut_label(category: &Category) -> String {
    format!("[ {} {} ]", icon_glyph(category.icon), category.display_name)
}

pub(super) fn card_border_style(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BORDER)
    }
}

pub(super) fn card_title_style(active: bool) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    if active {
        style.fg(ACCENT)
    } else {
        style.fg(Color::White)
    }
}

pub(super) fn tag_span(tag: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", tag),
        Style::default().fg(Color::Gray).bg(TAG_BG),
    )
}

pub(super) fn overflow_span(label: String) -> Span<'static> {
    Span::styled(format!(" {} ", label), Style::default().fg(MUTED).bg(TAG_BG))
}

pub(super) fn heading_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub(super) fn link_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::UNDERLINED)
}
