use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn wrap_prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

pub fn wrap_next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// Visible part of a page-space rect, translated to screen space.
pub fn page_to_screen(rect: Rect, scroll: u16, viewport: Rect) -> Option<Rect> {
    let top = rect.y.max(scroll);
    let bottom = rect.bottom().min(scroll.saturating_add(viewport.height));
    if top >= bottom {
        return None;
    }

    Some(Rect::new(
        rect.x,
        viewport.y + (top - scroll),
        rect.width,
        bottom - top,
    ))
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Shortens `value` to at most `max_width` terminal columns, ending in
/// `...` when anything was cut.
pub fn truncate_label(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let budget = if max_width <= 3 { max_width } else { max_width - 3 };
    let mut used = 0;
    let mut prefix = String::new();
    for ch in value.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        prefix.push(ch);
    }

    if max_width <= 3 {
        prefix
    } else {
        format!("{}...", prefix)
    }
}

/// Word wrap measured in terminal columns. Newlines in `text` start a new
/// line; words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    textwrap::wrap(
        text,
        textwrap::Options::new(width).wrap_algorithm(textwrap::WrapAlgorithm::FirstFit),
    )
    .into_iter()
    .map(|line| line.into_owned())
    .collect()
}
