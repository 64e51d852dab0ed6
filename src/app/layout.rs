use std::collections::HashMap;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::GRID_LAYOUT,
    content::{CategoryId, ContentStore, ProjectId},
};

use super::view_style;

pub(super) const HERO_HEIGHT: u16 = 8;
const SHORTCUT_GAP: u16 = 2;
const SHORTCUT_ROW_GAP: u16 = 1;
const NAV_BOTTOM_GAP: u16 = 2;

#[derive(Clone, Debug)]
pub(super) struct ShortcutSlot {
    pub category: CategoryId,
    pub area: Rect,
}

#[derive(Clone, Debug)]
pub(super) struct CardSlot {
    pub id: ProjectId,
    pub area: Rect,
}

#[derive(Clone, Debug)]
pub(super) struct SectionSlot {
    pub category: CategoryId,
    pub heading: Rect,
    pub cards: Vec<CardSlot>,
}

/// Where everything sits on the full-height page, in page rows.
#[derive(Clone, Debug, Default)]
pub(super) struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub columns: u16,
    pub content: Rect,
    pub shortcuts: Vec<ShortcutSlot>,
    pub sections: Vec<SectionSlot>,
}

pub(super) fn columns_for(content_width: u16) -> u16 {
    if content_width >= GRID_LAYOUT.three_column_min_width {
        3
    } else if content_width >= GRID_LAYOUT.two_column_min_width {
        2
    } else {
        1
    }
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

impl PageLayout {
    pub fn compute(store: &ContentStore, width: u16) -> Self {
        let content_width = width
            .saturating_sub(4)
            .min(GRID_LAYOUT.max_content_width)
            .max(1);
        let left = width.saturating_sub(content_width) / 2;
        let right = left + content_width;

        let mut y = HERO_HEIGHT;
        let mut x = left;
        let mut shortcuts = Vec::with_capacity(store.categories().len());
        for category in store.categories() {
            let label_width = view_style::shortcut_label(category).width() as u16;
            let slot_width = label_width.min(content_width);
            if x > left && x + slot_width > right {
                x = left;
                y = y.saturating_add(1 + SHORTCUT_ROW_GAP);
            }
            shortcuts.push(ShortcutSlot {
                category: category.id.clone(),
                area: Rect::new(x, y, slot_width, 1),
            });
            x += slot_width + SHORTCUT_GAP;
        }
        y = y.saturating_add(1 + NAV_BOTTOM_GAP);

        let columns = columns_for(content_width);
        let gap = GRID_LAYOUT.card_gap;
        let card_width = (content_width.saturating_sub(gap * (columns - 1)) / columns).max(1);
        let card_height = GRID_LAYOUT.card_height;

        let mut sections = Vec::new();
        for section in store.sections() {
            let heading = Rect::new(left, y, content_width, GRID_LAYOUT.section_heading_height);
            y = y.saturating_add(heading.height);

            let cards = section
                .projects
                .iter()
                .enumerate()
                .map(|(index, project)| {
                    let column = (index % usize::from(columns)) as u16;
                    let row = saturating_u16(index / usize::from(columns));
                    CardSlot {
                        id: project.id,
                        area: Rect::new(
                            left + column * (card_width + gap),
                            y.saturating_add(row.saturating_mul(card_height + gap)),
                            card_width,
                            card_height,
                        ),
                    }
                })
                .collect::<Vec<_>>();

            let rows = saturating_u16(cards.len().div_ceil(usize::from(columns)));
            y = y
                .saturating_add(rows.saturating_mul(card_height))
                .saturating_add(rows.saturating_sub(1).saturating_mul(gap))
                .saturating_add(GRID_LAYOUT.section_gap);

            sections.push(SectionSlot {
                category: section.category.id.clone(),
                heading,
                cards,
            });
        }

        Self {
            width,
            height: y,
            columns,
            content: Rect::new(left, 0, content_width, y),
            shortcuts,
            sections,
        }
    }

    /// Section id -> first row of its heading.
    pub fn anchors(&self) -> HashMap<String, u16> {
        self.sections
            .iter()
            .map(|section| (section.category.0.clone(), section.heading.y))
            .collect()
    }

    pub fn card_order(&self) -> Vec<ProjectId> {
        self.sections
            .iter()
            .flat_map(|section| section.cards.iter().map(|card| card.id))
            .collect()
    }

    pub fn card_area(&self, id: ProjectId) -> Option<Rect> {
        self.sections
            .iter()
            .flat_map(|section| section.cards.iter())
            .find(|card| card.id == id)
            .map(|card| card.area)
    }
}
