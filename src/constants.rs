use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(30, 102, 255);
pub const ACCENT_SOFT: Color = Color::Rgb(124, 92, 255);
pub const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238);
pub const BACKGROUND: Color = Color::Rgb(10, 13, 18);
pub const PANEL: Color = Color::Rgb(12, 17, 27);
pub const MUTED: Color = Color::Rgb(161, 161, 170);
pub const BORDER: Color = Color::Rgb(63, 63, 70);

pub const TIME_SETTINGS: TimeSettings = TimeSettings {
    tick_ms: 16,
    target_fps: 30,
};

pub const GALLERY_SETTINGS: GallerySettings = GallerySettings {
    open_delay_ms: 140,
    scroll_top_threshold_px: 400,
    row_height_px: 16,
    tag_display_limit: 3,
    smooth_scroll_ms: 240,
};

pub const GRID_LAYOUT: GridLayout = GridLayout {
    card_height: 7,
    card_gap: 1,
    section_heading_height: 3,
    section_gap: 2,
    two_column_min_width: 64,
    three_column_min_width: 110,
    max_content_width: 140,
};

pub struct TimeSettings {
    pub tick_ms: u64,
    pub target_fps: u64,
}

pub struct GallerySettings {
    pub open_delay_ms: u64,
    pub scroll_top_threshold_px: u32,
    pub row_height_px: u32,
    pub tag_display_limit: usize,
    pub smooth_scroll_ms: u64,
}

pub struct GridLayout {
    pub card_height: u16,
    pub card_gap: u16,
    pub section_heading_height: u16,
    pub section_gap: u16,
    pub two_column_min_width: u16,
    pub three_column_min_width: u16,
    pub max_content_width: u16,
}
