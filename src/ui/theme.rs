use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LIST_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const SELECTED_BG: Color = Color::Rgb(0x1e, 0x3a, 0x5f);
pub const CURSOR_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LOADING_TEXT: Color = Color::Rgb(0xfb, 0xbf, 0x24);
