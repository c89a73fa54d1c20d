use ratatui::style::Color;

/// Calorie count color: light foods green, heavy foods red
pub fn color_for_calories(calories: u32) -> Color {
    match calories {
        0..=99 => Color::Green,
        100..=199 => Color::LightGreen,
        200..=299 => Color::Yellow,
        _ => Color::LightRed,
    }
}

pub const HEADER_BG: Color = Color::Rgb(0, 95, 135);
pub const SELECTED_BG: Color = Color::Rgb(60, 60, 80);
pub const ALT_ROW_BG: Color = Color::Rgb(25, 25, 35);
pub const STATUS_BG: Color = Color::Rgb(40, 40, 50);
