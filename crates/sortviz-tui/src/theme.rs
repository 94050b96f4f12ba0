use ratatui::style::Color;
use sortviz_core::algorithms::Rating;
use sortviz_core::BarState;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Palette colors
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,

    // Bar colors
    pub bar_idle: Color,
    pub bar_selected: Color,
    pub bar_comparing: Color,
    pub bar_sorted: Color,

    // Semantic colors
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            red: Color::Rgb(0xea, 0x69, 0x62),
            orange: Color::Rgb(0xe7, 0x8a, 0x4e),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            bar_idle: Color::Rgb(0x7d, 0xae, 0xa3),
            bar_selected: Color::Rgb(0xea, 0x69, 0x62),
            bar_comparing: Color::Rgb(0xd8, 0xa6, 0x57),
            bar_sorted: Color::Rgb(0xa9, 0xb6, 0x65),
            error: Color::Rgb(0xea, 0x69, 0x62),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

impl Theme {
    /// Color of one bar; a finished array is drawn entirely in the sorted color
    pub fn bar_color(&self, state: BarState, array_sorted: bool) -> Color {
        if array_sorted {
            return self.bar_sorted;
        }
        match state {
            BarState::Idle => self.bar_idle,
            BarState::Selected => self.bar_selected,
            BarState::Comparing => self.bar_comparing,
            BarState::Sorted => self.bar_sorted,
        }
    }

    pub fn rating_color(&self, rating: Rating) -> Color {
        match rating {
            Rating::Good => self.green,
            Rating::Fair => self.yellow,
            Rating::Poor => self.red,
        }
    }
}
