//! Color palettes for the TUI

use ratatui::style::Color;

use crate::config::TuiTheme;

/// A complete color theme for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub base: Color,     // Main background
    pub surface0: Color, // Cursor row, status bars
    pub surface1: Color, // Borders, unchecked boxes
    pub text: Color,
    pub subtext0: Color, // Hints, empty cells
    pub blue: Color,     // Checked rows, focus
    pub green: Color,    // Success
    pub yellow: Color,   // Loading, key hints
    pub red: Color,      // Errors, alerts
    pub mauve: Color,    // Titles
}

impl Theme {
    pub fn for_variant(variant: TuiTheme) -> Theme {
        match variant {
            TuiTheme::CatppuccinMocha => CATPPUCCIN_MOCHA,
            TuiTheme::CatppuccinLatte => CATPPUCCIN_LATTE,
            TuiTheme::Dracula => DRACULA,
            TuiTheme::Nord => NORD,
        }
    }
}

pub const CATPPUCCIN_MOCHA: Theme = Theme {
    name: "Catppuccin Mocha",
    base: Color::Rgb(30, 30, 46),
    surface0: Color::Rgb(49, 50, 68),
    surface1: Color::Rgb(69, 71, 90),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    blue: Color::Rgb(137, 180, 250),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
};

pub const CATPPUCCIN_LATTE: Theme = Theme {
    name: "Catppuccin Latte",
    base: Color::Rgb(239, 241, 245),
    surface0: Color::Rgb(220, 224, 232),
    surface1: Color::Rgb(188, 192, 204),
    text: Color::Rgb(76, 79, 105),
    subtext0: Color::Rgb(108, 111, 133),
    blue: Color::Rgb(30, 102, 245),
    green: Color::Rgb(64, 160, 43),
    yellow: Color::Rgb(223, 142, 29),
    red: Color::Rgb(210, 15, 57),
    mauve: Color::Rgb(136, 57, 239),
};

pub const DRACULA: Theme = Theme {
    name: "Dracula",
    base: Color::Rgb(40, 42, 54),
    surface0: Color::Rgb(68, 71, 90),
    surface1: Color::Rgb(98, 114, 164),
    text: Color::Rgb(248, 248, 242),
    subtext0: Color::Rgb(189, 147, 249),
    blue: Color::Rgb(139, 233, 253),
    green: Color::Rgb(80, 250, 123),
    yellow: Color::Rgb(241, 250, 140),
    red: Color::Rgb(255, 85, 85),
    mauve: Color::Rgb(189, 147, 249),
};

pub const NORD: Theme = Theme {
    name: "Nord",
    base: Color::Rgb(46, 52, 64),
    surface0: Color::Rgb(59, 66, 82),
    surface1: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(216, 222, 233),
    blue: Color::Rgb(136, 192, 208),
    green: Color::Rgb(163, 190, 140),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
    mauve: Color::Rgb(180, 142, 173),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_a_palette() {
        let names: Vec<&str> = TuiTheme::all()
            .iter()
            .map(|v| Theme::for_variant(*v).name)
            .collect();
        assert_eq!(
            names,
            vec!["Catppuccin Mocha", "Catppuccin Latte", "Dracula", "Nord"]
        );
    }
}
