use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Default text color
    pub fg: Color,
    /// Board border color
    pub border: Color,
    /// Tile sitting at its solved position
    pub correct: Color,
    /// Tile away from its solved position
    pub misplaced: Color,
    /// The empty slot marker
    pub empty: Color,
    /// Prompt/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Out-of-bounds notice color
    pub error: Color,
    /// Win banner color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 130, g: 140, b: 170 },
            correct: Color::Rgb { r: 90, g: 255, b: 130 },
            misplaced: Color::Rgb { r: 255, g: 90, b: 90 },
            empty: Color::Rgb { r: 255, g: 90, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 60, g: 60, b: 80 },
            correct: Color::Rgb { r: 40, g: 160, b: 60 },
            misplaced: Color::Rgb { r: 220, g: 50, b: 50 },
            empty: Color::Rgb { r: 220, g: 50, b: 50 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            fg: Color::White,
            border: Color::White,
            correct: Color::Green,
            misplaced: Color::Red,
            empty: Color::Red,
            info: Color::Grey,
            key: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }
}
