//! Colour palettes for terminal output

use owo_colors::Style;

/// Style set applied to reports and the facing diagram
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Section headings and the armour type line
    pub heading: Style,
    /// Facing names and table labels
    pub label: Style,
    /// Point and weight figures
    pub value: Style,
    /// Unallocated-points warnings
    pub warning: Style,
    /// Diagram frame characters
    pub hull: Style,
}

impl Theme {
    /// High-contrast palette for dark terminals
    pub fn dark() -> Self {
        Self {
            heading: Style::new().bold().cyan(),
            label: Style::new().bold(),
            value: Style::new().white(),
            warning: Style::new().yellow().bold(),
            hull: Style::new().bright_black(),
        }
    }

    /// Restrained palette for light terminals
    pub fn light() -> Self {
        Self {
            heading: Style::new().bold().blue(),
            label: Style::new().bold(),
            value: Style::new(),
            warning: Style::new().red(),
            hull: Style::new(),
        }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
