use crate::foundation::color::Rgba8;

/// Colors for the moving targets in one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DotColors {
    /// Top of the shaded disc.
    pub primary: Rgba8,
    /// Bottom of the shaded disc.
    pub secondary: Rgba8,
    /// Outline; transparent draws none.
    #[serde(default = "transparent")]
    pub outline: Rgba8,
}

fn transparent() -> Rgba8 {
    Rgba8::TRANSPARENT
}

/// Target colors with separate light and dark variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Colors on the light theme.
    pub light: DotColors,
    /// Colors on the dark theme.
    pub dark: DotColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: DotColors {
                primary: Rgba8::rgb(0xd4, 0x20, 0x20),
                secondary: Rgba8::rgb(0xa3, 0x19, 0x19),
                outline: Rgba8::TRANSPARENT,
            },
            dark: DotColors {
                primary: Rgba8::rgb(0x00, 0xd6, 0x10),
                secondary: Rgba8::rgb(0x01, 0xa1, 0x08),
                outline: Rgba8::TRANSPARENT,
            },
        }
    }
}

impl Palette {
    /// Palette derived from a single skin color per theme; the shading color
    /// is the primary darkened by 22% (dark) or 20% (light).
    pub fn from_skin(dark: Rgba8, light: Rgba8) -> Self {
        Self {
            dark: DotColors {
                primary: dark,
                secondary: dark.darken(0.22),
                outline: Rgba8::TRANSPARENT,
            },
            light: DotColors {
                primary: light,
                secondary: light.darken(0.2),
                outline: Rgba8::TRANSPARENT,
            },
        }
    }

    /// Colors for `mode`.
    pub fn for_mode(&self, mode: ThemeMode) -> DotColors {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light background, dark lines.
    Light,
    /// Dark background, light lines.
    Dark,
}

/// Stage background and grid-line colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageTheme {
    /// Background fill.
    pub base: Rgba8,
    /// Grid line color.
    pub line: Rgba8,
}

impl StageTheme {
    /// Theme colors for `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                base: Rgba8::rgb(0xf1, 0xf1, 0xf4),
                line: Rgba8::rgb_alpha(120, 120, 130, 0.85),
            },
            ThemeMode::Dark => Self {
                base: Rgba8::rgb(0x04, 0x07, 0x13),
                line: Rgba8::rgb_alpha(255, 255, 255, 0.55),
            },
        }
    }
}

/// Appearance state read by the active worker every frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dark theme on.
    pub dark_mode: bool,
    /// Draw the guide grid.
    pub show_grid: bool,
    /// Target colors per theme.
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_grid: true,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Theme selected by `dark_mode`.
    pub fn theme_mode(&self) -> ThemeMode {
        if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Background and line colors for the current theme.
    pub fn stage_theme(&self) -> StageTheme {
        StageTheme::for_mode(self.theme_mode())
    }

    /// Target colors for the current theme.
    pub fn dot_colors(&self) -> DotColors {
        self.palette.for_mode(self.theme_mode())
    }

    /// Apply one queued write.
    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::ShowGrid(v) => self.show_grid = v,
            SettingsUpdate::DarkMode(v) => self.dark_mode = v,
            SettingsUpdate::Palette(p) => self.palette = p,
        }
    }
}

/// A queued appearance write, applied between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingsUpdate {
    /// Show or hide the grid.
    ShowGrid(bool),
    /// Switch theme.
    DarkMode(bool),
    /// Replace the palette.
    Palette(Palette),
}

#[cfg(test)]
#[path = "../../tests/unit/session/settings.rs"]
mod tests;
