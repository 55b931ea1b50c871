// File: crates/chart-scene/src/theme.rs
// Summary: Light/Dark theme presets; chrome colors for the rendering surface plus the series palette.

use crate::stroke::{palette_slot, PaletteEntry};
use crate::types::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub crosshair: Color,
    /// Base stroke per series slot.
    pub palette: Vec<PaletteEntry>,
}

const fn entry(r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry::new(Color::from_rgb(r, g, b), 2.0)
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            tick: Color::from_argb(255, 150, 150, 160),
            crosshair: Color::from_argb(255, 255, 230, 70),
            palette: vec![
                entry(64, 160, 255),
                entry(40, 200, 120),
                entry(255, 170, 60),
                entry(220, 80, 80),
                entry(180, 120, 255),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            tick: Color::from_argb(255, 100, 100, 110),
            crosshair: Color::from_argb(255, 30, 120, 240),
            palette: vec![
                entry(32, 120, 200),
                entry(20, 160, 90),
                entry(230, 130, 20),
                entry(200, 60, 60),
                entry(130, 80, 200),
            ],
        }
    }

    pub fn dark_gold() -> Self {
        Self {
            name: "dark-gold",
            background: Color::from_argb(255, 24, 22, 18),
            grid: Color::from_argb(255, 48, 44, 36),
            axis_line: Color::from_argb(255, 190, 175, 140),
            axis_label: Color::from_argb(255, 240, 230, 205),
            tick: Color::from_argb(255, 160, 148, 120),
            crosshair: Color::from_argb(255, 255, 215, 0),
            palette: vec![
                entry(0xf2, 0xc1, 0x4e),
                entry(0xe0, 0x8e, 0x3c),
                entry(0xb8, 0xa0, 0x6a),
                entry(0x9c, 0xc2, 0x8f),
                entry(0xd9, 0x6c, 0x5a),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            crosshair: Color::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
            palette: solarized_accents(),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            crosshair: Color::from_argb(255, 0xcb, 0x4b, 0x16),  // orange
            palette: solarized_accents(),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            crosshair: Color::from_argb(255, 0xff, 0xff, 0x00),
            palette: vec![
                PaletteEntry::new(Color::from_rgb(0x00, 0xff, 0xff), 3.0),
                PaletteEntry::new(Color::from_rgb(0x00, 0xff, 0x00), 3.0),
                PaletteEntry::new(Color::from_rgb(0xff, 0xff, 0x00), 3.0),
                PaletteEntry::new(Color::from_rgb(0xff, 0x00, 0xff), 3.0),
            ],
        }
    }

    /// Palette entry for a series, by explicit slot or by name.
    /// An empty palette falls back to `PaletteEntry::default()`.
    pub fn palette_entry(&self, series_name: &str, slot: Option<usize>) -> PaletteEntry {
        let i = palette_slot(series_name, slot, self.palette.len());
        self.palette.get(i).copied().unwrap_or_default()
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

fn solarized_accents() -> Vec<PaletteEntry> {
    vec![
        entry(0x26, 0x8b, 0xd2), // blue
        entry(0x2a, 0xa1, 0x98), // cyan
        entry(0xb5, 0x89, 0x00), // yellow
        entry(0xdc, 0x32, 0x2f), // red
        entry(0x6c, 0x71, 0xc4), // violet
    ]
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::dark_gold(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::dark)
}
