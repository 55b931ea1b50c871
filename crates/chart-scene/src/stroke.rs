// File: crates/chart-scene/src/stroke.rs
// Summary: Resolve a series style hint plus palette entry into a concrete render style.
// Notes:
// - Dashed styles are derived from the solid style of the same palette entry, so a
//   dashed series keeps its color and thickness and differs only by pattern.

use serde::{Deserialize, Serialize};

use crate::series::StyleHint;
use crate::types::Color;

/// Pattern scale used when a dashed series does not specify one.
pub const DEFAULT_PATTERN_SCALE: f32 = 1.0;

/// On/off lengths of the dash pattern at thickness 1 and scale 1.
pub const BASE_DASH: [f32; 2] = [4.0, 4.0];

/// One color + thickness slot of a theme palette.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub fill: Color,
    pub thickness: f32,
}

impl PaletteEntry {
    pub const fn new(fill: Color, thickness: f32) -> Self {
        Self { fill, thickness }
    }
}

impl Default for PaletteEntry {
    fn default() -> Self {
        Self::new(Color::from_argb(255, 64, 160, 255), 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokePattern {
    Solid,
    Dashed,
}

/// Backend-independent stroke description. Contract: `pattern_scale > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub fill: Color,
    pub thickness: f32,
    pub pattern: StrokePattern,
    pub pattern_scale: f32,
}

impl RenderStyle {
    pub fn solid(entry: &PaletteEntry) -> Self {
        Self {
            fill: entry.fill,
            thickness: entry.thickness,
            pattern: StrokePattern::Solid,
            pattern_scale: DEFAULT_PATTERN_SCALE,
        }
    }

    /// Same fill and thickness, dashed at `scale`.
    pub fn dashed(&self, scale: f32) -> Self {
        Self { pattern: StrokePattern::Dashed, pattern_scale: sanitize_scale(scale), ..*self }
    }

    /// Dash on/off lengths in stroke units; `None` for solid strokes.
    pub fn dash_intervals(&self) -> Option<[f32; 2]> {
        match self.pattern {
            StrokePattern::Solid => None,
            StrokePattern::Dashed => Some(BASE_DASH.map(|d| d * self.thickness * self.pattern_scale)),
        }
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 { scale } else { DEFAULT_PATTERN_SCALE }
}

/// Concrete style for `hint` against one palette entry. Pure and deterministic.
pub fn resolve(hint: StyleHint, entry: &PaletteEntry, pattern_scale: Option<f32>) -> RenderStyle {
    let solid = RenderStyle::solid(entry);
    match hint {
        StyleHint::Default => solid,
        StyleHint::Dashed => solid.dashed(pattern_scale.unwrap_or(DEFAULT_PATTERN_SCALE)),
    }
}

/// Palette index for a series: the explicit slot when given, otherwise a stable
/// FNV-1a hash of its name. Never depends on insertion order.
pub fn palette_slot(name: &str, explicit: Option<usize>, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let raw = explicit.unwrap_or_else(|| {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in name.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        (hash % palette_len as u64) as usize
    });
    raw % palette_len
}
