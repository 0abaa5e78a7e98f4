//! Nordic Frost color theme definitions.
//!
//! The Nord palette with semantic assignments for the playfield, the HUD and
//! the overlays.

use ratatui::style::Color;

// === Nord Polar Night (Dark backgrounds) ===

/// Medium polar night shade.
pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
/// Lightest polar night shade.
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb(76, 86, 106);

// === Nord Snow Storm (Light text) ===

/// Primary snow storm shade.
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);
/// Brightest snow storm shade.
pub const NORD_SNOW_STORM_3: Color = Color::Rgb(236, 239, 244);

// === Nord Frost (Accent blues/cyans) ===

/// Frost accent 1 - teal.
pub const NORD_FROST_1: Color = Color::Rgb(143, 188, 187);
/// Frost accent 2 - cyan (primary accent).
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);

// === Nord Aurora (Status colors) ===

pub const NORD_RED: Color = Color::Rgb(191, 97, 106);
pub const NORD_ORANGE: Color = Color::Rgb(208, 135, 112);
pub const NORD_YELLOW: Color = Color::Rgb(235, 203, 139);
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);
pub const NORD_PURPLE: Color = Color::Rgb(180, 142, 173);

// === Semantic Color Aliases ===

/// Playfield background.
pub const BG_COLOR: Color = Color::Rgb(20, 20, 25);
pub const TEXT_PRIMARY: Color = NORD_SNOW_STORM_1;
pub const TEXT_SECONDARY: Color = NORD_POLAR_NIGHT_4;
pub const ACCENT_PRIMARY: Color = NORD_FROST_2;
pub const WARNING: Color = NORD_YELLOW;
pub const ERROR: Color = NORD_RED;

// === Entity Colors ===

pub const SHIP: Color = NORD_SNOW_STORM_3;
/// Ship outline while rapid fire is active.
pub const SHIP_RAPID_FIRE: Color = NORD_GREEN;
pub const FLAME: Color = NORD_ORANGE;
pub const BULLET: Color = NORD_SNOW_STORM_3;
pub const ASTEROID: Color = NORD_SNOW_STORM_1;
pub const STAR: Color = NORD_POLAR_NIGHT_4;
pub const PARTICLE: Color = NORD_YELLOW;
pub const MISSILE: Color = NORD_RED;
pub const UFO: Color = NORD_FROST_1;
pub const TRACTOR_BEAM: Color = NORD_GREEN;
pub const BLACK_HOLE: Color = NORD_PURPLE;

// === UI Element Colors ===

/// Default border color.
pub const BORDER_DEFAULT: Color = NORD_POLAR_NIGHT_3;
/// Focused element border color.
pub const BORDER_FOCUSED: Color = NORD_FROST_2;
/// Selected row background color.
pub const ROW_SELECTED_BG: Color = Color::Rgb(40, 40, 40);
/// Selected row text color.
pub const ROW_SELECTED_FG: Color = NORD_FROST_2;

/// Scale a color toward black. `alpha` is 0..=255.
#[must_use]
pub fn fade(color: Color, alpha: u8) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale =
                |c: u8| u8::try_from(u16::from(c) * u16::from(alpha) / 255).unwrap_or(u8::MAX);
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}
