pub mod card;

mod font_cache;

use derivative::Derivative;
use derive_setters::Setters;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("image: {0}")]
    Image(String),
    #[error("font: {0}")]
    Font(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a text field starts (baseline origin) and how big it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    pub x: i32,
    pub baseline_y: i32,
    /// Glyph size in pixels.
    pub px: f32,
}

/// Fixed placement table for the card. Coordinates are in template pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Top-left corner where the scaled icon is copied onto the canvas.
    pub icon_offset: (i64, i64),
    pub name: TextAnchor,
    pub amount: TextAnchor,
    pub message: TextAnchor,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            icon_offset: (45, 30),
            name: TextAnchor {
                x: 190,
                baseline_y: 65,
                px: 34.0,
            },
            amount: TextAnchor {
                x: 190,
                baseline_y: 115,
                px: 38.0,
            },
            message: TextAnchor {
                x: 50,
                baseline_y: 205,
                px: 34.0,
            },
        }
    }
}

/// Style knobs for the card pipeline.
///
/// The defaults reproduce the currency/tiered variant; the setters reach the
/// plain one (no symbol, fixed black text, no white backing behind the icon).
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct CardStyle {
    /// Currency symbol drawn before the grouped amount.
    #[derivative(Default(value = "Some('¥')"))]
    pub currency_symbol: Option<char>,
    /// Pick the text color from the amount tier instead of always black.
    #[derivative(Default(value = "true"))]
    pub tiered_font_color: bool,
    /// Flatten the scaled icon onto opaque white before compositing, so
    /// translucent edges do not fringe dark.
    #[derivative(Default(value = "true"))]
    pub white_icon_backing: bool,
    pub layout: Layout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_original_variant() {
        let style = CardStyle::default();
        assert_eq!(style.currency_symbol, Some('¥'));
        assert!(style.tiered_font_color);
        assert!(style.white_icon_backing);
        assert_eq!(style.layout.icon_offset, (45, 30));
        assert_eq!(style.layout.name.x, 190);
        assert_eq!(style.layout.amount.px, 38.0);
        assert_eq!(style.layout.message.baseline_y, 205);
    }

    #[test]
    fn setters_reach_the_plain_variant() {
        let style = CardStyle::default()
            .with_currency_symbol(None)
            .with_tiered_font_color(false)
            .with_white_icon_backing(false);
        assert_eq!(style.currency_symbol, None);
        assert!(!style.tiered_font_color);
        assert!(!style.white_icon_backing);
    }
}
