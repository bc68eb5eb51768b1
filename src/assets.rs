//! Embedded resource bundle.
//!
//! Templates, the avatar icon and both typeface weights are baked into the
//! binary at build time. The pipeline only ever asks for named byte slices,
//! so how the assets are packaged stays out of the rendering code.

use crate::tier::Tier;

pub const FONT_REGULAR: &[u8] = include_bytes!("../assets/font/DejaVuSans.ttf");
pub const FONT_SEMIBOLD: &[u8] = include_bytes!("../assets/font/DejaVuSans-Bold.ttf");

pub const ICON: &[u8] = include_bytes!("../assets/icon/avatar.png");

const TEMPLATE_WATER: &[u8] = include_bytes!("../assets/template/water.png");
const TEMPLATE_GREEN: &[u8] = include_bytes!("../assets/template/green.png");
const TEMPLATE_YELLOW: &[u8] = include_bytes!("../assets/template/yellow.png");
const TEMPLATE_ORANGE: &[u8] = include_bytes!("../assets/template/orange.png");
const TEMPLATE_PINK: &[u8] = include_bytes!("../assets/template/pink.png");
const TEMPLATE_RED: &[u8] = include_bytes!("../assets/template/red.png");

/// Raw PNG bytes of the background template for a tier.
pub fn template(tier: Tier) -> &'static [u8] {
    match tier {
        Tier::Water => TEMPLATE_WATER,
        Tier::Green => TEMPLATE_GREEN,
        Tier::Yellow => TEMPLATE_YELLOW,
        Tier::Orange => TEMPLATE_ORANGE,
        Tier::Pink => TEMPLATE_PINK,
        Tier::Red => TEMPLATE_RED,
    }
}
