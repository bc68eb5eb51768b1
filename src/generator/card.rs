//! The card pipeline: template + icon compositing, text fields, PNG output.

use std::{fs::File, io::BufWriter, path::Path};

use image::{imageops, ImageFormat, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use tracing::debug;

use super::{
    font_cache::{self, FontWeight},
    CardError, CardStyle, TextAnchor,
};
use crate::{assets, format, tier::Tier};

// 60% down-scale with integer truncation, matching the template windows.
const ICON_SCALE_NUM: u32 = 3;
const ICON_SCALE_DEN: u32 = 5;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Renders the whole card in memory. The canvas takes the dimensions of the
/// tier's template.
pub fn render(
    name: &str,
    amount: u64,
    message: &str,
    style: &CardStyle,
) -> Result<RgbaImage, CardError> {
    let tier = Tier::from_amount(amount);
    debug!("amount {amount} -> {tier:?}");

    let template = image::load_from_memory(assets::template(tier))
        .map_err(|e| CardError::Image(format!("template decode: {e}")))?
        .to_rgba8();
    if template.width() == 0 || template.height() == 0 {
        return Err(CardError::Image("template has empty bounds".into()));
    }

    let icon = image::load_from_memory(assets::ICON)
        .map_err(|e| CardError::Image(format!("icon decode: {e}")))?
        .to_rgba8();
    let icon = prepare_icon(&icon, style.white_icon_backing);

    // The icon goes down first as a direct copy; the template is then
    // alpha-blended over the whole canvas and shows the icon through its
    // transparent window.
    let mut canvas = RgbaImage::new(template.width(), template.height());
    let (ix, iy) = style.layout.icon_offset;
    imageops::replace(&mut canvas, &icon, ix, iy);
    imageops::overlay(&mut canvas, &template, 0, 0);

    let color = if style.tiered_font_color {
        tier.font_color()
    } else {
        BLACK
    };

    let regular = font_cache::load(FontWeight::Regular)?;
    let semibold = font_cache::load(FontWeight::SemiBold)?;

    let amount_text = format::format_amount(amount, style.currency_symbol);
    draw_text(&mut canvas, &regular, style.layout.name, color, name);
    draw_text(&mut canvas, &semibold, style.layout.amount, color, &amount_text);
    draw_text(&mut canvas, &semibold, style.layout.message, color, message);

    Ok(canvas)
}

/// Creates `path` and PNG-encodes the canvas into it. Failure to create the
/// file aborts the run instead of encoding into a dead handle.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<(), CardError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| CardError::Image(format!("png encode: {e}")))?;
    Ok(())
}

/// Scales the icon to 60% with CatmullRom resampling and, when asked,
/// flattens it onto opaque white so translucent edges do not fringe dark.
fn prepare_icon(icon: &RgbaImage, white_backing: bool) -> RgbaImage {
    let w = icon.width() * ICON_SCALE_NUM / ICON_SCALE_DEN;
    let h = icon.height() * ICON_SCALE_NUM / ICON_SCALE_DEN;
    let resized = imageops::resize(icon, w, h, imageops::FilterType::CatmullRom);
    if !white_backing {
        return resized;
    }

    let mut backing = RgbaImage::from_pixel(w, h, WHITE);
    imageops::overlay(&mut backing, &resized, 0, 0);
    backing
}

/// Draws one text field left-to-right from its baseline anchor, blending
/// glyph coverage over the canvas. Text longer than the canvas simply runs
/// off the edge; there is no wrapping or clipping.
fn draw_text(
    img: &mut RgbaImage,
    font: &Font<'static>,
    anchor: TextAnchor,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(anchor.px);
    let start = point(anchor.x as f32, anchor.baseline_y as f32);

    for glyph in font.layout(text, scale, start) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, v| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= img.width() || py >= img.height() {
                return;
            }
            let a = (v * 255.0) as u8;
            if a == 0 {
                return;
            }
            let dst = img.get_pixel_mut(px, py);
            let sa = a as f32 / 255.0;
            let inv = 1.0 - sa;
            dst.0[0] = (color.0[0] as f32 * sa + dst.0[0] as f32 * inv) as u8;
            dst.0[1] = (color.0[1] as f32 * sa + dst.0[1] as f32 * inv) as u8;
            dst.0[2] = (color.0[2] as f32 * sa + dst.0[2] as f32 * inv) as u8;
            dst.0[3] = 255;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_scale_truncates() {
        let icon = RgbaImage::from_pixel(192, 192, Rgba([10, 20, 30, 255]));
        let scaled = prepare_icon(&icon, false);
        assert_eq!(scaled.dimensions(), (115, 115));

        let icon = RgbaImage::from_pixel(101, 67, Rgba([10, 20, 30, 255]));
        let scaled = prepare_icon(&icon, false);
        assert_eq!(scaled.dimensions(), (60, 40));
    }

    #[test]
    fn white_backing_flattens_transparency() {
        let icon = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 0]));
        let flat = prepare_icon(&icon, true);
        assert_eq!(*flat.get_pixel(0, 0), Rgba([255, 255, 255, 255]));

        let raw = prepare_icon(&icon, false);
        assert_eq!(raw.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn canvas_matches_template_dimensions() {
        let style = CardStyle::default();
        let canvas = render("n", 0, "m", &style).expect("render");
        let template = image::load_from_memory(assets::template(Tier::Water))
            .expect("decode")
            .to_rgba8();
        assert_eq!(canvas.dimensions(), template.dimensions());
    }

    #[test]
    fn text_changes_pixels_under_the_name_anchor() {
        let style = CardStyle::default();
        let blank = render("", 750, "", &style).expect("render");
        let named = render("Alice", 750, "", &style).expect("render");
        assert_ne!(blank.as_raw(), named.as_raw());
    }
}
