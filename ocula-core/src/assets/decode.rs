use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{OculaError, OculaResult};

/// Largest raster edge produced from an SVG.
const MAX_SVG_DIM: u32 = 8_192;

#[derive(Clone, Debug)]
/// Raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> OculaResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> OculaResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize an SVG tree stretched to `width` x `height`.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> OculaResult<PreparedImage> {
    if width == 0 || height == 0 || width > MAX_SVG_DIM || height > MAX_SVG_DIM {
        return Err(OculaError::asset(format!(
            "svg raster size {width}x{height} outside 1..={MAX_SVG_DIM}"
        )));
    }
    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(OculaError::asset("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| OculaError::asset("failed to allocate svg pixmap"))?;
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    // tiny-skia pixmaps are already premultiplied.
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.take()),
    })
}

/// Decode SVG bytes straight to a raster of the given size.
pub fn decode_svg(bytes: &[u8], width: u32, height: u32) -> OculaResult<PreparedImage> {
    let tree = parse_svg(bytes)?;
    rasterize_svg(&tree, width, height)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
