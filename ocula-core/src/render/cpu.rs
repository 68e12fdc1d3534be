use std::{collections::HashMap, f64::consts::TAU, sync::Arc};

use kurbo::Shape;

use crate::{
    assets::{decode::PreparedImage, store::ImageStore},
    foundation::{
        color::Rgba8,
        core::{Affine, BezPath, Point, Rect, Vec2},
        error::{OculaError, OculaResult},
    },
    render::{
        backend::{FrameRGBA, RenderBackend},
        plan::{DisplayList, DrawOp, GradientStop, Outline},
    },
    session::settings::ThemeMode,
};

/// Largest gradient raster edge; bigger discs are drawn from a scaled copy.
const MAX_GRADIENT_DIM: u32 = 512;

#[derive(Clone)]
struct ImagePaint {
    paint: vello_cpu::Image,
    w: u32,
    h: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct BackgroundKey {
    w: u32,
    h: u32,
    mode: ThemeMode,
    color: Rgba8,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    stops: Vec<(u64, Rgba8)>,
    size: u32,
}

/// CPU backend powered by `vello_cpu`.
///
/// Keeps one render context, the last background raster, shaded-disc
/// gradients and image paints between frames.
pub struct CpuBackend {
    ctx: Option<vello_cpu::RenderContext>,
    background: Option<(BackgroundKey, vello_cpu::Image)>,
    background_builds: u64,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    image_cache: HashMap<String, ImagePaint>,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    /// Backend with empty caches.
    pub fn new() -> Self {
        Self {
            ctx: None,
            background: None,
            background_builds: 0,
            gradient_cache: HashMap::new(),
            image_cache: HashMap::new(),
        }
    }

    /// How many times the background raster has been (re)built.
    pub fn background_builds(&self) -> u64 {
        self.background_builds
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> OculaResult<R>,
    ) -> OculaResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn background_paint(&mut self, key: BackgroundKey) -> OculaResult<vello_cpu::Image> {
        if let Some((k, img)) = &self.background
            && *k == key
        {
            return Ok(img.clone());
        }
        let px = key.color.to_premul();
        let n = (key.w as usize).saturating_mul(key.h as usize);
        let bytes: Vec<u8> = px.iter().copied().cycle().take(n * 4).collect();
        let img = rgba_premul_to_image(&bytes, key.w, key.h)?;
        self.background = Some((key, img.clone()));
        self.background_builds += 1;
        Ok(img)
    }

    fn gradient_paint(
        &mut self,
        stops: &[GradientStop],
        size: u32,
    ) -> OculaResult<vello_cpu::Image> {
        let key = GradientKey {
            stops: stops.iter().map(|s| (s.offset.to_bits(), s.color)).collect(),
            size,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }
        let mut bytes = vec![0u8; (size as usize).saturating_mul(size as usize).saturating_mul(4)];
        let h1 = f64::from(size.max(1) - 1);
        for y in 0..size {
            let t = if h1 <= 0.0 { 0.0 } else { f64::from(y) / h1 };
            let c = sample_stops(stops, t).to_premul();
            let row = (y as usize) * (size as usize) * 4;
            for px in bytes[row..row + (size as usize) * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&c);
            }
        }
        let img = rgba_premul_to_image(&bytes, size, size)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }

    fn image_paint_for(&mut self, name: &str, image: &PreparedImage) -> OculaResult<ImagePaint> {
        if let Some(p) = self.image_cache.get(name)
            && p.w == image.width
            && p.h == image.height
        {
            return Ok(p.clone());
        }
        let paint = rgba_premul_to_image(&image.rgba8_premul, image.width, image.height)?;
        let out = ImagePaint {
            paint,
            w: image.width,
            h: image.height,
        };
        self.image_cache.insert(name.to_owned(), out.clone());
        Ok(out)
    }

    fn draw_op(
        &mut self,
        op: &DrawOp,
        list: &DisplayList,
        images: &ImageStore,
        ctx: &mut vello_cpu::RenderContext,
    ) -> OculaResult<()> {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::Background { mode, color } => {
                let key = BackgroundKey {
                    w: list.viewport.width,
                    h: list.viewport.height,
                    mode: *mode,
                    color: *color,
                };
                let img = self.background_paint(key)?;
                ctx.set_paint(img);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(key.w),
                    f64::from(key.h),
                ));
            }
            DrawOp::Segment {
                from,
                to,
                width,
                color,
            } => {
                if let Some(quad) = segment_quad(*from, *to, *width) {
                    set_color(ctx, *color);
                    ctx.fill_path(&bezpath_to_cpu(&quad));
                }
            }
            DrawOp::Disc {
                center,
                radius,
                fill,
                outline,
            } => {
                if *radius > 0.0 && !fill.is_transparent() {
                    set_color(ctx, *fill);
                    ctx.fill_path(&bezpath_to_cpu(&disc_path(*center, *radius)));
                }
                draw_outline(ctx, *center, *radius, outline.as_ref());
            }
            DrawOp::ShadedDisc {
                center,
                radius,
                stops,
                outline,
            } => {
                if *radius > 0.0 && !stops.is_empty() {
                    let diameter = 2.0 * radius;
                    let size = (diameter.ceil() as u32).clamp(1, MAX_GRADIENT_DIM);
                    let img = self.gradient_paint(stops, size)?;
                    let s = f64::from(size);
                    let tr = Affine::translate(Vec2::new(center.x - radius, center.y - radius))
                        * Affine::scale(diameter / s);
                    ctx.set_transform(affine_to_cpu(tr));
                    ctx.set_paint(img);
                    let local = disc_path(Point::new(s / 2.0, s / 2.0), s / 2.0);
                    ctx.fill_path(&bezpath_to_cpu(&local));
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                }
                draw_outline(ctx, *center, *radius, outline.as_ref());
            }
            DrawOp::Image { key, rect } => {
                // Unready images draw nothing.
                let Some(prepared) = images.get(key) else {
                    return Ok(());
                };
                if prepared.width == 0 || prepared.height == 0 || rect.area() <= 0.0 {
                    return Ok(());
                }
                let p = self.image_paint_for(key, prepared)?;
                ctx.set_transform(affine_to_cpu(image_transform(*rect, p.w, p.h)));
                ctx.set_paint(p.paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(p.w),
                    f64::from(p.h),
                ));
            }
        }
        Ok(())
    }
}

impl RenderBackend for CpuBackend {
    fn render(&mut self, list: &DisplayList, images: &ImageStore) -> OculaResult<FrameRGBA> {
        let vp = list.viewport;
        if vp.is_empty() {
            return Err(OculaError::render("cannot render an empty viewport"));
        }
        let w: u16 = vp
            .width
            .try_into()
            .map_err(|_| OculaError::render("frame width exceeds u16"))?;
        let h: u16 = vp
            .height
            .try_into()
            .map_err(|_| OculaError::render("frame height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.with_ctx_mut(w, h, |this, ctx| {
            for op in &list.ops {
                this.draw_op(op, list, images, ctx)?;
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: vp.width,
            height: vp.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn draw_outline(
    ctx: &mut vello_cpu::RenderContext,
    center: Point,
    radius: f64,
    outline: Option<&Outline>,
) {
    let Some(o) = outline else {
        return;
    };
    if o.color.is_transparent() || o.width <= 0.0 || radius <= 0.0 {
        return;
    }
    set_color(ctx, o.color);
    ctx.fill_path(&bezpath_to_cpu(&ring_path(center, radius, o.width)));
}

/// Color of a vertical gradient at `t` in `[0, 1]`.
fn sample_stops(stops: &[GradientStop], t: f64) -> Rgba8 {
    let Some(first) = stops.first() else {
        return Rgba8::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for w in stops.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    stops.last().map_or(first.color, |s| s.color)
}

fn disc_path(center: Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, radius).to_path(0.1)
}

/// Butt-capped stroke of a straight segment as a fill.
fn segment_quad(from: Point, to: Point, width: f64) -> Option<BezPath> {
    let d = to - from;
    let len = d.hypot();
    if len <= 0.0 || width <= 0.0 {
        return None;
    }
    let n = Vec2::new(-d.y, d.x) * (width / 2.0 / len);
    let mut p = BezPath::new();
    p.move_to(from + n);
    p.line_to(to + n);
    p.line_to(to - n);
    p.line_to(from - n);
    p.close_path();
    Some(p)
}

/// Stroke of a circle as a fill: outer loop one way, inner loop the other.
fn ring_path(center: Point, radius: f64, width: f64) -> BezPath {
    let outer = radius + width / 2.0;
    let inner = (radius - width / 2.0).max(0.0);
    let n = ((outer * TAU / 2.0).ceil() as usize).clamp(24, 720);
    let at = |r: f64, i: usize| {
        let a = TAU * i as f64 / n as f64;
        center + Vec2::new(r * a.cos(), r * a.sin())
    };

    let mut p = BezPath::new();
    p.move_to(at(outer, 0));
    for i in 1..n {
        p.line_to(at(outer, i));
    }
    p.close_path();
    if inner > 0.0 {
        p.move_to(at(inner, 0));
        for i in (1..n).rev() {
            p.line_to(at(inner, i));
        }
        p.close_path();
    }
    p
}

fn image_transform(rect: Rect, w: u32, h: u32) -> Affine {
    Affine::translate(Vec2::new(rect.x0, rect.y0))
        * Affine::scale_non_uniform(rect.width() / f64::from(w), rect.height() / f64::from(h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> OculaResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| OculaError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| OculaError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(OculaError::render("pixmap byte len mismatch"));
    }
    let pixels: Vec<vello_cpu::peniko::color::PremulRgba8> = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> OculaResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
