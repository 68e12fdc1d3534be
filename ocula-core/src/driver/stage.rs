use crate::{
    foundation::{
        color::Rgba8,
        core::{Point, Rect, Viewport},
    },
    render::plan::{DisplayList, DrawOp, GradientStop, Outline},
    session::settings::{DotColors, Settings},
};

/// Outline width used around shaded targets.
const SHADED_OUTLINE_WIDTH: f64 = 2.0;

/// Drawing context handed to a motion law for one frame.
pub struct Stage<'a> {
    settings: &'a Settings,
    list: &'a mut DisplayList,
}

impl<'a> Stage<'a> {
    /// Stage appending to `list` with the given appearance.
    pub fn new(settings: &'a Settings, list: &'a mut DisplayList) -> Self {
        Self { settings, list }
    }

    /// Surface being drawn.
    pub fn viewport(&self) -> Viewport {
        self.list.viewport
    }

    /// Appearance for this frame.
    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Target colors for the current theme.
    pub fn dots(&self) -> DotColors {
        self.settings.dot_colors()
    }

    /// Grid line width for the current surface.
    pub fn line_width(&self) -> f64 {
        self.viewport().w() / 700.0
    }

    /// Fill the surface with the theme base color.
    pub fn background(&mut self) {
        self.list.push(DrawOp::Background {
            mode: self.settings.theme_mode(),
            color: self.settings.stage_theme().base,
        });
    }

    /// Thin themed segment, skipped when the grid is hidden. Odd widths are
    /// shifted half a pixel to land on pixel centers.
    pub fn grid_line(&mut self, a: Point, b: Point) {
        if !self.settings.show_grid {
            return;
        }
        let width = self.line_width();
        let adjust = if width % 2.0 == 0.0 { 0.0 } else { 0.5 };
        self.list.push(DrawOp::Segment {
            from: Point::new(a.x + adjust, a.y + adjust),
            to: Point::new(b.x + adjust, b.y + adjust),
            width,
            color: self.settings.stage_theme().line,
        });
    }

    /// Connect consecutive points with grid lines.
    pub fn grid_polyline(&mut self, points: &[Point]) {
        for w in points.windows(2) {
            self.grid_line(w[0], w[1]);
        }
    }

    /// Flat disc with an outline at grid-line width.
    pub fn disc(&mut self, center: Point, radius: f64, fill: Rgba8, outline: Rgba8) {
        let outline = outline_of(outline, self.line_width());
        self.list.push(DrawOp::Disc {
            center,
            radius,
            fill,
            outline,
        });
    }

    /// Vertically shaded disc: `top` down to the middle, blending to `bottom`.
    pub fn shaded_disc(
        &mut self,
        center: Point,
        radius: f64,
        top: Rgba8,
        bottom: Rgba8,
        outline: Rgba8,
    ) {
        let stops = vec![
            GradientStop::new(0.0, top),
            GradientStop::new(0.5, top),
            GradientStop::new(1.0, bottom),
        ];
        self.list.push(DrawOp::ShadedDisc {
            center,
            radius,
            stops,
            outline: outline_of(outline, SHADED_OUTLINE_WIDTH),
        });
    }

    /// Shaded disc in the current theme's target colors.
    pub fn target(&mut self, center: Point, radius: f64) {
        let dots = self.dots();
        self.shaded_disc(center, radius, dots.primary, dots.secondary, dots.outline);
    }

    /// Shaded disc with explicit stops and no outline.
    pub fn gradient_disc(&mut self, center: Point, radius: f64, stops: Vec<GradientStop>) {
        self.list.push(DrawOp::ShadedDisc {
            center,
            radius,
            stops,
            outline: None,
        });
    }

    /// Named image stretched into `rect`.
    pub fn image(&mut self, key: &str, rect: Rect) {
        self.list.push(DrawOp::Image {
            key: key.to_owned(),
            rect,
        });
    }
}

fn outline_of(color: Rgba8, width: f64) -> Option<Outline> {
    if color.is_transparent() || width <= 0.0 {
        None
    } else {
        Some(Outline { color, width })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/stage.rs"]
mod tests;
