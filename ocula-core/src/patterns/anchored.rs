use crate::{
    driver::stage::Stage,
    foundation::{
        core::{Point, Rect, Viewport},
        math::RandomSource,
    },
    motion::clock::{DeltaPolicy, STALL_DISCARD_MS},
    patterns::Stepper,
};

/// Image side as a fraction of the surface height, at most.
const MAX_IMAGE_FILL: f64 = 0.82;
const DEFAULT_DOT_DIVISOR: f64 = 28.0;

/// Names of the themed background images in the asset store.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemedImages {
    /// Image drawn in the light theme.
    pub light: String,
    /// Image drawn in the dark theme.
    pub dark: String,
}

impl Default for ThemedImages {
    fn default() -> Self {
        Self {
            light: "pvision2whitemode.svg".to_owned(),
            dark: "pvision2darkmode.svg".to_owned(),
        }
    }
}

impl ThemedImages {
    /// Image name for the current theme.
    pub fn for_dark_mode(&self, dark: bool) -> &str {
        if dark { &self.dark } else { &self.light }
    }
}

/// Coordinate frame the anchors were authored in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorSpace {
    /// Fractions of the image square.
    Local,
    /// Fractions of the surface, for an image laid out at `(dx, dy)`.
    Canvas {
        /// Left edge of the image, as a fraction of the surface.
        dx: f64,
        /// Top edge of the image, as a fraction of the surface.
        dy: f64,
    },
}

/// Which anchors are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// Draw only the anchor under the tick.
    OnlyActive,
    /// Draw every anchor except the one under the tick.
    AllButActive,
}

/// Themed image with dots at fixed anchors, stepping on a tick.
#[derive(Clone, Debug)]
pub struct Anchored {
    anchors: Vec<Point>,
    images: ThemedImages,
    highlight: Highlight,
    tick_ms: f64,
    total: f64,
    scale: f64,
    dot_divisor: f64,
    fixed_divisor: Option<f64>,
    t: f64,
}

impl Anchored {
    /// Worker stepping over `anchors` every `tick_ms`. `scale` sizes the image relative
    /// to the surface width.
    pub fn new(
        anchors: &[Point],
        space: AnchorSpace,
        images: ThemedImages,
        highlight: Highlight,
        tick_ms: f64,
        scale: f64,
    ) -> Self {
        let tick_ms = tick_ms.max(1.0);
        let anchors = match space {
            AnchorSpace::Local => anchors.to_vec(),
            AnchorSpace::Canvas { dx, dy } => {
                let w = if scale != 0.0 { scale / 2.5 } else { 0.4 };
                let h = if scale != 0.0 { scale } else { 1.0 };
                anchors
                    .iter()
                    .map(|p| {
                        Point::new(
                            ((p.x - dx) / w).clamp(0.0, 1.0),
                            ((p.y - dy) / h).clamp(0.0, 1.0),
                        )
                    })
                    .collect()
            }
        };
        Self {
            total: tick_ms * anchors.len().max(1) as f64,
            anchors,
            images,
            highlight,
            tick_ms,
            scale,
            dot_divisor: DEFAULT_DOT_DIVISOR,
            fixed_divisor: None,
            t: 0.0,
        }
    }

    /// Dot radius as a fraction of the image side. Non-positive values keep
    /// the default.
    pub fn with_dot_divisor(mut self, divisor: f64) -> Self {
        if divisor > 0.0 {
            self.dot_divisor = divisor;
        }
        self
    }

    /// Dot radius as a fraction of the surface width, overriding the image
    /// based size.
    pub fn with_fixed_divisor(mut self, divisor: f64) -> Self {
        self.fixed_divisor = (divisor > 0.0).then_some(divisor);
        self
    }

    /// Anchors as fractions of the image square.
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// Milliseconds into the current cycle.
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    /// Anchor under the tick, `None` without anchors.
    pub fn active_index(&self) -> Option<usize> {
        let last = self.anchors.len().checked_sub(1)?;
        Some(((self.t / self.tick_ms).floor().max(0.0) as usize).min(last))
    }

    /// Square the image is fit into.
    pub fn image_rect(&self, viewport: Viewport) -> Rect {
        let (w, h) = (viewport.w(), viewport.h());
        let size = (self.scale * w / 2.5).min(h * MAX_IMAGE_FILL);
        let x = (w - size) / 2.0;
        let y = (h - size) / 2.0;
        Rect::new(x, y, x + size, y + size)
    }

    fn dot_radius(&self, viewport: Viewport, image_side: f64) -> f64 {
        match self.fixed_divisor {
            Some(d) => viewport.w() / d,
            None => image_side / self.dot_divisor,
        }
    }
}

impl Stepper for Anchored {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {
        self.t = 0.0;
    }

    fn advance(&mut self, raw_dt_ms: f64, _rng: &mut dyn RandomSource) -> u32 {
        let dt = DeltaPolicy::Discard {
            threshold_ms: STALL_DISCARD_MS,
        }
        .apply(raw_dt_ms);
        self.t += dt;

        let mut completions = 0;
        while self.t >= self.total {
            self.t -= self.total;
            completions += 1;
        }
        completions
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        let vp = stage.viewport();
        let rect = self.image_rect(vp);
        let key = self.images.for_dark_mode(stage.settings().dark_mode);
        stage.image(key, rect);

        let Some(active) = self.active_index() else {
            return;
        };
        let side = rect.width();
        let radius = self.dot_radius(vp, side);
        let place = |p: Point| Point::new(rect.x0 + p.x * side, rect.y0 + p.y * side);

        match self.highlight {
            Highlight::OnlyActive => stage.target(place(self.anchors[active]), radius),
            Highlight::AllButActive => {
                for (i, &p) in self.anchors.iter().enumerate() {
                    if i != active {
                        stage.target(place(p), radius);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/anchored.rs"]
mod tests;
