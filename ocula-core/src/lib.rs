//! Ocula is a deterministic eye-tracking target animation engine.
//!
//! It moves a visual target along fourteen prescribed motion patterns for
//! oculomotor training, counts completed repetitions and sequences patterns
//! into a comprehensive session. Hosts feed it frame timestamps and a surface
//! size; it answers with backend-agnostic [`DisplayList`]s, which the bundled
//! [`CpuBackend`] rasterizes into premultiplied RGBA8 frames.
//!
//! # Pipeline overview
//!
//! 1. **Drive**: `Controller::frame(now, viewport)` applies queued settings and
//!    steps the active [`Trainer`].
//! 2. **Step**: the trainer's [`Worker`] turns the timestamp into a raw delta,
//!    rescales on resize and advances its [`Stepper`] under that law's delta policy.
//! 3. **Draw**: the stepper emits grid lines, targets and images onto a [`Stage`].
//! 4. **Render** (optional): a [`RenderBackend`] turns the display list into pixels.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: given the same timestamps, sizes and random source,
//!   every trajectory and event sequence replays exactly.
//! - **No IO in renderers**: images are decoded up front into an [`ImageStore`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod driver;
mod foundation;
mod motion;
mod patterns;
mod render;
mod session;

pub use assets::decode::{PreparedImage, decode_image, decode_svg, parse_svg, rasterize_svg};
pub use assets::store::{DEFAULT_SVG_SIZE, ImageStore, LoadReport};
pub use driver::frame_loop::{CallbackId, FrameLoop};
pub use driver::stage::Stage;
pub use driver::{FrameBegin, FrameDriver};
pub use foundation::color::Rgba8;
pub use foundation::core::{Affine, Axis, BezPath, Point, Rect, Vec2, Viewport};
pub use foundation::error::{OculaError, OculaResult};
pub use foundation::math::{RandomSource, Rng64, ScriptedRandom};
pub use motion::clock::{
    DeltaPolicy, FLICK_CLAMP_MS, FrameClock, STALL_CLAMP_MS, STALL_DISCARD_MS,
};
pub use motion::ease::Ease;
pub use motion::path::{DEFAULT_ASPECT, PathMapping, PathSpec, SegmentTimeline};
pub use patterns::anchored::{AnchorSpace, Anchored, Highlight, ThemedImages};
pub use patterns::catalog::{
    DEFAULT_COMPREHENSIVE_LOOPS, PATTERN_NAMES, Pattern, RING_ANCHORS, flick_pulse_path,
    horizontal_sweep_layout, horizontal_wave_path, roster, stellar_path, vertical_sweep_layout,
    vertical_waves_path,
};
pub use patterns::expansion::{EXPANSION_DISTANCE, Expansion};
pub use patterns::flick::Flick;
pub use patterns::parametric::{
    CurveFn, Parametric, TRACE_SAMPLES, circle, lemniscate, partial_circle,
};
pub use patterns::polyline::Polyline;
pub use patterns::random_flick::{FLICK_PERIOD_MS, FLICK_TICK_MS, RandomFlick};
pub use patterns::roam::{ROAM_PERIOD_S, ROAM_SPEED, Roam};
pub use patterns::sweep::{MAX_STEP, Sweep};
pub use patterns::travel::{TRAVEL_TOTAL, Travel};
pub use patterns::{FrameOutput, Stepper, Worker};
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use render::cpu::CpuBackend;
pub use render::plan::{DisplayList, DrawOp, GradientStop, Outline};
pub use session::config::SessionConfig;
pub use session::controller::{Controller, ControllerEvent, PlaybackMode};
pub use session::settings::{DotColors, Palette, Settings, SettingsUpdate, StageTheme, ThemeMode};
pub use session::trainer::{RepeatTarget, Trainer, TrainerEvent, TrainerFrame};
