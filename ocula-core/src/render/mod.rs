//! Display lists and the CPU rasterizer that turns them into pixels.

pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod plan;
