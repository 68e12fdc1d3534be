//! Playback state above the workers: appearance settings, repeat-count
//! trainers, the sequencing controller and its JSON configuration.

pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod settings;
pub(crate) mod trainer;
