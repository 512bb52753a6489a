//! Cognitive-reframing core: distortion detection, template composition, and
//! a remote-provider fallback chain with a guaranteed local result.

pub mod config;
pub mod logging;
pub mod reframe;
