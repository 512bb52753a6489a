pub mod composer;
pub mod detector;
pub mod error;
pub mod normalizer;
pub mod providers;
pub mod service;
pub mod situation;
pub mod templates;
pub mod types;
