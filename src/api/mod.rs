//! Typed request builders for the device API.

pub mod devices;
