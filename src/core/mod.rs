// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

#[cfg(feature = "browser")]
pub mod browser;
