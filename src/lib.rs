//! Multi-touch canvas demo: a circle under every finger and a freehand stroke
//! following the first one, over a greeting banner.

pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod render;
pub mod state;
pub(crate) mod util;

pub use components::App;
pub use error::{Error, Result};
