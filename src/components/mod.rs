pub mod app;
pub mod circle_layer;
pub mod greeting;
pub mod layer;
pub mod path_layer;

pub use app::App;
