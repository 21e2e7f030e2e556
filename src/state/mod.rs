pub mod path;
pub mod redraw;
pub mod touch;

pub use path::PathTracker;
pub use redraw::DirtyFlag;
pub use touch::TouchTracker;
