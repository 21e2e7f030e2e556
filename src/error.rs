use wasm_bindgen::{JsCast, JsValue};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("canvas ref not attached to a canvas element")]
    NoCanvas,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("{field} out of range: {value}")]
    InvalidSize { field: &'static str, value: f64 },
    #[error("tracing subscriber already set: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        Error::Js(message)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
