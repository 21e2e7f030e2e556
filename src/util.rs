// Small helpers shared by the components.
use crate::error::Error;

/// Logs and drops failures at the platform boundary.
pub trait LogErr<T> {
    fn log_err(self, context: &str) -> Option<T>;
}

impl<T, E: Into<Error>> LogErr<T> for Result<T, E> {
    fn log_err(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let err: Error = err.into();
                tracing::warn!(%err, "{context}");
                None
            }
        }
    }
}

/// Index into a non-empty cyclic list.
pub fn cyclic<T>(items: &[T], index: usize) -> Option<&T> {
    if items.is_empty() {
        None
    } else {
        items.get(index % items.len())
    }
}
