// Global tracing subscriber: the browser console on wasm, stdout elsewhere.
use crate::error::Result;

pub fn init() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::try_set_as_global_default()?;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let max_level = if cfg!(debug_assertions) {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        };
        tracing::subscriber::set_global_default(
            tracing_subscriber::FmtSubscriber::builder()
                .with_max_level(max_level)
                .finish(),
        )?;
    }

    Ok(())
}
