//! Console logging setup for the browser bundle.
//!
//! Library code logs through the `log` facade. Only the WASM entry point
//! installs a backend; tests and non-browser builds leave the facade unset,
//! which silently drops records.

/// Install `console_log` and the panic hook at `level`.
///
/// Safe to call more than once; later calls are ignored by the backend.
pub fn init(level: log::Level) {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(level).is_err() {
            log::debug!("console logger already installed");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = level;
    }
}
