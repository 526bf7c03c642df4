// Diagnostics go through the `log` facade and stay on stderr; stdout is
// reserved for matched words.

/// Wires env_logger once per process. Controlled by RUST_LOG, silent by
/// default.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
