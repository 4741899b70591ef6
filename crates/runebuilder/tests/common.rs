#![allow(missing_docs, dead_code)]

/// Installs a test logger once; `RUST_LOG=trace` shows growth and replace
/// decisions.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Text exercising one, two, three and four byte UTF-8 encodings.
pub const MIXED: &str = "aö€😀 aö€😀";
