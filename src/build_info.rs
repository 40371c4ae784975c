//! Compile-time build information, written by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `dino-jump <date> (<commit>)`, for the startup log.
pub fn version_line() -> String {
    format!("{} {} ({})", env!("CARGO_PKG_NAME"), BUILD_DATE, BUILD_COMMIT)
}
