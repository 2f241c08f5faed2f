//! Service metadata handlers.

/// GET /Info/Version
///
/// Plain-text service version.
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
