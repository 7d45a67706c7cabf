//! Liveness endpoint.

/// GET /health - Basic liveness probe.
///
/// Returns 200 with a literal body immediately. Performs no storage access,
/// so it answers regardless of database state.
#[axum::debug_handler]
pub async fn health() -> &'static str {
    "OK"
}
