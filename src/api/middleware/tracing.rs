//! HTTP request/response tracing middleware.
//!
//! This is the single request-logging point of the service; handlers and
//! services do not log individual requests.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// - **On Request:** opens an `INFO` span with method, URI and HTTP version
/// - **On Response:** logs status and latency in milliseconds at `INFO`
/// - **On Failure:** logs 5xx responses at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/url/shorten version=HTTP/1.1}: finished processing request latency=3 ms status=201
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
