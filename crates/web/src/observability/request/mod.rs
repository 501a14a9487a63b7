//! Request-level logging and request IDs.

mod request_ids;
mod spans;

use std::time::Instant;

use salvo::{
    Request, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let route = spans::route_label(&path);
    let remote_addr = req.remote_addr().to_string();
    let _in_flight_request = metrics::InFlightRequestGuard::track();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let duration = started.elapsed();
    let status = request_ids::response_status_or_ok(res.status_code);
    let duration_ms = duration.as_millis();
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());

    metrics::observe_request(&method, route, status.as_u16(), duration.as_secs_f64());

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                method = %method,
                path = %path,
                request_id = %request_id,
                "server error response"
            );
        } else if status.is_client_error() {
            warn!(
                status = status.as_u16(),
                method = %method,
                path = %path,
                request_id = %request_id,
                "client error response"
            );
        }

        if duration_ms > threshold_ms {
            warn!(
                method = %method,
                path = %path,
                request_id = %request_id,
                duration_ms,
                threshold_ms,
                "slow request detected"
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser as _;
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::{
        config::ServerConfig,
        observability::{apply_runtime_config, metrics_handler},
        test_helpers::CapturedLogs,
    };

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    #[handler]
    async fn missing(res: &mut Response) {
        res.status_code(StatusCode::NOT_FOUND);
    }

    #[handler]
    async fn failing(res: &mut Response) {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[handler]
    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_millis(25)).await;

        "slow"
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("ok").get(ok))
                .push(Router::with_path("missing").get(missing))
                .push(Router::with_path("failing").get(failing))
                .push(Router::with_path("slow").get(slow))
                .push(Router::with_path("products/{product}").get(ok))
                .push(Router::with_path("metrics").get(metrics_handler)),
        )
    }

    #[tokio::test]
    async fn echoes_incoming_request_id() {
        let res = TestClient::get("http://example.com/ok")
            .add_header(request_ids::REQUEST_ID_HEADER, "req-42", true)
            .send(&service())
            .await;

        assert_eq!(
            res.headers()
                .get(request_ids::REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("req-42")
        );
    }

    #[tokio::test]
    async fn generates_request_id_when_missing() {
        let res = TestClient::get("http://example.com/ok")
            .send(&service())
            .await;

        assert!(res.headers().contains_key(request_ids::REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn client_errors_are_logged_as_warnings() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        TestClient::get("http://example.com/missing")
            .send(&service())
            .await;

        let lines = logs.lines_containing("client error response");

        assert_eq!(lines.len(), 1);
        assert!(lines.iter().all(|line| line.contains("WARN")));
        assert!(logs.lines_containing("server error response").is_empty());
    }

    #[tokio::test]
    async fn server_errors_are_logged_as_errors() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        TestClient::get("http://example.com/failing")
            .send(&service())
            .await;

        let lines = logs.lines_containing("server error response");

        assert_eq!(lines.len(), 1);
        assert!(lines.iter().all(|line| line.contains("ERROR")));
    }

    #[tokio::test]
    async fn slow_requests_are_logged_as_warnings() -> TestResult {
        apply_runtime_config(&ServerConfig::try_parse_from([
            "storefront-web",
            "--slow-request-threshold-ms",
            "5",
        ])?);

        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        TestClient::get("http://example.com/slow")
            .send(&service())
            .await;

        let lines = logs.lines_containing("slow request detected");

        assert_eq!(lines.len(), 1);
        assert!(lines.iter().all(|line| line.contains("WARN")));

        Ok(())
    }

    #[tokio::test]
    async fn product_paths_share_one_metric_series() -> TestResult {
        let service = service();

        for id in ["series-a", "series-b", "series-c"] {
            TestClient::get(format!("http://example.com/products/{id}"))
                .send(&service)
                .await;
        }

        let exposition = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert!(exposition.contains(r#"route="/products/{id}""#));
        assert!(!exposition.contains("series-a"));
        assert!(!exposition.contains("series-b"));
        assert!(!exposition.contains("series-c"));

        Ok(())
    }
}
