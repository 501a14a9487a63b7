//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    healthcheck,
    observability::{metrics_handler, request_logging},
    products,
    state::State,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(Router::with_path("products/{product}").get(products::get::handler))
}

pub(crate) fn app_service(state: Arc<State>) -> Service {
    with_middleware(state, app_router())
}

fn with_middleware(state: Arc<State>, routes: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(CatchPanic::new())
            .hoop(request_logging)
            .hoop(remove_slash())
            .hoop(inject(state))
            .push(routes),
    )
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use storefront_catalog::catalog::{FixtureCatalog, StubCatalog};

    use crate::test_helpers::anchor_with_href;

    use super::*;

    const FIXTURE: &str = include_str!("../../catalog/fixtures/products.yaml");

    #[tokio::test]
    async fn product_page_is_served_as_html() -> TestResult {
        let service = app_service(State::from_catalog(StubCatalog::try_default()?));

        let mut res = TestClient::get("http://example.com/products/1?color=purple&size=l")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            res.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("text/html"))
        );
        assert!(res.headers().contains_key("x-request-id"));
        assert!(res.take_string().await?.contains("/products/1p.png"));

        Ok(())
    }

    #[tokio::test]
    async fn fixture_catalog_returns_404_for_unknown_products() -> TestResult {
        let service = app_service(State::from_catalog(FixtureCatalog::from_yaml(FIXTURE)?));

        let found = TestClient::get("http://example.com/products/2")
            .send(&service)
            .await;
        let missing = TestClient::get("http://example.com/products/3")
            .send(&service)
            .await;
        let not_numeric = TestClient::get("http://example.com/products/tee")
            .send(&service)
            .await;

        assert_eq!(found.status_code, Some(StatusCode::OK));
        assert_eq!(missing.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(not_numeric.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn stub_catalog_serves_any_identifier() -> TestResult {
        let service = app_service(State::from_catalog(StubCatalog::try_default()?));

        let mut res = TestClient::get("http://example.com/products/abc")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        // Links always point at the record's own identifier.
        let body = res.take_string().await?.replace("&amp;", "&");
        assert!(body.contains("/products/1?color=gray&size=s"));

        Ok(())
    }

    #[tokio::test]
    async fn trailing_slash_is_ignored() -> TestResult {
        let service = app_service(State::from_catalog(StubCatalog::try_default()?));

        let mut res = TestClient::get("http://example.com/products/1/?color=green")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?.replace("&amp;", "&");

        assert!(body.contains(r#"src="/products/1gr.png""#));
        assert!(
            anchor_with_href(&body, "/products/1?color=green&size=xs")
                .is_some_and(|tag| tag.contains("selected"))
        );

        Ok(())
    }

    #[handler]
    #[expect(clippy::panic, reason = "exercises the panic catcher")]
    async fn explode() -> &'static str {
        panic!("handler failure");
    }

    #[tokio::test]
    async fn handler_panics_become_500() -> TestResult {
        let routes = app_router().push(Router::with_path("explode").get(explode));
        let service = with_middleware(State::from_catalog(StubCatalog::try_default()?), routes);

        let res = TestClient::get("http://example.com/explode")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let healthy = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await;

        assert_eq!(healthy.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn healthcheck_is_routed() {
        let service = app_service(State::from_catalog(FixtureCatalog::default()));

        let res = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }
}
