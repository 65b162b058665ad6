/* src/server/adapter/axum/src/tests/mod.rs */

mod routes;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

fn locales() -> LocaleConfig {
  LocaleConfig::new(Some("https://example.com".into()), "en", vec!["en".into(), "it".into()])
    .unwrap()
}

fn router() -> axum::Router {
  let registry = brickyard_ui::website_registry().unwrap();
  PreviewServer::new(registry, locales()).into_axum_router()
}

async fn send(router: axum::Router, req: Request<Body>) -> (StatusCode, String) {
  let resp = router.oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, String) {
  send(router(), Request::get(uri).body(Body::empty()).unwrap()).await
}

#[test]
fn into_axum_router_builds_without_panic() {
  let _router = router();
}
