/* src/server/adapter/axum/src/tests/routes.rs */

use super::*;
use serde_json::{Value, json};

#[tokio::test]
async fn catalog_lists_visible_bricks() {
  let (status, body) = get("/_bricks/catalog.json").await;
  assert_eq!(status, StatusCode::OK);
  let json: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(json["hero sections"][0]["name"], "hero-unit-2");
  assert!(json.get("shared").is_none());
}

#[tokio::test]
async fn schema_for_known_brick() {
  let (status, body) = get("/_bricks/schema/hero-unit-2").await;
  assert_eq!(status, StatusCode::OK);
  let json: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(json["label"], "Horizontal Hero");
  assert_eq!(json["repeaterItems"][1]["max"], 2);
  assert_eq!(json["stories"][0]["id"], "horizontal-hero-dark");
}

#[tokio::test]
async fn unknown_schema_is_json_404() {
  let (status, body) = get("/_bricks/schema/nope").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  let json: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(json, json!({"ok": false, "error": {"code": "NOT_FOUND", "message": "unknown brick \"nope\""}}));
}

#[tokio::test]
async fn preview_defaults_to_default_locale() {
  let (status, body) = get("/_bricks/preview/hero-unit-2").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.starts_with("<!DOCTYPE html><html lang=\"en\">"));
  assert!(body.contains("<title>Horizontal Hero</title>"));
  assert!(body.contains("beautiful"));
  assert!(body.contains(r#"hreflang="it" href="https://example.com/it/_bricks/preview/hero-unit-2""#));
}

#[tokio::test]
async fn preview_uses_locale_prefix() {
  let (status, body) = get("/it/_bricks/preview/hero-unit-2").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<html lang=\"it\">"));
  assert!(body.contains(r#"<link rel="canonical" href="https://example.com/it/_bricks/preview/hero-unit-2">"#));
}

#[tokio::test]
async fn unknown_prefix_falls_back() {
  let (status, body) = get("/fr/_bricks/preview/hero-unit-2").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn cookie_selects_locale_without_prefix() {
  let req = Request::get("/_bricks/preview/hero-unit-2")
    .header("cookie", "NEXT_LOCALE=it")
    .body(Body::empty())
    .unwrap();
  let (_, body) = send(router(), req).await;
  assert!(body.contains("<html lang=\"it\">"));
}

#[tokio::test]
async fn accept_language_selects_locale() {
  let req = Request::get("/_bricks/preview/hero-unit-2")
    .header("accept-language", "it-IT,it;q=0.9,en;q=0.5")
    .body(Body::empty())
    .unwrap();
  let (_, body) = send(router(), req).await;
  assert!(body.contains("<html lang=\"it\">"));
}

#[tokio::test]
async fn preview_story() {
  let (status, body) = get("/_bricks/preview/hero-unit-2?story=horizontal-hero-dark").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<title>Horizontal Hero Dark</title>"));
  assert!(body.contains("bg-gray-800"));
  assert!(body.contains("text-lime-500"));
}

#[tokio::test]
async fn unknown_story_is_404() {
  let (status, body) = get("/_bricks/preview/hero-unit-2?story=missing").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn render_fragment_from_props() {
  let registry = brickyard_ui::website_registry().unwrap();
  let mut props = registry.default_props("hero-unit-2").unwrap();
  props["textGradient"] = json!("OCEAN");
  let req = Request::post("/_bricks/render/hero-unit-2")
    .header("content-type", "application/json")
    .body(Body::from(props.to_string()))
    .unwrap();
  let (status, body) = send(router(), req).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.starts_with("<section"));
  assert!(body.contains("-webkit-text-fill-color:transparent"));
}

#[tokio::test]
async fn render_rejects_bad_props() {
  let req = Request::post("/_bricks/render/hero-unit-2").body(Body::from("{\"title\": 1}")).unwrap();
  let (status, body) = send(router(), req).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body.contains("INVALID_PROPS"));

  let req = Request::post("/_bricks/render/hero-unit-2").body(Body::from("not json")).unwrap();
  let (status, _) = send(router(), req).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn serves_preview_images() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("hero-unit-2.png"), b"png").unwrap();
  let registry = brickyard_ui::website_registry().unwrap();
  let router = PreviewServer::new(registry, locales()).preview_images(dir.path()).into_axum_router();
  let req = Request::get("/bricks-preview-images/hero-unit-2.png").body(Body::empty()).unwrap();
  let (status, body) = send(router, req).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "png");
}
