use crate::helpers::{source_returning, spawn_app, MockSource};
use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use booo_site::schedule::ScheduleError;
use hyper::{header, Method};
use std::sync::Arc;
use tower::ServiceExt;

const TWO_EVENTS: &str = r#"{
  "events": [
    {
      "title": "第12回 Booo! GAMES",
      "status": "募集中",
      "date": "2024年6月15日（土）",
      "time": "13:00〜18:00",
      "venue": "渋谷区民会館",
      "capacity": 20,
      "fee": "1,000円",
      "description": "初心者歓迎の定例会です。",
      "twiplaUrl": "https://twipla.jp/events/123"
    },
    {
      "title": "夏のボドゲ合宿",
      "status": "planned",
      "date": "2024年8月10日（土）",
      "time": "10:00〜",
      "venue": "未定",
      "capacity": "未定",
      "fee": "未定"
    }
  ]
}"#;

async fn get_html(app: axum::Router, uri: &str) -> (hyper::StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("Failed to execute request.");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// The landing page carries the events container without reading the schedule
#[tokio::test]
async fn home_page_contains_loading_events_container() {
    let mut source = MockSource::new();
    source.expect_read().never();

    let test_app = spawn_app(Arc::new(source)).await;
    let (status, html) = get_html(test_app.app.clone(), "/").await;

    assert!(status.is_success());
    assert!(html.contains(r#"id="upcoming-events""#));
    assert!(html.contains(r#"hx-get="/fragments/events""#));
    assert!(html.contains("スケジュールを読み込み中..."));
}

#[tokio::test]
async fn events_fragment_renders_cards_in_order() {
    let test_app = spawn_app(Arc::new(source_returning(TWO_EVENTS))).await;
    let (status, html) = get_html(test_app.app.clone(), "/fragments/events").await;

    assert!(status.is_success());
    assert_eq!(html.matches(r#"class="event-card "#).count(), 2);
    let first = html.find("第12回 Booo! GAMES").unwrap();
    let second = html.find("夏のボドゲ合宿").unwrap();
    assert!(first < second);

    assert!(html.contains(r#"href="https://twipla.jp/events/123""#));
    assert!(html.contains("近日公開予定"));
    assert_eq!(html.matches("event-description").count(), 1);
    // Icons are rendered inline on the server
    assert!(!html.contains("data-lucide=\"calendar\""));
    assert!(html.contains("lucide-calendar"));
}

#[tokio::test]
async fn events_fragment_renders_empty_state() {
    let test_app = spawn_app(Arc::new(source_returning(r#"{"events": []}"#))).await;
    let (status, html) = get_html(test_app.app.clone(), "/fragments/events").await;

    assert!(status.is_success());
    assert!(html.contains("現在、開催予定のイベントはありません。"));
    assert!(!html.contains("event-card"));
}

#[tokio::test]
async fn events_fragment_renders_error_block_on_failure() {
    let mut source = MockSource::new();
    source.expect_read().times(1).returning(|| {
        Err(ScheduleError::Status {
            location: "https://example.com/schedule.json".to_string(),
            status: 404,
        })
    });
    source
        .expect_location()
        .returning(|| "https://example.com/schedule.json".to_string());

    let test_app = spawn_app(Arc::new(source)).await;
    let (status, html) = get_html(test_app.app.clone(), "/fragments/events").await;

    assert!(status.is_success());
    assert!(html.contains("スケジュールの読み込みに失敗しました。"));
    assert!(!html.contains("event-card"));
    assert!(!html.contains("404"));
}

#[tokio::test]
async fn events_fragment_treats_malformed_json_as_failure() {
    let test_app = spawn_app(Arc::new(source_returning("{ not json"))).await;
    let (_, html) = get_html(test_app.app.clone(), "/fragments/events").await;

    assert!(html.contains("events-error"));
}

/// Card delays only matter if the served stylesheet animates revealed cards
#[tokio::test]
async fn card_delays_drive_the_stylesheet_animation() {
    let test_app = spawn_app(Arc::new(source_returning(TWO_EVENTS))).await;

    let (_, fragment) = get_html(test_app.app.clone(), "/fragments/events").await;
    assert!(fragment.contains("animation-delay: 0ms"));
    assert!(fragment.contains("animation-delay: 100ms"));

    let (status, css) = get_html(test_app.app.clone(), "/static/styles.css").await;
    assert!(status.is_success());
    assert!(css.contains("@keyframes card-reveal"));
    assert!(css.contains(".event-card.revealed"));
    assert!(css.contains("animation-name: card-reveal"));
}
