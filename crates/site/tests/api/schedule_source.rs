use booo_site::schedule::{
    EventListLoader, HttpScheduleSource, ScheduleError, ScheduleOutcome, ScheduleSource,
};
use std::{sync::Arc, time::Duration};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const ONE_EVENT: &str = r#"{"events":[{"title":"定例会","status":"募集中","date":"6/15","time":"13:00","venue":"渋谷","capacity":12,"fee":"500円"}]}"#;

async fn serve_schedule(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schedule.json"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn http_source_returns_body() {
    let server = serve_schedule(ResponseTemplate::new(200).set_body_string(ONE_EVENT)).await;
    let url = format!("{}/schedule.json", server.uri());

    let source = HttpScheduleSource::new(&url, None).unwrap();
    let body = source.read().await.unwrap();

    assert_eq!(body, ONE_EVENT.as_bytes());
    assert_eq!(source.location(), url);
}

#[tokio::test]
async fn http_source_maps_not_found_to_status_error() {
    let server = serve_schedule(ResponseTemplate::new(404)).await;
    let url = format!("{}/schedule.json", server.uri());

    let source = HttpScheduleSource::new(&url, None).unwrap();
    match source.read().await {
        Err(ScheduleError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = serve_schedule(
        ResponseTemplate::new(200)
            .set_body_string(ONE_EVENT)
            .set_delay(Duration::from_millis(500)),
    )
    .await;
    let url = format!("{}/schedule.json", server.uri());

    let source = HttpScheduleSource::new(&url, Some(Duration::from_millis(50))).unwrap();
    assert!(matches!(
        source.read().await,
        Err(ScheduleError::Timeout { .. })
    ));
}

#[tokio::test]
async fn loader_parses_remote_schedule() {
    let server = serve_schedule(ResponseTemplate::new(200).set_body_string(ONE_EVENT)).await;
    let url = format!("{}/schedule.json", server.uri());

    let source = HttpScheduleSource::new(&url, None).unwrap();
    let loader = EventListLoader::new(Arc::new(source));

    match loader.fetch().await {
        ScheduleOutcome::Events(events) => {
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].title, "定例会");
        }
        other => panic!("expected events, got {:?}", other),
    }
}

#[tokio::test]
async fn loader_reports_invalid_remote_json_as_parse_failure() {
    let server = serve_schedule(ResponseTemplate::new(200).set_body_string("<html>")).await;
    let url = format!("{}/schedule.json", server.uri());

    let loader = EventListLoader::new(Arc::new(HttpScheduleSource::new(&url, None).unwrap()));

    assert!(matches!(
        loader.fetch().await,
        ScheduleOutcome::Failed(ScheduleError::Parse(_))
    ));
}
