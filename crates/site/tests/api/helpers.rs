use async_trait::async_trait;
use axum::Router;
use booo_site::{
    app,
    dom::ClientReveal,
    schedule::{EventListLoader, ScheduleError, ScheduleSource},
    AppState,
};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Source {}

    #[async_trait]
    impl ScheduleSource for Source {
        async fn read(&self) -> Result<Vec<u8>, ScheduleError>;
        fn location(&self) -> String;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(source: Arc<dyn ScheduleSource>) -> TestApp {
    let loader = EventListLoader::new(source).with_reveal(Arc::new(ClientReveal));

    let app_state = AppState {
        static_dir: "./static".to_string(),
        twitter_handle: "booo_games".to_string(),
        loader: Arc::new(loader),
    };

    TestApp {
        app: app(app_state),
    }
}

/// A source that answers every read with `body`
pub fn source_returning(body: &'static str) -> MockSource {
    let mut source = MockSource::new();
    source
        .expect_read()
        .times(1)
        .returning(move || Ok(body.as_bytes().to_vec()));
    source
        .expect_location()
        .returning(|| "schedule.json".to_string());
    source
}
