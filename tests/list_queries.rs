use std::io;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use football_teams_api::{app, Database};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

// Collects formatted log lines written by the fmt subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

async fn status_of(app: axum::Router, uri: &str) -> StatusCode {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

// The default #[tokio::test] runtime is single-threaded, so the thread-local
// subscriber sees every event the handler emits.
#[tokio::test]
async fn failed_count_skips_the_data_query() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let db = Database::new(pool);
    let app = app(db.clone());

    // No table yet: the count fails and the fetch never runs
    assert_eq!(status_of(app.clone(), "/teams").await, StatusCode::INTERNAL_SERVER_ERROR);
    let output = logs.contents();
    assert!(output.contains("Counting teams"), "{output}");
    assert!(!output.contains("Fetching teams"), "{output}");

    sqlx::query(
        r#"CREATE TABLE football (
               id INTEGER PRIMARY KEY,
               team_name TEXT NOT NULL,
               stadium TEXT NOT NULL,
               next_game TEXT,
               team_url TEXT NOT NULL
           )"#,
    )
    .execute(db.pool())
    .await
    .unwrap();
    logs.clear();

    assert_eq!(status_of(app, "/teams").await, StatusCode::OK);
    let output = logs.contents();
    assert!(output.contains("Counting teams"), "{output}");
    assert!(output.contains("Fetching teams"), "{output}");
}
