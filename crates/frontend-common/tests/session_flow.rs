//! End-to-end session behavior of the application shell against a mock backend

use petcare_frontend_common::{App, AppConfig, AppError, AuthConfig, MemoryStorage, Storage};
use petcare_http::types::{LoginRequest, PetQuery};
use petcare_http::{ClientError, Notifier};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn admin_json() -> Value {
    json!({
        "id": 1,
        "username": "admin",
        "email": "admin@example.com",
        "real_name": "Administrator",
        "role": "admin",
        "is_active": true
    })
}

fn app_for(server: &MockServer, storage: &Arc<MemoryStorage>) -> (App, Arc<RecordingNotifier>) {
    let mut config = AppConfig::default();
    config.api.base_url = server.uri();
    let notifier = Arc::new(RecordingNotifier::default());
    let app = App::new(&config, storage.clone(), notifier.clone()).unwrap();
    (app, notifier)
}

fn signed_in_storage(token: &str) -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item(AuthConfig::TOKEN_KEY, token).unwrap();
    storage
        .set_item(AuthConfig::USER_KEY, &admin_json().to_string())
        .unwrap();
    storage
}

#[tokio::test]
async fn test_login_commits_session_and_goes_home() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "data": {
                "access_token": "fresh-token",
                "token_type": "bearer",
                "user": admin_json()
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    let (app, _) = app_for(&server, &storage);

    let logged_in = app.login(&LoginRequest::new("admin", "secret")).await.unwrap();

    assert!(logged_in);
    assert_eq!(app.session().token(), "fresh-token");
    assert_eq!(app.session().user().unwrap().username, "admin");
    assert_eq!(
        storage.get_item(AuthConfig::TOKEN_KEY).as_deref(),
        Some("fresh-token")
    );
    assert!(storage.get_item(AuthConfig::USER_KEY).is_some());
    assert_eq!(app.current_route().unwrap().path, "/dashboard");
}

#[tokio::test]
async fn test_login_without_payload_leaves_session_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200, "msg": "ok"})))
        .mount(&server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    let (app, _) = app_for(&server, &storage);

    let logged_in = app.login(&LoginRequest::new("admin", "secret")).await.unwrap();

    assert!(!logged_in);
    assert!(!app.session().is_authenticated());
    assert_eq!(storage.get_item(AuthConfig::TOKEN_KEY), None);
    assert_eq!(app.current_route(), None);
}

#[tokio::test]
async fn test_rejected_login_is_notified_and_not_committed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 400,
            "msg": "Incorrect username or password"
        })))
        .mount(&server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    let (app, notifier) = app_for(&server, &storage);

    let error = app
        .login(&LoginRequest::new("admin", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        AppError::Client(ClientError::Business { code: Some(400), .. })
    ));
    assert!(!app.session().is_authenticated());
    assert_eq!(
        *notifier.messages.lock().unwrap(),
        vec!["Incorrect username or password".to_string()]
    );
}

#[tokio::test]
async fn test_fetch_user_info_refreshes_profile() {
    let server = MockServer::start().await;
    let mut updated = admin_json();
    updated["real_name"] = json!("Head Administrator");
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer stored-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 200, "data": updated})),
        )
        .mount(&server)
        .await;

    let storage = signed_in_storage("stored-token");
    let (app, _) = app_for(&server, &storage);

    let user = app.fetch_user_info().await.unwrap().unwrap();

    assert_eq!(user.real_name.as_deref(), Some("Head Administrator"));
    assert_eq!(
        app.session().user().unwrap().real_name.as_deref(),
        Some("Head Administrator")
    );
    let stored: Value =
        serde_json::from_str(&storage.get_item(AuthConfig::USER_KEY).unwrap()).unwrap();
    assert_eq!(stored["real_name"], "Head Administrator");
}

#[tokio::test]
async fn test_expired_token_tears_down_session_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&server)
        .await;

    let storage = signed_in_storage("stale-token");
    let (app, notifier) = app_for(&server, &storage);
    app.navigate("/pets").unwrap();

    let error = app
        .with_session_handling(app.client().list_pets(&PetQuery::default()))
        .await
        .unwrap_err();

    assert!(error.is_auth_expired());
    assert!(!app.session().is_authenticated());
    assert_eq!(app.session().user(), None);
    assert_eq!(storage.get_item(AuthConfig::TOKEN_KEY), None);
    assert_eq!(storage.get_item(AuthConfig::USER_KEY), None);
    assert_eq!(app.current_route().unwrap().path, "/login");
    assert_eq!(notifier.messages.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_session_events_drain_after_direct_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let storage = signed_in_storage("stale-token");
    let (app, _) = app_for(&server, &storage);
    app.navigate("/dashboard").unwrap();

    let first = app.client().dashboard_stats();
    let second = app.client().dashboard_stats();
    let (first, second) = tokio::join!(first, second);
    assert!(first.unwrap_err().is_auth_expired());
    assert!(second.unwrap_err().is_auth_expired());

    assert_eq!(app.current_route().unwrap().path, "/dashboard");
    assert_eq!(app.process_session_events(), 2);
    assert_eq!(app.current_route().unwrap().path, "/login");
    assert_eq!(app.process_session_events(), 0);
}

#[tokio::test]
async fn test_logout_stops_sending_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {"items": [], "total": 0, "page": 1, "size": 10}
        })))
        .mount(&server)
        .await;

    let storage = signed_in_storage("abc");
    let (app, _) = app_for(&server, &storage);
    app.navigate("/pets").unwrap();

    app.logout();
    assert_eq!(app.current_route().unwrap().path, "/login");
    assert_eq!(storage.get_item(AuthConfig::TOKEN_KEY), None);

    app.client().list_pets(&PetQuery::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_guard_follows_session_state() {
    let server = MockServer::start().await;
    let storage = Arc::new(MemoryStorage::new());
    let (app, _) = app_for(&server, &storage);

    assert_eq!(app.navigate("/orders").unwrap().path, "/login");

    app.session().set_token("abc");
    assert_eq!(app.navigate("/login").unwrap().path, "/dashboard");
    assert_eq!(app.navigate("/orders").unwrap().path, "/orders");
    assert!(matches!(
        app.navigate("/missing"),
        Err(AppError::Navigation(_))
    ));
}

#[tokio::test]
async fn test_open_uses_file_storage() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.api.base_url = server.uri();
    config.storage.path = dir.path().join("session.json");

    let app = App::open(&config, Arc::new(RecordingNotifier::default())).unwrap();
    app.session().set_token("persisted");
    drop(app);

    let reopened = App::open(&config, Arc::new(RecordingNotifier::default())).unwrap();
    assert_eq!(reopened.session().token(), "persisted");
}
