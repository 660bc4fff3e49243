//! Login, session verification and logout

use cirqulofit::api::Gender;
use cirqulofit::auth::{self, SessionStatus, SessionToken, TokenStore};
use cirqulofit::stats::{FileStatsCache, HydrationSource, StatsCache, StatsStore};
use tempfile::tempdir;

use crate::common::{
    client_for, unreachable_base_url, FakeBackend, Route, REMOTE_SUMMARY, STATS_PATH, USER,
};

const LOGIN_PATH: &str = "/api/auth/login-json";
const ME_PATH: &str = "/api/auth/me";

#[test]
fn test_login_stores_token_and_authenticates() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![
        Route::json(
            "POST",
            LOGIN_PATH,
            200,
            r#"{"access_token":"jwt-123","token_type":"bearer"}"#,
        ),
        Route::json("GET", ME_PATH, 200, USER),
    ]);
    let tokens = TokenStore::in_dir(dir.path());

    let logged_in = auth::login(&backend.client(), &tokens, "ana@example.com", "secret").unwrap();

    assert_eq!(logged_in.user.email, "ana@example.com");
    assert_eq!(tokens.load().unwrap().as_str(), "jwt-123");

    let requests = backend.requests();
    let login = requests.iter().find(|r| r.url == LOGIN_PATH).unwrap();
    let body: serde_json::Value = serde_json::from_str(&login.body).unwrap();
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["password"], "secret");
    assert!(login.authorization.is_none());

    let me = requests.iter().find(|r| r.url == ME_PATH).unwrap();
    assert_eq!(me.authorization.as_deref(), Some("Bearer jwt-123"));
}

#[test]
fn test_login_failure_keeps_no_token() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json(
        "POST",
        LOGIN_PATH,
        401,
        r#"{"detail":"Incorrect email or password"}"#,
    )]);
    let tokens = TokenStore::in_dir(dir.path());

    let err = auth::login(&backend.client(), &tokens, "ana@example.com", "wrong").unwrap_err();

    assert!(format!("{err:#}").contains("Incorrect email or password"));
    assert!(tokens.load().is_none());
}

#[test]
fn test_register_reports_validation_errors() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json(
        "POST",
        "/api/auth/register",
        422,
        r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#,
    )]);
    let tokens = TokenStore::in_dir(dir.path());

    let err = auth::register(
        &backend.client(),
        &tokens,
        "Ana",
        "not-an-email",
        "secret",
        Gender::Female,
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("value is not a valid email address"));
    let body: serde_json::Value = serde_json::from_str(&backend.requests()[0].body).unwrap();
    assert_eq!(body["gender"], "female");
}

#[test]
fn test_rejected_token_is_removed() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json(
        "GET",
        ME_PATH,
        401,
        r#"{"detail":"Could not validate credentials"}"#,
    )]);
    let tokens = TokenStore::in_dir(dir.path());
    tokens.save(&SessionToken::new("expired").unwrap()).unwrap();

    let status = auth::verify_session(&backend.client(), &tokens);

    assert!(matches!(status, SessionStatus::Anonymous));
    assert!(tokens.load().is_none());
}

#[test]
fn test_valid_token_is_verified() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json("GET", ME_PATH, 200, USER)]);
    let tokens = TokenStore::in_dir(dir.path());
    tokens.save(&SessionToken::new("good").unwrap()).unwrap();

    match auth::verify_session(&backend.client(), &tokens) {
        SessionStatus::Verified { token, user } => {
            assert_eq!(token.as_str(), "good");
            assert_eq!(user.name, "Ana");
        }
        other => panic!("unexpected status: {other:?}"),
    }
}

#[test]
fn test_offline_start_keeps_token() {
    let dir = tempdir().unwrap();
    let tokens = TokenStore::in_dir(dir.path());
    tokens.save(&SessionToken::new("good").unwrap()).unwrap();

    let status = auth::verify_session(&client_for(&unreachable_base_url(), 2), &tokens);

    assert!(matches!(status, SessionStatus::Unverified { .. }));
    assert_eq!(tokens.load().unwrap().as_str(), "good");
}

#[test]
fn test_no_token_is_anonymous() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![]);
    let status = auth::verify_session(&backend.client(), &TokenStore::in_dir(dir.path()));

    assert!(matches!(status, SessionStatus::Anonymous));
    assert!(backend.requests().is_empty());
}

#[test]
fn test_logout_tears_down_store() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json("GET", STATS_PATH, 200, REMOTE_SUMMARY)]);
    let tokens = TokenStore::in_dir(dir.path());
    let token = SessionToken::new("good").unwrap();
    tokens.save(&token).unwrap();

    let mut store = StatsStore::new(FileStatsCache::in_dir(dir.path()));
    assert_eq!(
        store.hydrate(Some(&token), &backend.client()),
        HydrationSource::Remote
    );
    assert!(store.engine().cache().read().is_some());

    auth::logout(&tokens, &mut store).unwrap();

    assert!(tokens.load().is_none());
    assert!(store.engine().cache().read().is_none());
    assert!(!store.is_ready());
    assert_eq!(store.stats().xp, 0);
    assert_eq!(store.stats().unlocked_count(), 0);
}
