mod common;

use common::{Call, FetchBehavior, MockGateway, kitchen_questionnaire, store_with};
use questionnaire_cli::router::{Navigation, NavigationGuard, Route, RouteQuery};
use std::sync::Arc;

fn query(id: Option<&str>, mode: Option<&str>) -> RouteQuery {
    RouteQuery::new(id.map(str::to_string), mode.map(str::to_string))
}

#[tokio::test]
async fn test_guard_initializes_once() {
    let gateway = Arc::new(MockGateway::with_questionnaire(kitchen_questionnaire()));
    let mut store = store_with(&gateway);
    let guard = NavigationGuard::new();
    let q = query(Some("Q1"), None);

    assert_eq!(guard.before_each(&mut store, Route::Welcome, &q).await, Navigation::Proceed);
    assert!(store.is_initialized());
    assert!(!store.is_preview_mode());

    assert_eq!(guard.before_each(&mut store, Route::Question, &q).await, Navigation::Proceed);
    assert_eq!(guard.before_each(&mut store, Route::End, &q).await, Navigation::Proceed);

    assert_eq!(gateway.calls(), vec![Call::Fetch("Q1".to_string())]);
}

#[tokio::test]
async fn test_guard_reads_preview_mode_from_query() {
    let gateway = Arc::new(MockGateway::with_questionnaire(kitchen_questionnaire()));
    let mut store = store_with(&gateway);

    NavigationGuard::new()
        .before_each(&mut store, Route::Question, &query(Some("Q1"), Some("preview")))
        .await;
    assert!(store.is_preview_mode());

    let gateway = Arc::new(MockGateway::with_questionnaire(kitchen_questionnaire()));
    let mut store = store_with(&gateway);
    NavigationGuard::new()
        .before_each(&mut store, Route::Question, &query(Some("Q1"), Some("edit")))
        .await;
    assert!(!store.is_preview_mode());
}

#[tokio::test]
async fn test_guard_proceeds_and_retries_after_failure() {
    let gateway = Arc::new(MockGateway::new(FetchBehavior::ServerError));
    let mut store = store_with(&gateway);
    let guard = NavigationGuard::new();
    let q = query(None, None);

    assert_eq!(guard.before_each(&mut store, Route::Welcome, &q).await, Navigation::Proceed);
    assert!(!store.is_initialized());
    assert!(store.current_question().is_none());

    assert_eq!(guard.before_each(&mut store, Route::Question, &q).await, Navigation::Proceed);
    assert_eq!(gateway.calls().len(), 2);
}
