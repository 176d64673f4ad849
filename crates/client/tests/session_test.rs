use bedbet_client::session::SessionState;
use bedbet_core::models::user::{Session, User};
use pretty_assertions::assert_eq;

fn session(coin: i64) -> Session {
    Session {
        user: User {
            name: "Dozer".to_string(),
            email: "dozer@example.com".to_string(),
            bank: "KB".to_string(),
            account_number: "000-111".to_string(),
            coin,
        },
        token: "abc".to_string(),
    }
}

#[tokio::test]
async fn test_establish_and_clear() {
    let state = SessionState::new();
    assert!(!state.is_active().await);

    state.establish(session(10)).await;
    assert!(state.is_active().await);
    assert_eq!(state.current().await.unwrap().user.coin, 10);

    state.clear().await;
    assert!(!state.is_active().await);
    assert!(state.current().await.is_none());
}

#[tokio::test]
async fn test_clones_share_state() {
    let state = SessionState::new();
    let other = state.clone();

    state.establish(session(10)).await;

    assert!(other.is_active().await);
}

#[tokio::test]
async fn test_snapshots_survive_replacement() {
    let state = SessionState::new();
    state.establish(session(10)).await;
    let before = state.current().await.unwrap();

    let after = state
        .replace_with(|current| current.with_coin(99))
        .await
        .expect("active session");

    assert_eq!(before.user.coin, 10);
    assert_eq!(after.user.coin, 99);
    assert_eq!(state.current().await.unwrap().user.coin, 99);
}

#[tokio::test]
async fn test_replace_without_session_is_noop() {
    let state = SessionState::new();

    let replaced = state.replace_with(|current| current.with_coin(99)).await;

    assert!(replaced.is_none());
    assert!(!state.is_active().await);
}
