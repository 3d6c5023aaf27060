// Unit tests for AppState and Config

use mynotes_api::api::*;
use mynotes_api::store::{MemoryStore, NoteStore, UserStore};
use static_assertions::assert_impl_all;
use std::sync::Arc;

assert_impl_all!(AppState: Send, Sync, Clone);
assert_impl_all!(Config: Send, Sync, Clone);

#[test]
fn test_config_defaults_for_tests() {
    let config = Config::test_config();

    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.body_size_limit_bytes, 100 * 1024);
    assert!(config.database_url.is_none());
}

#[test]
fn test_app_state_shares_config() {
    let store = Arc::new(MemoryStore::new());
    let users: Arc<dyn UserStore> = store.clone();
    let notes: Arc<dyn NoteStore> = store;

    let app_state = AppState::new(Config::test_config(), users, notes);
    let cloned = app_state.clone();

    assert!(Arc::ptr_eq(&app_state.config, &cloned.config));
    assert!(Arc::ptr_eq(&app_state.tokens, &cloned.tokens));
}

#[test]
fn test_app_state_tokens_use_configured_secret() {
    let store = Arc::new(MemoryStore::new());
    let app_state = AppState::new(Config::test_config(), store.clone(), store);

    let user_id = uuid::Uuid::new_v4();
    let token = app_state.tokens.issue(user_id).unwrap();
    assert_eq!(app_state.tokens.verify(&token).unwrap(), user_id);
}
