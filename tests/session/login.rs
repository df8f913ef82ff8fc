//! Tests for SessionStore::login and SessionStore::logout across reloads.

use paws::{
    error::storage::StorageError,
    session::{AuthorizationFlags, SESSION_USER_KEY},
};
use paws_test_utils::{constant::TEST_TOKEN, prelude::*};

/// Tests that a login followed by a reload keeps the same flags.
///
/// Expected: restored flags equal the flags right after login
#[test]
fn login_round_trips_through_reload() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let login = user_factory::mock_login_response(user_factory::mock_user(4, false));

    let mut store = test.restore_session();
    store.login(login.token.clone(), login.user.clone())?;
    let flags = store.flags();

    let reloaded = test.restore_session();

    assert_eq!(reloaded.flags(), flags);
    assert_eq!(reloaded.token(), Some(login.token.as_str()));

    Ok(())
}

/// Tests that logging out is not undone by a reload.
///
/// Expected: logged out before and after the reload
#[test]
fn logout_survives_reload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(user_factory::mock_user(5, true))
        .build()?;

    let mut store = test.restore_session();
    store.logout()?;

    assert_eq!(store.flags(), AuthorizationFlags::default());
    assert_eq!(test.restore_session().flags(), AuthorizationFlags::default());

    Ok(())
}

/// Tests a login whose profile cannot be persisted.
///
/// Expected: Err with the storage failure and nothing restorable afterwards
#[test]
fn failed_persist_leaves_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_key(SESSION_USER_KEY)
        .build()?;

    let mut store = test.restore_session();
    let result = store.login("abc".to_string(), user_factory::mock_user(6, true));

    assert!(matches!(result, Err(StorageError::Backend(_))));
    assert!(!store.is_logged_in());
    assert!(!test.restore_session().is_logged_in());

    Ok(())
}

/// Tests a re-login whose profile cannot be persisted over an existing session.
///
/// Expected: Err, and a reload still restores the earlier user and token
#[test]
fn failed_relogin_keeps_persisted_session() -> Result<(), TestError> {
    let previous = user_factory::mock_user(8, false);
    let test = TestBuilder::new()
        .with_session(previous.clone())
        .with_failing_key(SESSION_USER_KEY)
        .build()?;

    let mut store = test.restore_session();
    let result = store.login("fresh".to_string(), user_factory::mock_user(9, true));

    assert!(matches!(result, Err(StorageError::Backend(_))));
    assert_eq!(store.token(), Some(TEST_TOKEN));

    let reloaded = test.restore_session();
    assert_eq!(reloaded.token(), Some(TEST_TOKEN));
    assert_eq!(reloaded.user(), Some(&previous));
    assert!(!reloaded.is_admin());

    Ok(())
}
