//! Tests for SessionStore::restore.
//!
//! Verifies that a persisted session survives a reload with the same
//! authorization flags and that anything malformed or partial restores as
//! logged out without leaving stale keys behind.

use paws::session::{AuthorizationFlags, SESSION_TOKEN_KEY, SESSION_USER_KEY};
use paws_test_utils::prelude::*;

/// Tests restoring an admin session written before the reload.
///
/// Expected: logged in as admin with the persisted token and profile
#[test]
fn restores_admin_session() -> Result<(), TestError> {
    let user = user_factory::mock_user(1, true);
    let test = TestBuilder::new().with_session(user.clone()).build()?;

    let store = test.restore_session();

    assert_eq!(
        store.flags(),
        AuthorizationFlags {
            is_logged_in: true,
            is_admin: true
        }
    );
    assert_eq!(store.user(), Some(&user));
    assert!(store.token().is_some());

    Ok(())
}

/// Tests restoring a profile whose admin flag was persisted as a string.
///
/// Expected: the string flag is honoured
#[test]
fn restores_string_admin_flag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_entry(SESSION_TOKEN_KEY, "abc")
        .with_raw_entry(
            SESSION_USER_KEY,
            r#"{"id": 3, "first_name": "Ana", "last_name": "Lim", "email": "ana@paws.test", "is_admin": "true"}"#,
        )
        .build()?;

    let store = test.restore_session();

    assert!(store.is_admin());

    Ok(())
}

/// Tests restoring a profile that is not valid JSON.
///
/// Expected: logged out, no panic, both keys removed
#[test]
fn malformed_profile_is_logged_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_entry(SESSION_TOKEN_KEY, "abc")
        .with_raw_entry(SESSION_USER_KEY, "{\"id\": ")
        .build()?;

    let store = test.restore_session();

    assert_eq!(store.flags(), AuthorizationFlags::default());
    assert!(test.storage.is_empty());

    Ok(())
}

/// Tests restoring a profile without a token next to it.
///
/// Expected: logged out
#[test]
fn profile_without_token_is_logged_out() -> Result<(), TestError> {
    let user = user_factory::mock_user(2, false);
    let test = TestBuilder::new()
        .with_raw_entry(SESSION_USER_KEY, &serde_json::to_string(&user)?)
        .build()?;

    let store = test.restore_session();

    assert!(!store.is_logged_in());

    Ok(())
}
