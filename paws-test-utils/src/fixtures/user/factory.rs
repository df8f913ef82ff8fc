//! Factory functions for users and login responses.

use paws::model::user::{LoginResponseDto, UserDto};

use crate::constant::TEST_TOKEN;

/// Create a user profile with standard test values.
///
/// # Arguments
/// - `id` - User ID
/// - `is_admin` - Whether the user may open the dashboard
pub fn mock_user(id: i64, is_admin: bool) -> UserDto {
    UserDto {
        id,
        first_name: "Test".to_string(),
        last_name: format!("User {}", id),
        email: format!("user{}@paws.test", id),
        is_admin,
    }
}

/// Create the response `POST /login` returns for `user`.
pub fn mock_login_response(user: UserDto) -> LoginResponseDto {
    LoginResponseDto {
        user,
        token: TEST_TOKEN.to_string(),
    }
}
