use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    model::api::flag,
    validation::{check_email, check_password, normalize_phone, FieldErrors},
};

pub const DEFAULT_COUNTRY_CODE: &str = "60";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_admin: bool,
}

impl UserDto {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Credentials sent to `POST /login`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Successful login response, not wrapped in the usual data envelope
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponseDto {
    pub user: UserDto,
    pub token: String,
}

/// Raw input of the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginDto, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }

        Ok(LoginDto {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Body of `POST /signup`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub first_name: String,
    pub last_name: String,
    /// Dial code without the leading `+`
    pub country_code: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

/// Raw input of the signup form.
#[derive(Clone, Debug, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub country_code: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupDto, ValidationError> {
        let mut errors = FieldErrors::new();

        if self.first_name.trim().is_empty() {
            errors.required("first_name", "First Name");
        }
        if self.last_name.trim().is_empty() {
            errors.required("last_name", "Last Name");
        }

        let country_code = self.country_code.trim().trim_start_matches('+');
        if country_code.is_empty() || !country_code.chars().all(|c| c.is_ascii_digit()) {
            errors.push("country_code", "Select a country code.");
        }

        let phone_number = match normalize_phone(&self.phone_number) {
            Ok(phone) => phone,
            Err(message) => {
                errors.push("phone_number", message);
                String::new()
            }
        };

        if let Err(message) = check_email(&self.email) {
            errors.push("email", message);
        }
        if let Err(message) = check_password(&self.password) {
            errors.push("password", message);
        }

        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors));
        }

        Ok(SignupDto {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            country_code: country_code.to_string(),
            phone_number,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
