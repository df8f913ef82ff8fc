//! Client for the pet adoption REST API.
//!
//! [`Gateway`] maps each resource operation onto one HTTP call and hands the raw
//! status and body to [`response`] for decoding. Failures come back as
//! [`GatewayError`] and are never retried.

pub mod generation;
pub mod response;

pub use generation::{RequestGeneration, RequestTicket};

use crate::error::gateway::GatewayError;

#[cfg(feature = "web")]
use dioxus_logger::tracing;
#[cfg(feature = "web")]
use serde::Serialize;

#[cfg(feature = "web")]
use crate::{
    error::Error,
    gateway::response::{decode_data, decode_login, decode_mutation},
    model::{
        application::{
            ApplicationDto, ApplicationPayload, ApplicationStatus, ApplicationStatusPayload,
        },
        pet::{BreedDto, PetDto, PetPayload, Species},
        user::{LoginDto, LoginResponseDto, SignupDto},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Handle onto the API for one caller, carrying its bearer token if logged in.
#[derive(Clone, Debug, PartialEq)]
pub struct Gateway {
    base_url: String,
    token: Option<String>,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn encode<T: serde::Serialize>(payload: &T) -> Result<String, GatewayError> {
        serde_json::to_string(payload).map_err(|e| GatewayError::Encode(e.to_string()))
    }
}

#[cfg(feature = "web")]
impl Gateway {
    async fn send(
        &self,
        verb: Verb,
        path: &str,
        body: Option<String>,
    ) -> Result<(u16, String), GatewayError> {
        use reqwasm::http::Request;

        let url = self.url(path);
        tracing::debug!(url = %url, "Sending {} request", verb.as_str());

        let mut request = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        if let Some(authorization) = self.authorization() {
            request = request.header("Authorization", &authorization);
        }
        if let Some(body) = body {
            request = request.header("Content-Type", "application/json").body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!(url = %url, status = %status, "{} request failed", verb.as_str());
        }

        Ok((status, text))
    }

    async fn send_json<T: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        payload: &T,
    ) -> Result<(u16, String), GatewayError> {
        let body = Self::encode(payload)?;
        self.send(verb, path, Some(body)).await
    }

    pub async fn list_pets(&self) -> Result<Vec<PetDto>, Error> {
        let (status, body) = self.send(Verb::Get, "/pets", None).await?;
        Ok(decode_data(status, &body)?)
    }

    pub async fn get_pet(&self, id: i64) -> Result<PetDto, Error> {
        let (status, body) = self.send(Verb::Get, &format!("/pets/{}", id), None).await?;
        Ok(decode_data(status, &body)?)
    }

    pub async fn list_breeds(&self, species: Species) -> Result<Vec<BreedDto>, Error> {
        let (status, body) = self.send(Verb::Get, species.breeds_path(), None).await?;
        Ok(decode_data(status, &body)?)
    }

    pub async fn create_pet(&self, payload: &PetPayload) -> Result<Option<PetDto>, Error> {
        let (status, body) = self.send_json(Verb::Post, "/pets", payload).await?;
        Ok(decode_mutation(status, &body)?)
    }

    pub async fn update_pet(&self, id: i64, payload: &PetPayload) -> Result<Option<PetDto>, Error> {
        let (status, body) = self
            .send_json(Verb::Put, &format!("/pets/{}", id), payload)
            .await?;
        Ok(decode_mutation(status, &body)?)
    }

    pub async fn delete_pet(&self, id: i64) -> Result<(), Error> {
        let (status, body) = self
            .send(Verb::Delete, &format!("/pets/{}", id), None)
            .await?;
        decode_mutation::<serde_json::Value>(status, &body)?;
        Ok(())
    }

    pub async fn list_applications(&self) -> Result<Vec<ApplicationDto>, Error> {
        let (status, body) = self.send(Verb::Get, "/applications", None).await?;
        Ok(decode_data(status, &body)?)
    }

    pub async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<Option<ApplicationDto>, Error> {
        let (status, body) = self
            .send_json(Verb::Post, "/applications", payload)
            .await?;
        Ok(decode_mutation(status, &body)?)
    }

    pub async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<Option<ApplicationDto>, Error> {
        let payload = ApplicationStatusPayload { status };
        let (code, body) = self
            .send_json(Verb::Put, &format!("/applications/{}", id), &payload)
            .await?;
        Ok(decode_mutation(code, &body)?)
    }

    pub async fn delete_application(&self, id: i64) -> Result<(), Error> {
        let (status, body) = self
            .send(Verb::Delete, &format!("/applications/{}", id), None)
            .await?;
        decode_mutation::<serde_json::Value>(status, &body)?;
        Ok(())
    }

    pub async fn login(&self, credentials: &LoginDto) -> Result<LoginResponseDto, Error> {
        let (status, body) = self.send_json(Verb::Post, "/login", credentials).await?;
        Ok(decode_login(status, &body)?)
    }

    pub async fn signup(&self, payload: &SignupDto) -> Result<(), Error> {
        let (status, body) = self.send_json(Verb::Post, "/signup", payload).await?;
        decode_mutation::<serde_json::Value>(status, &body)?;
        Ok(())
    }
}
