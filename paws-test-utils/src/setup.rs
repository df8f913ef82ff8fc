use paws::{
    config::Config,
    gateway::Gateway,
    listing::ListingState,
    model::{application::ApplicationDto, pet::PetDto},
    session::{MemoryStorage, SessionStore},
};

use crate::{error::TestError, fixtures::gateway::body::data_body};

/// State produced by [`crate::TestBuilder::build`].
pub struct TestSetup {
    pub storage: MemoryStorage,
    pub pets: Vec<PetDto>,
    pub applications: Vec<ApplicationDto>,
    pub config: Config,
}

impl TestSetup {
    /// Restore a session store from the shared storage, as a page load would.
    pub fn restore_session(&self) -> SessionStore<MemoryStorage> {
        SessionStore::restore(self.storage.clone())
    }

    pub fn gateway(&self, token: Option<&str>) -> Gateway {
        Gateway::new(self.config.api_base_url.clone(), token.map(str::to_string))
    }

    pub fn listing(&self) -> ListingState {
        ListingState::new(self.config.page_size)
    }

    /// The body `GET /pets` would answer with.
    pub fn pets_body(&self) -> Result<String, TestError> {
        data_body(&self.pets)
    }

    /// The body `GET /applications` would answer with.
    pub fn applications_body(&self) -> Result<String, TestError> {
        data_body(&self.applications)
    }
}
