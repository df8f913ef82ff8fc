//! Declarative test setup.
//!
//! Queue data and persisted state on a [`TestBuilder`] and finalize it with
//! [`TestBuilder::build`] to get a [`TestSetup`].

use paws::{
    config::Config,
    model::{application::ApplicationDto, pet::PetDto, user::UserDto},
    session::{storage::KeyValueStore, MemoryStorage, SessionStore},
};

use crate::{
    constant::{TEST_API_URL, TEST_PAGE_SIZE, TEST_TOKEN},
    error::TestError,
    fixtures::pet::factory::mock_pets,
    setup::TestSetup,
};

pub struct TestBuilder {
    pets: Vec<PetDto>,
    applications: Vec<ApplicationDto>,
    session_user: Option<UserDto>,
    raw_entries: Vec<(String, String)>,
    failing_key: Option<String>,
    page_size: usize,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            pets: Vec::new(),
            applications: Vec::new(),
            session_user: None,
            raw_entries: Vec::new(),
            failing_key: None,
            page_size: TEST_PAGE_SIZE,
        }
    }

    pub fn with_pets(mut self, pets: Vec<PetDto>) -> Self {
        self.pets.extend(pets);
        self
    }

    /// Add `count` generated pets, see [`mock_pets`].
    pub fn with_mock_pets(self, count: usize) -> Self {
        self.with_pets(mock_pets(count))
    }

    pub fn with_applications(mut self, applications: Vec<ApplicationDto>) -> Self {
        self.applications.extend(applications);
        self
    }

    /// Persist a logged in session for `user` before the test starts.
    pub fn with_session(mut self, user: UserDto) -> Self {
        self.session_user = Some(user);
        self
    }

    /// Write `value` under `key` as-is, bypassing the session store.
    pub fn with_raw_entry(mut self, key: &str, value: &str) -> Self {
        self.raw_entries.push((key.to_string(), value.to_string()));
        self
    }

    /// Make writes to `key` fail once the setup is built.
    pub fn with_failing_key(mut self, key: &str) -> Self {
        self.failing_key = Some(key.to_string());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn build(self) -> Result<TestSetup, TestError> {
        let storage = match &self.failing_key {
            Some(key) => MemoryStorage::with_failing_key(key),
            None => MemoryStorage::new(),
        };

        // Seed through a handle that never fails so setup isn't affected by
        // the failing key.
        let mut seed = storage.healthy();

        if let Some(user) = self.session_user {
            SessionStore::restore(seed.clone()).login(TEST_TOKEN.to_string(), user)?;
        }
        for (key, value) in &self.raw_entries {
            seed.set(key, value)?;
        }

        Ok(TestSetup {
            storage,
            pets: self.pets,
            applications: self.applications,
            config: Config {
                api_base_url: TEST_API_URL.to_string(),
                page_size: self.page_size,
            },
        })
    }
}
