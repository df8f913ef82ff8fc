pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::{application::factory as application_factory, gateway::body, pet::factory as pet_factory, user::factory as user_factory},
        TestBuilder, TestError, TestSetup,
    };
}
