pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pet_details;
pub mod pets;
pub mod signup;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use pet_details::PetDetails;
pub use pets::Pets;
pub use signup::Signup;
