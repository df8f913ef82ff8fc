pub mod applications;
pub mod pets;

pub use applications::AdminApplications;
pub use pets::AdminPets;
