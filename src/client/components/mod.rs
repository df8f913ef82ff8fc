pub mod admin;
pub mod confirm_modal;
pub mod fields;
pub mod loading;
pub mod navbar;
pub mod outcome_modal;
pub mod page;
pub mod pagination;
pub mod pet_card;
pub mod pet_filters;
pub mod title;

pub use confirm_modal::ConfirmModal;
pub use fields::{SelectField, TextAreaField, TextField};
pub use loading::Loading;
pub use navbar::Navbar;
pub use outcome_modal::OutcomeModal;
pub use page::Page;
pub use pagination::Pagination;
pub use pet_card::PetCard;
pub use pet_filters::PetFilters;
pub use title::PawsTitleButton;
