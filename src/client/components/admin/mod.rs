pub mod layout;
pub mod pet_form;

pub use layout::AdminLayout;
pub use pet_form::PetFormModal;
