use dioxus::prelude::*;

use crate::client::{
    components::{admin::AdminLayout, Navbar},
    routes::{
        admin::{AdminApplications, AdminPets},
        Home, Login, NotFound, PetDetails, Pets, Signup,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

        #[route("/")]
        Home {},

        #[route("/pets")]
        Pets {},

        #[route("/pets/:id")]
        PetDetails { id: i64 },

        #[route("/login")]
        Login {},

        #[route("/signup")]
        Signup {},

        #[nest("/dashboard")]

            #[layout(AdminLayout)]

            #[route("/pets")]
            AdminPets {},

            #[route("/applications")]
            AdminApplications {},

            #[end_layout]

        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
