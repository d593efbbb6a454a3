//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{OrganizationDetail, Organizations, PageNotFound};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Organizations {},

        #[route("/organizations/:id")]
        OrganizationDetail { id: String },

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}
