//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;

mod auth_form;
pub use auth_form::{field, AuthForm, AuthMode, FieldValue};

mod session;
pub use session::{submit_admin_login, submit_admin_logout, use_admin_session, SessionProvider};

mod tool_card;
pub use tool_card::{StarRating, ToolCard};

mod view_mode;
pub use view_mode::ViewMode;

mod filters;
pub use filters::FilterPanel;

mod notice;
pub use notice::Notice;
