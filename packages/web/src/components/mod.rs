//! Reusable UI components

mod layout;
mod loading;
mod member_card;
mod member_roster;

pub use layout::*;
pub use loading::*;
pub use member_card::*;
pub use member_roster::*;
