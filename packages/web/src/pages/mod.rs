//! Pages

mod not_found;
mod organization_detail;
mod organizations;

pub use not_found::*;
pub use organization_detail::*;
pub use organizations::*;
