//! Data models organized by entity.

pub mod property;
pub mod responses;
pub mod user;

pub use property::*;
pub use responses::*;
pub use user::*;
