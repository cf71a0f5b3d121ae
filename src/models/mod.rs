// Data models for users, plans and the program log

pub mod plan;
pub mod user;

pub use plan::*;
pub use user::*;
