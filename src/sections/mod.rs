//! The page's content sections, in document order.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod projects;
