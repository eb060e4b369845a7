pub mod fortune;
pub mod user;

pub use fortune::{Category, Fortune, SavedFortune};
pub use user::User;
