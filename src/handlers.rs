pub mod auth;
pub mod companies;
pub mod events;
pub mod finance;
pub mod partners;
pub mod reports;
pub mod users;
