pub mod auth;
pub mod authorization;
pub mod finance_service;
pub mod report_service;
pub mod user_service;
