//! API route handlers, one module per view of the command system

pub mod advisories;
pub mod assistant;
pub mod auth;
pub mod dashboard;
pub mod forecast;
pub mod health;
pub mod hospitals;
pub mod map;
