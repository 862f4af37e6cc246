//! fastlike library: application logic for the wildcard matcher CLI.

pub mod app;
pub mod config;
pub mod corpus;
pub mod errors;
pub mod output;
pub mod presenter;
