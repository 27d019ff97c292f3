pub mod config;
pub mod content;
pub mod errors;
pub mod routes;
pub mod state;
