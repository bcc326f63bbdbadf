pub mod config;
pub mod db;
pub mod discord;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notice;
pub mod organizer;
pub mod session;
pub mod state;
pub mod templates_structs;
