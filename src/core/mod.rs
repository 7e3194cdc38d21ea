pub mod app;
pub mod backend;
pub mod config;
pub mod message;
pub mod paths;
pub mod session;
pub mod text;
pub mod transcript;
pub mod welcome;
