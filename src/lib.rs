pub mod app;
pub mod cli;
pub mod config;
pub mod global;
pub mod light;
pub mod presence;
pub mod zoom;
