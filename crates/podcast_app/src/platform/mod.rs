pub mod app;
mod config;
mod logging;
mod render;
