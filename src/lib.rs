pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod model;
pub mod screens;
pub mod tui;
pub mod view;
