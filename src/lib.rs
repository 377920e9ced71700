pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod feeds;
pub mod logging;
pub mod poller;
pub mod state;
pub mod ui;
