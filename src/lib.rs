pub mod app;
pub mod command;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod input;
pub mod loading;
pub mod logging;
pub mod nav;
pub mod ui;
pub mod widgets;
