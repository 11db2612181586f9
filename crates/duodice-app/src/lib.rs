//! Shared library module for the Duodice app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::DuodiceApp;

pub mod action;
pub mod action_handler;
pub mod app;
pub mod game_factory;
pub mod haptics;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
