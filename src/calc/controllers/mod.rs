//! # Controllers Module
//!
//! Application-level controllers that own the event loop.

pub mod app_controller;

pub use app_controller::AppController;
