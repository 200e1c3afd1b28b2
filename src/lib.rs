//! Structural health monitoring demo for a cable-stayed bridge:
//! an egui dashboard and an axum scoring service built from one
//! shared data layer and one fixed outlier model.

pub mod app;
pub mod client;
pub mod config;
pub mod data;
pub mod detect;
pub mod server;
pub mod state;
pub mod ui;
