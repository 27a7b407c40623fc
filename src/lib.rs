#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

#[macro_use]
extern crate tracing;

pub mod actions;
pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod maud_conveniences;
pub mod render;
pub mod routes;
pub mod state;
pub mod viewer;
