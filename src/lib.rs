//! Ichabod - image transform server
//!
//! Serves a directory of images and runs pixel-kernels commands on them
//! over HTTP. This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
