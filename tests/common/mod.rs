//! Shared infrastructure for end-to-end tests.

#![allow(dead_code)] // Not every test binary uses every helper.

pub mod client;
pub mod constants;
pub mod server;

pub use client::TestClient;
pub use constants::*;
pub use fixtures::*;
pub use server::TestServer;
