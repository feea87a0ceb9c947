//! Client SDK for a uibridge application server.

pub mod client;

pub use client::{AppClient, Manifest};
