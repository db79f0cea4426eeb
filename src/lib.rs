// Library target for integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can reach the game core via `codetypr::game::*` / `codetypr::engine::*`.
// The terminal front end is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: the game core
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod game;

// Private: presentation layer
mod app;
mod event;
mod logging;
mod ui;
