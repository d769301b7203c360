// Library surface for headless/integration tests and reuse.
// The binary builds on this crate; bin-only wiring (CLI, terminal
// lifecycle) lives in main.rs.
pub mod anim;
pub mod config;
pub mod input;
pub mod playfield;
pub mod runtime;
pub mod screen;
pub mod session;
pub mod ui;
pub mod util;
