//! Client-side behavior layer for the invoice tracker.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! pages as a progressive-enhancement script. It owns the small interactive
//! behaviors the pages need — theme persistence and toggling, debounced
//! incremental search, form-submission guarding, alert dismissal, and the
//! rest of the page glue — while the server keeps rendering all markup.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure state models: theme resolution, submission guard, search matching, feature catalog |
//! | [`util`] | Browser-free helpers: single-slot debouncer, display formatting |
//! | [`consts`] | Shared timing constants and DOM contract strings |
//! | `dom` | Browser wiring (behind the `hydrate` feature) |
//! | `boot` | WASM entry point attaching every behavior (behind `hydrate`) |
//!
//! Everything under [`state`] and [`util`] compiles and tests on a native
//! target; the `hydrate` feature pulls in `wasm-bindgen`, `web-sys`, and the
//! `gloo` crates for the browser shell.

pub mod consts;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;
