//! Pure, browser-free state models.
//!
//! DESIGN
//! ======
//! Every behavior with decision logic keeps that logic here, driven by plain
//! values (a caller-supplied clock in milliseconds, booleans from the host).
//! The `dom` layer is a thin shell that feeds these models from events and
//! applies their outputs to the tree, so the semantics test natively without
//! a browser.

pub mod features;
pub mod search;
pub mod submit;
pub mod theme;
