//! Wondrous Studio site: a single-page portfolio rendered with Yew, plus a
//! small native host that serves the built bundle.
//!
//! Everything outside `frontend` and `backend` is platform independent and
//! is exercised by the native test suite.

pub mod carousel;
pub mod content;
pub mod motion;
pub mod navigation;
pub mod platform;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
