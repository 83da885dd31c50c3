//! Browser behaviors for the file portal pages, compiled to WebAssembly.
//!
//! Each behavior is small and independent: it reacts to a DOM event or a
//! fixed timer and shares nothing with the others except the page. The pure
//! logic lives in plain modules that build and test natively; the `browser`
//! feature adds the `browser` layer that binds that logic to the DOM and
//! the host page's Bootstrap widgets.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Session timeout monitor with injected dialog and timer host |
//! | [`countdown`] | Warning-window countdown and its text format |
//! | [`password`] | Strength meter scoring and the server password policy |
//! | [`filter`] | File table name/category filter |
//! | [`download`] | Busy state for download buttons |
//! | [`confirm`] | Confirmation before destructive actions |
//! | [`validation`] | Submit-time form validity gate |
//! | [`config`] | Page configuration and derived delays |
//! | [`consts`] | DOM ids, selectors and fixed timings |
//! | [`error`] | [`error::PortalError`] |
//! | `browser` | DOM wiring and the `start`/`filterFiles` exports (feature `browser`) |

pub mod config;
pub mod confirm;
pub mod consts;
pub mod countdown;
pub mod download;
pub mod error;
pub mod filter;
pub mod password;
pub mod session;
pub mod validation;

#[cfg(feature = "browser")]
pub mod browser;
