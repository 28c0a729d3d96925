//! Behavior core for the portfolio page.
//!
//! This crate holds every interaction rule of the page without touching the
//! DOM. Each handler on [`controller::PageController`] takes a typed browser
//! event and returns [`action::Action`]s; the host (the `folio` wasm crate)
//! applies them to real elements and turns [`action::Action::Defer`] into
//! browser timers. Tests drive the same controller through
//! [`timeline::Timeline`], a virtual clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Top-level [`controller::PageController`] that routes events to features |
//! | [`action`] | Effect vocabulary: [`action::Action`], [`action::Target`], [`action::Task`] |
//! | [`theme`] | Light/dark preference, persistence trait, toggle transition |
//! | [`form`] | Contact form validation and simulated submission |
//! | [`modal`] | Project detail modal population and open/close phases |
//! | [`scroll`] | Header hide/show, back-to-top, anchor and call-to-action scrolling |
//! | [`reveal`] | Staggered fade-in for sections and project cards |
//! | [`typing`] | Hero title/tagline typewriter effect |
//! | [`timeline`] | Deterministic virtual clock for deferred tasks |
//! | [`config`] | Page configuration with validated overrides |
//! | [`consts`] | Default delays, thresholds, labels, and style values |

pub mod action;
pub mod config;
pub mod consts;
pub mod controller;
pub mod form;
pub mod modal;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod timeline;
pub mod typing;
