//! # Core Application Logic
//!
//! This module contains Signal's page logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • palettes, typing,    │
//!                    │    reveal, routes       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`palette`]: Color presets and base-color derivation
//! - [`typing`]: The placeholder typing state machine
//! - [`reveal`]: Show-once entrance animation of illustrations
//! - [`route`]: Landing and dashboard routes
//! - [`copy`]: Static page text
//! - [`config`]: Layered configuration (the one module here that reads files)

pub mod action;
pub mod config;
pub mod copy;
pub mod palette;
pub mod reveal;
pub mod route;
pub mod state;
pub mod typing;
