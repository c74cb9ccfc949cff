//! # Core Application Logic
//!
//! The composer's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • submit() (async)     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │ Generation │
//!     │  Adapter   │                          │   Client   │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and its named lifecycle transitions
//! - [`action`]: The `Action` enum, `Effect`, and the `update()` reducer
//! - [`controller`]: The async request/response cycle
//! - [`tone`]: The advisory tone hint
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod state;
pub mod tone;
