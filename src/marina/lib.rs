//! # Marina Architecture
//!
//! Marina is the **search and deep-link engine** of a boat-rental storefront: which
//! boats a visitor sees, given the filters they picked, and how those filters
//! survive in a shareable URL. It is a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the catalog, normalizes inputs (names → ids)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (session.rs, sync.rs, filters.rs, filter.rs)        │
//! │  - Criteria store, URL ↔ criteria reconciliation, evaluator │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs, store/)                               │
//! │  - CatalogStore trait, FileCatalog, InMemoryCatalog, cache  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Filter Engine
//!
//! The visitor's choices live in one [`filters::FilterStore`]. A
//! [`session::SearchSession`] owns it together with the navigation
//! [`history::History`] and keeps the two consistent: a URL opened cold fills
//! the criteria, and criteria edits on the search page rewrite the URL in
//! place. A guard keeps values read from the URL from being written straight
//! back. [`filter::evaluate`] turns criteria into the visible product list.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments, returns Rust types and never
//! writes to stdout or exits. Logging goes through `tracing`; only the binary
//! installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`session`]: The reconciliation cycle
//! - [`sync`]: URL ↔ criteria mapping and the sync guard
//! - [`filters`]: The filter state store
//! - [`filter`]: The product filter evaluator
//! - [`criteria`]: Criteria values, selections and patches
//! - [`route`]: Route parsing and rendering
//! - [`history`]: Navigation history
//! - [`catalog`]: Cached catalog with load states
//! - [`store`]: Catalog data providers
//! - [`model`]: Core data types (`Product`, `Location`, `BoatType`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod filters;
pub mod history;
pub mod model;
pub mod route;
pub mod session;
pub mod store;
pub mod sync;
