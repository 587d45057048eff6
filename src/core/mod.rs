//! core
//!
//! Core domain types and shared utilities for vcslink.
//!
//! # Modules
//!
//! - [`types`] - Strong types: VcsType, VcsInfo
//! - [`url`] - URL splitting shared by every host dialect
//! - [`spdx`] - SPDX download-location rendering
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Everything here is a pure function of its input
//! - Values are immutable once constructed

pub mod config;
pub mod spdx;
pub mod types;
pub mod url;
