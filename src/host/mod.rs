//! host
//!
//! Hosting-service URL dialects and the registry dispatching between them.
//!
//! # Architecture
//!
//! The [`HostDialect`] trait defines how one service spells repository,
//! revision and path in its URLs, and how it anchors line ranges. Callers
//! go through [`HostRegistry`] (or a specific [`VcsHost`]) rather than
//! the dialect structs directly.
//!
//! # Modules
//!
//! - `traits`: [`HostDialect`] and [`HostError`]
//! - [`github`], [`gitlab`], [`bitbucket`], [`sourcehut`]: per-host dialects
//! - [`generic`]: fallback resolver for URLs no host claims
//! - `registry`: [`VcsHost`] tags, priority order, [`HostRegistry`]
//!
//! # Example
//!
//! ```
//! use vcslink::host::{HostRegistry, VcsHost};
//!
//! let registry = HostRegistry::default();
//! let info = registry.resolve(
//!     "https://github.com/oss-review-toolkit/ort/blob/da7e3a814fc0e6301bf3ed394eba1a661e4d88d7/README.md",
//! );
//!
//! assert_eq!(info.url(), "https://github.com/oss-review-toolkit/ort.git");
//! assert_eq!(
//!     registry.to_permalink(&info, 27, None).unwrap(),
//!     "https://github.com/oss-review-toolkit/ort/blame/da7e3a814fc0e6301bf3ed394eba1a661e4d88d7/README.md#L27"
//! );
//! assert_eq!(
//!     VcsHost::GitHub.project("git@github.com:oss-review-toolkit/ort.git").unwrap(),
//!     "ort"
//! );
//! ```

pub mod bitbucket;
pub mod generic;
pub mod github;
pub mod gitlab;
mod registry;
pub mod sourcehut;
mod traits;

pub use registry::{valid_host_names, HostRegistry, VcsHost};
pub use traits::*;
