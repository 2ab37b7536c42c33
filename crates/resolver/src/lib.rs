//! # Local Media Resolver
//!
//! Turns media artifacts sitting on local storage into encoded [`MediaBlock`]s.
//!
//! ## Pipeline
//!
//! ```text
//! path / directory
//!     │
//!     ├──> MediaStore (existence checks, listing, byte reads)
//!     │
//!     ├──> classify (extension -> MIME type + kind)
//!     │
//!     └──> MediaBlock (base64)
//!            └─> ResolvedMedia (never empty)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use local_media_resolver::{MediaKind, MediaResolver};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = MediaResolver::local();
//!     let media = resolver
//!         .resolve_directory(Path::new("/srv/media/images"), MediaKind::Image)
//!         .await?;
//!
//!     println!("resolved {} images", media.len());
//!     Ok(())
//! }
//! ```

mod classify;
mod error;
mod resolver;
mod store;

pub use classify::{classify_extension, classify_path, extension_of, MediaType, MEDIA_TYPES};
pub use error::{ResolveError, Result};
pub use local_media_protocol::{MediaBlock, MediaKind, ResolvedMedia};
pub use resolver::{BatchPolicy, MediaResolver};
pub use store::{LocalStore, MediaStore};
