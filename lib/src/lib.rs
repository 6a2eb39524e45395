#![doc = svgbobdoc::transform!(
//! A library for turning a directory of markdown articles into a
//! catalog of rendered, servable records.
//!
//! # Overview
//!
//! Every article lives in its own directory under a common root and
//! keeps its content in `article.md`: an optional YAML metadata header
//! followed by markdown. Building a [`Catalog`] runs each document
//! through a chain of composable passes and aggregates the results:
//!
//! ```svgbob
//! articles/
//! +-- hello/article.md --.
//! +-- birds/article.md --+    .--------.      .-----------------.
//! '-- fish/article.md  --+--->| parser |----->| frontmatter     |
//!                             '--------'      | headline        |
//!                                             | math            |
//!                                             | raw markup      |
//!                                             | highlight       |
//!                                             | renderer        |
//!                                             '--------+--------'
//!                                                      |
//!                            .---------.               v
//!                            | Catalog |<----- "article records,"
//!                            '---------'      "sorted newest first"
//! ```
//!
//! Passes are independent: each inspects only the node types it owns,
//! so callers may assemble any ordered subset with
//! [`markdown::Pipeline`]. Each document's run owns its own event tree
//! and side channel, so documents are processed in parallel.
//!
//! The catalog is built exactly once, at process start, and is
//! read-only afterwards: serving layers query it by slug or list it in
//! full, and picking up new content requires a restart.
)]

#[macro_use]
pub mod error;
pub mod util;
pub mod markdown;
pub mod catalog;

pub use catalog::{Article, Catalog, Document};
