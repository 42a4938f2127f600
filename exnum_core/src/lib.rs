//! `exnum_core` is the core library for [exnum](https://github.com/ifiokjr/exnum). It keeps the `Exercise N` and `Solution N` headings of a markdown manuscript sequentially numbered as sections are added, removed, or moved around.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Manuscript text
//!   → Manuscript (splits on `\n`, one Line per line, heading level derived from text)
//!   → Section finder (headings containing `Exercises`, bounded by the next heading of equal or lesser level)
//!   → Renumberer (per section and per prefix, rewrites the ordinal after `Exercise` / `Solution`)
//!   → Manuscript text
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Loads manuscript paths, the section keyword, item prefixes and size limits from `exnum.toml`.
//! - [`lines`]: The line model. Splitting and joining a manuscript is lossless.
//! - [`manuscript`]: Reading, renumbering and writing manuscript files.
//! - [`section`]: Section boundary computation.
//!
//! ## Key Types
//!
//! - [`Renumberer`]: Renumbers item headings with a configurable keyword and prefix list.
//! - [`RenumberOutcome`]: The renumbered text, the sections found and every rewritten heading.
//! - [`ExnumConfig`]: Configuration loaded from `exnum.toml`.
//! - [`ExnumError`]: Errors with `miette` diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! let input = "## Exercises\n### Exercise 5: Foo\n### Exercise 2: Bar\n### Solution 9: Foo\n";
//! let output = exnum_core::renumber(input);
//!
//! assert_eq!(
//! 	output,
//! 	"## Exercises\n### Exercise 1: Foo\n### Exercise 2: Bar\n### Solution 1: Foo\n"
//! );
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod lines;
pub mod manuscript;
pub mod section;

#[cfg(test)]
mod __fixtures;
