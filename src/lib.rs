//! Render structured command and property references into paginated PDF cheat sheets.
//!
//! Content is described with the plain data types in [`model`]: a [`Document`] holds titled
//! [`Section`] tables, [`Callout`] panels and page breaks.  An [`Assembler`] configured with a
//! [`StyleConfig`] validates the document, lays it out and renders it with `genpdf`.
//!
//! ```no_run
//! use cheatsheet::{Assembler, Document, Section, StyleConfig};
//!
//! let document = Document::new("Git Commands").with_section(
//!     Section::new("Basics")
//!         .with_row(("git init", "Initialize a new repository"))
//!         .with_row(("git status", "Show working tree status")),
//! );
//! Assembler::new(StyleConfig::default()).render_to_path(&document, "git.pdf")?;
//! # Ok::<(), cheatsheet::Error>(())
//! ```
//!
//! The [`content`] module ships the built-in topics.

pub mod assembler;
pub mod builder;
pub mod content;
pub mod elements;
pub mod error;
pub mod escape;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod richtext;
pub mod style;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use assembler::{Assembler, RenderedPdf};
pub use error::{Error, ErrorClass, FormatError};
pub use escape::escape_markup;
pub use model::{Block, Callout, Category, ColumnWidths, Document, RowEntry, Section};
pub use style::StyleConfig;
