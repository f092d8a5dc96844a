//! Error types returned by the assembler.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::richtext::ParseError;

#[cfg(feature = "bookmarks")]
use crate::bookmarks::BookmarkError;

/// Coarse classification used when reporting failures to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// The rendering backend cannot work at all (no usable fonts).
    MissingCapability,
    /// Anything else that went wrong while assembling or writing the document.
    GenerationFailure,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCapability => f.write_str("missing rendering capability"),
            Self::GenerationFailure => f.write_str("generation failure"),
        }
    }
}

/// Malformed document content detected while planning the layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{location} contains control character {character:?}")]
    ControlCharacter { location: String, character: char },

    #[error("section '{section}' mixes two-column and three-column rows")]
    MixedRowShapes { section: String },

    #[error("section '{section}' declares {found} column width(s) for {expected} column(s)")]
    ColumnCountMismatch {
        section: String,
        expected: usize,
        found: usize,
    },

    #[error("section '{section}' has column widths that are not finite and positive")]
    InvalidWidths { section: String },

    #[error("section '{section}' declares {found} header cell(s) for {expected} column(s)")]
    HeaderMismatch {
        section: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid markup in {location}")]
    Markup {
        location: String,
        #[source]
        source: ParseError,
    },
}

/// Errors produced while rendering a cheat sheet.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable font family could be loaded.
    #[error("rendering fonts are unavailable")]
    FontLoad(#[source] genpdf::error::Error),

    #[error("document content is malformed")]
    Format(#[from] FormatError),

    #[error("PDF rendering failed")]
    Render(#[source] genpdf::error::Error),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "bookmarks")]
    #[error("failed to embed section bookmarks")]
    Bookmarks(#[from] BookmarkError),
}

impl Error {
    /// Returns whether this failure means the renderer cannot run or the run itself failed.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::FontLoad(_) => ErrorClass::MissingCapability,
            _ => ErrorClass::GenerationFailure,
        }
    }

    /// Short instruction telling the user how to get past this failure.
    pub fn remediation_hint(&self) -> &'static str {
        match self {
            Self::FontLoad(_) => {
                "Install the Roboto fonts under assets/fonts (see assets/fonts/README.md) or point \
                 CHEATSHEET_FONTS_DIR at a directory containing them."
            }
            Self::Format(_) => {
                "Fix the reported row or callout in the content tables; every field must be plain \
                 text and every section must use a single row shape."
            }
            Self::Render(_) => {
                "Check that the page geometry leaves room for the content and that the fonts are \
                 valid TrueType files."
            }
            Self::Io { .. } => {
                "Make sure the output directory exists and is writable, or pass a different path \
                 with --output."
            }
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(_) => "Render without bookmarks or report the document that failed.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_failures_are_missing_capability() {
        let err = Error::FontLoad(genpdf::error::Error::new(
            "no fonts",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        ));
        assert_eq!(err.class(), ErrorClass::MissingCapability);
        assert!(err.remediation_hint().contains("CHEATSHEET_FONTS_DIR"));
    }

    #[test]
    fn io_failures_are_generation_failures() {
        let err = Error::Io {
            path: PathBuf::from("/missing/out.pdf"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.class(), ErrorClass::GenerationFailure);
        assert_eq!(err.to_string(), "failed to write /missing/out.pdf");
    }

    #[test]
    fn format_errors_convert() {
        let err: Error = FormatError::MixedRowShapes {
            section: "Flexbox".into(),
        }
        .into();
        assert_eq!(err.class(), ErrorClass::GenerationFailure);
        assert!(matches!(err, Error::Format(_)));
    }
}
