//! Font loading utilities.
//!
//! The proportional family (Roboto) is required; without it nothing can be rendered and the
//! failure is reported as [`Error::FontLoad`](crate::Error::FontLoad).  The monospaced family
//! (Roboto Mono) used for command labels is optional: when it is missing, labels fall back to the
//! proportional family and a warning is logged.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Environment variable overriding the font search directory.
pub const FONTS_DIR_ENV: &str = "CHEATSHEET_FONTS_DIR";

/// Environment variable overriding the Windows fallback font directory.
pub const WINDOWS_FONTS_DIR_ENV: &str = "CHEATSHEET_WINDOWS_FONTS_DIR";

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

/// Name of the bundled monospaced font family.
pub const MONOSPACE_FONT_FAMILY_NAME: &str = "RobotoMono";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

const MONOSPACE_FONT_FILES: &[&str] = &[
    "RobotoMono-Regular.ttf",
    "RobotoMono-Bold.ttf",
    "RobotoMono-Italic.ttf",
    "RobotoMono-BoldItalic.ttf",
];

struct WindowsFontFiles {
    family: &'static str,
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

const WINDOWS_FONT_FILES: WindowsFontFiles = WindowsFontFiles {
    family: "Arial",
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

const WINDOWS_MONOSPACE_FONT_FILES: WindowsFontFiles = WindowsFontFiles {
    family: "Courier New",
    regular: "cour.ttf",
    bold: "courbd.ttf",
    italic: "couri.ttf",
    bold_italic: "courbi.ttf",
};

/// Font families loaded for one render.
pub struct FontSet {
    /// Default family for all text.
    pub regular: FontFamily<FontData>,
    /// Family for monospaced spans, if one could be found.
    pub monospace: Option<FontFamily<FontData>>,
}

/// Directory holding the fonts shipped with the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.iter().any(|existing| existing == &candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = bundled_fonts_source_dir();
    if !candidates
        .iter()
        .any(|existing| existing == &manifest_candidate)
    {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn missing_font_files(path: &Path, files: &[&str]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate, FONT_FILES);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::new(
        format!(
            "Unable to locate bundled font directory. Checked: {}. See assets/fonts/README.md or set {}.",
            summary, FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
    ))
}

fn load_family_from(directory: &Path, name: &str) -> Result<FontFamily<FontData>, Error> {
    fonts::from_files(directory, name, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                name,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

fn windows_font_directory() -> Option<PathBuf> {
    if let Some(path) = env_path(WINDOWS_FONTS_DIR_ENV) {
        return Some(path);
    }

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

fn load_windows_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load Windows fallback {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn windows_font_family(files: &WindowsFontFiles) -> Result<FontFamily<FontData>, Error> {
    let directory = windows_font_directory().ok_or_else(|| {
        Error::new(
            "Windows font directory not found for fallback",
            io::Error::new(io::ErrorKind::NotFound, "windows fonts directory not found"),
        )
    })?;

    Ok(FontFamily {
        regular: load_windows_font(&directory, files.regular, "regular")?,
        bold: load_windows_font(&directory, files.bold, "bold")?,
        italic: load_windows_font(&directory, files.italic, "italic")?,
        bold_italic: load_windows_font(&directory, files.bold_italic, "bold italic")?,
    })
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Returns the bundled Roboto font family if available and falls back to the Windows Arial family
/// when the bundled fonts are missing.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let bundled =
        resolve_font_directory().and_then(|dir| load_family_from(&dir, DEFAULT_FONT_FAMILY_NAME));

    match bundled {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => match windows_font_family(&WINDOWS_FONT_FILES) {
            Ok(fallback) => {
                warn!(
                    "Bundled fonts unavailable ({}); falling back to Windows '{}' family.",
                    err, WINDOWS_FONT_FILES.family
                );
                Ok(fallback)
            }
            Err(fallback_err) => {
                warn!(
                    "Bundled fonts unavailable ({}); Windows fallback failed: {}",
                    err, fallback_err
                );
                Err(Error::new(
                    format!(
                        "Bundled fonts unavailable and Windows fallback failed: {}",
                        fallback_err
                    ),
                    io::Error::new(io::ErrorKind::NotFound, "default fonts are not available"),
                ))
            }
        },
        Err(err) => Err(err),
    }
}

/// Returns the monospaced family used for command labels, if one is installed.
///
/// Roboto Mono is looked up next to the default fonts first, then Courier New in the Windows font
/// directory.
pub fn monospace_font_family() -> Option<FontFamily<FontData>> {
    let bundled = font_directory_candidates().into_iter().find(|candidate| {
        candidate.is_dir() && missing_font_files(candidate, MONOSPACE_FONT_FILES).is_empty()
    });

    if let Some(directory) = bundled {
        match load_family_from(&directory, MONOSPACE_FONT_FAMILY_NAME) {
            Ok(family) => return Some(family),
            Err(err) => warn!("Ignoring unreadable monospaced fonts: {}", err),
        }
    }

    match windows_font_family(&WINDOWS_MONOSPACE_FONT_FILES) {
        Ok(family) => {
            debug!(
                "Using Windows '{}' family for monospaced text",
                WINDOWS_MONOSPACE_FONT_FILES.family
            );
            Some(family)
        }
        Err(err) => {
            warn!(
                "No monospaced font family found ({}); labels use the '{}' family instead.",
                err, DEFAULT_FONT_FAMILY_NAME
            );
            None
        }
    }
}

/// Loads the default family and, if available, the monospaced family.
pub fn load_font_set() -> Result<FontSet, Error> {
    let regular = default_font_family()?;
    Ok(FontSet {
        regular,
        monospace: monospace_font_family(),
    })
}

/// Indicates whether all bundled fonts required for the default font family are present on disk.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_directory_is_always_a_candidate() {
        assert!(font_directory_candidates().contains(&bundled_fonts_source_dir()));
    }

    #[test]
    fn missing_files_are_listed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("Roboto-Regular.ttf"), b"").expect("write stub");

        let missing = missing_font_files(dir.path(), FONT_FILES);
        assert_eq!(missing.len(), 3);
        assert!(missing
            .iter()
            .all(|path| !path.ends_with("Roboto-Regular.ttf")));
    }

    #[test]
    fn not_found_errors_count_as_missing_fonts() {
        let err = Error::new(
            "missing",
            io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
        );
        assert!(fonts_missing(&err));

        let err = Error::new("broken", io::Error::new(io::ErrorKind::Other, "bad ttf"));
        assert!(!fonts_missing(&err));
    }
}
