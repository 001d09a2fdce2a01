//! Utility module with chromatch's errors.
//!
//! Ranking itself never fails. It treats malformed queries as the expected
//! state of input that is still being typed and returns no matches. The errors
//! in this module are for callers that want to know why a color failed to
//! parse, for loading palettes, and for reading configuration.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with an unexpected number of characters. For example,
    /// `#00` is missing four hexadecimal digits and `##000000` has one hash
    /// too many.
    UnexpectedCharacters,

    /// A color format with the correct length that contains characters other
    /// than hexadecimal digits. For example, `#GGGGGG` is not a color.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedCharacters => {
                f.write_str("color format should have six hexadecimal digits after an optional `#`")
            }
            MalformedHex => {
                f.write_str("color format should contain hexadecimal digits only but does not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of errors while loading a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteErrorKind {
    /// A palette entry has an empty name.
    EmptyName,
    /// A palette entry's hex code is not a 24-bit color.
    MalformedHex,
    /// A palette entry's Lab coordinates include a not-a-number or infinity.
    NonFiniteLab,
    /// A palette entry's Lab coordinates differ from the coordinates computed
    /// for its hex code.
    InconsistentLab,
    /// The palette data is not well-formed JSON or does not have the expected
    /// shape.
    #[cfg(feature = "json")]
    Json,
    /// Writing diagnostic output failed.
    WriteLog,
}

/// An error while loading a palette.
#[derive(Debug)]
pub struct PaletteError {
    kind: PaletteErrorKind,
    index: Option<usize>,
    name: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PaletteError {
    /// Create a new palette error for the entry with the given index and name.
    pub fn new(kind: PaletteErrorKind, index: usize, name: impl Into<String>) -> Self {
        Self {
            kind,
            index: Some(index),
            name: Some(name.into()),
            source: None,
        }
    }

    /// Create a new palette error that is not specific to any entry.
    pub fn with_source(
        kind: PaletteErrorKind,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            index: None,
            name: None,
            source: Some(source),
        }
    }

    /// Attach the underlying cause.
    #[must_use = "method returns a new error and does not mutate the original value"]
    pub fn caused_by(mut self, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> PaletteErrorKind {
        self.kind
    }

    /// Get the index of the offending entry, if the error is about one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the name of the offending entry, if the error is about one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<std::io::Error> for PaletteError {
    fn from(value: std::io::Error) -> Self {
        Self::with_source(PaletteErrorKind::WriteLog, Box::new(value))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for PaletteError {
    fn from(value: serde_json::Error) -> Self {
        Self::with_source(PaletteErrorKind::Json, Box::new(value))
    }
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PaletteErrorKind::*;

        f.write_str(match self.kind {
            EmptyName => "palette entry should have a name but has none",
            MalformedHex => "palette entry should have a 24-bit hex color but does not",
            NonFiniteLab => "palette entry should have finite Lab coordinates but does not",
            InconsistentLab => "palette entry's Lab coordinates should match its hex color but do not",
            #[cfg(feature = "json")]
            Json => "palette should be a JSON array of {name, hex, lab} records but is not",
            WriteLog => "could not write palette diagnostics",
        })?;

        if let Some(index) = self.index {
            f.write_fmt(format_args!(" (entry {}", index))?;
            if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
                f.write_fmt(format_args!(" `{}`", name))?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}

#[cfg(feature = "pyffi")]
impl From<PaletteError> for PyErr {
    fn from(value: PaletteError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while reading configuration from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The environment variable with the given name is not valid Unicode.
    NotUnicode(&'static str),
    /// The top-K environment variable is not an unsigned integer.
    MalformedTopK(String),
    /// The log volume environment variable is not `silent`, `regular`, or
    /// `detailed`.
    UnknownVolume(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ConfigError::*;

        match self {
            NotUnicode(key) => f.write_fmt(format_args!(
                "environment variable {} should be valid Unicode but is not",
                key
            )),
            MalformedTopK(value) => f.write_fmt(format_args!(
                "number of matches should be an unsigned integer but is `{}`",
                value
            )),
            UnknownVolume(value) => f.write_fmt(format_args!(
                "log volume should be silent, regular, or detailed but is `{}`",
                value
            )),
        }
    }
}

impl std::error::Error for ConfigError {}
