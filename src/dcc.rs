//! DCC application and executable variant enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// A digital-content-creation application this crate knows how to locate.
///
/// Marked `#[non_exhaustive]` so new applications can be added without a
/// breaking change. Always include a wildcard arm when matching:
///
/// ```rust
/// use dccpath::Dcc;
///
/// fn label(dcc: Dcc) -> &'static str {
///     match dcc {
///         Dcc::Blender => "blender",
///         Dcc::Maya => "maya",
///         Dcc::MotionBuilder => "mobu",
///         _ => "unknown",
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum Dcc {
    /// Blender Foundation's Blender.
    Blender,
    /// Autodesk Maya.
    Maya,
    /// Autodesk MotionBuilder.
    MotionBuilder,
}

impl Dcc {
    /// Human-readable product name, used in log fields and error messages.
    ///
    /// ```rust
    /// use dccpath::Dcc;
    ///
    /// assert_eq!(Dcc::MotionBuilder.display_name(), "MotionBuilder");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Blender => "Blender",
            Self::Maya => "Maya",
            Self::MotionBuilder => "MotionBuilder",
        }
    }

    /// Executable variants that exist for this application.
    ///
    /// Blender has no separately shipped script interpreter.
    pub fn variants(&self) -> &'static [Variant] {
        match self {
            Self::Blender => &[Variant::Main],
            Self::Maya | Self::MotionBuilder => &[Variant::Main, Variant::Interpreter],
        }
    }

    /// Iterator over all known applications.
    ///
    /// ```rust
    /// use dccpath::Dcc;
    ///
    /// assert_eq!(Dcc::all().count(), 3);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for Dcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which binary inside a DCC install is requested.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Variant {
    /// The application itself (`maya`, `motionbuilder`, `blender`).
    #[default]
    Main,
    /// The embedded script interpreter (`mayapy`, `mobupy`).
    Interpreter,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("executable"),
            Self::Interpreter => f.write_str("interpreter"),
        }
    }
}
