//! Four-part assembly version values.
//!
//! Implements the .NET convention of four 16-bit version components
//! (major.minor.build.revision) with the component-wise total order that
//! assembly identity comparison builds on. Versions are constructed
//! programmatically; this crate does not parse version strings.

use std::fmt;

/// Four-part version number for .NET assemblies.
///
/// Versions are compared component-wise in order: major, minor, build,
/// revision. The derived total order matches the binding precedence used by
/// reference resolution.
///
/// # Examples
///
/// ```rust
/// use asmkey::identity::AssemblyVersion;
///
/// let version = AssemblyVersion::new(4, 0, 0, 0);
/// assert_eq!(version.to_string(), "4.0.0.0");
/// assert!(version < AssemblyVersion::new(4, 5, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    /// Major version component.
    pub major: u16,
    /// Minor version component.
    pub minor: u16,
    /// Build version component.
    pub build: u16,
    /// Revision version component.
    pub revision: u16,
}

impl AssemblyVersion {
    /// Sentinel value representing an unknown or unspecified version.
    ///
    /// This constant (0.0.0.0) stands in for references that carry no
    /// version information. It orders before every concrete version, so
    /// unversioned references sort first.
    ///
    /// Use [`is_unknown()`](Self::is_unknown) to check for the sentinel.
    pub const UNKNOWN: Self = Self {
        major: 0,
        minor: 0,
        build: 0,
        revision: 0,
    };

    /// Create a new assembly version with the specified components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmkey::identity::AssemblyVersion;
    ///
    /// let version = AssemblyVersion::new(1, 2, 3, 4);
    /// assert_eq!(version.major, 1);
    /// assert_eq!(version.revision, 4);
    /// ```
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Check if this version represents an unknown/unspecified version.
    ///
    /// Returns `true` if this version equals [`UNKNOWN`](Self::UNKNOWN)
    /// (0.0.0.0). While 0.0.0.0 is technically a valid .NET version, it is
    /// extremely rare in practice and is treated as "version unknown".
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.build == 0 && self.revision == 0
    }
}

impl fmt::Display for AssemblyVersion {
    /// Format assembly version as standard dotted notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}
