//! Assembly identity values for .NET reference resolution.
//!
//! This module provides the identity value type that comparison, deduplication,
//! and lookup operate on: a named, versioned, optionally culture- and
//! strong-name-qualified, optionally retargetable assembly reference.
//!
//! # ECMA-335 References
//!
//! This module implements identity concepts defined in the ECMA-335 specification:
//! - **Section II.6.1**: Overview of assemblies - defines assembly identity components
//! - **Section II.6.2.1**: Assembly versioning - four-part version number semantics
//! - **Section II.6.2.1.3**: Public key and token - strong name identity format
//! - **Section II.23.1.2**: Values for `AssemblyFlags` - the flags word carried here
//!
//! See: <https://ecma-international.org/publications-and-standards/standards/ecma-335/>
//!
//! # Key Components
//!
//! - [`AssemblyIdentity`] - Complete assembly identification with name, version, culture, and strong name
//! - [`PublicKeyToken`] - 8-byte strong name token in its metadata byte order
//! - [`AssemblyNameFlags`] - ECMA-335 `AssemblyFlags` word, including the `Retargetable` bit
//!
//! # Comparison Semantics
//!
//! Identities compare field-lexicographically: simple name (ASCII
//! case-insensitive), version, culture (case-insensitive, neutral first),
//! public key token, and finally the retargetable flag when the caller asks
//! for it. [`AssemblyIdentity::compare_with`] and
//! [`AssemblyIdentity::equals_with`] take the retargetable significance as a
//! parameter; the [`AssemblyIdentityComparer`](crate::identity::AssemblyIdentityComparer)
//! singletons fix that parameter per policy.
//!
//! # Examples
//!
//! ```rust
//! use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion, PublicKeyToken};
//!
//! let mscorlib = AssemblyIdentity::new(
//!     "mscorlib",
//!     AssemblyVersion::new(4, 0, 0, 0),
//!     None,
//!     Some(PublicKeyToken::from_bytes([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89])),
//!     AssemblyNameFlags::empty(),
//! );
//!
//! assert_eq!(
//!     mscorlib.display_name(),
//!     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089"
//! );
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are immutable values and implement [`Send`] and
//! [`Sync`]. Identities can be shared across threads and used as keys in
//! concurrent collections.

use std::{
    cmp::Ordering,
    fmt,
    fmt::Write as _,
    hash::{Hash, Hasher},
};

use bitflags::bitflags;

use crate::identity::AssemblyVersion;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// All possible flags for the ECMA-335 `AssemblyFlags` word
    pub struct AssemblyNameFlags: u32 {
        /// The assembly reference holds the full (unhashed) public key
        const PUBLIC_KEY = 0x0001;
        /// The implementation of this assembly used at runtime is not expected to match the version seen at compile time
        const RETARGETABLE = 0x0100;
        /// Reserved (a conforming implementation of the CLI may ignore this setting on read)
        const DISABLE_JIT_COMPILE_OPTIMIZER = 0x4000;
        /// Reserved (a conforming implementation of the CLI may ignore this setting on read)
        const ENABLE_JIT_COMPILE_TRACKING = 0x8000;
    }
}

/// Strong-name public key token for a .NET assembly.
///
/// The token is the 8-byte digest suffix derived from an assembly's full
/// public key, stored internally as a `u64` in little-endian byte order.
/// Tokens are displayed as hex bytes in their natural order, matching the
/// .NET display name format where `b77a5c561934e089` represents the bytes
/// `[0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]`.
///
/// # Examples
///
/// ```rust
/// use asmkey::identity::PublicKeyToken;
///
/// let token = PublicKeyToken::from_bytes([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]);
/// assert_eq!(token.to_string(), "b77a5c561934e089");
/// assert_eq!(PublicKeyToken::new(token.value()), token);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKeyToken(u64);

impl PublicKeyToken {
    /// Create a token from its `u64` little-endian representation.
    #[must_use]
    pub const fn new(token: u64) -> Self {
        Self(token)
    }

    /// Create a token from its 8 bytes in natural (display) order.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    /// Raw `u64` little-endian representation of the token.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The 8 token bytes in natural (display) order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for PublicKeyToken {
    /// Format the token as 16 lowercase hex digits in byte order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_le_bytes();
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]
        )
    }
}

/// Complete identity information for a .NET assembly reference.
///
/// Provides the identification components reference resolution keys on: name,
/// version, culture, strong name token, and the assembly flags word. Instances
/// are constructed programmatically; this crate does not parse display names
/// or metadata blobs.
///
/// # Identity Components
///
/// - **Name**: Simple assembly name, matched ASCII case-insensitively
/// - **Version**: Four-part version for compatibility and binding decisions
/// - **Culture**: Localization culture (`None` for culture-neutral assemblies)
/// - **Public Key Token**: Strong name token (`None` for unsigned assemblies)
/// - **Flags**: ECMA-335 `AssemblyFlags` word; only the `Retargetable` bit
///   participates in identity comparison
///
/// # Equality Semantics
///
/// **Important**: `PartialEq` and `Hash` implement the *strict* comparison:
/// name and culture matched ASCII case-insensitively, plus version, public key
/// token, and the retargetable flag. All other bits of
/// [`flags`](Self::flags) are **excluded** from equality and hashing. This is
/// an intentional design decision:
///
/// - References to the same assembly routinely differ in incidental flag bits
///   (full public key vs. token, JIT hints) and must still unify
/// - Name casing varies between tools emitting references and must not split
///   [`HashMap`](std::collections::HashMap) entries
///
/// Two `AssemblyIdentity` instances are equal if and only if their `name`
/// (case-insensitive), `version`, `culture` (case-insensitive),
/// `public_key_token`, and retargetable status are equal.
///
/// For retargetable-agnostic equality use
/// [`equals_with`](Self::equals_with) with `consider_retargetable = false`,
/// or the [`IgnoreRetargetable`](crate::identity::ComparisonPolicy::IgnoreRetargetable)
/// comparer singleton.
///
/// # Ordering
///
/// No `Ord` implementation is provided on the identity itself because the
/// order depends on the comparison policy. Use
/// [`compare_with`](Self::compare_with), a comparer singleton with `sort_by`,
/// or the key wrappers ([`StrictKey`](crate::identity::StrictKey),
/// [`RetargetableAgnosticKey`](crate::identity::RetargetableAgnosticKey))
/// for sorted containers.
///
/// # Examples
///
/// ```rust
/// use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion};
///
/// let identity = AssemblyIdentity::new(
///     "MyLibrary",
///     AssemblyVersion::new(1, 0, 0, 0),
///     None,
///     None,
///     AssemblyNameFlags::empty(),
/// );
///
/// // Name comparison ignores case
/// let upper = AssemblyIdentity::new(
///     "MYLIBRARY",
///     AssemblyVersion::new(1, 0, 0, 0),
///     None,
///     None,
///     AssemblyNameFlags::empty(),
/// );
/// assert_eq!(identity, upper);
/// ```
#[derive(Debug, Clone)]
pub struct AssemblyIdentity {
    /// Simple assembly name (e.g., "mscorlib", "System.Core").
    ///
    /// The primary identifier used for assembly lookup and display. Matched
    /// ASCII case-insensitively in all comparison operations, preserving the
    /// original casing for display.
    pub name: String,

    /// Four-part version number for compatibility and binding.
    ///
    /// Used by the .NET runtime for version binding decisions and
    /// side-by-side deployment scenarios. [`AssemblyVersion::UNKNOWN`]
    /// (0.0.0.0) stands in for references that carry no version and orders
    /// before every concrete version.
    pub version: AssemblyVersion,

    /// Culture information for localized assemblies.
    ///
    /// Specifies the localization culture for satellite assemblies containing
    /// culture-specific resources. `None` indicates a culture-neutral
    /// assembly that contains the default/fallback resources and executable
    /// code. Matched ASCII case-insensitively; neutral orders before any
    /// concrete culture.
    ///
    /// # Examples
    /// - `None` - Culture-neutral assembly (default)
    /// - `Some("en-US")` - US English localized assembly
    /// - `Some("fr-FR")` - French (France) localized assembly
    pub culture: Option<String>,

    /// Strong name public key token.
    ///
    /// Provides the cryptographic identity component for signed assemblies.
    /// `None` indicates an unsigned (weakly named) assembly; unsigned orders
    /// before any signed token.
    pub public_key_token: Option<PublicKeyToken>,

    /// ECMA-335 `AssemblyFlags` word for this reference.
    ///
    /// The full flags word is preserved, but only
    /// [`AssemblyNameFlags::RETARGETABLE`] participates in comparison,
    /// equality, and hashing. Use [`retargetable()`](Self::retargetable) to
    /// read the significant bit.
    pub flags: AssemblyNameFlags,
}

impl AssemblyIdentity {
    /// Create a new assembly identity with the specified components.
    ///
    /// # Arguments
    ///
    /// * `name` - Simple assembly name for identification
    /// * `version` - Four-part version number
    /// * `culture` - Optional culture for localized assemblies
    /// * `public_key_token` - Optional strong name token
    /// * `flags` - ECMA-335 assembly flags word
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion};
    ///
    /// let identity = AssemblyIdentity::new(
    ///     "MyLibrary",
    ///     AssemblyVersion::new(1, 0, 0, 0),
    ///     None,
    ///     None,
    ///     AssemblyNameFlags::empty(),
    /// );
    /// assert!(identity.is_culture_neutral());
    /// ```
    pub fn new(
        name: impl Into<String>,
        version: AssemblyVersion,
        culture: Option<String>,
        public_key_token: Option<PublicKeyToken>,
        flags: AssemblyNameFlags,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            culture,
            public_key_token,
            flags,
        }
    }

    /// Whether the `Retargetable` flag is set on this reference.
    ///
    /// Retargetable references (common for portable library references to
    /// platform assemblies) may bind to a different publisher's
    /// implementation at runtime. This is the one flag bit that participates
    /// in identity comparison.
    #[must_use]
    pub const fn retargetable(&self) -> bool {
        self.flags.contains(AssemblyNameFlags::RETARGETABLE)
    }

    /// Return this identity with the `Retargetable` flag set or cleared.
    ///
    /// Builder-style convenience for the one flag bit that matters to
    /// comparison; all other flag bits are preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion};
    ///
    /// let identity = AssemblyIdentity::new(
    ///     "System",
    ///     AssemblyVersion::new(4, 0, 0, 0),
    ///     None,
    ///     None,
    ///     AssemblyNameFlags::empty(),
    /// );
    ///
    /// assert!(!identity.retargetable());
    /// assert!(identity.with_retargetable(true).retargetable());
    /// ```
    #[must_use]
    pub fn with_retargetable(mut self, retargetable: bool) -> Self {
        self.flags.set(AssemblyNameFlags::RETARGETABLE, retargetable);
        self
    }

    /// Get the simple assembly name without version or culture information.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Check if this assembly is strong-named.
    ///
    /// Strong-named assemblies carry a public key token that can be verified
    /// and are eligible for Global Assembly Cache (GAC) storage.
    #[must_use]
    pub const fn is_strong_named(&self) -> bool {
        self.public_key_token.is_some()
    }

    /// Check if this assembly is culture-neutral.
    ///
    /// Culture-neutral assemblies contain the default resources and
    /// executable code, while culture-specific assemblies contain localized
    /// resources.
    #[must_use]
    pub const fn is_culture_neutral(&self) -> bool {
        self.culture.is_none()
    }

    /// Three-way comparison against another identity.
    ///
    /// Fields are compared lexicographically in a fixed order: simple name
    /// (ASCII case-insensitive), version, culture (case-insensitive, neutral
    /// first), public key token (unsigned first), and finally the
    /// retargetable flag when `consider_retargetable` is `true`. The result
    /// is a deterministic total order, independent of insertion order and
    /// stable across processes.
    ///
    /// Returns [`Ordering::Equal`] exactly when
    /// [`equals_with`](Self::equals_with) returns `true` for the same
    /// `consider_retargetable` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion};
    ///
    /// let v35 = AssemblyIdentity::new(
    ///     "System.Core",
    ///     AssemblyVersion::new(3, 5, 0, 0),
    ///     None,
    ///     None,
    ///     AssemblyNameFlags::empty(),
    /// );
    /// let v40 = AssemblyIdentity::new(
    ///     "system.core",
    ///     AssemblyVersion::new(4, 0, 0, 0),
    ///     None,
    ///     None,
    ///     AssemblyNameFlags::empty(),
    /// );
    ///
    /// // Same name (case-insensitive), so the version decides
    /// assert_eq!(v35.compare_with(&v40, true), Ordering::Less);
    /// assert_eq!(v40.compare_with(&v35, true), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare_with(&self, other: &Self, consider_retargetable: bool) -> Ordering {
        ordinal_ignore_case_cmp(&self.name, &other.name)
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| culture_cmp(self.culture.as_deref(), other.culture.as_deref()))
            .then_with(|| self.public_key_token.cmp(&other.public_key_token))
            .then_with(|| {
                if consider_retargetable {
                    self.retargetable().cmp(&other.retargetable())
                } else {
                    Ordering::Equal
                }
            })
    }

    /// Equality against another identity.
    ///
    /// Matches the same fields as [`compare_with`](Self::compare_with): name
    /// and culture ASCII case-insensitively, version and public key token
    /// exactly, and the retargetable flag only when `consider_retargetable`
    /// is `true`. Flag bits other than `Retargetable` never participate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion};
    ///
    /// let retargetable = AssemblyIdentity::new(
    ///     "Foo",
    ///     AssemblyVersion::new(1, 0, 0, 0),
    ///     None,
    ///     None,
    ///     AssemblyNameFlags::RETARGETABLE,
    /// );
    /// let fixed = retargetable.clone().with_retargetable(false);
    ///
    /// assert!(!retargetable.equals_with(&fixed, true));
    /// assert!(retargetable.equals_with(&fixed, false));
    /// ```
    #[must_use]
    pub fn equals_with(&self, other: &Self, consider_retargetable: bool) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
            && self.version == other.version
            && culture_eq(self.culture.as_deref(), other.culture.as_deref())
            && self.public_key_token == other.public_key_token
            && (!consider_retargetable || self.retargetable() == other.retargetable())
    }

    /// Hash the fields that participate in comparison.
    ///
    /// Writes the ASCII-folded name and culture, the version, the public key
    /// token, and (when `consider_retargetable` is set) the retargetable
    /// flag. Identities that are `equals_with`-equal for a given
    /// `consider_retargetable` value produce identical hashes for that value.
    pub(crate) fn policy_hash<H: Hasher>(&self, state: &mut H, consider_retargetable: bool) {
        hash_folded(&self.name, state);
        self.version.hash(state);
        match self.culture.as_deref() {
            Some(culture) => {
                state.write_u8(1);
                hash_folded(culture, state);
            }
            None => state.write_u8(0),
        }
        self.public_key_token.hash(state);
        if consider_retargetable {
            self.retargetable().hash(state);
        }
    }

    /// Generate the display name string for this assembly identity.
    ///
    /// Creates a .NET-compatible assembly display name including all identity
    /// components that participate in comparison. Retargetable references
    /// carry the `Retargetable=Yes` suffix used by fusion display names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion};
    ///
    /// let identity = AssemblyIdentity::new(
    ///     "MyLibrary",
    ///     AssemblyVersion::new(1, 2, 3, 4),
    ///     Some("en-US".to_string()),
    ///     None,
    ///     AssemblyNameFlags::empty(),
    /// );
    ///
    /// assert_eq!(
    ///     identity.display_name(),
    ///     "MyLibrary, Version=1.2.3.4, Culture=en-US, PublicKeyToken=null"
    /// );
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        // Pre-allocate with estimated capacity to minimize reallocations
        // Typical format: "Name, Version=x.x.x.x, Culture=neutral, PublicKeyToken=xxxxxxxxxxxxxxxx"
        let mut result = String::with_capacity(self.name.len() + 80);

        result.push_str(&self.name);

        let _ = write!(result, ", Version={}", self.version);

        let culture_str = self.culture.as_deref().unwrap_or("neutral");
        let _ = write!(result, ", Culture={}", culture_str);

        result.push_str(", PublicKeyToken=");
        match self.public_key_token {
            Some(token) => {
                let _ = write!(result, "{}", token);
            }
            None => result.push_str("null"),
        }

        if self.retargetable() {
            result.push_str(", Retargetable=Yes");
        }

        result
    }
}

impl PartialEq for AssemblyIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.equals_with(other, true)
        // Note: flag bits other than RETARGETABLE are excluded from equality.
        // References to the same assembly routinely differ in incidental bits
        // (full public key vs. token, JIT hints) and must still unify.
    }
}

impl Eq for AssemblyIdentity {}

impl Hash for AssemblyIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.policy_hash(state, true);
        // Note: hashes exactly the fields PartialEq matches (name and culture
        // ASCII-folded) so equal identities hash identically in HashMap.
    }
}

impl fmt::Display for AssemblyIdentity {
    /// Format assembly identity as its display name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Byte-wise ASCII case-insensitive ordering (ordinal-ignore-case).
fn ordinal_ignore_case_cmp(left: &str, right: &str) -> Ordering {
    left.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(right.bytes().map(|b| b.to_ascii_lowercase()))
}

/// Case-insensitive culture equality; `None` only matches `None`.
fn culture_eq(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.eq_ignore_ascii_case(right),
        _ => false,
    }
}

/// Case-insensitive culture ordering; neutral (`None`) sorts first.
fn culture_cmp(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => ordinal_ignore_case_cmp(left, right),
    }
}

/// Hash a string ASCII-folded, with a terminator byte so adjacent
/// variable-length fields cannot alias (the scheme `str`'s own `Hash` uses).
fn hash_folded<H: Hasher>(text: &str, state: &mut H) {
    for byte in text.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
    state.write_u8(0xff);
}
