//! Assembly identity and policy-driven comparison for .NET references.
//!
//! This module provides the identity value type used by reference resolution
//! together with the comparison machinery that deduplicates, sorts, and looks
//! up references: a pair of comparison policies, process-wide comparer
//! singletons, and container key adapters that carry a policy into standard
//! collections.
//!
//! # ECMA-335 References
//!
//! This module implements identity concepts defined in the ECMA-335 specification:
//! - **Section II.6.1**: Overview of assemblies - defines assembly identity components
//! - **Section II.6.2.1**: Assembly versioning - four-part version number semantics
//! - **Section II.6.2.1.3**: Public key and token - strong name identity format
//! - **Section II.23.1.2**: Values for `AssemblyFlags` - including the `Retargetable` bit
//!
//! See: <https://ecma-international.org/publications-and-standards/standards/ecma-335/>
//!
//! # Key Components
//!
//! ## Identity Values
//! - [`AssemblyIdentity`] - Complete assembly identification with name, version, culture, and strong name
//! - [`AssemblyVersion`] - Four-part version numbering (major.minor.build.revision)
//! - [`PublicKeyToken`] - 8-byte strong name token
//! - [`AssemblyNameFlags`] - ECMA-335 `AssemblyFlags` word
//!
//! ## Comparison
//! - [`ComparisonPolicy`] - `Strict` vs. `IgnoreRetargetable` treatment of the retargetable flag
//! - [`AssemblyIdentityComparer`] - Singleton-per-policy ordering, equality, and hashing
//! - [`StrictKey`] / [`RetargetableAgnosticKey`] - Policy-bound keys for standard containers
//!
//! # Usage Examples
//!
//! ```rust
//! use asmkey::identity::{
//!     AssemblyIdentity, AssemblyIdentityComparer, AssemblyNameFlags, AssemblyVersion,
//! };
//!
//! let reference = AssemblyIdentity::new(
//!     "System.Core",
//!     AssemblyVersion::new(3, 5, 0, 0),
//!     None,
//!     None,
//!     AssemblyNameFlags::RETARGETABLE,
//! );
//! let resolved = reference.clone().with_retargetable(false);
//!
//! // Strict keeps a retargetable reference and its resolution apart...
//! assert!(!AssemblyIdentityComparer::strict().equals(&reference, &resolved));
//!
//! // ...while IgnoreRetargetable unifies them.
//! assert!(AssemblyIdentityComparer::ignore_retargetable().equals(&reference, &resolved));
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are thread-safe and can be safely shared across
//! threads. Identities and keys serve as keys in concurrent collections, and
//! the comparer singletons may be used from any number of threads without
//! synchronization.

pub use assembly::{AssemblyIdentity, AssemblyNameFlags, PublicKeyToken};
pub use comparer::{AssemblyIdentityComparer, ComparisonPolicy};
pub use key::{RetargetableAgnosticKey, StrictKey};
pub use version::AssemblyVersion;

mod assembly;
mod comparer;
mod key;
mod version;
