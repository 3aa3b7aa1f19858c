// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # asmkey
//!
//! [![Crates.io](https://img.shields.io/crates/v/asmkey.svg)](https://crates.io/crates/asmkey)
//! [![Documentation](https://docs.rs/asmkey/badge.svg)](https://docs.rs/asmkey)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/asmkey/blob/main/LICENSE)
//!
//! Assembly identity comparison for .NET reference resolution. Built in pure Rust,
//! `asmkey` provides the identity value type, comparison policies, and container
//! keys that build tooling needs to deduplicate, sort, and look up large sets of
//! assembly references deterministically.
//!
//! ## Features
//!
//! - **🎯 Two comparison policies** - `Strict` and `IgnoreRetargetable` treatment of the ECMA-335 `Retargetable` flag
//! - **♻️ Singleton comparers** - One shared, pointer-stable instance per policy; no per-use allocation
//! - **🗝️ Container-ready keys** - Policy-bound key types for `HashMap`, `BTreeMap`, `DashMap`, and `sort`
//! - **⚡ Deterministic total order** - Stable across insertion order, processes, and platforms
//! - **🛡️ Memory safe** - No unsafe code; contract violations surface as typed errors
//! - **🧵 Thread safe** - Every operation is pure and freely shareable across threads
//!
//! ## Quick Start
//!
//! Add `asmkey` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! asmkey = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use asmkey::prelude::*;
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
//! // A retargetable reference and its resolution: distinct under Strict,
//! // unified under IgnoreRetargetable.
//! assert!(!AssemblyIdentityComparer::strict().equals(&reference, &resolved));
//! assert!(AssemblyIdentityComparer::ignore_retargetable().equals(&reference, &resolved));
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use asmkey::identity::{
//!     AssemblyIdentity, AssemblyIdentityComparer, AssemblyNameFlags, AssemblyVersion,
//! };
//!
//! let mut refs = vec![
//!     AssemblyIdentity::new(
//!         "System.Xml",
//!         AssemblyVersion::new(4, 0, 0, 0),
//!         None,
//!         None,
//!         AssemblyNameFlags::empty(),
//!     ),
//!     AssemblyIdentity::new(
//!         "mscorlib",
//!         AssemblyVersion::new(4, 0, 0, 0),
//!         None,
//!         None,
//!         AssemblyNameFlags::empty(),
//!     ),
//! ];
//!
//! // Deterministic ordering for reproducible resolution output
//! let comparer = AssemblyIdentityComparer::strict();
//! refs.sort_by(|a, b| comparer.compare(a, b));
//! assert_eq!(refs[0].simple_name(), "mscorlib");
//! ```
//!
//! ## Architecture
//!
//! `asmkey` is organized into a small set of modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`identity`] - Identity values, comparison policies, comparer singletons, and container keys
//! - [`Error`] and [`Result`] - Error handling for the type-erased operations
//!
//! ### Comparison Model
//!
//! Identities compare field-lexicographically: simple name (ASCII
//! case-insensitive), version, culture, public key token, and finally the
//! `Retargetable` flag when the policy considers it. For every policy the
//! equality is an equivalence relation and the order is total and consistent
//! with it.
//!
//! Hashing carries one deliberate asymmetry: the comparer's
//! [`hash_one`](identity::AssemblyIdentityComparer::hash_one) always uses the
//! identity's intrinsic (retargetable-inclusive) hash, so under
//! `IgnoreRetargetable` an equal pair can hash differently. The
//! [`RetargetableAgnosticKey`](identity::RetargetableAgnosticKey) provides
//! the policy-consistent hash for native hash containers. See the comparer
//! documentation for details.
//!
//! ## Standards Compliance
//!
//! Identity components and the `AssemblyFlags` word (including the
//! `Retargetable` bit, 0x0100) follow the **ECMA-335 specification**
//! (6th edition) for the Common Language Infrastructure.
//!
//! ### References
//!
//! - [ECMA-335 Standard](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Official CLI specification
//! - [.NET Runtime](https://github.com/dotnet/runtime) - Microsoft's reference implementation
//!
//! ## Error Handling
//!
//! The strongly-typed operations are infallible. Only the type-erased
//! adapters return [`Result`], failing with [`Error::InvalidArgumentType`]
//! when an operand is not an [`identity::AssemblyIdentity`]:
//!
//! ```rust
//! use asmkey::{identity::AssemblyIdentityComparer, Error};
//!
//! let comparer = AssemblyIdentityComparer::strict();
//! match comparer.hash_one_erased(&"not an identity") {
//!     Ok(hash) => println!("hash: {:016x}", hash),
//!     Err(Error::InvalidArgumentType { operand }) => println!("bad {} operand", operand),
//! }
//! ```
//!
//! ## Testing
//!
//! The test suite covers the comparison contract (equivalence, antisymmetry,
//! order/equality consistency) and concurrent use of the singletons:
//!
//! ```bash
//! cargo test
//! cargo bench  # criterion benchmarks over representative reference sets
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// This module provides a curated selection of the most frequently used types
/// from across the asmkey library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use asmkey::prelude::*;
///
/// let comparer = AssemblyIdentityComparer::for_policy(ComparisonPolicy::Strict);
/// assert_eq!(comparer.policy(), ComparisonPolicy::Strict);
/// ```
pub mod prelude;

/// Assembly identity values and policy-driven comparison.
///
/// This module contains everything reference resolution keys on:
///
/// # Key Types
///
/// - [`identity::AssemblyIdentity`] - Name, version, culture, strong name token, and flags
/// - [`identity::AssemblyVersion`] - Four-part version numbering
/// - [`identity::PublicKeyToken`] - 8-byte strong name token
/// - [`identity::ComparisonPolicy`] - `Strict` vs. `IgnoreRetargetable`
/// - [`identity::AssemblyIdentityComparer`] - Singleton-per-policy ordering, equality, and hashing
/// - [`identity::StrictKey`] / [`identity::RetargetableAgnosticKey`] - Policy-bound container keys
///
/// # Examples
///
/// ```rust
/// use asmkey::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion, PublicKeyToken};
///
/// let mscorlib = AssemblyIdentity::new(
///     "mscorlib",
///     AssemblyVersion::new(4, 0, 0, 0),
///     None,
///     Some(PublicKeyToken::from_bytes([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89])),
///     AssemblyNameFlags::empty(),
/// );
/// println!("{}", mscorlib.display_name());
/// ```
pub mod identity;

/// `asmkey` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use asmkey::{identity::AssemblyIdentityComparer, Result};
///
/// fn strict_hash(value: &dyn std::any::Any) -> Result<u64> {
///     AssemblyIdentityComparer::strict().hash_one_erased(value)
/// }
///
/// assert!(strict_hash(&42u32).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `asmkey` Error type
///
/// The main error type for all operations in this crate. The only reachable
/// failure is a type-erased operand that is not an
/// [`identity::AssemblyIdentity`].
///
/// # Examples
///
/// ```rust
/// use asmkey::{identity::AssemblyIdentityComparer, Error};
///
/// let comparer = AssemblyIdentityComparer::strict();
/// let err = comparer.hash_one_erased(&1u8).unwrap_err();
/// assert!(matches!(err, Error::InvalidArgumentType { operand: "identity" }));
/// ```
pub use error::Error;

/// Main entry points for comparing assembly identities.
///
/// See [`identity::AssemblyIdentityComparer`] for the comparison contract and
/// the singleton accessors.
///
/// # Example
///
/// ```rust
/// use asmkey::{AssemblyIdentity, AssemblyIdentityComparer, ComparisonPolicy};
/// use asmkey::identity::{AssemblyNameFlags, AssemblyVersion};
///
/// let identity = AssemblyIdentity::new(
///     "Foo",
///     AssemblyVersion::new(1, 0, 0, 0),
///     None,
///     None,
///     AssemblyNameFlags::empty(),
/// );
///
/// let comparer = AssemblyIdentityComparer::for_policy(ComparisonPolicy::IgnoreRetargetable);
/// assert!(comparer.equals(&identity, &identity.clone().with_retargetable(true)));
/// ```
pub use identity::{AssemblyIdentity, AssemblyIdentityComparer, ComparisonPolicy};
