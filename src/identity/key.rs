//! Container key adapters that bind a comparison policy to an identity.
//!
//! Rust containers consume comparison capabilities from the *key type*:
//! `HashMap`/`HashSet` need `Hash + Eq`, sorted structures need `Ord`. A
//! policy cannot be passed at that boundary, so these newtypes wrap an
//! [`AssemblyIdentity`] and wire one policy's singleton comparer into the
//! standard traits:
//!
//! - [`StrictKey`] - strict semantics; the `Retargetable` flag distinguishes
//!   keys.
//! - [`RetargetableAgnosticKey`] - retargetable-ignoring semantics; a
//!   retargetable reference and its concrete counterpart collapse into one
//!   key.
//!
//! Both are plain values usable with `HashMap`, `HashSet`,
//! `BTreeMap`/`BTreeSet`, concurrent maps like `DashMap`, and `sort`.
//!
//! # Examples
//!
//! Deduplication counts differ by policy:
//!
//! ```rust
//! use std::collections::HashSet;
//! use asmkey::identity::{
//!     AssemblyIdentity, AssemblyNameFlags, AssemblyVersion, RetargetableAgnosticKey, StrictKey,
//! };
//!
//! let retargetable = AssemblyIdentity::new(
//!     "Foo",
//!     AssemblyVersion::new(1, 0, 0, 0),
//!     None,
//!     None,
//!     AssemblyNameFlags::RETARGETABLE,
//! );
//! let fixed = retargetable.clone().with_retargetable(false);
//!
//! let strict: HashSet<StrictKey> = [retargetable.clone(), fixed.clone()]
//!     .map(StrictKey::new)
//!     .into_iter()
//!     .collect();
//! assert_eq!(strict.len(), 2);
//!
//! let agnostic: HashSet<RetargetableAgnosticKey> = [retargetable, fixed]
//!     .map(RetargetableAgnosticKey::new)
//!     .into_iter()
//!     .collect();
//! assert_eq!(agnostic.len(), 1);
//! ```

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::identity::{AssemblyIdentity, AssemblyIdentityComparer};

/// Identity key with strict comparison semantics.
///
/// Equality, ordering, and hashing all treat the `Retargetable` flag as
/// significant, delegating to the
/// [`Strict`](crate::identity::ComparisonPolicy::Strict) singleton comparer.
/// The hash is the identity's intrinsic hash, which matches strict equality
/// by construction, so the `Hash`/`Eq` contract holds in any std container.
#[derive(Debug, Clone)]
pub struct StrictKey(AssemblyIdentity);

impl StrictKey {
    /// Wrap an identity as a strict container key.
    #[must_use]
    pub fn new(identity: AssemblyIdentity) -> Self {
        Self(identity)
    }

    /// The wrapped identity.
    #[must_use]
    pub fn identity(&self) -> &AssemblyIdentity {
        &self.0
    }

    /// Unwrap the identity.
    #[must_use]
    pub fn into_inner(self) -> AssemblyIdentity {
        self.0
    }
}

impl From<AssemblyIdentity> for StrictKey {
    fn from(identity: AssemblyIdentity) -> Self {
        Self::new(identity)
    }
}

impl PartialEq for StrictKey {
    fn eq(&self, other: &Self) -> bool {
        AssemblyIdentityComparer::strict().equals(&self.0, &other.0)
    }
}

impl Eq for StrictKey {}

impl PartialOrd for StrictKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StrictKey {
    fn cmp(&self, other: &Self) -> Ordering {
        AssemblyIdentityComparer::strict().compare(&self.0, &other.0)
    }
}

impl Hash for StrictKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The intrinsic hash covers exactly the fields strict equality matches.
        self.0.hash(state);
    }
}

impl fmt::Display for StrictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity key with retargetable-ignoring comparison semantics.
///
/// Equality and ordering delegate to the
/// [`IgnoreRetargetable`](crate::identity::ComparisonPolicy::IgnoreRetargetable)
/// singleton comparer, so a retargetable reference and the concrete assembly
/// it retargets to are the same key.
///
/// # Hashing
///
/// Unlike the comparer's
/// [`hash_one`](crate::identity::AssemblyIdentityComparer::hash_one), which
/// keeps the identity's intrinsic hash and its documented caveat, this key
/// hashes **without** the `Retargetable` flag. Equal keys therefore hash
/// identically and the `Hash`/`Eq` contract holds, which is what makes this
/// type safe in `HashMap`, `HashSet`, and `DashMap`.
#[derive(Debug, Clone)]
pub struct RetargetableAgnosticKey(AssemblyIdentity);

impl RetargetableAgnosticKey {
    /// Wrap an identity as a retargetable-agnostic container key.
    #[must_use]
    pub fn new(identity: AssemblyIdentity) -> Self {
        Self(identity)
    }

    /// The wrapped identity.
    #[must_use]
    pub fn identity(&self) -> &AssemblyIdentity {
        &self.0
    }

    /// Unwrap the identity.
    #[must_use]
    pub fn into_inner(self) -> AssemblyIdentity {
        self.0
    }
}

impl From<AssemblyIdentity> for RetargetableAgnosticKey {
    fn from(identity: AssemblyIdentity) -> Self {
        Self::new(identity)
    }
}

impl PartialEq for RetargetableAgnosticKey {
    fn eq(&self, other: &Self) -> bool {
        AssemblyIdentityComparer::ignore_retargetable().equals(&self.0, &other.0)
    }
}

impl Eq for RetargetableAgnosticKey {}

impl PartialOrd for RetargetableAgnosticKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RetargetableAgnosticKey {
    fn cmp(&self, other: &Self) -> Ordering {
        AssemblyIdentityComparer::ignore_retargetable().compare(&self.0, &other.0)
    }
}

impl Hash for RetargetableAgnosticKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Omits the retargetable bit so equal keys hash identically.
        self.0.policy_hash(state, false);
    }
}

impl fmt::Display for RetargetableAgnosticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
