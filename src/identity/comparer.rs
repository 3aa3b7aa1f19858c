//! Pluggable comparison strategies over assembly identities.
//!
//! Reference resolution deduplicates, sorts, and looks up large sets of
//! assembly references. All of those operations funnel through one component,
//! [`AssemblyIdentityComparer`]: a stateless strategy that carries a
//! [`ComparisonPolicy`] and exposes ordering, equality, and hashing over
//! [`AssemblyIdentity`] values.
//!
//! # Policies
//!
//! - [`ComparisonPolicy::Strict`] - the `Retargetable` flag is part of the
//!   identity; references differing only in that flag are distinct.
//! - [`ComparisonPolicy::IgnoreRetargetable`] - the flag is ignored, so a
//!   retargetable reference unifies with the concrete assembly it retargets
//!   to.
//!
//! # Singletons
//!
//! Exactly one comparer exists per policy for the lifetime of the process.
//! [`AssemblyIdentityComparer::strict`] and
//! [`AssemblyIdentityComparer::ignore_retargetable`] return `&'static`
//! handles that are pointer-identical on every call, so any number of
//! containers can share them without allocation.
//!
//! # Examples
//!
//! ```rust
//! use asmkey::identity::{
//!     AssemblyIdentity, AssemblyIdentityComparer, AssemblyNameFlags, AssemblyVersion,
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
//! assert!(!AssemblyIdentityComparer::strict().equals(&retargetable, &fixed));
//! assert!(AssemblyIdentityComparer::ignore_retargetable().equals(&retargetable, &fixed));
//! ```
//!
//! # Thread Safety
//!
//! Comparers hold no mutable state. Any number of threads may call any
//! operation on the same singleton concurrently without synchronization.

use std::{
    any::Any,
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use strum::{EnumCount, EnumIter};

use crate::{identity::AssemblyIdentity, Error, Result};

/// Policy selecting how the `Retargetable` flag participates in comparison.
///
/// The policy is fixed at comparer construction and never changes. It is the
/// comparer's only state; everything else a comparison needs travels in its
/// operands.
///
/// # Policy Selection
///
/// Use [`Strict`](Self::Strict) when retargetable and non-retargetable
/// references to the same assembly must stay distinct, such as when recording
/// references exactly as metadata declares them. Use
/// [`IgnoreRetargetable`](Self::IgnoreRetargetable) when a retargetable
/// reference should unify with the implementation it retargets to, the usual
/// choice during reference resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ComparisonPolicy {
    /// The `Retargetable` flag is a significant part of the identity.
    ///
    /// Two identities that differ only in the flag compare unequal and
    /// nonzero under this policy.
    Strict,

    /// The `Retargetable` flag is ignored entirely.
    ///
    /// Two identities that differ only in the flag compare equal and zero
    /// under this policy.
    IgnoreRetargetable,
}

impl ComparisonPolicy {
    /// Whether the `Retargetable` flag is significant under this policy.
    #[must_use]
    pub const fn considers_retargetable(self) -> bool {
        matches!(self, Self::Strict)
    }
}

static STRICT: AssemblyIdentityComparer =
    AssemblyIdentityComparer::new(ComparisonPolicy::Strict);
static IGNORE_RETARGETABLE: AssemblyIdentityComparer =
    AssemblyIdentityComparer::new(ComparisonPolicy::IgnoreRetargetable);

/// Comparison strategy over [`AssemblyIdentity`] values.
///
/// A comparer is a pure function of its policy and its operands: ordering,
/// equality, and hashing with no other state and no side effects. Instances
/// cannot be constructed by callers; the two process-wide singletons (one per
/// [`ComparisonPolicy`]) are reached through [`strict()`](Self::strict),
/// [`ignore_retargetable()`](Self::ignore_retargetable), or
/// [`for_policy()`](Self::for_policy).
///
/// # Contract
///
/// For every policy, [`equals`](Self::equals) is an equivalence relation
/// (reflexive, symmetric, transitive) and [`compare`](Self::compare) is a
/// total order consistent with it: `compare(a, b) == Ordering::Equal` exactly
/// when `equals(a, b)`. The order is deterministic, independent of insertion
/// order, and stable across processes.
///
/// # Hashing Caveat
///
/// [`hash_one`](Self::hash_one) delegates to the identity's intrinsic hash,
/// which always includes the `Retargetable` flag. Under
/// [`IgnoreRetargetable`](ComparisonPolicy::IgnoreRetargetable) two equal
/// identities can therefore hash differently. See the method documentation
/// and [`RetargetableAgnosticKey`](crate::identity::RetargetableAgnosticKey)
/// for the container-safe alternative.
///
/// # Examples
///
/// Sorting a reference set deterministically:
///
/// ```rust
/// use asmkey::identity::{
///     AssemblyIdentity, AssemblyIdentityComparer, AssemblyNameFlags, AssemblyVersion,
/// };
///
/// let comparer = AssemblyIdentityComparer::strict();
/// let mut refs = vec![
///     AssemblyIdentity::new(
///         "System.Xml",
///         AssemblyVersion::new(4, 0, 0, 0),
///         None,
///         None,
///         AssemblyNameFlags::empty(),
///     ),
///     AssemblyIdentity::new(
///         "mscorlib",
///         AssemblyVersion::new(4, 0, 0, 0),
///         None,
///         None,
///         AssemblyNameFlags::empty(),
///     ),
///     AssemblyIdentity::new(
///         "System",
///         AssemblyVersion::new(2, 0, 0, 0),
///         None,
///         None,
///         AssemblyNameFlags::empty(),
///     ),
/// ];
///
/// refs.sort_by(|a, b| comparer.compare(a, b));
///
/// let names: Vec<&str> = refs.iter().map(AssemblyIdentity::simple_name).collect();
/// assert_eq!(names, ["mscorlib", "System", "System.Xml"]);
/// ```
#[derive(Debug)]
pub struct AssemblyIdentityComparer {
    /// Retargetable significance for every operation on this comparer.
    policy: ComparisonPolicy,
}

impl AssemblyIdentityComparer {
    /// Comparers are only ever constructed as the two module statics.
    const fn new(policy: ComparisonPolicy) -> Self {
        Self { policy }
    }

    /// The shared comparer for [`ComparisonPolicy::Strict`].
    ///
    /// Every call returns the same `&'static` instance; retrievals are
    /// pointer-identical across call sites and threads.
    #[must_use]
    pub fn strict() -> &'static Self {
        &STRICT
    }

    /// The shared comparer for [`ComparisonPolicy::IgnoreRetargetable`].
    ///
    /// Every call returns the same `&'static` instance; retrievals are
    /// pointer-identical across call sites and threads.
    #[must_use]
    pub fn ignore_retargetable() -> &'static Self {
        &IGNORE_RETARGETABLE
    }

    /// The shared comparer for the given policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmkey::identity::{AssemblyIdentityComparer, ComparisonPolicy};
    ///
    /// let comparer = AssemblyIdentityComparer::for_policy(ComparisonPolicy::Strict);
    /// assert!(std::ptr::eq(comparer, AssemblyIdentityComparer::strict()));
    /// ```
    #[must_use]
    pub fn for_policy(policy: ComparisonPolicy) -> &'static Self {
        match policy {
            ComparisonPolicy::Strict => Self::strict(),
            ComparisonPolicy::IgnoreRetargetable => Self::ignore_retargetable(),
        }
    }

    /// The policy this comparer applies.
    #[must_use]
    pub const fn policy(&self) -> ComparisonPolicy {
        self.policy
    }

    /// Three-way comparison of two identities under this comparer's policy.
    ///
    /// The result is a deterministic total order (fields compared in a fixed
    /// order: name, version, culture, public key token, then the
    /// retargetable flag when the policy considers it). Antisymmetric and
    /// transitive; returns [`Ordering::Equal`] exactly when
    /// [`equals`](Self::equals) returns `true`.
    ///
    /// Suitable for direct use with `sort_by` and friends.
    #[must_use]
    pub fn compare(&self, left: &AssemblyIdentity, right: &AssemblyIdentity) -> Ordering {
        left.compare_with(right, self.policy.considers_retargetable())
    }

    /// Equality of two identities under this comparer's policy.
    ///
    /// Reflexive, symmetric, and transitive. Under
    /// [`IgnoreRetargetable`](ComparisonPolicy::IgnoreRetargetable) two
    /// identities differing only in the `Retargetable` flag are equal; under
    /// [`Strict`](ComparisonPolicy::Strict) they are not.
    #[must_use]
    pub fn equals(&self, left: &AssemblyIdentity, right: &AssemblyIdentity) -> bool {
        left.equals_with(right, self.policy.considers_retargetable())
    }

    /// Hash an identity with its intrinsic (policy-independent) hash.
    ///
    /// Hashes are deterministic within a process and cheap to recompute; the
    /// returned `u64` is suitable for bucketing and fingerprinting but is not
    /// a stable serialization format.
    ///
    /// # Consistency Caveat
    ///
    /// The intrinsic hash always includes the `Retargetable` flag, matching
    /// the identity's own [`Hash`] implementation, even on the
    /// [`IgnoreRetargetable`](ComparisonPolicy::IgnoreRetargetable) comparer.
    /// `equals(a, b)` therefore implies `hash_one(a) == hash_one(b)` under
    /// [`Strict`](ComparisonPolicy::Strict), but **not** under
    /// `IgnoreRetargetable`, where a pair differing only in the flag is equal
    /// yet hashes differently. Long-standing consumer behavior depends on
    /// this exact delegation, so it is preserved rather than corrected.
    ///
    /// Hash-keyed containers must not pair this hash with
    /// `IgnoreRetargetable` equality. Use
    /// [`RetargetableAgnosticKey`](crate::identity::RetargetableAgnosticKey),
    /// whose `Hash` omits the flag, for retargetable-agnostic maps and sets.
    #[must_use]
    pub fn hash_one(&self, identity: &AssemblyIdentity) -> u64 {
        let mut hasher = DefaultHasher::new();
        identity.hash(&mut hasher);
        hasher.finish()
    }

    /// Three-way comparison of two type-erased operands.
    ///
    /// Thin adapter over [`compare`](Self::compare) for callers that route
    /// heterogeneous values through `&dyn Any`. Both operands must be
    /// [`AssemblyIdentity`] values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgumentType`] naming the offending operand
    /// (`"left"` or `"right"`) when a downcast fails. A mismatch is a caller
    /// contract violation and is never reported as an ordering.
    pub fn compare_erased(&self, left: &dyn Any, right: &dyn Any) -> Result<Ordering> {
        Ok(self.compare(downcast(left, "left")?, downcast(right, "right")?))
    }

    /// Equality of two type-erased operands.
    ///
    /// Thin adapter over [`equals`](Self::equals); both operands must be
    /// [`AssemblyIdentity`] values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgumentType`] naming the offending operand
    /// (`"left"` or `"right"`) when a downcast fails. A mismatch is never
    /// reported as `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmkey::identity::{
    ///     AssemblyIdentity, AssemblyIdentityComparer, AssemblyNameFlags, AssemblyVersion,
    /// };
    /// use asmkey::Error;
    ///
    /// let comparer = AssemblyIdentityComparer::strict();
    /// let identity = AssemblyIdentity::new(
    ///     "Foo",
    ///     AssemblyVersion::new(1, 0, 0, 0),
    ///     None,
    ///     None,
    ///     AssemblyNameFlags::empty(),
    /// );
    ///
    /// assert!(comparer.equals_erased(&identity, &identity).unwrap());
    /// assert!(matches!(
    ///     comparer.equals_erased(&identity, &"not an identity"),
    ///     Err(Error::InvalidArgumentType { operand: "right" })
    /// ));
    /// ```
    pub fn equals_erased(&self, left: &dyn Any, right: &dyn Any) -> Result<bool> {
        Ok(self.equals(downcast(left, "left")?, downcast(right, "right")?))
    }

    /// Hash a type-erased operand with the intrinsic hash.
    ///
    /// Thin adapter over [`hash_one`](Self::hash_one), including its
    /// consistency caveat.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgumentType`] with operand `"identity"` when
    /// the downcast fails.
    pub fn hash_one_erased(&self, identity: &dyn Any) -> Result<u64> {
        Ok(self.hash_one(downcast(identity, "identity")?))
    }
}

/// Downcast an erased operand, naming it in the error on failure.
fn downcast<'a>(operand: &'a dyn Any, name: &'static str) -> Result<&'a AssemblyIdentity> {
    operand
        .downcast_ref::<AssemblyIdentity>()
        .ok_or(Error::InvalidArgumentType { operand: name })
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::identity::{AssemblyNameFlags, AssemblyVersion};

    fn identity(name: &str, retargetable: bool) -> AssemblyIdentity {
        AssemblyIdentity::new(
            name,
            AssemblyVersion::new(1, 0, 0, 0),
            None,
            None,
            AssemblyNameFlags::empty(),
        )
        .with_retargetable(retargetable)
    }

    #[test]
    fn test_policy_considers_retargetable() {
        assert!(ComparisonPolicy::Strict.considers_retargetable());
        assert!(!ComparisonPolicy::IgnoreRetargetable.considers_retargetable());
    }

    #[test]
    fn test_policy_enum_is_closed() {
        assert_eq!(ComparisonPolicy::COUNT, 2);
        assert_eq!(ComparisonPolicy::iter().count(), 2);
    }

    #[test]
    fn test_singleton_pointer_stability() {
        assert!(ptr::eq(
            AssemblyIdentityComparer::strict(),
            AssemblyIdentityComparer::strict()
        ));
        assert!(ptr::eq(
            AssemblyIdentityComparer::ignore_retargetable(),
            AssemblyIdentityComparer::ignore_retargetable()
        ));
        assert!(!ptr::eq(
            AssemblyIdentityComparer::strict(),
            AssemblyIdentityComparer::ignore_retargetable()
        ));
    }

    #[test]
    fn test_for_policy_returns_singletons() {
        assert!(ptr::eq(
            AssemblyIdentityComparer::for_policy(ComparisonPolicy::Strict),
            AssemblyIdentityComparer::strict()
        ));
        assert!(ptr::eq(
            AssemblyIdentityComparer::for_policy(ComparisonPolicy::IgnoreRetargetable),
            AssemblyIdentityComparer::ignore_retargetable()
        ));

        for policy in ComparisonPolicy::iter() {
            assert_eq!(AssemblyIdentityComparer::for_policy(policy).policy(), policy);
        }
    }

    #[test]
    fn test_policy_differentiation() {
        let retargetable = identity("Foo", true);
        let fixed = identity("Foo", false);

        let strict = AssemblyIdentityComparer::strict();
        assert!(!strict.equals(&retargetable, &fixed));
        assert_ne!(strict.compare(&retargetable, &fixed), Ordering::Equal);

        let agnostic = AssemblyIdentityComparer::ignore_retargetable();
        assert!(agnostic.equals(&retargetable, &fixed));
        assert_eq!(agnostic.compare(&retargetable, &fixed), Ordering::Equal);
    }

    #[test]
    fn test_different_names_unequal_under_both_policies() {
        let foo = identity("Foo", false);
        let bar = identity("Bar", false);

        for policy in ComparisonPolicy::iter() {
            let comparer = AssemblyIdentityComparer::for_policy(policy);
            assert!(!comparer.equals(&foo, &bar));
            assert_ne!(comparer.compare(&foo, &bar), Ordering::Equal);
        }
    }

    #[test]
    fn test_compare_antisymmetry() {
        let foo = identity("Foo", true);
        let bar = identity("Bar", false);

        for policy in ComparisonPolicy::iter() {
            let comparer = AssemblyIdentityComparer::for_policy(policy);
            assert_eq!(
                comparer.compare(&foo, &bar),
                comparer.compare(&bar, &foo).reverse()
            );
        }
    }

    #[test]
    fn test_hash_one_agrees_with_strict_equality() {
        let lower = identity("mscorlib", false);
        let upper = identity("MSCORLIB", false);

        let strict = AssemblyIdentityComparer::strict();
        assert!(strict.equals(&lower, &upper));
        assert_eq!(strict.hash_one(&lower), strict.hash_one(&upper));
    }

    #[test]
    fn test_hash_one_keeps_retargetable_bit_regardless_of_policy() {
        let retargetable = identity("Foo", true);
        let fixed = identity("Foo", false);

        // Equal under IgnoreRetargetable, yet the intrinsic hash still sees
        // the flag. This pins the documented caveat.
        let agnostic = AssemblyIdentityComparer::ignore_retargetable();
        assert!(agnostic.equals(&retargetable, &fixed));
        assert_ne!(
            agnostic.hash_one(&retargetable),
            agnostic.hash_one(&fixed)
        );

        // The strict comparer hashes identically because it also sees the flag.
        let strict = AssemblyIdentityComparer::strict();
        assert_eq!(
            strict.hash_one(&retargetable),
            agnostic.hash_one(&retargetable)
        );
    }

    #[test]
    fn test_compare_erased_delegates() {
        let foo = identity("Foo", false);
        let bar = identity("Bar", false);

        let comparer = AssemblyIdentityComparer::strict();
        assert_eq!(
            comparer.compare_erased(&foo, &bar).unwrap(),
            comparer.compare(&foo, &bar)
        );
    }

    #[test]
    fn test_erased_operand_type_mismatch() {
        let foo = identity("Foo", false);
        let comparer = AssemblyIdentityComparer::strict();

        assert!(matches!(
            comparer.compare_erased(&42u32, &foo),
            Err(Error::InvalidArgumentType { operand: "left" })
        ));
        assert!(matches!(
            comparer.compare_erased(&foo, &"wrong"),
            Err(Error::InvalidArgumentType { operand: "right" })
        ));
        assert!(matches!(
            comparer.equals_erased(&foo, &42u32),
            Err(Error::InvalidArgumentType { operand: "right" })
        ));
        assert!(matches!(
            comparer.hash_one_erased(&42u32),
            Err(Error::InvalidArgumentType { operand: "identity" })
        ));
    }

    #[test]
    fn test_erased_hash_matches_typed_hash() {
        let foo = identity("Foo", true);
        let comparer = AssemblyIdentityComparer::ignore_retargetable();

        assert_eq!(
            comparer.hash_one_erased(&foo).unwrap(),
            comparer.hash_one(&foo)
        );
    }

    #[test]
    fn test_comparer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssemblyIdentityComparer>();
        assert_send_sync::<ComparisonPolicy>();
    }
}
