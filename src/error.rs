use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The strongly-typed comparison operations are infallible by construction;
/// the only failure this crate can produce is a type-erased operand that is
/// not an [`AssemblyIdentity`](crate::identity::AssemblyIdentity). Such a
/// mismatch is a caller contract violation and is surfaced immediately rather
/// than silently reported as "unequal" or as an arbitrary ordering.
///
/// # Examples
///
/// ```rust
/// use asmkey::{identity::AssemblyIdentityComparer, Error};
///
/// let comparer = AssemblyIdentityComparer::strict();
///
/// match comparer.equals_erased(&42u32, &42u32) {
///     Ok(_) => unreachable!("integers are not assembly identities"),
///     Err(Error::InvalidArgumentType { operand }) => {
///         eprintln!("bad {} operand", operand);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A type-erased operand was not an [`AssemblyIdentity`](crate::identity::AssemblyIdentity).
    ///
    /// Produced by
    /// [`compare_erased`](crate::identity::AssemblyIdentityComparer::compare_erased),
    /// [`equals_erased`](crate::identity::AssemblyIdentityComparer::equals_erased), and
    /// [`hash_one_erased`](crate::identity::AssemblyIdentityComparer::hash_one_erased)
    /// when a downcast fails. The operand name identifies which argument
    /// violated the contract.
    #[error("the {operand} operand is not an AssemblyIdentity")]
    InvalidArgumentType {
        /// Which operand failed the downcast: `"left"`, `"right"`, or
        /// `"identity"` for the single-operand hash entry point.
        operand: &'static str,
    },
}
