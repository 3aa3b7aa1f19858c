//! # asmkey Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the asmkey library. Import this module to get quick access to the
//! essential types for assembly identity comparison.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all asmkey operations
pub use crate::Error;

/// The result type used throughout asmkey
pub use crate::Result;

// ================================================================================================
// Identity Values
// ================================================================================================

/// Assembly identity and its components
pub use crate::identity::{AssemblyIdentity, AssemblyNameFlags, AssemblyVersion, PublicKeyToken};

// ================================================================================================
// Comparison
// ================================================================================================

/// Comparison policies and the per-policy singleton comparers
pub use crate::identity::{AssemblyIdentityComparer, ComparisonPolicy};

/// Policy-bound keys for standard containers
pub use crate::identity::{RetargetableAgnosticKey, StrictKey};
