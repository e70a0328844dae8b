//! Range and progression recognition for specialized loop code generation.
//!
//! A JVM backend can compile `for (i in a..b)`, `x in range`, and
//! `range.reversed()` down to plain counter loops and primitive compares,
//! but only after proving the call site really is the well-known
//! standard-library operation and not a user declaration that happens to
//! share its name. This crate is that recognition layer: pure lookup and
//! predicate functions over the resolver's symbol table, answering which
//! range family a type belongs to and which range operation a resolved
//! callable denotes.
//!
//! # Recognized families
//!
//! - **Primitive ranges**: `CharRange`, `IntRange`, `LongRange`
//! - **Primitive progressions**: `CharProgression`, `IntProgression`,
//!   `LongProgression`
//! - **Closed floating ranges**: `ClosedFloatRange`, `ClosedDoubleRange`
//! - **Generic closed ranges**: `ClosedRange<T>`,
//!   `ClosedFloatingPointRange<T>`, `ComparableRange<T>`
//!
//! # Answer shapes
//!
//! Unrecognized or malformed input always yields `None`/`false`: the
//! backend falls back to generic interface dispatch, which is slower but
//! correct. Only two operations can fail harder, and both signal a broken
//! invariant in the surrounding pipeline rather than anything about user
//! source: [`loop_element_type`] when a loop's `next()` binding is missing,
//! and [`asm_range_element_type`] when a callable the caller vouched for
//! does not construct a recognized range. Those return [`InternalError`]
//! and abort compilation of the unit.
//!
//! # Example
//!
//! ```rust
//! use range_codegen::{builtins, classify, Declaration, ElementKind, RangeFamily, TypeRef};
//!
//! let int_range = TypeRef::of(Declaration::class("IntRange", builtins::RANGES_PACKAGE));
//! assert_eq!(
//!     classify(&int_range),
//!     Some(RangeFamily::PrimitiveRange(ElementKind::Int))
//! );
//!
//! // A same-named type elsewhere is left to generic dispatch.
//! let shadowed = TypeRef::of(Declaration::class("IntRange", "my.lib"));
//! assert_eq!(classify(&shadowed), None);
//! ```

#![warn(clippy::all)]

pub mod asm;
pub mod binding;
pub mod descriptors;
pub mod ranges;

pub use asm::{asm_range_element_type, AsmElementType};
pub use binding::{loop_element_type, BindingContext, ExprId, ForLoopHeader};
pub use descriptors::{
    builtins, Callable, CallableOwner, Container, Declaration, DeclarationKind, PrimitiveKind,
    TypeRef,
};
pub use ranges::{
    calls, classify, closed_floating_point_range_element_type, is_range_or_progression,
    primitive_progression_element, primitive_range_element, range_element_type, ElementKind,
    FloatKind, RangeFamily,
};

use thiserror::Error;

/// Broken-invariant failures.
///
/// Distinct from the ordinary "not recognized" answers on purpose: a
/// `None`/`false` result tells the backend to fall back to generic
/// dispatch, while this type means a caller's guarantee did not hold and
/// the current unit must not be compiled further. The payloads carry
/// enough to point the internal-error diagnostic at the offending
/// expression or type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("for-loop has no range expression")]
    MissingLoopRange,

    #[error("no resolved next() call for loop range expression #{0}")]
    MissingNextCall(ExprId),

    #[error("`{callable}` does not construct a recognized range or progression (returns `{return_type}`)")]
    UnexpectedRangeType {
        callable: String,
        return_type: String,
    },
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_errors_render_their_subject() {
        let err = InternalError::MissingNextCall(ExprId(12));
        assert_eq!(
            err.to_string(),
            "no resolved next() call for loop range expression #12"
        );

        let err = InternalError::UnexpectedRangeType {
            callable: "kotlin.ranges.rangeTo".to_string(),
            return_type: "kotlin.String".to_string(),
        };
        assert!(err.to_string().contains("kotlin.String"));
    }
}
