//! JVM type tags for specialized range elements.
//!
//! The emitter works on unboxed JVM primitives, so once a call site is
//! recognized as constructing a range or progression it needs the runtime
//! representation tag of the element type, not the nominal type itself.

use tracing::debug;

use crate::descriptors::{Callable, PrimitiveKind};
use crate::ranges::{self, ElementKind};
use crate::InternalError;

/// Runtime representation tag for a specialized range element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsmElementType {
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl AsmElementType {
    /// JVM type descriptor character.
    pub fn descriptor(self) -> char {
        match self {
            AsmElementType::Char => 'C',
            AsmElementType::Int => 'I',
            AsmElementType::Long => 'J',
            AsmElementType::Float => 'F',
            AsmElementType::Double => 'D',
        }
    }
}

impl From<ElementKind> for AsmElementType {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Char => AsmElementType::Char,
            ElementKind::Int => AsmElementType::Int,
            ElementKind::Long => AsmElementType::Long,
        }
    }
}

/// Representation tag for the element of the range or progression the given
/// callable constructs.
///
/// Tries the primitive range table, then the progression table, then a
/// `ClosedFloatingPointRange` return type. The caller guarantees the
/// callable constructs a recognized range; anything else is a mismatch
/// between this classifier and the caller and aborts the unit rather than
/// emitting a wrong tag.
pub fn asm_range_element_type(callee: &Callable) -> Result<AsmElementType, InternalError> {
    let return_type = &callee.return_type;

    if let Some(kind) = ranges::primitive_range_element(return_type) {
        return Ok(kind.into());
    }
    if let Some(kind) = ranges::primitive_progression_element(return_type) {
        return Ok(kind.into());
    }
    if let Some(element) = ranges::closed_floating_point_range_element_type(return_type) {
        match element.primitive_kind() {
            Some(PrimitiveKind::Double) => return Ok(AsmElementType::Double),
            Some(PrimitiveKind::Float) => return Ok(AsmElementType::Float),
            _ => {}
        }
    }

    debug!(callee = %callee, ty = %return_type, "no element tag for claimed range constructor");
    Err(InternalError::UnexpectedRangeType {
        callable: callee.to_string(),
        return_type: return_type.to_string(),
    })
}
