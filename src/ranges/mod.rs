//! Range and progression type classification.
//!
//! Maps a resolved type's nominal identity onto the closed set of families
//! the emission backend can specialize:
//!
//! - primitive ranges (`CharRange`, `IntRange`, `LongRange`)
//! - primitive progressions (`CharProgression`, `IntProgression`,
//!   `LongProgression`)
//! - the closed floating-point impl classes (`ClosedFloatRange`,
//!   `ClosedDoubleRange`)
//! - the generic interfaces (`ClosedRange<T>`,
//!   `ClosedFloatingPointRange<T>`) and `ComparableRange<T>`
//!
//! Every query answers `None`/`false` for anything else, which callers
//! treat as "emit generic interface dispatch". That covers malformed input
//! from error recovery as well; only the two operations returning
//! [`Result`](crate::InternalError) can fail harder.

use tracing::trace;

use crate::descriptors::builtins::{self, RANGES_PACKAGE};
use crate::descriptors::{Declaration, PrimitiveKind, TypeRef};

pub mod calls;
pub mod tables;

/// Element types that have dedicated range and progression specializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Char,
    Int,
    Long,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Char, ElementKind::Int, ElementKind::Long];

    /// Simple name used to synthesize `CharRange`, `IntProgression`, etc.
    pub fn type_name(self) -> &'static str {
        match self {
            ElementKind::Char => "Char",
            ElementKind::Int => "Int",
            ElementKind::Long => "Long",
        }
    }

    pub fn primitive(self) -> PrimitiveKind {
        match self {
            ElementKind::Char => PrimitiveKind::Char,
            ElementKind::Int => PrimitiveKind::Int,
            ElementKind::Long => PrimitiveKind::Long,
        }
    }

    /// The fixed built-in element type. The primitive range classes are
    /// non-generic, so this never comes from a type argument.
    pub fn builtin_type(self) -> TypeRef {
        builtins::primitive_type(self.primitive())
    }
}

/// Element kinds of the two closed floating-point range impl classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    Float,
    Double,
}

impl FloatKind {
    pub fn primitive(self) -> PrimitiveKind {
        match self {
            FloatKind::Float => PrimitiveKind::Float,
            FloatKind::Double => PrimitiveKind::Double,
        }
    }

    pub fn builtin_type(self) -> TypeRef {
        builtins::primitive_type(self.primitive())
    }
}

/// Which recognized family a type belongs to.
///
/// A flat sum type so the backend's dispatch is exhaustive; there is no
/// subtype relationship between the variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeFamily {
    PrimitiveRange(ElementKind),
    PrimitiveProgression(ElementKind),
    ClosedFloatingRange(FloatKind),
    /// `ClosedRange<T>` or `ClosedFloatingPointRange<T>` with its single
    /// type argument.
    GenericClosedRange(TypeRef),
    /// `ComparableRange<T>` with its single type argument.
    ComparableRange(TypeRef),
}

fn resolved_declaration(ty: &TypeRef) -> Option<&Declaration> {
    // Nullable ranges are boxed and iterate through the generic interface,
    // so they never qualify for specialization.
    if ty.nullable {
        return None;
    }
    ty.declaration.as_ref()
}

/// Element kind of a primitive range type (`IntRange` and friends).
///
/// `None` for nullable types, unresolvable types, and everything outside
/// the range table, including the progression types.
pub fn primitive_range_element(ty: &TypeRef) -> Option<ElementKind> {
    let fq_name = resolved_declaration(ty)?.fq_name()?;
    tables::RANGE_ELEMENT_TYPES.get(&fq_name).copied()
}

/// Element kind of a primitive progression type (`IntProgression` and
/// friends). Disjoint from [`primitive_range_element`].
pub fn primitive_progression_element(ty: &TypeRef) -> Option<ElementKind> {
    let fq_name = resolved_declaration(ty)?.fq_name()?;
    tables::PROGRESSION_ELEMENT_TYPES.get(&fq_name).copied()
}

/// Whether a fully-qualified name denotes any recognized primitive range or
/// progression type at all.
pub fn is_range_or_progression(fq_name: &str) -> bool {
    tables::RANGE_ELEMENT_TYPES.contains_key(fq_name)
        || tables::PROGRESSION_ELEMENT_TYPES.contains_key(fq_name)
}

fn single_argument(ty: &TypeRef) -> Option<TypeRef> {
    match ty.arguments.as_slice() {
        [argument] => Some(argument.clone()),
        _ => None,
    }
}

/// Classify a resolved type into its range family, if any.
///
/// The families are mutually exclusive by construction, so the check order
/// only mirrors the table layout. Generic arguments on the primitive
/// families are ignored; the generic families require exactly one.
pub fn classify(ty: &TypeRef) -> Option<RangeFamily> {
    let declaration = resolved_declaration(ty)?;

    if let Some(kind) = primitive_range_element(ty) {
        return Some(RangeFamily::PrimitiveRange(kind));
    }
    if let Some(kind) = primitive_progression_element(ty) {
        return Some(RangeFamily::PrimitiveProgression(kind));
    }
    if declaration.is_top_level_in("ClosedFloatRange", RANGES_PACKAGE) {
        return Some(RangeFamily::ClosedFloatingRange(FloatKind::Float));
    }
    if declaration.is_top_level_in("ClosedDoubleRange", RANGES_PACKAGE) {
        return Some(RangeFamily::ClosedFloatingRange(FloatKind::Double));
    }
    if declaration.is_top_level_in("ClosedRange", RANGES_PACKAGE)
        || declaration.is_top_level_in("ClosedFloatingPointRange", RANGES_PACKAGE)
    {
        return single_argument(ty).map(RangeFamily::GenericClosedRange);
    }
    if declaration.is_top_level_in("ComparableRange", RANGES_PACKAGE) {
        return single_argument(ty).map(RangeFamily::ComparableRange);
    }

    trace!(ty = %ty, "not a recognized range or progression type");
    None
}

/// Element type of any recognized range or progression type.
///
/// `None` means the backend must fall back to generic interface dispatch.
pub fn range_element_type(ty: &TypeRef) -> Option<TypeRef> {
    match classify(ty)? {
        RangeFamily::PrimitiveRange(kind) | RangeFamily::PrimitiveProgression(kind) => {
            Some(kind.builtin_type())
        }
        RangeFamily::ClosedFloatingRange(kind) => Some(kind.builtin_type()),
        RangeFamily::GenericClosedRange(element) | RangeFamily::ComparableRange(element) => {
            Some(element)
        }
    }
}

/// The single type argument of a `ClosedFloatingPointRange` value, or
/// `None` when the declaration or argument count does not match.
pub fn closed_floating_point_range_element_type(ty: &TypeRef) -> Option<TypeRef> {
    let declaration = resolved_declaration(ty)?;
    if !declaration.is_top_level_in("ClosedFloatingPointRange", RANGES_PACKAGE) {
        return None;
    }
    single_argument(ty)
}
