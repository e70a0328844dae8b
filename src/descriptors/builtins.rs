//! Well-known standard-library declarations.
//!
//! The frontend resolves these once; everything here just re-synthesizes
//! their identities so classifiers can compare by value without holding a
//! reference to the resolver.

use super::{Container, Declaration, DeclarationKind, PrimitiveKind, TypeRef};

/// Package holding the built-in types (`Int`, `Array`, `CharSequence`, ...).
pub const BUILT_INS_PACKAGE: &str = "kotlin";
/// Package holding the range and progression types and their constructors.
pub const RANGES_PACKAGE: &str = "kotlin.ranges";
/// Package holding collection extensions (`indices`, `withIndex`).
pub const COLLECTIONS_PACKAGE: &str = "kotlin.collections";
/// Package holding char-sequence extensions.
pub const TEXT_PACKAGE: &str = "kotlin.text";

/// Declaration of a built-in primitive class such as `kotlin.Int`.
pub fn primitive_class(kind: PrimitiveKind) -> Declaration {
    Declaration {
        name: kind.type_name().to_string(),
        container: Container::Package(BUILT_INS_PACKAGE.to_string()),
        kind: DeclarationKind::Primitive(kind),
    }
}

/// Non-nullable reference to a built-in primitive type.
pub fn primitive_type(kind: PrimitiveKind) -> TypeRef {
    TypeRef::of(primitive_class(kind))
}

pub fn char_type() -> TypeRef {
    primitive_type(PrimitiveKind::Char)
}

pub fn int_type() -> TypeRef {
    primitive_type(PrimitiveKind::Int)
}

pub fn long_type() -> TypeRef {
    primitive_type(PrimitiveKind::Long)
}

pub fn float_type() -> TypeRef {
    primitive_type(PrimitiveKind::Float)
}

pub fn double_type() -> TypeRef {
    primitive_type(PrimitiveKind::Double)
}

/// The `kotlin.Unit` type, used as the default callable return type.
pub fn unit_type() -> TypeRef {
    TypeRef::of(Declaration::class("Unit", BUILT_INS_PACKAGE))
}

fn declared_as(ty: &TypeRef, name: &str, package: &str) -> bool {
    ty.declaration
        .as_ref()
        .is_some_and(|decl| decl.is_top_level_in(name, package))
}

/// `kotlin.Array<T>`.
pub fn is_array(ty: &TypeRef) -> bool {
    declared_as(ty, "Array", BUILT_INS_PACKAGE)
}

/// One of the specialized array classes (`IntArray`, `CharArray`, ...).
pub fn is_primitive_array(ty: &TypeRef) -> bool {
    PrimitiveKind::ALL.iter().any(|kind| {
        declared_as(ty, &format!("{}Array", kind.type_name()), BUILT_INS_PACKAGE)
    })
}

/// `kotlin.collections.Collection<T>`.
pub fn is_collection(ty: &TypeRef) -> bool {
    declared_as(ty, "Collection", COLLECTIONS_PACKAGE)
}

/// `kotlin.collections.Iterable<T>`.
pub fn is_iterable(ty: &TypeRef) -> bool {
    declared_as(ty, "Iterable", COLLECTIONS_PACKAGE)
}

/// `kotlin.CharSequence`.
pub fn is_char_sequence(ty: &TypeRef) -> bool {
    declared_as(ty, "CharSequence", BUILT_INS_PACKAGE)
}

/// The top-level `kotlin.Comparable` interface.
pub fn is_comparable(decl: &Declaration) -> bool {
    decl.is_top_level_in("Comparable", BUILT_INS_PACKAGE)
}

/// Built-in primitive class carrying a numeric kind.
pub fn is_primitive_number_class(decl: &Declaration) -> bool {
    decl.primitive_kind().is_some_and(PrimitiveKind::is_numeric)
}
