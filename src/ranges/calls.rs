//! Per-call-site operation classifiers.
//!
//! Each predicate answers "does this resolved callable denote operation O
//! on a recognized receiver" and is evaluated at code-generation time per
//! call site. Results are not cached; callable descriptors are already
//! unique per call site in the caller's model.
//!
//! The indices/withIndex predicates are intentionally separate functions
//! rather than one parameterized check, so the emission backend can query
//! each construct's exact shape independently.

use crate::descriptors::builtins::{self, COLLECTIONS_PACKAGE, RANGES_PACKAGE, TEXT_PACKAGE};
use crate::descriptors::{Callable, CallableOwner, DeclarationKind, PrimitiveKind, TypeRef};

use super::{primitive_progression_element, primitive_range_element, range_element_type};

fn extension_receiver_matches(callable: &Callable, pred: impl Fn(&TypeRef) -> bool) -> bool {
    callable.extension_receiver.as_ref().is_some_and(pred)
}

/// `rangeTo` producing a primitive range.
///
/// Two recognition paths: the extension declared in `kotlin.ranges` on a
/// primitive receiver, and the member declared on a primitive numeric class
/// itself (`5.rangeTo(10)` resolves to the latter).
pub fn is_primitive_number_range_to(callable: &Callable) -> bool {
    if callable.is_top_level_in("rangeTo", RANGES_PACKAGE)
        && extension_receiver_matches(callable, TypeRef::is_primitive)
    {
        return true;
    }
    match &callable.owner {
        CallableOwner::Member(owner) => {
            callable.name == "rangeTo" && builtins::is_primitive_number_class(owner)
        }
        CallableOwner::Package(_) => false,
    }
}

/// The `until` extension producing a half-open primitive range.
pub fn is_primitive_number_until(callable: &Callable) -> bool {
    callable.is_top_level_in("until", RANGES_PACKAGE)
        && extension_receiver_matches(callable, TypeRef::is_primitive)
}

/// The `downTo` extension producing a descending progression.
///
/// Unlike `rangeTo`/`until` this tests the receiver's declaration rather
/// than the receiver type, so nullability does not matter here.
pub fn is_primitive_number_down_to(callable: &Callable) -> bool {
    callable.is_top_level_in("downTo", RANGES_PACKAGE)
        && extension_receiver_matches(callable, |receiver| {
            receiver
                .declaration
                .as_ref()
                .is_some_and(builtins::is_primitive_number_class)
        })
}

/// `indices` over `Array<T>` or a specialized primitive array.
pub fn is_array_or_primitive_array_indices(callable: &Callable) -> bool {
    callable.is_top_level_in("indices", COLLECTIONS_PACKAGE)
        && extension_receiver_matches(callable, |r| {
            builtins::is_array(r) || builtins::is_primitive_array(r)
        })
}

/// `indices` over a collection.
pub fn is_collection_indices(callable: &Callable) -> bool {
    callable.is_top_level_in("indices", COLLECTIONS_PACKAGE)
        && extension_receiver_matches(callable, builtins::is_collection)
}

/// `indices` over a char sequence.
pub fn is_char_sequence_indices(callable: &Callable) -> bool {
    callable.is_top_level_in("indices", TEXT_PACKAGE)
        && extension_receiver_matches(callable, builtins::is_char_sequence)
}

/// `withIndex` over `Array<T>` or a specialized primitive array.
pub fn is_array_or_primitive_array_with_index(callable: &Callable) -> bool {
    callable.is_top_level_in("withIndex", COLLECTIONS_PACKAGE)
        && extension_receiver_matches(callable, |r| {
            builtins::is_array(r) || builtins::is_primitive_array(r)
        })
}

/// `withIndex` over an iterable.
pub fn is_iterable_with_index(callable: &Callable) -> bool {
    callable.is_top_level_in("withIndex", COLLECTIONS_PACKAGE)
        && extension_receiver_matches(callable, builtins::is_iterable)
}

/// `withIndex` over a char sequence.
pub fn is_char_sequence_with_index(callable: &Callable) -> bool {
    callable.is_top_level_in("withIndex", TEXT_PACKAGE)
        && extension_receiver_matches(callable, builtins::is_char_sequence)
}

/// The `rangeTo` extension on a `Comparable`-bounded type parameter.
///
/// The receiver's declaration must be a type parameter with exactly one
/// upper bound, and that bound must be the top-level `Comparable`
/// interface. Zero or multiple bounds never qualify.
pub fn is_comparable_range_to(callable: &Callable) -> bool {
    if !callable.is_top_level_in("rangeTo", RANGES_PACKAGE) {
        return false;
    }
    let declaration = match callable
        .extension_receiver
        .as_ref()
        .and_then(|receiver| receiver.declaration.as_ref())
    {
        Some(declaration) => declaration,
        None => return false,
    };
    let upper_bounds = match &declaration.kind {
        DeclarationKind::TypeParameter { upper_bounds } => upper_bounds,
        _ => return false,
    };
    match upper_bounds.as_slice() {
        [bound] => bound.declaration.as_ref().is_some_and(builtins::is_comparable),
        _ => false,
    }
}

fn is_member_contains_on(callable: &Callable, interface: &str) -> bool {
    callable.name == "contains"
        && match &callable.owner {
            CallableOwner::Member(owner) => owner.is_top_level_in(interface, RANGES_PACKAGE),
            CallableOwner::Package(_) => false,
        }
}

/// Member `contains` declared on the `ClosedRange` interface.
pub fn is_closed_range_contains(callable: &Callable) -> bool {
    is_member_contains_on(callable, "ClosedRange")
}

/// Member `contains` declared on the `ClosedFloatingPointRange` interface.
///
/// Floating ranges are a distinct interface, so this is a separate shape
/// from [`is_closed_range_contains`].
pub fn is_closed_floating_point_range_contains(callable: &Callable) -> bool {
    is_member_contains_on(callable, "ClosedFloatingPointRange")
}

/// Member `contains` dispatched on a primitive range value.
pub fn is_primitive_range_contains(callable: &Callable) -> bool {
    callable.name == "contains"
        && callable.is_member()
        && callable
            .dispatch_receiver
            .as_ref()
            .is_some_and(|receiver| primitive_range_element(receiver).is_some())
}

/// Extension `contains` testing a value of one numeric type against a
/// range of another (`longRange.contains(anInt)` and friends).
///
/// Both sides are checked independently: the receiver's element type must
/// be primitive numeric, and so must the single value parameter.
pub fn is_primitive_number_range_extension_contains_primitive_number(
    callable: &Callable,
) -> bool {
    if callable.name != "contains" {
        return false;
    }
    let receiver = match &callable.extension_receiver {
        Some(receiver) => receiver,
        None => return false,
    };
    let element_is_numeric = range_element_type(receiver)
        .and_then(|element| element.primitive_kind())
        .is_some_and(PrimitiveKind::is_numeric);
    if !element_is_numeric {
        return false;
    }
    match callable.value_parameters.as_slice() {
        [parameter] => parameter
            .primitive_kind()
            .is_some_and(PrimitiveKind::is_numeric),
        _ => false,
    }
}

/// The `reversed` extension on a primitive progression.
pub fn is_primitive_progression_reversed(callable: &Callable) -> bool {
    callable.is_top_level_in("reversed", RANGES_PACKAGE)
        && extension_receiver_matches(callable, |receiver| {
            primitive_progression_element(receiver).is_some()
        })
}
