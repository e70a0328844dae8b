//! Static lookup tables for the primitive range and progression families.
//!
//! Built once on first access from the closed [`ElementKind`] set and never
//! mutated, so concurrent compilation threads can read them without locking.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::ElementKind;
use crate::descriptors::builtins::RANGES_PACKAGE;

/// `kotlin.ranges.CharRange`, `IntRange`, `LongRange` keyed by
/// fully-qualified name.
pub static RANGE_ELEMENT_TYPES: LazyLock<HashMap<String, ElementKind>> = LazyLock::new(|| {
    ElementKind::ALL
        .iter()
        .map(|&kind| {
            (
                format!("{}.{}Range", RANGES_PACKAGE, kind.type_name()),
                kind,
            )
        })
        .collect()
});

/// `kotlin.ranges.CharProgression`, `IntProgression`, `LongProgression`
/// keyed by fully-qualified name.
pub static PROGRESSION_ELEMENT_TYPES: LazyLock<HashMap<String, ElementKind>> =
    LazyLock::new(|| {
        ElementKind::ALL
            .iter()
            .map(|&kind| {
                (
                    format!("{}.{}Progression", RANGES_PACKAGE, kind.type_name()),
                    kind,
                )
            })
            .collect()
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_all_supported_kinds() {
        assert_eq!(RANGE_ELEMENT_TYPES.len(), ElementKind::ALL.len());
        assert_eq!(PROGRESSION_ELEMENT_TYPES.len(), ElementKind::ALL.len());
        for kind in ElementKind::ALL {
            let range = format!("kotlin.ranges.{}Range", kind.type_name());
            let progression = format!("kotlin.ranges.{}Progression", kind.type_name());
            assert_eq!(RANGE_ELEMENT_TYPES.get(&range), Some(&kind));
            assert_eq!(PROGRESSION_ELEMENT_TYPES.get(&progression), Some(&kind));
        }
    }

    #[test]
    fn test_tables_are_disjoint() {
        for key in RANGE_ELEMENT_TYPES.keys() {
            assert!(
                !PROGRESSION_ELEMENT_TYPES.contains_key(key),
                "{} appears in both tables",
                key
            );
        }
    }
}
