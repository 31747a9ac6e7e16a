use std::num::IntErrorKind;

use crate::errors::SelectionError;

/// Resolves raw menu input to an index into a menu of `len` entries.
///
/// Surrounding whitespace is ignored. Integers too large for the platform are
/// out of range rather than unparseable.
pub fn resolve(raw: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = raw.trim();
    let out_of_range = || SelectionError::Range {
        input: trimmed.to_string(),
        len,
    };

    match trimmed.parse::<i64>() {
        Ok(value) => usize::try_from(value)
            .ok()
            .filter(|index| *index < len)
            .ok_or_else(out_of_range),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(out_of_range()),
            _ => Err(SelectionError::Parse {
                input: trimmed.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_valid_index() {
        for index in 0..7 {
            assert_eq!(resolve(&index.to_string(), 7), Ok(index));
        }
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(resolve("  2 \t", 3), Ok(2));
        assert_eq!(resolve("+1", 3), Ok(1));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "xyz", "1.5", "one", "1 2", "+", "0x1"] {
            assert!(
                matches!(resolve(raw, 3), Err(SelectionError::Parse { .. })),
                "`{raw}` should not parse"
            );
        }
    }

    #[test]
    fn rejects_negative_and_past_the_end() {
        for raw in ["-1", "3", "5", "-0000009"] {
            assert!(
                matches!(resolve(raw, 3), Err(SelectionError::Range { .. })),
                "`{raw}` should be out of range"
            );
        }
    }

    #[test]
    fn huge_numbers_are_out_of_range() {
        assert_eq!(
            resolve("99999999999999999999999", 3),
            Err(SelectionError::Range {
                input: "99999999999999999999999".into(),
                len: 3
            })
        );
        assert!(matches!(
            resolve("-99999999999999999999999", 3),
            Err(SelectionError::Range { .. })
        ));
    }

    #[test]
    fn resolving_twice_gives_same_index() {
        assert_eq!(resolve("1", 3), resolve("1", 3));
    }

    #[test]
    fn negative_zero_is_index_zero() {
        assert_eq!(resolve("-0", 3), Ok(0));
    }
}
