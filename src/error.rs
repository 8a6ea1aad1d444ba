//! Error type for checked alternative access.

use core::fmt;

use crate::Side;

/// Returned when an accessor asks for the alternative that is not live.
///
/// The panicking accessors ([`Either::as_left`] and friends) panic with this
/// error's message; the `try_*` accessors return it.
///
/// # Examples
///
/// ```rust
/// use inline_either::{AccessError, Either, Side};
///
/// let either: Either<i32, char> = Either::new_right('c');
/// let error = either.try_left().unwrap_err();
/// assert_eq!(error, AccessError { expected: Side::Left, found: Side::Right });
/// assert_eq!(
///     error.to_string(),
///     "expected the left alternative, found the right alternative"
/// );
/// ```
///
/// [`Either::as_left`]: crate::Either::as_left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessError {
    /// The side the caller asked for.
    pub expected: Side,
    /// The side that is actually live.
    pub found: Side,
}

impl AccessError {
    pub(crate) const fn wrong_side(found: Side) -> Self {
        Self {
            expected: found.flip(),
            found,
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "expected the {} alternative, found the {} alternative",
            self.expected, self.found
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_wrong_side_expects_the_other_side() {
        let error = AccessError::wrong_side(Side::Left);
        assert_eq!(error.expected, Side::Right);
        assert_eq!(error.found, Side::Left);
    }

    #[rstest]
    fn test_display_names_both_sides() {
        let error = AccessError::wrong_side(Side::Left);
        assert_eq!(
            format!("{error}"),
            "expected the right alternative, found the left alternative"
        );
    }
}
