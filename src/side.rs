//! The discriminant of a two-alternative container.

use core::fmt;

/// Which of the two alternatives is live.
///
/// Exactly one side is ever reported; there is no "neither" and no "both".
/// `Left` orders before `Right`.
///
/// # Examples
///
/// ```rust
/// use inline_either::Side;
///
/// assert!(Side::Left.is_left());
/// assert_eq!(Side::Left.flip(), Side::Right);
/// assert_eq!(Side::Right.to_string(), "right");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The first alternative, `L`.
    Left,
    /// The second alternative, `R`.
    Right,
}

impl Side {
    /// Returns `true` for [`Side::Left`].
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Returns `true` for [`Side::Right`].
    #[inline]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Returns the other side.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
