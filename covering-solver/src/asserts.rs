//! Leveled assertions used throughout the engine.
//!
//! Preconditions of the matrix primitives (double deletion, restoring an active header, indices
//! out of range) are checked at the [`COVERING_ASSERT_SIMPLE`] level, which is always enabled.
//! The mark-array sanity checks are [`COVERING_ASSERT_MODERATE`] and the full structural
//! consistency checks of the matrix are [`COVERING_ASSERT_ADVANCED`] or higher; these are only
//! enabled when testing or when the `debug-checks` feature is turned on.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const COVERING_ASSERT_LEVEL_DEFINITION: u8 = COVERING_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const COVERING_ASSERT_LEVEL_DEFINITION: u8 = COVERING_ASSERT_EXTREME;

pub const COVERING_ASSERT_SIMPLE: u8 = 1;
pub const COVERING_ASSERT_MODERATE: u8 = 2;
pub const COVERING_ASSERT_ADVANCED: u8 = 3;
pub const COVERING_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! covering_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::COVERING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COVERING_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! covering_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::COVERING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COVERING_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! covering_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::COVERING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COVERING_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! covering_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::COVERING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COVERING_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! covering_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::COVERING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COVERING_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
