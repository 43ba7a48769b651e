/// Arguments of a range helper: none, an upper bound, or both bounds.
///
/// Helpers such as `range`, `int` or `Dictionary::list` accept `()`, `max`
/// or `(min, max)` and fill the missing bounds with their own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeArgs {
    #[default]
    Default,
    Max(i64),
    MinMax(i64, i64),
}

impl RangeArgs {
    /// Resolves to `(min, max)` with `min <= max`; reversed bounds are swapped.
    pub fn resolve(self, default_min: i64, default_max: i64) -> (i64, i64) {
        let (a, b) = match self {
            RangeArgs::Default => (default_min, default_max),
            RangeArgs::Max(max) => (default_min, max),
            RangeArgs::MinMax(min, max) => (min, max),
        };
        (a.min(b), a.max(b))
    }
}

impl From<()> for RangeArgs {
    fn from(_: ()) -> Self {
        RangeArgs::Default
    }
}

impl From<i32> for RangeArgs {
    fn from(max: i32) -> Self {
        RangeArgs::Max(i64::from(max))
    }
}

impl From<i64> for RangeArgs {
    fn from(max: i64) -> Self {
        RangeArgs::Max(max)
    }
}

impl From<usize> for RangeArgs {
    fn from(max: usize) -> Self {
        RangeArgs::Max(i64::try_from(max).unwrap_or(i64::MAX))
    }
}

impl From<(i32, i32)> for RangeArgs {
    fn from((min, max): (i32, i32)) -> Self {
        RangeArgs::MinMax(i64::from(min), i64::from(max))
    }
}

impl From<(i64, i64)> for RangeArgs {
    fn from((min, max): (i64, i64)) -> Self {
        RangeArgs::MinMax(min, max)
    }
}

impl From<(usize, usize)> for RangeArgs {
    fn from((min, max): (usize, usize)) -> Self {
        RangeArgs::MinMax(
            i64::try_from(min).unwrap_or(i64::MAX),
            i64::try_from(max).unwrap_or(i64::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_bounds_use_defaults() {
        assert_eq!(RangeArgs::from(()).resolve(0, 100), (0, 100));
        assert_eq!(RangeArgs::from(10).resolve(0, 100), (0, 10));
        assert_eq!(RangeArgs::from((3, 7)).resolve(0, 100), (3, 7));
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        assert_eq!(RangeArgs::from((9, 2)).resolve(0, 100), (2, 9));
        assert_eq!(RangeArgs::from(-5).resolve(0, 100), (-5, 0));
    }
}
