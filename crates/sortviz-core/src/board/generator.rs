use std::ops::Range;

use rand::Rng;

use super::Bar;

/// Bars generated when no size is configured
pub const DEFAULT_ARRAY_LEN: usize = 50;

/// Value range of generated bars (inclusive start, exclusive end)
pub const DEFAULT_VALUE_RANGE: Range<u32> = 102..980;

/// Generate `len` idle bars with values drawn uniformly from `range`
///
/// An empty `range` yields bars holding `range.start`.
pub fn generate_bars<R: Rng>(len: usize, range: Range<u32>, rng: &mut R) -> Vec<Bar> {
    if range.is_empty() {
        return vec![Bar::new(range.start); len];
    }
    (0..len)
        .map(|_| Bar::new(rng.random_range(range.clone())))
        .collect()
}

/// Array size and value bounds used when the controller generates a fresh array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayGenerator {
    pub len: usize,
    pub range: Range<u32>,
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self {
            len: DEFAULT_ARRAY_LEN,
            range: DEFAULT_VALUE_RANGE,
        }
    }
}

impl ArrayGenerator {
    pub fn new(len: usize, range: Range<u32>) -> Self {
        Self { len, range }
    }

    pub fn generate(&self) -> Vec<Bar> {
        generate_bars(self.len, self.range.clone(), &mut rand::rng())
    }
}
