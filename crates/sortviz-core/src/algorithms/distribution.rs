use super::SortKey;
use crate::board::BarState;
use crate::engine::Stepper;
use crate::{Error, Result};

const RADIX: usize = 10;

/// Upper bound on bucket sort buckets; sparse ranges widen the buckets instead
const MAX_BUCKETS: u32 = 4096;

/// Number of decimal digits in `value` (zero has one)
fn digit_count(value: u32) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

/// Decimal digit `place` of `value`, counting from the least significant
fn digit(value: u32, place: u32) -> usize {
    (value / 10u32.pow(place) % 10) as usize
}

/// Publish `items` slot by slot, one step per assignment
async fn replay<T: SortKey>(items: &[T], s: &Stepper) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        s.ensure_active()?;
        s.set(index, item.key(), BarState::Selected);
        s.step().await?;
        s.mark(index, BarState::Idle);
    }
    Ok(())
}

/// LSD radix sort, base 10, FIFO within each digit bucket.
pub(super) async fn radix<T: SortKey>(items: &mut [T], s: &Stepper) -> Result<()> {
    let Some(max) = items.iter().map(SortKey::key).max() else {
        return Ok(());
    };

    for place in 0..digit_count(max) {
        s.ensure_active()?;
        let mut buckets: Vec<Vec<T>> = (0..RADIX).map(|_| Vec::new()).collect();
        for item in items.iter() {
            buckets[digit(item.key(), place)].push(*item);
        }

        for (slot, item) in buckets.into_iter().flatten().enumerate() {
            items[slot] = item;
        }
        replay(items, s).await?;
    }

    Ok(())
}

/// Fixed-width buckets over `[min, max]`, each insertion-sorted, then
/// concatenated in bucket order.
pub(super) async fn bucket<T: SortKey>(items: &mut [T], s: &Stepper, width: u32) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidInput(
            "bucket width must be greater than zero".to_string(),
        ));
    }
    let (Some(min), Some(max)) = (
        items.iter().map(SortKey::key).min(),
        items.iter().map(SortKey::key).max(),
    ) else {
        return Ok(());
    };

    let width = width.max((max - min) / MAX_BUCKETS + 1);
    let count = ((max - min) / width) as usize + 1;
    let mut buckets: Vec<Vec<T>> = (0..count).map(|_| Vec::new()).collect();
    for item in items.iter() {
        buckets[((item.key() - min) / width) as usize].push(*item);
    }

    for bucket in buckets.iter_mut() {
        insertion_sort_by_key(bucket);
    }
    for (slot, item) in buckets.into_iter().flatten().enumerate() {
        items[slot] = item;
    }

    replay(items, s).await
}

fn insertion_sort_by_key<T: SortKey>(bucket: &mut [T]) {
    for i in 1..bucket.len() {
        let current = bucket[i];
        let mut j = i;
        while j > 0 && bucket[j - 1].key() > current.key() {
            bucket[j] = bucket[j - 1];
            j -= 1;
        }
        bucket[j] = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_helpers() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(802), 3);
        assert_eq!(digit_count(u32::MAX), 10);

        assert_eq!(digit(802, 0), 2);
        assert_eq!(digit(802, 1), 0);
        assert_eq!(digit(802, 2), 8);
        assert_eq!(digit(802, 3), 0);
    }

    #[test]
    fn test_insertion_sort_by_key() {
        let mut bucket = vec![5u32, 1, 4, 1];
        insertion_sort_by_key(&mut bucket);
        assert_eq!(bucket, vec![1, 1, 4, 5]);
    }
}
