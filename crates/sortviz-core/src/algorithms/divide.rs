use std::future::Future;
use std::pin::Pin;

use super::SortKey;
use crate::board::BarState;
use crate::engine::Stepper;
use crate::Result;

/// Recursive steps are boxed so the routines can call themselves across awaits
type StepFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

pub(super) async fn merge_sort<T: SortKey>(items: &mut [T], s: &Stepper) -> Result<()> {
    match items.len() {
        0 => Ok(()),
        n => merge_range(items, 0, n - 1, s).await,
    }
}

fn merge_range<'a, T: SortKey>(
    items: &'a mut [T],
    start: usize,
    end: usize,
    s: &'a Stepper,
) -> StepFuture<'a> {
    Box::pin(async move {
        s.ensure_active()?;
        if start >= end {
            return Ok(());
        }

        let middle = (start + end) / 2;
        merge_range(&mut *items, start, middle, s).await?;
        merge_range(&mut *items, middle + 1, end, s).await?;
        merge(items, start, middle, end, s).await
    })
}

/// Merge `[start, middle]` and `[middle + 1, end]` through copies of the two
/// halves. The left half wins ties.
async fn merge<T: SortKey>(
    items: &mut [T],
    start: usize,
    middle: usize,
    end: usize,
    s: &Stepper,
) -> Result<()> {
    let left = items[start..=middle].to_vec();
    let right = items[middle + 1..=end].to_vec();
    let (mut i, mut j) = (0, 0);

    for k in start..=end {
        s.ensure_active()?;
        s.mark(k, BarState::Comparing);
        s.step().await?;

        let take_left = j >= right.len() || (i < left.len() && left[i].key() <= right[j].key());
        let item = if take_left {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };

        items[k] = item;
        s.set(k, item.key(), BarState::Selected);
    }

    for k in start..=end {
        s.mark(k, BarState::Idle);
    }
    Ok(())
}

pub(super) async fn quick_sort<T: SortKey>(items: &mut [T], s: &Stepper) -> Result<()> {
    let end = items.len() as isize - 1;
    quick_range(items, 0, end, s).await
}

/// Hoare partition around the middle value, then recurse on `[start, j]`
/// and `[i, end]`. Indices are signed because `j` may step below `start`.
fn quick_range<'a, T: SortKey>(
    items: &'a mut [T],
    start: isize,
    end: isize,
    s: &'a Stepper,
) -> StepFuture<'a> {
    Box::pin(async move {
        s.ensure_active()?;
        if start >= end {
            return Ok(());
        }

        let pivot = items[((start + end) / 2) as usize].key();
        let (mut i, mut j) = (start, end);

        while i <= j {
            while items[i as usize].key() < pivot {
                i += 1;
            }
            while items[j as usize].key() > pivot {
                j -= 1;
            }

            if i <= j {
                let (a, b) = (i as usize, j as usize);
                s.ensure_active()?;
                s.mark(a, BarState::Comparing);
                s.mark(b, BarState::Comparing);
                s.step().await?;

                items.swap(a, b);
                s.set(a, items[a].key(), BarState::Selected);
                s.set(b, items[b].key(), BarState::Selected);
                s.step().await?;

                s.mark(a, BarState::Idle);
                s.mark(b, BarState::Idle);
                i += 1;
                j -= 1;
            }
        }

        quick_range(&mut *items, start, j, s).await?;
        quick_range(items, i, end, s).await
    })
}
