use super::SortKey;
use crate::board::BarState;
use crate::engine::Stepper;
use crate::Result;

/// Adjacent-pair passes with a shrinking upper bound. Swaps only on strict `>`,
/// and always runs every pass so each run of a given length has the same shape.
pub(super) async fn bubble<T: SortKey>(items: &mut [T], s: &Stepper) -> Result<()> {
    let n = items.len();

    for pass in 0..n {
        let bound = n - pass - 1;
        for j in 0..bound {
            s.ensure_active()?;
            s.mark(j, BarState::Comparing);
            s.mark(j + 1, BarState::Comparing);
            s.step().await?;

            if items[j].key() > items[j + 1].key() {
                items.swap(j, j + 1);
                s.set(j, items[j].key(), BarState::Selected);
                s.set(j + 1, items[j + 1].key(), BarState::Selected);
                s.step().await?;
            }

            s.mark(j, BarState::Idle);
            s.mark(j + 1, BarState::Idle);
        }
        s.mark(bound, BarState::Sorted);
    }

    Ok(())
}

/// Running-minimum scan per slot; ties keep the earliest index as minimum.
pub(super) async fn selection<T: SortKey>(items: &mut [T], s: &Stepper) -> Result<()> {
    let n = items.len();

    for i in 0..n {
        s.ensure_active()?;
        let mut min = i;
        s.mark(i, BarState::Selected);

        for j in i + 1..n {
            s.ensure_active()?;
            s.mark(j, BarState::Comparing);
            s.step().await?;

            if items[j].key() < items[min].key() {
                if min != i {
                    s.mark(min, BarState::Idle);
                }
                min = j;
                s.mark(min, BarState::Selected);
            } else {
                s.mark(j, BarState::Idle);
            }
        }

        if min != i {
            items.swap(i, min);
            s.set(min, items[min].key(), BarState::Idle);
        }
        s.set(i, items[i].key(), BarState::Sorted);
    }

    Ok(())
}

/// Shifts the sorted prefix right while its values are strictly greater,
/// so equal keys never pass each other.
pub(super) async fn insertion<T: SortKey>(items: &mut [T], s: &Stepper) -> Result<()> {
    for i in 1..items.len() {
        s.ensure_active()?;
        let current = items[i];
        let mut j = i;
        s.mark(i, BarState::Selected);

        while j > 0 {
            s.ensure_active()?;
            s.mark(j - 1, BarState::Comparing);
            s.step().await?;

            if items[j - 1].key() <= current.key() {
                s.mark(j - 1, BarState::Idle);
                break;
            }

            items[j] = items[j - 1];
            s.set(j, items[j].key(), BarState::Idle);
            j -= 1;
            s.set(j, current.key(), BarState::Selected);
        }

        items[j] = current;
        s.set(j, current.key(), BarState::Idle);
    }

    Ok(())
}
