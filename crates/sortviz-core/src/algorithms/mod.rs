//! The seven animated sorting routines
//!
//! Every routine works on a private slice and mirrors each value change
//! through the [`Stepper`], pausing at every comparison or assignment.

mod catalog;
mod distribution;
mod divide;
mod quadratic;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Stepper;
use crate::{Error, Result};

pub use catalog::{AlgorithmInfo, Complexity, Rating};

/// Default number of distinct values covered by one bucket in bucket sort
pub const DEFAULT_BUCKET_WIDTH: u32 = 5;

/// Anything an algorithm can sort: the key is what gets compared and published
pub trait SortKey: Copy + Send + Sync {
    fn key(&self) -> u32;
}

impl SortKey for u32 {
    #[inline]
    fn key(&self) -> u32 {
        *self
    }
}

/// Tunables that only some algorithms read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub bucket_width: u32,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            bucket_width: DEFAULT_BUCKET_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "bubble_sort")]
    Bubble,
    #[serde(rename = "selection_sort")]
    Selection,
    #[serde(rename = "insertion_sort")]
    Insertion,
    #[serde(rename = "merge_sort")]
    Merge,
    #[serde(rename = "quick_sort")]
    Quick,
    #[serde(rename = "radix_sort")]
    Radix,
    #[serde(rename = "bucket_sort")]
    Bucket,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Radix,
        Algorithm::Bucket,
    ];

    /// Stable identifier used in config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Radix => "radix_sort",
            Algorithm::Bucket => "bucket_sort",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Bucket => "Bucket Sort",
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        catalog::info(self)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Sort `items` in place, animating every step through `stepper`
    ///
    /// Returns [`Error::Cancelled`] as soon as the run's token is observed set;
    /// the slice and the published bars are then left mid-sort.
    pub async fn run<T: SortKey>(
        self,
        items: &mut [T],
        stepper: &Stepper,
        options: &SortOptions,
    ) -> Result<()> {
        stepper.ensure_active()?;

        match self {
            Algorithm::Bubble => quadratic::bubble(items, stepper).await,
            Algorithm::Selection => quadratic::selection(items, stepper).await,
            Algorithm::Insertion => quadratic::insertion(items, stepper).await,
            Algorithm::Merge => divide::merge_sort(items, stepper).await,
            Algorithm::Quick => divide::quick_sort(items, stepper).await,
            Algorithm::Radix => distribution::radix(items, stepper).await,
            Algorithm::Bucket => distribution::bucket(items, stepper, options.bucket_width).await,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts the config key (`quick_sort`) or the bare name (`quick`)
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|a| a.key() == wanted || a.key().trim_end_matches("_sort") == wanted)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BarState;
    use crate::engine::{DelaySource, RecordingMutator};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    /// Value with an identity, to observe what happens to equal keys
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Tagged {
        key: u32,
        tag: usize,
    }

    impl SortKey for Tagged {
        fn key(&self) -> u32 {
            self.key
        }
    }

    async fn sort_recorded(algorithm: Algorithm, input: &[u32]) -> (Vec<u32>, Arc<RecordingMutator>) {
        let recorder = Arc::new(RecordingMutator::new(input));
        let stepper = Stepper::detached(recorder.clone(), DelaySource::new(0));
        let mut items = input.to_vec();

        algorithm
            .run(&mut items, &stepper, &SortOptions::default())
            .await
            .unwrap();

        (items, recorder)
    }

    fn sample_inputs() -> Vec<Vec<u32>> {
        let mut rng = StdRng::seed_from_u64(42);
        vec![
            vec![],
            vec![7],
            vec![2, 1],
            vec![5, 3, 8, 1, 2],
            vec![1, 2, 3, 4, 5, 6],
            vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            vec![4, 4, 4, 4],
            vec![3, 1, 3, 0, 1, 3, 0],
            vec![170, 45, 75, 90, 2, 802, 24, 66],
            vec![0, 1_000_000, 10, 4_000_000_000, 5],
            (0..64).map(|_| rng.random_range(102..980)).collect(),
        ]
    }

    #[tokio::test]
    async fn test_every_algorithm_sorts_and_mirrors() {
        for algorithm in Algorithm::ALL {
            for input in sample_inputs() {
                let mut expected = input.clone();
                expected.sort_unstable();

                let (items, recorder) = sort_recorded(algorithm, &input).await;

                assert_eq!(items, expected, "{} on {:?}", algorithm, input);
                assert_eq!(recorder.values(), expected, "{} mirror on {:?}", algorithm, input);
            }
        }
    }

    #[tokio::test]
    async fn test_every_algorithm_leaves_no_highlight_behind() {
        for algorithm in Algorithm::ALL {
            let (_, recorder) = sort_recorded(algorithm, &[5, 3, 8, 1, 2, 9, 0]).await;
            assert!(
                recorder
                    .bars()
                    .iter()
                    .all(|b| matches!(b.state, BarState::Idle | BarState::Sorted)),
                "{} left a bar highlighted",
                algorithm
            );
        }
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_mutations() {
        for algorithm in Algorithm::ALL {
            let (items, recorder) = sort_recorded(algorithm, &[]).await;
            assert!(items.is_empty());
            assert!(recorder.is_empty(), "{} mutated an empty array", algorithm);
        }
    }

    #[tokio::test]
    async fn test_bubble_sort_scenario() {
        let (items, _) = sort_recorded(Algorithm::Bubble, &[5, 3, 8, 1, 2]).await;
        assert_eq!(items, vec![1, 2, 3, 5, 8]);
    }

    #[tokio::test]
    async fn test_radix_sort_scenario() {
        let (items, _) = sort_recorded(Algorithm::Radix, &[170, 45, 75, 90, 2, 802, 24, 66]).await;
        assert_eq!(items, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[tokio::test]
    async fn test_cancelled_token_rejects_without_mutation() {
        for algorithm in Algorithm::ALL {
            let recorder = Arc::new(RecordingMutator::new(&[3, 1, 2]));
            let stepper = Stepper::detached(recorder.clone(), DelaySource::new(0));
            stepper.token().cancel();

            let mut items = vec![3, 1, 2];
            let result = algorithm.run(&mut items, &stepper, &SortOptions::default()).await;

            assert!(matches!(result, Err(Error::Cancelled)), "{}", algorithm);
            assert!(recorder.is_empty(), "{} mutated after cancellation", algorithm);
            assert_eq!(items, vec![3, 1, 2]);
        }
    }

    #[tokio::test]
    async fn test_cancel_mid_run_stops_mutating() {
        let recorder = Arc::new(RecordingMutator::new(&[9, 8, 7, 6, 5, 4, 3, 2, 1]));
        let stepper = Arc::new(Stepper::detached(recorder.clone(), DelaySource::new(5)));

        let task = {
            let stepper = stepper.clone();
            tokio::spawn(async move {
                let mut items = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
                Algorithm::Bubble
                    .run(&mut items, &stepper, &SortOptions::default())
                    .await
            })
        };

        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
        stepper.token().cancel();
        let result = task.await.unwrap();
        let mutations = recorder.len();

        assert!(matches!(result, Err(Error::Cancelled)));
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
        assert_eq!(recorder.len(), mutations);
    }

    #[tokio::test]
    async fn test_stable_algorithms_keep_equal_keys_in_order() {
        let keys = [3, 1, 2, 3, 1, 2, 3, 1, 0, 2];
        let input: Vec<Tagged> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect();

        for algorithm in [Algorithm::Insertion, Algorithm::Merge, Algorithm::Radix] {
            let stepper = Stepper::detached(Arc::new(RecordingMutator::new(&keys)), DelaySource::new(0));
            let mut items = input.clone();
            algorithm
                .run(&mut items, &stepper, &SortOptions::default())
                .await
                .unwrap();

            let mut expected = input.clone();
            expected.sort_by_key(|t| t.key);
            assert_eq!(items, expected, "{} is not stable", algorithm);
        }
    }

    #[tokio::test]
    async fn test_bucket_sort_rejects_zero_width() {
        let stepper = Stepper::detached(Arc::new(RecordingMutator::new(&[2, 1])), DelaySource::new(0));
        let mut items = vec![2u32, 1];
        let result = Algorithm::Bucket
            .run(&mut items, &stepper, &SortOptions { bucket_width: 0 })
            .await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_bucket_sort_with_wide_and_narrow_buckets() {
        for bucket_width in [1, 3, 1000] {
            let input = vec![104, 977, 500, 102, 650, 978, 103];
            let stepper = Stepper::detached(Arc::new(RecordingMutator::new(&input)), DelaySource::new(0));
            let mut items = input.clone();
            Algorithm::Bucket
                .run(&mut items, &stepper, &SortOptions { bucket_width })
                .await
                .unwrap();
            assert_eq!(items, vec![102, 103, 104, 500, 650, 977, 978]);
        }
    }

    #[test]
    fn test_algorithm_parse_and_cycle() {
        assert_eq!("quick_sort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("Merge".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert_eq!("radix-sort".parse::<Algorithm>().unwrap(), Algorithm::Radix);
        assert!(matches!("bogo".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(_))));

        assert_eq!(Algorithm::Bucket.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Bucket);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.next().prev(), algorithm);
            assert_eq!(algorithm.key().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_catalog_stability_flags() {
        assert!(Algorithm::Insertion.info().stable);
        assert!(Algorithm::Merge.info().stable);
        assert!(Algorithm::Radix.info().stable);
        assert!(!Algorithm::Quick.info().stable);
        assert!(!Algorithm::Selection.info().stable);
        assert_eq!(Algorithm::Quick.info().worst.notation, "O(n²)");
    }

    #[tokio::test]
    async fn test_bubble_makes_every_pass_on_sorted_input() {
        let input: Vec<u32> = (0..10).collect();
        let stepper = Stepper::detached(Arc::new(RecordingMutator::new(&input)), DelaySource::new(0));
        let mut items = input.clone();

        Algorithm::Bubble
            .run(&mut items, &stepper, &SortOptions::default())
            .await
            .unwrap();

        // One compare step per adjacent pair of every pass, no swaps
        assert_eq!(stepper.steps(), 45);
        assert_eq!(items, input);
        assert_eq!(Algorithm::Bubble.info().best.notation, "O(n²)");
    }
}
