use std::ops::RangeInclusive;

use crate::domain::fixture_error::FixtureError;

/// Inclusive id interval `[start_id, end_id]`. Construction rejects empty ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start_id: i64,
    pub end_id: i64,
}

impl IdRange {
    pub fn new(start_id: i64, end_id: i64) -> Result<Self, FixtureError> {
        if start_id > end_id {
            return Err(FixtureError::InvalidRange {
                start: start_id,
                end: end_id,
            });
        }
        Ok(Self { start_id, end_id })
    }

    pub fn ids(&self) -> RangeInclusive<i64> {
        self.start_id..=self.end_id
    }

    pub fn row_count(&self) -> u64 {
        self.end_id.abs_diff(self.start_id).saturating_add(1)
    }

    /// The id with the longest decimal form. Digit count grows with the
    /// magnitude, so it is always one of the two endpoints.
    pub fn widest_id(&self) -> i64 {
        if decimal_width(self.start_id) > decimal_width(self.end_id) {
            self.start_id
        } else {
            self.end_id
        }
    }
}

pub fn decimal_width(id: i64) -> usize {
    id.to_string().len()
}

#[derive(Debug)]
pub struct IdBatchSlicer {
    range: IdRange,
    batch_size: Option<usize>,
}

impl IdBatchSlicer {
    /// `None` keeps the whole range in one slice.
    pub fn new(range: IdRange, batch_size: Option<usize>) -> Result<Self, FixtureError> {
        if batch_size == Some(0) {
            return Err(FixtureError::InvalidBatchSize(0));
        }
        Ok(Self { range, batch_size })
    }

    pub fn iter_ranges(&self) -> impl Iterator<Item = IdRange> + '_ {
        let step = self
            .batch_size
            .unwrap_or(usize::MAX)
            .min(i64::MAX as usize);
        let last_offset = i64::try_from(step).unwrap_or(i64::MAX) - 1;
        self.range
            .ids()
            .step_by(step)
            .map(move |current_start| IdRange {
                start_id: current_start,
                end_id: current_start
                    .saturating_add(last_offset)
                    .min(self.range.end_id),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{IdBatchSlicer, IdRange};
    use crate::domain::fixture_error::FixtureError;

    fn slices(start: i64, end: i64, batch_size: Option<usize>) -> Vec<(i64, i64)> {
        let range = IdRange::new(start, end).expect("range should be valid");
        IdBatchSlicer::new(range, batch_size)
            .expect("slicer should be created")
            .iter_ranges()
            .map(|range| (range.start_id, range.end_id))
            .collect()
    }

    #[test]
    fn iter_ranges_caps_last_batch() {
        assert_eq!(
            slices(1, 105, Some(50)),
            vec![(1, 50), (51, 100), (101, 105)]
        );
    }

    #[test]
    fn without_batch_size_yields_whole_range() {
        assert_eq!(slices(7, 1_000_000, None), vec![(7, 1_000_000)]);
    }

    #[test]
    fn single_id_range_yields_one_slice() {
        assert_eq!(slices(5, 5, Some(3)), vec![(5, 5)]);
    }

    #[test]
    fn slicing_near_the_top_of_i64_does_not_overflow() {
        assert_eq!(
            slices(i64::MAX - 2, i64::MAX, Some(2)),
            vec![(i64::MAX - 2, i64::MAX - 1), (i64::MAX, i64::MAX)]
        );
    }

    #[test]
    fn rejects_start_after_end() {
        assert_eq!(
            IdRange::new(3, 2),
            Err(FixtureError::InvalidRange { start: 3, end: 2 })
        );
    }

    #[test]
    fn rejects_zero_batch_size() {
        let range = IdRange::new(1, 2).expect("range should be valid");
        let error = IdBatchSlicer::new(range, Some(0)).expect_err("zero batch must be rejected");
        assert_eq!(error, FixtureError::InvalidBatchSize(0));
    }

    #[test]
    fn widest_id_accounts_for_sign() {
        let range = IdRange::new(-50, 9).expect("range should be valid");
        assert_eq!(range.widest_id(), -50);
        assert_eq!(range.row_count(), 60);

        let range = IdRange::new(-5, 10).expect("range should be valid");
        assert_eq!(range.widest_id(), 10);
    }
}
