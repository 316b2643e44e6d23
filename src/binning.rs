use crate::error::ChartError;

/// Default number of buckets for a histogram.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// One half-open interval `[x0, x1)` over the value domain, holding the
/// indices of the records that fall inside it.
///
/// The final bin of a sequence is closed on the right so the domain maximum
/// is captured.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    /// Indices into the value slice the bins were computed from.
    pub members: Vec<usize>,
}

impl Bin {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Partition `domain` into `bucket_count` equal-width bins and assign every
/// value to exactly one of them.
///
/// Interval edges are left-closed/right-open, except the last bin which also
/// includes its upper bound, so a value sitting exactly on an interior edge
/// belongs to the bin where it is the lower bound and nothing is counted
/// twice. Values outside the domain are clamped into the terminal bins, and
/// a degenerate domain (`min == max`) puts every value in the final bin;
/// either way `sum(bin.count()) == values.len()` always holds.
///
/// The caller supplies `domain` with `min <= max` (normally from
/// [`crate::scale::extent`]).
pub fn compute_bins(
    values: &[f64],
    domain: (f64, f64),
    bucket_count: usize,
) -> Result<Vec<Bin>, ChartError> {
    if bucket_count == 0 {
        return Err(ChartError::InvalidBucketCount(bucket_count));
    }
    let (lo, hi) = domain;
    debug_assert!(lo <= hi, "bin domain must be ordered");

    let width = (hi - lo) / bucket_count as f64;
    let mut bins: Vec<Bin> = (0..bucket_count)
        .map(|i| Bin {
            x0: lo + i as f64 * width,
            // Recomputed with the same expression as the next bin's x0 so
            // adjacent edges compare equal.
            x1: if i + 1 == bucket_count {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            members: Vec::new(),
        })
        .collect();

    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::InvalidValue { index, value });
        }
        let slot = if width == 0.0 || value >= hi {
            bucket_count - 1
        } else if value < lo {
            0
        } else {
            (((value - lo) / width).floor() as usize).min(bucket_count - 1)
        };
        bins[slot].members.push(index);
    }

    Ok(bins)
}

/// Count a bin's members per category, in the caller-supplied category
/// order. Categories with no members yield 0 rather than being omitted.
///
/// `category_of` holds one label per record, aligned with the value slice
/// the bins were computed from.
pub fn count_by_category(bin: &Bin, categories: &[&str], category_of: &[String]) -> Vec<usize> {
    categories
        .iter()
        .map(|category| {
            bin.members
                .iter()
                .filter(|&&index| category_of[index] == *category)
                .count()
        })
        .collect()
}

/// Pixel width of one side-by-side sub-bar slot within a bin.
///
/// The same width is used for every bin regardless of population, so empty
/// groups keep their slot and simply render with zero height.
pub fn group_slot_width(bin_pixel_width: f64, padding: f64, group_count: usize) -> f64 {
    if group_count == 0 {
        return 0.0;
    }
    ((bin_pixel_width - padding) / group_count as f64).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_worked_example() {
        // Three penguins, two buckets over the mass extent.
        let masses = [3000.0, 3500.0, 4000.0];
        let labels = species(&["Adelie", "Gentoo", "Adelie"]);
        let bins = compute_bins(&masses, (3000.0, 4000.0), 2).unwrap();

        assert_eq!(bins.len(), 2);
        assert_eq!((bins[0].x0, bins[0].x1), (3000.0, 3500.0));
        assert_eq!((bins[1].x0, bins[1].x1), (3500.0, 4000.0));
        assert_eq!(bins[0].members, vec![0]);
        assert_eq!(bins[1].members, vec![1, 2]);

        let counts = count_by_category(&bins[1], &["Adelie", "Chinstrap", "Gentoo"], &labels);
        assert_eq!(counts, vec![1, 0, 1]);
    }

    #[test]
    fn test_every_record_assigned_once() {
        let values: Vec<f64> = (0..137).map(|i| (i * 37 % 101) as f64 / 7.0).collect();
        let domain = crate::scale::extent(&values).unwrap();
        let bins = compute_bins(&values, domain, 10).unwrap();
        let total: usize = bins.iter().map(Bin::count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn test_bins_are_contiguous() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let bins = compute_bins(&values, (1.0, 5.0), 7).unwrap();
        for pair in bins.windows(2) {
            assert_eq!(pair[0].x1, pair[1].x0);
        }
        assert_eq!(bins.first().unwrap().x0, 1.0);
        assert_eq!(bins.last().unwrap().x1, 5.0);
    }

    #[test]
    fn test_boundary_value_joins_lower_bound_bin() {
        // 2.0 sits exactly on the edge between [1,2) and [2,3).
        let values = [2.0];
        let bins = compute_bins(&values, (1.0, 3.0), 2).unwrap();
        assert_eq!(bins[0].count(), 0);
        assert_eq!(bins[1].members, vec![0]);
    }

    #[test]
    fn test_domain_maximum_lands_in_last_bin() {
        let values = [10.0];
        let bins = compute_bins(&values, (0.0, 10.0), 10).unwrap();
        assert_eq!(bins[9].members, vec![0]);
    }

    #[test]
    fn test_out_of_domain_values_clamp_to_terminal_bins() {
        let values = [-5.0, 15.0];
        let bins = compute_bins(&values, (0.0, 10.0), 5).unwrap();
        assert_eq!(bins[0].members, vec![0]);
        assert_eq!(bins[4].members, vec![1]);
        let total: usize = bins.iter().map(Bin::count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn test_degenerate_domain_fills_last_bin() {
        let values = [7.0, 7.0, 7.0];
        let bins = compute_bins(&values, (7.0, 7.0), 3).unwrap();
        assert_eq!(bins[2].count(), 3);
        assert_eq!(bins[0].count() + bins[1].count(), 0);
    }

    #[test]
    fn test_zero_buckets_rejected() {
        assert_eq!(
            compute_bins(&[1.0], (0.0, 1.0), 0),
            Err(ChartError::InvalidBucketCount(0))
        );
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = compute_bins(&[1.0, f64::INFINITY], (0.0, 2.0), 2).unwrap_err();
        assert!(matches!(err, ChartError::InvalidValue { index: 1, .. }));
    }

    #[test]
    fn test_group_slot_width_splits_evenly() {
        assert_eq!(group_slot_width(61.0, 1.0, 3), 20.0);
        // Pathologically narrow bins clamp to zero instead of going negative.
        assert_eq!(group_slot_width(0.5, 1.0, 3), 0.0);
        assert_eq!(group_slot_width(30.0, 1.0, 0), 0.0);
    }
}
