use crate::swatch::Swatch;
use std::collections::HashMap;

/// Counts exact color occurrences and ranks them by how often they were seen.
///
/// Colors are never merged with similar colors; two colors that differ by a single channel value end up as separate
/// swatches.
#[derive(Debug, Default)]
pub struct PaletteAggregator {
    // color -> (first seen, count)
    buckets: HashMap<(u8, u8, u8), (usize, u32)>,
}

impl PaletteAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rgb: (u8, u8, u8)) {
        let next_seen = self.buckets.len();
        let (_, count) = self.buckets.entry(rgb).or_insert((next_seen, 0));
        *count = count.saturating_add(1);
    }

    pub fn distinct_colors(&self) -> usize {
        self.buckets.len()
    }

    /// Consume the aggregator and return one swatch per distinct color, most populous first. Colors with equal
    /// populations are kept in the order they were first seen.
    pub fn into_swatches(self) -> Vec<Swatch> {
        let mut buckets = self.buckets.into_iter().collect::<Vec<_>>();

        // the map iterates in arbitrary order, so the first-seen index has to break ties explicitly
        buckets.sort_unstable_by(|(_, (lhs_seen, lhs_count)), (_, (rhs_seen, rhs_count))| {
            rhs_count.cmp(lhs_count).then(lhs_seen.cmp(rhs_seen))
        });

        buckets
            .into_iter()
            .map(|(rgb, (_, count))| Swatch::new(rgb, count))
            .collect()
    }
}

impl Extend<(u8, u8, u8)> for PaletteAggregator {
    fn extend<I: IntoIterator<Item = (u8, u8, u8)>>(&mut self, iter: I) {
        for rgb in iter {
            self.add(rgb);
        }
    }
}

impl FromIterator<(u8, u8, u8)> for PaletteAggregator {
    fn from_iter<I: IntoIterator<Item = (u8, u8, u8)>>(iter: I) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(iter);
        aggregator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(colors: &[(u8, u8, u8)]) -> Vec<Swatch> {
        colors.iter().copied().collect::<PaletteAggregator>().into_swatches()
    }

    #[test]
    fn empty_input_gives_empty_palette() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn identical_colors_share_a_swatch() {
        assert_eq!(rank(&[(255, 0, 0), (255, 0, 0)]), vec![Swatch::new((255, 0, 0), 2)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let swatches = rank(&[(0, 0, 9), (0, 9, 0), (9, 0, 0), (0, 9, 0)]);
        let colors: Vec<_> = swatches.iter().map(|s| s.rgb()).collect();

        assert_eq!(colors, vec![(0, 9, 0), (0, 0, 9), (9, 0, 0)]);
        assert_eq!(swatches[0].population(), 2);
    }

    #[test]
    fn more_frequent_colors_come_first() {
        let swatches = rank(&[(1, 1, 1), (2, 2, 2), (3, 3, 3), (3, 3, 3), (2, 2, 2), (3, 3, 3)]);
        let populations: Vec<_> = swatches.iter().map(|s| s.population()).collect();

        assert_eq!(populations, vec![3, 2, 1]);
        assert_eq!(swatches[0].rgb(), (3, 3, 3));
    }

    #[test]
    fn near_duplicates_are_not_merged() {
        let aggregator: PaletteAggregator = [(100, 100, 100), (100, 100, 101)].into_iter().collect();
        assert_eq!(aggregator.distinct_colors(), 2);
    }
}
