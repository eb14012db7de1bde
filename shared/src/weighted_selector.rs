use rand::Rng;

use crate::prize_catalog::PrizeCatalog;

/// Draws a winning index with probability proportional to each entry's weight.
pub fn select_winner<R: Rng + ?Sized>(catalog: &PrizeCatalog, rng: &mut R) -> usize {
    let draw = rng.gen_range(0.0..catalog.total_weight());
    select_index_for_draw(catalog, draw)
}

/// Inverts the cumulative weight distribution at `draw`.
///
/// Returns the first index whose running weight sum reaches `draw`, so equal
/// weights tie-break in catalog order. Draws at or beyond the total (rounding,
/// or a caller passing `total` itself) land on the last entry.
pub fn select_index_for_draw(catalog: &PrizeCatalog, draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, entry) in catalog.entries().iter().enumerate() {
        cumulative += entry.weight;
        if cumulative >= draw {
            return index;
        }
    }
    catalog.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize_catalog::{roulette_catalog, PrizeEntry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn weighted(weights: &[f64]) -> PrizeCatalog {
        let entries = weights
            .iter()
            .map(|&weight| PrizeEntry {
                icon: "",
                label: "test",
                price: 1,
                weight,
                display_chance: "",
            })
            .collect();
        PrizeCatalog::new(entries).unwrap()
    }

    #[test]
    fn test_zero_draw_picks_first() {
        let catalog = roulette_catalog();
        assert_eq!(select_index_for_draw(&catalog, 0.0), 0);
    }

    #[test]
    fn test_draw_near_total_picks_last() {
        let catalog = roulette_catalog();
        let total = catalog.total_weight();
        assert_eq!(select_index_for_draw(&catalog, total - 1e-9), 5);
        assert_eq!(select_index_for_draw(&catalog, total), 5);
        assert_eq!(select_index_for_draw(&catalog, total + 1.0), 5);
    }

    #[test]
    fn test_boundaries_belong_to_earlier_entry() {
        let catalog = weighted(&[1.0, 1.0, 2.0]);
        assert_eq!(select_index_for_draw(&catalog, 1.0), 0);
        assert_eq!(select_index_for_draw(&catalog, 1.000001), 1);
        assert_eq!(select_index_for_draw(&catalog, 2.0), 1);
        assert_eq!(select_index_for_draw(&catalog, 2.5), 2);
    }

    #[test]
    fn test_single_entry_always_wins() {
        let catalog = weighted(&[0.25]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(select_winner(&catalog, &mut rng), 0);
        }
    }

    #[test]
    fn test_every_draw_is_in_range() {
        let catalog = weighted(&[0.1, 3.0, 1e-6, 42.0]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            assert!(select_winner(&catalog, &mut rng) < catalog.len());
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let catalog = roulette_catalog();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let samples = 200_000;
        let mut counts = vec![0usize; catalog.len()];
        for _ in 0..samples {
            counts[select_winner(&catalog, &mut rng)] += 1;
        }

        for (index, &count) in counts.iter().enumerate() {
            let expected = catalog.chance_percent(index).unwrap() / 100.0;
            let observed = count as f64 / samples as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "index {}: observed {:.4}, expected {:.4}",
                index,
                observed,
                expected
            );
        }
    }
}
