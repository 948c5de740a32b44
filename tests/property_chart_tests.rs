use conversion_chart::api::{ChartPresenter, ColorAssigner, SelectionStore, ToggleOutcome};
use conversion_chart::core::{DailyRecord, Dataset, Variation, compute_rate_point};
use proptest::prelude::*;

fn variations(count: usize) -> Vec<Variation> {
    (0..count)
        .map(|i| Variation::new(i as i64, format!("V{i}")))
        .collect()
}

proptest! {
    #[test]
    fn selection_never_becomes_empty(
        count in 1usize..8,
        toggles in prop::collection::vec(0usize..10, 0..64)
    ) {
        let variations = variations(count);
        let mut store = SelectionStore::new(&variations);

        for index in toggles {
            let id = index.to_string();
            let before = store.active_count();
            let outcome = store.toggle(&id);
            match outcome {
                ToggleOutcome::Added => prop_assert_eq!(store.active_count(), before + 1),
                ToggleOutcome::Removed => prop_assert_eq!(store.active_count(), before - 1),
                ToggleOutcome::RejectedLastActive => prop_assert_eq!(before, 1),
                ToggleOutcome::UnknownVariation => prop_assert!(index >= count),
            }
            prop_assert!(store.active_count() >= 1);

            let summary = store.selection_summary();
            if store.active_count() == count {
                prop_assert_eq!(summary, "All variations selected");
            } else {
                prop_assert_eq!(summary, format!("{} are selected", store.active_count()));
            }
        }
    }

    #[test]
    fn rate_matches_percentage_within_rounding(
        visits in 1i64..1_000_000,
        ratio in 0.0f64..=1.0
    ) {
        let conversions = (visits as f64 * ratio).floor() as i64;
        let record = DailyRecord::new("d").with_counts("1", visits, conversions);
        let point = compute_rate_point(&record);

        let rate = point.rate("1").expect("defined rate");
        let exact = conversions as f64 / visits as f64 * 100.0;
        prop_assert!((rate - exact).abs() <= 0.005 + 1e-9);
        prop_assert!((rate * 100.0 - (rate * 100.0).round()).abs() < 1e-6);
    }

    #[test]
    fn zero_visits_never_produce_a_rate(conversions in 0i64..1_000) {
        let record = DailyRecord::new("d").with_counts("1", 0, conversions);
        prop_assert_eq!(compute_rate_point(&record).rate("1"), None);
    }

    #[test]
    fn presented_points_always_carry_a_visible_rate(
        count in 1usize..5,
        cells in prop::collection::vec((0i64..50, 0i64..50), 1..40),
        deselect in 0usize..5
    ) {
        let variations = variations(count);
        let records = cells
            .chunks(count)
            .enumerate()
            .map(|(day, chunk)| {
                chunk.iter().enumerate().fold(
                    DailyRecord::new(format!("day-{day}")),
                    |record, (i, (visits, conversions))| {
                        record.with_counts(i.to_string(), *visits, (*conversions).min(*visits))
                    },
                )
            })
            .collect();
        let dataset = Dataset::new(variations.clone(), records).expect("dataset");

        let mut selection = SelectionStore::new(&variations);
        selection.toggle(&deselect.to_string());
        let colors = ColorAssigner::default().assign(&variations);
        let view = ChartPresenter::project(&dataset, &selection, &colors);

        prop_assert_eq!(view.series.len(), selection.active_count());
        for point in &view.points {
            prop_assert!(view.series.iter().any(|series| point.rate(&series.id).is_some()));
        }
    }
}
