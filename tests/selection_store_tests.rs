use conversion_chart::api::{SelectionStore, ToggleOutcome};
use conversion_chart::core::{LineStyle, Variation};
use conversion_chart::interaction::PickerPanel;

fn three_variations() -> Vec<Variation> {
    vec![
        Variation::new(1, "Original"),
        Variation::new(2, "Variation A"),
        Variation::new(3, "Variation B"),
    ]
}

#[test]
fn initial_state_selects_everything_with_linear_style() {
    let store = SelectionStore::new(&three_variations());

    assert_eq!(store.active_count(), 3);
    assert_eq!(store.total_variations(), 3);
    assert_eq!(store.line_style(), LineStyle::Linear);
    assert_eq!(store.selection_summary(), "All variations selected");
    assert!(!store.is_panel_open(PickerPanel::Variations));
    assert!(!store.is_panel_open(PickerPanel::LineStyles));
}

#[test]
fn toggling_active_id_removes_it_and_updates_summary() {
    let mut store = SelectionStore::new(&three_variations());

    assert_eq!(store.toggle("2"), ToggleOutcome::Removed);
    assert!(!store.is_active("2"));
    assert_eq!(store.selection_summary(), "2 are selected");

    assert_eq!(store.toggle("3"), ToggleOutcome::Removed);
    assert_eq!(store.selection_summary(), "1 are selected");
}

#[test]
fn double_toggle_restores_original_state() {
    let mut store = SelectionStore::new(&three_variations());
    let before = store.clone();

    assert_eq!(store.toggle("1"), ToggleOutcome::Removed);
    assert_eq!(store.toggle("1"), ToggleOutcome::Added);
    assert_eq!(store.active_count(), before.active_count());
    assert!(store.is_active("1"));
    assert_eq!(store.selection_summary(), "All variations selected");
}

#[test]
fn last_active_variation_cannot_be_deselected() {
    let mut store = SelectionStore::new(&three_variations());
    store.toggle("1");
    store.toggle("2");
    assert!(store.is_toggle_locked("3"));
    assert!(!store.is_toggle_locked("1"));

    assert_eq!(store.toggle("3"), ToggleOutcome::RejectedLastActive);
    assert!(store.is_active("3"));
    assert_eq!(store.active_count(), 1);
}

#[test]
fn single_variation_dataset_is_always_locked() {
    let mut store = SelectionStore::new(&[Variation::new(0, "Only")]);
    assert_eq!(store.toggle("0"), ToggleOutcome::RejectedLastActive);
    assert_eq!(store.active_count(), 1);
    assert_eq!(store.selection_summary(), "All variations selected");
}

#[test]
fn unknown_id_is_a_noop() {
    let mut store = SelectionStore::new(&three_variations());
    assert_eq!(store.toggle("42"), ToggleOutcome::UnknownVariation);
    assert_eq!(store.active_count(), 3);
    assert!(!store.is_active("42"));
}

#[test]
fn set_style_replaces_style_and_closes_only_the_style_picker() {
    let mut store = SelectionStore::new(&three_variations());
    assert!(store.toggle_panel(PickerPanel::LineStyles));
    assert!(store.toggle_panel(PickerPanel::Variations));

    store.set_style(LineStyle::Bump);
    assert_eq!(store.line_style(), LineStyle::Bump);
    assert_eq!(store.style_label(), "Line styles: bump");
    assert!(!store.is_panel_open(PickerPanel::LineStyles));
    assert!(store.is_panel_open(PickerPanel::Variations));
}

#[test]
fn style_changes_leave_selection_untouched() {
    let mut store = SelectionStore::new(&three_variations());
    store.toggle("2");
    let active: Vec<String> = store.active_ids().map(str::to_owned).collect();

    store.set_style(LineStyle::Area);
    store.set_style(LineStyle::Linear);
    let after: Vec<String> = store.active_ids().map(str::to_owned).collect();
    assert_eq!(active, after);
}

#[test]
fn reset_returns_to_initial_state() {
    let mut store = SelectionStore::new(&three_variations());
    store.toggle("1");
    store.set_style(LineStyle::Area);
    store.toggle_panel(PickerPanel::Variations);

    store.reset(&three_variations());
    assert_eq!(store, SelectionStore::new(&three_variations()));
}

#[test]
fn state_snapshot_serializes() {
    let mut store = SelectionStore::new(&three_variations());
    store.toggle("3");
    let state = store.state();
    assert_eq!(state.active_ids, vec!["1", "2"]);

    let json = serde_json::to_value(&state).expect("serialize");
    assert_eq!(json["line_style"], "linear");
}

#[test]
fn line_style_parses_from_strings() {
    assert_eq!("area".parse::<LineStyle>().expect("area"), LineStyle::Area);
    assert_eq!(" Bump ".parse::<LineStyle>().expect("bump"), LineStyle::Bump);
    assert!("monotone".parse::<LineStyle>().is_err());
    assert_eq!(LineStyle::Linear.title(), "Linear");
}
