use conversion_chart::api::{
    ChartPresenter, ColorAssigner, ColorMap, PercentTooltipFormatter, SelectionStore,
    TooltipEntry, TooltipFormatter, tooltip_payload,
};
use conversion_chart::core::{DailyRecord, Dataset, Variation};

fn entry(id: &str, name: &str, value: f64) -> TooltipEntry {
    TooltipEntry {
        id: id.to_owned(),
        name: name.to_owned(),
        value,
    }
}

fn colors() -> ColorMap {
    ColorAssigner::default().assign(&[
        Variation::new(1, "A"),
        Variation::new(2, "B"),
        Variation::new(3, "C"),
    ])
}

#[test]
fn inactive_or_empty_payload_renders_nothing() {
    let formatter = PercentTooltipFormatter;
    let payload = vec![entry("1", "A", 1.0)];

    assert!(formatter.format(false, "d1", &payload, &colors()).is_none());
    assert!(formatter.format(true, "d1", &[], &colors()).is_none());
}

#[test]
fn rows_are_sorted_by_descending_value() {
    let formatter = PercentTooltipFormatter;
    let payload = vec![entry("1", "A", 2.5), entry("2", "B", 12.0), entry("3", "C", 7.25)];

    let panel = formatter
        .format(true, "2024-01-01", &payload, &colors())
        .expect("panel");

    assert_eq!(panel.label, "2024-01-01");
    let names: Vec<&str> = panel.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C", "A"]);
    let values: Vec<&str> = panel.rows.iter().map(|row| row.value_text.as_str()).collect();
    assert_eq!(values, vec!["12.00%", "7.25%", "2.50%"]);
    assert_eq!(panel.rows[0].color.map(|c| c.to_hex()), Some("#FFC300".to_owned()));
}

#[test]
fn equal_values_keep_payload_order() {
    let formatter = PercentTooltipFormatter;
    let payload = vec![entry("3", "C", 5.0), entry("1", "A", 5.0)];

    let panel = formatter.format(true, "d", &payload, &colors()).expect("panel");
    let names: Vec<&str> = panel.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A"]);
}

#[test]
fn unknown_ids_render_without_color() {
    let formatter = PercentTooltipFormatter;
    let panel = formatter
        .format(true, "d", &[entry("99", "Ghost", 1.0)], &colors())
        .expect("panel");
    assert_eq!(panel.rows[0].color, None);
}

#[test]
fn payload_contains_only_visible_defined_values() {
    let dataset = Dataset::new(
        vec![Variation::new(1, "A"), Variation::new(2, "B"), Variation::new(3, "C")],
        vec![
            DailyRecord::new("d1")
                .with_counts("1", 10, 1)
                .with_counts("2", 10, 5)
                .with_counts("3", 0, 0),
        ],
    )
    .expect("dataset");
    let mut selection = SelectionStore::new(dataset.variations());
    selection.toggle("1");
    let view = ChartPresenter::project(&dataset, &selection, &colors());

    let payload = tooltip_payload(&view, "d1");
    assert_eq!(payload, vec![entry("2", "B", 50.0)]);
    assert!(tooltip_payload(&view, "missing").is_empty());
}
