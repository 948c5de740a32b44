use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::render::{Color, RenderView};

use super::ColorMap;

/// One hovered series value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub id: String,
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub name: String,
    pub value_text: String,
    pub color: Option<Color>,
}

/// Formatted hover panel, rows sorted by descending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPanel {
    pub label: String,
    pub rows: SmallVec<[TooltipRow; 5]>,
}

/// Hover-detail formatting seam.
pub trait TooltipFormatter {
    fn format(
        &self,
        active: bool,
        label: &str,
        payload: &[TooltipEntry],
        colors: &ColorMap,
    ) -> Option<TooltipPanel>;
}

/// Percent rows with two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentTooltipFormatter;

impl TooltipFormatter for PercentTooltipFormatter {
    fn format(
        &self,
        active: bool,
        label: &str,
        payload: &[TooltipEntry],
        colors: &ColorMap,
    ) -> Option<TooltipPanel> {
        if !active || payload.is_empty() {
            return None;
        }

        let mut entries: SmallVec<[&TooltipEntry; 5]> = payload.iter().collect();
        // Stable sort keeps payload order between equal values.
        entries.sort_by_key(|entry| Reverse(OrderedFloat(entry.value)));

        let rows = entries
            .into_iter()
            .map(|entry| TooltipRow {
                name: entry.name.clone(),
                value_text: format!("{:.2}%", entry.value),
                color: colors.get(&entry.id).copied(),
            })
            .collect();

        Some(TooltipPanel {
            label: label.to_owned(),
            rows,
        })
    }
}

/// Values of the visible series at `date`, in series order.
#[must_use]
pub fn tooltip_payload(view: &RenderView, date: &str) -> Vec<TooltipEntry> {
    let Some(point) = view.points.iter().find(|point| point.date == date) else {
        return Vec::new();
    };
    view.series
        .iter()
        .filter_map(|series| {
            point.rate(&series.id).map(|value| TooltipEntry {
                id: series.id.clone(),
                name: series.name.clone(),
                value,
            })
        })
        .collect()
}
