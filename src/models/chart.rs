use super::energy::{DayRecord, FuelMix, day_label};
use super::palette::FuelPalette;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// One slice of a day's doughnut chart and its legend entry
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    /// Share rounded to a whole percentage
    pub value: u32,
    pub color: String,
}

impl ChartSlice {
    /// Legend text, e.g. `gas: 41%`
    pub fn legend_text(&self) -> String {
        format!("{}: {}%", self.label, self.value)
    }
}

pub type ChartSeries = Vec<ChartSlice>;

/// Turns a raw fuel mix into chart slices.
///
/// Non-positive shares are dropped and the rest are ordered largest first. Equal shares
/// keep the order they had in the mix. Values are rounded after sorting, so two shares
/// that round to the same integer still sort by their unrounded value. A share that
/// rounds to 0% is dropped too: the series never holds a zero-value slice.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn transform(metrics: &FuelMix, palette: &FuelPalette) -> ChartSeries {
    let mut active: Vec<(&str, f64)> = metrics.iter().filter(|(_, share)| *share > 0.0).collect();

    // `sort_by` is stable
    active.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    active
        .into_iter()
        .map(|(fuel, share)| (fuel, share.round() as u32))
        .filter(|(_, value)| *value > 0)
        .map(|(fuel, value)| ChartSlice {
            label: fuel.to_string(),
            value,
            color: palette.resolve(fuel).to_string(),
        })
        .collect()
}

/// Render-ready content of one forecast day card
#[derive(Debug, Clone, PartialEq)]
pub struct DayCard {
    pub date: NaiveDate,
    pub title: String,
    pub series: ChartSeries,
    pub clean_energy: String,
}

impl DayCard {
    pub fn new(record: &DayRecord, position: usize, palette: &FuelPalette) -> Self {
        Self {
            date: record.date,
            title: day_label(record.date, position),
            series: transform(&record.metrics, palette),
            clean_energy: record.clean_energy_label(),
        }
    }
}

/// One card per forecast day, in forecast order.
pub fn day_cards(days: &[DayRecord], palette: &FuelPalette) -> Vec<DayCard> {
    days.iter()
        .enumerate()
        .map(|(position, record)| DayCard::new(record, position, palette))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mix(entries: &[(&str, f64)]) -> FuelMix {
        entries
            .iter()
            .map(|(name, share)| (*name, *share))
            .collect()
    }

    fn labels(series: &ChartSeries) -> Vec<&str> {
        series.iter().map(|slice| slice.label.as_str()).collect()
    }

    #[test]
    fn test_drops_zero_and_negative_shares() {
        let metrics = mix(&[
            ("coal", 0.0),
            ("gas", 45.2),
            ("oil", -1.0),
            ("wind", 54.8),
        ]);
        let series = transform(&metrics, &FuelPalette::default());

        assert_eq!(labels(&series), vec!["wind", "gas"]);
    }

    #[test]
    fn test_drops_shares_rounding_to_zero() {
        let metrics = mix(&[("gas", 99.7), ("coal", 0.3)]);
        let series = transform(&metrics, &FuelPalette::default());

        assert_eq!(labels(&series), vec!["gas"]);
        assert_eq!(series[0].value, 100);
    }

    #[test]
    fn test_half_percent_share_is_kept() {
        let metrics = mix(&[("gas", 99.5), ("solar", 0.5)]);
        let series = transform(&metrics, &FuelPalette::default());

        assert_eq!(labels(&series), vec!["gas", "solar"]);
        assert_eq!(series[1].value, 1);
    }

    #[test]
    fn test_sorted_descending_and_rounded() {
        let metrics = mix(&[
            ("solar", 3.4),
            ("nuclear", 15.5),
            ("gas", 38.49),
            ("wind", 42.61),
        ]);
        let series = transform(&metrics, &FuelPalette::default());

        let values: Vec<u32> = series.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![43, 38, 16, 3]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let metrics = mix(&[
            ("wind", 20.0),
            ("hydro", 40.0),
            ("solar", 20.0),
            ("gas", 20.0),
        ]);
        let series = transform(&metrics, &FuelPalette::default());

        assert_eq!(labels(&series), vec!["hydro", "wind", "solar", "gas"]);
    }

    #[test]
    fn test_nan_share_is_dropped() {
        let metrics = mix(&[("gas", f64::NAN), ("wind", 10.0)]);
        let series = transform(&metrics, &FuelPalette::default());

        assert_eq!(labels(&series), vec!["wind"]);
    }

    #[test]
    fn test_colors_come_from_palette() {
        let palette = FuelPalette::default();
        let series = transform(&mix(&[("gas", 60.0), ("imports", 40.0)]), &palette);

        assert_eq!(series[0].color, "#ff8c00");
        assert_eq!(series[1].color, palette.fallback());
    }

    #[test]
    fn test_empty_mix_gives_empty_series() {
        assert!(transform(&FuelMix::default(), &FuelPalette::default()).is_empty());
    }

    #[test]
    fn test_card_carries_record_date() {
        let json = r#"{
            "date": "2025-01-05",
            "metrics": {"wind": 80},
            "clean_energy_percent": 80
        }"#;
        let record: DayRecord = serde_json::from_str(json).unwrap();
        let card = DayCard::new(&record, 4, &FuelPalette::default());

        assert_eq!(card.date, record.date);
        assert_eq!(card.title, "SUNDAY");
    }

    #[test]
    fn test_legend_text() {
        let slice = ChartSlice {
            label: "biomass".to_string(),
            value: 7,
            color: "#228b22".to_string(),
        };
        assert_eq!(slice.legend_text(), "biomass: 7%");
    }
}
