use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Share of generation per fuel type for one day, in the order the backend listed them.
///
/// The order matters: ties in the chart are broken by it, so the mix is kept as an
/// ordered list rather than a hash map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuelMix(Vec<(String, f64)>);

impl FuelMix {
    /// Iterates `(fuel name, percentage share)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, share)| (name.as_str(), *share))
    }

    pub fn get(&self, fuel: &str) -> Option<f64> {
        self.iter()
            .find(|(name, _)| *name == fuel)
            .map(|(_, share)| share)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FuelMix {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, share)| (name.into(), share))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for FuelMix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FuelMixVisitor)
    }
}

struct FuelMixVisitor;

impl<'de> Visitor<'de> for FuelMixVisitor {
    type Value = FuelMix;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of fuel names to percentage shares")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((name, share)) = map.next_entry::<String, f64>()? {
            // A repeated key overwrites the earlier value but keeps its position
            match entries.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = share,
                None => entries.push((name, share)),
            }
        }

        Ok(FuelMix(entries))
    }
}

/// Generation mix forecast for a single day
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub metrics: FuelMix,
    pub clean_energy_percent: f64,
}

impl DayRecord {
    /// Clean energy share as displayed on the card, e.g. `"87%"`
    pub fn clean_energy_label(&self) -> String {
        format!("{:.0}%", self.clean_energy_percent.round())
    }
}

/// Forecast days in ascending date order, starting today
pub type ForecastSequence = Vec<DayRecord>;

/// Title for the card at `position` in the forecast sequence.
pub fn day_label(date: NaiveDate, position: usize) -> String {
    match position {
        0 => "TODAY'S MIX".to_string(),
        1 => "TOMORROW".to_string(),
        2 => "DAY AFTER TOMORROW".to_string(),
        _ => date.format("%A").to_string().to_uppercase(),
    }
}
