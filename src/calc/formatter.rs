use crate::calc::modes::OutputUnits;
use crate::units::{format_clock, format_hmmss, Dimension, Quantity, TimeUnit, Unit};

/// Render quantities in the caller's selected units
pub struct UnitFormatter {
    units: OutputUnits,
}

impl UnitFormatter {
    pub fn new(units: OutputUnits) -> Self {
        Self { units }
    }

    /// Display string for a quantity, chosen by its dimension
    pub fn format(&self, quantity: &Quantity) -> String {
        match quantity.dimension() {
            Dimension::Distance => self.format_distance(quantity),
            Dimension::Time => self.format_time(quantity),
            Dimension::Speed => self.format_speed(quantity),
            Dimension::Pace => self.format_pace(quantity),
        }
    }

    /// "5 km", "3.107 mi"
    pub fn format_distance(&self, quantity: &Quantity) -> String {
        render_in(quantity, Unit::Distance(self.units.distance))
    }

    /// "0:50:00" or "3000 s"
    pub fn format_time(&self, quantity: &Quantity) -> String {
        match self.units.time {
            TimeUnit::Hms => format_hmmss(quantity.magnitude()),
            TimeUnit::Second => render_in(quantity, Unit::Time(TimeUnit::Second)),
        }
    }

    /// "12 km/h", "2.778 m/s"
    pub fn format_speed(&self, quantity: &Quantity) -> String {
        render_in(quantity, Unit::Speed(self.units.speed))
    }

    /// "5:00/km" or "300 s/km"
    pub fn format_pace(&self, quantity: &Quantity) -> String {
        let unit = Unit::Pace(self.units.pace);
        match (self.units.time, quantity.to(unit)) {
            (TimeUnit::Hms, Ok(per_unit)) => {
                format!("{}/{}", format_clock(per_unit.value()), self.units.pace.symbol())
            }
            (TimeUnit::Second, Ok(per_unit)) => per_unit.to_string(),
            (_, Err(_)) => String::new(),
        }
    }
}

fn render_in(quantity: &Quantity, unit: Unit) -> String {
    quantity
        .to(unit)
        .map(|converted| converted.to_string())
        .unwrap_or_default()
}
