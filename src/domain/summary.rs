use serde::Serialize;

use super::{
    entities::{CargoType, Leg, PackageField, ServiceLevel},
    form::QuoteForm,
    reference::ReferenceData,
};

const MISSING_CODE: &str = "---";

/// Sidebar values derived from the form. Never stored; recompute on every render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub total_weight: f64,
    pub route_label: String,
    pub route_caption: String,
    pub package_count: usize,
    pub total_pieces: f64,
    pub service: ServiceLevel,
    pub cargo_type: CargoType,
}

impl QuoteSummary {
    pub fn compute(form: &QuoteForm, reference: &ReferenceData) -> Self {
        let code = |leg: Leg| {
            reference
                .route_code(&form.address(leg).city)
                .unwrap_or(MISSING_CODE)
        };
        let city_or = |leg: Leg, placeholder: &'static str| {
            let city = form.address(leg).city.as_str();
            if city.is_empty() {
                placeholder
            } else {
                city
            }
        };

        Self {
            total_weight: sum_field(form, PackageField::Weight),
            route_label: format!("{} → {}", code(Leg::Origin), code(Leg::Destination)),
            route_caption: format!(
                "{} to {}",
                city_or(Leg::Origin, "Select Origin"),
                city_or(Leg::Destination, "Select Destination")
            ),
            package_count: form.packages().len(),
            total_pieces: sum_field(form, PackageField::Quantity),
            service: form.service,
            cargo_type: form.cargo_type,
        }
    }

    /// Total weight with one decimal, halves rounded away from zero.
    pub fn total_weight_display(&self) -> String {
        format!("{:.1}", round_tenths(self.total_weight))
    }

    /// Piece count as entered; fractional quantities are shown unrounded.
    pub fn total_pieces_display(&self) -> String {
        self.total_pieces.to_string()
    }
}

/// Sums one measure over every package, saturating at `f64::MAX`.
fn sum_field(form: &QuoteForm, field: PackageField) -> f64 {
    form.packages()
        .iter()
        .map(|package| package.value(field).unwrap_or(0.0))
        .fold(0.0, |total, value| {
            let next = total + value;
            if next.is_finite() {
                next
            } else {
                f64::MAX
            }
        })
}

fn round_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    if scaled.is_finite() {
        scaled.round() / 10.0
    } else {
        value
    }
}
