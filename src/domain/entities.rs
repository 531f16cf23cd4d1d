use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the shipment an address belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Leg {
    Origin,
    Destination,
}

impl Leg {
    pub const ALL: [Leg; 2] = [Leg::Origin, Leg::Destination];

    pub fn label(&self) -> &'static str {
        match self {
            Leg::Origin => "Origin",
            Leg::Destination => "Destination",
        }
    }

    /// Prefix used by the string form of field keys (`originCity`, ...).
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Leg::Origin => "origin",
            Leg::Destination => "destination",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressField {
    Country,
    City,
    PostalCode,
}

impl AddressField {
    pub const ALL: [AddressField; 3] = [
        AddressField::Country,
        AddressField::City,
        AddressField::PostalCode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AddressField::Country => "country",
            AddressField::City => "city",
            AddressField::PostalCode => "postal code",
        }
    }

    pub fn key_suffix(&self) -> &'static str {
        match self {
            AddressField::Country => "Country",
            AddressField::City => "City",
            AddressField::PostalCode => "Postal",
        }
    }
}

/// Country/city/postal code triple for one leg. Empty strings mean "not chosen yet".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Country => &self.country,
            AddressField::City => &self.city,
            AddressField::PostalCode => &self.postal_code,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Country => &mut self.country,
            AddressField::City => &mut self.city,
            AddressField::PostalCode => &mut self.postal_code,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageField {
    Weight,
    Length,
    Width,
    Height,
    Quantity,
}

impl PackageField {
    pub const ALL: [PackageField; 5] = [
        PackageField::Weight,
        PackageField::Length,
        PackageField::Width,
        PackageField::Height,
        PackageField::Quantity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PackageField::Weight => "weight",
            PackageField::Length => "length",
            PackageField::Width => "width",
            PackageField::Height => "height",
            PackageField::Quantity => "quantity",
        }
    }

    pub fn key_suffix(&self) -> &'static str {
        match self {
            PackageField::Weight => "Weight",
            PackageField::Length => "Length",
            PackageField::Width => "Width",
            PackageField::Height => "Height",
            PackageField::Quantity => "Quantity",
        }
    }

    /// Unit shown next to the input, if any.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            PackageField::Weight => Some("kg"),
            PackageField::Length | PackageField::Width | PackageField::Height => Some("cm"),
            PackageField::Quantity => None,
        }
    }
}

/// One line of the shipment. Values are kept exactly as typed into the
/// numeric inputs; see [`parse_measure`] for how they are read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub weight: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub quantity: String,
}

impl Default for Package {
    fn default() -> Self {
        Self {
            weight: "0".to_string(),
            length: "0".to_string(),
            width: "0".to_string(),
            height: "0".to_string(),
            quantity: "1".to_string(),
        }
    }
}

impl Package {
    pub fn raw(&self, field: PackageField) -> &str {
        match field {
            PackageField::Weight => &self.weight,
            PackageField::Length => &self.length,
            PackageField::Width => &self.width,
            PackageField::Height => &self.height,
            PackageField::Quantity => &self.quantity,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: PackageField) -> &mut String {
        match field {
            PackageField::Weight => &mut self.weight,
            PackageField::Length => &mut self.length,
            PackageField::Width => &mut self.width,
            PackageField::Height => &mut self.height,
            PackageField::Quantity => &mut self.quantity,
        }
    }

    pub fn value(&self, field: PackageField) -> Option<f64> {
        parse_measure(self.raw(field))
    }
}

/// Reads a numeric input. Surrounding whitespace is ignored; empty text,
/// non-numeric text and non-finite values yield `None`.
pub fn parse_measure(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLevel {
    #[default]
    AirFreight,
    #[serde(rename = "RoadFreightGCC", alias = "RoadFreightGcc")]
    RoadFreightGcc,
}

impl ServiceLevel {
    pub const ALL: [ServiceLevel; 2] = [ServiceLevel::AirFreight, ServiceLevel::RoadFreightGcc];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceLevel::AirFreight => "Air Freight",
            ServiceLevel::RoadFreightGcc => "Road Freight (GCC)",
        }
    }

    /// Inverse of [`ServiceLevel::label`], used by the `<select>` binding.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.label() == label)
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoType {
    #[default]
    General,
    Dangerous,
    NonStack,
}

impl CargoType {
    pub const ALL: [CargoType; 3] = [CargoType::General, CargoType::Dangerous, CargoType::NonStack];

    pub fn label(&self) -> &'static str {
        match self {
            CargoType::General => "General",
            CargoType::Dangerous => "Dangerous",
            CargoType::NonStack => "Non-Stack",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CargoType::General => "Standard goods, safe handling items.",
            CargoType::Dangerous => "Hazardous materials or chemicals.",
            CargoType::NonStack => "Fragile items that cannot be stacked.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CargoType::General => "📦",
            CargoType::Dangerous => "⚠️",
            CargoType::NonStack => "🧊",
        }
    }
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_package_has_single_piece_and_zero_dimensions() {
        let package = Package::default();
        for field in [
            PackageField::Weight,
            PackageField::Length,
            PackageField::Width,
            PackageField::Height,
        ] {
            assert_eq!(package.value(field), Some(0.0));
        }
        assert_eq!(package.value(PackageField::Quantity), Some(1.0));
    }

    #[test]
    fn parse_measure_is_total() {
        assert_eq!(parse_measure(" 4.25 "), Some(4.25));
        assert_eq!(parse_measure("-3"), Some(-3.0));
        assert_eq!(parse_measure(""), None);
        assert_eq!(parse_measure("12kg"), None);
        assert_eq!(parse_measure("NaN"), None);
        assert_eq!(parse_measure("inf"), None);
    }

    #[test]
    fn service_label_round_trips_through_select_value() {
        for service in ServiceLevel::ALL {
            assert_eq!(ServiceLevel::from_label(service.label()), Some(service));
        }
        assert_eq!(ServiceLevel::from_label("Sea Freight"), None);
    }

    #[test]
    fn service_config_names_accept_both_spellings() {
        let strict: ServiceLevel = serde_json::from_str("\"RoadFreightGCC\"").unwrap();
        let relaxed: ServiceLevel = serde_json::from_str("\"RoadFreightGcc\"").unwrap();
        assert_eq!(strict, ServiceLevel::RoadFreightGcc);
        assert_eq!(relaxed, ServiceLevel::RoadFreightGcc);
    }

    #[test]
    fn cargo_type_labels_match_cards() {
        assert_eq!(CargoType::NonStack.to_string(), "Non-Stack");
        assert_eq!(CargoType::default(), CargoType::General);
    }
}
