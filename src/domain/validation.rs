use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use super::{
    entities::{parse_measure, AddressField, Leg, PackageField},
    form::QuoteForm,
};

/// Identifies one input on the form. The key space is closed: six address
/// inputs plus five inputs per package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Address { leg: Leg, field: AddressField },
    Package { index: usize, field: PackageField },
}

impl FieldKey {
    /// Human-readable name used at the start of an error message.
    pub fn label(&self) -> String {
        match self {
            FieldKey::Address { leg, field } => format!("{} {}", leg.label(), field.label()),
            FieldKey::Package { index, field } => format!("Package {} {}", index + 1, field.label()),
        }
    }
}

/// Renders the key the way the page ids it, e.g. `originPostal` or `package2Height`.
impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Address { leg, field } => {
                write!(f, "{}{}", leg.key_prefix(), field.key_suffix())
            }
            FieldKey::Package { index, field } => {
                write!(f, "package{index}{}", field.key_suffix())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("is required")]
    Missing,
    #[error("must be a number")]
    NotANumber,
    #[error("must be greater than zero")]
    NotPositive,
}

/// All current validation failures, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldKey, String>,
}

impl ErrorMap {
    fn record(&mut self, key: FieldKey, problem: Problem) {
        self.entries
            .insert(key, format!("{} {problem}", key.label()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &FieldKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn address(&self, leg: Leg, field: AddressField) -> Option<&str> {
        self.get(&FieldKey::Address { leg, field })
    }

    pub fn package(&self, index: usize, field: PackageField) -> Option<&str> {
        self.get(&FieldKey::Package { index, field })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &str)> {
        self.entries.iter().map(|(key, message)| (key, message.as_str()))
    }
}

/// Runs every rule against the form. An empty map means the form may be submitted.
pub fn validate(form: &QuoteForm) -> ErrorMap {
    let mut errors = ErrorMap::default();

    for leg in Leg::ALL {
        let address = form.address(leg);
        for field in AddressField::ALL {
            if address.get(field).trim().is_empty() {
                errors.record(FieldKey::Address { leg, field }, Problem::Missing);
            }
        }
    }

    for (index, package) in form.packages().iter().enumerate() {
        for field in PackageField::ALL {
            if let Some(problem) = check_measure(package.raw(field)) {
                errors.record(FieldKey::Package { index, field }, problem);
            }
        }
    }

    errors
}

fn check_measure(raw: &str) -> Option<Problem> {
    if raw.trim().is_empty() {
        return Some(Problem::Missing);
    }
    match parse_measure(raw) {
        None => Some(Problem::NotANumber),
        Some(value) if value <= 0.0 => Some(Problem::NotPositive),
        Some(_) => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// A form that passes every rule.
    pub(crate) fn complete_form() -> QuoteForm {
        QuoteForm::default()
            .set_address_field(Leg::Origin, AddressField::Country, "AE-United Arab Emirates")
            .set_address_field(Leg::Origin, AddressField::City, "Dubai")
            .set_address_field(Leg::Origin, AddressField::PostalCode, "00000")
            .set_address_field(Leg::Destination, AddressField::Country, "GB-United Kingdom")
            .set_address_field(Leg::Destination, AddressField::City, "London")
            .set_address_field(Leg::Destination, AddressField::PostalCode, "SW1A 1AA")
            .update_package_field(0, PackageField::Weight, "2")
            .update_package_field(0, PackageField::Length, "1")
            .update_package_field(0, PackageField::Width, "1")
            .update_package_field(0, PackageField::Height, "1")
            .update_package_field(0, PackageField::Quantity, "1")
    }

    #[test]
    fn default_form_reports_addresses_and_dimensions() {
        let errors = validate(&QuoteForm::default());
        let keys: Vec<String> = errors.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(
            keys,
            [
                "originCountry",
                "originCity",
                "originPostal",
                "destinationCountry",
                "destinationCity",
                "destinationPostal",
                "package0Weight",
                "package0Length",
                "package0Width",
                "package0Height",
            ]
        );
        assert_eq!(errors.package(0, PackageField::Quantity), None);
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate(&complete_form()).is_empty());
    }

    #[test]
    fn validation_is_deterministic() {
        let form = QuoteForm::default()
            .add_package()
            .update_package_field(1, PackageField::Width, "abc");
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn messages_use_one_based_package_numbers() {
        let form = complete_form()
            .add_package()
            .update_package_field(1, PackageField::Weight, "5")
            .update_package_field(1, PackageField::Length, "5")
            .update_package_field(1, PackageField::Width, "5")
            .update_package_field(1, PackageField::Height, "5")
            .update_package_field(1, PackageField::Quantity, "0");
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.package(1, PackageField::Quantity),
            Some("Package 2 quantity must be greater than zero")
        );
        let (key, _) = errors.iter().next().unwrap();
        assert_eq!(key.to_string(), "package1Quantity");
    }

    #[test]
    fn message_distinguishes_missing_malformed_and_non_positive() {
        let form = complete_form()
            .update_package_field(0, PackageField::Weight, "")
            .update_package_field(0, PackageField::Length, "12cm")
            .update_package_field(0, PackageField::Width, "-4");
        let errors = validate(&form);
        assert_eq!(
            errors.package(0, PackageField::Weight),
            Some("Package 1 weight is required")
        );
        assert_eq!(
            errors.package(0, PackageField::Length),
            Some("Package 1 length must be a number")
        );
        assert_eq!(
            errors.package(0, PackageField::Width),
            Some("Package 1 width must be greater than zero")
        );
    }

    #[test]
    fn address_messages_name_leg_and_field() {
        let form = complete_form()
            .set_address_field(Leg::Destination, AddressField::PostalCode, "   ");
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.address(Leg::Destination, AddressField::PostalCode),
            Some("Destination postal code is required")
        );
    }

    #[test]
    fn country_change_reintroduces_city_error() {
        let form = complete_form().set_address_field(
            Leg::Origin,
            AddressField::Country,
            "US-United States",
        );
        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.address(Leg::Origin, AddressField::City),
            Some("Origin city is required")
        );
    }

    #[test]
    fn every_package_is_checked() {
        let form = complete_form().add_package().add_package();
        let errors = validate(&form);
        // packages 2 and 3 are still at defaults: four dimension errors each
        assert_eq!(errors.len(), 8);
        assert!(errors.package(2, PackageField::Height).is_some());
        assert!(errors.package(0, PackageField::Height).is_none());
    }

    #[test]
    fn fractional_values_are_positive() {
        let form = complete_form().update_package_field(0, PackageField::Weight, "0.01");
        assert!(validate(&form).is_empty());
    }
}
