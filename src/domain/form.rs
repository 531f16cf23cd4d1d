//! The quote form and its transitions. Every transition takes the previous
//! form by value and returns the next one; nothing is mutated behind the
//! caller's back.

use serde::Serialize;

use super::{
    entities::{Address, AddressField, CargoType, Leg, Package, PackageField, ServiceLevel},
    reference::ReferenceData,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuoteForm {
    pub origin: Address,
    pub destination: Address,
    pub service: ServiceLevel,
    packages: Vec<Package>,
    pub cargo_type: CargoType,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            origin: Address::default(),
            destination: Address::default(),
            service: ServiceLevel::default(),
            packages: vec![Package::default()],
            cargo_type: CargoType::default(),
        }
    }
}

/// Everything the page can ask the form to do, short of submitting it.
#[derive(Clone, Debug, PartialEq)]
pub enum QuoteInput {
    Address {
        leg: Leg,
        field: AddressField,
        value: String,
    },
    Service(ServiceLevel),
    CargoType(CargoType),
    AddPackage,
    RemovePackage(usize),
    Package {
        index: usize,
        field: PackageField,
        raw: String,
    },
}

impl QuoteForm {
    /// Starting form with a preferred service and cargo type pre-selected.
    pub fn with_defaults(service: ServiceLevel, cargo_type: CargoType) -> Self {
        Self {
            service,
            cargo_type,
            ..Self::default()
        }
    }

    pub fn address(&self, leg: Leg) -> &Address {
        match leg {
            Leg::Origin => &self.origin,
            Leg::Destination => &self.destination,
        }
    }

    fn address_mut(&mut self, leg: Leg) -> &mut Address {
        match leg {
            Leg::Origin => &mut self.origin,
            Leg::Destination => &mut self.destination,
        }
    }

    /// Always at least one entry.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn cities_for<'r>(&self, leg: Leg, reference: &'r ReferenceData) -> &'r [String] {
        reference.cities(&self.address(leg).country)
    }

    pub fn set_address_field(
        mut self,
        leg: Leg,
        field: AddressField,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        let address = self.address_mut(leg);
        if field == AddressField::Country && address.country != value {
            address.city.clear();
        }
        *address.slot_mut(field) = value;
        self
    }

    pub fn set_service(mut self, service: ServiceLevel) -> Self {
        self.service = service;
        self
    }

    pub fn set_cargo_type(mut self, cargo_type: CargoType) -> Self {
        self.cargo_type = cargo_type;
        self
    }

    pub fn add_package(mut self) -> Self {
        self.packages.push(Package::default());
        self
    }

    /// Removing the last remaining package, or an index past the end, leaves the form as it was.
    pub fn remove_package(mut self, index: usize) -> Self {
        if self.packages.len() > 1 && index < self.packages.len() {
            self.packages.remove(index);
        }
        self
    }

    pub fn update_package_field(
        mut self,
        index: usize,
        field: PackageField,
        raw: impl Into<String>,
    ) -> Self {
        if let Some(package) = self.packages.get_mut(index) {
            *package.slot_mut(field) = raw.into();
        }
        self
    }

    pub fn apply(self, input: QuoteInput) -> Self {
        match input {
            QuoteInput::Address { leg, field, value } => self.set_address_field(leg, field, value),
            QuoteInput::Service(service) => self.set_service(service),
            QuoteInput::CargoType(cargo_type) => self.set_cargo_type(cargo_type),
            QuoteInput::AddPackage => self.add_package(),
            QuoteInput::RemovePackage(index) => self.remove_package(index),
            QuoteInput::Package { index, field, raw } => {
                self.update_package_field(index, field, raw)
            }
        }
    }
}
