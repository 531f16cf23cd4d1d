//! Static lookup tables: which cities belong to a country, and which
//! three-letter code represents a city in the route summary.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use super::entities::Leg;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CountryCities {
    pub country: String,
    pub cities: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ReferenceData {
    /// Country → cities, in the order the city dropdown lists them.
    pub countries: Vec<CountryCities>,
    pub route_codes: BTreeMap<String, String>,
    /// Countries offered in the origin dropdown.
    pub origin_countries: Vec<String>,
    /// Countries offered in the destination dropdown.
    pub destination_countries: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("city {city} has no route code")]
    MissingRouteCode { city: String },
    #[error("route code {code:?} for {city} is not three uppercase letters")]
    MalformedRouteCode { city: String, code: String },
    #[error("{leg:?} country {country} has no city list")]
    UnknownCountry { leg: Leg, country: String },
    #[error("country {0} is listed twice")]
    DuplicateCountry(String),
}

impl ReferenceData {
    pub fn cities(&self, country: &str) -> &[String] {
        self.countries
            .iter()
            .find(|entry| entry.country == country)
            .map(|entry| entry.cities.as_slice())
            .unwrap_or(&[])
    }

    pub fn route_code(&self, city: &str) -> Option<&str> {
        self.route_codes.get(city).map(String::as_str)
    }

    pub fn countries_for(&self, leg: Leg) -> &[String] {
        match leg {
            Leg::Origin => &self.origin_countries,
            Leg::Destination => &self.destination_countries,
        }
    }

    /// Checks that every offered country has cities and every city has a well-formed code.
    pub fn check(&self) -> Result<(), ReferenceError> {
        for (idx, entry) in self.countries.iter().enumerate() {
            if self.countries[..idx]
                .iter()
                .any(|earlier| earlier.country == entry.country)
            {
                return Err(ReferenceError::DuplicateCountry(entry.country.clone()));
            }
            for city in &entry.cities {
                let code = self
                    .route_code(city)
                    .ok_or_else(|| ReferenceError::MissingRouteCode { city: city.clone() })?;
                if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_uppercase()) {
                    return Err(ReferenceError::MalformedRouteCode {
                        city: city.clone(),
                        code: code.to_string(),
                    });
                }
            }
        }

        for leg in Leg::ALL {
            if let Some(country) = self
                .countries_for(leg)
                .iter()
                .find(|country| self.cities(country).is_empty())
            {
                return Err(ReferenceError::UnknownCountry {
                    leg,
                    country: country.clone(),
                });
            }
        }

        Ok(())
    }
}

const COUNTRY_CITIES: &[(&str, &[&str])] = &[
    (
        "AE-United Arab Emirates",
        &["Dubai", "Abu Dhabi", "Sharjah", "Ajman"],
    ),
    (
        "US-United States",
        &["New York", "Los Angeles", "Chicago", "Houston", "Miami"],
    ),
    (
        "GB-United Kingdom",
        &["London", "Manchester", "Birmingham", "Glasgow"],
    ),
    ("CN-China", &["Shanghai", "Beijing", "Guangzhou", "Shenzhen"]),
    ("DE-Germany", &["Berlin", "Munich", "Frankfurt", "Hamburg"]),
];

const ROUTE_CODES: &[(&str, &str)] = &[
    ("Dubai", "DXB"),
    ("Abu Dhabi", "AUH"),
    ("Sharjah", "SHJ"),
    ("Ajman", "AJM"),
    ("New York", "JFK"),
    ("Los Angeles", "LAX"),
    ("Chicago", "ORD"),
    ("Houston", "IAH"),
    ("Miami", "MIA"),
    ("London", "LHR"),
    ("Manchester", "MAN"),
    ("Birmingham", "BHX"),
    ("Glasgow", "GLA"),
    ("Shanghai", "PVG"),
    ("Beijing", "PEK"),
    ("Guangzhou", "CAN"),
    ("Shenzhen", "SZX"),
    ("Berlin", "BER"),
    ("Munich", "MUC"),
    ("Frankfurt", "FRA"),
    ("Hamburg", "HAM"),
];

const ORIGIN_COUNTRIES: &[&str] = &[
    "AE-United Arab Emirates",
    "US-United States",
    "GB-United Kingdom",
    "CN-China",
];

const DESTINATION_COUNTRIES: &[&str] = &[
    "US-United States",
    "GB-United Kingdom",
    "AE-United Arab Emirates",
    "DE-Germany",
];

impl Default for ReferenceData {
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|name| name.to_string()).collect();
        Self {
            countries: COUNTRY_CITIES
                .iter()
                .map(|(country, cities)| CountryCities {
                    country: country.to_string(),
                    cities: owned(cities),
                })
                .collect(),
            route_codes: ROUTE_CODES
                .iter()
                .map(|(city, code)| (city.to_string(), code.to_string()))
                .collect(),
            origin_countries: owned(ORIGIN_COUNTRIES),
            destination_countries: owned(DESTINATION_COUNTRIES),
        }
    }
}
