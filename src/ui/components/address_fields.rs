use dioxus::prelude::*;

use super::field_error::FieldError;
use crate::{
    domain::{Address, AddressField, ErrorMap, Leg, QuoteInput},
    ui::theme,
};

/// Country, city and postal code inputs for one leg of the shipment.
#[component]
pub fn AddressFields(
    leg: Leg,
    address: Address,
    countries: Vec<String>,
    cities: Vec<String>,
    errors: ErrorMap,
    on_input: EventHandler<QuoteInput>,
) -> Element {
    let error_for = |field| errors.address(leg, field).map(str::to_string);
    let country_error = error_for(AddressField::Country);
    let city_error = error_for(AddressField::City);
    let postal_error = error_for(AddressField::PostalCode);

    let emit = move |field: AddressField, value: String| {
        on_input.call(QuoteInput::Address { leg, field, value });
    };

    let marker = match leg {
        Leg::Origin => "leg-marker leg-marker-origin",
        Leg::Destination => "leg-marker leg-marker-destination",
    };

    rsx! {
        div {
            h3 { class: "leg-title",
                span { class: marker }
                "{leg.label()} Details"
            }
            div { class: "address-grid",
                div { class: "field",
                    label { class: theme::LABEL, "Country ", span { class: "required", "*" } }
                    select {
                        class: theme::input_class(country_error.is_some()),
                        value: "{address.country}",
                        onchange: move |evt| emit(AddressField::Country, evt.value()),
                        option { value: "", selected: address.country.is_empty(), "Select Country" }
                        for country in countries.iter() {
                            option {
                                key: "{country}",
                                value: "{country}",
                                selected: *country == address.country,
                                "{country}"
                            }
                        }
                    }
                    FieldError { message: country_error.clone() }
                }
                div { class: "field",
                    label { class: theme::LABEL, "City ", span { class: "required", "*" } }
                    select {
                        class: theme::input_class(city_error.is_some()),
                        value: "{address.city}",
                        disabled: cities.is_empty(),
                        onchange: move |evt| emit(AddressField::City, evt.value()),
                        option { value: "", selected: address.city.is_empty(), "Select City" }
                        for city in cities.iter() {
                            option {
                                key: "{city}",
                                value: "{city}",
                                selected: *city == address.city,
                                "{city}"
                            }
                        }
                    }
                    FieldError { message: city_error.clone() }
                }
                div { class: "field",
                    label { class: theme::LABEL, "Postal Code ", span { class: "required", "*" } }
                    input {
                        class: theme::input_class(postal_error.is_some()),
                        r#type: "text",
                        placeholder: "Enter postal code",
                        value: "{address.postal_code}",
                        oninput: move |evt| emit(AddressField::PostalCode, evt.value()),
                    }
                    FieldError { message: postal_error.clone() }
                }
            }
        }
    }
}
