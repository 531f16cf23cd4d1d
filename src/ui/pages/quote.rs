use dioxus::prelude::*;

use crate::{
    domain::{AppState, CargoType, Leg, QuoteInput, QuoteRequest, QuoteRequestHandler, ServiceLevel},
    ui::{
        components::{
            address_fields::AddressFields,
            cargo_type_card::CargoTypeCard,
            package_card::PackageCard,
            summary_panel::SummaryPanel,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::config,
};

/// Confirms a valid quote request to the user. Pricing happens elsewhere.
struct ToastConfirmation {
    toasts: Signal<Vec<ToastMessage>>,
}

impl QuoteRequestHandler for ToastConfirmation {
    fn quote_requested(&self, request: &QuoteRequest) {
        let summary = &request.summary;
        push_toast(
            self.toasts,
            ToastKind::Success,
            format!("Quote requested for {}", summary.route_label),
            Some(format!(
                "{} kg · {} · {}",
                summary.total_weight_display(),
                summary.service,
                summary.cargo_type
            )),
        );
    }
}

#[component]
pub fn QuotePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let snapshot = state();
    let form = &snapshot.form;
    let reference = &snapshot.reference;
    let summary = snapshot.summary();
    let removable = form.packages().len() > 1;

    let mut dispatch = move |input: QuoteInput| state.with_mut(|st| st.apply(input));

    let on_submit = move |_: ()| {
        let confirmation = ToastConfirmation { toasts };
        let outcome = state.with_mut(|st| st.submit(&confirmation));
        if let Err(err) = outcome {
            push_toast(
                toasts,
                ToastKind::Warning,
                "Please complete the highlighted fields",
                Some(err.to_string()),
            );
        }
    };

    rsx! {
        div { class: "quote-page",
            button { class: "back-link", "‹ Back" }
            div { class: "page-intro",
                h1 { "Instant Quote" }
                p {
                    "Enter your location details and cargo dimensions to get an immediate, guaranteed shipping rate."
                }
            }

            div { class: "quote-layout",
                div { class: "quote-steps",
                    Step { number: 1, last: false,
                        h2 { class: "step-title", span { class: "step-icon", "🗺" } "Where is it going?" }
                        div { class: "step-body",
                            for leg in Leg::ALL {
                                AddressFields {
                                    key: "{leg.key_prefix()}",
                                    leg,
                                    address: form.address(leg).clone(),
                                    countries: reference.countries_for(leg).to_vec(),
                                    cities: form.cities_for(leg, reference).to_vec(),
                                    errors: snapshot.errors.clone(),
                                    on_input: dispatch,
                                }
                            }
                        }
                        div { class: "service-picker",
                            label { class: "service-label", "Preferred Service" }
                            select {
                                class: theme::input_class(false),
                                value: "{form.service.label()}",
                                onchange: move |evt| {
                                    if let Some(service) = ServiceLevel::from_label(&evt.value()) {
                                        dispatch(QuoteInput::Service(service));
                                    }
                                },
                                for service in ServiceLevel::ALL {
                                    option {
                                        key: "{service.label()}",
                                        value: "{service.label()}",
                                        selected: service == form.service,
                                        "{service.label()}"
                                    }
                                }
                            }
                        }
                    }

                    Step { number: 2, last: false,
                        div { class: "step-heading",
                            h2 { class: "step-title", span { class: "step-icon", "📦" } "Package Sizes" }
                            button {
                                class: theme::BTN_PRIMARY,
                                onclick: move |_| dispatch(QuoteInput::AddPackage),
                                "＋ Add Package"
                            }
                        }
                        div { class: "package-list",
                            for (index, package) in form.packages().iter().enumerate() {
                                PackageCard {
                                    key: "{index}",
                                    index,
                                    package: package.clone(),
                                    removable,
                                    errors: snapshot.errors.clone(),
                                    on_input: dispatch,
                                }
                            }
                        }
                    }

                    Step { number: 3, last: true,
                        h2 { class: "step-title", span { class: "step-icon", "🏷" } "Type of Cargo" }
                        div { class: "cargo-grid", role: "radiogroup",
                            for cargo_type in CargoType::ALL {
                                CargoTypeCard {
                                    key: "{cargo_type.label()}",
                                    cargo_type,
                                    active: cargo_type == form.cargo_type,
                                    on_select: move |cargo_type: CargoType| dispatch(QuoteInput::CargoType(cargo_type)),
                                }
                            }
                        }
                    }
                }

                SummaryPanel {
                    summary,
                    support_phone: config::active().support_phone().to_string(),
                    on_submit,
                }
            }
        }
    }
}

#[component]
fn Step(number: u8, last: bool, children: Element) -> Element {
    rsx! {
        div { class: "step",
            div { class: "step-rail",
                div { class: "step-indicator", "{number}" }
                if !last {
                    div { class: "step-line" }
                }
            }
            div { class: "glass-card", {children} }
        }
    }
}
