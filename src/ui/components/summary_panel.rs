use dioxus::prelude::*;

use crate::{domain::QuoteSummary, ui::theme};

/// Sidebar with the live totals and the quote button.
#[component]
pub fn SummaryPanel(summary: QuoteSummary, support_phone: String, on_submit: EventHandler<()>) -> Element {
    let weight = summary.total_weight_display();
    let pieces = summary.total_pieces_display();

    rsx! {
        aside { class: "summary-column",
            div { class: "summary-card",
                div { class: "summary-header",
                    h3 { "Summary" }
                    span { class: "summary-badge", "Draft" }
                }
                div { class: "summary-weight",
                    div {
                        p { class: "summary-caption", "Total Weight" }
                        p { class: "summary-weight-value",
                            "{weight} "
                            span { class: "summary-unit", "kg" }
                        }
                    }
                    span { class: "summary-weight-icon", "⚖" }
                }
                SummaryRow { label: "Route".to_string(),
                    div { class: "summary-route",
                        p { class: "summary-route-codes", "{summary.route_label}" }
                        p { class: "summary-route-caption", "{summary.route_caption}" }
                    }
                }
                SummaryRow { label: "Packages".to_string(),
                    span { class: "summary-value", "{summary.package_count} ({pieces} pcs)" }
                }
                SummaryRow { label: "Service".to_string(),
                    span { class: "summary-value",
                        span { class: "summary-dot" }
                        "{summary.service}"
                    }
                }
                SummaryRow { label: "Cargo".to_string(),
                    span { class: "summary-value", "{summary.cargo_type}" }
                }
                button {
                    class: theme::BTN_QUOTE,
                    onclick: move |_| on_submit.call(()),
                    "GET QUOTE"
                    span { class: "btn-quote-arrow", "›" }
                }
                p { class: "summary-terms",
                    "By clicking, you agree to our "
                    a { href: "#", "Privacy Policy & Terms" }
                    "."
                }
            }
            div { class: "help-card",
                div { class: "help-icon", "☎" }
                div {
                    h4 { "Need Help?" }
                    p { "Call us at ", span { class: "help-phone", "{support_phone}" } }
                }
            }
        }
    }
}

#[component]
fn SummaryRow(label: String, children: Element) -> Element {
    rsx! {
        div { class: "summary-row",
            span { class: "summary-row-label", "{label}" }
            {children}
        }
    }
}
