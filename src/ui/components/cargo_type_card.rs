use dioxus::prelude::*;

use crate::{domain::CargoType, ui::theme};

#[component]
pub fn CargoTypeCard(cargo_type: CargoType, active: bool, on_select: EventHandler<CargoType>) -> Element {
    rsx! {
        div {
            class: theme::cargo_card(active),
            role: "radio",
            aria_checked: "{active}",
            onclick: move |_| on_select.call(cargo_type),
            if active {
                span { class: "cargo-check", "✔" }
            }
            div { class: theme::cargo_icon(cargo_type), "{cargo_type.icon()}" }
            h3 { class: "cargo-title", "{cargo_type.label()}" }
            p { class: "cargo-description", "{cargo_type.description()}" }
        }
    }
}
