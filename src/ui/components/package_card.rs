use dioxus::prelude::*;

use super::field_error::FieldError;
use crate::{
    domain::{ErrorMap, Package, PackageField, QuoteInput},
    ui::theme,
};

#[component]
pub fn PackageCard(
    index: usize,
    package: Package,
    removable: bool,
    errors: ErrorMap,
    on_input: EventHandler<QuoteInput>,
) -> Element {
    let inputs = PackageField::ALL
        .into_iter()
        .map(|field| {
            let key = field.key_suffix();
            let view = MeasureView {
                field,
                raw: package.raw(field).to_string(),
                error: errors.package(index, field).map(str::to_string),
            };
            (key, view)
        })
        .collect::<Vec<_>>();
    let number = index + 1;

    rsx! {
        div { class: "package-card",
            if removable {
                button {
                    class: theme::BTN_REMOVE,
                    title: "Remove package {number}",
                    onclick: move |_| on_input.call(QuoteInput::RemovePackage(index)),
                    "✕"
                }
            }
            div { class: "package-grid",
                for (key, view) in inputs {
                    MeasureInput {
                        key: "{key}",
                        index,
                        view,
                        on_input,
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct MeasureView {
    field: PackageField,
    raw: String,
    error: Option<String>,
}

#[component]
fn MeasureInput(index: usize, view: MeasureView, on_input: EventHandler<QuoteInput>) -> Element {
    let field = view.field;
    let heading = match field.unit() {
        Some(unit) => format!("{} ({unit})", capitalize(field.label())),
        None => capitalize(field.label()),
    };
    let placeholder = if field == PackageField::Quantity { "1" } else { "0" };

    rsx! {
        div { class: "field",
            label { class: "measure-label", "{heading} ", span { class: "required", "*" } }
            input {
                class: theme::measure_input_class(view.error.is_some()),
                r#type: "number",
                inputmode: "decimal",
                min: "0",
                placeholder: placeholder,
                value: "{view.raw}",
                oninput: move |evt| {
                    on_input.call(QuoteInput::Package {
                        index,
                        field,
                        raw: evt.value(),
                    })
                },
            }
            FieldError { message: view.error.clone() }
        }
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
