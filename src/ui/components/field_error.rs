use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: theme::ERROR_TEXT, role: "alert", "{message}" }
        }
    }
}
