use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    domain::{AppState, QuoteForm},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::QuotePage,
        shell::Shell,
    },
    util::{assets, config},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/quote")]
    Quote {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(new_session);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Fresh form session using the installed configuration's defaults and tables.
fn new_session() -> AppState {
    let config = config::active();
    let form = QuoteForm::with_defaults(config.default_service, config.default_cargo_type);
    tracing::debug!(
        service = %config.default_service,
        cargo_type = %config.default_cargo_type,
        "starting quote session"
    );
    AppState::new(form, Arc::new(config.reference_data()))
}

#[component]
pub fn Quote() -> Element {
    rsx! { Shell { QuotePage {} } }
}
