use dioxus::prelude::*;

use crate::util::version::version_label;

/// Site chrome around every page: sticky header with navigation and the
/// (display-only) signed-in user, and the footer with links and version.
#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "site",
            header { class: "site-header",
                div { class: "site-header-inner",
                    div { class: "brand",
                        div { class: "brand-mark", "M" }
                        span { class: "brand-name", "MERIDIAN" }
                    }
                    nav { class: "site-nav",
                        NavLink { active: true, label: "⚡ Fast Quote" }
                        NavLink { active: false, label: "Shipments" }
                        NavLink { active: false, label: "Tracking" }
                    }
                    div { class: "user-badge",
                        div { class: "user-avatar", "SC" }
                        div {
                            p { class: "user-name", "Senin C Simon" }
                            button { class: "user-logout", "Logout" }
                        }
                    }
                }
            }
            main { class: "site-main", {children} }
            footer { class: "site-footer",
                div { class: "site-footer-inner",
                    p { "© 2024 Meridian Logistics International · {version}" }
                    div { class: "footer-links",
                        a { href: "#", "Safety First" }
                        a { href: "#", "Global Network" }
                        a { href: "#", "Sustainability" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(active: bool, label: &'static str) -> Element {
    let class = if active { "nav-link nav-link-active" } else { "nav-link" };

    rsx! {
        a { class: class, href: "#", "{label}" }
    }
}
