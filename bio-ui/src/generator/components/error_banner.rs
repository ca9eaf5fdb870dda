use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            style: "margin-bottom: 1.5rem; padding: 0.75rem 1rem; background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; border-radius: 8px; font-size: 0.875rem;",
            "{message}"
        }
    }
}
