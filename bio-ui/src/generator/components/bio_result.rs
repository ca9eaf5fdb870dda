use dioxus::prelude::*;

use crate::generator::state::RESET_LABEL;

#[component]
pub fn BioResult(bio: String, on_reset: Callback<()>) -> Element {
    rsx! {
        div {
            class: "bio-result",
            style: "display: flex; flex-direction: column; gap: 1rem;",

            h2 {
                style: "margin: 0; font-size: 1.25rem; color: #374151;",
                "Your Dating Profile Bio"
            }

            textarea {
                class: "bio-text",
                style: "width: 100%; min-height: 220px; padding: 1rem; font-family: inherit; font-size: 1rem; line-height: 1.6; color: #1f2937; background: #fdf2f8; border: 1px solid #fbcfe8; border-radius: 8px; resize: vertical; box-sizing: border-box;",
                readonly: true,
                value: "{bio}",
            }

            button {
                class: "reset-btn",
                style: "align-self: center; padding: 0.75rem 1.5rem; background: #db2777; color: white; border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;",
                onclick: move |_| on_reset.call(()),
                "{RESET_LABEL}"
            }
        }
    }
}
