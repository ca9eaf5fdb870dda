use bio_client::ProfileForm;
use dioxus::prelude::*;

use crate::generator::components::OptionGroupView;
use crate::generator::state::{missing_hint, submit_enabled};
use crate::options::{CAREER_OPTIONS, OPTION_GROUPS};

#[component]
pub fn ProfileFormView(
    mut form: Signal<ProfileForm>,
    loading: bool,
    submit_text: &'static str,
    on_submit: Callback<()>,
) -> Element {
    let current = form.read();
    let career = current.input().career.clone();
    let enabled = submit_enabled(&current, loading);
    let hint = missing_hint(&current);
    drop(current);

    rsx! {
        form {
            class: "profile-form",
            style: "display: flex; flex-direction: column; gap: 1.5rem;",
            onsubmit: move |e| {
                e.prevent_default();
                if enabled {
                    on_submit.call(());
                }
            },

            div {
                style: "display: flex; flex-direction: column; gap: 0.5rem;",
                label {
                    r#for: "career",
                    style: "font-weight: 600; color: #374151;",
                    "What's Your Career?"
                }
                select {
                    id: "career",
                    style: "padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 8px; font-size: 1rem; background: white;",
                    value: "{career}",
                    disabled: loading,
                    onchange: move |e| form.write().set_career(e.value()),
                    option { value: "", disabled: true, selected: career.is_empty(), "Select your career" }
                    for choice in CAREER_OPTIONS.iter().copied() {
                        option {
                            key: "{choice}",
                            value: "{choice}",
                            selected: career == choice,
                            "{choice}"
                        }
                    }
                }
            }

            for group in OPTION_GROUPS {
                OptionGroupView {
                    key: "{group.title}",
                    group,
                    form,
                    disabled: loading,
                }
            }

            if let Some(hint) = hint {
                p {
                    class: "missing-hint",
                    style: "margin: 0; font-size: 0.875rem; color: #6b7280;",
                    "{hint}"
                }
            }

            button {
                r#type: "submit",
                class: "submit-btn",
                style: if enabled {
                    "padding: 0.75rem 1.5rem; background: #db2777; color: white; border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;"
                } else {
                    "padding: 0.75rem 1.5rem; background: #f9a8d4; color: white; border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: not-allowed;"
                },
                disabled: !enabled,
                "{submit_text}"
            }
        }
    }
}
