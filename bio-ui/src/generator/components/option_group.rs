use bio_client::ProfileForm;
use dioxus::prelude::*;

use crate::options::OptionGroup;

/// Checkbox group bound to one multi-select field of the form.
#[component]
pub fn OptionGroupView(
    group: OptionGroup,
    mut form: Signal<ProfileForm>,
    disabled: bool,
) -> Element {
    let field = group.field;

    rsx! {
        fieldset {
            class: "option-group",
            style: "margin: 0; padding: 0; border: none;",

            legend {
                style: "margin-bottom: 0.5rem; font-weight: 600; color: #374151;",
                "{group.title}"
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 0.5rem;",

                for choice in group.options.iter().copied() {
                    label {
                        key: "{choice}",
                        style: "display: flex; align-items: center; gap: 0.5rem; cursor: pointer; color: #4b5563;",
                        input {
                            r#type: "checkbox",
                            value: "{choice}",
                            disabled,
                            checked: form.read().is_selected(field, choice),
                            onchange: move |_| form.write().toggle(field, choice),
                        }
                        "{choice}"
                    }
                }
            }
        }
    }
}
