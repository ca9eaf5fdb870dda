//! Bio generator screen
//!
//! Form and result views share one pair of signals: the profile being edited
//! and the submission lifecycle. Network work lives in `effects`, pure view
//! decisions in `state`.

pub mod components;
pub mod effects;
pub mod state;

use bio_client::{ProfileForm, SubmissionState};
use dioxus::prelude::*;

use crate::generator::components::{BioResult, ErrorBanner, ProfileFormView};
use crate::generator::effects::{reset_submission, submit_profile};
use crate::generator::state::{banner_message, submit_label};

#[component]
pub fn BioGenerator() -> Element {
    let form = use_signal(ProfileForm::new);
    let submission = use_signal(SubmissionState::new);

    let on_submit = use_callback(move |_: ()| {
        spawn(async move {
            submit_profile(form, submission).await;
        });
    });

    let on_reset = use_callback(move |_: ()| {
        reset_submission(submission);
    });

    let current = submission.read();
    let banner = banner_message(&current);
    let result_bio = if current.shows_result() {
        current.bio().map(str::to_string)
    } else {
        None
    };
    let loading = current.is_loading();
    let submit_text = submit_label(&current);
    drop(current);

    rsx! {
        div {
            class: "bio-generator",
            style: "max-width: 720px; margin: 2rem auto; padding: 2rem; background: white; border-radius: 16px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);",

            h1 {
                style: "margin: 0 0 1.5rem 0; font-size: 1.75rem; text-align: center; color: #be185d;",
                "Dating Profile Bio Generator"
            }

            if let Some(message) = banner {
                ErrorBanner { message }
            }

            if let Some(bio) = result_bio {
                BioResult { bio, on_reset }
            } else {
                ProfileFormView { form, loading, submit_text, on_submit }
            }
        }
    }
}
