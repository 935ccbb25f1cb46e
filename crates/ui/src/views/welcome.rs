use aid_core::wizard::Wizard;
use dioxus::prelude::*;

use crate::views::dispatch;

#[component]
pub fn WelcomeView(wizard: Signal<Wizard>) -> Element {
    let mut name = use_signal(String::new);

    rsx! {
        div { class: "page welcome-page",
            h1 { class: "view-title", "WELCOME TO THE FIRST AID EXPERT SYSTEM" }
            form {
                class: "welcome-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch(wizard, |state| state.submit_name(&name.read()));
                },
                label { class: "welcome-label", r#for: "user-name", "What is your name?" }
                input {
                    id: "user-name",
                    class: "welcome-input",
                    r#type: "text",
                    autofocus: true,
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Continue" }
            }
        }
    }
}
