use aid_core::wizard::Wizard;
use dioxus::prelude::*;

use crate::views::dispatch;
use crate::vm::map_summary;

#[component]
pub fn SummaryView(wizard: Signal<Wizard>) -> Element {
    let Some(vm) = wizard.read().transcript().map(|transcript| map_summary(&transcript)) else {
        return rsx! {};
    };

    rsx! {
        div { class: "page summary-page",
            h2 { class: "view-title", "{vm.title}" }
            // Read-only transcript; the container scrolls, nothing inside is editable.
            div { class: "transcript", role: "log",
                for line in vm.lines.iter() {
                    p { class: line.class, "{line.text}" }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch(wizard, Wizard::go_to_menu),
                "Back to Menu"
            }
        }
    }
}
