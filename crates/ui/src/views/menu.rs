use aid_core::wizard::Wizard;
use dioxus::prelude::*;

use crate::views::dispatch;
use crate::vm::map_menu;

#[component]
pub fn MenuView(wizard: Signal<Wizard>) -> Element {
    let vm = map_menu(&wizard.read());

    let topic_buttons = vm.topics.iter().map(|topic| {
        let name = topic.clone();
        rsx! {
            button {
                key: "{topic}",
                class: "btn btn-topic",
                r#type: "button",
                onclick: move |_| dispatch(wizard, |state| state.select_topic(&name)),
                "{topic}"
            }
        }
    });

    rsx! {
        div { class: "page menu-page",
            h2 { class: "view-title", "{vm.greeting}" }
            div { class: "menu-topics", {topic_buttons} }
            button {
                class: "btn btn-danger",
                r#type: "button",
                onclick: move |_| dispatch(wizard, Wizard::request_exit),
                "Exit System"
            }
        }
    }
}
