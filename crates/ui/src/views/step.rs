use aid_core::wizard::{ForwardAction, Wizard};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::dispatch;
use crate::vm::{ImageVm, map_step};

#[component]
pub fn StepViewerView(wizard: Signal<Wizard>) -> Element {
    let ctx = use_context::<AppContext>();
    let images = ctx.image_loader();
    let Some(vm) = wizard.read().step_view().map(|step| map_step(&step, &images)) else {
        return rsx! {};
    };
    let forward = vm.forward;

    rsx! {
        div { class: "page step-page",
            h2 { class: "view-title", "{vm.title}" }
            p { class: "step-progress", "{vm.progress_label}" }
            match &vm.image {
                ImageVm::Image { src, alt, width, height } => rsx! {
                    img { class: "step-image", src: "{src}", alt: "{alt}", width: "{width}", height: "{height}" }
                },
                ImageVm::Placeholder(text) => rsx! {
                    p { class: "step-image-placeholder", "{text}" }
                },
            }
            p { class: "step-text", "{vm.text}" }
            div { class: "step-nav",
                if vm.show_previous {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch(wizard, Wizard::go_previous),
                        "Previous"
                    }
                }
                button {
                    class: match forward {
                        ForwardAction::Next => "btn btn-primary",
                        ForwardAction::Summary => "btn btn-success",
                    },
                    r#type: "button",
                    onclick: move |_| match forward {
                        ForwardAction::Next => dispatch(wizard, Wizard::go_next),
                        ForwardAction::Summary => dispatch(wizard, Wizard::go_to_summary),
                    },
                    "{vm.forward_label}"
                }
            }
            button {
                class: "btn btn-menu",
                r#type: "button",
                onclick: move |_| dispatch(wizard, Wizard::go_to_menu),
                "Back to Menu"
            }
        }
    }
}
