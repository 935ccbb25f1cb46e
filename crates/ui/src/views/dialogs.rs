use aid_core::wizard::{Dialog, Wizard};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::dispatch;

#[component]
pub fn DialogLayer(wizard: Signal<Wizard>) -> Element {
    let ctx = use_context::<AppContext>();
    let dialog = wizard.read().dialog();

    rsx! {
        match dialog {
            None => rsx! {},
            Some(Dialog::NameRequired) => rsx! {
                div { class: "modal-overlay",
                    div { class: "modal", role: "alertdialog",
                        h3 { class: "modal-title", "Error" }
                        p { class: "modal-body", "Please enter your name." }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| dispatch(wizard, Wizard::dismiss_notice),
                                "OK"
                            }
                        }
                    }
                }
            },
            Some(Dialog::ConfirmExit) => rsx! {
                div { class: "modal-overlay",
                    div { class: "modal", role: "alertdialog",
                        h3 { class: "modal-title", "Exit" }
                        p { class: "modal-body", "Are you sure you want to exit?" }
                        div { class: "modal-actions",
                            button {
                                class: "btn modal-cancel",
                                r#type: "button",
                                onclick: move |_| dispatch(wizard, Wizard::decline_exit),
                                "No"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: move |_| dispatch(wizard, Wizard::confirm_exit),
                                "Yes"
                            }
                        }
                    }
                }
            },
            Some(Dialog::Farewell) => rsx! {
                div { class: "modal-overlay",
                    div { class: "modal", role: "alertdialog",
                        h3 { class: "modal-title", "Thank You" }
                        p { class: "modal-body", "🙏 Thank you for using the First Aid Expert System." }
                        p { class: "modal-body", "Stay safe!" }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| finish_farewell(wizard, &ctx),
                                "OK"
                            }
                        }
                    }
                }
            },
        }
    }
}

/// Acknowledges the farewell and asks the host to close once the wizard has terminated.
pub fn finish_farewell(wizard: Signal<Wizard>, ctx: &AppContext) {
    dispatch(wizard, Wizard::acknowledge_farewell);
    if wizard.read().is_terminated() {
        tracing::info!("exit confirmed, shutting down");
        ctx.shutdown();
    }
}
