use aid_core::wizard::Wizard;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::Screens;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let wizard = use_signal(|| Wizard::new(ctx.content()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Screens { wizard }
            }
        }
    }
}
