use aid_core::wizard::{Screen, Wizard, WizardError};
use dioxus::prelude::*;

use crate::views::{DialogLayer, MenuView, StepViewerView, SummaryView, WelcomeView};

/// Renders the active screen and any open dialog from the wizard state.
#[component]
pub fn Screens(wizard: Signal<Wizard>) -> Element {
    let screen = wizard.read().screen();

    rsx! {
        match screen {
            Screen::Welcome => rsx! { WelcomeView { wizard } },
            Screen::MainMenu => rsx! { MenuView { wizard } },
            Screen::StepViewer => rsx! { StepViewerView { wizard } },
            Screen::ChatbotSummary => rsx! { SummaryView { wizard } },
        }
        DialogLayer { wizard }
    }
}

/// Applies one user action. Rejections leave the wizard untouched and are only logged.
pub fn dispatch(
    mut wizard: Signal<Wizard>,
    action: impl FnOnce(&mut Wizard) -> Result<(), WizardError>,
) {
    let result = {
        let mut state = wizard.write();
        action(&mut state)
    };
    match result {
        Ok(()) => {}
        Err(WizardError::Validation(err)) => tracing::info!(%err, "input rejected"),
        Err(err) => tracing::debug!(%err, "action ignored"),
    }
}
