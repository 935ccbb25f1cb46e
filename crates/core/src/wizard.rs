//! Screen controller for the first-aid walkthrough.
//!
//! `Wizard` owns the session state and the single active screen. Every
//! operation either applies completely or is rejected with no change, so a
//! view can always re-render the whole screen from `Wizard` alone.

use std::sync::Arc;

use thiserror::Error;

use crate::model::{ContentError, ContentStore, Topic};
use crate::session::{NameError, SessionState, UserName};
use crate::transcript::Transcript;

//
// ─── SCREENS & DIALOGS ─────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    MainMenu,
    StepViewer,
    ChatbotSummary,
}

/// Modal overlays. While one is open only its own actions are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    NameRequired,
    ConfirmExit,
    Farewell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SubmitName,
    DismissNotice,
    SelectTopic,
    RequestExit,
    ConfirmExit,
    DeclineExit,
    AcknowledgeFarewell,
    GoPrevious,
    GoNext,
    GoToSummary,
    GoToMenu,
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] NameError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("{action:?} is not available on {screen:?}")]
    Rejected { action: Action, screen: Screen },

    #[error("{action:?} is blocked while {dialog:?} is open")]
    Blocked { action: Action, dialog: Dialog },
}

//
// ─── STEP VIEW ─────────────────────────────────────────────────────────────────
//

/// Action occupying the forward slot of the step navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardAction {
    Next,
    Summary,
}

impl ForwardAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ForwardAction::Next => "Next",
            ForwardAction::Summary => "Chatbot Summary",
        }
    }
}

/// Everything the step viewer needs for the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepView<'a> {
    pub topic: &'a Topic,
    pub index: usize,
    pub text: &'a str,
    pub show_previous: bool,
    pub forward: ForwardAction,
}

impl StepView<'_> {
    /// 1-based position for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.topic.step_count()
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} — STEP {}", self.topic.name().to_uppercase(), self.number())
    }
}

//
// ─── WIZARD ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct Wizard {
    content: Arc<ContentStore>,
    session: SessionState,
    screen: Screen,
    dialog: Option<Dialog>,
    terminated: bool,
}

impl Wizard {
    #[must_use]
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self {
            content,
            session: SessionState::new(),
            screen: Screen::Welcome,
            dialog: None,
            terminated: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// True once the farewell has been acknowledged. The host should end the process.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.session.user_name().map(UserName::as_str)
    }

    #[must_use]
    pub fn current_topic(&self) -> Option<&Topic> {
        self.session
            .current_topic()
            .and_then(|id| self.content.get(id))
    }

    /// The step on screen, or `None` outside the step viewer.
    #[must_use]
    pub fn step_view(&self) -> Option<StepView<'_>> {
        if self.screen != Screen::StepViewer {
            return None;
        }
        let topic = self.current_topic()?;
        let index = self.session.current_step_index();
        let text = topic.step(index)?;
        let forward = if index < topic.last_step_index() {
            ForwardAction::Next
        } else {
            ForwardAction::Summary
        };

        Some(StepView {
            topic,
            index,
            text,
            show_previous: index > 0,
            forward,
        })
    }

    /// The summary on screen, or `None` outside the summary screen.
    #[must_use]
    pub fn transcript(&self) -> Option<Transcript> {
        if self.screen != Screen::ChatbotSummary {
            return None;
        }
        let user = self.session.user_name()?;
        let topic = self.current_topic()?;
        Some(Transcript::build(user, topic))
    }

    // Welcome

    /// # Errors
    ///
    /// Returns `WizardError::Validation` for a blank name; the name-required
    /// notice is opened and nothing else changes.
    pub fn submit_name(&mut self, input: &str) -> Result<(), WizardError> {
        self.expect_screen(Action::SubmitName, Screen::Welcome)?;
        match UserName::parse(input) {
            Ok(name) => {
                tracing::debug!(name = name.as_str(), "name accepted");
                self.session.set_user_name(name);
                self.show(Screen::MainMenu);
                Ok(())
            }
            Err(err) => {
                self.dialog = Some(Dialog::NameRequired);
                Err(err.into())
            }
        }
    }

    /// Closes the name-required notice.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if the notice is not open.
    pub fn dismiss_notice(&mut self) -> Result<(), WizardError> {
        self.expect_dialog(Action::DismissNotice, Dialog::NameRequired)?;
        self.dialog = None;
        Ok(())
    }

    // Main menu

    /// # Errors
    ///
    /// Returns `WizardError::Content` for a name outside the content store.
    pub fn select_topic(&mut self, name: &str) -> Result<(), WizardError> {
        self.expect_screen(Action::SelectTopic, Screen::MainMenu)?;
        let id = self.content.id_of(name)?;
        tracing::debug!(topic = name, "topic selected");
        self.session.start_topic(id);
        self.show(Screen::StepViewer);
        Ok(())
    }

    /// Opens the exit confirmation.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` outside the main menu.
    pub fn request_exit(&mut self) -> Result<(), WizardError> {
        self.expect_screen(Action::RequestExit, Screen::MainMenu)?;
        self.dialog = Some(Dialog::ConfirmExit);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if no exit confirmation is open.
    pub fn confirm_exit(&mut self) -> Result<(), WizardError> {
        self.expect_dialog(Action::ConfirmExit, Dialog::ConfirmExit)?;
        self.dialog = Some(Dialog::Farewell);
        Ok(())
    }

    /// Leaves the menu exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if no exit confirmation is open.
    pub fn decline_exit(&mut self) -> Result<(), WizardError> {
        self.expect_dialog(Action::DeclineExit, Dialog::ConfirmExit)?;
        tracing::debug!("exit declined");
        self.dialog = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if the farewell is not showing.
    pub fn acknowledge_farewell(&mut self) -> Result<(), WizardError> {
        self.expect_dialog(Action::AcknowledgeFarewell, Dialog::Farewell)?;
        tracing::info!("session finished");
        self.dialog = None;
        self.terminated = true;
        Ok(())
    }

    // Step viewer

    /// # Errors
    ///
    /// Returns `WizardError::Rejected` on the first step.
    pub fn go_previous(&mut self) -> Result<(), WizardError> {
        self.expect_screen(Action::GoPrevious, Screen::StepViewer)?;
        let index = self.session.current_step_index();
        if index == 0 {
            return Err(self.rejected(Action::GoPrevious));
        }
        self.session.set_step_index(index - 1);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::Rejected` on the last step.
    pub fn go_next(&mut self) -> Result<(), WizardError> {
        self.expect_screen(Action::GoNext, Screen::StepViewer)?;
        let index = self.session.current_step_index();
        if self.is_last_step() {
            return Err(self.rejected(Action::GoNext));
        }
        self.session.set_step_index(index + 1);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::Rejected` unless on the last step.
    pub fn go_to_summary(&mut self) -> Result<(), WizardError> {
        self.expect_screen(Action::GoToSummary, Screen::StepViewer)?;
        if !self.is_last_step() {
            return Err(self.rejected(Action::GoToSummary));
        }
        self.show(Screen::ChatbotSummary);
        Ok(())
    }

    /// Returns to the menu, keeping the current topic.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` outside the step viewer and summary.
    pub fn go_to_menu(&mut self) -> Result<(), WizardError> {
        self.ensure_no_dialog(Action::GoToMenu)?;
        match self.screen {
            Screen::StepViewer | Screen::ChatbotSummary => {
                self.show(Screen::MainMenu);
                Ok(())
            }
            _ => Err(self.rejected(Action::GoToMenu)),
        }
    }

    fn is_last_step(&self) -> bool {
        self.current_topic()
            .is_none_or(|topic| self.session.current_step_index() >= topic.last_step_index())
    }

    fn show(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "screen change");
        self.screen = screen;
    }

    fn rejected(&self, action: Action) -> WizardError {
        WizardError::Rejected {
            action,
            screen: self.screen,
        }
    }

    fn ensure_no_dialog(&self, action: Action) -> Result<(), WizardError> {
        match self.dialog {
            Some(dialog) => Err(WizardError::Blocked { action, dialog }),
            None => Ok(()),
        }
    }

    fn expect_screen(&self, action: Action, screen: Screen) -> Result<(), WizardError> {
        self.ensure_no_dialog(action)?;
        if self.screen != screen || self.terminated {
            return Err(self.rejected(action));
        }
        Ok(())
    }

    fn expect_dialog(&self, action: Action, dialog: Dialog) -> Result<(), WizardError> {
        if self.dialog != Some(dialog) {
            return Err(self.rejected(action));
        }
        Ok(())
    }
}
