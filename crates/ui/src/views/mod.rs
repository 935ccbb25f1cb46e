mod dialogs;
mod menu;
mod screens;
mod step;
mod summary;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dialogs::{DialogLayer, finish_farewell};
pub use menu::MenuView;
pub use screens::{Screens, dispatch};
pub use step::StepViewerView;
pub use summary::SummaryView;
pub use welcome::WelcomeView;
