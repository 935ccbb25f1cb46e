mod menu_vm;
mod step_vm;
mod summary_vm;

pub use menu_vm::{MenuVm, map_menu};
pub use step_vm::{ImageVm, StepVm, map_step};
pub use summary_vm::{SummaryLineVm, SummaryVm, map_summary};
