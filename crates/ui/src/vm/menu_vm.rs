use aid_core::wizard::Wizard;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuVm {
    pub greeting: String,
    pub topics: Vec<String>,
}

#[must_use]
pub fn map_menu(wizard: &Wizard) -> MenuVm {
    let name = wizard.user_name().unwrap_or_default();
    MenuVm {
        greeting: format!("Hello {name}, how can I assist you?"),
        topics: wizard.content().names().map(str::to_string).collect(),
    }
}
