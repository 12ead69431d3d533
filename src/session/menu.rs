#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Detect,
    List,
    ExtractOne,
    ExtractAll,
    ClearExt,
    Exit,
}

#[derive(Debug)]
pub struct MenuAction {
    pub action: Action,
    pub name: &'static str,
    pub description: &'static str,
    pub requires_catalog: bool,
}

impl MenuAction {
    const fn new(
        action: Action,
        name: &'static str,
        description: &'static str,
        requires_catalog: bool,
    ) -> Self {
        Self {
            action,
            name,
            description,
            requires_catalog,
        }
    }

    pub fn is_visible(&self, catalog_ready: bool) -> bool {
        !self.requires_catalog || catalog_ready
    }

    /// `[Name] - Description`, or just `[Name]` without a description.
    pub fn menu_line(&self) -> String {
        if self.description.is_empty() {
            format!("[{}]", self.name)
        } else {
            format!("[{}] - {}", self.name, self.description)
        }
    }
}

pub static MENU: [MenuAction; 6] = [
    MenuAction::new(Action::Detect, "Detect", "Detects ROMs", false),
    MenuAction::new(Action::List, "List", "Lists detected ROMs", true),
    MenuAction::new(Action::ExtractOne, "Extract One", "Extracts a single ROM", true),
    MenuAction::new(Action::ExtractAll, "Extract All", "Extracts all detected ROMs", true),
    MenuAction::new(
        Action::ClearExt,
        "Clear Ext",
        "Removes any extension on output folders",
        false,
    ),
    MenuAction::new(Action::Exit, "Exit", "", false),
];

pub fn visible_actions(catalog_ready: bool) -> impl Iterator<Item = &'static MenuAction> {
    MENU.iter().filter(move |item| item.is_visible(catalog_ready))
}

/// Trims, lowercases and drops any `[`/`]` the user typed around a name.
pub fn normalize_selection(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '[' && *c != ']')
        .collect()
}

/// Looks up an action by name, ignoring case and brackets.
pub fn find_action(input: &str) -> Option<&'static MenuAction> {
    let selection = normalize_selection(input);
    MENU.iter().find(|item| item.name.to_lowercase() == selection)
}
