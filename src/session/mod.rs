pub mod controller;
pub mod menu;
pub mod prompts;

pub use controller::{Flow, Phase, Session, SessionState};
pub use menu::{find_action, normalize_selection, visible_actions, Action, MenuAction, MENU};
pub use prompts::{parse_confirmation, parse_index_choice, IndexChoice};
