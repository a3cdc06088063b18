pub mod hooks;
pub mod ui;

mod autocomplete_input;
mod filter_popover;
mod menu_item_select;
mod simple_alert;

pub use autocomplete_input::AutocompleteInput;
pub use filter_popover::FilterPopover;
pub use menu_item_select::MenuItemSelect;
pub use simple_alert::{SimpleAlert, DONT_SHOW_AGAIN_MARKER};
