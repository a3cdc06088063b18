pub mod button;
pub mod checkbox;
pub mod input;
pub mod label;
pub mod menu;
pub mod tooltip;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use button::*;
pub use checkbox::*;
pub use input::*;
pub use label::*;
pub use menu::*;
pub use tooltip::*;
