pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod multi_select;
pub mod select;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
pub use input::Input;
pub use multi_select::MultiSelect;
pub use select::Select;
