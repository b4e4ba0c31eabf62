pub mod alert;
pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod overlay;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
