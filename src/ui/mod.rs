pub mod actions;
pub mod app;
pub mod cell;
pub mod checkbox;
pub mod header;
pub mod keyboard;
pub mod menu;
pub mod table;
pub mod toolbar;
