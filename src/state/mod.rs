pub mod cell;
pub mod column;
pub mod data_model;
pub mod effects;
pub mod error;
pub mod events;
pub mod grid;
pub mod keys;
pub mod menu;
pub mod menu_registry;
pub mod mutable_value;
pub mod navigator;
pub mod plugin;
pub mod position;
