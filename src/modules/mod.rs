pub mod action;
pub mod listener;
pub mod memory;
pub mod perception;
