// src/hero/src/lib.rs

mod core;
mod inventory;

pub use self::{core::Hero, inventory::Inventory};
