// src/combat/src/lib.rs
//! Character model: stats, the stat catalog, species tables and the
//! attack/damage/ultimate/heal rules every fight is built from.

pub mod catalog;
pub mod character;
pub mod combatant;
pub mod pillar;
pub mod rng;
pub mod species;
pub mod stats;


pub use crate::catalog::StatCatalog;
pub use crate::character::Character;
pub use crate::combatant::Combatant;
pub use crate::pillar::Pillar;
pub use crate::rng::GameRng;
pub use crate::species::{Defense, Role, Species, Ultimate, UltimateEffect};
pub use crate::stats::StatBlock;
