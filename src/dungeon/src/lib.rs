//src/dungeon/src/lib.rs
//! 迷宫引擎：房间网格、英雄位置、房间事件与当前遭遇

pub mod difficulty;
pub mod encounter;
pub mod maze;
pub mod room;

pub use crate::difficulty::Difficulty;
pub use crate::encounter::Encounter;
pub use crate::maze::{Maze, Position, RoomEntry, RoomEvent};
pub use crate::room::{Direction, Room};
