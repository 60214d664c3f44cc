//! 地牢地图渲染器
//!
//! One character per room:
//! `@` hero, `X` exit, `P` pillar, `M` monster, `!` item, `.` explored,
//! `?` unexplored.

use dungeon::{Maze, Room};

pub struct DungeonRenderer;

impl DungeonRenderer {
    /// Contents are only shown for rooms that were entered or revealed.
    pub fn minimap(maze: &Maze) -> String {
        let size = maze.size();
        let mut rows = Vec::with_capacity(size + 1);
        rows.push("MAP:".to_string());

        for row in 0..size {
            let line: String = (0..size)
                .map(|col| {
                    if maze.hero_location() == (row, col) {
                        '@'
                    } else {
                        maze.room((row, col)).map_or(' ', Self::glyph)
                    }
                })
                .flat_map(|glyph| [glyph, ' '])
                .collect();
            rows.push(line.trim_end().to_string());
        }
        rows.join("\n")
    }

    fn glyph(room: &Room) -> char {
        if !room.visited && !room.revealed {
            return '?';
        }
        if room.exit {
            'X'
        } else if room.pillar.is_some() {
            'P'
        } else if room.monster {
            'M'
        } else if room.item {
            '!'
        } else {
            '.'
        }
    }
}
