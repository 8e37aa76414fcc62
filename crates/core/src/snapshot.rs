use crate::piece::FallingPiece;
use crate::pieces::{rotation_states, SPAWN_POSITION};
use crate::types::{BlockColor, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rot_index: usize,
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

impl ActivePiece {
    /// Absolute board positions of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        rotation_states(self.kind)[self.rot_index].map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<&FallingPiece> for ActivePiece {
    fn from(value: &FallingPiece) -> Self {
        Self {
            kind: value.kind(),
            rot_index: value.rot_index(),
            x: value.x(),
            y: value.y(),
            color: value.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActivePiece,
    pub score: u32,
    pub difficulty: u32,
    pub stage: u32,
    pub rewards: [u32; 5],
    pub game_over: bool,
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActivePiece {
                kind: PieceKind::I,
                rot_index: 0,
                x: SPAWN_POSITION.0,
                y: SPAWN_POSITION.1,
                color: PieceKind::I.color(),
            },
            score: 0,
            difficulty: 0,
            stage: 0,
            rewards: [0; 5],
            game_over: false,
        }
    }
}
