//! Pieces module tests - exact rotation-state tables per kind

use blockfall::core::pieces::{rotation_states, SPAWN_POSITION};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let states = rotation_states(PieceKind::I);
    assert_eq!(states.len(), 2);

    // Horizontal bar spawns first, reaching two cells left of the anchor
    assert_eq!(states[0], [(0, 0), (-1, 0), (1, 0), (-2, 0)]);
    // Vertical bar sits one cell low so the flip works near the ceiling
    assert_eq!(states[1], [(0, 0), (0, -1), (0, 2), (0, 1)]);
}

#[test]
fn test_o_piece_shape() {
    let states = rotation_states(PieceKind::O);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0], [(0, 0), (0, 1), (-1, 0), (-1, 1)]);
}

#[test]
fn test_t_piece_shapes() {
    let states = rotation_states(PieceKind::T);
    assert_eq!(states.len(), 4);

    assert_eq!(states[0], [(0, 0), (0, -1), (1, 0), (-1, 0)]);
    assert_eq!(states[1], [(0, 0), (1, 0), (0, 1), (0, -1)]);
    assert_eq!(states[2], [(0, 0), (0, 1), (-1, 0), (1, 0)]);
    assert_eq!(states[3], [(0, 0), (-1, 0), (0, -1), (0, 1)]);
}

#[test]
fn test_s_piece_shapes() {
    let states = rotation_states(PieceKind::S);
    assert_eq!(states.len(), 2);

    assert_eq!(states[0], [(0, 0), (-1, 0), (-1, -1), (0, 1)]);
    assert_eq!(states[1], [(0, 0), (0, -1), (1, -1), (-1, 0)]);
}

#[test]
fn test_z_piece_shapes() {
    let states = rotation_states(PieceKind::Z);
    assert_eq!(states.len(), 2);

    assert_eq!(states[0], [(0, 0), (-1, -1), (1, 0), (0, -1)]);
    assert_eq!(states[1], [(0, 0), (1, -1), (0, 1), (1, 0)]);
}

#[test]
fn test_j_piece_shapes() {
    let states = rotation_states(PieceKind::J);
    assert_eq!(states.len(), 4);

    assert_eq!(states[0], [(0, 0), (-1, 0), (-1, -1), (1, 0)]);
    assert_eq!(states[1], [(0, 0), (0, -1), (1, -1), (0, 1)]);
    assert_eq!(states[2], [(0, 0), (1, 0), (1, 1), (-1, 0)]);
    assert_eq!(states[3], [(0, 0), (0, 1), (-1, 1), (0, -1)]);
}

#[test]
fn test_l_piece_shapes() {
    let states = rotation_states(PieceKind::L);
    assert_eq!(states.len(), 4);

    assert_eq!(states[0], [(0, 0), (-1, 0), (1, 0), (-1, 1)]);
    assert_eq!(states[1], [(0, 0), (0, -1), (0, 1), (-1, -1)]);
    assert_eq!(states[2], [(0, 0), (1, 0), (-1, 0), (1, -1)]);
    assert_eq!(states[3], [(0, 0), (0, 1), (0, -1), (1, 1)]);
}

#[test]
fn test_spawn_position() {
    assert_eq!(SPAWN_POSITION, (5, 1));
}

// ============== Consistency Tests ==============

#[test]
fn test_multi_state_tables_have_distinct_states() {
    for kind in PieceKind::ALL {
        let states = rotation_states(kind);
        for i in 0..states.len() {
            for j in (i + 1)..states.len() {
                let mut a = states[i];
                let mut b = states[j];
                a.sort_unstable();
                b.sort_unstable();
                assert_ne!(a, b, "{:?} repeats a rotation state", kind);
            }
        }
    }
}

#[test]
fn test_every_kind_spawns_inside_the_board() {
    let (sx, sy) = SPAWN_POSITION;
    for kind in PieceKind::ALL {
        for shape in rotation_states(kind) {
            for &(dx, dy) in shape {
                let x = sx + dx;
                let y = sy + dy;
                assert!(
                    x >= 0 && x < BOARD_WIDTH as i8,
                    "{:?} spawns outside the walls",
                    kind
                );
                assert!(
                    y >= 0 && y < BOARD_HEIGHT as i8,
                    "{:?} spawns above or below the board",
                    kind
                );
            }
        }
    }
}
