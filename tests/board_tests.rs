//! Board tests against the public facade.

use blockfall::core::Board;
use blockfall::types::{BlockColor, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    // All cells start empty, the sentinel row included
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }

    let cells = board.cells();
    assert_eq!(cells.len(), BOARD_WIDTH as usize * BOARD_HEIGHT as usize);
    assert!(cells.iter().all(|c| c.is_none()));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(BlockColor::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(BlockColor::Purple)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    // Out of bounds writes report failure and change nothing
    assert!(!board.set(-1, 0, Some(BlockColor::Red)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(BlockColor::Red)));
}

#[test]
fn test_board_occupancy() {
    let mut board = Board::new();

    assert!(!board.is_occupied(5, 10));
    board.set(5, 10, Some(BlockColor::Green));
    assert!(board.is_occupied(5, 10));

    // Out of bounds is not "occupied"
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_occupied(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_row_full_detection() {
    let mut board = Board::new();

    assert!(!board.is_row_full(20));
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 20, Some(BlockColor::Blue));
    }
    assert!(board.is_row_full(20));

    // One hole is enough to keep a row open
    board.set(3, 20, None);
    assert!(!board.is_row_full(20));
}

#[test]
fn test_board_remove_row_shifts_stack_down() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 5, Some(BlockColor::Blue));
    }
    board.set(0, 3, Some(BlockColor::Cyan));
    board.set(1, 4, Some(BlockColor::Orange));
    // The sentinel row takes no part in the shift
    board.set(9, 0, Some(BlockColor::Red));

    board.remove_row(5);

    assert_eq!(board.get(1, 5), Some(Some(BlockColor::Orange)));
    assert_eq!(board.get(0, 4), Some(Some(BlockColor::Cyan)));
    assert_eq!(board.get(0, 3), Some(None));
    assert_eq!(board.get(0, 1), Some(None));
    assert_eq!(board.get(9, 0), Some(Some(BlockColor::Red)));
}

#[test]
fn test_board_remove_sentinel_row_clears_in_place() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 0, Some(BlockColor::Red));
    }
    board.set(0, 1, Some(BlockColor::Green));

    board.remove_row(0);

    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
    }
    // Nothing below the sentinel moved
    assert_eq!(board.get(0, 1), Some(Some(BlockColor::Green)));
}

#[test]
fn test_board_lock_cells_writes_color() {
    let mut board = Board::new();

    board.lock_cells(&[(3, 5), (4, 5), (3, 6), (4, 6)], BlockColor::Yellow);

    assert_eq!(board.get(3, 5), Some(Some(BlockColor::Yellow)));
    assert_eq!(board.get(4, 5), Some(Some(BlockColor::Yellow)));
    assert_eq!(board.get(3, 6), Some(Some(BlockColor::Yellow)));
    assert_eq!(board.get(4, 6), Some(Some(BlockColor::Yellow)));
    assert_eq!(board.get(5, 5), Some(None));
}

#[test]
fn test_board_sentinel_occupancy() {
    let mut board = Board::new();

    assert!(!board.is_sentinel_occupied());
    board.set(7, 0, Some(BlockColor::Purple));
    assert!(board.is_sentinel_occupied());

    // Row 1 occupancy does not count as sentinel occupancy
    board.set(7, 0, None);
    board.set(7, 1, Some(BlockColor::Purple));
    assert!(!board.is_sentinel_occupied());
}

#[test]
fn test_board_write_grid_round_trip() {
    let mut board = Board::new();
    board.set(0, 1, Some(BlockColor::Cyan));
    board.set(9, 20, Some(BlockColor::Orange));

    let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_grid(&mut grid);

    assert_eq!(grid[1][0], Some(BlockColor::Cyan));
    assert_eq!(grid[20][9], Some(BlockColor::Orange));
    assert_eq!(grid[10][5], None);
}
