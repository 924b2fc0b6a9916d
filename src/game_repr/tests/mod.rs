use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a board from row strings
pub fn board(rows: &[&str]) -> Position {
    Position::from_rows(rows).expect("test board rows must form a square")
}

/// Helper function to fill every listed cell with the given player
pub fn place_all(pos: &mut Position, cells: &[(usize, usize)], player: Player) {
    for &(row, col) in cells {
        assert!(pos.apply_move(row, col, player), "({row}, {col}) should be free");
    }
}

// ==================== TEST MODULES ====================
