//! Keyboard and mouse mapping onto board positions.

use crossterm::event::KeyCode;
use noughts_core::Position;
use ratatui::layout::Rect;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps the digit keys 1-9 onto positions 0-8.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        d => Position::from_index(d as usize - 1),
    }
}

/// Returns the cell under a terminal coordinate, given the rendered cell
/// areas in index order.
pub fn cell_at(areas: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    areas
        .iter()
        .position(|a| {
            column >= a.x
                && column < a.x.saturating_add(a.width)
                && row >= a.y
                && row < a.y.saturating_add(a.height)
        })
        .and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        let cases = [
            (Position::Center, KeyCode::Up, Position::TopCenter),
            (Position::Center, KeyCode::Left, Position::MiddleLeft),
            (Position::TopLeft, KeyCode::Right, Position::TopCenter),
            (Position::TopLeft, KeyCode::Down, Position::MiddleLeft),
        ];
        for (from, key, to) in cases {
            assert_eq!(move_cursor(from, key), to, "{from:?} {key:?}");
        }
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let cases = [
            (Position::TopLeft, KeyCode::Up),
            (Position::TopLeft, KeyCode::Left),
            (Position::BottomRight, KeyCode::Down),
            (Position::MiddleRight, KeyCode::Right),
            (Position::Center, KeyCode::Enter),
        ];
        for (from, key) in cases {
            assert_eq!(move_cursor(from, key), from, "{from:?} {key:?}");
        }
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
        assert_eq!(digit_position('x'), None);
    }

    #[test]
    fn test_cell_at() {
        let mut areas = [Rect::default(); 9];
        for (i, area) in areas.iter_mut().enumerate() {
            let (row, col) = (i as u16 / 3, i as u16 % 3);
            *area = Rect::new(10 + col * 8, 5 + row * 4, 7, 3);
        }

        assert_eq!(cell_at(&areas, 10, 5), Some(Position::TopLeft));
        assert_eq!(cell_at(&areas, 28, 15), Some(Position::BottomRight));
        assert_eq!(cell_at(&areas, 17, 5), None); // gap between columns
        assert_eq!(cell_at(&areas, 0, 0), None);
    }
}
