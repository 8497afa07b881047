//! Core domain types for the 4x4 board.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of cells along one side of the board.
pub const SIDE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Marker placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// The X marker (always the computer's).
    X,
    /// The O marker (always the human's).
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
///
/// On the wire an empty cell is the empty string and an occupied cell is
/// `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a marker.
    Occupied(Marker),
}

impl Cell {
    fn as_str(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(Marker::X) => "X",
            Cell::Occupied(Marker::O) => "O",
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "" => Ok(Cell::Empty),
            "X" => Ok(Cell::Occupied(Marker::X)),
            "O" => Ok(Cell::Occupied(Marker::O)),
            other => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(other),
                &"\"\", \"X\" or \"O\"",
            )),
        }
    }
}

/// 4x4 board stored in row-major order (cells 0-15).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-15).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), &'static str> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or("Cell index out of bounds")?;
        *slot = cell;
        Ok(())
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board as text; empty cells show their index.
    pub fn display(&self) -> String {
        self.display_marked(&[])
    }

    /// Like [`Board::display`], with the cells in `marked` flagged by `*`.
    pub fn display_marked(&self, marked: &[usize]) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(SIDE)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        let index = row * SIDE + col;
                        match cell {
                            Cell::Empty => format!("{:>2}", index),
                            Cell::Occupied(_) if marked.contains(&index) => {
                                format!("*{}", cell.as_str())
                            }
                            Cell::Occupied(_) => format!("{:>2}", cell.as_str()),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n--+--+--+--\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|i| board.is_empty(i)));
        assert!(!board.is_empty(CELL_COUNT));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.set(16, Cell::Occupied(Marker::X)).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_board_serializes_as_strings() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Marker::X)).unwrap();
        board.set(15, Cell::Occupied(Marker::O)).unwrap();

        let json = serde_json::to_value(&board).unwrap();
        let cells = json.as_array().unwrap();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!(cells[0], "X");
        assert_eq!(cells[1], "");
        assert_eq!(cells[15], "O");

        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_board_rejects_unknown_marker() {
        let mut raw = vec![""; CELL_COUNT];
        raw[3] = "Z";
        assert!(serde_json::from_value::<Board>(serde_json::json!(raw)).is_err());
    }

    #[test]
    fn test_board_rejects_wrong_length() {
        let raw = vec![""; 9];
        assert!(serde_json::from_value::<Board>(serde_json::json!(raw)).is_err());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Marker::X)).unwrap();
        board.set(5, Cell::Occupied(Marker::O)).unwrap();
        let text = board.display();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], " X| 1| 2| 3");
        assert_eq!(lines[1], "--+--+--+--");
        assert_eq!(lines[2], " 4| O| 6| 7");
        assert_eq!(lines[6], "12|13|14|15");
    }

    #[test]
    fn test_display_marked() {
        let mut board = Board::new();
        for i in [0, 5, 10, 15] {
            board.set(i, Cell::Occupied(Marker::X)).unwrap();
        }
        board.set(1, Cell::Occupied(Marker::O)).unwrap();
        let text = board.display_marked(&[0, 5, 10, 15]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "*X| O| 2| 3");
        assert_eq!(lines[2], " 4|*X| 6| 7");
        assert_eq!(lines[6], "12|13|14|*X");
        assert_eq!(board.display_marked(&[]), board.display());
    }
}
