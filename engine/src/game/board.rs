use super::types::{Mark, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    width: usize,
    height: usize,
    win_length: usize,
}

impl Board {
    /// Callers guarantee `width >= 1`, `height >= 1` and that `width * height`
    /// fits in `isize`; `GameState::start_new_game` rejects anything else.
    pub(crate) fn new(width: usize, height: usize, win_length: usize) -> Self {
        Self {
            cells: vec![Mark::Empty; width * height],
            width,
            height,
            win_length,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str], win_length: usize) -> Self {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut board = Self::new(width, height, win_length);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'H' => Mark::Human,
                    'O' => Mark::Opponent,
                    _ => Mark::Empty,
                };
                board.cells[y * width + x] = mark;
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn is_valid_cell(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) -> bool {
        match self.index_of(pos) {
            Some(idx) => {
                self.cells[idx] = mark;
                true
            }
            None => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Empty cells in row-major order: rows outer, columns inner.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.width)
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if self.is_valid_cell(pos) {
            Some(pos.y * self.width + pos.x)
        } else {
            None
        }
    }
}
