use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;
use log::{debug, trace};

use crate::{Error, Pattern};

/// A fixed-size board whose opposite edges are adjacent.
///
/// Cells are stored row-major, so the cell at `(x, y)` lives at index
/// `y * width + x`. The dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    generation: u64,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        let len = match width.checked_mul(height) {
            Some(len) if len > 0 => len,
            _ => return Err(Error::InvalidDimension { width, height }),
        };
        debug!("new {width}x{height} grid");
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
            generation: 1,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Starts at 1 and goes up by one on every [`Grid::step`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Wraps a coordinate onto the board.
    ///
    /// The wrap is a single step: anything left of the board lands on the
    /// last column and anything right of it lands on the first, however far
    /// out it was. Neighbour lookups never go further than one cell out, so
    /// this is enough for them. Callers with bigger offsets have to reduce
    /// them themselves (see [`Grid::stamp`]).
    pub fn resolve(&self, x: isize, y: isize) -> (usize, usize) {
        self.board().resolve(x, y)
    }

    pub fn index_at(&self, x: isize, y: isize) -> usize {
        self.board().index_at(x, y)
    }

    pub fn get(&self, x: isize, y: isize) -> bool {
        self.board().get(x, y)
    }

    pub fn set(&mut self, x: isize, y: isize, alive: bool) -> &mut Self {
        let i = self.index_at(x, y);
        self.cells[i] = alive;
        self
    }

    pub fn heal(&mut self, x: isize, y: isize) -> &mut Self {
        self.set(x, y, true)
    }

    pub fn kill(&mut self, x: isize, y: isize) -> &mut Self {
        self.set(x, y, false)
    }

    pub fn toggle(&mut self, x: isize, y: isize) -> &mut Self {
        let alive = self.get(x, y);
        self.set(x, y, !alive)
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) -> &mut Self {
        self.cells.fill(false);
        self.generation = 1;
        debug!("cleared {}x{} grid", self.width, self.height);
        self
    }

    /// Number of live cells in the Moore neighbourhood of `(x, y)`.
    ///
    /// On boards narrower or shorter than 3 the wrap makes some neighbours
    /// the same cell, and they are counted once per offset.
    pub fn neighbours(&self, x: isize, y: isize) -> usize {
        self.board().neighbours(x, y)
    }

    /// Advances the board by one generation.
    pub fn step(&mut self) -> &mut Self {
        // Every cell is judged on the board as it was before this step.
        let snapshot = self.cells.clone();
        let before = Board {
            width: self.width,
            height: self.height,
            cells: &snapshot,
        };
        for (y, x) in (0..self.height as isize).cartesian_product(0..self.width as isize) {
            let alive = match (before.get(x, y), before.neighbours(x, y)) {
                (true, 2..=3) | (false, 3) => true,
                _ => false,
            };
            self.set(x, y, alive);
        }
        self.generation += 1;
        trace!(
            "generation {} has {} live cells",
            self.generation,
            self.population()
        );
        self
    }

    /// Heals every live cell of `pattern` with its top-left corner at `(x, y)`.
    ///
    /// Unlike the other accessors this reduces coordinates modulo the board
    /// size, so patterns may hang off any edge.
    pub fn stamp(&mut self, x: isize, y: isize, pattern: &Pattern) -> &mut Self {
        let (w, h) = (self.width as isize, self.height as isize);
        let (x, y) = (x.rem_euclid(w), y.rem_euclid(h));
        for (dx, dy) in pattern.cells() {
            self.heal((x + dx).rem_euclid(w), (y + dy).rem_euclid(h));
        }
        self
    }

    fn board(&self) -> Board<'_> {
        Board {
            width: self.width,
            height: self.height,
            cells: &self.cells,
        }
    }
}

/// Borrowed cells plus the dimensions needed to address them.
#[derive(Clone, Copy)]
struct Board<'a> {
    width: usize,
    height: usize,
    cells: &'a [bool],
}

impl Board<'_> {
    fn resolve(&self, x: isize, y: isize) -> (usize, usize) {
        (wrap(x, self.width), wrap(y, self.height))
    }

    fn index_at(&self, x: isize, y: isize) -> usize {
        let (x, y) = self.resolve(x, y);
        y * self.width + x
    }

    fn get(&self, x: isize, y: isize) -> bool {
        self.cells[self.index_at(x, y)]
    }

    fn neighbours(&self, x: isize, y: isize) -> usize {
        offsets()
            .filter(|&(dx, dy)| self.get(x.wrapping_add(dx), y.wrapping_add(dy)))
            .count()
    }
}

fn wrap(v: isize, len: usize) -> usize {
    if v < 0 {
        len - 1
    } else if v as usize >= len {
        0
    } else {
        v as usize
    }
}

fn offsets() -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for &alive in row {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses rows of `o` (alive) and `.` (dead). Surrounding whitespace and
    /// blank lines are ignored, so boards can be indented in source code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect_vec();
        let Some(first) = rows.first() else {
            return Err(Error::EmptyBoard);
        };
        let width = first.chars().count();
        let mut grid = Grid::new(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '.' => (),
                    'o' => {
                        grid.heal(x as isize, y as isize);
                    }
                    _ => return Err(Error::UnexpectedCharacter(c)),
                }
            }
        }
        Ok(grid)
    }
}
