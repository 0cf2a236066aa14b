use std::str::FromStr;

use itertools::{Itertools, MinMaxResult};

use crate::Error;

/// A set of live cells, stored as `(x, y)` offsets from the top-left corner
/// of their bounding box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<(isize, isize)>,
}

impl Pattern {
    /// The glider, heading down and to the right.
    pub fn glider() -> Self {
        Self::from_iter([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
    }

    /// Period 2 oscillator, horizontal phase.
    pub fn blinker() -> Self {
        Self::from_iter([(0, 0), (1, 0), (2, 0)])
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Self::from_iter([(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    pub fn cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.cells.iter().copied()
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0) as usize
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0) as usize
    }

    fn normalize(mut self) -> Self {
        let min = |m: MinMaxResult<isize>| match m {
            MinMaxResult::NoElements => 0,
            MinMaxResult::OneElement(v) | MinMaxResult::MinMax(v, _) => v,
        };
        let dx = min(self.cells.iter().map(|&(x, _)| x).minmax());
        let dy = min(self.cells.iter().map(|&(_, y)| y).minmax());
        self.cells = self
            .cells
            .into_iter()
            .map(|(x, y)| (x - dx, y - dy))
            .sorted_by_key(|&(x, y)| (y, x))
            .dedup()
            .collect();
        self
    }
}

impl FromIterator<(isize, isize)> for Pattern {
    fn from_iter<T: IntoIterator<Item = (isize, isize)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
        .normalize()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    /// Reads `o` as alive and space as dead. Indentation and blank lines are
    /// dropped when the pattern is moved to the origin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = vec![];
        for (y, line) in s.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    ' ' => (),
                    'o' => cells.push((x as isize, y as isize)),
                    _ => return Err(Error::UnexpectedCharacter(c)),
                }
            }
        }
        Ok(cells.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider() {
        let glider = Pattern::from_str(
            "
             o
              o
            ooo
        ",
        )
        .unwrap();
        assert_eq!(glider, Pattern::glider());
        assert_eq!((glider.width(), glider.height()), (3, 3));
    }

    #[test]
    fn test_normalized() {
        let a = Pattern::from_iter([(5, 7), (6, 7), (7, 7)]);
        assert_eq!(a, Pattern::blinker());
        assert_eq!((a.width(), a.height()), (3, 1));
    }

    #[test]
    fn test_empty() {
        let p = Pattern::from_str("\n   \n").unwrap();
        assert_eq!(p.cells().count(), 0);
        assert_eq!((p.width(), p.height()), (0, 0));
    }

    #[test]
    fn test_bad_character() {
        assert_eq!(
            Pattern::from_str("o.o"),
            Err(Error::UnexpectedCharacter('.'))
        );
    }
}
