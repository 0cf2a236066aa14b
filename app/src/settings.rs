use clap::Parser;

/// Window and pacing options.
#[derive(Parser, Debug, Clone, Copy, PartialEq)]
#[command(name = "life", about = "Conway's Game of Life on a wrap-around board")]
pub struct Settings {
    /// Board width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: usize,
    /// Board height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: usize,
    /// Side of one cell in pixels.
    #[arg(long, default_value_t = 10)]
    pub cell_size: usize,
    /// Frames skipped between generations.
    #[arg(long, default_value_t = 3)]
    pub speed: u32,
    #[arg(long)]
    pub paused: bool,
}

impl Settings {
    /// Cells across and down. Zero if the cell size is zero or larger than
    /// the board, which the grid then rejects.
    pub fn grid_size(&self) -> (usize, usize) {
        let cells = |pixels: usize| pixels.checked_div(self.cell_size).unwrap_or(0);
        (cells(self.width), cells(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::try_parse_from(["life"]).unwrap();
        assert_eq!((s.width, s.height, s.cell_size, s.speed), (800, 600, 10, 3));
        assert!(!s.paused);
        assert_eq!(s.grid_size(), (80, 60));
    }

    #[test]
    fn test_grid_size_rounds_down() {
        let s = Settings::try_parse_from(["life", "--width", "105", "--cell-size", "20"]).unwrap();
        assert_eq!(s.grid_size(), (5, 30));
    }

    #[test]
    fn test_zero_cell_size() {
        let s = Settings::try_parse_from(["life", "--cell-size", "0", "--paused"]).unwrap();
        assert_eq!(s.grid_size(), (0, 0));
        assert!(s.paused);
    }
}
