use torus_life::Grid;

/// Play/pause, paint mode and pacing, driven once per frame.
#[derive(Clone, Debug)]
pub struct Controls {
    speed: u32,
    interval: u32,
    paused: bool,
    paint: bool,
    cell_size: f32,
}

impl Controls {
    pub fn new(speed: u32, paused: bool, cell_size: f32) -> Self {
        Self {
            speed,
            interval: 0,
            paused,
            paint: false,
            cell_size,
        }
    }

    /// Runs one frame. Returns whether the board should be redrawn.
    ///
    /// `speed` frames are skipped between generations; while paused the
    /// board is still redrawn on that schedule but not stepped.
    pub fn tick(&mut self, grid: &mut Grid) -> bool {
        if self.interval > 0 {
            self.interval -= 1;
            return false;
        }
        if !self.paused {
            grid.step();
        }
        self.interval = self.speed;
        true
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn painting(&self) -> bool {
        self.paint
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_paint(&mut self) {
        self.paint = !self.paint;
    }

    pub fn pause_label(&self) -> &'static str {
        if self.paused() { "Play" } else { "Pause" }
    }

    pub fn paint_label(&self) -> &'static str {
        if self.painting() { "Paint Off" } else { "Paint On" }
    }

    pub fn slower(&mut self) {
        self.speed += 1;
    }

    pub fn faster(&mut self) {
        self.speed = self.speed.saturating_sub(1);
    }

    pub fn reset(&self, grid: &mut Grid) {
        grid.clear();
    }

    /// Cell under a pointer position given relative to the board's top-left
    /// corner.
    pub fn cell_at(&self, (px, py): (f32, f32)) -> (isize, isize) {
        let cell = |p: f32| (p / self.cell_size).floor() as isize;
        (cell(px), cell(py))
    }

    pub fn click(&self, grid: &mut Grid, pos: (f32, f32)) {
        let (x, y) = self.cell_at(pos);
        grid.toggle(x, y);
    }

    /// Pointer moved over the board: heals the cell underneath in paint mode.
    pub fn hover(&self, grid: &mut Grid, pos: (f32, f32)) {
        if self.painting() {
            let (x, y) = self.cell_at(pos);
            grid.heal(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(8, 6).unwrap()
    }

    #[test]
    fn test_tick_pacing() {
        let mut g = grid();
        let mut c = Controls::new(3, false, 10.);
        let frames = (0..9).map(|_| c.tick(&mut g)).collect::<Vec<_>>();
        assert_eq!(
            frames,
            [true, false, false, false, true, false, false, false, true]
        );
        assert_eq!(g.generation(), 4);
    }

    #[test]
    fn test_tick_zero_speed_steps_every_frame() {
        let mut g = grid();
        let mut c = Controls::new(0, false, 10.);
        for _ in 0..5 {
            assert!(c.tick(&mut g));
        }
        assert_eq!(g.generation(), 6);
    }

    #[test]
    fn test_paused() {
        let mut g = grid();
        let mut c = Controls::new(1, true, 10.);
        assert_eq!(c.pause_label(), "Play");
        assert!(c.tick(&mut g));
        assert!(!c.tick(&mut g));
        assert!(c.tick(&mut g));
        assert_eq!(g.generation(), 1);
        c.toggle_pause();
        assert!(!c.paused());
        assert_eq!(c.pause_label(), "Pause");
        assert!(!c.tick(&mut g));
        assert!(c.tick(&mut g));
        assert_eq!(g.generation(), 2);
    }

    #[test]
    fn test_speed_bounds() {
        let mut c = Controls::new(1, false, 10.);
        c.faster();
        c.faster();
        assert_eq!(c.speed(), 0);
        c.slower();
        c.slower();
        assert_eq!(c.speed(), 2);
    }

    #[test]
    fn test_cell_at() {
        let c = Controls::new(3, false, 10.);
        assert_eq!(c.cell_at((0., 0.)), (0, 0));
        assert_eq!(c.cell_at((1., 1.)), (0, 0));
        assert_eq!(c.cell_at((9.9, 10.)), (0, 1));
        assert_eq!(c.cell_at((25., 13.)), (2, 1));
        assert_eq!(c.cell_at((-1., -1.)), (-1, -1));
    }

    #[test]
    fn test_click_and_paint() {
        let mut g = grid();
        let mut c = Controls::new(3, false, 10.);
        c.click(&mut g, (15., 15.));
        assert!(g.get(1, 1));
        c.click(&mut g, (15., 15.));
        assert!(!g.get(1, 1));

        c.hover(&mut g, (35., 5.));
        assert_eq!(g.population(), 0);
        c.toggle_paint();
        assert!(c.painting());
        assert_eq!(c.paint_label(), "Paint Off");
        c.hover(&mut g, (35., 5.));
        c.hover(&mut g, (35., 5.));
        assert!(g.get(3, 0));
        // The corner pixel belongs to the corner cell.
        c.hover(&mut g, (0., 0.));
        assert!(g.get(0, 0));
        assert!(!g.get(7, 5));
        // Just off the top left corner wraps to the far one.
        c.hover(&mut g, (-3., -3.));
        assert!(g.get(7, 5));
    }

    #[test]
    fn test_reset() {
        let mut g = grid();
        g.heal(1, 1).step();
        Controls::new(3, false, 10.).reset(&mut g);
        assert_eq!(g.population(), 0);
        assert_eq!(g.generation(), 1);
    }
}
