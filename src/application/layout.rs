/// GridLayout fits a rows x cols grid into a screen rectangle and maps
/// between screen and cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    rows: usize,
    cols: usize,
}

impl GridLayout {
    /// Stretch the grid over the whole area, like an SVG viewBox with
    /// preserveAspectRatio="none"
    pub fn fit(area_x: f32, area_y: f32, area_width: f32, area_height: f32, rows: usize, cols: usize) -> Self {
        Self {
            origin_x: area_x,
            origin_y: area_y,
            cell_width: area_width / cols.max(1) as f32,
            cell_height: area_height / rows.max(1) as f32,
            rows,
            cols,
        }
    }

    /// Cell (row, col) under a screen position, if any
    pub fn screen_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = ((x - self.origin_x) / self.cell_width).floor();
        let row = ((y - self.origin_y) / self.cell_height).floor();
        if row < 0.0 || col < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Top-left screen corner of cell (row, col)
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_width,
            self.origin_y + row as f32 * self.cell_height,
        )
    }
}
