//! Falling sand cellular automaton engine.
//!
//! A [`Grid`] holds one [`Material`] per cell and advances with
//! [`Grid::update`]. Movement rules are chosen by each material's class
//! in a shared [`Registry`].

pub mod api;
pub mod cell;
pub mod elements;
pub mod error;
pub mod registry;
pub mod universe;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use api::{CellApi, Direction};
pub use cell::{Color, Material, MaterialClass};
pub use error::ConfigError;
pub use registry::{Properties, Registry};
pub use universe::Universe;

/// Dense 2D grid of materials with a Bedrock border.
///
/// Row 0 is the floor. Flat index is `y * width + x`.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Material>,
    heat: Vec<u8>,
    shade: Vec<u8>,
    /// `true` until a cell's movement loop ends there this tick.
    dirty: Vec<bool>,
    registry: Arc<Registry>,
    rng: StdRng,
}

impl Grid {
    /// Air interior inside a Bedrock border, entropy-seeded direction draws.
    #[must_use]
    pub fn new(width: usize, height: usize, registry: Arc<Registry>) -> Self {
        Self::with_rng(width, height, registry, StdRng::from_entropy())
    }

    /// Like [`Grid::new`] with a deterministic direction sequence.
    #[must_use]
    pub fn with_seed(width: usize, height: usize, registry: Arc<Registry>, seed: u64) -> Self {
        Self::with_rng(width, height, registry, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, registry: Arc<Registry>, rng: StdRng) -> Self {
        let len = width * height;
        let mut grid = Self {
            width,
            height,
            cells: vec![Material::Air; len],
            heat: vec![0; len],
            shade: vec![0; len],
            dirty: vec![true; len],
            registry,
            rng,
        };
        for pos in 0..len {
            if grid.is_border(pos) {
                grid.cells[pos] = Material::Bedrock;
            }
        }
        debug!(width, height, "grid created");
        grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[must_use]
    pub fn coords(&self, pos: usize) -> (usize, usize) {
        (pos % self.width, pos / self.width)
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[must_use]
    pub fn is_border(&self, pos: usize) -> bool {
        let (x, y) = self.coords(pos);
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    #[must_use]
    pub fn get(&self, pos: usize) -> Material {
        self.cells[pos]
    }

    #[must_use]
    pub fn get_xy(&self, x: usize, y: usize) -> Material {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, pos: usize, material: Material) {
        self.cells[pos] = material;
    }

    pub fn set_xy(&mut self, x: usize, y: usize, material: Material) {
        let pos = self.index(x, y);
        self.cells[pos] = material;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    pub fn swap_xy(&mut self, x1: usize, y1: usize, x2: usize, y2: usize) {
        self.swap(self.index(x1, y1), self.index(x2, y2));
    }

    /// Paint `material` into every Air cell within `radius` of the center.
    /// Occupied and out-of-bounds cells are left alone.
    ///
    /// Only the part of the bounding square that overlaps the grid is
    /// visited, so far off-grid centers and huge radii stay cheap.
    pub fn set_circle(&mut self, cx: i32, cy: i32, radius: i32, material: Material) {
        if radius < 0 || self.cells.is_empty() {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let r2 = r * r;
        let x_range = (cx - r).max(0)..=(cx + r).min(self.width as i64 - 1);
        let y_range = (cy - r).max(0)..=(cy + r).min(self.height as i64 - 1);
        for y in y_range {
            let dy = y - cy;
            for x in x_range.clone() {
                let dx = x - cx;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let pos = self.index(x as usize, y as usize);
                if self.cells[pos] == Material::Air {
                    self.cells[pos] = material;
                }
            }
        }
    }

    /// Fill column `x` with `material` across every interior row.
    pub fn fill_column(&mut self, x: usize, material: Material) {
        for y in 1..self.height.saturating_sub(1) {
            self.set_xy(x, y, material);
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// One direction is drawn for the whole tick, then every cell is
    /// visited in ascending flat index. Cells move in place, so a cell
    /// pushed ahead of the scan is visited again and one pushed behind it
    /// is not.
    pub fn update(&mut self) {
        let direction = Direction::random(&mut self.rng);
        for pos in 0..self.cells.len() {
            let class = self.registry.class(self.cells[pos]);
            if matches!(class, MaterialClass::Empty | MaterialClass::Solid | MaterialClass::Gas) {
                continue;
            }
            let mut api = CellApi::new(self, pos, direction);
            elements::update_cell(class, &mut api);
        }
        self.dirty.fill(true);
    }

    pub(crate) fn mark_settled(&mut self, pos: usize) {
        self.dirty[pos] = false;
    }

    #[must_use]
    pub fn is_dirty(&self, pos: usize) -> bool {
        self.dirty[pos]
    }

    /// Row-major material buffer for the renderer.
    #[must_use]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    #[must_use]
    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    #[must_use]
    pub fn shade(&self) -> &[u8] {
        &self.shade
    }

    /// Number of cells holding each material, indexed by ordinal.
    #[must_use]
    pub fn counts(&self) -> [usize; Material::COUNT] {
        let mut counts = [0; Material::COUNT];
        for material in &self.cells {
            counts[material.index()] += 1;
        }
        counts
    }

    /// Overwrite `pixels` with each cell's display color.
    pub fn pixels_into(&self, pixels: &mut Vec<Color>) {
        pixels.clear();
        pixels.extend(self.cells.iter().map(|&m| self.registry.color(m)));
    }
}
