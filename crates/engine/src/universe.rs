//! Browser-facing wrapper around [`Grid`].
//!
//! The JS side paints with grid coordinates it has already mapped from the
//! pointer, calls `tick` once per fixed timestep, then uploads `cells` as
//! an `r8uint` texture and `color_table` as the lookup texture.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::cell::Material;
use crate::registry::Registry;
use crate::Grid;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
}

#[wasm_bindgen]
impl Universe {
    /// Built-in materials, Bedrock border and a column of sand down the
    /// middle.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::seeded(Grid::new(width, height, Arc::new(Registry::builtin())))
    }

    /// Like `new`, with materials read from an elements JSON document.
    ///
    /// # Errors
    ///
    /// Returns the registry's `ConfigError` message if the document is
    /// rejected.
    pub fn from_config(width: usize, height: usize, config: &str) -> Result<Universe, JsError> {
        let registry = Registry::from_json(config)?;
        Ok(Self::seeded(Grid::new(width, height, Arc::new(registry))))
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn tick(&mut self) {
        self.grid.update();
    }

    /// Material byte at `(x, y)`; Bedrock outside the grid.
    #[must_use]
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        if self.grid.in_bounds(x, y) {
            self.grid.get_xy(x as usize, y as usize) as u8
        } else {
            Material::Bedrock as u8
        }
    }

    /// Overwrite one cell. Out-of-bounds coordinates, border cells and
    /// unknown material bytes are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, material: u8) {
        let Some(material) = Material::from_u8(material) else {
            return;
        };
        if !self.grid.in_bounds(x, y) {
            return;
        }
        let pos = self.grid.index(x as usize, y as usize);
        if !self.grid.is_border(pos) {
            self.grid.set(pos, material);
        }
    }

    /// Brush stroke: fill Air cells within `radius` of `(x, y)`.
    pub fn paint(&mut self, x: i32, y: i32, radius: i32, material: u8) {
        if let Some(material) = Material::from_u8(material) {
            self.grid.set_circle(x, y, radius, material);
        }
    }

    /// Pointer to the row-major material bytes, for a zero-copy view over
    /// wasm memory. Invalidated by nothing but dropping the universe.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells().as_ptr().cast::<u8>()
    }

    #[must_use]
    pub fn cells(&self) -> Vec<u8> {
        self.grid.cells().iter().map(|&m| m as u8).collect()
    }

    #[must_use]
    pub fn color_table(&self) -> Vec<u8> {
        self.grid.registry().color_table()
    }
}

impl Universe {
    fn seeded(mut grid: Grid) -> Self {
        let x = grid.width() / 2;
        grid.fill_column(x, Material::Sand);
        Self { grid }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
