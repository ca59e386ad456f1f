use std::fmt;

use super::{materials, Material, Particle};

/// Largest allowed extent per axis.
pub const MAX_AXIS: usize = u16::MAX as usize;

/// Grid construction failure. The simulation itself has no error states;
/// bad dimensions are rejected before a grid ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => write!(
                f,
                "grid dimensions {width}x{height} out of range (1..={MAX_AXIS} per axis)"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Grid owns the particle cells and drives the tick scan.
///
/// Cells update in place during a single row-major scan per tick; there is
/// no back buffer. A per-cell generation counter gated against the world
/// generation keeps any cell's content from acting twice in one scan even
/// though swaps move content ahead of the scan cursor.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Particle>,
    generation: u8,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 || width > MAX_AXIS || height > MAX_AXIS {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Particle::empty(); width * height],
            generation: 0,
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Current world generation (advances once per `step`, wrapping).
    pub const fn generation(&self) -> u8 {
        self.generation
    }

    /// Convert coordinates to a linear index, None when out of range.
    /// Signed input so neighbor math at the edges needs no special casing.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Cell lookup with bounds checking. Out of range is "no neighbor
    /// there", never a failure.
    pub fn get(&self, x: i32, y: i32) -> Option<&Particle> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Write a particle into the target cell, stamped with the current
    /// world generation so it may act on the very next tick. Out-of-range
    /// positions are silently dropped; brush strokes routinely run off
    /// the edge.
    pub fn spawn(&mut self, mut p: Particle, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            p.generation = self.generation;
            self.cells[idx] = p;
        }
    }

    /// Exchange the contents of two cells.
    ///
    /// When b lies ahead of a in scan order, the content currently at b is
    /// about to land at an already-scanned cell and skip its slot in this
    /// scan; advancing its counter before the exchange keeps it eligible
    /// on the next tick instead of lagging the world for a whole wrap
    /// cycle. The mover arriving at b stays gated by the increment it got
    /// as the acting cell, so the scan will not move it again this tick.
    pub fn swap(&mut self, ax: i32, ay: i32, bx: i32, by: i32) {
        let (Some(ia), Some(ib)) = (self.index(ax, ay), self.index(bx, by)) else {
            return;
        };
        if ib > ia {
            self.cells[ib].generation = self.cells[ib].generation.wrapping_add(1);
        }
        self.cells.swap(ia, ib);
    }

    /// Advance the whole grid by one tick.
    ///
    /// One raster scan, top-to-bottom, left-to-right. Each cell whose
    /// counter matches the world generation acts exactly once; the counter
    /// is advanced before the rule runs so the content stays gated wherever
    /// the rule moves it. Every scanned cell writes its color into `frame`,
    /// row-major, whether or not it was eligible to move.
    pub fn step(&mut self, frame: &mut [u32]) {
        assert_eq!(
            frame.len(),
            self.cells.len(),
            "frame buffer must match grid cell count"
        );
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let idx = y as usize * self.width + x as usize;
                let eligible = self.cells[idx].generation == self.generation;
                if eligible {
                    self.cells[idx].generation = self.cells[idx].generation.wrapping_add(1);
                }
                let p = self.cells[idx];
                materials::apply(self, p, x, y, eligible, frame);
            }
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Emit every cell's color without advancing the simulation. Used to
    /// refresh the display while paused.
    pub fn render(&self, frame: &mut [u32]) {
        for (slot, p) in frame.iter_mut().zip(&self.cells) {
            *slot = p.color;
        }
    }

    /// Reset every cell to empty and restart the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(Particle::empty());
        self.generation = 0;
    }

    /// Number of live particles, for the HUD and diagnostics.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|p| p.live).count()
    }

    /// Per-material census.
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|p| p.material == material).count()
    }
}
