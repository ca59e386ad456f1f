use crate::domain::{Grid, BACKGROUND};

use super::{Brush, BrushKind};

/// SimState orchestrates the sandbox.
/// It owns the grid, the frame buffer the grid emits colors into, and the
/// pacing and run state around `step`; this is the application layer that
/// coordinates domain logic.
pub struct SimState {
    pub grid: Grid,
    /// Row-major color output, one u32 per cell. The presentation layer
    /// uploads this to the world texture each frame.
    pub frame: Vec<u32>,
    pub brush: Brush,
    pub is_running: bool,
    pub ticks: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl SimState {
    /// Create state with the given grid dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height).expect("preset grid dimensions are valid"),
            frame: vec![BACKGROUND; width * height],
            brush: Brush::new(),
            is_running: true,
            ticks: 0,
            update_timer: 0.0,
            updates_per_second: 60.0,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    /// Swap in a fresh grid with new dimensions.
    pub fn resize_grid(&mut self, width: usize, height: usize) {
        self.grid = Grid::new(width, height).expect("preset grid dimensions are valid");
        self.frame = vec![BACKGROUND; width * height];
        self.ticks = 0;
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Empty the grid and reset the tick counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.ticks = 0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 240.0);
        self
    }

    pub fn with_brush_kind(mut self, kind: BrushKind) -> Self {
        self.brush.kind = kind;
        self
    }

    pub fn with_brush_grown(mut self) -> Self {
        self.brush.grow();
        self
    }

    pub fn with_brush_shrunk(mut self) -> Self {
        self.brush.shrink();
        self
    }

    /// Advance the simulation by one frame of wall time.
    ///
    /// Runs at most one grid tick per call, gated by the pacing
    /// accumulator. When no tick runs (paused, or between ticks at low
    /// speed) the frame buffer is still refreshed so paint strokes show
    /// up immediately.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.is_running {
            self.update_timer += delta_time;
            if self.update_timer >= 1.0 / self.updates_per_second {
                let start = std::time::Instant::now();
                self.grid.step(&mut self.frame);
                self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
                self.ticks += 1;
                self.update_timer = 0.0;
                return self;
            }
        }
        self.grid.render(&mut self.frame);
        self
    }
}
