// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Material, Particle, Grid, GridError};
pub use application::{SimState, Brush, BrushKind};
pub use ui::Button;
