use macroquad::rand;

use crate::domain::{Grid, Particle, BACKGROUND, SAND_COLOR, STONE_COLOR, WATER_COLOR};

/// What the paint brush deposits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BrushKind {
    Sand,
    Water,
    Stone,
    Erase,
}

impl BrushKind {
    /// All kinds, in palette order.
    pub const fn all() -> [BrushKind; 4] {
        [BrushKind::Sand, BrushKind::Water, BrushKind::Stone, BrushKind::Erase]
    }

    pub const fn label(self) -> &'static str {
        match self {
            BrushKind::Sand => "Sand",
            BrushKind::Water => "Water",
            BrushKind::Stone => "Stone",
            BrushKind::Erase => "Erase",
        }
    }

    /// A freshly built particle of this kind.
    pub fn particle(self) -> Particle {
        match self {
            BrushKind::Sand => Particle::sand(),
            BrushKind::Water => Particle::water(),
            BrushKind::Stone => Particle::stone(),
            BrushKind::Erase => Particle::empty(),
        }
    }

    /// Nominal color for the palette swatch.
    pub const fn swatch(self) -> u32 {
        match self {
            BrushKind::Sand => SAND_COLOR,
            BrushKind::Water => WATER_COLOR,
            BrushKind::Stone => STONE_COLOR,
            BrushKind::Erase => BACKGROUND,
        }
    }
}

/// Paint brush state: what to deposit and how wide.
pub struct Brush {
    pub kind: BrushKind,
    pub radius: i32,
}

pub const MIN_RADIUS: i32 = 1;
pub const MAX_RADIUS: i32 = 24;

impl Brush {
    pub fn new() -> Self {
        Self { kind: BrushKind::Sand, radius: 4 }
    }

    pub fn grow(&mut self) {
        self.radius = (self.radius + 1).min(MAX_RADIUS);
    }

    pub fn shrink(&mut self) {
        self.radius = (self.radius - 1).max(MIN_RADIUS);
    }

    /// Deposit one frame's worth of the selected kind around (cx, cy).
    ///
    /// Matter is sprayed as a random scatter inside the radius so streams
    /// look granular instead of stamping solid discs. Spawns that land off
    /// the grid are dropped by the grid itself.
    pub fn paint(&self, grid: &mut Grid, cx: i32, cy: i32) {
        if self.kind == BrushKind::Erase {
            self.erase(grid, cx, cy);
            return;
        }
        for _ in 0..self.radius * 3 {
            let dx = rand::gen_range(-self.radius, self.radius + 1);
            let dy = rand::gen_range(-self.radius, self.radius + 1);
            if dx * dx + dy * dy <= self.radius * self.radius {
                grid.spawn(self.kind.particle(), cx + dx, cy + dy);
            }
        }
    }

    /// Clear the full disc. Erasing is deterministic so mistakes go away
    /// in one pass instead of being sprayed away.
    pub fn erase(&self, grid: &mut Grid, cx: i32, cy: i32) {
        for dy in -self.radius..=self.radius {
            for dx in -self.radius..=self.radius {
                if dx * dx + dy * dy <= self.radius * self.radius {
                    grid.spawn(Particle::empty(), cx + dx, cy + dy);
                }
            }
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Material;

    #[test]
    fn test_kind_to_material_mapping() {
        assert_eq!(BrushKind::Sand.particle().material, Material::Granular);
        assert_eq!(BrushKind::Water.particle().material, Material::Liquid);
        assert_eq!(BrushKind::Stone.particle().material, Material::StaticSolid);
        assert_eq!(BrushKind::Erase.particle().material, Material::Empty);
    }

    #[test]
    fn test_paint_stays_inside_radius() {
        let mut grid = Grid::new(32, 32).unwrap();
        let brush = Brush { kind: BrushKind::Stone, radius: 3 };
        brush.paint(&mut grid, 16, 16);

        assert!(grid.population() > 0);
        for y in 0..32 {
            for x in 0..32 {
                if grid.get(x, y).unwrap().live {
                    let (dx, dy) = (x - 16, y - 16);
                    assert!(dx * dx + dy * dy <= 9, "stray particle at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_erase_clears_disc() {
        let mut grid = Grid::new(16, 16).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                grid.spawn(Particle::stone(), x, y);
            }
        }

        let brush = Brush { kind: BrushKind::Erase, radius: 2 };
        brush.paint(&mut grid, 8, 8);

        assert_eq!(grid.get(8, 8).unwrap().material, Material::Empty);
        assert_eq!(grid.get(8, 10).unwrap().material, Material::Empty);
        assert_eq!(grid.get(8, 11).unwrap().material, Material::StaticSolid);
    }
}
