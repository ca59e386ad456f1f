use macroquad::rand;

/// Pack an RGBA color into a u32, little-endian byte order.
/// `color.to_le_bytes()` yields `[r, g, b, a]`, ready for an RGBA8 texture.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

/// Color of empty cells, written to the frame buffer as the background.
pub const BACKGROUND: u32 = rgba(16, 16, 20, 255);

/// Base palette colors. Spawned particles get a per-particle shade
/// derived from these so piles don't render as flat blocks.
pub const SAND_COLOR: u32 = rgba(0xdc, 0xc0, 0x5e, 0xff);
pub const WATER_COLOR: u32 = rgba(0x38, 0x6e, 0xe0, 0xff);
pub const STONE_COLOR: u32 = rgba(0x8c, 0x8c, 0x94, 0xff);

/// The kinds of matter a cell can hold. Empty is a first-class value:
/// every cell always holds exactly one particle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Material {
    Empty,
    Granular,
    Liquid,
    StaticSolid,
}

/// Particle is the per-cell value type. It is plain data, stored inline
/// in the grid; the update rules live in `materials`.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub material: Material,
    /// Displacement weight. A particle only sinks into a strictly less
    /// dense neighbor. StaticSolid uses the maximum, so nothing displaces it.
    pub density: u8,
    /// Packed RGBA, see `rgba`.
    pub color: u32,
    /// Set for spawned matter; the update loop keys off `material` instead,
    /// this drives the population diagnostics.
    pub live: bool,
    /// Per-particle left/right preference, fixed at creation. Keeps one
    /// particle's slide direction stable across its lifetime while the
    /// population stays balanced.
    pub slide_bias: bool,
    /// Scan-eligibility counter, managed by the grid. Not simulated time.
    pub generation: u8,
}

impl Particle {
    /// Build a particle from caller-supplied attributes. The slide bias is
    /// sampled uniformly here so every spawn call gets an independent one.
    pub fn new(material: Material, density: u8, color: u32) -> Self {
        Self {
            material,
            density,
            color,
            live: !matches!(material, Material::Empty),
            slide_bias: rand::gen_range(0, 2) == 0,
            generation: 0,
        }
    }

    /// The empty cell value. Grids start out filled with these.
    pub const fn empty() -> Self {
        Self {
            material: Material::Empty,
            density: 0,
            color: BACKGROUND,
            live: false,
            slide_bias: false,
            generation: 0,
        }
    }

    /// Granular preset: piles up, slides down slopes.
    pub fn sand() -> Self {
        Self::new(Material::Granular, 2, shade(SAND_COLOR, 40))
    }

    /// Liquid preset: falls, then spreads sideways.
    pub fn water() -> Self {
        Self::new(Material::Liquid, 1, shade(WATER_COLOR, 24))
    }

    /// Immovable preset: never moves, never displaced.
    pub fn stone() -> Self {
        Self::new(Material::StaticSolid, u8::MAX, shade(STONE_COLOR, 20))
    }

    pub const fn is_empty(self) -> bool {
        matches!(self.material, Material::Empty)
    }
}

/// Darken a base color by a random amount up to `range` per channel.
fn shade(base: u32, range: i32) -> u32 {
    let j = rand::gen_range(0, range) as u8;
    let [r, g, b, a] = base.to_le_bytes();
    rgba(r - j, g - j, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_inert() {
        let p = Particle::empty();
        assert_eq!(p.material, Material::Empty);
        assert_eq!(p.density, 0);
        assert!(!p.live);
        assert!(p.is_empty());
    }

    #[test]
    fn test_preset_density_ordering() {
        // Sand sinks through water, nothing sinks through stone.
        assert!(Particle::water().density < Particle::sand().density);
        assert!(Particle::sand().density < Particle::stone().density);
        assert_eq!(Particle::stone().density, u8::MAX);
    }

    #[test]
    fn test_spawned_matter_is_live() {
        assert!(Particle::sand().live);
        assert!(Particle::water().live);
        assert!(Particle::stone().live);
        assert!(!Particle::new(Material::Empty, 0, BACKGROUND).live);
    }

    #[test]
    fn test_rgba_little_endian_layout() {
        let c = rgba(1, 2, 3, 4);
        assert_eq!(c.to_le_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_shade_keeps_alpha() {
        for _ in 0..32 {
            let c = Particle::sand().color;
            assert_eq!(c.to_le_bytes()[3], 0xff);
        }
    }
}
