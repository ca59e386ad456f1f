//! Material rule table: one settle function per material kind, dispatched
//! by a closed match. Rules decide at most one displacement per invocation
//! and only ever into a strictly less dense neighbor.

use super::{Grid, Material, Particle};

/// Run the material rule for the particle scanned at (x, y).
///
/// The cell's color is emitted into the frame buffer unconditionally;
/// displacement only happens when the scan found the cell eligible this
/// tick. `p` is the occupant as read at scan time.
pub fn apply(grid: &mut Grid, p: Particle, x: i32, y: i32, eligible: bool, frame: &mut [u32]) {
    let (width, _) = grid.dimensions();
    frame[y as usize * width + x as usize] = p.color;

    if !eligible {
        return;
    }
    match p.material {
        // Empty has nothing to do; static solids never initiate a swap
        // no matter what the density comparison would say.
        Material::Empty | Material::StaticSolid => {}
        Material::Granular => {
            settle(grid, &p, x, y);
        }
        Material::Liquid => {
            if !settle(grid, &p, x, y) {
                spread(grid, &p, x, y);
            }
        }
    }
}

/// Whether the mover may displace the cell at (x, y): the neighbor must
/// exist and be strictly less dense. Equal density never swaps, so columns
/// of the same material come to rest instead of churning.
fn displaces(grid: &Grid, mover: &Particle, x: i32, y: i32) -> bool {
    grid.get(x, y).is_some_and(|n| n.density < mover.density)
}

/// Granular settling: straight down first, then the two down diagonals in
/// the particle's bias order. First displaceable candidate wins; returns
/// whether a swap happened.
fn settle(grid: &mut Grid, p: &Particle, x: i32, y: i32) -> bool {
    let lean: i32 = if p.slide_bias { 1 } else { -1 };
    for (nx, ny) in [(x, y + 1), (x + lean, y + 1), (x - lean, y + 1)] {
        if displaces(grid, p, nx, ny) {
            grid.swap(x, y, nx, ny);
            return true;
        }
    }
    false
}

/// Liquid dispersion: once falling has failed, flow sideways, bias
/// direction first.
fn spread(grid: &mut Grid, p: &Particle, x: i32, y: i32) -> bool {
    let lean: i32 = if p.slide_bias { 1 } else { -1 };
    for (nx, ny) in [(x + lean, y), (x - lean, y)] {
        if displaces(grid, p, nx, ny) {
            grid.swap(x, y, nx, ny);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sand_leaning(right: bool) -> Particle {
        let mut p = Particle::sand();
        p.slide_bias = right;
        p
    }

    fn water_leaning(right: bool) -> Particle {
        let mut p = Particle::water();
        p.slide_bias = right;
        p
    }

    fn stepped(grid: &mut Grid) {
        let (w, h) = grid.dimensions();
        let mut frame = vec![0; w * h];
        grid.step(&mut frame);
    }

    #[test]
    fn test_granular_slides_toward_bias() {
        for (bias, landing_x) in [(true, 2), (false, 0)] {
            let mut grid = Grid::new(3, 2).unwrap();
            grid.spawn(Particle::stone(), 1, 1);
            grid.spawn(sand_leaning(bias), 1, 0);

            stepped(&mut grid);
            assert_eq!(
                grid.get(landing_x, 1).unwrap().material,
                Material::Granular,
                "bias {bias} should land at x={landing_x}"
            );
        }
    }

    #[test]
    fn test_granular_takes_opposite_diagonal_when_bias_blocked() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.spawn(Particle::stone(), 1, 1);
        grid.spawn(Particle::stone(), 2, 1);
        grid.spawn(sand_leaning(true), 1, 0);

        stepped(&mut grid);
        assert_eq!(grid.get(0, 1).unwrap().material, Material::Granular);
        assert_eq!(grid.get(1, 0).unwrap().material, Material::Empty);
    }

    #[test]
    fn test_granular_stays_when_fully_blocked() {
        let mut grid = Grid::new(3, 2).unwrap();
        for x in 0..3 {
            grid.spawn(Particle::stone(), x, 1);
        }
        grid.spawn(sand_leaning(true), 1, 0);

        stepped(&mut grid);
        assert_eq!(grid.get(1, 0).unwrap().material, Material::Granular);
    }

    #[test]
    fn test_granular_rests_on_own_kind() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.spawn(Particle::sand(), 0, 2);
        grid.spawn(Particle::sand(), 0, 1);

        stepped(&mut grid);
        assert_eq!(grid.get(0, 1).unwrap().material, Material::Granular);
        assert_eq!(grid.get(0, 2).unwrap().material, Material::Granular);
    }

    #[test]
    fn test_liquid_prefers_falling_over_spreading() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.spawn(water_leaning(true), 0, 0);

        stepped(&mut grid);
        assert_eq!(grid.get(0, 1).unwrap().material, Material::Liquid);
        assert_eq!(grid.get(1, 0).unwrap().material, Material::Empty);
    }

    #[test]
    fn test_liquid_spreads_along_bias() {
        for (bias, landing_x) in [(true, 2), (false, 0)] {
            let mut grid = Grid::new(3, 1).unwrap();
            grid.spawn(water_leaning(bias), 1, 0);

            stepped(&mut grid);
            assert_eq!(
                grid.get(landing_x, 0).unwrap().material,
                Material::Liquid,
                "bias {bias} should flow to x={landing_x}"
            );
        }
    }

    #[test]
    fn test_liquid_spreads_opposite_when_bias_blocked() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.spawn(Particle::stone(), 0, 0);
        grid.spawn(water_leaning(false), 1, 0);

        stepped(&mut grid);
        assert_eq!(grid.get(2, 0).unwrap().material, Material::Liquid);
        assert_eq!(grid.get(1, 0).unwrap().material, Material::Empty);
    }

    #[test]
    fn test_edge_particle_falls_through_inward_diagonal() {
        // Bias points off the grid; the missing neighbor is "nothing to
        // displace", so the opposite diagonal is tried and taken.
        let mut grid = Grid::new(2, 2).unwrap();
        grid.spawn(Particle::stone(), 0, 1);
        grid.spawn(sand_leaning(false), 0, 0);

        stepped(&mut grid);
        assert_eq!(grid.get(1, 1).unwrap().material, Material::Granular);
    }

    #[test]
    fn test_static_solid_does_not_sink() {
        // Density alone would let stone displace water; the dispatch
        // excludes static solids from moving at all.
        let mut grid = Grid::new(1, 2).unwrap();
        grid.spawn(Particle::stone(), 0, 0);
        grid.spawn(Particle::water(), 0, 1);

        for _ in 0..3 {
            stepped(&mut grid);
        }
        assert_eq!(grid.get(0, 0).unwrap().material, Material::StaticSolid);
        assert_eq!(grid.get(0, 1).unwrap().material, Material::Liquid);
    }

    #[test]
    fn test_ineligible_cell_emits_color_without_moving() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.spawn(Particle::sand(), 0, 0);
        let p = *grid.get(0, 0).unwrap();

        let mut frame = vec![0; 2];
        apply(&mut grid, p, 0, 0, false, &mut frame);

        assert_eq!(frame[0], p.color);
        assert_eq!(grid.get(0, 0).unwrap().material, Material::Granular);
        assert_eq!(grid.get(0, 1).unwrap().material, Material::Empty);
    }

    #[test]
    fn test_eligible_rule_invocation_displaces() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.spawn(Particle::sand(), 0, 0);
        let p = *grid.get(0, 0).unwrap();

        let mut frame = vec![0; 2];
        apply(&mut grid, p, 0, 0, true, &mut frame);

        assert_eq!(frame[0], p.color);
        assert_eq!(grid.get(0, 1).unwrap().material, Material::Granular);
    }
}
