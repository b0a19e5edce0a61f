//! Decorative molecule-field animation state
//!
//! A drifting, rotating cloud of schematic molecules rendered behind the
//! landing panel. Purely cosmetic: the field is created only when the
//! capability probe succeeds, ticks with the event loop, and is destroyed on
//! toggle or teardown. Nothing in the navigation core depends on it.
//!
//! Only the state lives here; drawing is the terminal crate's business.

use rand::Rng;

/// Number of molecules in the field.
pub const MOLECULE_COUNT: usize = 15;

/// Number of distinct atom color slots; the renderer maps these to its
/// palette.
pub const ATOM_COLOR_SLOTS: u8 = 5;

const MIN_ATOMS: usize = 3;
const MAX_ATOMS: usize = 8;

/// One atom, as an offset from its molecule's center.
#[derive(Debug, Clone, Copy)]
pub struct Atom {
    pub dx: f64,
    pub dy: f64,
    pub color: u8,
}

/// A schematic molecule: a handful of atoms joined by bonds in chain order.
#[derive(Debug, Clone)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    angle: f64,
    spin: f64,
}

impl Molecule {
    /// Absolute atom positions after rotation and translation, with their
    /// color slots, in bond (chain) order.
    pub fn atom_positions(&self) -> impl Iterator<Item = (f64, f64, u8)> + '_ {
        let (sin, cos) = self.angle.sin_cos();
        self.atoms.iter().map(move |atom| {
            let rx = atom.dx * cos - atom.dy * sin;
            let ry = atom.dx * sin + atom.dy * cos;
            (self.x + rx, self.y + ry, atom.color)
        })
    }
}

/// The whole animated field. Bounds track the terminal size.
#[derive(Debug, Clone)]
pub struct MoleculeField {
    molecules: Vec<Molecule>,
    width: f64,
    height: f64,
}

impl MoleculeField {
    /// Populate a field for the given terminal size.
    pub fn new(width: u16, height: u16) -> Self {
        let width = f64::from(width.max(1));
        let height = f64::from(height.max(1));
        let mut rng = rand::thread_rng();
        let molecules = (0..MOLECULE_COUNT)
            .map(|_| Self::spawn_molecule(&mut rng, width, height))
            .collect();
        Self {
            molecules,
            width,
            height,
        }
    }

    fn spawn_molecule(rng: &mut impl Rng, width: f64, height: f64) -> Molecule {
        let atom_count = rng.gen_range(MIN_ATOMS..=MAX_ATOMS);
        let atoms = (0..atom_count)
            .map(|_| Atom {
                dx: rng.gen_range(-3.0..3.0),
                dy: rng.gen_range(-1.5..1.5),
                color: rng.gen_range(0..ATOM_COLOR_SLOTS),
            })
            .collect();
        Molecule {
            atoms,
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            vx: rng.gen_range(-0.15..0.15),
            vy: rng.gen_range(-0.08..0.08),
            angle: rng.gen_range(0.0..std::f64::consts::TAU),
            spin: rng.gen_range(-0.05..0.05),
        }
    }

    /// Advance drift and rotation one frame, wrapping at the bounds.
    pub fn tick(&mut self) {
        for molecule in &mut self.molecules {
            molecule.x = wrap(molecule.x + molecule.vx, self.width);
            molecule.y = wrap(molecule.y + molecule.vy, self.height);
            molecule.angle = (molecule.angle + molecule.spin) % std::f64::consts::TAU;
        }
    }

    /// Adopt new bounds and pull every molecule back inside them.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = f64::from(width.max(1));
        self.height = f64::from(height.max(1));
        for molecule in &mut self.molecules {
            molecule.x = wrap(molecule.x, self.width);
            molecule.y = wrap(molecule.y, self.height);
        }
    }

    /// Tear the field down. Idempotent; an empty field draws nothing.
    pub fn destroy(&mut self) {
        self.molecules.clear();
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

fn wrap(value: f64, limit: f64) -> f64 {
    let wrapped = value % limit;
    if wrapped < 0.0 {
        wrapped + limit
    } else {
        wrapped
    }
}

/// Whether the terminal can host the decorative animation at all.
///
/// Decided once at startup; absence of the capability silently downgrades
/// the interface to a static background.
pub fn animation_capable() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match std::env::var("TERM") {
        Ok(term) => term != "dumb",
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_population() {
        let field = MoleculeField::new(80, 24);
        assert_eq!(field.molecules().len(), MOLECULE_COUNT);
        for molecule in field.molecules() {
            assert!((MIN_ATOMS..=MAX_ATOMS).contains(&molecule.atoms.len()));
            for atom in &molecule.atoms {
                assert!(atom.color < ATOM_COLOR_SLOTS);
            }
        }
    }

    #[test]
    fn test_molecules_stay_in_bounds_across_ticks() {
        let mut field = MoleculeField::new(40, 12);
        for _ in 0..500 {
            field.tick();
        }
        for molecule in field.molecules() {
            assert!((0.0..40.0).contains(&molecule.x));
            assert!((0.0..12.0).contains(&molecule.y));
        }
    }

    #[test]
    fn test_resize_rebounds_molecules() {
        let mut field = MoleculeField::new(200, 60);
        field.handle_resize(20, 6);
        assert_eq!(field.bounds(), (20.0, 6.0));
        for molecule in field.molecules() {
            assert!((0.0..20.0).contains(&molecule.x));
            assert!((0.0..6.0).contains(&molecule.y));
        }
    }

    #[test]
    fn test_destroy_empties_field() {
        let mut field = MoleculeField::new(80, 24);
        field.destroy();
        assert!(field.molecules().is_empty());
        field.tick(); // ticking a destroyed field is harmless
        field.destroy();
    }

    #[test]
    fn test_atom_positions_rotate_around_center() {
        let molecule = Molecule {
            atoms: vec![Atom {
                dx: 2.0,
                dy: 0.0,
                color: 0,
            }],
            x: 10.0,
            y: 5.0,
            vx: 0.0,
            vy: 0.0,
            angle: std::f64::consts::FRAC_PI_2,
            spin: 0.0,
        };
        let (x, y, _) = molecule.atom_positions().next().unwrap();
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_sized_terminal_does_not_panic() {
        let mut field = MoleculeField::new(0, 0);
        field.tick();
        field.handle_resize(0, 0);
    }
}
