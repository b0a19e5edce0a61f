//! Molecule-field canvas widget
//!
//! Draws the animated background: atoms as points, bonds as lines between
//! consecutive atoms of a molecule. The field's coordinate system has y
//! growing downward, the canvas upward, so y is flipped at draw time.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Widget,
    },
};

use forensis_app::background::MoleculeField;

use crate::theme::palette;

pub struct MoleculeCanvas<'a> {
    field: &'a MoleculeField,
}

impl<'a> MoleculeCanvas<'a> {
    pub fn new(field: &'a MoleculeField) -> Self {
        Self { field }
    }
}

impl Widget for MoleculeCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.field.bounds();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for molecule in self.field.molecules() {
                    let atoms: Vec<(f64, f64, u8)> = molecule.atom_positions().collect();

                    for pair in atoms.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].0,
                            y1: height - pair[0].1,
                            x2: pair[1].0,
                            y2: height - pair[1].1,
                            color: palette::BOND_COLOR,
                        });
                    }

                    for &(x, y, slot) in &atoms {
                        let color =
                            palette::ATOM_COLORS[slot as usize % palette::ATOM_COLORS.len()];
                        ctx.draw(&Points {
                            coords: &[(x, height - y)],
                            color,
                        });
                    }
                }
            })
            .render(area, buf);
    }
}
