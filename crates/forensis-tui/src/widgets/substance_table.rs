//! Substance reference table widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Row, Table, Widget},
};

use forensis_core::SubstanceCatalog;

use crate::theme::{palette, styles};

/// Table over every record in the catalog, one substance per row.
pub struct SubstanceTable<'a> {
    catalog: &'a SubstanceCatalog,
    heading: &'a str,
}

impl<'a> SubstanceTable<'a> {
    pub fn new(catalog: &'a SubstanceCatalog, heading: &'a str) -> Self {
        Self { catalog, heading }
    }
}

impl Widget for SubstanceTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false)
            .title(format!(" {} ", self.heading))
            .title_style(styles::accent_bold())
            .style(Style::default().bg(palette::CARD_BG));

        let header = Row::new(["Substance", "Formula", "MW (g/mol)", "Phase point", "Notes"])
            .style(styles::text_muted().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .catalog
            .iter()
            .map(|(_, record)| {
                Row::new([
                    record.name.to_string(),
                    record.formula.to_string(),
                    format!("{:.2}", record.molecular_weight),
                    record.phase_point.display(),
                    record.description.to_string(),
                ])
                .style(styles::text_primary())
            })
            .collect();

        let widths = [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Min(20),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(block)
            .render(area, buf);
    }
}
