//! Data table.
//!
//! Headers and cells are ratatui [`Line`]s, so callers can style spans,
//! embed glyphs, or color individual cells; nothing restricts content to
//! plain text.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table as TuiTable};

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableVariant {
    #[default]
    Default,
    Custom,
}

#[derive(Debug, Clone, Default)]
pub struct Table<'a> {
    pub headers: Vec<Line<'a>>,
    pub rows: Vec<Vec<Line<'a>>>,
    pub variant: TableVariant,
    pub highlight_row: Option<usize>,
}

impl<'a> Table<'a> {
    pub fn new(headers: Vec<Line<'a>>, rows: Vec<Vec<Line<'a>>>) -> Self {
        Self {
            headers,
            rows,
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_highlight_row(mut self, row: usize) -> Self {
        self.highlight_row = Some(row);
        self
    }
}

pub fn render(frame: &mut Frame, area: Rect, table: &Table, palette: &Palette) {
    let columns = table.headers.len().max(1);
    let widths = vec![Constraint::Ratio(1, columns as u32); columns];

    let header = Row::new(
        table
            .headers
            .iter()
            .map(|h| Cell::from(h.clone()))
            .collect::<Vec<_>>(),
    )
    .style(palette.title())
    .bottom_margin(1);

    let rows: Vec<Row> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let row = Row::new(cells.iter().map(|c| Cell::from(c.clone())).collect::<Vec<_>>());
            if table.highlight_row == Some(i) {
                row.style(palette.selection())
            } else if table.variant == TableVariant::Default && i % 2 == 1 {
                // Zebra striping in the default preset only.
                row.style(palette.body().bg(palette.border_dim))
            } else {
                row.style(palette.body())
            }
        })
        .collect();

    let mut widget = TuiTable::new(rows, widths).header(header);
    if table.variant == TableVariant::Default {
        widget = widget.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        );
    }

    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(table: &Table) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), table, &Palette::light()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_headers_and_rows() {
        let table = Table::new(
            vec![Line::from("Name"), Line::from("Role")],
            vec![
                vec![Line::from("Ada"), Line::from("Engineer")],
                vec![Line::from("Grace"), Line::from("Admiral")],
            ],
        );
        let text = draw(&table);
        assert!(text.contains("Name"));
        assert!(text.contains("Grace"));
        assert!(text.contains("Admiral"));
    }

    #[test]
    fn test_custom_variant_has_no_border() {
        let table = Table::new(vec![Line::from("H")], vec![vec![Line::from("x")]])
            .with_variant(TableVariant::Custom);
        assert!(!draw(&table).contains('╭'));
    }

    #[test]
    fn test_cells_accept_styled_content() {
        let styled = Line::from(Span::styled("hot", Style::default().fg(Color::Red)));
        let table = Table::new(vec![Line::from("Status")], vec![vec![styled]]);
        assert!(draw(&table).contains("hot"));
    }
}
