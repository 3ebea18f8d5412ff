use super::theme::Theme;
use crossterm::style::Color;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

pub struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Left-aligned text table sized to its widest cells.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let width = cell.text.width();
                match widths.get_mut(idx) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    pub fn render(&self, theme: &Theme) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        let header: Vec<(String, Option<Color>)> = self
            .headers
            .iter()
            .map(|h| (h.clone(), theme.accent))
            .collect();
        render_line(&mut out, &header, &widths, theme);

        for row in &self.rows {
            let cells: Vec<(String, Option<Color>)> =
                row.iter().map(|c| (c.text.clone(), c.color)).collect();
            render_line(&mut out, &cells, &widths, theme);
        }
        out
    }
}

fn render_line(out: &mut String, cells: &[(String, Option<Color>)], widths: &[usize], theme: &Theme) {
    let last = cells.len().saturating_sub(1);
    for (idx, (text, color)) in cells.iter().enumerate() {
        let padding = if idx == last {
            0
        } else {
            widths.get(idx).copied().unwrap_or(0).saturating_sub(text.width()) + COLUMN_GAP
        };
        let padded = format!("{}{}", text, " ".repeat(padding));
        let _ = write!(out, "{}", theme.paint(padded, *color));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_align_on_widest_cell() {
        let mut table = Table::new(["MODE", "STATUS"]);
        table.push(vec![Cell::new("UHBR13.5"), Cell::new("ok")]);
        table.push(vec![Cell::new("HBR"), Cell::new("no")]);
        let rendered = table.render(&Theme::plain());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "MODE      STATUS");
        assert_eq!(lines[1], "UHBR13.5  ok");
        assert_eq!(lines[2], "HBR       no");
    }

    #[test]
    fn test_wide_symbols_count_double() {
        let mut table = Table::new(["STATUS", "X"]);
        table.push(vec![Cell::new("✅"), Cell::new("a")]);
        let rendered = table.render(&Theme::plain());
        let lines: Vec<&str> = rendered.lines().collect();
        // "STATUS" is 6 columns wide, the check mark is 2.
        assert_eq!(lines[1], "✅      a");
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = Table::new(["A"]);
        assert_eq!(table.render(&Theme::plain()), "A\n");
    }
}
