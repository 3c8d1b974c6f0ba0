// Dweve ELOBench - Benchmark analysis for the Efficient Limit Order Book
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Plain-text and Markdown table rendering.

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum TableCell {
    Text(String),
    Integer(u64),
    /// Fixed-precision number.
    Decimal { value: f64, precision: usize },
    /// Fixed-precision number with a `%` suffix.
    Percent { value: f64, precision: usize },
}

impl TableCell {
    pub fn text(s: impl Into<String>) -> Self {
        TableCell::Text(s.into())
    }

    pub fn decimal(value: f64, precision: usize) -> Self {
        TableCell::Decimal { value, precision }
    }

    pub fn percent(value: f64, precision: usize) -> Self {
        TableCell::Percent { value, precision }
    }

    pub fn as_string(&self) -> String {
        match self {
            TableCell::Text(s) => s.clone(),
            TableCell::Integer(i) => i.to_string(),
            TableCell::Decimal { value, precision } => {
                format!("{:.prec$}", value, prec = *precision)
            }
            TableCell::Percent { value, precision } => {
                format!("{:.prec$}%", value, prec = *precision)
            }
        }
    }

    /// Whether the cell holds a plain number. Columns made only of numeric
    /// cells are right-aligned; percentages read as text and stay left.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TableCell::Integer(_) | TableCell::Decimal { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// A headed table of cells.
///
/// # Examples
///
/// ```
/// use elobench_report::{Table, TableCell};
///
/// let mut table = Table::new(["Orders", "Trades"]);
/// table.add_row(vec![TableCell::Integer(1000), TableCell::Integer(50)]);
///
/// assert_eq!(
///     table.render_grid(),
///     "+----------+----------+\n\
///      |   Orders |   Trades |\n\
///      +==========+==========+\n\
///      |     1000 |       50 |\n\
///      +----------+----------+\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

/// Extra width given to every column beyond its widest entry.
const HEADER_PADDING: usize = 2;

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

    /// Appends a row. Cells beyond the header count are not rendered.
    pub fn add_row(&mut self, row: Vec<TableCell>) {
        self.rows.push(row);
    }

    /// Renders every row as strings, one entry per header.
    fn rendered_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                (0..self.headers.len())
                    .map(|col| row.get(col).map(TableCell::as_string).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    fn alignments(&self) -> Vec<Align> {
        (0..self.headers.len())
            .map(|col| {
                let numeric = !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|row| row.get(col).map_or(false, TableCell::is_numeric));
                if numeric {
                    Align::Right
                } else {
                    Align::Left
                }
            })
            .collect()
    }

    fn widths(&self, rendered: &[Vec<String>]) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest_cell = rendered
                    .iter()
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0);
                widest_cell.max(header.chars().count() + HEADER_PADDING)
            })
            .collect()
    }

    /// Renders the table as an ASCII grid with a `=` rule under the header.
    pub fn render_grid(&self) -> String {
        let rendered = self.rendered_rows();
        let aligns = self.alignments();
        let widths = self.widths(&rendered);

        let rule = |fill: char| {
            let mut line = String::from("+");
            for width in &widths {
                line.push_str(&fill.to_string().repeat(width + 2));
                line.push('+');
            }
            line.push('\n');
            line
        };

        let line = |cells: &[String], aligns: &[Align]| {
            let mut out = String::from("|");
            for ((cell, width), align) in cells.iter().zip(&widths).zip(aligns) {
                out.push(' ');
                out.push_str(&pad(cell, *width, *align));
                out.push_str(" |");
            }
            out.push('\n');
            out
        };

        let mut out = rule('-');
        out.push_str(&line(&self.headers, &aligns));
        out.push_str(&rule('='));
        for row in &rendered {
            out.push_str(&line(row, &aligns));
            out.push_str(&rule('-'));
        }
        if rendered.is_empty() {
            // Header-only tables still close with a rule
            out.push_str(&rule('-'));
        }
        out
    }

    /// Renders the table as a GitHub-flavored Markdown pipe table.
    pub fn render_markdown(&self) -> String {
        let aligns = self.alignments();
        let mut md = String::new();

        md.push('|');
        for header in &self.headers {
            md.push_str(&format!(" {} |", escape_markdown(header)));
        }
        md.push_str("\n|");
        for align in &aligns {
            md.push_str(match align {
                Align::Left => "---|",
                Align::Right => "---:|",
            });
        }
        md.push('\n');

        for row in self.rendered_rows() {
            md.push('|');
            for cell in &row {
                md.push_str(&format!(" {} |", escape_markdown(cell)));
            }
            md.push('\n');
        }

        md
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.chars().count());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
    }
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}
