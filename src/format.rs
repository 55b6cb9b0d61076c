//! Text rendering helpers shared by the views.

/// Russian-locale amount: space-grouped thousands, comma decimals,
/// at most three fraction digits (`1234567.891` -> `1 234 567,891`).
pub fn ru_amount(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let rounded = format!("{:.3}", v.abs());
    let (int_part, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    let grouped = group_thousands(int_part);
    let sign = if v < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// `—` for absent values.
pub fn or_dash(v: Option<String>) -> String {
    v.unwrap_or_else(|| "—".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Plain monospace table.
pub struct TextTable {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, (title, _))| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: Vec<&str>| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&self.columns)
                .zip(&widths)
                .map(|((cell, (_, align)), &w)| {
                    let pad = w.saturating_sub(cell.chars().count());
                    match align {
                        Align::Left => format!("{cell}{}", " ".repeat(pad)),
                        Align::Right => format!("{}{cell}", " ".repeat(pad)),
                    }
                })
                .collect();
            padded.join("  ").trim_end().to_string()
        };

        let mut out = vec![line(self.columns.iter().map(|(t, _)| *t).collect())];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            out.push(line(row.iter().map(String::as_str).collect()));
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ru_amount_groups_and_rounds() {
        assert_eq!(ru_amount(0.0), "0");
        assert_eq!(ru_amount(999.0), "999");
        assert_eq!(ru_amount(1000.0), "1 000");
        assert_eq!(ru_amount(500000.0), "500 000");
        assert_eq!(ru_amount(1234567.891), "1 234 567,891");
        assert_eq!(ru_amount(12.5), "12,5");
        assert_eq!(ru_amount(0.12345), "0,123");
        assert_eq!(ru_amount(-45000.0), "-45 000");
        assert_eq!(ru_amount(-0.0001), "0");
    }

    #[test]
    fn table_aligns_columns() {
        let mut t = TextTable::new(&[("Name", Align::Left), ("Sum", Align::Right)]);
        t.push(vec!["Acme".into(), "1 000".into()]);
        t.push(vec!["B".into(), "5".into()]);
        let text = t.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name    Sum");
        assert_eq!(lines[1], "----  -----");
        assert_eq!(lines[2], "Acme  1 000");
        assert_eq!(lines[3], "B         5");
    }

    #[test]
    fn dash_for_missing() {
        assert_eq!(or_dash(None), "—");
        assert_eq!(or_dash(Some("x".into())), "x");
    }
}
