use crate::engine::grouping::GroupedResult;
use crate::engine::schema::FieldDescriptor;
use crate::shared::response::render::Renderer;

/// Plain-text table: labelled header, a rule, one line per row, then a row count.
/// Only fields present in at least one row are shown.
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn render(&self, result: &GroupedResult) -> Vec<u8> {
        let columns: Vec<&FieldDescriptor> = result
            .fields
            .iter()
            .filter(|f| result.rows.iter().any(|r| r.contains(&f.name)))
            .collect();

        let cells: Vec<Vec<String>> = result
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|f| row.get(&f.name).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, f)| {
                cells
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(f.label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(f, w)| format!("{:<w$}", f.label, w = *w))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<w$}", c, w = *w))
                .collect();
            out.push_str(line.join(" | ").trim_end());
            out.push('\n');
        }
        out.push_str(&format!("({} rows)\n", result.rows.len()));
        out.into_bytes()
    }
}
