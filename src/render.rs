use crate::labels::{display_name, LabelError, Labels};
use crate::model::Schedule;
use chrono::NaiveDate;

/// Permet de customiser le rendu d'un planning (console, Markdown, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule, labels: Option<&Labels>) -> Result<String, LabelError>;
}

/// Liste jour par jour, telle qu'imprimée par la CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextListing;

impl ScheduleRenderer for TextListing {
    fn render(&self, schedule: &Schedule, labels: Option<&Labels>) -> Result<String, LabelError> {
        let mut out = String::new();
        for (day, selection) in schedule.days().iter().enumerate() {
            if day > 0 {
                out.push('\n');
            }
            out.push_str(&format!("Day {}\n", day + 1));
            for index in selection.iter() {
                out.push_str(&format!("  - {}\n", display_name(labels, index)?));
            }
        }
        Ok(out)
    }
}

/// Tableau Markdown imprimable (une ligne par jour, colonne à cocher).
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    pub generated_on: NaiveDate,
    pub universe: Vec<usize>,
}

impl ScheduleRenderer for MarkdownTable {
    fn render(&self, schedule: &Schedule, labels: Option<&Labels>) -> Result<String, LabelError> {
        let columns = schedule
            .days()
            .iter()
            .map(|s| s.len())
            .max()
            .unwrap_or(0)
            .max(4);
        let items: Vec<String> = (1..=columns).map(|i| format!("Item {i}")).collect();

        let mut lines = vec![
            "# Practice Routine".to_string(),
            String::new(),
            format!("Generated on {}", self.generated_on.format("%B %d %Y")),
            String::new(),
            "## Days".to_string(),
            format!("| Day | {} | Done |", items.join(" | ")),
            format!("| --- | {} | --- |", vec!["---"; columns].join(" | ")),
        ];

        for (day, selection) in schedule.days().iter().enumerate() {
            let mut cells = selection
                .iter()
                .map(|i| display_name(labels, i))
                .collect::<Result<Vec<_>, _>>()?;
            cells.resize(columns, String::new());
            lines.push(format!("| {:02} | {} |  |", day + 1, cells.join(" | ")));
        }

        lines.extend([
            String::new(),
            "## Selection Counts".to_string(),
            String::new(),
            "| Focus area | Count |".to_string(),
            "| --- | --- |".to_string(),
        ]);
        for (index, count) in schedule.selection_counts(&self.universe).iter() {
            lines.push(format!("| {} | {count} |", display_name(labels, index)?));
        }

        Ok(lines.join("\n") + "\n")
    }
}

/// Résumé `<libellé>: <nombre>` des sélections par indice.
pub fn selection_summary(
    schedule: &Schedule,
    universe: &[usize],
    labels: Option<&Labels>,
) -> Result<String, LabelError> {
    let mut out = String::new();
    for (index, count) in schedule.selection_counts(universe).iter() {
        out.push_str(&format!("{}: {count}\n", display_name(labels, index)?));
    }
    Ok(out)
}
