use salary_analyzer::StatisticsReport;

use crate::error::Result;

pub const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(w - width(cell)));
        line.push_str(" |");
    }
    line
}

/// Render a report as an ASCII table, the title is embedded into the top
/// border when it fits.
pub fn render_table(report: &StatisticsReport) -> String {
    let rows = std::iter::once(HEADERS.map(String::from))
        .chain(report.iter().map(|(language, stats)| {
            [
                language.to_owned(),
                stats.vacancies_found.to_string(),
                stats.processed_vacancies.to_string(),
                stats.average_salary.to_string(),
            ]
        }))
        .collect::<Vec<_>>();
    let mut widths = [0; HEADERS.len()];
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(width(cell));
        }
    }

    let separator = border(&widths);
    let title = report.title();
    let top = if width(title) + 2 <= separator.len() {
        format!("+{}{}", title, &separator[1 + width(title)..])
    } else {
        separator.clone()
    };

    let mut lines = vec![top];
    let mut rows = rows.iter();
    if let Some(header) = rows.next() {
        lines.push(row(header, &widths));
        lines.push(separator.clone());
    }
    lines.extend(rows.map(|cells| row(cells, &widths)));
    lines.push(separator);
    lines.join("\n")
}

pub fn render_tables(reports: &[StatisticsReport]) -> String {
    reports
        .iter()
        .map(render_table)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_json(reports: &[StatisticsReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
