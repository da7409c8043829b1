use crate::artifacts::branch::branch::Branch;
use crate::artifacts::report::palette::Palette;
use crate::artifacts::summary::repository_summary::RepositorySummary;
use crate::artifacts::summary::unpushed_policy::UnpushedPolicy;
use std::io::Write;
use std::path::Path;

const NO_UPSTREAM: &str = "<none>";
const DIRTY_ICON: char = 'M';
const AHEAD_ICON: char = '↑';
const BEHIND_ICON: char = '↓';
const MAX_SUBJECT_CHARS: usize = 72;
const ELLIPSIS: char = '…';

/// The rows of the report, already filtered, with column widths fitted to
/// exactly those rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    sections: Vec<Section>,
    widths: ColumnWidths,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    header: String,
    rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    name: String,
    icons: String,
    upstream: Option<String>,
    author_date: String,
    subject: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ColumnWidths {
    name: usize,
    upstream: usize,
    author_date: usize,
}

impl ReportTable {
    /// Keeps every repository and branch when `all` is set, otherwise only
    /// those with unpushed changes under `policy`.
    pub fn build(
        scan_root: &Path,
        summaries: &[RepositorySummary],
        all: bool,
        policy: UnpushedPolicy,
    ) -> Self {
        let sections = summaries
            .iter()
            .filter(|summary| all || summary.has_unpushed_changes(policy))
            .map(|summary| Section {
                header: summary.root().display_relative_to(scan_root),
                rows: summary.visible_branches(all, policy).map(Row::from).collect(),
            })
            .collect::<Vec<_>>();

        let widths = sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .fold(ColumnWidths::default(), |widths, row| ColumnWidths {
                name: widths.name.max(width(&row.name)),
                upstream: widths.upstream.max(width(row.upstream_label())),
                author_date: widths.author_date.max(width(&row.author_date)),
            });

        ReportTable { sections, widths }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn write_to(&self, writer: &mut dyn Write, palette: Palette) -> std::io::Result<()> {
        let ColumnWidths {
            name: name_width,
            upstream: upstream_width,
            author_date: date_width,
        } = self.widths;

        for section in &self.sections {
            writeln!(writer, "{}", section.header)?;

            for row in &section.rows {
                let upstream = pad_right(row.upstream_label(), upstream_width);
                let upstream = match row.upstream {
                    Some(_) => upstream,
                    None => palette.alert(&upstream),
                };

                writeln!(
                    writer,
                    "  {} {} {} {} {}",
                    pad_right(&row.name, name_width),
                    palette.alert(&row.icons),
                    upstream,
                    palette.date(&pad_left(&row.author_date, date_width)),
                    row.subject
                )?;
            }
        }

        Ok(())
    }
}

impl Row {
    fn upstream_label(&self) -> &str {
        self.upstream.as_deref().unwrap_or(NO_UPSTREAM)
    }
}

impl From<&Branch> for Row {
    fn from(branch: &Branch) -> Self {
        let icon = |set: bool, icon: char| if set { icon } else { ' ' };

        Row {
            name: branch.name.clone(),
            icons: [
                icon(branch.is_dirty, DIRTY_ICON),
                icon(branch.is_ahead(), AHEAD_ICON),
                icon(branch.is_behind(), BEHIND_ICON),
            ]
            .iter()
            .collect(),
            upstream: branch.has_upstream().then(|| branch.upstream.clone()),
            author_date: branch.author_date.clone(),
            subject: truncate(&branch.subject, MAX_SUBJECT_CHARS),
        }
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if width(text) <= max_chars {
        return text.to_string();
    }

    let mut truncated = text.chars().take(max_chars - 1).collect::<String>();
    truncated.push(ELLIPSIS);
    truncated
}
