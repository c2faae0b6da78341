//! Plain-text presentation of the view model

use comfy_table::{ContentArrangement, Table};
use std::fmt::Write as _;
use std::io::{self, Write};
use students_ui_core::{Content, DepartmentSelector, StudentTable, ViewModel};

/// Render the whole view as text, selector first
pub fn render_view(view: &ViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.subtitle);
    let _ = writeln!(out);
    render_selector(&mut out, &view.selector);

    match &view.content {
        Content::Nothing => {}
        Content::Error(message) => {
            let _ = writeln!(out, "\n{message}");
        }
        Content::Loading(text) | Content::Empty(text) => {
            let _ = writeln!(out, "\n{text}");
        }
        Content::Table(table) => {
            let _ = writeln!(out);
            render_table(&mut out, table);
        }
    }

    out
}

fn render_selector(out: &mut String, selector: &DepartmentSelector) {
    let selected = selector.selected_index();
    let _ = writeln!(out, "{}", selector.label);
    for (index, option) in selector.options.iter().enumerate() {
        let marker = if selected == Some(index) { '>' } else { ' ' };
        let _ = writeln!(out, "  {marker} [{index}] {}", option.label);
    }
}

fn render_table(out: &mut String, student_table: &StudentTable) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(&student_table.columns);
    for row in &student_table.rows {
        table.add_row(row.cells());
    }

    let _ = writeln!(out, "{}", student_table.heading);
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out, "{}", student_table.footer);
}

/// Writes a fresh rendering of the view for every render effect
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn draw(&mut self, view: &ViewModel) -> io::Result<()> {
        writeln!(self.out, "{}", render_view(view))?;
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }

    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

const PROMPT: &str = "département (numéro ou nom, vide = aucun, q = quitter) : ";

#[cfg(test)]
mod tests {
    use super::*;
    use students_ui_core::{view::view, Department, Model, Student};

    fn model_with_departments() -> Model {
        Model {
            departments: vec![
                Department {
                    id: 1,
                    name: "CS".to_string(),
                },
                Department {
                    id: 2,
                    name: "Math".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn marks_blank_default_when_nothing_selected() {
        let text = render_view(&view(&model_with_departments()));

        assert!(text.starts_with("Liste des Étudiants\n"));
        assert!(text.contains("  > [0] -- Choisir un département --"));
        assert!(text.contains("    [1] CS"));
        assert!(text.contains("    [2] Math"));
    }

    #[test]
    fn shows_table_rows_and_footer() {
        let model = Model {
            selected_department: "CS".to_string(),
            students: vec![Student {
                id: 10,
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
                department: Some(Department {
                    id: 1,
                    name: "CS".to_string(),
                }),
            }],
            ..model_with_departments()
        };

        let text = render_view(&view(&model));

        assert!(text.contains("  > [1] CS"));
        assert!(text.contains("Étudiants du département CS"));
        assert!(text.contains("Prénom"));
        assert!(text.contains("Lovelace"));
        assert!(text.ends_with("Total : 1 étudiant(s)\n"));
    }

    #[test]
    fn shows_error_below_selector() {
        let model = Model {
            error_message: Some("Erreur lors du chargement des départements".to_string()),
            ..Default::default()
        };

        let text = render_view(&view(&model));

        assert!(text.contains("[0] -- Choisir un département --"));
        assert!(text.ends_with("\nErreur lors du chargement des départements\n"));
    }

    #[test]
    fn draw_appends_prompt() {
        let mut terminal = Terminal::new(Vec::new());

        terminal.draw(&view(&Model::default())).unwrap();

        let written = String::from_utf8(terminal.into_inner()).unwrap();
        assert!(written.ends_with(PROMPT));
    }
}
