use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::model::{Board, Column, Stage};

use super::app::{App, Screen};
use super::form::TaskForm;
use super::keymap;

const FOCUSED: Color = Color::Indexed(62);
const HELP: Color = Color::Indexed(41);

pub fn draw(f: &mut Frame, app: &App) {
    if app.should_quit {
        return;
    }
    let area = f.area();
    match &app.screen {
        Screen::Loading => f.render_widget(Paragraph::new("Loading..."), area),
        Screen::Board(board) => {
            let (width, height) = app.viewport.unwrap_or((area.width, area.height));
            let divisor = app.config.column_divisor.max(1);
            let size = (width / divisor, height.saturating_sub(divisor));
            draw_board(f, area, board, size);
        }
        Screen::Form { form, .. } => draw_form(f, area, form),
    }
}

/// Columns are `size.0` wide and `size.1` tall, clipped to the frame.
fn draw_board(f: &mut Frame, area: Rect, board: &Board, size: (u16, u16)) {
    let (column_width, column_height) = size;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(column_height), // Columns
            Constraint::Length(1),             // Help / filter prompt
            Constraint::Min(0),
        ])
        .split(area);

    let col_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(column_width); 3])
        .split(rows[0]);

    for (col, col_area) in board.columns().iter().zip(col_areas.iter()) {
        draw_column(f, *col_area, col, board.query(), col.stage() == board.focused());
    }

    if board.is_filtering() {
        draw_help(
            f,
            rows[1],
            &format!("/{}  {}", board.query(), keymap::FILTER_HELP),
        );
    } else if !board.query().is_empty() {
        draw_help(
            f,
            rows[1],
            &format!("filter: {}  esc clear • {}", board.query(), keymap::BOARD_HELP),
        );
    } else {
        draw_help(f, rows[1], keymap::BOARD_HELP);
    }
}

fn draw_column(f: &mut Frame, area: Rect, col: &Column, query: &str, focused: bool) {
    let border = if focused {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(FOCUSED))
    } else {
        Block::default().borders(Borders::NONE)
    };
    let visible: Vec<_> = col.visible(query).collect();
    let count = if query.is_empty() {
        col.len().to_string()
    } else {
        format!("{}/{}", visible.len(), col.len())
    };
    let block = border
        .title(format!("{} ({count})", col.stage().title()))
        .padding(Padding::horizontal(1));

    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    task.title.clone(),
                    Style::default().fg(Color::White),
                )),
                Line::from(Span::styled(
                    task.description.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let highlight = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default().with_selected(col.visible_selected(query));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_form(f: &mut Frame, area: Rect, form: &TaskForm) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Description
            Constraint::Length(1), // Help
        ])
        .split(area);

    let header = Paragraph::new(format!(" New task in {}", stage_label(form.origin())))
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(header, rows[0]);
    f.render_widget(form.title.widget(), rows[1]);
    f.render_widget(form.description.widget(), rows[2]);
    draw_help(f, rows[3], keymap::FORM_HELP);
}

fn stage_label(stage: Stage) -> String {
    stage.title().to_uppercase()
}

fn draw_help(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(HELP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;
    use crate::tui::keymap::Msg;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_lines(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn render(app: &App) -> String {
        render_lines(app).join("\n")
    }

    fn loaded_app() -> App {
        let mut app = App::new(Config::default());
        app.dispatch(Msg::Resize {
            width: 100,
            height: 20,
        });
        app
    }

    #[test]
    fn loading_placeholder_before_resize() {
        let app = App::new(Config::default());
        assert!(render(&app).contains("Loading..."));
    }

    #[test]
    fn board_shows_three_columns() {
        let app = loaded_app();
        let screen = render(&app);
        assert!(screen.contains("Todo (3)"));
        assert!(screen.contains("In Progress (1)"));
        assert!(screen.contains("Done (1)"));
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("Stay cool"));
    }

    #[test]
    fn focused_column_has_rounded_border() {
        let app = loaded_app();
        let screen = render(&app);
        assert!(screen.starts_with('╭'));
    }

    #[test]
    fn columns_sized_to_viewport_height() {
        let app = loaded_app();
        let lines = render_lines(&app);
        // 20 rows minus the divisor of 4 for the columns, then the help line
        assert!(lines[16].contains("enter advance"));
        assert!(lines[15].starts_with('╰'));
        assert!(!lines[15].contains("enter advance"));
    }

    #[test]
    fn filter_draws_only_matching_tasks() {
        let mut app = loaded_app();
        app.dispatch(Msg::StartFilter);
        for c in "milk".chars() {
            app.dispatch(Msg::FilterChar(c));
        }
        let screen = render(&app);
        assert!(screen.contains("/milk"));
        assert!(screen.contains("Todo (1/3)"));
        assert!(screen.contains("Buy milk"));
        assert!(!screen.contains("Eat sushi"));
        assert!(!screen.contains("Stay cool"));

        app.dispatch(Msg::ApplyFilter);
        assert!(render(&app).contains("filter: milk"));
    }

    #[test]
    fn form_shows_both_fields() {
        let mut app = loaded_app();
        app.dispatch(Msg::OpenForm);
        let screen = render(&app);
        assert!(screen.contains("New task in TODO"));
        assert!(screen.contains("Title"));
        assert!(screen.contains("Description"));
    }

    #[test]
    fn quitting_draws_empty_frame() {
        let mut app = loaded_app();
        app.dispatch(Msg::Quit);
        let screen = render(&app);
        assert!(screen.chars().all(|c| c == ' ' || c == '\n'));
    }
}
