//! Rendering for the add/edit dialog overlay.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::dialog::state::{DialogField, DialogMode, TodoDialogState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

/// Width of the dialog.
const DIALOG_WIDTH: u16 = 52;

/// Rows of the description field, excluding its borders.
fn description_rows(description: &str) -> u16 {
    let lines = description.lines().count().max(1) as u16;
    lines.clamp(3, 8)
}

/// Render the add/edit dialog overlay on top of the list view.
pub fn render_dialog(frame: &mut Frame<'_>, state: &TodoDialogState) {
    let TodoDialogState::Visible {
        mode,
        title,
        description,
        focus,
        confirm_discard,
        ..
    } = state
    else {
        return;
    };

    let desc_rows = description_rows(description);
    // Outer borders + title field + description field + hint row,
    // plus one row for the discard warning when armed.
    let mut height = 2 + 3 + (desc_rows + 2) + 1;
    if *confirm_discard {
        height += 1;
    }
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);

    frame.render_widget(Clear, area);

    let heading = match mode {
        DialogMode::Create => " Add To-Do ",
        DialogMode::Edit { .. } => " Edit To-Do ",
    };
    let block = Block::default()
        .title(Span::styled(heading, Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(desc_rows + 2),
        Constraint::Length(1),
    ];
    if *confirm_discard {
        constraints.push(Constraint::Length(1));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_field(frame, rows[0], "Title", title, *focus == DialogField::Title);
    render_field(
        frame,
        rows[1],
        "Description",
        description,
        *focus == DialogField::Description,
    );

    let hints = " Tab: Field │ Ctrl+S: Save │ Esc: Cancel";
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))),
        rows[2],
    );

    if *confirm_discard {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Unsaved changes. Press Esc again to discard.",
                Style::default().fg(STATUS_ERROR),
            ))),
            rows[3],
        );
    }
}

fn render_field(frame: &mut Frame<'_>, area: Rect, label: &'static str, value: &str, focused: bool) {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let widget = Paragraph::new(value)
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(widget, area);
}
