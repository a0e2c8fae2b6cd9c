use crate::ui::app::App;
use crate::ui::dialog::render_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};
use crate::ui::todos::StatusFilter;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body_area, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header_area);

    // The error banner takes the bottom row of the body when present.
    let banner = banner_text(app);
    let (body_area, banner_area) = match &banner {
        Some(_) if body_area.height > 1 => (
            Rect {
                height: body_area.height - 1,
                ..body_area
            },
            Some(Rect {
                y: body_area.y + body_area.height - 1,
                height: 1,
                ..body_area
            }),
        ),
        _ => (body_area, None),
    };

    render_body(frame, body_area, app);

    if let (Some(text), Some(rect)) = (banner, banner_area) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", text),
                Style::default().fg(STATUS_ERROR),
            ))),
            rect,
        );
    }

    frame.render_widget(Footer::new().widget(footer_area), footer_area);

    render_dialog(frame, app.dialog());
}

fn banner_text(app: &App) -> Option<String> {
    if let Some(error) = app.todos().load_error() {
        return Some(format!("Load failed: {}. Press r to retry.", error));
    }
    app.last_sync_error().map(|error| error.to_string())
}

fn render_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let tabs_area = Rect { height: 1, ..area };
    let list_area = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    render_tabs(frame, tabs_area, app);
    render_cards(frame, list_area, app);
}

fn render_tabs(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let (incomplete, completed) = app.todos().counts();
    let active = app.todos().filter;

    let tab_span = |filter: StatusFilter, label: &str, count: usize| {
        let style = if filter == active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
        };
        Span::styled(format!(" {} ({}) ", label, count), style)
    };

    let line = Line::from(vec![
        tab_span(StatusFilter::Incomplete, "Incomplete", incomplete),
        Span::styled("│", Style::default().fg(HEADER_SEPARATOR)),
        tab_span(StatusFilter::Completed, "Completed", completed),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_cards(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let visible = app.todos().visible();

    if visible.is_empty() {
        let hint = match app.todos().filter {
            StatusFilter::Incomplete => "No open to-dos. Press 'a' to add one.",
            StatusFilter::Completed => "Nothing completed yet.",
        };
        let widget = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                hint,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    let selected = app.todos().selected;
    let completed_tab = app.todos().filter == StatusFilter::Completed;
    let bottom = area.y + area.height;
    let mut y = area.y;

    for (idx, todo) in visible.iter().enumerate() {
        // Borders plus the title row plus one row per description line.
        let description_rows = todo.description.lines().count() as u16;
        let wanted = 3 + description_rows;
        if y + 3 > bottom {
            break;
        }
        let height = wanted.min(bottom - y);
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        y += height;

        let is_selected = idx == selected;
        let border = if is_selected { ACCENT } else { GLOBAL_BORDER };

        let mut title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if completed_tab {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
        }

        let mut lines = vec![Line::from(Span::styled(todo.title.clone(), title_style))];
        for text in todo.description.lines() {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )));
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        if is_selected {
            block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }

        frame.render_widget(Paragraph::new(lines).block(block), card_area);
    }
}
