use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::todos::LoadPhase;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let status_span = match &app.todos().phase {
            LoadPhase::Loading => {
                let spinner =
                    SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
                Span::styled(format!("{} loading", spinner), text_style)
            }
            LoadPhase::Loaded => {
                let (incomplete, completed) = app.todos().counts();
                Span::styled(
                    format!("{} open, {} done", incomplete, completed),
                    Style::default().fg(STATUS_OK),
                )
            }
            LoadPhase::Failed { .. } => {
                Span::styled("sync failed", Style::default().fg(STATUS_ERROR))
            }
        };

        let line = Line::from(vec![
            Span::styled("  taskdeck", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(app.base_url().to_string(), text_style),
            Span::styled("  │  ", separator_style),
            status_span,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
