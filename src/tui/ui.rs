use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::title_bar::display_endpoint;
use crate::tui::components::{ActionBar, ResultPanel, TitleBar, TonePicker};

const HELP_TEXT: &str = "^T tones · Enter newline · PgUp/PgDn scroll reply · ^L clear · ^C quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Percentage(40), Length(1), Min(3), Length(1)]);
    let [title_area, editor_area, action_area, result_area, help_area] =
        layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.status,
        display_endpoint(&tui.endpoint),
        app.status_message.as_str(),
    );
    title_bar.render(frame, title_area);

    tui.editor.dimmed = app.is_loading();
    tui.editor.render(frame, editor_area);

    let mut action_bar = ActionBar {
        tone: app.tone,
        can_submit: app.can_submit(),
        is_loading: app.is_loading(),
        can_copy: app.can_copy(),
        spinner_frame,
    };
    action_bar.render(frame, action_area);

    let mut result_panel = ResultPanel {
        state: &mut tui.result_panel,
        status: app.status,
        reply: app.generated_reply.as_deref(),
        error: app.error.as_deref(),
        spinner_frame,
    };
    result_panel.render(frame, result_area);

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(picker) = tui.tone_picker.as_mut() {
        TonePicker::new(picker, app.tone).render(frame, frame.area());
    }
}
