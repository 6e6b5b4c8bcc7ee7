use crate::app_state::{App, InputMode};
use crate::ui::ar_view::render_ar_view;
use crate::ui::gallery_view::render_gallery_view;
use crate::ui::helpers::{centered_rect, input_cursor_x, truncate};
use crate::ui::popups::{render_delete_confirmation_dialog, render_help_popup};
use crate::ui::profile_view::{render_portfolio_view, render_profile_view};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render_ui(app: &mut App, frame: &mut Frame) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt or session header
            Constraint::Min(0),    // Current screen
            Constraint::Length(6), // Status
        ])
        .split(frame.size());

    render_input_area(app, frame, main_layout[0]);

    match app.input_mode {
        InputMode::SignIn => render_sign_in_splash(frame, main_layout[1]),
        InputMode::Profile
        | InputMode::EditName
        | InputMode::EditBio
        | InputMode::EnterPicturePath => render_profile_view(app, frame, main_layout[1]),
        InputMode::Portfolio => render_portfolio_view(app, frame, main_layout[1]),
        InputMode::ArViewer => render_ar_view(app, frame, main_layout[1]),
        _ => render_gallery_view(app, frame, main_layout[1]),
    }

    render_status_area(app, frame, main_layout[2]);

    match app.input_mode {
        InputMode::ShowHelp => render_help_popup(app, frame),
        InputMode::ConfirmDelete => render_delete_confirmation_dialog(app, frame),
        _ => {}
    }
}

fn prompt_title(mode: InputMode) -> Option<&'static str> {
    Some(match mode {
        InputMode::SignIn => "Artist username (Enter to sign in, Esc to quit):",
        InputMode::EditName => "Name (Editing):",
        InputMode::EditBio => "Bio (Editing):",
        InputMode::EnterPicturePath => "Profile picture file path:",
        InputMode::ArtworkPath => "Artwork image file path:",
        InputMode::ArtworkTitle => "Artwork title:",
        InputMode::ArtworkDesc => "Artwork description (optional):",
        InputMode::ModelPath => "3D model file path (.glb/.gltf):",
        InputMode::ModelName => "Model name (blank = file name):",
        _ => return None,
    })
}

fn render_input_area(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(title) = prompt_title(app.input_mode) {
        let input_widget = Paragraph::new(app.input_buffer.as_str())
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(input_widget, area);
        frame.set_cursor(
            input_cursor_x(area, &app.input_buffer),
            area.y.saturating_add(1),
        );
        return;
    }

    let mut header = format!(
        "Artist: {}",
        app.current_user.as_deref().unwrap_or("[not signed in]")
    );
    if app.decodes_in_flight > 0 {
        header.push_str(&format!("; reading {} file(s)...", app.decodes_in_flight));
    }
    if !app.persistent {
        header.push_str("; storage: memory only");
    }
    let header_widget = Paragraph::new(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Artfolio (? for help)"),
    );
    frame.render_widget(header_widget, area);
}

fn render_sign_in_splash(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Artfolio",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Type your artist username above and press Enter."),
        Line::from("A new username starts with an empty profile."),
    ];
    let popup_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        popup_area,
    );
}

fn render_status_area(app: &App, frame: &mut Frame, area: Rect) {
    let mut status_lines = Vec::new();
    let max_lines = (area.height.saturating_sub(2)) as usize; // Account for borders

    if !app.status_message.is_empty() {
        status_lines.push(truncate(&app.status_message, 80));
    }

    // Recent history, newest first, skipping the line already shown
    let remaining_lines = max_lines.saturating_sub(status_lines.len());
    for (message, _instant, at) in app
        .status_messages
        .iter()
        .rev()
        .filter(|(message, _, _)| *message != app.status_message)
        .take(remaining_lines)
    {
        status_lines.push(format!("• [{}] {}", at.format("%H:%M:%S"), truncate(message, 80)));
    }

    let status_widget = Paragraph::new(status_lines.join("\n"))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_widget, area);
}
