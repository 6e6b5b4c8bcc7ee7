use crate::app_state::App;
use crate::gallery::GalleryItem;
use crate::ui::helpers::centered_rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render_help_popup(_app: &App, frame: &mut Frame) {
    let popup_area = centered_rect(60, 70, frame.size());

    let help_text = vec![
        Line::from(Span::styled(
            "--- General ---",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(" q: Quit application"),
        Line::from(" ?: Toggle this help screen"),
        Line::from(" g: Gallery"),
        Line::from(" p: Profile"),
        Line::from(" v: Portfolio (public view)"),
        Line::from(" a: AR viewer"),
        Line::from(" o: Sign out"),
        Line::from(""),
        Line::from(Span::styled(
            "--- Gallery ---",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(" ↑/↓: Select item"),
        Line::from(" u: Upload artwork (path, title, description)"),
        Line::from(" m: Upload 3D model (path, name)"),
        Line::from(" d/Del: Delete selected item"),
        Line::from(" r: Reload gallery"),
        Line::from(""),
        Line::from(Span::styled(
            "--- Profile ---",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(" n: Edit name and bio"),
        Line::from(" i: Set profile picture from file"),
        Line::from(""),
        Line::from(Span::styled(
            "--- AR Viewer ---",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(" ←/→ or h/l: Previous / next piece"),
        Line::from(" Esc: Close viewer"),
        Line::from(""),
        Line::from(Span::styled(
            "--- Input Fields ---",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(" Enter: Confirm input"),
        Line::from(" Esc: Cancel input / Go back"),
        Line::from(" Backspace: Delete last character"),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Available Commands (Press Esc, q, or ? to close)"),
        )
        .wrap(Wrap { trim: false }); // trim: false to keep blank lines for spacing

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help_paragraph, popup_area);
}

pub fn render_delete_confirmation_dialog(app: &App, frame: &mut Frame) {
    let popup_area = centered_rect(50, 20, frame.size());

    let what = match app.gallery_items.get(app.gallery_selection_index) {
        Some(GalleryItem::Artwork { title, .. }) => format!("artwork '{}'", title),
        Some(GalleryItem::Model { name, .. }) => format!("3D model '{}'", name),
        None => "nothing".to_string(),
    };

    let dialog = Paragraph::new(vec![
        Line::from(format!("Delete {}?", what)),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: delete   n/Esc: cancel",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm Delete")
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(dialog, popup_area);
}
