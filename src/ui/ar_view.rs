use crate::app_state::App;
use crate::gallery::describe_data_url;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render_ar_view(app: &App, frame: &mut Frame, area: Rect) {
    let Some(cycler) = &app.ar_cycler else {
        return;
    };
    let scene = &app.ar_scene;

    let title = format!(
        "AR Viewer - {}/{} (artworks {}, models {})",
        cycler.cursor() + 1,
        cycler.artwork_count().max(cycler.model_count()).max(1),
        cycler.artwork_count(),
        cycler.model_count()
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let plane_text = match (&scene.plane, scene.plane_src()) {
        (Some(id), Some(src)) => vec![
            Line::from(Span::styled(
                scene.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(scene.desc.clone()),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} ({})", id, describe_data_url(src)),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        _ => vec![Line::from("No artwork on the plane.")],
    };
    frame.render_widget(
        Paragraph::new(plane_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        chunks[0],
    );

    let model_text = match scene.model.as_deref() {
        Some(src) => describe_data_url(src),
        None => "No 3D model.".to_string(),
    };
    frame.render_widget(
        Paragraph::new(model_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("3D Model")),
        chunks[1],
    );
}
