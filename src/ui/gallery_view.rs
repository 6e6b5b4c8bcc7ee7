use crate::app_state::App;
use crate::gallery::{describe_data_url, GalleryItem};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

/// Render the gallery list: artwork cards, then model cards.
pub fn render_gallery_view(app: &App, frame: &mut Frame, area: Rect) {
    if app.gallery_items.is_empty() {
        let empty_message = Paragraph::new("No artworks or models yet. Press u or m to upload.")
            .block(Block::default().borders(Borders::ALL).title("Gallery"));
        frame.render_widget(empty_message, area);
        return;
    }

    let items: Vec<ListItem> = app
        .gallery_items
        .iter()
        .map(|item| match item {
            GalleryItem::Artwork {
                index,
                img,
                title,
                desc,
            } => {
                let mut lines = vec![Line::from(vec![
                    Span::styled(format!("#{} ", index), Style::default().fg(Color::DarkGray)),
                    Span::styled(title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  [{}]", describe_data_url(img)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])];
                if !desc.is_empty() {
                    lines.push(Line::from(format!("    {}", desc)));
                }
                ListItem::new(lines)
            }
            GalleryItem::Model { index, name } => ListItem::new(Line::from(vec![
                Span::styled(format!("#{} ", index), Style::default().fg(Color::DarkGray)),
                Span::styled("3D Model: ", Style::default().fg(Color::Cyan)),
                Span::raw(name.clone()),
            ])),
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Gallery (u upload art, m upload model, d delete)"),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.gallery_selection_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}
