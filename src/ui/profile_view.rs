use crate::app_state::App;
use crate::gallery::describe_data_url;
use crate::portfolio::PortfolioEntry;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

pub fn render_profile_view(app: &App, frame: &mut Frame, area: Rect) {
    let Some(view) = &app.profile_view else {
        frame.render_widget(
            Paragraph::new("No profile loaded.")
                .block(Block::default().borders(Borders::ALL).title("Profile")),
            area,
        );
        return;
    };

    let picture = if view.has_picture {
        describe_data_url(&view.picture)
    } else {
        view.picture.clone()
    };

    let text = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(view.name.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Bio:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(view.bio.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Picture: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(picture, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let widget = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Profile (n edit, i picture, Esc back)"),
    );
    frame.render_widget(widget, area);
}

pub fn render_portfolio_view(app: &App, frame: &mut Frame, area: Rect) {
    let Some(page) = &app.portfolio_page else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            page.display_name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(page.bio.clone()),
        Line::from(Span::styled(
            describe_data_url(&page.picture),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Portfolio"));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = page
        .gallery
        .iter()
        .map(|entry| match entry {
            PortfolioEntry::Image { src } => {
                ListItem::new(format!("🖼  {}", describe_data_url(src)))
            }
            PortfolioEntry::Text { text } => ListItem::new(text.clone()),
        })
        .collect();
    let gallery = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Gallery ({} items)", page.gallery.len())),
    );
    frame.render_widget(gallery, chunks[1]);
}
