use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    CURSOR_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, LIST_TEXT, LOADING_TEXT, SELECTED_BG,
    STATUS_ERROR,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let (status, list) = body_regions(body);

    frame.render_widget(header_widget(), header);
    frame.render_widget(status_widget(app), status);
    draw_product_list(frame, app, list);
    frame.render_widget(footer_widget(), footer);
}

fn header_widget() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Products",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(bordered())
}

fn status_widget(app: &App) -> Paragraph<'static> {
    let session = &app.state().session;
    let line = if session.is_loading {
        Line::from(Span::styled(
            format!(" {} Loading products...", app.spinner()),
            Style::default().fg(LOADING_TEXT),
        ))
    } else if let Some(message) = &session.error_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        ))
    } else {
        Line::from(Span::styled(
            " Ready",
            Style::default().fg(DIM_TEXT),
        ))
    };
    Paragraph::new(line)
}

fn draw_product_list(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let shelf = &app.state().shelf;

    if shelf.products.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No products available",
            Style::default().fg(DIM_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(bordered());
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem<'_>> = shelf
        .products
        .iter()
        .map(|product| {
            let selected = shelf.selected_product.as_deref() == Some(product.as_str());
            let style = if selected {
                Style::default().fg(HEADER_TEXT).bg(SELECTED_BG)
            } else {
                Style::default().fg(LIST_TEXT)
            };
            ListItem::new(Line::from(Span::styled(product.clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(bordered())
        .highlight_style(Style::default().bg(CURSOR_HIGHLIGHT))
        .highlight_symbol("> ");

    let mut cursor = ListState::default();
    cursor.select(Some(app.cursor()));
    frame.render_stateful_widget(list, area, &mut cursor);
}

fn footer_widget() -> Paragraph<'static> {
    let hints = " l: Load │ u: Unload │ r: Remove │ ↑/↓: Move │ Enter: Select │ q: Quit";
    let version = format!("v{} ", VERSION);
    let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(hints, style),
        Span::styled(version, style),
    ]);

    Paragraph::new(line)
        .style(style)
        .alignment(Alignment::Left)
        .block(bordered())
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
