//! Move history panel.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tictactoe_timeline::{MoveListEntry, SortOrder};

use super::HitMap;

/// Renders the sort toggle and the scrollable move list.
///
/// `anchor` is the row (in display order) that must stay visible: the
/// selection when the panel is focused, the current move otherwise. It is
/// highlighted only when `focused`.
pub fn render_history(
    f: &mut Frame,
    area: Rect,
    entries: &[MoveListEntry],
    sort: SortOrder,
    anchor: usize,
    focused: bool,
    hits: &mut HitMap,
) {
    let block = Block::default().title("Move History").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("[s] ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            sort.toggle_label(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(toggle, Rect { height: inner.height.min(1), ..inner });

    // Row 0 is the toggle, row 1 is blank.
    let skip = inner.height.min(2);
    let list_area = Rect {
        y: inner.y + skip,
        height: inner.height - skip,
        ..inner
    };

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(entry.description.as_str()).style(entry_style(entry)))
        .collect();
    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(anchor));
    f.render_stateful_widget(list, list_area, &mut state);

    let offset = state.offset();
    let visible = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(list_area.height as usize);
    for (row, entry) in visible {
        if entry.is_selectable() {
            let y = list_area.y + (row - offset) as u16;
            hits.add_entry(Rect::new(list_area.x, y, list_area.width, 1), entry.move_number);
        }
    }
}

fn entry_style(entry: &MoveListEntry) -> Style {
    if entry.is_current {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}
