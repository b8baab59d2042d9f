use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use super::suggest_state::{MAX_VISIBLE_SUGGESTIONS, SuggestState};
use crate::theme;
use crate::widgets::popup;

/// Where the popup opens relative to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Above the input (chat query box at the bottom of the screen)
    Above,
    /// Below the input (modal fields)
    Below,
}

/// Render a suggestion popup next to `input_area`.
///
/// Returns the popup area, or None when the popup is hidden.
pub fn render_popup(
    suggest: &SuggestState,
    frame: &mut Frame,
    input_area: Rect,
    anchor: Anchor,
) -> Option<Rect> {
    if !suggest.is_visible() {
        return None;
    }

    let visible_count = suggest.filtered_count().min(MAX_VISIBLE_SUGGESTIONS);
    let height = (visible_count as u16) + 2; // +2 for borders

    let popup_area = match anchor {
        Anchor::Above => popup::popup_above_anchor(input_area, input_area.width, height),
        Anchor::Below => {
            popup::popup_below_anchor(input_area, frame.area(), input_area.width, height)
        }
    };

    if popup_area.height < 3 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let max_text_len = (popup_area.width as usize).saturating_sub(6);

    let items: Vec<ListItem> = suggest
        .visible_entries()
        .map(|(display_idx, entry)| {
            let display_text = if entry.chars().count() > max_text_len {
                let truncated: String = entry.chars().take(max_text_len).collect();
                format!("{}…", truncated)
            } else {
                entry.to_string()
            };

            let line = if Some(display_idx) == suggest.selected_index() {
                Line::from(Span::styled(
                    format!(" ► {} ", display_text),
                    Style::default()
                        .fg(theme::suggest::ITEM_SELECTED_FG)
                        .bg(theme::suggest::ITEM_SELECTED_BG),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {} ", display_text),
                    Style::default().fg(theme::suggest::ITEM_NORMAL),
                ))
            };

            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" Suggestions ({}) ", suggest.filtered_count()))
        .border_style(Style::default().fg(theme::suggest::BORDER))
        .style(Style::default().bg(theme::suggest::BACKGROUND));

    frame.render_widget(List::new(items).block(block), popup_area);

    Some(popup_area)
}
