use clubinhos_api::endpoints::MediaItem;
use ratatui::text::{Line, Span};

use crate::ui::theme;

/// Page heading: title, optional subtitle, description
pub(super) fn heading<'a>(title: &'a str, subtitle: Option<&'a str>, description: &'a str) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(title, theme::title_style()))];
    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
        lines.push(Line::from(Span::styled(subtitle, theme::header_style())));
    }
    if !description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(description));
    }
    lines.push(Line::from(""));
    lines
}

pub(super) fn section_title(title: &str, count: usize, noun: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(title.to_string(), theme::header_style()),
        Span::styled(format!("  ({} {})", count, noun), theme::muted_style()),
    ])
}

/// Two lines per item: title with its source, then the URL
pub(super) fn media_lines(items: &[MediaItem]) -> Vec<Line<'_>> {
    if items.is_empty() {
        return vec![Line::from(Span::styled("  Nenhum item", theme::muted_style()))];
    }

    items
        .iter()
        .flat_map(|item| {
            let title = if item.title.is_empty() {
                item.original_name.as_deref().unwrap_or("Sem título")
            } else {
                item.title.as_str()
            };
            [
                Line::from(vec![
                    Span::raw("  • "),
                    Span::raw(title),
                    Span::styled(format!("  [{}]", item.source_label()), theme::help_text_style()),
                ]),
                Line::from(Span::styled(format!("    {}", item.url), theme::muted_style())),
            ]
        })
        .collect()
}
