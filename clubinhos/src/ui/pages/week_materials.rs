use clubinhos_api::endpoints::week_material_pages::WeekMaterialPage;
use ratatui::text::{Line, Span};

use super::media;
use crate::ui::theme;

pub fn lines(page: &WeekMaterialPage) -> Vec<Line<'_>> {
    let mut lines = media::heading(&page.title, page.subtitle.as_deref(), &page.description);
    if page.current_week {
        lines.insert(
            1,
            Line::from(Span::styled("Material da semana atual", theme::success_style())),
        );
    }

    for (label, items) in page.media_groups() {
        if items.is_empty() {
            continue;
        }
        lines.push(media::section_title(label, items.len(), "itens"));
        lines.extend(media::media_lines(items));
        lines.push(Line::from(""));
    }

    lines
}
