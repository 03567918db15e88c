use clubinhos_api::endpoints::image_pages::ImagePage;
use ratatui::text::Line;

use super::media;

pub fn lines(page: &ImagePage) -> Vec<Line<'_>> {
    let mut lines = media::heading(&page.title, None, &page.description);
    lines.push(Line::from(format!(
        "{} imagens em {} seções",
        page.image_count(),
        page.sections.len()
    )));
    lines.push(Line::from(""));

    for section in page.sections.iter().filter(|s| s.public) {
        let caption = if section.caption.is_empty() {
            "Sem legenda"
        } else {
            section.caption.as_str()
        };
        lines.push(media::section_title(caption, section.media_items.len(), "imagens"));
        if !section.description.is_empty() {
            lines.push(Line::from(section.description.as_str()));
        }
        lines.extend(media::media_lines(&section.media_items));
        lines.push(Line::from(""));
    }

    lines
}
