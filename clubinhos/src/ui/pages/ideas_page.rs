use clubinhos_api::endpoints::ideas_pages::IdeasPage;
use ratatui::text::Line;

use super::media;

pub fn lines(page: &IdeasPage) -> Vec<Line<'_>> {
    let mut lines = media::heading(&page.title, page.subtitle.as_deref(), &page.description);

    for section in page.sections.iter().filter(|s| s.public) {
        lines.push(media::section_title(&section.title, section.medias.len(), "mídias"));
        if !section.description.is_empty() {
            lines.push(Line::from(section.description.as_str()));
        }
        lines.extend(media::media_lines(&section.medias));
        lines.push(Line::from(""));
    }

    lines
}
