use clubinhos_api::endpoints::video_pages::VideoPage;
use ratatui::text::Line;

use super::media;

pub fn lines(page: &VideoPage) -> Vec<Line<'_>> {
    let mut lines = media::heading(&page.title, None, &page.description);
    lines.push(media::section_title("Vídeos", page.videos.len(), "itens"));
    lines.extend(media::media_lines(&page.videos));
    lines
}
