use chrono::{DateTime, Local, Utc};
use clubinhos_api::endpoints::{auth::UserRole, routes::EntityType};
use convert_case::{Case, Casing};

use crate::content::PageView;

/// Day/month/year in local time, or a dash when the backend sent nothing
pub fn fmt_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.with_timezone(&Local).format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Human label for a route's entity type
pub fn entity_type_label(entity_type: &EntityType) -> String {
    match PageView::resolve(entity_type, "") {
        PageView::Unknown { entity_type } => entity_type.to_case(Case::Title),
        view => view.label().to_string(),
    }
}

pub fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Administrador",
        UserRole::Coordinator => "Coordenador",
        UserRole::Teacher => "Professor",
        UserRole::User => "Usuário",
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Sim"
    } else {
        "Não"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Oração", 10), "Oração");
        assert_eq!(truncate("Oração da manhã", 6), "Oraçã…");
    }

    #[test]
    fn unknown_entity_types_are_title_cased() {
        assert_eq!(
            entity_type_label(&EntityType::from("MeditationPage")),
            "Meditation Page"
        );
        assert_eq!(entity_type_label(&EntityType::VideosPage), "Vídeos");
    }

    #[test]
    fn missing_date_renders_dash() {
        assert_eq!(fmt_date(None), "-");
    }
}
