use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen, is_authenticated: bool) {
    let help_items = get_help_items(screen, is_authenticated);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::PopupSize::HELP,
        " Ajuda (? ou Esc para fechar) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen, is_authenticated: bool) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Routes => {
            items.push(("↑/k", "Rota anterior"));
            items.push(("↓/j", "Próxima rota"));
            items.push(("Enter/→/l", "Abrir a página da rota"));
            items.push(("r", "Recarregar rotas"));
            if is_authenticated {
                items.push(("o", "Sair da conta"));
            } else {
                items.push(("L", "Entrar"));
            }
        }
        Screen::Page(_) => {
            items.push(("↑/k", "Rolar para cima"));
            items.push(("↓/j", "Rolar para baixo"));
            items.push(("PgUp/PgDn", "Rolar uma página"));
            items.push(("r", "Recarregar página"));
        }
        Screen::Login(_) => {
            items.push(("Tab", "Alternar entre e-mail e senha"));
            items.push(("Enter", "Entrar"));
            items.push(("Esc", "Cancelar"));
        }
        Screen::Profile => {
            items.push(("r", "Recarregar perfil"));
            if is_authenticated {
                items.push(("o", "Sair da conta"));
            } else {
                items.push(("L", "Entrar"));
            }
        }
        Screen::Comments(_) => {
            items.push(("↑/k", "Comentário anterior"));
            items.push(("↓/j", "Próximo comentário"));
            items.push(("r", "Recarregar comentários"));
        }
        Screen::Logs(_) => {
            items.push(("↑/k", "Logs mais antigos"));
            items.push(("↓/j", "Logs mais recentes"));
            items.push(("PgUp/PgDn", "Rolar uma página"));
            items.push(("g então g", "Ir ao log mais antigo"));
            items.push(("G", "Ir ao log mais recente"));
        }
    }

    items.push(("", ""));
    items.push(("--- Geral ---", ""));
    items.push(("h/←/Esc", "Voltar"));
    items.push(("g então c", "Comentários"));
    items.push(("g então p", "Perfil"));
    items.push(("g então l", "Logs"));
    items.push(("g então g", "Ir ao topo"));
    items.push(("G", "Ir ao fim"));
    items.push(("?", "Mostrar/ocultar esta ajuda"));
    items.push(("q", "Sair do aplicativo"));

    items
}
