use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

use crate::background::{
    data_loader::{AppGateway, DataLoader},
    navigator::ChannelNavigator,
    BackgroundTaskManager,
};
use crate::commands::{executor, handlers, AppCommand};
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::state::AppState;
use crate::ui::screens::Screen;
use clubinhos_api::Client;
use clubinhos_auth::{AuthClient, Settings};

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_buffer = LogBuffer::new(5000);
        let log_path = init_logging_with_buffer(log_buffer.clone())?;

        tracing::info!(api_url = %self.settings.api_url, "clubinhos starting");
        tracing::debug!("Writing logs to {}", log_path.display());

        let session = self.settings.open_session()?;
        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let timeout = Duration::from_secs(self.settings.request_timeout_secs);
        let auth_client = AuthClient::new(&self.settings.api_url, timeout)?;
        let gateway: Arc<AppGateway> = Arc::new(AppGateway::new(
            Client::new(&self.settings.api_url).with_timeout(timeout),
            auth_client,
            session.clone(),
            Arc::new(ChannelNavigator::new(data_tx.clone())),
        ));
        let data_loader = DataLoader::new(gateway, data_tx.clone());

        let mut ui_state = AppState::with_session(session.is_authenticated());
        let mut task_manager = BackgroundTaskManager::new();

        let mut terminal = self.init()?;
        let mut event_stream = EventStream::new();

        self.init_data(&mut ui_state, &mut task_manager, &data_loader);

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            if let Screen::Logs(logs_state) = ui_state.current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state, &log_buffer);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = ui_state.loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if key.kind == KeyEventKind::Press {
                            // Logging keys on the logs screen would feed back into it
                            let on_logs_screen = matches!(ui_state.current_screen(), Screen::Logs(_));
                            if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state) {
                                if !on_logs_screen && !matches!(command, AppCommand::AppendLoginChar(_)) {
                                    tracing::debug!("Executing command: {:?}", command);
                                }
                                executor::execute_command(
                                    command,
                                    &mut ui_state,
                                    &mut task_manager,
                                    &data_loader,
                                );
                            }
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {}", describe(&data_event));
                    crate::state::reducer::reduce_data_event(&mut ui_state, data_event);
                }
            }

            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");
        task_manager.cancel_all();
        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Route table once on mount, plus the profile behind a restored session
    fn init_data(
        &self,
        ui_state: &mut AppState,
        task_manager: &mut BackgroundTaskManager,
        data_loader: &DataLoader,
    ) {
        executor::execute_command(AppCommand::LoadRoutes, ui_state, task_manager, data_loader);
        if ui_state.session.is_authenticated {
            executor::execute_command(
                AppCommand::LoadCurrentUser,
                ui_state,
                task_manager,
                data_loader,
            );
        }
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Short event description; payloads can be large
fn describe(event: &crate::events::DataEvent) -> String {
    use crate::events::DataEvent::*;
    match event {
        RoutesLoaded { routes } => format!("RoutesLoaded({} routes)", routes.len()),
        PageLoaded { view, .. } => format!("PageLoaded({:?})", view),
        CommentsLoaded { comments } => format!("CommentsLoaded({} comments)", comments.len()),
        CurrentUserLoaded { user } => format!("CurrentUserLoaded({})", user.id),
        other => format!("{:?}", other),
    }
}
