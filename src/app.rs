use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::events::timer::{Delays, Handler as TimerEventHandler, Timer};
use crate::logger::CustomLogger;
use crate::state::{Route, State, StateError};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type TimerSender = std::sync::mpsc::Sender<Timer>;
type TimerReceiver = std::sync::mpsc::Receiver<Timer>;
type LogReceiver = std::sync::mpsc::Receiver<String>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration and open
    /// `route` first. Returns the result of the application execution.
    ///
    pub async fn start(config: Config, route: Route) -> Result<()> {
        let log_rx = App::init_logger(&config)?;

        info!("Starting application...");
        let theme = config.theme().map_err(AppError::from)?;
        let (tx, rx) = std::sync::mpsc::channel::<Timer>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, theme, config.notice_ttl_ticks))),
            config,
        };
        app.state
            .try_lock()
            .map_err(|e| StateError::SessionUnavailable(e.to_string()))?
            .navigate(route);
        app.start_timers(rx)?;
        app.start_ui(log_rx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Install the custom logger and return the channel it forwards entries
    /// through.
    ///
    fn init_logger(config: &Config) -> Result<LogReceiver, AppError> {
        let level = config.level_filter()?;
        let (log_tx, log_rx) = std::sync::mpsc::channel::<String>();
        let logger = CustomLogger::new();
        let log_tx = std::sync::Mutex::new(log_tx);
        logger.set_log_callback(Box::new(move |entry| {
            if let Ok(sender) = log_tx.lock() {
                let _ = sender.send(entry);
            }
        }));
        log::set_logger(Box::leak(Box::new(logger)))
            .map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(log_rx)
    }

    /// Start a separate thread resolving simulated operations after their
    /// delay.
    ///
    fn start_timers(&self, timer_receiver: TimerReceiver) -> Result<()> {
        debug!("Creating new thread for simulated operations...");
        let cloned_state = Arc::clone(&self.state);
        let delays = Delays::from_config(&self.config);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut timer_event_handler = TimerEventHandler::new(&cloned_state, delays);
                while let Ok(timer) = timer_receiver.recv() {
                    match timer_event_handler.handle(timer).await {
                        Ok(_) => (),
                        Err(e) => error!("Failed to handle timer event: {}", e),
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self, log_receiver: LogReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = loop {
            let mut state = self.state.lock().await;
            while let Ok(entry) = log_receiver.try_recv() {
                state.add_log_entry(entry);
            }
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &state)) {
                break Err(AppError::from(e).into());
            }
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => (),
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_forwards_records_to_channel() {
        let log_rx = App::init_logger(&Config::new()).unwrap();
        warn!("logger installed");
        assert!(log_rx
            .try_iter()
            .any(|entry| entry.ends_with("WARN logger installed")));
        assert!(matches!(
            App::init_logger(&Config::new()),
            Err(AppError::Logger(_))
        ));
    }
}
