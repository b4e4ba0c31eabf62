use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the interactive demo until the user quits.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    // Built before touching the terminal so a bad menu never draws anything.
    let mut app = App::new(config, events.sender())?;
    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!("Demo started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Demo stopped");
    Ok(())
}
