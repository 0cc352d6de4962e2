use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::catalog::CatalogController;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the product-list screen until the user quits.
///
/// Must be called from within a tokio runtime context: the controller
/// schedules its fetch and flush tasks with `tokio::spawn`, and so does the
/// state-stream forwarder below.
pub fn run(controller: CatalogController, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(controller.clone());

    // Forward every published snapshot into the event loop so the screen
    // redraws as soon as the controller publishes, not just on the tick.
    let mut state_rx = controller.subscribe();
    let state_tx = events.sender();
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            if state_tx.send(AppEvent::StateChanged).is_err() {
                break;
            }
        }
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::StateChanged) => app.refresh(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
