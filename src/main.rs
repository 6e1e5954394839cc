//! netedit-tui - A terminal editor shell for network diagrams
//!
//! This is the main entry point for the netedit-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    let mut config = Config::load().unwrap_or_default();
    // First argument overrides the configured network file
    if let Some(path) = std::env::args().nth(1) {
        config.network_path = Some(path);
    }

    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Setup terminal
    let mut tui = Tui::new(Duration::from_millis(config.tick_rate_ms))?;
    tui.enter()?;

    // Create app state
    let mut app = App::new(config);

    // Main event loop
    let result = app.init().and_then(|_| run_app(&mut tui, &mut app));

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        log::error!("fatal: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("netedit-tui exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                log::trace!("action: {}", a);
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick to drain stream events
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
