use std::sync::{Arc, Mutex};

use crate::player::PlayerClient;

mod input;
mod logging;
mod render_loop;
mod resize;
mod screen;
mod settings;
mod shared;

use render_loop::RenderLoop;
use screen::Screen;
use shared::SharedState;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    match logging::init_logging(&settings.log) {
        Ok(true) => tracing::info!("itti starting"),
        Ok(false) => {}
        Err(e) => eprintln!("itti: logging disabled: {e}"),
    }

    let client = PlayerClient::new(settings.player.clone());

    // The only fatal failure: nothing is running yet.
    let mut terminal = screen::setup()?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let area = Screen::area(&mut terminal)?;
        let shared = Arc::new(SharedState::new(area));
        let screen = Arc::new(Mutex::new(terminal));

        // First paint of the chrome, same path as a resize.
        resize::handle_resize(&shared, &screen, &settings.ui.label)?;

        let render_loop = RenderLoop::spawn(
            shared.clone(),
            screen.clone(),
            client.clone(),
            settings.ui.clone(),
        );

        let input_result = input::run(&shared, &screen, &client, &settings.ui.label);

        render_loop.stop();
        input_result?;
        Ok(())
    })();

    screen::restore()?;
    tracing::info!("itti stopped");

    run_result
}
