use macroquad::prelude::*;
use toroidal_life::{LifeConfig, input, rendering, ui};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 600,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config from the path given as first argument, or defaults
fn load_config() -> LifeConfig {
    let Some(path) = std::env::args().nth(1) else {
        return LifeConfig::default();
    };
    match LifeConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "falling back to default config");
            LifeConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config();
    let mut controller = match config.build_controller() {
        Ok(controller) => controller,
        Err(err) => {
            error!(%err, "invalid config, using defaults");
            match LifeConfig::default().build_controller() {
                Ok(controller) => controller,
                Err(err) => {
                    error!(%err, "default config failed");
                    return;
                }
            }
        }
    };
    let (rows, cols) = controller.simulation().dimensions();
    info!(
        rows,
        cols,
        interval_ms = controller.ticker().interval().as_millis() as u64,
        rule = controller.simulation().rule().name(),
        "starting simulation"
    );

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        if let Some(command) = input::process_button_clicks(&buttons, mouse_pos) {
            controller.handle(command);
        }
        for command in input::process_keyboard_input(controller.ticker().interval()) {
            controller.handle(command);
        }
        controller.handle(input::frame_tick());

        rendering::clear();
        rendering::draw_board(controller.simulation().current_state(), ui::board_area());
        rendering::draw_controls(&controller, &buttons, mouse_pos);

        next_frame().await;
    }
}
