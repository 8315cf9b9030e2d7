use std::time::Duration;

use macroquad::prelude::*;

use crate::application::Command;
use crate::ui::Button;

const INTERVAL_STEP: Duration = Duration::from_millis(50);

/// Map keys pressed this frame to commands
pub fn process_keyboard_input(interval: Duration) -> Vec<Command> {
    let bindings: [(KeyCode, Command); 4] = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::N, Command::Step),
        (KeyCode::R, Command::Restart),
        (KeyCode::Up, Command::SetInterval(interval.saturating_sub(INTERVAL_STEP))),
    ];

    let mut commands: Vec<Command> = bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect();

    if is_key_pressed(KeyCode::Down) {
        commands.push(Command::SetInterval(interval + INTERVAL_STEP));
    }
    // Digits 1-4 pick a rule
    let digits = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
    commands.extend(
        digits
            .iter()
            .enumerate()
            .filter(|(_, key)| is_key_pressed(**key))
            .map(|(i, _)| Command::SetRule(i)),
    );
    commands
}

/// Map header button clicks to commands, by button order
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Command> {
    buttons
        .iter()
        .position(|btn| btn.is_clicked(mouse_pos))
        .and_then(button_command)
}

/// Command bound to the button at `index` in `ui::create_buttons`
pub fn button_command(index: usize) -> Option<Command> {
    match index {
        0 => Some(Command::Restart),
        1 => Some(Command::TogglePause),
        2 => Some(Command::Step),
        _ => None,
    }
}

/// Frame time as a tick command
pub fn frame_tick() -> Command {
    Command::Tick(Duration::from_secs_f32(get_frame_time().max(0.0)))
}
