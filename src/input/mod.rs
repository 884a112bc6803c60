use macroquad::prelude::*;

use crate::application::{Clock, LifeEngine};
use crate::ui::{BUTTON_CLEAR, BUTTON_RUN, BUTTON_SEED, Button, GridLayout};

/// A user action forwarded to the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    ToggleRunning,
    Clear,
    Seed,
    EditCell { row: usize, col: usize },
}

/// Intent bound to a control button
pub fn button_intent(index: usize) -> Option<Intent> {
    match index {
        BUTTON_RUN => Some(Intent::ToggleRunning),
        BUTTON_CLEAR => Some(Intent::Clear),
        BUTTON_SEED => Some(Intent::Seed),
        _ => None,
    }
}

/// Intent for a left click at `mouse_pos`, if it lands on the grid
pub fn click_intent(layout: &GridLayout, mouse_pos: (f32, f32)) -> Option<Intent> {
    layout
        .cell_at(mouse_pos)
        .map(|(row, col)| Intent::EditCell { row, col })
}

/// Gather this frame's intents from buttons, grid clicks and keyboard
pub fn collect_intents(
    buttons: &[Button],
    layout: &GridLayout,
    mouse_pos: (f32, f32),
) -> Vec<Intent> {
    let clicked = buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .filter_map(|(idx, _)| button_intent(idx));

    let edit = is_mouse_button_pressed(MouseButton::Left)
        .then(|| click_intent(layout, mouse_pos))
        .flatten();

    let keys: [(KeyCode, Intent); 3] = [
        (KeyCode::Space, Intent::ToggleRunning),
        (KeyCode::C, Intent::Clear),
        (KeyCode::R, Intent::Seed),
    ];
    let pressed = keys
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, intent)| intent);

    clicked.chain(edit).chain(pressed).collect()
}

/// Forward an intent to the engine's controller
pub fn dispatch<C: Clock>(engine: &mut LifeEngine<C>, intent: Intent) {
    match intent {
        Intent::ToggleRunning => engine.toggle_running(),
        Intent::Clear => engine.clear(),
        Intent::Seed => engine.seed(),
        Intent::EditCell { row, col } => engine.edit_cell(row, col),
    }
}
