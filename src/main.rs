use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod content;
mod state;
mod ui;

use state::AppState;
use ui::backdrop::BackdropField;
use ui::ui_system;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SAA Recovery - Three Circles".into(),
                resolution: (1280., 900.).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .init_resource::<AppState>()
        .init_resource::<BackdropField>()
        .add_systems(Startup, setup)
        .add_systems(Update, ui_system)
        .run();
}

fn setup(
    mut commands: Commands,
    mut state: ResMut<AppState>,
    mut field: ResMut<BackdropField>,
) {
    commands.spawn(Camera2d);
    *state = AppState::new();

    // Streaks are rolled once here, never per frame. A configured seed
    // reproduces the same scattering across launches.
    let mut rng = match state.config.backdrop_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    *field = BackdropField::generate(&mut rng);

    info!(
        streaks = field.streaks.len(),
        seeded = state.config.backdrop_seed.is_some(),
        "three circles ready"
    );
}
