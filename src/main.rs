//! Ladder Kong entry point
//!
//! Headless runner: plays a scripted session and logs what happened.
//! Usage: `ladder-kong [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
use ladder_kong::consts::FRAME_DT;
#[cfg(not(target_arch = "wasm32"))]
use ladder_kong::sim::{GameState, SpawnSink, TickInput, tick};
#[cfg(not(target_arch = "wasm32"))]
use ladder_kong::Tuning;

/// Counts and logs barrel spawns
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct LogSpawner {
    count: u32,
}

#[cfg(not(target_arch = "wasm32"))]
impl SpawnSink for LogSpawner {
    fn spawn_projectile(&mut self, at: glam::Vec2) {
        self.count += 1;
        log::info!("Barrel #{} at ({:.0}, {:.0})", self.count, at.x, at.y);
    }
}

#[cfg(not(target_arch = "wasm32"))]
enum LoadError {
    Io(std::io::Error),
    Tuning(ladder_kong::TuningError),
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<Tuning, LoadError> {
    let json = std::fs::read_to_string(path).map_err(LoadError::Io)?;
    Tuning::from_json(&json).map_err(LoadError::Tuning)
}

/// Scripted intent: walk to the first ladder, then climb it
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(state: &GameState) -> TickInput {
    let ladder = state.level.ladders().first().copied();
    let Some(ladder) = ladder else {
        return TickInput::default();
    };
    let centre = state.player.rect().center_x();
    if !state.player.climbing && (centre < ladder.left() + 5.0 || centre > ladder.right() - 5.0) {
        TickInput {
            move_x: (ladder.center_x() - centre).signum(),
            ..Default::default()
        }
    } else {
        TickInput {
            move_y: -1.0,
            wants_climb: true,
            ..Default::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ladder Kong (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(LoadError::Io(e)) => {
                log::error!("Cannot read tuning file {}: {}", path, e);
                std::process::exit(1);
            }
            Err(LoadError::Tuning(e)) => {
                log::error!("Rejected tuning file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = 0x5eed;
    let mut state = GameState::new(tuning, seed);
    let mut spawner = LogSpawner::default();
    let mut resets = 0;

    // Ten seconds at 60 Hz
    for _ in 0..600 {
        let input = scripted_input(&state);
        let dt = state.tuning.clamp_dt(FRAME_DT);
        let report = tick(&mut state, &input, dt, &mut spawner);
        if report.player_reset {
            resets += 1;
        }
    }

    log::info!(
        "Done after {} ticks: player at ({:.1}, {:.1}), climbing={}, {} barrels, {} resets",
        state.time_ticks,
        state.player.x(),
        state.player.y(),
        state.player.climbing,
        spawner.count,
        resets
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend; the library is driven by the embedding page
}
