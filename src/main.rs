//! Power Pong headless driver
//!
//! Runs a match without a renderer and logs what happens.
//! Usage: `power-pong [seed] [seconds] [config.json]`

use power_pong::MatchConfig;
use power_pong::consts::SIM_DT_MS;
use power_pong::sim::{GameEvent, MatchState, Side, TickInput, tick};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60);
    let config_path = args.next().unwrap_or_else(|| "power-pong.json".to_string());

    let config = match MatchConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    log::info!("Power Pong (headless) seed={seed} duration={seconds}s");
    let mut state = MatchState::new(seed, config);

    let ticks = seconds * 1000 / u64::from(SIM_DT_MS);
    for n in 0..ticks {
        let input = TickInput {
            launch: n == 0,
            ..Default::default()
        };
        for event in tick(&mut state, &input, SIM_DT_MS) {
            if let GameEvent::Scored { .. } = event {
                log::info!(
                    "Score {} : {}",
                    state.score.readout(Side::Left),
                    state.score.readout(Side::Right)
                );
            }
        }
    }

    println!(
        "Final score {} - {} after {} ticks ({} balls in play)",
        state.score.left,
        state.score.right,
        state.tick_count,
        state.balls.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on wasm
}
