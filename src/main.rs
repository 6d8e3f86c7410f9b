//! Paddle Bounce entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively there is no renderer, so the binary runs a headless attract-mode
//! game with the autopilot and logs what happens.
//!
//! Usage: `paddle-bounce [seed] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_bounce::consts::FRAME_DT;
    use paddle_bounce::sim::{GameEvent, GamePhase};
    use paddle_bounce::{Session, Settings};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let frames = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(60 * 60 * 5);

    log::info!("Paddle Bounce (native) starting, seed {seed}");

    let mut session = Session::new(seed, Settings::load());
    session.set_autopilot(true);
    session.start();

    let frame_ms = FRAME_DT as f64 * 1000.0;
    let mut bricks = 0u32;
    for i in 0..frames {
        let out = session.frame(i as f64 * frame_ms);
        for event in &out.events {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks += 1,
                GameEvent::LevelComplete { level, bonus, .. } => {
                    log::info!("Reached level {level} (+{bonus})");
                }
                GameEvent::LifeLost { lives_left, .. } => {
                    log::info!("Ball lost, {lives_left} lives left");
                }
                _ => {}
            }
        }
        if session.phase() == GamePhase::GameOver {
            break;
        }
    }

    let state = session.state();
    println!(
        "Finished after {} ticks: score {}, level {}, lives {}, bricks {}",
        state.time_ticks, state.score, state.level, state.lives, bricks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}
