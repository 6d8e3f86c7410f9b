//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use paddle_bounce::Settings;
use paddle_bounce::consts::*;
use paddle_bounce::sim::collision::collide_walls;
use paddle_bounce::sim::{Ball, GameState, TickInput, start, tick};

proptest! {
    #[test]
    fn paddle_never_leaves_field(
        moves in prop::collection::vec((any::<bool>(), any::<bool>()), 1..400),
        paddle_width in 20.0f32..400.0,
    ) {
        let settings = Settings { paddle_width, ..Default::default() };
        let mut state = GameState::new(11, settings);
        start(&mut state);

        for (left, right) in moves {
            tick(&mut state, &TickInput { left, right }, FRAME_DT);
            let x = state.paddle.pos.x;
            prop_assert!(x >= 0.0);
            prop_assert!(x <= state.settings.field_width - state.paddle.width);
        }
    }

    #[test]
    fn wall_reflection_conserves_speed(
        x in -20.0f32..820.0,
        y in -20.0f32..600.0,
        angle in 0.0f32..std::f32::consts::TAU,
        speed in 1.0f32..BALL_MAX_SPEED,
    ) {
        let mut ball = Ball::new(Vec2::new(x, y), speed, BALL_MAX_SPEED);
        ball.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        let before = ball.vel.length();

        collide_walls(&mut ball, FIELD_WIDTH);

        prop_assert!((ball.vel.length() - before).abs() < 1e-3);
        prop_assert!((ball.vel.length() - ball.speed).abs() < 1e-3);
        prop_assert!(ball.pos.x >= ball.radius && ball.pos.x <= FIELD_WIDTH - ball.radius);
        prop_assert!(ball.pos.y >= ball.radius);
    }

    #[test]
    fn life_lost_once_per_loss(ticks_below in 1usize..60, seed in any::<u64>()) {
        let mut state = GameState::new(seed, Settings::default());
        start(&mut state);
        state.ball.pos = Vec2::new(200.0, state.settings.field_height + state.ball.radius + 1.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        for _ in 0..ticks_below {
            tick(&mut state, &TickInput::default(), FRAME_DT);
        }
        prop_assert_eq!(state.lives, INITIAL_LIVES - 1);
    }

    #[test]
    fn speed_stays_consistent_through_play(seed in any::<u64>()) {
        let mut state = GameState::new(seed, Settings::default());
        start(&mut state);

        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), FRAME_DT);
            prop_assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-3);
            prop_assert!(state.ball.speed >= state.settings.initial_ball_speed);
            prop_assert!(state.ball.speed <= state.ball.max_speed);
        }
    }
}
