//! Easing Curve Demo
//!
//! Prints a sampled table of every easing curve, then runs a delayed transform
//! tween at a fixed 60 Hz and reports where the node ends up.
//!
//! Run with: cargo run -p glide_animation --example curves -- ease_out_bounce
//! Set RUST_LOG=glide_animation=debug to see tween phase transitions.

use glide_animation::{
    Easing, Transform, TransformProperty, TweenConfig, TweenPhase, Tweener, Vec3,
};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 10;
const FRAME: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let curve: Easing = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => Easing::EaseOutBounce,
    };

    print_table();
    run_tween(curve);
    Ok(())
}

fn print_table() {
    print!("{:<22}", "curve");
    for i in 0..=SAMPLES {
        print!("{:>7.1}", i as f32 / SAMPLES as f32);
    }
    println!();

    for curve in Easing::ALL {
        print!("{:<22}", curve.name());
        for i in 0..=SAMPLES {
            print!("{:>7.3}", curve.apply(i as f32 / SAMPLES as f32));
        }
        println!();
    }
}

fn run_tween(curve: Easing) {
    let node = Arc::new(Mutex::new(
        Transform::new().with_parent(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO),
    ));

    let mut tween = Tweener::new()
        .transform(
            TransformProperty::Position,
            TweenConfig::new(0.75).easing(curve).delay(0.25),
            &node,
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        )
        .on_complete(|| tracing::info!("drop finished"));

    let mut frames = 0u32;
    while tween.tick(FRAME) != TweenPhase::Completed {
        frames += 1;
    }

    let node = node.lock().unwrap_or_else(|e| e.into_inner());
    tracing::info!(
        curve = %curve,
        frames = frames + 1,
        position = ?node.position(),
        local = ?node.local_position(),
        "tween settled"
    );
}
