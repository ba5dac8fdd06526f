//! Day/night demo.
//!
//! Fades daylight in, holds, fades it out, holds, on a loop. The sequence is
//! read from the JSON manifest given as the first argument, or from the
//! built-in one. Run with `RUST_LOG=debug` to see sequence traffic.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use gameroots_tween::*;

const DEFAULT_MANIFEST: &str = r#"{ "sequence": { "loop": true, "tweens": [
    { "linear": { "start": 0.0, "end": 1.0, "delta": 0.1, "interval": "50 ms" } },
    { "delay": { "delay": "1 s" } },
    { "linear": { "start": 1.0, "end": 0.0, "delta": -0.1, "interval": "50 ms" } },
    { "delay": { "delay": "1 s" } }
] } }"#;

/// Stop after this many wall-clock seconds.
const RUN_FOR: Duration = Duration::from_secs(6);
const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manifest = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => DEFAULT_MANIFEST.to_string(),
    };

    let mut tween = TweenDef::from_json(&manifest)?.build()?;
    let Some(seq) = tween.as_sequence_mut() else {
        bail!("manifest must describe a sequence");
    };

    let daylight = Rc::new(Cell::new(0.0_f32));
    for index in 0..seq.len() {
        let Some(child) = seq.get_mut(index) else { continue };
        let sink = daylight.clone();
        let hooked = child.set_callback(move |e: TweenEvent| match e {
            TweenEvent::Start { time, .. } => {
                log::info!("{:>6.2}s phase {} begins", nanos_to_secs(time), index);
            }
            TweenEvent::Update { value, .. } if !value.is_nan() => sink.set(value),
            _ => {}
        });
        if !hooked {
            log::debug!("phase {} takes no callbacks", index);
        }
    }

    let clock = Instant::now();
    while clock.elapsed() < RUN_FOR && !tween.is_done() {
        let now = clock.elapsed().as_nanos() as Timestamp;
        tween.update(now);
        if tween.is_updated() {
            log::info!("{:>6.2}s daylight {:.1}", nanos_to_secs(now), daylight.get());
        }
        std::thread::sleep(FRAME);
    }

    log::info!("stopped with daylight at {:.1}", daylight.get());
    Ok(())
}
