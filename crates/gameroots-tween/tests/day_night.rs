use std::cell::RefCell;
use std::rc::Rc;

use gameroots_tween::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Dawn,
    Day,
    Dusk,
    Night,
}

#[derive(Default)]
struct Sky {
    daylight: f32,
    phases: Vec<Phase>,
}

type Shared = Rc<RefCell<Sky>>;

fn fade(sky: &Shared, phase: Phase, start: f32, end: f32, delta: f32) -> LinearStepTween {
    let sky = sky.clone();
    LinearStepTween::new(start, end, delta, millis_to_nanos(10))
        .unwrap()
        .with_callback(move |e: TweenEvent| {
            let mut sky = sky.borrow_mut();
            match e {
                TweenEvent::Start { .. } => sky.phases.push(phase),
                TweenEvent::Update { value, .. } => sky.daylight = value,
                TweenEvent::End { .. } => {}
            }
        })
}

fn hold(sky: &Shared, phase: Phase) -> DelayTween {
    let sky = sky.clone();
    DelayTween::new(secs_to_nanos(3)).with_callback(move |e: TweenEvent| {
        if let TweenEvent::Start { .. } = e {
            sky.borrow_mut().phases.push(phase);
        }
    })
}

fn day_night(sky: &Shared) -> SequenceTween {
    SequenceTween::new()
        .with(fade(sky, Phase::Dawn, 0.0, 1.0, 0.1))
        .with(hold(sky, Phase::Day))
        .with(fade(sky, Phase::Dusk, 1.0, 0.0, -0.1))
        .with(hold(sky, Phase::Night))
}

/// Steps a fake 60 fps clock.
fn run(seq: &mut SequenceTween, sky: &Shared, until: Timestamp, mut on_frame: impl FnMut(&Sky)) {
    let frame = 16_666_667;
    let mut now = 0;
    while now <= until && !seq.is_done() {
        seq.update(now);
        on_frame(&sky.borrow());
        now += frame;
    }
}

#[test]
fn looping_day_night_cycle() {
    let sky: Shared = Rc::default();
    let mut seq = day_night(&sky).with_loop(true);

    let mut peak: f32 = 0.0;
    run(&mut seq, &sky, secs_to_nanos(20), |sky| peak = peak.max(sky.daylight));

    assert!(!seq.is_done());
    assert_eq!(peak, 1.0);
    let sky = sky.borrow();
    let phases = &sky.phases;
    assert!(phases.len() >= 5, "phases: {phases:?}");
    assert_eq!(
        &phases[..5],
        &[Phase::Dawn, Phase::Day, Phase::Dusk, Phase::Night, Phase::Dawn]
    );
}

#[test]
fn single_pass_ends_in_darkness() {
    let sky: Shared = Rc::default();
    let mut seq = day_night(&sky);

    run(&mut seq, &sky, secs_to_nanos(60), |_| {});

    assert!(seq.is_done());
    assert_eq!(sky.borrow().daylight, 0.0);
    assert_eq!(
        sky.borrow().phases,
        vec![Phase::Dawn, Phase::Day, Phase::Dusk, Phase::Night]
    );
}

#[test]
fn commuting_cycle_runs_backwards() {
    let sky: Shared = Rc::default();
    let mut seq = day_night(&sky).with_commute(true);

    run(&mut seq, &sky, secs_to_nanos(20), |_| {});

    assert!(!seq.is_done());
    let sky = sky.borrow();
    let phases = &sky.phases;
    assert_eq!(
        &phases[..6],
        &[Phase::Dawn, Phase::Day, Phase::Dusk, Phase::Night, Phase::Night, Phase::Dusk]
    );
}

#[test]
fn manifest_drives_the_same_cycle() {
    let json = r#"{ "sequence": { "loop": true, "tweens": [
        { "linear": { "start": 0.0, "end": 1.0, "delta": 0.1, "interval": "10 ms" } },
        { "delay": { "delay": "3 s" } },
        { "linear": { "start": 1.0, "end": 0.0, "delta": -0.1, "interval": "10 ms" } },
        { "delay": { "delay": "3 s" } }
    ] } }"#;

    let daylight = Rc::new(RefCell::new(Vec::new()));
    let mut tween = TweenDef::from_json(json).unwrap().build().unwrap();
    let seq = tween.as_sequence_mut().unwrap();
    for index in [0, 2] {
        let sink = daylight.clone();
        let child = seq.get_mut(index).unwrap();
        assert!(child.set_callback(move |e: TweenEvent| {
            if let TweenEvent::Update { value, .. } = e {
                sink.borrow_mut().push(value);
            }
        }));
    }

    let mut now = 0;
    while now < secs_to_nanos(8) {
        tween.update(now);
        now += millis_to_nanos(11);
    }

    let daylight = daylight.borrow();
    assert!(daylight.contains(&1.0));
    assert_eq!(daylight.last(), Some(&0.0));
}
