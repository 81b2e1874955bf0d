use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use gesture_orrery_core::{
    GestureSession, Landmark, ObservedFrame, Recording, SolarSystem, LANDMARKS_PER_HAND,
};
use tracing_subscriber::EnvFilter;

fn main() -> gesture_orrery_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { input } => run_replay(&input),
        Commands::Demo => run_demo(),
        Commands::Planets => run_planets(),
    }
}

fn run_replay(input: &PathBuf) -> gesture_orrery_core::Result<()> {
    tracing::info!(?input, "replaying landmark recording");

    let recording = Recording::load(input)?;
    let mut session = GestureSession::new();

    let mut processed = 0usize;
    let mut dispatched = 0usize;
    for frame in &recording.frames {
        let now = Duration::from_secs_f32(frame.time.max(0.0));
        let Some(tick) = session.process(&frame.to_observed(), now)? else {
            continue;
        };
        processed += 1;

        if let Some(action) = tick.action {
            dispatched += 1;
            tracing::info!(
                time = frame.time,
                gesture = %tick.gesture,
                ?action,
                planet = session.active_planet_name(),
                "action dispatched"
            );
        }
    }

    let view = session.view();
    tracing::info!(
        frames = recording.frames.len(),
        processed,
        dispatched,
        planet = session.active_planet_name(),
        overview = view.overview(),
        zoom = view.zoom(),
        speed = view.speed(),
        "replay finished"
    );
    Ok(())
}

fn run_demo() -> gesture_orrery_core::Result<()> {
    tracing::info!("running the scripted gesture demo");

    let mut session = GestureSession::new();

    // (seconds, fingers extended): a held open hand, a held fist and two
    // victory signs, one of which lands inside the cooldown window.
    let script: &[(f64, Option<[bool; 5]>)] = &[
        (0.00, Some(OPEN)),
        (0.10, Some(OPEN)),
        (0.20, Some(OPEN)),
        (0.40, None),
        (1.30, Some(OPEN)),
        (1.50, Some(FIST)),
        (1.55, Some(FIST)),
        (1.60, Some(FIST)),
        (2.80, Some(VICTORY)),
        (3.00, Some(VICTORY)),
        (4.10, Some(VICTORY)),
    ];

    for &(time, fingers) in script {
        let frame = ObservedFrame {
            source_time: time,
            hand: fingers.map(sim_hand),
        };
        let Some(tick) = session.process(&frame, Duration::from_secs_f64(time))? else {
            continue;
        };

        match tick.action {
            Some(action) => tracing::info!(
                time,
                gesture = %tick.gesture,
                ?action,
                planet = session.active_planet_name(),
                "action dispatched"
            ),
            None => tracing::debug!(time, gesture = %tick.gesture, "no action"),
        }
    }

    let view = session.view();
    tracing::info!(
        planet = session.active_planet_name(),
        overview = view.overview(),
        zoom = view.zoom(),
        "demo finished"
    );
    Ok(())
}

fn run_planets() -> gesture_orrery_core::Result<()> {
    let catalog = SolarSystem::standard();

    for (idx, body) in catalog.bodies().iter().enumerate() {
        let role = if idx == 0 { "star" } else { "planet" };
        println!(
            "{:>2}  {:<8} {:<7} distance {:>5.1}  {}",
            idx, body.name, role, body.distance, body.description
        );
        for moon in &body.moons {
            println!("    - {:<8} moon    {}", moon.name, moon.description);
        }
    }
    Ok(())
}

const OPEN: [bool; 5] = [true; 5];
const FIST: [bool; 5] = [false; 5];
const VICTORY: [bool; 5] = [false, true, true, false, false];

/// Fabricates one hand observation with the given fingers extended, in the
/// same spirit as driving the recognizer from the keyboard when no camera
/// is around. Order: thumb, index, middle, ring, pinky.
fn sim_hand(fingers: [bool; 5]) -> Vec<Landmark> {
    const WRIST: (f32, f32) = (0.5, 0.9);
    const DIRS: [(f32, f32); 5] = [
        (-0.8, -0.6),
        (-0.3, -0.95),
        (0.0, -1.0),
        (0.3, -0.95),
        (0.6, -0.8),
    ];
    const JOINTS: [(usize, usize); 5] = [(4, 2), (8, 6), (12, 10), (16, 14), (20, 18)];

    let mut points = vec![Landmark::new(WRIST.0, WRIST.1, 0.0); LANDMARKS_PER_HAND];
    for (finger, &extended) in fingers.iter().enumerate() {
        let (dx, dy) = DIRS[finger];
        let (tip, joint) = JOINTS[finger];
        let tip_reach = if extended { 0.30 } else { 0.05 };
        points[joint] = Landmark::new(WRIST.0 + dx * 0.15, WRIST.1 + dy * 0.15, 0.0);
        points[tip] = Landmark::new(WRIST.0 + dx * tip_reach, WRIST.1 + dy * tip_reach, 0.0);
    }
    points
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Gesture driven solar system explorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recorded landmark stream through the gesture pipeline.
    Replay {
        /// Path to the JSON landmark recording.
        input: PathBuf,
    },
    /// Drive the pipeline with a built-in scripted gesture sequence.
    Demo,
    /// List the bodies in the solar-system catalog.
    Planets,
}
