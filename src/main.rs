//! Aberred Locomotion main entry point.
//!
//! A third-person character locomotion demo written in Rust using:
//! - **raylib** for windowing, input and 3D drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (window size, locomotion tuning)
//! 2. Build the ECS world, spawn the character and register input observers
//! 3. Each frame:
//!    - Poll the keyboard and emit move/run input events
//!    - Run rotation, animation, gravity and motion steps
//!    - Follow the character with the camera and render
//!
//! With `--replay <PATH>` no window is opened: the JSON input script is run
//! at a fixed frame time and the final character state is printed as JSON.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run -- --replay demos/walk_then_run.json
//! ```

use aberred_locomotion::character::{self, CharacterSnapshot, LocomotionError};
use aberred_locomotion::resources::camera3d::Camera3DRes;
use aberred_locomotion::resources::gameconfig::GameConfig;
use aberred_locomotion::resources::input::{InputEdges, LocomotionBindings};
use aberred_locomotion::resources::inputscript::InputScript;
use aberred_locomotion::resources::worldtime::WorldTime;
use aberred_locomotion::replay::run_script;
use aberred_locomotion::systems::input::poll_locomotion_input;
use aberred_locomotion::systems::locomotion::add_locomotion_systems;
use aberred_locomotion::systems::render::{camera_follow, render_hud, render_pass};
use aberred_locomotion::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::{Path, PathBuf};

/// Aberred Locomotion
#[derive(Parser)]
#[command(version, about = "Third-person walk/run locomotion on the Aberred Engine stack")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Run a JSON input script headless and print the final state.
    #[arg(long, value_name = "PATH")]
    replay: Option<PathBuf>,

    /// Fixed frame time in seconds for replays.
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    dt: f32,
}

fn build_world(config: GameConfig) -> Result<(World, Entity), LocomotionError> {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config);
    world.insert_resource(LocomotionBindings::default());
    world.insert_resource(InputEdges::default());

    character::register_locomotion_observers(&mut world);
    let player = character::spawn_character(&mut world, Vector3::new(0.0, 0.0, 0.0));
    character::start(&mut world, player)?;
    Ok((world, player))
}

fn run_headless(
    config: GameConfig,
    script_path: &Path,
    dt: f32,
) -> Result<CharacterSnapshot, LocomotionError> {
    let script = InputScript::load_from_file(script_path)?;
    let (mut world, player) = build_world(config)?;
    let mut update = Schedule::default();
    add_locomotion_systems(&mut update);
    run_script(&mut world, &mut update, player, &script, dt)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // Early-exit: headless replay (no window needed)
    if let Some(script_path) = cli.replay {
        match run_headless(config, &script_path, cli.dt) {
            Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Hello, world! This is Aberred Locomotion!");
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let target_fps = config.target_fps;

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Aberred Locomotion")
        .build();
    rl.set_target_fps(target_fps);

    // --------------- ECS world + resources ---------------
    let (mut world, player) = build_world(config).expect("Failed to set up the player character");
    world.insert_resource(Camera3DRes::new(Vector3::new(0.0, 1.0, 0.0)));
    log::info!("Player entity: {:?}", player);

    let mut update = Schedule::default();
    add_locomotion_systems(&mut update);
    update.add_systems(camera_follow);

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        poll_locomotion_input(&mut world, &rl);
        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        let camera = world.resource::<Camera3DRes>().camera;
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        {
            let mut d3 = d.begin_mode3D(camera);
            render_pass(&mut world, &mut d3);
        }
        render_hud(&mut world, &mut d);
    }
}
