//! Axe - headless demo
//!
//! Runs the demo scene for a fixed number of steps and logs what happened.

use axe::config::AppConfig;
use axe::demo::DemoScene;
use axe::systems::SimulationSystem;

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.debug.log_level))
        .init();
    log::info!("Starting Axe demo");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut scene = match DemoScene::new(&config) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build demo scene: {}", e);
            std::process::exit(1);
        }
    };

    let mut simulation = SimulationSystem::new().with_max_dt(config.simulation.max_dt);
    let frames = config.simulation.frames;
    let dt = config.simulation.fixed_dt;
    log::info!("Running {} frames of {:.4}s", frames, dt);

    let summary = scene.run(&mut simulation, frames, dt);

    log::info!(
        "Simulated {:.2}s over {} frames: {} bursts, {} particles emitted",
        summary.elapsed,
        summary.frames,
        summary.bursts,
        summary.emitted
    );
    log::info!(
        "Peak {} live particles, peak {} sounds, camera at ({:.1}, {:.1})",
        summary.peak_particles,
        summary.peak_sounds,
        summary.camera_center.x,
        summary.camera_center.y
    );

    scene.audio.dispose();
}
