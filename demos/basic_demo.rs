//! Basic demonstration of the Hexpanse territory simulation.
//!
//! Run with: cargo run --example basic_demo

use hexpanse::{SimConfig, SimWorld};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Hexpanse - Territory Simulation Demo ===\n");

    let config = SimConfig::default();
    let mut sim = match SimWorld::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("failed to build simulation: {err}");
            return;
        }
    };

    let map = sim.map_snapshot();
    let spawns = sim.spawn_placement();
    println!(
        "Map {}x{} with {} water cells",
        map.width,
        map.height,
        map.terrain.iter().filter(|&&t| t == 1).count()
    );
    println!(
        "Spawns at ({}, {}) and ({}, {}), hex distance {} (constraint met: {})\n",
        spawns.first.x,
        spawns.first.y,
        spawns.second.x,
        spawns.second.y,
        spawns.distance,
        spawns.constraint_met
    );

    // Run 60 seconds of simulation at 20 frames per second.
    println!("Running for 60 seconds of simulated time...\n");
    for frame in 0..1200 {
        sim.step(0.05);

        if (frame + 1) % 200 == 0 {
            print_state(&mut sim);
        }
    }

    println!("\n=== Final State (JSON) ===\n");
    println!("{}", sim.snapshot().to_json_pretty().unwrap());
}

fn print_state(sim: &mut SimWorld) {
    let snapshot = sim.snapshot();
    println!(
        "--- Tick {} (t={:.1}s) ---",
        snapshot.tick, snapshot.time
    );
    for bot in &snapshot.bots {
        let owned = snapshot.owned_counts.get(&bot.faction).copied().unwrap_or(0);
        println!(
            "  Faction {}: at ({}, {}), {} cells owned, next step in {:.1}s",
            bot.faction, bot.x, bot.y, owned, bot.time_to_next
        );
    }
}
