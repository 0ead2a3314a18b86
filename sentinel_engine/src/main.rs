#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Sentinel **
//! Keycard-and-puzzle adventure engine

use sentinel_engine::config::load_config;
use sentinel_engine::data_paths::data_path;
use sentinel_engine::style::GameStyle;
use sentinel_engine::{View, ViewItem, WorldObject, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;

use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    let config = load_config(&data_path("config.toml")).context("while loading engine config")?;
    info!("Start: loading Sentinel world...");
    let mut world = load_world(&config).context("while loading SentinelWorld")?;
    info!("SentinelWorld \"{}\" loaded successfully.", world.title);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("flushing stdout")?;
    info!("Starting the game!");

    println!("{:^84}", world.title.to_uppercase().bright_yellow().underline());
    println!(
        "\nYou are {}, {}\n",
        world.player.name().bold().bright_blue(),
        world.player.description().description_style()
    );

    let mut view = View::new();
    view.push(ViewItem::TransitionMessage(world.intro.clone()));
    world
        .player_room_ref()?
        .show(&world, &mut view)
        .context("describing the starting room")?;
    view.flush();

    run_repl(&mut world, &config);
    Ok(())
}
