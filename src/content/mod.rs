//! Content domain: data-driven tuning loaded at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{LocomotionDef, ProbeDef};
pub use loader::{ContentLoadError, load_locomotion_tuning, parse_locomotion};

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

pub const LOCOMOTION_PATH: &str = "assets/data/locomotion.ron";

/// Startup systems that must finish before anything reads tuning.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSet;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_locomotion_tuning.in_set(ContentSet));
    }
}

fn setup_locomotion_tuning(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    let path = Path::new(LOCOMOTION_PATH);
    match load_locomotion_tuning(path) {
        Ok(Some(tuning)) => {
            info!("Loaded locomotion tuning from {}", path.display());
            commands.insert_resource(tuning);
        }
        Ok(None) => {
            warn!(
                "{} not found, using default locomotion tuning",
                path.display()
            );
        }
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
        }
    }
}
