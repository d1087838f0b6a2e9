// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cynthia CLI - builds a small demo building and writes it as Wavefront OBJ.
//!
//! The building is a rectangular floorplan with a stack of floors, a gable
//! roof, a row of windows on the front wall of every storey, a door and a
//! balcony on the back wall, and a straight stair inside.
//!
//! # Environment
//!
//! - `CYNTHIA_OUTPUT` - OBJ file to write (default `building.obj`)
//! - `CYNTHIA_FLOORS` - number of storeys (default 2)
//! - `CYNTHIA_WINDOWS_PER_FLOOR` - windows per storey (default 3)
//! - `RUST_LOG` - log filter (default `info,cynthia_engine=debug`)

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use cynthia_engine::{ElementKind, Engine, HostKey, MemorySink};
use cynthia_geometry::{ObjWriter, Point3, Region, Vector3, WallFace};

mod config;

use config::Config;

const WIDTH: f64 = 10.0;
const LENGTH: f64 = 8.0;
const WINDOW_WIDTH: f64 = 1.2;
const WINDOW_HEIGHT: f64 = 1.4;
const SILL: f64 = 0.9;
const WELD_TOLERANCE: f64 = 1e-6;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,cynthia_engine=debug".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        output = %config.output,
        floors = config.floors,
        windows_per_floor = config.windows_per_floor,
        "Building demo"
    );

    let mut engine = Engine::new(MemorySink::new());
    let house = engine.create_host("House");
    build(&mut engine, house, &config)?;
    export(&engine, house, &config.output)?;

    tracing::info!(
        elements = engine.list(house)?.len(),
        meshes = engine.sink().len(),
        "Wrote {}",
        config.output
    );
    Ok(())
}

fn build(engine: &mut Engine<MemorySink>, house: HostKey, config: &Config) -> Result<()> {
    let plan = engine.add(house, ElementKind::Floorplan)?;
    engine.edit(plan, |batch| {
        batch.set("width", WIDTH)?;
        batch.set("length", LENGTH)?;
        Ok(())
    })?;

    let floors = engine.add(house, ElementKind::Floors)?;
    engine.set(floors, "floor_count", config.floors)?;
    let storey = engine
        .get(floors, "floor_height")?
        .as_real()
        .zip(engine.get(floors, "slab_thickness")?.as_real())
        .map(|(height, slab)| (height + slab, slab))
        .context("floors record has no storey height")?;

    let roof = engine.add(house, ElementKind::Roof)?;
    engine.set(roof, "type", "GABLE")?;

    // Front wall faces -Y
    let front = -LENGTH / 2.0;
    let count = config.windows_per_floor.max(1);
    let bay = WIDTH / count as f64;
    for level in 0..config.floors.max(1) {
        let sill = level as f64 * storey.0 + storey.1 + SILL;
        for i in 0..config.windows_per_floor {
            let x = -WIDTH / 2.0 + bay * (i as f64 + 0.5) - WINDOW_WIDTH / 2.0;
            let wall = WallFace::facing(
                Point3::new(x, front, sill),
                -Vector3::y(),
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
            )?;
            let window = engine.add_with_region(house, ElementKind::Window, Region::Wall(wall))?;
            if level > 0 {
                engine.edit(window, |batch| {
                    batch.set("type", "ARCHED")?;
                    batch.set("fill", "PANE")?;
                    batch.set("arch.height", 0.3)?;
                    Ok(())
                })?;
            }
        }
    }

    // Back wall faces +Y; its bottom-left corner seen from outside is at +X
    let back = LENGTH / 2.0;
    let door = WallFace::facing(Point3::new(0.5, back, storey.1), Vector3::y(), 1.0, 2.1)?;
    engine.add_with_region(house, ElementKind::Door, Region::Wall(door))?;

    if config.floors > 1 {
        let base = storey.0 + storey.1;
        let balcony = WallFace::facing(Point3::new(1.0, back, base), Vector3::y(), 2.0, 2.2)?;
        let balcony = engine.add_with_region(house, ElementKind::Balcony, Region::Wall(balcony))?;
        engine.set(balcony, "width", 2.0)?;
    }

    let stairs = engine.add_with_region(
        house,
        ElementKind::Stairs,
        Region::Point {
            origin: Point3::new(-WIDTH / 2.0 + 0.6, -1.0, storey.1),
            direction: Vector3::x(),
        },
    )?;
    engine.edit(stairs, |batch| {
        batch.set("total_rise", storey.0)?;
        batch.set("step_count", 15)?;
        batch.set("total_run", 4.0)?;
        Ok(())
    })?;

    Ok(())
}

fn export(engine: &Engine<MemorySink>, house: HostKey, path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ObjWriter::new(BufWriter::new(file))?;

    for entry in engine.list(house)? {
        let Some(generated) = engine.mesh(entry.id)? else {
            tracing::warn!(element = %entry.name, "no mesh; skipped");
            continue;
        };
        let mut mesh = generated.mesh.clone();
        let merged = mesh.weld(WELD_TOLERANCE);
        tracing::debug!(element = %entry.name, merged, "welded");
        writer.write_mesh(&entry.name, &mesh)?;
    }

    writer.finish()?;
    Ok(())
}
