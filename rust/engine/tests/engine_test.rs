// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use cynthia_engine::{ElementKind, Engine, EngineConfig, Error, HostKey, MemorySink, Value};
use cynthia_geometry::{Region, WallFace};

fn engine() -> (Engine<MemorySink>, HostKey) {
    let mut engine = Engine::with_config(MemorySink::new(), EngineConfig::builtin());
    let host = engine.create_host("House");
    (engine, host)
}

#[test]
fn removing_a_missing_element_leaves_the_list_alone() {
    let (mut engine, host) = engine();
    let window = engine.add(host, ElementKind::Window).unwrap();
    engine.add(host, ElementKind::Door).unwrap();
    engine.remove(window).unwrap();

    let before = engine.list(host).unwrap();
    assert_eq!(engine.remove(window), Err(Error::NotFound(window)));
    assert_eq!(engine.list(host).unwrap(), before);
    assert!(engine.sink().get(window).is_none());
}

#[test]
fn failed_generation_keeps_the_previous_mesh() {
    let (mut engine, host) = engine();
    let window = engine.add(host, ElementKind::Window).unwrap();
    let before = engine.mesh(window).unwrap().cloned().unwrap();

    // Frame members wider than half the 1 x 1 opening
    let err = engine.set(window, "frame_thickness", 0.6).unwrap_err();
    assert!(matches!(err, Error::Generation(_)), "{err}");

    assert_eq!(engine.get(window, "frame_thickness").unwrap(), Value::Real(0.6));
    assert_eq!(engine.mesh(window).unwrap(), Some(&before));
    assert_eq!(engine.sink().get(window), Some(&before));
    assert_eq!(engine.regeneration_count(window).unwrap(), 1);

    // The next valid edit recovers
    engine.set(window, "frame_thickness", 0.05).unwrap();
    assert_ne!(engine.mesh(window).unwrap(), Some(&before));
}

#[test]
fn set_then_get_returns_the_clamped_value() {
    let (mut engine, host) = engine();
    let window = engine.add(host, ElementKind::Window).unwrap();

    assert_eq!(engine.set(window, "arch.resolution", 5000).unwrap(), Value::Int(5));
    assert_eq!(engine.get(window, "arch.resolution").unwrap(), Value::Int(1000));

    engine.set(window, "pane_depth", 0.25).unwrap();
    assert_eq!(engine.get(window, "pane_depth").unwrap(), Value::Real(0.25));
}

#[test]
fn rejected_writes_change_nothing() {
    let (mut engine, host) = engine();
    let window = engine.add(host, ElementKind::Window).unwrap();

    let err = engine.set(window, "type", "ROUND").unwrap_err();
    assert!(matches!(err, Error::Config(cynthia_core::Error::InvalidValue { .. })));
    assert_eq!(engine.get(window, "type").unwrap(), Value::Enum("BASIC".into()));
    assert_eq!(engine.regeneration_count(window).unwrap(), 1);
}

#[test]
fn unchanged_writes_do_not_regenerate() {
    let (mut engine, host) = engine();
    let window = engine.add(host, ElementKind::Window).unwrap();
    let replacements = engine.sink().replacements();

    engine.set(window, "horizontal_panes", 1).unwrap();
    assert_eq!(engine.regeneration_count(window).unwrap(), 1);
    assert_eq!(engine.sink().replacements(), replacements);
}

#[test]
fn toggles_preserve_gated_values() {
    let (mut engine, host) = engine();
    let window = engine.add(host, ElementKind::Window).unwrap();

    engine.set(window, "type", "ARCHED").unwrap();
    engine.set(window, "arch.height", 0.3).unwrap();
    engine.set(window, "type", "BASIC").unwrap();
    engine.set(window, "type", "ARCHED").unwrap();
    assert_eq!(engine.get(window, "arch.height").unwrap(), Value::Real(0.3));
}

#[test]
fn manual_generation_is_idempotent() {
    let (mut engine, host) = engine();
    let window = engine.add(host, ElementKind::Window).unwrap();
    engine.set(window, "type", "ARCHED").unwrap();

    let first = engine.generate(window).unwrap();
    let second = engine.generate(window).unwrap();
    assert_eq!(first, second);
}

#[test]
fn floorplan_edits_reach_floors_and_roof() {
    let (mut engine, host) = engine();
    let plan = engine.add(host, ElementKind::Floorplan).unwrap();
    let floors = engine.add(host, ElementKind::Floors).unwrap();
    let roof = engine.add(host, ElementKind::Roof).unwrap();
    let window = engine.add(host, ElementKind::Window).unwrap();

    let floors_before = engine.regeneration_count(floors).unwrap();
    let roof_before = engine.regeneration_count(roof).unwrap();
    let window_before = engine.regeneration_count(window).unwrap();

    engine.set(plan, "width", 8.0).unwrap();

    assert_eq!(engine.regeneration_count(floors).unwrap(), floors_before + 1);
    assert_eq!(engine.regeneration_count(roof).unwrap(), roof_before + 1);
    assert_eq!(engine.regeneration_count(window).unwrap(), window_before);

    let (min, max) = engine.mesh(roof).unwrap().unwrap().mesh.bounds().unwrap();
    // Default 0.1 overhang
    assert_relative_eq!(max.x - min.x, 8.2, epsilon = 1e-9);
    // One default storey of 2.5 plus its 0.2 slab below
    assert_relative_eq!(min.z, 2.7, epsilon = 1e-9);
}

#[test]
fn floor_count_lifts_the_roof() {
    let (mut engine, host) = engine();
    engine.add(host, ElementKind::Floorplan).unwrap();
    let floors = engine.add(host, ElementKind::Floors).unwrap();
    let roof = engine.add(host, ElementKind::Roof).unwrap();

    let before = engine.regeneration_count(floors).unwrap();
    engine.set(floors, "floor_count", 3).unwrap();
    assert_eq!(engine.regeneration_count(floors).unwrap(), before + 1);

    let total = engine.get(floors, "total_height").unwrap().as_real().unwrap();
    assert_relative_eq!(total, 3.0 * 2.7, epsilon = 1e-9);
    let (min, _) = engine.mesh(roof).unwrap().unwrap().mesh.bounds().unwrap();
    assert_relative_eq!(min.z, total, epsilon = 1e-9);

    // Without floors the roof sits on the ground
    engine.remove(floors).unwrap();
    let (min, _) = engine.mesh(roof).unwrap().unwrap().mesh.bounds().unwrap();
    assert_relative_eq!(min.z, 0.0, epsilon = 1e-9);
}

#[test]
fn derived_fields_are_stored_without_another_pass() {
    let (mut engine, host) = engine();
    let stairs = engine.add(host, ElementKind::Stairs).unwrap();
    assert_eq!(engine.regeneration_count(stairs).unwrap(), 1);
    assert_eq!(engine.get(stairs, "step_height").unwrap(), Value::Real(0.25));

    engine.set(stairs, "step_count", 5).unwrap();
    assert_eq!(engine.regeneration_count(stairs).unwrap(), 2);
    assert_eq!(engine.get(stairs, "step_height").unwrap(), Value::Real(0.5));
    assert_eq!(engine.get(stairs, "step_depth").unwrap(), Value::Real(0.6));
}

#[test]
fn singletons_are_added_once() {
    let (mut engine, host) = engine();
    let plan = engine.add(host, ElementKind::Floorplan).unwrap();
    engine.add(host, ElementKind::Window).unwrap();

    assert_eq!(engine.add(host, ElementKind::Floorplan).unwrap(), plan);
    assert_eq!(engine.list(host).unwrap().len(), 2);
    assert_eq!(engine.active(host).unwrap(), Some(plan));
    assert_eq!(engine.regeneration_count(plan).unwrap(), 1);
}

#[test]
fn selection_follows_adds_and_removes() {
    let (mut engine, host) = engine();
    assert_eq!(engine.active(host).unwrap(), None);

    let first = engine.add(host, ElementKind::Window).unwrap();
    let second = engine.add(host, ElementKind::Door).unwrap();
    assert_eq!(engine.active(host).unwrap(), Some(second));

    engine.select(first).unwrap();
    assert_eq!(engine.active(host).unwrap(), Some(first));

    engine.remove(second).unwrap();
    assert_eq!(engine.active(host).unwrap(), Some(first));
    assert_eq!(engine.select(second), Err(Error::NotFound(second)));

    engine.remove(first).unwrap();
    assert_eq!(engine.active(host).unwrap(), None);
}

#[test]
fn placed_elements_use_their_region() {
    let (mut engine, host) = engine();
    let wall = WallFace::upright(2.0, 1.5).unwrap();
    let window = engine
        .add_with_region(host, ElementKind::Window, Region::Wall(wall))
        .unwrap();

    let (min, max) = engine.mesh(window).unwrap().unwrap().mesh.bounds().unwrap();
    assert_relative_eq!(max.x - min.x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(max.z - min.z, 1.5, epsilon = 1e-9);

    engine
        .set_region(window, Region::Wall(WallFace::upright(0.5, 0.5).unwrap()))
        .unwrap();
    let (min, max) = engine.mesh(window).unwrap().unwrap().mesh.bounds().unwrap();
    assert_relative_eq!(max.x - min.x, 0.5, epsilon = 1e-9);
    assert_eq!(engine.regeneration_count(window).unwrap(), 2);
}

#[test]
fn destroying_a_host_discards_its_meshes() {
    let (mut engine, host) = engine();
    let other = engine.create_host("Shed");
    engine.add(host, ElementKind::Window).unwrap();
    engine.add(host, ElementKind::Stairs).unwrap();
    let kept = engine.add(other, ElementKind::Door).unwrap();

    engine.destroy_host(host).unwrap();
    assert_eq!(engine.sink().len(), 1);
    assert!(engine.sink().get(kept).is_some());
    assert_eq!(engine.list(host), Err(Error::HostNotFound(host)));
}

#[test]
fn catalog_lists_every_window_field() {
    let (engine, _) = engine();
    let catalog = engine.catalog(ElementKind::Window);
    let paths: Vec<String> = catalog.iter().map(|(path, _)| path.to_string()).collect();

    assert_eq!(paths.len(), 23);
    assert!(paths.contains(&"arch.resolution".to_string()));
    assert!(paths.contains(&"split.offset_x".to_string()));
    assert!(paths.contains(&"mat_glass".to_string()));
}

#[test]
fn renamed_entries_keep_their_place() {
    let (mut engine, host) = engine();
    engine.add(host, ElementKind::Window).unwrap();
    let door = engine.add(host, ElementKind::Door).unwrap();
    engine.rename(door, "Front Door").unwrap();

    let names: Vec<String> = engine.list(host).unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["Window", "Front Door"]);
    assert_eq!(engine.kind(door).unwrap(), ElementKind::Door);
}
