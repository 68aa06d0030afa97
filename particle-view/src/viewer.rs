//! Interactive particle swarm viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`ParticleEngine`] and
//! everything the engine leaves to its host: the fixed-cadence tick, pointer
//! and keyboard input, and drawing onto an egui painter.

use eframe::App;
use glam::DVec2;
use log::{debug, info, warn};
use particle_core::{
    ArenaSize, GravityWell, Jitter, ParticleEngine, Rgba, Surface, spawn,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    scenario::ScenarioConfig,
    scheduler::{FixedStep, FpsMeter},
};

/// [`Surface`] over an egui painter, with the arena's origin at `origin`.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }
}

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

impl Surface for EguiSurface<'_> {
    fn fill_background(&mut self, arena: ArenaSize, color: Rgba) {
        let rect = egui::Rect::from_min_size(
            self.origin,
            egui::vec2(arena.width as f32, arena.height as f32),
        );
        self.painter.rect_filled(rect, 0.0, color32(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        let min = self.origin + egui::vec2(x as f32, y as f32);
        let rect = egui::Rect::from_min_size(min, egui::vec2(width as f32, height as f32));
        self.painter.rect_filled(rect, 0.0, color32(color));
    }
}

/// Main application state for the interactive viewer.
///
/// Well 0 of the engine always follows the pointer; wells pinned with
/// Shift+click come after it.
///
/// ### Fields
/// - `engine` - The simulation.
/// - `scenario` - Settings the viewer was started with; reset uses them.
/// - `rng` - Random source for scattering particles and seeding jitter.
/// - `running` - Whether ticks advance automatically.
/// - `interacted` - Set on the first pointer interaction, which removes jitter.
/// - `started` - Set once the first frame has reported the arena size and the
///   swarm has been scattered over it.
/// - `clock` - Converts frame time into simulation ticks.
/// - `fps` - Drawn-frame rate meter.
pub struct Viewer {
    engine: ParticleEngine,
    scenario: ScenarioConfig,
    rng: StdRng,

    running: bool,
    interacted: bool,
    started: bool,

    clock: FixedStep,
    fps: FpsMeter,
}

impl Viewer {
    /// Creates a viewer with an empty engine.
    ///
    /// Nothing is scattered yet: the arena size is only known once the first
    /// frame lays out the central panel, see [`Viewer::sync_arena`].
    ///
    /// ### Parameters
    /// - `scenario` - Validated start-up settings.
    /// - `seed` - Fixed RNG seed, or `None` to seed from the OS.
    pub fn new(scenario: ScenarioConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let clock = FixedStep::new(scenario.tick_seconds());
        let engine =
            ParticleEngine::new(ArenaSize::new(0.0, 0.0)).with_config(scenario.engine);

        Self {
            engine,
            scenario,
            rng,
            running: true,
            interacted: false,
            started: false,
            clock,
            fps: FpsMeter::default(),
        }
    }

    /// Tells the engine the arena's current size. The first call also
    /// populates the simulation via [`Viewer::reset`], so the initial swarm
    /// covers the real panel rather than a guessed size.
    fn sync_arena(&mut self, arena: ArenaSize) {
        self.engine.set_arena(arena);
        if !self.started {
            self.started = true;
            self.reset();
        }
    }

    /// Puts the simulation back to its starting state over the current arena:
    /// fresh particles, the pointer well recentered, pinned wells from the
    /// scenario, and jitter re-armed.
    fn reset(&mut self) {
        let arena = self.engine.arena();
        let center = DVec2::new(arena.width / 2.0, arena.height / 2.0);

        let mut wells = vec![GravityWell::new(center, self.scenario.well_mass)];
        wells.extend(self.scenario.pinned_wells.iter().copied());
        self.engine.set_wells(wells);

        self.engine.clear_metaforces();
        if let Some(jitter) = self.scenario.jitter {
            let seed: u64 = self.rng.random();
            match Jitter::new(jitter, StdRng::seed_from_u64(seed)) {
                Ok(jitter) => self.engine.push_metaforce(jitter),
                Err(e) => warn!("jitter disabled: {e}"),
            }
        }
        self.interacted = false;

        self.scatter();
    }

    /// Replaces every particle with a freshly scattered set.
    fn scatter(&mut self) {
        let particles = spawn::scatter(
            self.scenario.particles,
            self.engine.arena(),
            self.scenario.particle_color,
            &mut self.rng,
        );
        self.engine.set_particles(particles);
    }

    /// Marks the first user interaction; from then on only wells move things.
    fn note_interaction(&mut self) {
        if !self.interacted {
            self.interacted = true;
            self.engine.clear_metaforces();
            info!("first interaction, jitter removed");
        }
    }

    fn move_pointer_well(&mut self, to: DVec2) {
        if let Some(well) = self.engine.wells_mut().first_mut() {
            well.position = to;
        }
    }

    /// Repels while the button is held, attracts otherwise.
    fn set_pointer_pressed(&mut self, pressed: bool) {
        if let Some(well) = self.engine.wells_mut().first_mut() {
            *well = if pressed {
                well.repelling()
            } else {
                well.attracting()
            };
        }
    }

    fn pin_well(&mut self, at: DVec2) {
        debug!("pinning well at {at}");
        self.engine
            .push_well(GravityWell::new(at, self.scenario.well_mass.abs()));
    }

    /// Drops every pinned well, keeping the one under the pointer.
    fn clear_pinned_wells(&mut self) {
        let pointer = self.engine.wells().first().copied();
        self.engine.set_wells(pointer.into_iter().collect());
    }

    fn step_once(&mut self) {
        self.engine.step();
    }

    /// Helper to draw a labeled `f64` [`egui::DragValue`].
    fn labeled_drag_f64(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f64,
        range: std::ops::RangeInclusive<f64>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                    self.clock.reset();
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                if ui.button("Scatter").clicked() {
                    self.scatter();
                }

                if ui.button("Clear wells").clicked() {
                    self.clear_pinned_wells();
                }
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.fps.average() {
                    Some(fps) => ui.label(format!("fps = {fps:.0}")),
                    None => ui.label("fps = -"),
                };
                ui.label(format!("ticks = {}", self.engine.ticks()));
                ui.separator();
                ui.label(format!("particles = {}", self.engine.particles().len()));
                ui.label(format!("wells = {}", self.engine.wells().len()));
                ui.label(format!("metaforces = {}", self.engine.metaforce_count()));
            });
        });
    }

    /// Builds the right-hand panel for engine parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Forces");
                let cfg = self.engine.config_mut();
                Self::labeled_drag_f64(ui, "G:", &mut cfg.gravitational_constant, 0.0..=100.0, 0.1);
                Self::labeled_drag_f64(ui, "force cap:", &mut cfg.force_cap, 0.0..=2.0, 0.005);
                Self::labeled_drag_f64(ui, "friction:", &mut cfg.friction, 0.0..=1.0, 0.001);

                ui.separator();
                ui.label("Particle width");
                Self::labeled_drag_f64(ui, "min:", &mut cfg.width.min, 0.0..=50.0, 0.1);
                let min = cfg.width.min;
                Self::labeled_drag_f64(ui, "max:", &mut cfg.width.max, min..=50.0, 0.1);

                ui.separator();
                ui.label("Timing");
                ui.horizontal(|ui| {
                    ui.label("tick (s):");
                    ui.add(
                        egui::DragValue::new(&mut self.clock.interval)
                            .range(0.001..=1.0)
                            .speed(0.001),
                    );
                });

                ui.separator();
                if ui.button("Reset cfg to scenario").clicked() {
                    *self.engine.config_mut() = self.scenario.engine;
                    self.clock.interval = self.scenario.tick_seconds();
                }
            });
    }

    /// Builds the central panel: arena sizing, input, ticking and drawing.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let response =
                    ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                self.sync_arena(ArenaSize::new(
                    f64::from(rect.width()),
                    f64::from(rect.height()),
                ));

                let (pointer, primary_down, shift, space) = ctx.input(|i| {
                    (
                        i.pointer.latest_pos().filter(|p| rect.contains(*p)),
                        i.pointer.primary_down(),
                        i.modifiers.shift,
                        i.key_pressed(egui::Key::Space),
                    )
                });

                if let Some(p) = pointer {
                    let local = p - rect.min;
                    let world = DVec2::new(f64::from(local.x), f64::from(local.y));
                    self.note_interaction();

                    if response.clicked() && shift {
                        self.pin_well(world);
                    } else {
                        self.move_pointer_well(world);
                    }
                }
                self.set_pointer_pressed(primary_down && pointer.is_some() && !shift);

                if space {
                    self.scatter();
                }

                if self.running {
                    let now = ctx.input(|i| i.time);
                    for _ in 0..self.clock.ticks_due(now) {
                        self.step_once();
                    }
                    ctx.request_repaint();
                }

                self.engine
                    .render(&mut EguiSurface::new(&painter, rect.min));

                // Well markers.
                for (i, well) in self.engine.wells().iter().enumerate() {
                    let center = rect.min
                        + egui::vec2(well.position.x as f32, well.position.y as f32);
                    let color = if well.mass < 0.0 {
                        egui::Color32::from_rgb(0, 120, 255)
                    } else {
                        egui::Color32::DARK_GRAY
                    };
                    let radius = if i == 0 { 6.0 } else { 4.0 };
                    painter.circle_stroke(center, radius, egui::Stroke::new(1.5, color));
                }

                if let Some(avg) = self.fps.record_frame(ctx.input(|i| i.time)) {
                    debug!("average fps {avg:.1}");
                }
            });
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_core::{JitterConfig, RecordingSurface};

    const ARENA: ArenaSize = ArenaSize {
        width: 800.0,
        height: 600.0,
    };

    fn scenario() -> ScenarioConfig {
        ScenarioConfig {
            particles: 40,
            ..ScenarioConfig::default()
        }
    }

    /// A viewer after its first frame laid out an 800x600 panel.
    fn started(cfg: ScenarioConfig, seed: u64) -> Viewer {
        let mut viewer = Viewer::new(cfg, Some(seed));
        viewer.sync_arena(ARENA);
        viewer
    }

    #[test]
    fn new_viewer_waits_for_the_first_frame() {
        let viewer = Viewer::new(scenario(), Some(1));

        assert!(!viewer.started);
        assert!(viewer.engine.particles().is_empty());
        assert!(viewer.engine.wells().is_empty());
        assert_eq!(viewer.engine.metaforce_count(), 0);
    }

    #[test]
    fn first_arena_sync_scatters_over_reported_size() {
        let mut viewer = Viewer::new(scenario(), Some(1));
        let arena = ArenaSize::new(1280.0, 200.0);

        viewer.sync_arena(arena);

        assert!(viewer.started);
        assert_eq!(viewer.engine.arena(), arena);
        assert_eq!(viewer.engine.particles().len(), 40);
        for p in viewer.engine.particles() {
            assert!((0.0..=1280.0).contains(&p.position.x));
            assert!((0.0..=200.0).contains(&p.position.y));
        }
        assert_eq!(viewer.engine.wells().len(), 1);
        assert_eq!(viewer.engine.wells()[0].position, DVec2::new(640.0, 100.0));
        assert_eq!(viewer.engine.metaforce_count(), 1);
        assert!(!viewer.interacted);
    }

    #[test]
    fn later_arena_syncs_only_resize() {
        let mut viewer = started(scenario(), 1);
        let before = viewer.engine.particles().to_vec();

        viewer.sync_arena(ArenaSize::new(300.0, 300.0));

        assert_eq!(viewer.engine.arena(), ArenaSize::new(300.0, 300.0));
        assert_eq!(viewer.engine.particles(), before.as_slice());
        assert_eq!(viewer.engine.wells()[0].position, DVec2::new(400.0, 300.0));
    }

    #[test]
    fn same_seed_gives_same_start() {
        let a = started(scenario(), 7);
        let b = started(scenario(), 7);
        assert_eq!(a.engine.particles(), b.engine.particles());
    }

    #[test]
    fn first_interaction_removes_jitter_once() {
        let mut viewer = started(scenario(), 2);
        viewer.note_interaction();
        assert!(viewer.interacted);
        assert_eq!(viewer.engine.metaforce_count(), 0);

        viewer.note_interaction();
        assert_eq!(viewer.engine.metaforce_count(), 0);
    }

    #[test]
    fn scenario_without_jitter_starts_without_metaforces() {
        let cfg = ScenarioConfig {
            jitter: None,
            ..scenario()
        };
        let viewer = started(cfg, 3);
        assert_eq!(viewer.engine.metaforce_count(), 0);
    }

    #[test]
    fn unusable_jitter_is_skipped_instead_of_installed() {
        let cfg = ScenarioConfig {
            jitter: Some(JitterConfig {
                spread: f64::NAN,
                scale: 0.05,
            }),
            ..scenario()
        };
        let mut viewer = started(cfg, 9);
        assert_eq!(viewer.engine.metaforce_count(), 0);

        viewer.step_once();
        assert!(viewer.engine.particles().iter().all(|p| p.position.is_finite()));
    }

    #[test]
    fn pointer_press_flips_well_mass() {
        let mut viewer = started(scenario(), 4);
        viewer.move_pointer_well(DVec2::new(10.0, 20.0));
        viewer.set_pointer_pressed(true);
        assert_eq!(viewer.engine.wells()[0].position, DVec2::new(10.0, 20.0));
        assert_eq!(viewer.engine.wells()[0].mass, -1.0);

        viewer.set_pointer_pressed(false);
        assert_eq!(viewer.engine.wells()[0].mass, 1.0);
    }

    #[test]
    fn pinned_wells_are_cleared_but_pointer_well_stays() {
        let mut viewer = started(scenario(), 5);
        viewer.pin_well(DVec2::new(1.0, 1.0));
        viewer.pin_well(DVec2::new(2.0, 2.0));
        assert_eq!(viewer.engine.wells().len(), 3);

        viewer.clear_pinned_wells();
        assert_eq!(viewer.engine.wells().len(), 1);
        assert_eq!(viewer.engine.wells()[0].position, DVec2::new(400.0, 300.0));
    }

    #[test]
    fn reset_restores_start_state() {
        let cfg = ScenarioConfig {
            jitter: Some(JitterConfig::default()),
            pinned_wells: vec![GravityWell::new(DVec2::new(5.0, 5.0), -2.0)],
            ..scenario()
        };
        let mut viewer = started(cfg, 6);
        viewer.note_interaction();
        viewer.pin_well(DVec2::new(1.0, 1.0));
        viewer.engine.set_particles(Vec::new());

        viewer.reset();

        assert_eq!(viewer.engine.particles().len(), 40);
        assert_eq!(viewer.engine.wells().len(), 2);
        assert_eq!(viewer.engine.wells()[1].mass, -2.0);
        assert_eq!(viewer.engine.metaforce_count(), 1);
        assert!(!viewer.interacted);
    }

    #[test]
    fn step_once_moves_particles_and_counts_ticks() {
        let mut viewer = started(scenario(), 8);
        let before = viewer.engine.particles().to_vec();

        viewer.step_once();

        assert_eq!(viewer.engine.ticks(), 1);
        assert_ne!(viewer.engine.particles(), before.as_slice());

        let mut surface = RecordingSurface::new();
        viewer.engine.render(&mut surface);
        assert_eq!(surface.rect_count(), 40);
    }
}
