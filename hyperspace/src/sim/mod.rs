use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::{
    color::Color,
    error::{Error, Result},
    math::{Segment, Vector},
    parameters::SimParams,
    presets::{self, BodySpec},
};

mod body;
mod collision;
mod diagnostics;
mod direct;
mod paths;

pub use body::{Body, BodyId, IntegrationMethod, StagedState, hyperball_radius};
pub use diagnostics::{ElapsedTime, compute_elapsed_time};
pub use paths::TrajectoryRecorder;

/// Every body of one dimensionality plus everything needed to move them.
///
/// A step first stages the next state of all bodies from the current
/// positions, then commits them at once, so no body sees another body's
/// new position within the same step.
pub struct World<V: Vector> {
    dimension: usize,
    bodies: Vec<Body<V>>,
    staged: Vec<StagedState<V>>,
    paths: TrajectoryRecorder<V>,
    barycenter: V,
    collision_enabled: bool,
    path_recording: bool,
    method: IntegrationMethod,
    params: SimParams,
    color_rng: ChaChaRng,
    next_id: u64,
    ticks: u64,
    simulated_time: f64,
}

impl<V: Vector> World<V> {
    /// An empty world. `V` has to be able to hold `dimension` components.
    pub fn new(dimension: usize, params: SimParams) -> Result<Self> {
        if dimension < 2 {
            return Err(Error::UnsupportedDimension { dimension });
        }
        if let Some(fixed) = V::FIXED_DIMENSION {
            if fixed != dimension {
                return Err(Error::DimensionMismatch {
                    expected: fixed,
                    found: dimension,
                });
            }
        }
        let color_rng = ChaChaRng::seed_from_u64(params.color_seed());
        let mut barycenter = V::zero(dimension);
        barycenter.normalize();
        Ok(Self {
            dimension,
            bodies: Vec::new(),
            staged: Vec::new(),
            paths: TrajectoryRecorder::new(),
            barycenter,
            collision_enabled: true,
            path_recording: true,
            method: IntegrationMethod::default(),
            params,
            color_rng,
            next_id: 0,
            ticks: 0,
            simulated_time: 0.0,
        })
    }

    /// A world holding the opening scene of its tier.
    pub fn with_default_scene(dimension: usize, params: SimParams) -> Result<Self> {
        let mut world = Self::new(dimension, params)?;
        for spec in presets::default_scene(dimension) {
            world.spawn_spec(spec);
        }
        world.calc_barycenter();
        Ok(world)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Advances every body by one time step.
    pub fn step(&mut self) {
        if self.staged.len() != self.bodies.len() {
            self.staged
                .resize_with(self.bodies.len(), || StagedState::zero(self.dimension));
        }

        direct::stage(
            &self.bodies,
            &mut self.staged,
            self.method,
            self.params.grav_constant(),
            self.params.time_step(),
        );
        direct::commit(&mut self.bodies, &self.staged);

        if self.collision_enabled {
            self.collision_check();
        }
        if self.path_recording {
            self.paths.update(&self.bodies);
        }
        self.calc_barycenter();

        self.ticks += 1;
        self.simulated_time += self.params.time_step();
    }

    pub fn integration_method(&self) -> IntegrationMethod {
        self.method
    }

    pub fn set_integration_method(&mut self, method: IntegrationMethod) {
        info!("Integration method set to {}", method.name());
        self.method = method;
    }

    /// Adds a body from `[position.., mass, velocity..]`.
    pub fn add_body(&mut self, stats: &[f64]) -> Result<BodyId> {
        let expected = 2 * self.dimension + 1;
        if stats.len() != expected {
            return Err(Error::StatsLength {
                expected,
                found: stats.len(),
            });
        }
        Ok(self.spawn_spec(BodySpec::from_stats(self.dimension, stats)))
    }

    /// Adds a body with a known colour and returns its id.
    pub fn add_body_with(&mut self, position: V, velocity: V, mass: f64, color: Color) -> BodyId {
        assert_eq!(position.dimension(), self.dimension, "vector dimension mismatch");
        self.spawn(position, velocity, mass, color)
    }

    fn spawn_spec(&mut self, spec: BodySpec) -> BodyId {
        let color = spec
            .color
            .unwrap_or_else(|| Color::random_visible(&mut self.color_rng));
        self.spawn(
            V::from_components(&spec.position),
            V::from_components(&spec.velocity),
            spec.mass,
            color,
        )
    }

    fn spawn(&mut self, position: V, velocity: V, mass: f64, color: Color) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(
            id,
            position,
            velocity,
            mass,
            self.params.default_density(),
            color,
        ));
        id
    }

    /// Replaces every body with a preset scene. Unknown ids leave the world
    /// untouched.
    pub fn load_preset(&mut self, id: usize) -> bool {
        let mut rng = ChaChaRng::seed_from_u64(self.params.seed());
        let mut colors = ChaChaRng::seed_from_u64(self.params.color_seed());
        let Some(specs) = presets::preset_bodies(self.dimension, id, &mut rng, &mut colors) else {
            debug!("No preset {id} for {} dimensions", self.dimension);
            return false;
        };
        info!(
            "Loading preset \"{}\" ({} bodies, seed {}, color seed {})",
            self.preset_name(id),
            specs.len(),
            self.params.seed(),
            self.params.color_seed()
        );
        self.remove_all_bodies();
        for spec in specs {
            self.spawn_spec(spec);
        }
        self.calc_barycenter();
        true
    }

    pub fn preset_name(&self, id: usize) -> &'static str {
        presets::preset_name(self.dimension, id)
    }

    /// Removes every body. Their open trails are closed where they stand.
    pub fn remove_all_bodies(&mut self) {
        self.paths.finish_all(&self.bodies);
        self.bodies.clear();
        self.staged.clear();
        self.calc_barycenter();
    }

    pub fn is_collision_enabled(&self) -> bool {
        self.collision_enabled
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn set_gravitational_constant(&mut self, grav_constant: f64) -> Result<()> {
        self.params.set_grav_constant(grav_constant)
    }

    /// Changes the default density and applies it to every body.
    pub fn set_default_density(&mut self, density: f64) -> Result<()> {
        self.params.set_default_density(density)?;
        self.apply_default_density();
        Ok(())
    }

    pub fn set_time_step(&mut self, time_step: f64) -> Result<()> {
        self.params.set_time_step(time_step)
    }

    pub fn set_steps_per_frame(&mut self, steps: u32) -> Result<()> {
        self.params.set_steps_per_frame(steps)
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.params.set_seed(seed);
    }

    /// Restores gravity and density to their starting values.
    pub fn reset_variables(&mut self) {
        self.params.reset_variables();
        self.apply_default_density();
    }

    fn apply_default_density(&mut self) {
        let density = self.params.default_density();
        for body in self.bodies.iter_mut() {
            body.set_density(density);
        }
    }

    pub fn bodies(&self) -> &[Body<V>] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body<V>> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body<V>> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    /// Barycenter as of the last step or explicit recalculation. All NaN when
    /// the total mass is zero.
    pub fn barycenter(&self) -> &V {
        &self.barycenter
    }

    pub fn calc_barycenter(&mut self) -> &V {
        let mut weighted = V::zero(self.dimension);
        let mut total_mass = 0.0;
        for body in &self.bodies {
            weighted.add_scaled(&body.position, body.mass);
            total_mass += body.mass;
        }
        if total_mass != 0.0 {
            weighted.scale(1.0 / total_mass);
        } else {
            weighted.set_zero();
            weighted.normalize();
        }
        self.barycenter = weighted;
        &self.barycenter
    }

    pub fn paths(&self) -> &TrajectoryRecorder<V> {
        &self.paths
    }

    pub fn finished_segments(&self) -> &[Segment<V>] {
        self.paths.finished_segments()
    }

    pub fn unfinished_segments(&self) -> impl Iterator<Item = &Segment<V>> {
        self.paths.unfinished_segments()
    }

    pub fn clear_paths(&mut self) {
        self.paths.clear();
    }

    pub fn is_path_recording(&self) -> bool {
        self.path_recording
    }

    /// Pausing closes every open trail so the next recording starts fresh.
    pub fn set_path_recording(&mut self, recording: bool) {
        if self.path_recording && !recording {
            self.paths.finish_all(&self.bodies);
        }
        self.path_recording = recording;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }
}
