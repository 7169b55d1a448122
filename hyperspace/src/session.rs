use cgmath::{Vector2, Vector3, Vector4};
use log::info;

use crate::{
    color::Color,
    constants::BARYCENTER_MARKER_RADIUS,
    error::{Error, Result},
    math::{Ball, Vector, VectorN},
    parameters::SimParams,
    render::{
        Compositor2, Compositor3, Compositor4, CompositorN, DrawItem, SceneCompositor,
        axis_overlay,
    },
    sim::{BodyId, ElapsedTime, IntegrationMethod, World},
};

/// What goes into a frame besides the bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub paths: bool,
    pub barycenter: bool,
    pub axes: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            paths: true,
            barycenter: true,
            axes: false,
        }
    }
}

/// A world of one dimensionality with the compositor able to draw it.
pub enum Scene {
    Two {
        world: World<Vector2<f64>>,
        compositor: Compositor2,
    },
    Three {
        world: World<Vector3<f64>>,
        compositor: Compositor3,
    },
    Four {
        world: World<Vector4<f64>>,
        compositor: Compositor4,
    },
    Many {
        world: World<VectorN>,
        compositor: CompositorN,
    },
}

/// Runs `$body` with `$world` bound to the world of whichever tier is active.
macro_rules! with_world {
    ($scene:expr, $world:ident => $body:expr) => {
        match $scene {
            Scene::Two { world: $world, .. } => $body,
            Scene::Three { world: $world, .. } => $body,
            Scene::Four { world: $world, .. } => $body,
            Scene::Many { world: $world, .. } => $body,
        }
    };
}

impl Scene {
    /// The opening scene and default cameras of a `dimension` dimensional
    /// world.
    pub fn new(dimension: usize, params: SimParams) -> Result<Self> {
        Ok(match dimension {
            0 | 1 => return Err(Error::UnsupportedDimension { dimension }),
            2 => Self::Two {
                world: World::with_default_scene(2, params)?,
                compositor: Compositor2::default(),
            },
            3 => Self::Three {
                world: World::with_default_scene(3, params)?,
                compositor: Compositor3::default(),
            },
            4 => Self::Four {
                world: World::with_default_scene(4, params)?,
                compositor: Compositor4::default(),
            },
            n => Self::Many {
                world: World::with_default_scene(n, params)?,
                compositor: CompositorN::new(n)?,
            },
        })
    }

    pub fn dimension(&self) -> usize {
        with_world!(self, world => world.dimension())
    }
}

/// Owns the active world and drives one frame at a time.
pub struct Session {
    scene: Scene,
    options: DisplayOptions,
}

impl Session {
    pub fn new(dimension: usize, params: SimParams) -> Result<Self> {
        info!("Starting a {dimension} dimensional session");
        Ok(Self {
            scene: Scene::new(dimension, params)?,
            options: DisplayOptions::default(),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn dimension(&self) -> usize {
        self.scene.dimension()
    }

    /// Throws away the world and cameras for fresh ones in `dimension`
    /// dimensions. Tunables carry over.
    pub fn set_dimension(&mut self, dimension: usize) -> Result<()> {
        let params = self.params().clone();
        self.scene = Scene::new(dimension, params)?;
        info!("Switched to {dimension} dimensions");
        Ok(())
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn set_options(&mut self, options: DisplayOptions) {
        self.options = options;
    }

    pub fn params(&self) -> &SimParams {
        with_world!(&self.scene, world => world.params())
    }

    /// Runs one frame worth of steps and returns what to draw.
    pub fn tick(&mut self) -> Result<Vec<DrawItem>> {
        let steps = self.params().steps_per_frame();
        with_world!(&mut self.scene, world => {
            for _ in 0..steps {
                world.step();
            }
        });
        self.draw()
    }

    /// Draw order for the current state without stepping.
    pub fn draw(&mut self) -> Result<Vec<DrawItem>> {
        let options = self.options;
        match &mut self.scene {
            Scene::Two { world, compositor } => compose(world, compositor, options),
            Scene::Three { world, compositor } => compose(world, compositor, options),
            Scene::Four { world, compositor } => compose(world, compositor, options),
            Scene::Many { world, compositor } => compose(world, compositor, options),
        }
    }

    pub fn body_count(&self) -> usize {
        with_world!(&self.scene, world => world.bodies().len())
    }

    /// Adds a body from `[position.., mass, velocity..]`.
    pub fn add_body(&mut self, stats: &[f64]) -> Result<BodyId> {
        with_world!(&mut self.scene, world => world.add_body(stats))
    }

    pub fn load_preset(&mut self, id: usize) -> bool {
        with_world!(&mut self.scene, world => world.load_preset(id))
    }

    pub fn preset_name(&self, id: usize) -> &'static str {
        with_world!(&self.scene, world => world.preset_name(id))
    }

    pub fn remove_all_bodies(&mut self) {
        with_world!(&mut self.scene, world => world.remove_all_bodies());
    }

    pub fn integration_method(&self) -> IntegrationMethod {
        with_world!(&self.scene, world => world.integration_method())
    }

    pub fn set_integration_method(&mut self, method: IntegrationMethod) {
        with_world!(&mut self.scene, world => world.set_integration_method(method));
    }

    pub fn is_collision_enabled(&self) -> bool {
        with_world!(&self.scene, world => world.is_collision_enabled())
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        with_world!(&mut self.scene, world => world.set_collision_enabled(enabled));
    }

    pub fn set_gravitational_constant(&mut self, grav_constant: f64) -> Result<()> {
        with_world!(&mut self.scene, world => world.set_gravitational_constant(grav_constant))
    }

    pub fn set_default_density(&mut self, density: f64) -> Result<()> {
        with_world!(&mut self.scene, world => world.set_default_density(density))
    }

    pub fn set_time_step(&mut self, time_step: f64) -> Result<()> {
        with_world!(&mut self.scene, world => world.set_time_step(time_step))
    }

    pub fn set_steps_per_frame(&mut self, steps: u32) -> Result<()> {
        with_world!(&mut self.scene, world => world.set_steps_per_frame(steps))
    }

    pub fn reset_variables(&mut self) {
        with_world!(&mut self.scene, world => world.reset_variables());
    }

    pub fn clear_paths(&mut self) {
        with_world!(&mut self.scene, world => world.clear_paths());
    }

    pub fn set_path_recording(&mut self, recording: bool) {
        with_world!(&mut self.scene, world => world.set_path_recording(recording));
    }

    pub fn total_energy(&self) -> f64 {
        with_world!(&self.scene, world => world.total_energy())
    }

    pub fn elapsed_time(&self) -> ElapsedTime {
        with_world!(&self.scene, world => world.elapsed_time())
    }
}

/// One compositor pass over `world`. The barycenter marker goes on top at a
/// fixed size.
fn compose<C: SceneCompositor>(
    world: &World<C::Space>,
    compositor: &mut C,
    options: DisplayOptions,
) -> Result<Vec<DrawItem>> {
    compositor.reset_frame();
    compositor.add_bodies(world.bodies())?;

    let mut lines = Vec::new();
    if options.paths {
        lines.extend(world.finished_segments().iter().cloned());
        lines.extend(world.unfinished_segments().cloned());
    }
    if options.axes {
        lines.extend(axis_overlay(world.dimension()));
    }
    compositor.add_lines(lines)?;

    let mut items = compositor.build_draw_order()?;
    if options.barycenter && world.barycenter().is_defined() {
        if let Some(center) = compositor.locate(world.barycenter()) {
            items.push(DrawItem::Ball(Ball::new(
                center,
                BARYCENTER_MARKER_RADIUS,
                Color::WHITE,
            )));
        }
    }
    Ok(items)
}
