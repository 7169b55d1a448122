use std::f64::consts::PI;
use std::fmt::{self, Display};

use crate::{
    color::Color,
    math::{Ball, Vector},
    sim::direct::acceleration_at,
};

/// Identifies a body for as long as it exists in its world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u64);

impl Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Numerical method used to predict where every body moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMethod {
    #[default]
    Euler,
    Verlet,
    RungeKutta4,
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 3] = [Self::Euler, Self::Verlet, Self::RungeKutta4];

    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "Euler",
            Self::Verlet => "Verlet",
            Self::RungeKutta4 => "Runge-Kutta 4",
        }
    }
}

/// Next state of a body, computed before any body is allowed to move.
#[derive(Debug, Clone)]
pub struct StagedState<V> {
    pub position: V,
    pub velocity: V,
    pub acceleration: V,
}

impl<V: Vector> StagedState<V> {
    pub fn zero(dimension: usize) -> Self {
        Self {
            position: V::zero(dimension),
            velocity: V::zero(dimension),
            acceleration: V::zero(dimension),
        }
    }
}

/// A perfect, rigid hyperball moving under Newtonian gravity.
#[derive(Debug, Clone)]
pub struct Body<V> {
    id: BodyId,
    pub(crate) position: V,
    pub(crate) velocity: V,
    pub(crate) acceleration: V,
    pub(crate) mass: f64,
    density: f64,
    radius: f64,
    pub(crate) color: Color,
}

impl<V: Vector> Body<V> {
    pub(crate) fn new(
        id: BodyId,
        position: V,
        velocity: V,
        mass: f64,
        density: f64,
        color: Color,
    ) -> Self {
        let dim = position.dimension();
        assert_eq!(dim, velocity.dimension(), "vector dimension mismatch");
        Self {
            id,
            position,
            velocity,
            acceleration: V::zero(dim),
            mass,
            density,
            radius: hyperball_radius(dim, mass, density),
            color,
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn position(&self) -> &V {
        &self.position
    }

    pub fn velocity(&self) -> &V {
        &self.velocity
    }

    pub fn acceleration(&self) -> &V {
        &self.acceleration
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_velocity(&mut self, velocity: &V) {
        self.velocity.set(velocity);
    }

    pub(crate) fn set_density(&mut self, density: f64) {
        self.density = density;
        self.radius = hyperball_radius(self.position.dimension(), self.mass, density);
    }

    pub fn as_ball(&self) -> Ball<V> {
        Ball::new(self.position.clone(), self.radius, self.color)
    }

    pub fn is_touching(&self, other: &Body<V>) -> bool {
        self.as_ball().is_touching(&other.as_ball())
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Computes this body's next state into `out` from the frozen positions in
    /// `bodies`, where this body sits at index `idx`.
    pub(crate) fn stage(
        &self,
        idx: usize,
        bodies: &[Body<V>],
        method: IntegrationMethod,
        grav_constant: f64,
        dt: f64,
        out: &mut StagedState<V>,
    ) {
        match method {
            IntegrationMethod::Euler => self.stage_euler(idx, bodies, grav_constant, dt, out),
            IntegrationMethod::Verlet => self.stage_verlet(idx, bodies, grav_constant, dt, out),
            IntegrationMethod::RungeKutta4 => self.stage_rk4(idx, bodies, grav_constant, dt, out),
        }
    }

    fn stage_euler(
        &self,
        idx: usize,
        bodies: &[Body<V>],
        grav_constant: f64,
        dt: f64,
        out: &mut StagedState<V>,
    ) {
        acceleration_at(&self.position, idx, bodies, grav_constant, &mut out.acceleration);

        out.velocity.set(&self.velocity);
        out.velocity.add_scaled(&out.acceleration, dt);

        out.position.set(&self.position);
        out.position.add_scaled(&out.velocity, dt);
    }

    fn stage_verlet(
        &self,
        idx: usize,
        bodies: &[Body<V>],
        grav_constant: f64,
        dt: f64,
        out: &mut StagedState<V>,
    ) {
        acceleration_at(&self.position, idx, bodies, grav_constant, &mut out.acceleration);

        // v' = v + (a + a') * dt / 2
        out.velocity.set(&out.acceleration);
        out.velocity.add(&self.acceleration);
        out.velocity.scale(dt * 0.5);
        out.velocity.add(&self.velocity);

        // x' = x + v * dt + a * dt^2 / 2
        out.position.set(&self.position);
        out.position.add_scaled(&self.velocity, dt);
        out.position.add_scaled(&self.acceleration, dt * dt * 0.5);
    }

    /// Classic RK4 where the other bodies stay put during the sub-steps.
    fn stage_rk4(
        &self,
        idx: usize,
        bodies: &[Body<V>],
        grav_constant: f64,
        dt: f64,
        out: &mut StagedState<V>,
    ) {
        let dim = self.position.dimension();
        let mut kv1 = V::zero(dim);
        let mut kv2 = V::zero(dim);
        let mut kv3 = V::zero(dim);
        let mut kv4 = V::zero(dim);

        acceleration_at(&self.position, idx, bodies, grav_constant, &mut kv1);
        let kr1 = self.velocity.clone();

        let midpoint = self.position.plus_scaled(&kr1, dt / 2.0);
        acceleration_at(&midpoint, idx, bodies, grav_constant, &mut kv2);
        let kr2 = self.velocity.plus_scaled(&kv1, dt / 2.0);

        let midpoint = self.position.plus_scaled(&kr2, dt / 2.0);
        acceleration_at(&midpoint, idx, bodies, grav_constant, &mut kv3);
        let kr3 = self.velocity.plus_scaled(&kv2, dt / 2.0);

        let endpoint = self.position.plus_scaled(&kr3, dt);
        acceleration_at(&endpoint, idx, bodies, grav_constant, &mut kv4);
        let kr4 = self.velocity.plus_scaled(&kv3, dt);

        out.velocity.set(&self.velocity);
        out.velocity.add_scaled(&kv1, dt / 6.0);
        out.velocity.add_scaled(&kv2, dt / 3.0);
        out.velocity.add_scaled(&kv3, dt / 3.0);
        out.velocity.add_scaled(&kv4, dt / 6.0);

        out.position.set(&self.position);
        out.position.add_scaled(&kr1, dt / 6.0);
        out.position.add_scaled(&kr2, dt / 3.0);
        out.position.add_scaled(&kr3, dt / 3.0);
        out.position.add_scaled(&kr4, dt / 6.0);

        out.acceleration = kv1;
    }

    /// Moves the body to its staged state. Only valid once every body in the
    /// world has been staged.
    pub(crate) fn commit(&mut self, staged: &StagedState<V>) {
        self.position.set(&staged.position);
        self.velocity.set(&staged.velocity);
        self.acceleration.set(&staged.acceleration);
    }
}

/// Radius of a `dimension`-ball whose volume is `|mass| / density`.
///
/// Uses the closed form `V = pi^(n/2) / Gamma(n/2 + 1) * r^n` of the n-ball
/// volume, with the common low dimensions spelled out.
pub fn hyperball_radius(dimension: usize, mass: f64, density: f64) -> f64 {
    let volume = mass.abs() / density;
    match dimension {
        2 => (volume / PI).sqrt(),
        3 => (3.0 * volume / (4.0 * PI)).cbrt(),
        4 => (2.0 * volume / (PI * PI)).powf(0.25),
        n => {
            let n_f = n as f64;
            (half_integer_gamma(n_f / 2.0 + 1.0) * volume).powf(1.0 / n_f) / PI.sqrt()
        }
    }
}

/// Gamma of a positive integer or half-integer.
fn half_integer_gamma(x: f64) -> f64 {
    let mut gamma = 1.0;
    let mut i = x - 1.0;
    while i > 0.0 {
        gamma *= i;
        i -= 1.0;
    }
    // Half-integers bottom out at Gamma(1/2)
    if (x.fract() - 0.5).abs() < 1e-9 {
        gamma *= PI.sqrt();
    }
    gamma
}
