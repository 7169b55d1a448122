use log::info;

use crate::{
    constants::{
        DEFAULT_COLOR_SEED, DEFAULT_PRESET_SEED, STARTING_DEFAULT_DENSITY,
        STARTING_FRAMES_PER_SECOND, STARTING_GRAV_CONST, STARTING_STEPS_PER_FRAME,
        STARTING_TIME_STEP,
    },
    error::{Result, ensure_positive},
};

/// Tunables of a running simulation. Owned by the world and only changed
/// through the validating setters.
#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    grav_constant: f64,
    default_density: f64,
    time_step: f64,
    steps_per_frame: u32,
    frames_per_second: u32,
    seed: u64,
    color_seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            grav_constant: STARTING_GRAV_CONST,
            default_density: STARTING_DEFAULT_DENSITY,
            time_step: STARTING_TIME_STEP,
            steps_per_frame: STARTING_STEPS_PER_FRAME,
            frames_per_second: STARTING_FRAMES_PER_SECOND,
            seed: DEFAULT_PRESET_SEED,
            color_seed: DEFAULT_COLOR_SEED,
        }
    }
}

impl SimParams {
    pub fn grav_constant(&self) -> f64 {
        self.grav_constant
    }

    pub fn default_density(&self) -> f64 {
        self.default_density
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    pub fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }

    /// Seed for presets that scatter bodies at random.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed for the colours of preset bodies.
    pub fn color_seed(&self) -> u64 {
        self.color_seed
    }

    pub fn set_grav_constant(&mut self, grav_constant: f64) -> Result<()> {
        self.grav_constant = ensure_positive("gravitational constant", grav_constant)?;
        info!("Gravitational constant set to {grav_constant}");
        Ok(())
    }

    pub fn set_default_density(&mut self, density: f64) -> Result<()> {
        self.default_density = ensure_positive("density", density)?;
        info!("Default density set to {density}");
        Ok(())
    }

    pub fn set_time_step(&mut self, time_step: f64) -> Result<()> {
        self.time_step = ensure_positive("time step", time_step)?;
        info!("Time step set to {time_step}");
        Ok(())
    }

    pub fn set_steps_per_frame(&mut self, steps: u32) -> Result<()> {
        ensure_positive("steps per frame", steps as f64)?;
        self.steps_per_frame = steps;
        Ok(())
    }

    pub fn set_frames_per_second(&mut self, fps: u32) -> Result<()> {
        ensure_positive("frame rate", fps as f64)?;
        self.frames_per_second = fps;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    pub fn set_color_seed(&mut self, seed: u64) {
        self.color_seed = seed;
    }

    /// Puts gravity, density and the frame pacing back to their starting
    /// values. The time step and seeds are kept.
    pub fn reset_variables(&mut self) {
        self.grav_constant = STARTING_GRAV_CONST;
        self.default_density = STARTING_DEFAULT_DENSITY;
        self.steps_per_frame = STARTING_STEPS_PER_FRAME;
        self.frames_per_second = STARTING_FRAMES_PER_SECOND;
        info!("Simulation variables reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn rejected_values_leave_params_untouched() {
        let mut params = SimParams::default();
        assert_eq!(
            params.set_default_density(0.0),
            Err(Error::NonPositive {
                name: "density",
                value: 0.0
            })
        );
        assert!(params.set_time_step(-1.0).is_err());
        assert!(params.set_frames_per_second(0).is_err());
        assert_eq!(params, SimParams::default());
    }

    #[test]
    fn reset_keeps_time_step() {
        let mut params = SimParams::default();
        params.set_grav_constant(3.0).unwrap();
        params.set_default_density(0.5).unwrap();
        params.set_time_step(0.01).unwrap();
        params.set_steps_per_frame(10).unwrap();
        params.reset_variables();
        assert_eq!(params.grav_constant(), STARTING_GRAV_CONST);
        assert_eq!(params.default_density(), STARTING_DEFAULT_DENSITY);
        assert_eq!(params.steps_per_frame(), STARTING_STEPS_PER_FRAME);
        assert_eq!(params.time_step(), 0.01);
    }
}
