use rand::Rng;

/// An RGB colour with channels in `0.0..=255.0`.
///
/// Channels stay fractional so that repeated mass weighted blending during
/// collisions does not drift from rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);
    pub const RED: Color = Color::new(255.0, 0.0, 0.0);
    pub const ORANGE: Color = Color::new(255.0, 200.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 255.0);
    pub const CYAN: Color = Color::new(0.0, 255.0, 255.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// A random colour that stays visible on a black background.
    pub fn random_visible(rng: &mut impl Rng) -> Self {
        Self {
            red: rng.random_range(25.0..255.0),
            green: rng.random_range(25.0..255.0),
            blue: rng.random_range(25.0..255.0),
        }
    }

    /// Channels truncated to bytes, the precision a painter draws with.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.red as u8, self.green as u8, self.blue as u8]
    }

    /// Whether two colours are indistinguishable once drawn.
    pub fn same_shade(self, other: Color) -> bool {
        self.to_rgb8() == other.to_rgb8()
    }

    /// Average of two colours weighted by the magnitude of each mass.
    pub fn blend_by_mass(self, mass: f64, other: Color, other_mass: f64) -> Self {
        let total = mass.abs() + other_mass.abs();
        let mix = |a: f32, b: f32| ((mass * a as f64 + other_mass * b as f64) / total).abs() as f32;
        Self {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
        }
    }
}
