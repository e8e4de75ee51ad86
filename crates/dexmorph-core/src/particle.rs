//! The palette particle effect.
//!
//! Legacy palettes name a particle with a free-form string. The current schema
//! has a single sparkle descriptor, so only the presence of the string matters;
//! its content is ignored.

use serde_json::{Value, json};

use crate::normalize::{is_truthy, present};

/// Spawn probability of the sparkle particle.
pub const PARTICLE_PROBABILITY: f64 = 0.1;

/// Particle type id of the sparkle particle.
pub const PARTICLE_TYPE: &str = "pixelmon:shiny";

/// RGBA tint of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Tint {
    /// Create a tint from its channels.
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque gold, the sparkle colour.
    pub fn gold() -> Self {
        Self::new(255, 215, 0, 255)
    }
}

/// The fixed particle descriptor attached to palettes that name a particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    probability: f64,
    kind: &'static str,
    diameter: f64,
    lifetime: u32,
    tint: Tint,
}

impl Particle {
    /// The gold sparkle used for every converted particle.
    pub fn sparkle() -> Self {
        Self {
            probability: PARTICLE_PROBABILITY,
            kind: PARTICLE_TYPE,
            diameter: 2.5,
            lifetime: 30,
            tint: Tint::gold(),
        }
    }

    /// Get the spawn probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Get the particle type id.
    pub fn kind(&self) -> &str {
        self.kind
    }
}

impl From<Particle> for Value {
    fn from(particle: Particle) -> Self {
        let Tint {
            red,
            green,
            blue,
            alpha,
        } = particle.tint;

        json!({
            "probability": particle.probability,
            "options": {
                "type": particle.kind,
                "diameter": particle.diameter,
                "lifetime": particle.lifetime,
                "tint": {"red": red, "green": green, "blue": blue, "alpha": alpha}
            }
        })
    }
}

/// Build the particle for a legacy particle field.
///
/// Returns `None` when the field is missing, falsy (`null`, `false`, `0`,
/// or an empty string, list, or object), or a blank string.
pub fn particle_from_value(particle: Option<&Value>) -> Option<Particle> {
    present(particle.filter(|value| is_truthy(value))).map(|_| Particle::sparkle())
}
