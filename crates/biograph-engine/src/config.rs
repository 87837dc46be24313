//! Layout configuration.
//!
//! One [`LayoutConfig`] covers all three strategies; the force-only knobs
//! are ignored by circular and hierarchical layouts. Defaults reproduce
//! the geometry of the original visualization (800x550 viewport, circle
//! radius at a third of the short side, link distance 100).

use anyhow::{Result, bail};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Tunable parameters for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Viewport width in layout units.
    pub width: f64,
    /// Viewport height in layout units.
    pub height: f64,
    /// Circle radius as a fraction of `min(width, height)`.
    pub radius_fraction: f64,
    /// Spring rest length for an edge of weight 1.0. Heavier edges rest
    /// shorter (`link_distance / weight`).
    pub link_distance: f64,
    /// Spring stiffness applied to the rest-length displacement.
    pub spring_strength: f64,
    /// Pairwise repulsion strength (force is `charge / d^2`).
    pub charge_strength: f64,
    /// Node count above which the O(n^2) repulsion pass is skipped.
    pub repulsion_node_ceiling: usize,
    /// Pull toward the viewport center per tick.
    pub center_strength: f64,
    /// Alpha at simulation start and after a full restart.
    pub alpha_initial: f64,
    /// Alpha below which the simulation is considered settled.
    pub alpha_min: f64,
    /// Geometric decay applied per tick (`alpha *= 1 - alpha_decay`).
    pub alpha_decay: f64,
    /// Alpha restored by a reheat (drag release).
    pub alpha_reheat: f64,
    /// Fraction of velocity retained per tick.
    pub damping: f64,
    /// Per-component velocity clamp, the numeric-instability backstop.
    pub max_velocity: f64,
    /// Hard cap on force ticks before the simulation settles regardless
    /// of alpha.
    pub max_iterations: usize,
    /// Suggested milliseconds between traversal-animation ticks. The
    /// engine never sleeps; this is advisory for the external driver.
    pub animation_tick_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 550.0,
            radius_fraction: 1.0 / 3.0,
            link_distance: 100.0,
            spring_strength: 0.08,
            charge_strength: 300.0,
            repulsion_node_ceiling: 500,
            center_strength: 0.02,
            alpha_initial: 1.0,
            alpha_min: 0.001,
            alpha_decay: 0.0228,
            alpha_reheat: 0.3,
            damping: 0.6,
            max_velocity: 50.0,
            max_iterations: 300,
            animation_tick_ms: 500,
        }
    }
}

impl LayoutConfig {
    /// The viewport center, the anchor for circular placement and the
    /// centering force.
    #[must_use]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Validate parameters before handing the config to an engine.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            bail!("viewport dimensions must be positive");
        }
        if self.radius_fraction <= 0.0 {
            bail!("radius_fraction must be positive");
        }
        if !(0.0..1.0).contains(&self.alpha_decay) {
            bail!("alpha_decay must be in [0, 1)");
        }
        if !(0.0..=1.0).contains(&self.damping) {
            bail!("damping must be in [0, 1]");
        }
        if self.alpha_min <= 0.0 || self.alpha_min >= self.alpha_initial {
            bail!("alpha_min must be positive and below alpha_initial");
        }
        if self.max_iterations == 0 {
            bail!("max_iterations must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        LayoutConfig::default().validate().expect("default valid");
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let config = LayoutConfig {
            width: 0.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn decay_of_one_is_rejected() {
        let config = LayoutConfig {
            alpha_decay: 1.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = LayoutConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: LayoutConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, back);
    }
}
