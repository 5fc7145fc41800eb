use crate::color::Rgb;
use crate::constants::*;
use crate::shapes::ShapeKind;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("{name} must be in (0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidNonNegative { name: &'static str, value: f64 },
    #[error("point size must be positive, got {0}")]
    InvalidPointSize(f32),
    #[error("opacity must be in [0, 1], got {0}")]
    InvalidOpacity(f32),
}

/// Per-frame motion tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub position_rate: f32,
    pub scale_rate: f32,
    pub jitter_amplitude: f64,
    pub jitter_freq_x: f64,
    pub jitter_freq_y: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            position_rate: POSITION_SMOOTHING,
            scale_rate: GESTURE_SMOOTHING,
            jitter_amplitude: JITTER_AMPLITUDE,
            jitter_freq_x: JITTER_FREQ_X,
            jitter_freq_y: JITTER_FREQ_Y,
        }
    }
}

impl MotionParams {
    /// Default smoothing with the idle jitter switched off.
    pub fn quiet() -> Self {
        Self {
            jitter_amplitude: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("position_rate", self.position_rate)?;
        check_rate("scale_rate", self.scale_rate)?;
        check_non_negative("jitter_amplitude", self.jitter_amplitude)?;
        check_non_negative("jitter_freq_x", self.jitter_freq_x)?;
        check_non_negative("jitter_freq_y", self.jitter_freq_y)?;
        Ok(())
    }
}

/// Point material as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub color: Rgb,
    pub size: f32,
    pub opacity: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BASE,
            size: POINT_SIZE,
            opacity: POINT_OPACITY,
        }
    }
}

impl PointStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidPointSize(self.size));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidOpacity(self.opacity));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub initial_shape: ShapeKind,
    pub motion: MotionParams,
    pub style: PointStyle,
    pub velocity_spread: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            initial_shape: ShapeKind::Heart,
            motion: MotionParams::default(),
            style: PointStyle::default(),
            velocity_spread: VELOCITY_SPREAD,
        }
    }
}

impl ParticleParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoParticles);
        }
        self.motion.validate()?;
        self.style.validate()?;
        check_non_negative("velocity_spread", self.velocity_spread as f64)
    }
}

fn check_rate(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidNonNegative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(ParticleParams::default().validate(), Ok(()));
        assert_eq!(MotionParams::quiet().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let mut p = ParticleParams::default();
        p.count = 0;
        assert_eq!(p.validate(), Err(ConfigError::NoParticles));

        let mut p = ParticleParams::default();
        p.motion.position_rate = 1.5;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::RateOutOfRange { name: "position_rate", .. })
        ));

        let mut p = ParticleParams::default();
        p.motion.scale_rate = 0.0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::RateOutOfRange { name: "scale_rate", .. })
        ));

        let mut p = ParticleParams::default();
        p.motion.jitter_freq_y = f64::NAN;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidNonNegative { name: "jitter_freq_y", .. })
        ));

        let mut p = ParticleParams::default();
        p.velocity_spread = -0.5;
        assert_eq!(
            p.validate(),
            Err(ConfigError::InvalidNonNegative {
                name: "velocity_spread",
                value: -0.5
            })
        );

        let mut p = ParticleParams::default();
        p.style.opacity = 1.2;
        assert_eq!(p.validate(), Err(ConfigError::InvalidOpacity(1.2)));
    }
}
