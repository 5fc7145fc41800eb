use crate::gesture::{GestureInput, GestureState};
use crate::motion;
use crate::params::{ConfigError, ParticleParams};
use crate::shapes::{self, ShapeKind};
use glam::Vec3;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// All per-session state: the particle buffers, the gesture scale and the
/// RNG used to sample shapes. Front-ends own one of these and hand it to the
/// frame loop by reference.
pub struct ParticleSystem {
    params: ParticleParams,
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    velocities: Vec<Vec3>,
    gesture: GestureState,
    shape: ShapeKind,
    rng: SmallRng,
    dirty: bool,
}

impl ParticleSystem {
    /// Build a system resting on `params.initial_shape`.
    pub fn new(params: ParticleParams, seed: u64) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let shape = params.initial_shape;
        let positions = shapes::generate(shape, params.count, &mut rng);
        let targets = positions.clone();
        let spread = params.velocity_spread;
        let velocities = (0..params.count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread,
                )
            })
            .collect();
        log::info!(
            "[particles] count={} shape={} seed={}",
            params.count,
            shape,
            seed
        );
        Ok(Self {
            gesture: GestureState::new(params.motion.scale_rate),
            params,
            positions,
            targets,
            velocities,
            shape,
            rng,
            dirty: true,
        })
    }

    /// Regenerate only the target buffer; the current positions glide over
    /// on subsequent updates.
    pub fn switch_shape(&mut self, shape: ShapeKind) {
        shapes::fill(shape, &mut self.targets, &mut self.rng);
        if shape != self.shape {
            log::info!("[particles] shape {} -> {}", self.shape, shape);
        }
        self.shape = shape;
    }

    pub fn apply_gesture(&mut self, input: GestureInput) {
        self.gesture.apply(input);
    }

    /// One frame: take in the latest gesture input (if any arrived), smooth
    /// the gesture scale, then move every particle.
    pub fn update(&mut self, now_ms: f64, input: Option<GestureInput>) {
        if let Some(input) = input {
            self.gesture.apply(input);
        }
        let scale = self.gesture.step();
        motion::integrate(
            &mut self.positions,
            &self.targets,
            scale,
            &self.params.motion,
            now_ms,
        );
        self.dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` buffer.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    /// Whether positions changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
