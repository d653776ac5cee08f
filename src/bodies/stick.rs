use crate::bodies::Particle;
use crate::math::EPSILON;

/// A soft distance constraint between two particles of the same polygon.
///
/// Endpoints are indices into the owning polygon's particle list.
#[derive(Debug, Clone, PartialEq)]
pub struct Stick {
    /// Index of the first endpoint
    pub a: usize,

    /// Index of the second endpoint
    pub b: usize,

    /// Length the stick relaxes toward, fixed at construction
    rest_length: f32,

    /// Fraction of the error corrected per relaxation, in (0, 1]
    stiffness: f32,
}

impl Stick {
    /// Creates a stick whose rest length is the current distance between its endpoints
    pub fn new(a: usize, b: usize, particles: &[Particle], stiffness: f32) -> Self {
        let rest_length = match (particles.get(a), particles.get(b)) {
            (Some(pa), Some(pb)) => pa.position.distance(&pb.position),
            _ => 0.0,
        };
        Self::with_rest_length(a, b, rest_length, stiffness)
    }

    /// Creates a stick with an explicit rest length
    pub fn with_rest_length(a: usize, b: usize, rest_length: f32, stiffness: f32) -> Self {
        Self {
            a,
            b,
            rest_length: rest_length.max(0.0),
            stiffness: stiffness.clamp(EPSILON, 1.0),
        }
    }

    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    #[inline]
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Current distance between the endpoints, if both exist
    pub fn current_length(&self, particles: &[Particle]) -> Option<f32> {
        let pa = particles.get(self.a)?;
        let pb = particles.get(self.b)?;
        Some(pa.position.distance(&pb.position))
    }

    /// Runs one relaxation pass.
    ///
    /// The correction is split evenly between the endpoints. A locked endpoint
    /// hands its half to the other one; two locked endpoints leave the stick alone.
    /// Coincident endpoints have no separation axis and are skipped.
    pub fn update(&self, particles: &mut [Particle]) {
        if self.a == self.b || self.a >= particles.len() || self.b >= particles.len() {
            return;
        }

        let separation = particles[self.b].position - particles[self.a].position;
        let distance = separation.length();
        if distance < EPSILON {
            tracing::trace!(a = self.a, b = self.b, "skipping stick with coincident endpoints");
            return;
        }

        let error = (self.rest_length - distance) / distance * self.stiffness * 0.5;
        let offset = separation * error;

        match (particles[self.a].is_locked(), particles[self.b].is_locked()) {
            (false, false) => {
                particles[self.a].position -= offset;
                particles[self.b].position += offset;
            }
            (true, false) => particles[self.b].position += offset * 2.0,
            (false, true) => particles[self.a].position -= offset * 2.0,
            (true, true) => {}
        }
    }
}
