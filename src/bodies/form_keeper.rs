use crate::bodies::Polygon;
use crate::math::Vector2;

/// Pulls a polygon back toward the shape it had when the keeper was created.
///
/// The rest shape is stored as offsets from the center of mass, indexed like
/// the polygon's particles. Each restoration moves every unlocked particle a
/// `stiffness` fraction of the way to its rest offset around the current
/// center, so the body can translate freely but resists deformation.
#[derive(Debug, Clone)]
pub struct FormKeeper {
    initial_local_positions: Vec<Vector2>,
    stiffness: f32,
    center: Vector2,
}

impl FormKeeper {
    /// Captures the current shape of `polygon`
    pub fn new(polygon: &Polygon, stiffness: f32) -> Self {
        let center = polygon.center_of_mass();
        let initial_local_positions = polygon
            .particles()
            .iter()
            .map(|p| p.position - center)
            .collect();

        Self {
            initial_local_positions,
            stiffness: stiffness.clamp(0.0, 1.0),
            center,
        }
    }

    #[inline]
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Center of mass computed by the last restoration
    #[inline]
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Rest offsets, one per particle
    #[inline]
    pub fn initial_local_positions(&self) -> &[Vector2] {
        &self.initial_local_positions
    }

    /// Moves the polygon's particles toward the rest shape.
    ///
    /// Particles beyond the captured shape (or captured offsets beyond the
    /// particle list) are left untouched.
    pub fn restore_original_form(&mut self, polygon: &mut Polygon) {
        if polygon.len() != self.initial_local_positions.len() {
            tracing::warn!(
                particles = polygon.len(),
                captured = self.initial_local_positions.len(),
                "form keeper no longer matches its polygon"
            );
        }

        self.center = polygon.center_of_mass();
        let center = self.center;
        let stiffness = self.stiffness;

        for (particle, local) in polygon
            .particles_mut()
            .iter_mut()
            .zip(self.initial_local_positions.iter())
        {
            if particle.is_locked() {
                continue;
            }
            let desired = *local + center;
            particle.position += (desired - particle.position) * stiffness;
        }
    }
}
