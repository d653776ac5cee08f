use crate::bodies::{OwnerTag, Particle, Polygon, SoftBody};
use crate::core::{Canvas, IntegrationParams, SimulationConfig};
use crate::math::Vector2;

/// Whether a stroke is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PencilState {
    Idle,
    Drawing,
}

/// Turns strokes drawn by the player into dynamic soft bodies.
///
/// Points go into an in-progress polygon, each linked to the previous one by
/// a stick. In-progress particles neither move nor collide. Committing the
/// stroke attaches a loose form keeper and hands the body to the simulation.
/// A single point budget is shared by every stroke, committed or not; points
/// beyond it are silently dropped.
#[derive(Debug, Clone)]
pub struct DinoPencil {
    in_progress: Option<Polygon>,
    polygons: Vec<SoftBody>,
    points_used: usize,
    max_polygon_points: usize,
    min_point_spacing: f32,
    stick_stiffness: f32,
    form_stiffness: f32,
}

impl DinoPencil {
    /// Creates a pencil with the given point budget and default stiffness values
    pub fn new(max_polygon_points: usize) -> Self {
        Self {
            max_polygon_points,
            ..Self::from_config(&SimulationConfig::default())
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            in_progress: None,
            polygons: Vec::new(),
            points_used: 0,
            max_polygon_points: config.max_polygon_points,
            min_point_spacing: config.min_point_spacing,
            stick_stiffness: config.stick_stiffness,
            form_stiffness: config.drawn_form_stiffness,
        }
    }

    #[inline]
    pub fn state(&self) -> PencilState {
        if self.in_progress.is_some() {
            PencilState::Drawing
        } else {
            PencilState::Idle
        }
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.state() == PencilState::Drawing
    }

    /// The stroke being drawn, if any
    #[inline]
    pub fn in_progress(&self) -> Option<&Polygon> {
        self.in_progress.as_ref()
    }

    /// Committed bodies, oldest first
    #[inline]
    pub fn polygons(&self) -> &[SoftBody] {
        &self.polygons
    }

    #[inline]
    pub fn polygons_mut(&mut self) -> &mut [SoftBody] {
        &mut self.polygons
    }

    #[inline]
    pub fn points_used(&self) -> usize {
        self.points_used
    }

    #[inline]
    pub fn points_remaining(&self) -> usize {
        self.max_polygon_points.saturating_sub(self.points_used)
    }

    /// Adds a point to the current stroke, starting one if needed.
    ///
    /// Returns false without doing anything when the budget is spent. A
    /// positive `min_point_spacing` also drops points closer than that to the
    /// previous one; by default every point is kept, including repeats.
    pub fn add_particle(&mut self, x: f32, y: f32, mass: f32) -> bool {
        if self.points_used >= self.max_polygon_points {
            return false;
        }

        let position = Vector2::new(x, y);
        let polygon = self
            .in_progress
            .get_or_insert_with(|| Polygon::new(OwnerTag::UserDrawn));

        if let Some(last) = polygon.particles().last() {
            if last.position.distance(&position) < self.min_point_spacing {
                return false;
            }
        }

        let mut particle = Particle::new(position, mass, OwnerTag::UserDrawn);
        particle.set_collision_active(false);
        let index = polygon.add_particle(particle);
        if index > 0 {
            polygon.add_stick(index - 1, index, self.stick_stiffness);
        }

        self.points_used += 1;
        true
    }

    /// Commits the current stroke as a new body and returns to idle.
    ///
    /// A stroke of fewer than two points has no stick to hold it together; it
    /// is discarded and its points are returned to the budget.
    pub fn add_polygon(&mut self) -> bool {
        let Some(mut polygon) = self.in_progress.take() else {
            return false;
        };

        if polygon.len() < 2 {
            self.points_used = self.points_used.saturating_sub(polygon.len());
            tracing::debug!(points = polygon.len(), "discarding stroke too short to commit");
            return false;
        }

        polygon.set_collision_active(true);
        tracing::debug!(points = polygon.len(), "committing drawn polygon");
        self.polygons.push(SoftBody::new(polygon, self.form_stiffness));
        true
    }

    /// Removes the most recently committed body and refunds its points
    pub fn remove_polygon(&mut self) -> Option<SoftBody> {
        let body = self.polygons.pop()?;
        self.points_used = self.points_used.saturating_sub(body.polygon().len());
        tracing::debug!(points = body.polygon().len(), "removed drawn polygon");
        Some(body)
    }

    /// Integrates and restores every committed body
    pub fn update(&mut self, params: &IntegrationParams, canvas: &Canvas) {
        for body in &mut self.polygons {
            body.update(params, canvas);
        }
    }
}
