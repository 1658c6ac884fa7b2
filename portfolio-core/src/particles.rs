//! Ambient "network of dots" background.
//!
//! A [`ParticleField`] owns a fixed-size batch of drifting points. Each frame
//! every point moves by its velocity and bounces off the viewport edges, then
//! the field is drawn through a [`Painter`]: one dot per particle plus a line
//! for every pair closer than the link distance. The pair check is brute force
//! over all unique pairs.

use crate::constants::{
    ACCENT_RGB, ALPHA_MIN, ALPHA_SPAN, LINK_DISTANCE, LINK_WIDTH, PARTICLE_COUNT, PARTICLE_SPEED,
    RADIUS_MIN, RADIUS_SPAN,
};

/// Tunables for a particle field. `Default` gives the page's values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub link_distance: f64,
    /// Full width of the per-axis velocity range (velocities lie in `±speed / 2`).
    pub speed: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            speed: PARTICLE_SPEED,
        }
    }
}

/// A single drifting dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    /// Place a particle uniformly inside `width × height`. `rng` yields values in `[0, 1)`.
    pub fn spawn(width: f64, height: f64, speed: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Particle {
            x: rng() * width,
            y: rng() * height,
            vx: (rng() - 0.5) * speed,
            vy: (rng() - 0.5) * speed,
            radius: rng() * RADIUS_SPAN + RADIUS_MIN,
            alpha: rng() * ALPHA_SPAN + ALPHA_MIN,
        }
    }

    /// Advance one frame. Crossing an edge flips that axis' velocity; the
    /// position itself is not corrected, so a particle may sit outside the
    /// viewport by at most one frame's displacement.
    pub fn update(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    pub fn color(&self) -> String {
        accent_rgba(self.alpha)
    }
}

/// The accent colour with the given opacity, as a CSS colour string.
pub fn accent_rgba(alpha: f64) -> String {
    let (r, g, b) = ACCENT_RGB;
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Opacity of a connecting line, or `None` when the pair is too far apart.
///
/// Falls linearly from 1 at distance 0 to 0 at `threshold`.
pub fn link_alpha(distance: f64, threshold: f64) -> Option<f64> {
    if distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

/// A line between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

/// Drawing surface used by [`ParticleField::render`].
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn dot(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

/// The full background: viewport size plus the current batch of particles.
#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut impl FnMut() -> f64,
    ) -> Self {
        let mut field = ParticleField {
            width,
            height,
            config,
            particles: Vec::with_capacity(config.count),
        };
        field.resize(width, height, rng);
        field
    }

    /// Adopt a new viewport size. The old batch is dropped and a fresh one
    /// spawned; nothing carries over.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        for _ in 0..self.config.count {
            self.particles
                .push(Particle::spawn(width, height, self.config.speed, rng));
        }
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in self.particles.iter_mut() {
            p.update(w, h);
        }
    }

    /// Every unique pair within the link distance, in `(a, b)` order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let threshold = self.config.link_distance;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let dx = ps[a].x - ps[b].x;
                let dy = ps[a].y - ps[b].y;
                let dist = (dx * dx + dy * dy).sqrt();
                link_alpha(dist, threshold).map(|alpha| Link { a, b, alpha })
            })
        })
    }

    pub fn render(&self, painter: &mut impl Painter) {
        painter.clear(self.width, self.height);
        for p in &self.particles {
            painter.dot(p.x, p.y, p.radius, &p.color());
        }
        for link in self.links() {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            painter.line((a.x, a.y), (b.x, b.y), LINK_WIDTH, &accent_rgba(link.alpha));
        }
    }

    /// One animation frame: move, then draw.
    pub fn frame(&mut self, painter: &mut impl Painter) {
        self.step();
        self.render(painter);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
