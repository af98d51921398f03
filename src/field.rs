use rand::Rng;

#[derive(Clone, Debug, Default)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Particle {
    /// Advances one step and flips a velocity component whose axis left the viewport.
    /// The position is not clamped, so it may overshoot by up to one step.
    pub fn update(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

pub type Particles = Vec<Particle>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub opacity: f32,
}

/// Opacity of a link between two points `distance` apart, or `None` when they are too far.
pub fn link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

#[derive(Clone, Debug)]
pub struct Field {
    pub particles: Particles,
    pub width: f32,
    pub height: f32,
    count: usize,
    speed: f32,
    radius: f32,
}

impl Field {
    pub fn new(count: usize, speed: f32, radius: f32) -> Self {
        Self {
            particles: Particles::with_capacity(count),
            width: 0.0,
            height: 0.0,
            count,
            speed,
            radius,
        }
    }

    /// Resizes the field and replaces the whole pool.
    pub fn setup<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles.clear();

        for _ in 0..self.count {
            self.particles.push(Particle {
                x: rng.gen::<f32>() * self.width,
                y: rng.gen::<f32>() * self.height,
                vx: (rng.gen::<f32>() - 0.5) * self.speed,
                vy: (rng.gen::<f32>() - 0.5) * self.speed,
                radius: self.radius,
            });
        }
    }

    /// Moves the pool onto a surface of a different size, keeping relative
    /// positions and velocities.
    pub fn fit(&mut self, width: f32, height: f32) {
        let (width, height) = (width.max(0.0), height.max(0.0));
        let scale_x = if self.width > 0.0 { width / self.width } else { 0.0 };
        let scale_y = if self.height > 0.0 { height / self.height } else { 0.0 };
        for particle in self.particles.iter_mut() {
            particle.x *= scale_x;
            particle.y *= scale_y;
        }
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in self.particles.iter_mut() {
            particle.update(width, height);
        }
    }

    /// Every pair closer than `threshold`.
    ///
    /// This checks all n(n-1)/2 pairs each call, which is fine for a few dozen
    /// particles and is the first thing to replace with a spatial grid if the
    /// pool ever grows.
    pub fn links(&self, threshold: f32) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                link_opacity(distance, threshold).map(|opacity| Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    opacity,
                })
            })
        })
    }
}
