use std::cell::Cell;
use std::time::Duration;

use iced::canvas::{self, Cache, Cursor, Frame, Geometry, Path, Stroke};
use iced::{Color, HorizontalAlignment, Point, Rectangle, VerticalAlignment};
use rand::Rng;

use crate::config::{Palette, Parameters};
use crate::debounce::{Debouncer, Ticket};
use crate::field::{Field, Link};
use crate::frame_loop::{FrameLoop, Phase, Tick};
use crate::host::HostProfile;

const BACKGROUND: Color = Color {
    r: 1.0,
    g: 0.973,
    b: 0.941,
    a: 1.0,
};

/// The animated particle canvas and everything that keeps it moving.
pub struct Backdrop {
    field: Field,
    links: Vec<Link>,
    frame_loop: FrameLoop,
    resize: Debouncer<(u32, u32)>,
    palette: Palette,
    link_distance: f32,
    frame_interval: Duration,
    frames: u64,
    setups: u64,
    /// Size of the canvas at its last draw; the field lives in canvas coordinates.
    canvas_size: Cell<Option<(f32, f32)>>,
    cache: Cache,
}

impl Backdrop {
    /// Builds and starts the backdrop, or returns `None` when the host does not qualify.
    /// The second value tells the caller whether to issue the first frame request.
    pub fn launch<R: Rng + ?Sized>(
        parameters: &Parameters,
        host: HostProfile,
        rng: &mut R,
    ) -> Option<(Self, bool)> {
        if !host.permits_backdrop(parameters.min_viewport_width) {
            log::info!(
                "particle backdrop disabled (touch_primary = {}, viewport width = {})",
                host.touch_primary,
                host.viewport_width
            );
            return None;
        }

        let mut backdrop = Self {
            field: Field::new(parameters.particle_count, parameters.speed, parameters.radius),
            links: Vec::new(),
            frame_loop: FrameLoop::default(),
            resize: Debouncer::new(Duration::from_millis(parameters.resize_debounce_ms)),
            palette: parameters.palette,
            link_distance: parameters.link_distance,
            frame_interval: Duration::from_millis(parameters.frame_interval_ms),
            frames: 0,
            setups: 0,
            canvas_size: Cell::new(None),
            cache: Cache::default(),
        };
        backdrop.setup(
            parameters.window_width as f32,
            parameters.window_height as f32,
            rng,
        );
        let request = backdrop.frame_loop.start();
        log::info!(
            "particle backdrop started with {} particles",
            backdrop.field.particles.len()
        );

        Some((backdrop, request))
    }

    pub fn setup<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.field.setup(width, height, rng);
        self.setups += 1;
        log::debug!("field set up at {}x{}", width, height);
        self.refresh();
    }

    /// Handles a fired frame request. Returns `true` when the next one must be issued.
    pub fn frame(&mut self) -> bool {
        match self.frame_loop.fired() {
            Tick::Render => {
                self.fit_to_canvas();
                self.field.update();
                self.frames += 1;
                self.refresh();
                true
            }
            Tick::Halt => false,
        }
    }

    pub fn pause(&mut self) {
        self.frame_loop.pause();
    }

    /// Returns `true` when a frame request must be issued.
    pub fn resume(&mut self) -> bool {
        self.frame_loop.resume()
    }

    pub fn resize_signal(&mut self, width: u32, height: u32) -> Ticket {
        self.resize.signal((width, height))
    }

    /// Re-seeds the field if `ticket` ends a burst of resize signals. The
    /// canvas size wins over the window size once the canvas has been drawn.
    pub fn resize_settled<R: Rng + ?Sized>(&mut self, ticket: Ticket, rng: &mut R) -> bool {
        match self.resize.settle(ticket) {
            Some((width, height)) => {
                let (width, height) = self
                    .canvas_size
                    .get()
                    .unwrap_or((width as f32, height as f32));
                self.setup(width, height, rng);
                true
            }
            None => false,
        }
    }

    pub fn observe_canvas(&self, width: f32, height: f32) {
        self.canvas_size.set(Some((width, height)));
    }

    pub fn resize_window(&self) -> Duration {
        self.resize.window()
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn phase(&self) -> Phase {
        self.frame_loop.phase()
    }

    #[cfg(test)]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[cfg(test)]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[cfg(test)]
    pub fn setups(&self) -> u64 {
        self.setups
    }

    #[cfg(test)]
    pub fn has_pending_request(&self) -> bool {
        self.frame_loop.has_pending_request()
    }

    fn fit_to_canvas(&mut self) {
        if let Some((width, height)) = self.canvas_size.get() {
            if (width, height) != (self.field.width, self.field.height) {
                log::debug!("fitting field to canvas at {}x{}", width, height);
                self.field.fit(width, height);
            }
        }
    }

    fn refresh(&mut self) {
        self.links.clear();
        self.links.extend(self.field.links(self.link_distance));
        self.cache.clear();
    }
}

impl<Message> canvas::Program<Message> for Backdrop {
    fn draw(&self, bounds: Rectangle, _cursor: Cursor) -> Vec<Geometry> {
        self.observe_canvas(bounds.width, bounds.height);
        let (r, g, b) = self.palette.rgb();

        let field_geometry = self.cache.draw(bounds.size(), |frame| {
            let background = Path::rectangle(Point::ORIGIN, frame.size());
            frame.fill(&background, BACKGROUND);

            let fill = Color::from_rgba8(r, g, b, 0.5);
            for particle in self.field.particles.iter() {
                let circle = Path::circle(Point::new(particle.x, particle.y), particle.radius);
                frame.fill(&circle, fill);
            }

            for link in self.links.iter() {
                let line = Path::line(
                    Point::new(link.from.0, link.from.1),
                    Point::new(link.to.0, link.to.1),
                );
                frame.stroke(
                    &line,
                    Stroke {
                        color: Color::from_rgba8(r, g, b, link.opacity),
                        width: 1.0,
                        ..Stroke::default()
                    },
                );
            }
        });

        let overlay = {
            let mut frame = Frame::new(bounds.size());

            frame.fill_text(canvas::Text {
                content: format!(
                    "particles = {}\nlinks = {}\nframes = {}\nsetups = {}\nstate = {:?}",
                    self.field.particles.len(),
                    self.links.len(),
                    self.frames,
                    self.setups,
                    self.phase(),
                ),
                color: Color::from_rgba8(r, g, b, 0.8),
                size: 14.0,
                position: Point::new(frame.width(), frame.height()),
                horizontal_alignment: HorizontalAlignment::Right,
                vertical_alignment: VerticalAlignment::Bottom,
                ..Default::default()
            });

            frame.into_geometry()
        };

        vec![field_geometry, overlay]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn launch(parameters: &Parameters) -> Option<(Backdrop, bool)> {
        let mut rng = StdRng::seed_from_u64(3);
        Backdrop::launch(parameters, HostProfile::from_parameters(parameters), &mut rng)
    }

    #[test]
    fn launch_seeds_and_requests_the_first_frame() {
        let (backdrop, request) = launch(&Parameters::default()).unwrap();
        assert!(request);
        assert_eq!(backdrop.phase(), Phase::Running);
        assert_eq!(backdrop.field().particles.len(), 60);
        assert_eq!(backdrop.field().width, 1280.0);
        assert_eq!(backdrop.setups(), 1);
    }

    #[test]
    fn disqualified_hosts_get_no_backdrop() {
        let touch = Parameters {
            touch_primary: true,
            ..Parameters::default()
        };
        assert!(launch(&touch).is_none());

        let narrow = Parameters {
            window_width: 700,
            ..Parameters::default()
        };
        assert!(launch(&narrow).is_none());
    }

    #[test]
    fn frames_advance_only_while_running() {
        let (mut backdrop, _) = launch(&Parameters::default()).unwrap();
        let before: Vec<f32> = backdrop.field().particles.iter().map(|p| p.x).collect();

        assert!(backdrop.frame());
        let after: Vec<f32> = backdrop.field().particles.iter().map(|p| p.x).collect();
        assert_ne!(before, after);

        backdrop.pause();
        assert!(!backdrop.frame());
        let paused: Vec<f32> = backdrop.field().particles.iter().map(|p| p.x).collect();
        assert_eq!(after, paused);

        assert!(backdrop.resume());
        assert!(backdrop.frame());
    }

    #[test]
    fn links_respect_the_configured_distance() {
        let (backdrop, _) = launch(&Parameters::default()).unwrap();
        for link in backdrop.links() {
            assert!(link.opacity > 0.0 && link.opacity <= 1.0);
        }

        let none = Parameters {
            link_distance: 0.0,
            ..Parameters::default()
        };
        let (backdrop, _) = launch(&none).unwrap();
        assert!(backdrop.links().is_empty());
    }

    #[test]
    fn resize_burst_sets_up_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let (mut backdrop, _) = launch(&Parameters::default()).unwrap();

        let tickets: Vec<Ticket> = (0..10u32)
            .map(|i| backdrop.resize_signal(900 + i, 700))
            .collect();
        let fired = tickets
            .into_iter()
            .filter(|&ticket| backdrop.resize_settled(ticket, &mut rng))
            .count();

        assert_eq!(fired, 1);
        assert_eq!(backdrop.setups(), 2);
        assert_eq!(backdrop.field().width, 909.0);
        assert_eq!(backdrop.field().particles.len(), 60);
    }

    #[test]
    fn settled_resize_uses_the_drawn_canvas_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let (mut backdrop, _) = launch(&Parameters::default()).unwrap();

        let ticket = backdrop.resize_signal(1400, 900);
        backdrop.observe_canvas(1380.0, 820.0);
        assert!(backdrop.resize_settled(ticket, &mut rng));
        assert_eq!((backdrop.field().width, backdrop.field().height), (1380.0, 820.0));
    }

    #[test]
    fn frames_fit_the_field_to_the_canvas_without_reseeding() {
        let (mut backdrop, _) = launch(&Parameters::default()).unwrap();
        backdrop.observe_canvas(1260.0, 700.0);

        assert!(backdrop.frame());
        assert_eq!((backdrop.field().width, backdrop.field().height), (1260.0, 700.0));
        assert_eq!(backdrop.setups(), 1);
        for p in &backdrop.field().particles {
            assert!(p.x >= -p.vx.abs() - 1e-3 && p.x <= 1260.0 + p.vx.abs() + 1e-3);
            assert!(p.y >= -p.vy.abs() - 1e-3 && p.y <= 700.0 + p.vy.abs() + 1e-3);
        }
    }
}
