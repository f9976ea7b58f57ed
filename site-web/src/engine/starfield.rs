//! Starfield simulation
//!
//! A fixed-size set of twinkling stars plus a spawner that keeps at most one
//! shooting star in flight, on a randomized interval. Purely computational;
//! the component layer owns the canvas.

use super::rng::Rng;

/// Tuning for a [`StarField`] instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub star_count: usize,
    /// Minimum milliseconds between shooting-star spawns.
    pub min_gap_ms: f64,
    /// Maximum milliseconds between shooting-star spawns.
    pub max_gap_ms: f64,
    /// Life lost per frame while a shooting star is in flight.
    pub life_decay: f64,
    /// CSS-pixel margin past the canvas edge before a shooter despawns.
    pub exit_margin: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: 220,
            min_gap_ms: 3500.0,
            max_gap_ms: 7000.0,
            life_decay: 0.012,
            exit_margin: 80.0,
        }
    }
}

/// One twinkling background star.
#[derive(Clone, Debug)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub base_alpha: f64,
    pub phase: f64,
}

impl Star {
    fn seed(width: f64, height: f64, dpr: f64, rng: &mut dyn Rng) -> Self {
        Self {
            x: rng.next_f64() * width,
            y: rng.next_f64() * height,
            radius: (rng.next_f64() * 1.2 + 0.25) * dpr,
            base_alpha: rng.next_f64() * 0.6 + 0.2,
            phase: rng.next_f64() * std::f64::consts::TAU,
        }
    }

    /// Current opacity: base plus a sine twinkle, clamped to stay visible
    /// without ever blowing out.
    pub fn alpha(&self) -> f64 {
        (self.base_alpha + self.phase.sin() * 0.22).clamp(0.06, 0.85)
    }
}

/// A shooting star in flight.
#[derive(Clone, Debug)]
pub struct Shooter {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub tail_width: f64,
    pub head_radius: f64,
}

impl Shooter {
    fn spawn(width: f64, height: f64, dpr: f64, rng: &mut dyn Rng) -> Self {
        // start high-right, travel down-left
        let x = width * (0.65 + rng.next_f64() * 0.35);
        let y = height * (rng.next_f64() * 0.35);
        let speed = (0.9 + rng.next_f64() * 0.7) * dpr;
        Self {
            x,
            y,
            vx: -9.0 * speed,
            vy: 3.6 * speed,
            life: 1.0,
            tail_width: 4.5 * dpr,
            head_radius: 3.6 * dpr,
        }
    }
}

/// Idle/active state machine keeping at most one shooting star alive.
pub struct ShooterSpawner {
    config: StarfieldConfig,
    active: Option<Shooter>,
    last_spawn_ms: f64,
    next_gap_ms: f64,
}

impl ShooterSpawner {
    fn new(config: StarfieldConfig, rng: &mut dyn Rng) -> Self {
        let next_gap_ms = rng.range(config.min_gap_ms, config.max_gap_ms);
        Self {
            config,
            active: None,
            last_spawn_ms: 0.0,
            next_gap_ms,
        }
    }

    pub fn active(&self) -> Option<&Shooter> {
        self.active.as_ref()
    }

    fn clear(&mut self) {
        self.active = None;
    }

    fn step(&mut self, now_ms: f64, width: f64, height: f64, dpr: f64, rng: &mut dyn Rng) {
        if self.active.is_none() && now_ms - self.last_spawn_ms > self.next_gap_ms {
            self.active = Some(Shooter::spawn(width, height, dpr, rng));
            self.last_spawn_ms = now_ms;
            self.next_gap_ms = rng.range(self.config.min_gap_ms, self.config.max_gap_ms);
        }

        if let Some(shooter) = &mut self.active {
            shooter.x += shooter.vx;
            shooter.y += shooter.vy;
            shooter.life -= self.config.life_decay;

            let margin = self.config.exit_margin * dpr;
            if shooter.life <= 0.0 || shooter.x < -margin || shooter.y > height + margin {
                self.active = None;
            }
        }
    }
}

pub struct StarField {
    config: StarfieldConfig,
    width: f64,
    height: f64,
    dpr: f64,
    stars: Vec<Star>,
    spawner: ShooterSpawner,
}

impl StarField {
    pub fn new(
        width: f64,
        height: f64,
        dpr: f64,
        config: StarfieldConfig,
        rng: &mut dyn Rng,
    ) -> Self {
        let mut field = Self {
            config,
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
            stars: Vec::new(),
            spawner: ShooterSpawner::new(config, rng),
        };
        field.resize(width, height, dpr, rng);
        field
    }

    /// Regenerate the full particle set at the new dimensions and drop any
    /// in-flight shooter, whose coordinates would be stale.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64, rng: &mut dyn Rng) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        self.stars = (0..self.config.star_count)
            .map(|_| Star::seed(width, height, dpr, rng))
            .collect();
        self.spawner.clear();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooter(&self) -> Option<&Shooter> {
        self.spawner.active()
    }

    /// Advance one frame: twinkle every star, then run the spawner.
    pub fn step(&mut self, now_ms: f64, rng: &mut dyn Rng) {
        for star in &mut self.stars {
            star.phase += 0.016;
        }
        self.spawner
            .step(now_ms, self.width, self.height, self.dpr, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::SeededRng;

    fn field(w: f64, h: f64, seed: u64) -> (StarField, SeededRng) {
        let mut rng = SeededRng::new(seed);
        let field = StarField::new(w, h, 1.0, StarfieldConfig::default(), &mut rng);
        (field, rng)
    }

    #[test]
    fn test_resize_regenerates_exact_count_in_bounds() {
        let (mut field, mut rng) = field(1920.0, 1080.0, 11);
        for &(w, h) in &[(800.0, 600.0), (2560.0, 1440.0), (320.0, 240.0)] {
            field.resize(w, h, 1.0, &mut rng);
            assert_eq!(field.stars().len(), 220);
            for star in field.stars() {
                assert!((0.0..w).contains(&star.x));
                assert!((0.0..h).contains(&star.y));
            }
        }
    }

    #[test]
    fn test_alpha_stays_clamped() {
        let (mut field, mut rng) = field(640.0, 480.0, 2);
        for frame in 0..2_000 {
            field.step(frame as f64 * 16.0, &mut rng);
            for star in field.stars() {
                let a = star.alpha();
                assert!((0.06..=0.85).contains(&a));
            }
        }
    }

    #[test]
    fn test_at_most_one_shooter() {
        let (mut field, mut rng) = field(1280.0, 720.0, 3);
        let mut seen_any = false;
        for frame in 0..20_000 {
            field.step(frame as f64 * 16.0, &mut rng);
            // Option-typed state makes >1 impossible; assert it spawns at all
            if field.shooter().is_some() {
                seen_any = true;
            }
        }
        assert!(seen_any, "no shooting star spawned in 20k frames");
    }

    #[test]
    fn test_shooter_spawns_in_top_right_region() {
        let (mut field, mut rng) = field(1000.0, 500.0, 4);
        let mut checked = 0;
        let mut frame = 0u64;
        let mut prev_active = false;
        while checked < 25 && frame < 200_000 {
            field.step(frame as f64 * 16.0, &mut rng);
            let active = field.shooter().is_some();
            if active && !prev_active {
                // freshly spawned this frame; undo one integration step
                let sh = field.shooter().unwrap();
                let x0 = sh.x - sh.vx;
                let y0 = sh.y - sh.vy;
                assert!((650.0..1000.0).contains(&x0), "x0 = {x0}");
                assert!((0.0..175.0).contains(&y0), "y0 = {y0}");
                assert!(sh.vx < 0.0 && sh.vy > 0.0);
                checked += 1;
            }
            prev_active = active;
            frame += 1;
        }
        assert_eq!(checked, 25, "not enough spawns observed");
    }

    #[test]
    fn test_shooter_life_strictly_decreases_until_gone() {
        let (mut field, mut rng) = field(1000.0, 500.0, 6);
        let mut frame = 0u64;
        // run until a shooter appears
        while field.shooter().is_none() {
            field.step(frame as f64 * 16.0, &mut rng);
            frame += 1;
            assert!(frame < 10_000, "spawner never fired");
        }
        let mut last_life = field.shooter().unwrap().life;
        loop {
            field.step(frame as f64 * 16.0, &mut rng);
            frame += 1;
            match field.shooter() {
                Some(sh) => {
                    assert!(sh.life < last_life);
                    last_life = sh.life;
                }
                None => break,
            }
        }
    }

    #[test]
    fn test_spawn_gap_respects_configured_range() {
        let config = StarfieldConfig {
            min_gap_ms: 100.0,
            max_gap_ms: 200.0,
            ..StarfieldConfig::default()
        };
        let mut rng = SeededRng::new(8);
        let mut field = StarField::new(800.0, 600.0, 1.0, config, &mut rng);
        // first spawn happens only after at least min_gap has elapsed
        field.step(99.0, &mut rng);
        assert!(field.shooter().is_none());
        field.step(201.0, &mut rng);
        assert!(field.shooter().is_some());
    }
}
