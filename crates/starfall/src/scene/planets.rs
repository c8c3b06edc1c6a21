//! Planets with surface details, rings and moons.
//!
//! A scene draws one of five color themes. Each theme lists two or three
//! planet kinds; planet `i` takes kind `i mod kinds`. Per-kind colors and
//! ring/moon choices are drawn once per scene, so every planet of a kind
//! shares them.

use std::f32::consts::PI;

use log::debug;
use rand::Rng;

use starfall_core::{
    color::Color,
    geometry::{Point, Size},
};

use super::random::{RgbaRange, place_with_attempts, random_angle, uniform};
use crate::config::CountRange;

const PLACEMENT_ATTEMPTS: usize = 50;

/// The named kinds of planet a theme can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetKind {
    EarthLike,
    GasGiant,
    MarsLike,
    LavaPlanet,
    IceGiant,
    IcePlanet,
    AlienWorld,
}

impl PlanetKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::EarthLike => "Earth-like",
            Self::GasGiant => "Gas Giant",
            Self::MarsLike => "Mars-like",
            Self::LavaPlanet => "Lava Planet",
            Self::IceGiant => "Ice Giant",
            Self::IcePlanet => "Ice Planet",
            Self::AlienWorld => "Alien World",
        }
    }
}

/// Shape of a surface detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Crater,
    Spot,
    Band,
    Cloud,
}

/// `base + u * span` for `u` uniform in `[0, 1)`.
#[derive(Debug, Clone, Copy)]
struct Spread {
    base: f32,
    span: f32,
}

impl Spread {
    const fn new(base: f32, span: f32) -> Self {
        Self { base, span }
    }

    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        self.base + uniform(rng, 0.0, self.span)
    }
}

/// Per-kind ranges from which a scene draws its [`KindProfile`].
struct KindRanges {
    kind: PlanetKind,
    color: RgbaRange,
    /// Rings appear when a uniform draw exceeds this.
    ring_threshold: f32,
    ring_color: Option<RgbaRange>,
    detail_kinds: [DetailKind; 2],
    detail_colors: [RgbaRange; 2],
    /// A moon appears when a uniform draw exceeds this.
    moon_threshold: f32,
    moon_size: Spread,
    moon_color: RgbaRange,
    moon_distance: Spread,
    moon_speed: Spread,
}

const fn rgba(r: [u8; 2], g: [u8; 2], b: [u8; 2], a: [f32; 2]) -> RgbaRange {
    RgbaRange::new(r, g, b, a)
}

const BODY_ALPHA: [f32; 2] = [0.7, 0.9];
const RING_ALPHA: [f32; 2] = [0.4, 0.6];

const EARTH_LIKE_COLOR: RgbaRange = rgba([50, 90], [110, 150], [160, 200], BODY_ALPHA);
const EARTH_LIKE_DETAILS: [RgbaRange; 2] = [
    rgba([220, 255], [220, 255], [220, 255], [0.6, 0.8]),
    rgba([20, 40], [60, 100], [20, 40], [0.5, 0.7]),
];
const WARM_GAS_GIANT_COLOR: RgbaRange = rgba([190, 230], [160, 200], [120, 160], BODY_ALPHA);
const WARM_GAS_GIANT_RING: RgbaRange = rgba([160, 200], [140, 180], [100, 140], RING_ALPHA);
const WARM_GAS_GIANT_DETAILS: [RgbaRange; 2] = [
    rgba([160, 200], [120, 160], [80, 120], [0.5, 0.7]),
    rgba([200, 240], [180, 220], [130, 170], [0.6, 0.8]),
];
const ALIEN_WORLD_COLOR: RgbaRange = rgba([130, 170], [80, 120], [160, 200], BODY_ALPHA);
const ALIEN_WORLD_RING: RgbaRange = rgba([160, 200], [100, 140], [180, 220], RING_ALPHA);
const ALIEN_WORLD_DETAILS: [RgbaRange; 2] = [
    rgba([160, 200], [60, 100], [180, 220], [0.5, 0.7]),
    rgba([200, 240], [120, 160], [220, 255], [0.4, 0.6]),
];
const ALIEN_WORLD_MOON: RgbaRange = rgba([180, 220], [160, 200], [200, 240], BODY_ALPHA);
const GREY_MOON: RgbaRange = rgba([160, 200], [160, 200], [160, 200], BODY_ALPHA);
const PALE_MOON: RgbaRange = rgba([180, 220], [180, 220], [180, 220], BODY_ALPHA);
const BLUISH_MOON: RgbaRange = rgba([160, 200], [160, 200], [180, 220], BODY_ALPHA);

/// Blue/green theme
const BLUE_GREEN: &[KindRanges] = &[
    KindRanges {
        kind: PlanetKind::EarthLike,
        color: EARTH_LIKE_COLOR,
        ring_threshold: 0.8,
        ring_color: None,
        detail_kinds: [DetailKind::Cloud, DetailKind::Spot],
        detail_colors: EARTH_LIKE_DETAILS,
        moon_threshold: 0.4,
        moon_size: Spread::new(0.15, 0.15),
        moon_color: PALE_MOON,
        moon_distance: Spread::new(1.6, 0.6),
        moon_speed: Spread::new(0.001, 0.001),
    },
    KindRanges {
        kind: PlanetKind::GasGiant,
        color: WARM_GAS_GIANT_COLOR,
        ring_threshold: 0.3,
        ring_color: Some(WARM_GAS_GIANT_RING),
        detail_kinds: [DetailKind::Band, DetailKind::Spot],
        detail_colors: WARM_GAS_GIANT_DETAILS,
        moon_threshold: 0.3,
        moon_size: Spread::new(0.1, 0.15),
        moon_color: GREY_MOON,
        moon_distance: Spread::new(1.8, 0.6),
        moon_speed: Spread::new(0.0008, 0.0008),
    },
];

/// Red/orange theme
const RED_ORANGE: &[KindRanges] = &[
    KindRanges {
        kind: PlanetKind::MarsLike,
        color: rgba([180, 220], [80, 120], [50, 90], BODY_ALPHA),
        ring_threshold: 0.8,
        ring_color: None,
        detail_kinds: [DetailKind::Crater, DetailKind::Spot],
        detail_colors: [
            rgba([130, 170], [50, 90], [30, 70], [0.5, 0.7]),
            rgba([200, 240], [100, 140], [60, 100], [0.4, 0.6]),
        ],
        moon_threshold: 0.6,
        moon_size: Spread::new(0.1, 0.1),
        moon_color: GREY_MOON,
        moon_distance: Spread::new(1.7, 0.5),
        moon_speed: Spread::new(0.001, 0.001),
    },
    KindRanges {
        kind: PlanetKind::LavaPlanet,
        color: rgba([200, 240], [60, 100], [20, 60], BODY_ALPHA),
        ring_threshold: 0.7,
        ring_color: Some(rgba([180, 220], [100, 140], [50, 90], RING_ALPHA)),
        detail_kinds: [DetailKind::Spot, DetailKind::Band],
        detail_colors: [
            rgba([235, 255], [100, 140], [30, 70], [0.6, 0.8]),
            rgba([160, 200], [40, 80], [10, 30], [0.5, 0.7]),
        ],
        moon_threshold: 0.7,
        moon_size: Spread::new(0.12, 0.1),
        moon_color: rgba([100, 140], [100, 140], [100, 140], BODY_ALPHA),
        moon_distance: Spread::new(1.6, 0.6),
        moon_speed: Spread::new(0.0012, 0.0008),
    },
];

/// Ice/blue theme
const ICE: &[KindRanges] = &[
    KindRanges {
        kind: PlanetKind::IceGiant,
        color: rgba([100, 140], [160, 200], [200, 240], BODY_ALPHA),
        ring_threshold: 0.4,
        ring_color: Some(rgba([180, 220], [200, 240], [235, 255], RING_ALPHA)),
        detail_kinds: [DetailKind::Band, DetailKind::Spot],
        detail_colors: [
            rgba([80, 120], [130, 170], [180, 220], [0.5, 0.7]),
            rgba([130, 170], [180, 220], [235, 255], [0.4, 0.6]),
        ],
        moon_threshold: 0.5,
        moon_size: Spread::new(0.15, 0.15),
        moon_color: rgba([200, 240], [200, 240], [200, 240], BODY_ALPHA),
        moon_distance: Spread::new(1.8, 0.6),
        moon_speed: Spread::new(0.001, 0.001),
    },
    KindRanges {
        kind: PlanetKind::IcePlanet,
        color: rgba([180, 220], [200, 240], [235, 255], BODY_ALPHA),
        ring_threshold: 0.6,
        ring_color: Some(rgba([200, 240], [220, 255], [235, 255], RING_ALPHA)),
        detail_kinds: [DetailKind::Crater, DetailKind::Spot],
        detail_colors: [
            rgba([235, 255], [235, 255], [235, 255], [0.6, 0.8]),
            rgba([160, 200], [180, 220], [200, 240], [0.5, 0.7]),
        ],
        moon_threshold: 0.6,
        moon_size: Spread::new(0.1, 0.12),
        moon_color: BLUISH_MOON,
        moon_distance: Spread::new(1.6, 0.5),
        moon_speed: Spread::new(0.0015, 0.001),
    },
];

/// Purple/pink theme
const PURPLE_PINK: &[KindRanges] = &[
    KindRanges {
        kind: PlanetKind::AlienWorld,
        color: ALIEN_WORLD_COLOR,
        ring_threshold: 0.5,
        ring_color: Some(ALIEN_WORLD_RING),
        detail_kinds: [DetailKind::Spot, DetailKind::Cloud],
        detail_colors: ALIEN_WORLD_DETAILS,
        moon_threshold: 0.4,
        moon_size: Spread::new(0.15, 0.15),
        moon_color: ALIEN_WORLD_MOON,
        moon_distance: Spread::new(1.7, 0.6),
        moon_speed: Spread::new(0.001, 0.001),
    },
    KindRanges {
        kind: PlanetKind::GasGiant,
        color: rgba([160, 200], [100, 140], [180, 220], BODY_ALPHA),
        ring_threshold: 0.3,
        ring_color: Some(rgba([180, 220], [120, 160], [200, 240], RING_ALPHA)),
        detail_kinds: [DetailKind::Band, DetailKind::Spot],
        detail_colors: [
            rgba([140, 180], [80, 120], [160, 200], [0.5, 0.7]),
            rgba([180, 220], [120, 160], [200, 240], [0.4, 0.6]),
        ],
        moon_threshold: 0.5,
        moon_size: Spread::new(0.12, 0.13),
        moon_color: BLUISH_MOON,
        moon_distance: Spread::new(1.8, 0.5),
        moon_speed: Spread::new(0.0012, 0.0008),
    },
];

/// Mixed theme
const MIXED: &[KindRanges] = &[
    KindRanges {
        kind: PlanetKind::EarthLike,
        color: EARTH_LIKE_COLOR,
        ring_threshold: 0.8,
        ring_color: None,
        detail_kinds: [DetailKind::Cloud, DetailKind::Spot],
        detail_colors: EARTH_LIKE_DETAILS,
        moon_threshold: 0.5,
        moon_size: Spread::new(0.15, 0.15),
        moon_color: PALE_MOON,
        moon_distance: Spread::new(1.7, 0.5),
        moon_speed: Spread::new(0.001, 0.001),
    },
    KindRanges {
        kind: PlanetKind::GasGiant,
        color: WARM_GAS_GIANT_COLOR,
        ring_threshold: 0.3,
        ring_color: Some(WARM_GAS_GIANT_RING),
        detail_kinds: [DetailKind::Band, DetailKind::Spot],
        detail_colors: WARM_GAS_GIANT_DETAILS,
        moon_threshold: 0.5,
        moon_size: Spread::new(0.12, 0.13),
        moon_color: GREY_MOON,
        moon_distance: Spread::new(1.8, 0.5),
        moon_speed: Spread::new(0.0012, 0.0008),
    },
    KindRanges {
        kind: PlanetKind::AlienWorld,
        color: ALIEN_WORLD_COLOR,
        ring_threshold: 0.5,
        ring_color: Some(ALIEN_WORLD_RING),
        detail_kinds: [DetailKind::Spot, DetailKind::Cloud],
        detail_colors: ALIEN_WORLD_DETAILS,
        moon_threshold: 0.6,
        moon_size: Spread::new(0.1, 0.15),
        moon_color: ALIEN_WORLD_MOON,
        moon_distance: Spread::new(1.7, 0.6),
        moon_speed: Spread::new(0.001, 0.001),
    },
];

const THEMES: [&[KindRanges]; 5] = [BLUE_GREEN, RED_ORANGE, ICE, PURPLE_PINK, MIXED];

/// Ring color for kinds that define none.
fn default_ring_color() -> Color {
    Color::rgba(180, 160, 120, 0.5)
}

/// The per-scene draw of one planet kind.
#[derive(Debug, Clone)]
struct KindProfile {
    kind: PlanetKind,
    color: Color,
    has_rings: bool,
    ring_color: Color,
    detail_kinds: [DetailKind; 2],
    detail_colors: [Color; 2],
    has_moon: bool,
    moon_size: f32,
    moon_color: Color,
    moon_distance: f32,
    moon_speed: f32,
}

impl KindRanges {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> KindProfile {
        let color = self.color.sample(rng);
        let has_rings = rng.random::<f32>() > self.ring_threshold;
        let ring_color = self
            .ring_color
            .map_or_else(default_ring_color, |range| range.sample(rng));
        let detail_colors = [
            self.detail_colors[0].sample(rng),
            self.detail_colors[1].sample(rng),
        ];
        let has_moon = rng.random::<f32>() > self.moon_threshold;
        let moon_size = self.moon_size.sample(rng);
        let moon_color = self.moon_color.sample(rng);
        let moon_distance = self.moon_distance.sample(rng);
        let moon_speed = self.moon_speed.sample(rng);

        KindProfile {
            kind: self.kind,
            color,
            has_rings,
            ring_color,
            detail_kinds: self.detail_kinds,
            detail_colors,
            has_moon,
            moon_size,
            moon_color,
            moon_distance,
            moon_speed,
        }
    }
}

/// Orientation and length of a band or cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stretch {
    angle: f32,
    width: f32,
}

impl Stretch {
    pub fn angle(self) -> f32 {
        self.angle
    }

    pub fn width(self) -> f32 {
        self.width
    }
}

/// A crater, spot, band or cloud painted on a planet's disc.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDetail {
    kind: DetailKind,
    /// Offset from the planet center.
    offset: Point,
    size: f32,
    color: Color,
    /// Present for bands and clouds.
    stretch: Option<Stretch>,
}

impl SurfaceDetail {
    pub fn kind(&self) -> DetailKind {
        self.kind
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stretch(&self) -> Option<Stretch> {
        self.stretch
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rings {
    color: Color,
    width: f32,
    tilt: f32,
}

impl Rings {
    pub fn color(&self) -> Color {
        self.color
    }

    /// Extra horizontal reach beyond the planet radius.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Rotation of the ring ellipse in radians.
    pub fn tilt(&self) -> f32 {
        self.tilt
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    size: f32,
    color: Color,
    /// Orbit distance as a multiple of the planet radius.
    distance_factor: f32,
    speed: f32,
    angle: f32,
}

impl Moon {
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn distance_factor(&self) -> f32 {
        self.distance_factor
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

/// A planet circling a fixed anchor point on a small orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    kind: PlanetKind,
    anchor: Point,
    orbit_radius: f32,
    orbit_speed: f32,
    orbit_angle: f32,
    radius: f32,
    color: Color,
    details: Vec<SurfaceDetail>,
    rings: Option<Rings>,
    moon: Option<Moon>,
}

impl Planet {
    pub fn kind(&self) -> PlanetKind {
        self.kind
    }

    /// The point the planet orbits.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn details(&self) -> &[SurfaceDetail] {
        &self.details
    }

    pub fn rings(&self) -> Option<&Rings> {
        self.rings.as_ref()
    }

    pub fn moon(&self) -> Option<&Moon> {
        self.moon.as_ref()
    }

    /// Current center of the planet disc.
    pub fn position(&self) -> Point {
        Point::from_polar(self.anchor, self.orbit_angle, self.orbit_radius)
    }

    /// Current center of the moon, if any.
    pub fn moon_position(&self) -> Option<Point> {
        // Distance scales with the radius once, not radius squared
        self.moon.as_ref().map(|moon| {
            Point::from_polar(
                self.position(),
                moon.angle,
                self.radius * moon.distance_factor,
            )
        })
    }

    /// Advances the orbit and the moon by `dt` milliseconds.
    pub fn advance(&mut self, dt: f32) {
        self.orbit_angle += self.orbit_speed * dt;
        if let Some(moon) = &mut self.moon {
            moon.angle += moon.speed * dt;
        }
    }
}

/// Finds planet anchors by rejection sampling.
///
/// Candidates sit on a ring around the viewport center, clamped to the
/// inner 10-90% box. A planet that only fits on the last attempt, or not
/// at all, is dropped.
fn place_anchors<R: Rng + ?Sized>(rng: &mut R, viewport: Size, wanted: usize) -> Vec<Point> {
    let min_side = viewport.min_side();
    let min_distance = min_side * 0.15;
    let center_avoidance = min_side * 0.25;
    let clamp_box = viewport.fractional_bounds(0.1, 0.9);
    let center = viewport.center();

    let mut anchors: Vec<Point> = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let accepted = place_with_attempts(rng, PLACEMENT_ATTEMPTS, |rng| {
            let angle = random_angle(rng);
            let distance = center_avoidance + uniform(rng, 0.0, min_side * 0.4);
            let candidate = Point::from_polar(center, angle, distance).clamp_to(clamp_box);
            anchors
                .iter()
                .all(|other| other.distance(candidate) >= min_distance)
                .then_some(candidate)
        });
        if let Some(anchor) = accepted {
            anchors.push(anchor);
        }
    }
    anchors
}

fn generate_details<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &KindProfile,
    radius: f32,
) -> Vec<SurfaceDetail> {
    let count = rng.random_range(4..=9);
    (0..count)
        .map(|_| {
            let kind = profile.detail_kinds[rng.random_range(0..profile.detail_kinds.len())];
            let size = radius * uniform(rng, 0.1, 0.5);
            let angle = random_angle(rng);
            let distance = uniform(rng, 0.0, radius * 0.7);
            let offset = Point::from_polar(Point::default(), angle, distance);
            let color = profile.detail_colors[rng.random_range(0..profile.detail_colors.len())];
            let stretch = match kind {
                DetailKind::Band => Some(Stretch {
                    angle: uniform(rng, 0.0, PI),
                    width: radius * uniform(rng, 0.8, 2.0),
                }),
                DetailKind::Cloud => Some(Stretch {
                    angle: uniform(rng, 0.0, PI),
                    width: radius * uniform(rng, 0.3, 0.9),
                }),
                DetailKind::Crater | DetailKind::Spot => None,
            };
            SurfaceDetail {
                kind,
                offset,
                size,
                color,
                stretch,
            }
        })
        .collect()
}

/// Generates the planets of a scene.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, viewport: Size, count: CountRange) -> Vec<Planet> {
    let wanted = count.sample(rng);
    let theme = THEMES[rng.random_range(0..THEMES.len())];
    let profiles: Vec<KindProfile> = theme.iter().map(|ranges| ranges.sample(rng)).collect();

    let anchors = place_anchors(rng, viewport, wanted);
    if anchors.len() < wanted {
        debug!(wanted, placed = anchors.len(); "Dropped planets that found no free position");
    }

    let depth_box = viewport.fractional_bounds(0.2, 0.8);
    let planets: Vec<Planet> = anchors
        .into_iter()
        .enumerate()
        .map(|(i, anchor)| {
            let profile = &profiles[i % profiles.len()];

            // Planets near the edges look farther away
            let size_multiplier = if depth_box.contains(anchor) { 1.0 } else { 0.7 };
            let radius = uniform(rng, 10.0, 25.0) * size_multiplier;
            let orbit_radius = radius * uniform(rng, 0.5, 1.0);
            let details = generate_details(rng, profile, radius);
            let orbit_speed = uniform(rng, 0.00005, 0.00015);
            let orbit_angle = random_angle(rng);
            let ring_width = radius * uniform(rng, 0.5, 1.2);
            let ring_tilt = uniform(rng, 0.0, PI / 6.0);
            let moon_angle = random_angle(rng);

            let rings = profile.has_rings.then(|| Rings {
                color: profile.ring_color,
                width: ring_width,
                tilt: ring_tilt,
            });
            let moon = profile.has_moon.then(|| Moon {
                size: radius * profile.moon_size,
                color: profile.moon_color,
                distance_factor: profile.moon_distance,
                speed: profile.moon_speed,
                angle: moon_angle,
            });

            Planet {
                kind: profile.kind,
                anchor,
                orbit_radius,
                orbit_speed,
                orbit_angle,
                radius,
                color: profile.color,
                details,
                rings,
                moon,
            }
        })
        .collect();

    debug!(planets = planets.len(); "Planets generated");
    planets
}
