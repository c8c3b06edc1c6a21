//! Named constellations: small star patterns joined by faint lines.

use std::f32::consts::TAU;

use log::debug;
use rand::{Rng, seq::SliceRandom};

use starfall_core::geometry::{Point, Size};

use super::{
    random::{place_with_attempts, random_sign, uniform},
    stars::Star,
};
use crate::config::CountRange;

const PLACEMENT_ATTEMPTS: usize = 30;
const LABEL_OFFSET: f32 = 20.0;
const STAR_TINT: [u8; 3] = [255, 255, 255];

/// Star count and edge list of a named constellation.
#[derive(Debug)]
pub struct ConstellationPattern {
    name: &'static str,
    star_count: usize,
    connections: &'static [(usize, usize)],
}

impl ConstellationPattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn star_count(&self) -> usize {
        self.star_count
    }

    pub fn connections(&self) -> &'static [(usize, usize)] {
        self.connections
    }
}

const CHAIN_7: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)];
const CHAIN_5: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 3), (3, 4)];

pub const PATTERNS: [ConstellationPattern; 11] = [
    ConstellationPattern {
        name: "Ursa Major",
        star_count: 7,
        connections: CHAIN_7,
    },
    ConstellationPattern {
        name: "Orion",
        star_count: 7,
        connections: &[(0, 1), (1, 2), (0, 3), (3, 4), (4, 5), (3, 6)],
    },
    ConstellationPattern {
        name: "Cassiopeia",
        star_count: 5,
        connections: CHAIN_5,
    },
    ConstellationPattern {
        name: "Lyra",
        star_count: 5,
        connections: &[(0, 1), (1, 2), (1, 3), (1, 4)],
    },
    ConstellationPattern {
        name: "Cygnus",
        star_count: 6,
        connections: &[(0, 1), (1, 2), (2, 3), (1, 4), (4, 5)],
    },
    ConstellationPattern {
        name: "Perseus",
        star_count: 7,
        connections: CHAIN_7,
    },
    ConstellationPattern {
        name: "Scorpius",
        star_count: 7,
        connections: CHAIN_7,
    },
    ConstellationPattern {
        name: "Pegasus",
        star_count: 4,
        connections: &[(0, 1), (1, 2), (2, 3), (3, 0)],
    },
    ConstellationPattern {
        name: "Andromeda",
        star_count: 5,
        connections: CHAIN_5,
    },
    ConstellationPattern {
        name: "Draco",
        star_count: 8,
        connections: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)],
    },
    ConstellationPattern {
        name: "Aquila",
        star_count: 5,
        connections: &[(0, 1), (1, 2), (2, 3), (2, 4)],
    },
];

/// A placed constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    name: &'static str,
    stars: Vec<Star>,
    connections: &'static [(usize, usize)],
    label: Point,
}

impl Constellation {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Anchor points of the pattern; only the lines and the name are drawn.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Pairs of star indices joined by a line.
    pub fn connections(&self) -> &'static [(usize, usize)] {
        self.connections
    }

    /// Start of the name label.
    pub fn label(&self) -> Point {
        self.label
    }

    /// Endpoints of every connection line.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.connections.iter().filter_map(|&(from, to)| {
            let from = self.stars.get(from)?;
            let to = self.stars.get(to)?;
            Some((from.position(), to.position()))
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Region {
    center: Point,
    radius: f32,
}

/// Draws one region candidate; candidates inside the central box are pushed
/// out to an edge strip.
fn region_candidate<R: Rng + ?Sized>(rng: &mut R, viewport: Size) -> Region {
    let width = viewport.width();
    let height = viewport.height();
    let min_side = viewport.min_side();
    let avoidance = min_side * 0.25;
    let mid = viewport.center();

    let mut x = uniform(rng, avoidance, width - avoidance);
    let mut y = uniform(rng, avoidance, height - avoidance);

    if (x - mid.x()).abs() < avoidance && (y - mid.y()).abs() < avoidance {
        if rng.random_bool(0.5) {
            x = if rng.random_bool(0.5) {
                avoidance / 2.0
            } else {
                width - avoidance / 2.0
            };
        } else {
            y = if rng.random_bool(0.5) {
                avoidance / 2.0
            } else {
                height - avoidance / 2.0
            };
        }
    }

    Region {
        center: Point::new(x, y),
        radius: min_side * uniform(rng, 0.1, 0.2),
    }
}

fn build<R: Rng + ?Sized>(
    rng: &mut R,
    pattern: &ConstellationPattern,
    region: Region,
) -> Constellation {
    let n = pattern.star_count;
    let stars: Vec<Star> = (0..n)
        .map(|j| {
            let angle = j as f32 / n as f32 * TAU;
            let distance = uniform(rng, 0.0, region.radius * 0.8);
            let position = Point::from_polar(region.center, angle, distance);
            let size = uniform(rng, 1.5, 2.5);
            let brightness = uniform(rng, 0.7, 1.0);
            let brightness_delta = uniform(rng, 0.002, 0.007) * random_sign(rng);
            Star::new(position, size, brightness, brightness_delta, STAR_TINT)
        })
        .collect();

    let sum = stars
        .iter()
        .fold(Point::default(), |acc, star| acc.add_point(star.position()));
    let centroid = sum.scale(1.0 / n.max(1) as f32);
    let label = centroid.add_point(Point::new(LABEL_OFFSET, LABEL_OFFSET));

    Constellation {
        name: pattern.name,
        stars,
        connections: pattern.connections,
        label,
    }
}

/// Generates the constellations of a scene.
///
/// Patterns whose region cannot be placed are skipped.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: Size,
    count: CountRange,
) -> Vec<Constellation> {
    let wanted = count.sample(rng);
    let mut patterns: Vec<&ConstellationPattern> = PATTERNS.iter().collect();
    patterns.shuffle(rng);
    patterns.truncate(wanted);

    let min_distance = viewport.min_side() * 0.25;
    let mut regions: Vec<Region> = Vec::with_capacity(patterns.len());
    let mut constellations = Vec::with_capacity(patterns.len());
    let mut skipped = 0;

    for pattern in patterns {
        let placed = place_with_attempts(rng, PLACEMENT_ATTEMPTS, |rng| {
            let candidate = region_candidate(rng, viewport);
            regions
                .iter()
                .all(|other| other.center.distance(candidate.center) >= min_distance)
                .then_some(candidate)
        });
        match placed {
            Some(region) => {
                regions.push(region);
                constellations.push(build(rng, pattern, region));
            }
            None => skipped += 1,
        }
    }

    debug!(constellations = constellations.len(), skipped; "Constellations generated");
    constellations
}
