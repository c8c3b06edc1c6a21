//! The spiral galaxy, from dust lanes up to the core glow.

use std::f32::consts::{PI, TAU};

use rand::Rng;

use starfall_core::{
    color::Color,
    draw::{Canvas, Gradient, Paint, StrokeCap, StrokeDefinition, Transform},
    geometry::Point,
};

use crate::scene::{
    galaxy::Galaxy,
    random::{HslaRange, random_angle, uniform},
};

const DUST_LANES: usize = 5;
const DUST_OPACITY: f32 = 0.4;

const ARMS: usize = 2;
const ARM_POINTS: usize = 450;

const FLARES: usize = 5;

/// Arm star color classes, picked by a single roll from the top down.
const RED_GIANT: HslaRange = HslaRange::new(10.0, 20.0, [80.0, 100.0], [70.0, 90.0]);
const YELLOWISH: HslaRange = HslaRange::new(50.0, 20.0, [80.0, 100.0], [70.0, 90.0]);
const BLUISH: HslaRange = HslaRange::new(220.0, 40.0, [70.0, 100.0], [60.0, 90.0]);
const WHITE: HslaRange = HslaRange::new(230.0, 60.0, [20.0, 50.0], [80.0, 100.0]);

fn arm_star_class(roll: f32) -> &'static HslaRange {
    if roll > 0.92 {
        &RED_GIANT
    } else if roll > 0.85 {
        &YELLOWISH
    } else if roll > 0.7 {
        &BLUISH
    } else {
        &WHITE
    }
}

pub fn paint<R: Rng + ?Sized>(canvas: &mut Canvas, galaxy: &Galaxy, rng: &mut R) {
    paint_dust_lanes(canvas, galaxy);
    paint_arms(canvas, galaxy, rng);
    paint_accretion_disk(canvas, galaxy);
    paint_event_horizon(canvas, galaxy);
    paint_lensing(canvas, galaxy);
    paint_sun(canvas, galaxy, rng);
    paint_core_glow(canvas, galaxy);
}

fn paint_dust_lanes(canvas: &mut Canvas, galaxy: &Galaxy) {
    let center = galaxy.center();
    let radius = galaxy.radius();
    let rotation = galaxy.rotation();
    let dust = Color::rgba(5, 5, 15, 0.8);

    // All lanes share one translucent group, so overlaps composite once
    canvas.with_group(&Transform::identity(), DUST_OPACITY, |canvas| {
        for lane in 0..DUST_LANES {
            let lane_f = lane as f32;
            let start = TAU / DUST_LANES as f32 * lane_f + rotation;
            let stroke = StrokeDefinition::solid(dust, radius * (0.1 + lane_f * 0.05));
            canvas.stroke_arc(
                center,
                radius * (0.4 + lane_f * 0.15),
                start,
                start + PI * 1.2,
                &stroke,
            );
        }
    });
}

/// Logarithmic spiral arms, re-jittered on every call.
fn paint_arms<R: Rng + ?Sized>(canvas: &mut Canvas, galaxy: &Galaxy, rng: &mut R) {
    let center = galaxy.center();
    let radius = galaxy.radius();

    for arm in 0..ARMS {
        let arm_offset = PI * arm as f32;
        // The spiral is undefined at the center itself
        for i in 1..ARM_POINTS {
            let along = i as f32 / ARM_POINTS as f32;
            let distance = along * radius;
            let tightness = 0.2 + uniform(rng, -0.01, 0.01);
            let angle = galaxy.rotation() + arm_offset + tightness * (distance / 10.0).ln();
            let scatter = uniform(rng, 0.0, 0.1) * distance / radius;

            let on_arm = Point::from_polar(center, angle, distance);
            let position = Point::new(
                on_arm.x() + (rng.random::<f32>() - 0.5) * scatter * distance,
                on_arm.y() + (rng.random::<f32>() - 0.5) * scatter * distance,
            );
            let size = uniform(rng, 0.8, 2.8) * (1.0 - along * 0.5);
            let dimmed = if rng.random::<f32>() > 0.2 { 1.0 } else { 0.5 };
            let opacity = (0.1 + along * 0.15) * uniform(rng, 0.5, 1.0) * dimmed;

            let roll = rng.random::<f32>();
            let color = arm_star_class(roll).sample(rng, opacity);
            canvas.fill_circle(position, size, &Paint::from(color));
        }
    }
}

/// Flattened, spinning disk around the central black hole.
fn paint_accretion_disk(canvas: &mut Canvas, galaxy: &Galaxy) {
    let hole = galaxy.black_hole_radius();
    let [inner, middle, outer] = galaxy.theme().disk();
    // Centered on the group origin so the gradient travels with the translate
    let gradient = Gradient::radial(Point::default(), hole, hole * 5.0)
        .with_stop(0.0, inner)
        .with_stop(0.2, middle)
        .with_stop(0.4, outer)
        .with_stop(1.0, Color::rgba(100, 50, 30, 0.0));

    let transform = Transform::identity()
        .translate(galaxy.center())
        .rotate(galaxy.rotation() * 2.0)
        .scale(1.0, 0.3);
    canvas.with_group(&transform, 1.0, |canvas| {
        canvas.fill_circle(Point::default(), hole * 5.0, &Paint::from(gradient));
    });
}

fn paint_event_horizon(canvas: &mut Canvas, galaxy: &Galaxy) {
    let center = galaxy.center();
    let hole = galaxy.black_hole_radius();
    let black = Color::rgba(0, 0, 0, 1.0);
    let gradient = Gradient::radial(center, 0.0, hole)
        .with_stop(0.0, black)
        .with_stop(0.7, Color::rgba(20, 10, 30, 0.9))
        .with_stop(1.0, black);

    canvas.fill_circle(center, hole, &Paint::from(gradient));
}

/// Dark halo of bent light around the horizon.
fn paint_lensing(canvas: &mut Canvas, galaxy: &Galaxy) {
    let center = galaxy.center();
    let hole = galaxy.black_hole_radius();
    let gradient = Gradient::radial(center, hole, hole * 2.5)
        .with_stop(0.0, Color::rgba(0, 0, 0, 0.9))
        .with_stop(0.5, Color::rgba(0, 0, 0, 0.5))
        .with_stop(1.0, Color::rgba(0, 0, 0, 0.0));

    canvas.fill_circle(center, hole * 2.5, &Paint::from(gradient));
}

fn paint_sun<R: Rng + ?Sized>(canvas: &mut Canvas, galaxy: &Galaxy, rng: &mut R) {
    let sun = galaxy.sun();
    let sun_radius = galaxy.sun_radius();

    let glow = Gradient::radial(sun, 0.0, sun_radius * 4.0)
        .with_stop(0.0, Color::rgba(255, 255, 220, 1.0))
        .with_stop(0.2, Color::rgba(255, 220, 100, 0.8))
        .with_stop(0.4, Color::rgba(255, 180, 50, 0.5))
        .with_stop(0.7, Color::rgba(255, 100, 50, 0.3))
        .with_stop(1.0, Color::rgba(255, 50, 0, 0.0));
    canvas.fill_circle(sun, sun_radius * 4.0, &Paint::from(glow));

    for _ in 0..FLARES {
        let angle = random_angle(rng);
        let length = sun_radius * uniform(rng, 0.5, 1.0);
        let tip = Point::from_polar(sun, angle, sun_radius + length);

        let gradient = Gradient::linear(sun, tip)
            .with_stop(0.0, Color::rgba(255, 255, 220, 0.7))
            .with_stop(1.0, Color::rgba(255, 100, 0, 0.0));
        let mut stroke = StrokeDefinition::new(gradient, sun_radius * uniform(rng, 0.1, 0.3));
        // Rounded ends, where a plain canvas stroke would be butt-capped
        stroke.set_cap(StrokeCap::Round);

        canvas.stroke_bezier(
            sun,
            Point::from_polar(sun, angle, sun_radius * 1.2),
            Point::from_polar(sun, angle, sun_radius * 1.5),
            tip,
            &stroke,
        );
    }

    canvas.fill_circle(sun, sun_radius, &Paint::from(Color::rgba(255, 255, 220, 1.0)));
}

fn paint_core_glow(canvas: &mut Canvas, galaxy: &Galaxy) {
    let center = galaxy.center();
    let reach = galaxy.radius() * 0.3;
    let [inner, outer] = galaxy.theme().core();
    let gradient = Gradient::radial(center, 0.0, reach)
        .with_stop(0.0, inner)
        .with_stop(1.0, outer);

    canvas.fill_circle(center, reach, &Paint::from(gradient));
}
