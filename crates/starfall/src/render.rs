//! Frame painting.
//!
//! Paints a [`Scene`] onto a [`Canvas`] in a fixed bottom-to-top order:
//!
//! ```text
//! background → galaxy → stars → constellations → planets
//!            → satellite → shooting stars → black hole → page overlay
//! ```
//!
//! Each group of objects records onto its own [`RenderLayer`], so the
//! z-order holds no matter how painting is interleaved. Galaxy arms and
//! solar flares are re-jittered on every frame from the scene RNG.

mod background;
mod bodies;
mod galaxy;
mod overlay;
mod sky;

pub use overlay::OverlayLayout;

use log::trace;
use rand::Rng;

use starfall_core::{
    draw::{Canvas, RenderLayer},
    geometry::Size,
};

use crate::{config::PageConfig, export, scene::Scene};

/// One painted frame of an animation.
#[derive(Debug)]
pub struct Frame {
    index: usize,
    size: Size,
    document: svg::Document,
}

impl Frame {
    /// Position of the frame in its animation, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The complete SVG document of this frame.
    pub fn document(&self) -> &svg::Document {
        &self.document
    }

    /// Serializes the frame as a standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }
}

/// Paints `scene` (and the page overlay, when enabled) as frame `index`.
pub fn paint_frame<R: Rng + ?Sized>(
    scene: &Scene,
    page: &PageConfig,
    rng: &mut R,
    index: usize,
) -> Frame {
    let size = scene.viewport().size();
    let mut canvas = Canvas::new(size);

    canvas.set_layer(RenderLayer::Background);
    background::paint(&mut canvas, scene.background());

    canvas.set_layer(RenderLayer::Galaxy);
    galaxy::paint(&mut canvas, scene.galaxy(), rng);

    canvas.set_layer(RenderLayer::Stars);
    sky::paint_stars(&mut canvas, scene.stars());

    canvas.set_layer(RenderLayer::Constellations);
    sky::paint_constellations(
        &mut canvas,
        scene.constellations(),
        scene.show_constellation_names(),
    );

    canvas.set_layer(RenderLayer::Planets);
    bodies::paint_planets(&mut canvas, scene.planets());

    canvas.set_layer(RenderLayer::Satellite);
    bodies::paint_satellite(&mut canvas, scene.satellite());

    canvas.set_layer(RenderLayer::ShootingStars);
    sky::paint_shooting_stars(&mut canvas, scene.shooting_stars());

    canvas.set_layer(RenderLayer::BlackHole);
    bodies::paint_black_hole(&mut canvas, scene.black_hole());

    if page.enabled() {
        canvas.set_layer(RenderLayer::Overlay);
        overlay::paint(&mut canvas, page);
    }

    let output = canvas.finish();
    trace!(frame = index, definitions = output.definitions_len(); "Frame painted");

    Frame {
        index,
        size,
        document: export::svg::render_document(size, output),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        config::SceneConfig,
        scene::{SceneId, Viewport},
    };

    fn scene_and_rng(seed: u64) -> (Scene, StdRng) {
        let viewport = Viewport::new(Size::new(1280.0, 800.0)).expect("valid viewport");
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = Scene::generate(
            SceneId::from_seed(seed),
            viewport,
            &SceneConfig::default(),
            &mut rng,
        );
        (scene, rng)
    }

    fn layer_position(svg: &str, layer: RenderLayer) -> Option<usize> {
        svg.find(&format!("data-layer=\"{}\"", layer.name()))
    }

    #[test]
    fn test_layers_render_bottom_to_top() {
        let (scene, mut rng) = scene_and_rng(31);
        let frame = paint_frame(&scene, &PageConfig::default(), &mut rng, 0);
        let svg = frame.to_svg_string();

        let order = [
            RenderLayer::Background,
            RenderLayer::Galaxy,
            RenderLayer::Stars,
            RenderLayer::Constellations,
            RenderLayer::Satellite,
            RenderLayer::BlackHole,
            RenderLayer::Overlay,
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|layer| layer_position(&svg, *layer).expect("layer present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_disabled_page_has_no_overlay() {
        let (scene, mut rng) = scene_and_rng(32);
        let frame = paint_frame(&scene, &PageConfig::disabled(), &mut rng, 3);

        assert_eq!(frame.index(), 3);
        assert!(layer_position(&frame.to_svg_string(), RenderLayer::Overlay).is_none());
    }

    #[test]
    fn test_document_is_sized_to_viewport() {
        let (scene, mut rng) = scene_and_rng(33);
        let frame = paint_frame(&scene, &PageConfig::disabled(), &mut rng, 0);
        let svg = frame.to_svg_string();

        assert_eq!(frame.size(), Size::new(1280.0, 800.0));
        assert!(svg.contains("viewBox=\"0 0 1280 800\""));
        assert!(svg.contains("<defs>"));
    }
}
