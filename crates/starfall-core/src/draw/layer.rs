//! Z-ordering of painted nodes.
//!
//! The painter may visit scene parts in any order; the [`RenderLayer`] a
//! node was recorded on decides where it ends up in the document.
//!
//! # Example
//!
//! ```
//! # use starfall_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Stars, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! // Background renders first even though it was added second
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

pub type SvgNode = Box<dyn svg::Node>;

/// Stacking slots of a frame, bottom first.
///
/// Declaration order is the `Ord` order and therefore the paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Sky gradient filling the whole surface
    Background,
    /// Spiral galaxy with its black hole and sun
    Galaxy,
    /// Twinkling background starfield
    Stars,
    /// Constellation lines, stars and labels
    Constellations,
    /// Planets with details, rings and moons
    Planets,
    /// Orbiting satellite
    Satellite,
    /// Shooting star trails
    ShootingStars,
    /// Black hole beneath the page buttons
    BlackHole,
    /// Page title and link buttons
    Overlay,
}

impl RenderLayer {
    /// Value of the group's `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Galaxy => "galaxy",
            Self::Stars => "stars",
            Self::Constellations => "constellations",
            Self::Planets => "planets",
            Self::Satellite => "satellite",
            Self::ShootingStars => "shooting-stars",
            Self::BlackHole => "black-hole",
            Self::Overlay => "overlay",
        }
    }
}

/// Nodes tagged with their layer, plus the `<defs>` content they refer to.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
    definitions: Vec<SvgNode>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Records a gradient or other node that belongs in `<defs>`.
    pub fn add_definition(&mut self, node: SvgNode) {
        self.definitions.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes recorded on `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    pub fn definitions_len(&self) -> usize {
        self.definitions.len()
    }

    /// Drains the definitions, oldest first.
    pub fn take_definitions(&mut self) -> Vec<SvgNode> {
        std::mem::take(&mut self.definitions)
    }

    /// One `<g data-layer="...">` per non-empty layer, bottom to top.
    ///
    /// Within a layer nodes keep paint order. Definitions are left out; take
    /// them with [`Self::take_definitions`] before rendering.
    pub fn render(mut self) -> Vec<SvgNode> {
        // Stable sort keeps paint order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut groups: Vec<(RenderLayer, svg_element::Group)> = Vec::new();
        for (layer, node) in self.items {
            match groups.last_mut() {
                Some((current, group)) if *current == layer => {
                    *group = std::mem::replace(group, svg_element::Group::new()).add(node);
                }
                _ => {
                    let group = svg_element::Group::new()
                        .set("data-layer", layer.name())
                        .add(node);
                    groups.push((layer, group));
                }
            }
        }

        groups
            .into_iter()
            .map(|(_, group)| Box::new(group) as SvgNode)
            .collect()
    }
}
