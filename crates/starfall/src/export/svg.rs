//! SVG file output.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document, node::element::Definitions};

use starfall_core::{draw::LayeredOutput, geometry::Size};

use super::{Error, Exporter};
use crate::render::Frame;

/// Assembles a standalone document of `size` from painted layers.
///
/// Gradient definitions go into a leading `<defs>` element, followed by one
/// group per non-empty layer from bottom to top.
pub fn render_document(size: Size, mut output: LayeredOutput) -> Document {
    let mut doc = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", size.width(), size.height()),
        )
        .set("width", size.width())
        .set("height", size.height());

    let definitions = output.take_definitions();
    if !definitions.is_empty() {
        let mut defs = Definitions::new();
        for definition in definitions {
            defs = defs.add(definition);
        }
        doc = doc.add(defs);
    }

    for layer in output.render() {
        doc = doc.add(layer);
    }
    doc
}

/// Path of frame `index` when writing a numbered sequence.
///
/// `out/sky.svg` becomes `out/sky_0007.svg` for frame 7.
pub fn frame_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "frame".into(), |stem| stem.to_string_lossy());
    let extension = path
        .extension()
        .map_or_else(|| "svg".into(), |ext| ext.to_string_lossy());
    path.with_file_name(format!("{stem}_{index:04}.{extension}"))
}

/// Builder for [`Svg`] exporters.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    path: PathBuf,
    numbered: bool,
}

impl SvgBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            numbered: false,
        }
    }

    /// Writes every frame to its own numbered file instead of overwriting
    /// one file.
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::Render`] when the output path has no file name.
    pub fn build(self) -> Result<Svg, Error> {
        if self.path.file_name().is_none() {
            return Err(Error::Render(format!(
                "output path `{}` has no file name",
                self.path.display()
            )));
        }
        Ok(Svg {
            path: self.path,
            numbered: self.numbered,
            written: Vec::new(),
        })
    }
}

/// Writes frames as SVG files.
#[derive(Debug)]
pub struct Svg {
    path: PathBuf,
    numbered: bool,
    written: Vec<PathBuf>,
}

impl Svg {
    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Consumes the exporter and returns the files it wrote.
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }

    fn target_path(&self, index: usize) -> PathBuf {
        if self.numbered {
            frame_path(&self.path, index)
        } else {
            self.path.clone()
        }
    }

    fn write_document(&self, path: &Path, doc: &Document) -> Result<(), Error> {
        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");

        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_frame(&mut self, frame: &Frame) -> Result<(), Error> {
        let path = self.target_path(frame.index());
        self.write_document(&path, frame.document())?;
        debug!(frame = frame.index(); "SVG frame written");

        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use starfall_core::{
        color::Color,
        draw::{Canvas, Paint, RenderLayer},
        geometry::Point,
    };

    use super::*;

    #[test]
    fn test_frame_path_numbering() {
        assert_eq!(
            frame_path(Path::new("out/sky.svg"), 7),
            PathBuf::from("out/sky_0007.svg")
        );
        assert_eq!(
            frame_path(Path::new("sky"), 12345),
            PathBuf::from("sky_12345.svg")
        );
    }

    #[test]
    fn test_render_document_layout() {
        let mut canvas = Canvas::new(Size::new(40.0, 30.0));
        canvas.set_layer(RenderLayer::Stars);
        canvas.fill_circle(Point::new(5.0, 5.0), 2.0, &Paint::from(Color::default()));

        let doc = render_document(Size::new(40.0, 30.0), canvas.finish());
        let svg = doc.to_string();
        assert!(svg.contains("viewBox=\"0 0 40 30\""));
        assert!(svg.contains("data-layer=\"stars\""));
        assert!(!svg.contains("<defs"));
    }

    #[test]
    fn test_build_rejects_directory_like_path() {
        assert!(matches!(
            SvgBuilder::new("..").build(),
            Err(Error::Render(_))
        ));
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let exporter = SvgBuilder::new(dir.path().join("missing").join("out.svg"))
            .build()
            .expect("valid path");
        let doc = render_document(Size::new(1.0, 1.0), LayeredOutput::new());

        let path = dir.path().join("missing").join("out.svg");
        assert!(matches!(
            exporter.write_document(&path, &doc),
            Err(Error::Io(_))
        ));
        assert!(fs::metadata(&path).is_err());
    }
}
