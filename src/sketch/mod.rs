pub mod contours;
pub mod preprocessing;
pub mod strokes;

#[cfg(feature = "gui")]
pub mod audio;
#[cfg(feature = "gui")]
pub mod render;

use image::DynamicImage;
use tracing::debug;

use self::contours::Boundary;
use self::strokes::PenCommand;

/// Main image-to-stroke pipeline orchestrator
pub struct SketchPipeline {
    /// Fixed binarization cutoff applied to the Laplacian magnitude.
    pub edge_cutoff: u8,
}

/// Everything the renderer needs: the source dimensions, both boundary
/// sets, and the pen-command stream derived from them.
#[derive(Debug, Clone)]
pub struct SketchPlan {
    pub width: u32,
    pub height: u32,
    pub outer: Vec<Boundary>,
    pub all: Vec<Boundary>,
    pub commands: Vec<PenCommand>,
}

impl SketchPipeline {
    pub fn new() -> Self {
        Self { edge_cutoff: 50 }
    }

    pub fn with_edge_cutoff(mut self, cutoff: u8) -> Self {
        self.edge_cutoff = cutoff;
        self
    }

    /// Run the full pipeline on a decoded image: normalize orientation,
    /// extract the edge mask, trace both boundary sets, and plan the pen
    /// commands (outer boundaries first, then the full set, as the
    /// original drawing order dictates).
    pub fn trace(&self, img: &DynamicImage) -> SketchPlan {
        let normalized = preprocessing::normalize_orientation(img);
        let gray = preprocessing::to_grayscale(&normalized);
        let edges = preprocessing::edge_response(&gray);
        let mask = preprocessing::binarize(&edges, self.edge_cutoff);

        let outer = contours::trace_outer(&mask);
        let all = contours::trace_all(&mask);
        debug!(
            outer = outer.len(),
            all = all.len(),
            "traced boundaries"
        );

        let (width, height) = (gray.width(), gray.height());
        let mut commands = strokes::plan(&outer, width, height);
        commands.extend(strokes::plan(&all, width, height));

        SketchPlan {
            width,
            height,
            outer,
            all,
            commands,
        }
    }
}

impl Default for SketchPipeline {
    fn default() -> Self {
        Self::new()
    }
}
