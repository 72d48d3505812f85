pub mod sketch;
pub mod weather;

pub use sketch::{SketchPipeline, SketchPlan};
pub use sketch::contours::{Boundary, BoundaryKind};
pub use sketch::strokes::{PenCommand, Segment};
pub use weather::{WeatherError, WeatherService};
pub use weather::models::{ForecastResponse, Location};
