use crate::sketch::contours::Boundary;

/// A point in centered Cartesian coordinates: origin at the image center,
/// y-axis pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenPoint {
    pub x: f64,
    pub y: f64,
}

/// One plotter instruction. A `MoveTo` issued while the pen is down draws a
/// segment from the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenCommand {
    PenUp,
    MoveTo(PenPoint),
    PenDown,
}

/// A drawn line segment in centered Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: PenPoint,
    pub to: PenPoint,
}

/// Translate a pixel coordinate (origin top-left, y down) to the centered
/// drawing coordinate (origin at image center, y up).
pub fn to_centered(width: u32, height: u32, px: u32, py: u32) -> PenPoint {
    PenPoint {
        x: f64::from(px) - f64::from(width) / 2.0,
        y: f64::from(height) / 2.0 - f64::from(py),
    }
}

/// Inverse of [`to_centered`].
pub fn to_pixel(width: u32, height: u32, point: PenPoint) -> (f64, f64) {
    (
        point.x + f64::from(width) / 2.0,
        f64::from(height) / 2.0 - point.y,
    )
}

/// Plan the pen-command stream for a set of boundaries: lift the pen at the
/// start of each boundary, then for every point move there and lower the
/// pen. Boundaries and points are consumed strictly in input order.
pub fn plan(boundaries: &[Boundary], width: u32, height: u32) -> Vec<PenCommand> {
    let mut commands = Vec::new();
    for boundary in boundaries {
        commands.push(PenCommand::PenUp);
        for point in &boundary.points {
            commands.push(PenCommand::MoveTo(to_centered(width, height, point.x, point.y)));
            commands.push(PenCommand::PenDown);
        }
    }
    commands
}

/// Replay a command stream with plotter semantics and collect the segments
/// it draws: a `MoveTo` with the pen down draws from the current position,
/// a `MoveTo` with the pen up only travels.
pub fn replay(commands: &[PenCommand]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut position: Option<PenPoint> = None;
    let mut pen_down = false;
    for command in commands {
        match *command {
            PenCommand::PenUp => pen_down = false,
            PenCommand::PenDown => pen_down = true,
            PenCommand::MoveTo(target) => {
                if pen_down {
                    if let Some(from) = position {
                        segments.push(Segment { from, to: target });
                    }
                }
                position = Some(target);
            }
        }
    }
    segments
}
