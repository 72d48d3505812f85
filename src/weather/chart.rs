//! Single-day temperature chart: day selection and tick math, plus the
//! canvas that renders the stem plot with pan and zoom.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::error::WeatherError;
use super::models::HourlySeries;

/// Tick spacing on the time axis.
pub const TICK_HOURS: i64 = 2;

/// The hourly temperature points of the first calendar day present in an
/// hourly series.
#[derive(Debug, Clone)]
pub struct DaySeries {
    pub date: NaiveDate,
    pub points: Vec<(NaiveDateTime, f32)>,
}

impl DaySeries {
    /// The plotted time range: exactly one calendar day starting at
    /// midnight of `date`.
    pub fn range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(NaiveTime::MIN);
        (start, start + Duration::days(1))
    }

    /// Tick positions across the range, [`TICK_HOURS`] apart, both range
    /// endpoints included.
    pub fn ticks(&self) -> Vec<NaiveDateTime> {
        let (start, end) = self.range();
        let mut ticks = Vec::new();
        let mut tick = start;
        while tick <= end {
            ticks.push(tick);
            tick += Duration::hours(TICK_HOURS);
        }
        ticks
    }
}

/// Select the first calendar day from an hourly series, pairing each
/// timestamp of that day with its temperature.
pub fn first_day_series(hourly: &HourlySeries) -> Result<DaySeries, WeatherError> {
    let temperatures = hourly
        .temperature
        .as_ref()
        .ok_or(WeatherError::MissingGroup("hourly temperature"))?;

    let parsed: Vec<(NaiveDateTime, f32)> = hourly
        .time
        .iter()
        .zip(temperatures)
        .filter_map(|(time, &temperature)| {
            NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|t| (t, temperature))
        })
        .collect();

    let Some(&(first, _)) = parsed.first() else {
        return Err(WeatherError::MissingGroup("hourly"));
    };

    let date = first.date();
    let points = parsed
        .into_iter()
        .filter(|(time, _)| time.date() == date)
        .collect();

    Ok(DaySeries { date, points })
}

#[cfg(feature = "gui")]
pub use self::stem_plot::TemperatureChart;

#[cfg(feature = "gui")]
mod stem_plot {
    use iced::widget::canvas::event::{Event, Status};
    use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
    use iced::{Color, Pixels, Point, Rectangle, Renderer, Theme, Vector, mouse};

    use super::DaySeries;

    const MARGIN_LEFT: f32 = 56.0;
    const MARGIN_RIGHT: f32 = 20.0;
    const MARGIN_TOP: f32 = 36.0;
    const MARGIN_BOTTOM: f32 = 48.0;

    /// Stem plot of one day's hourly temperature with mouse-drag pan and
    /// wheel zoom.
    pub struct TemperatureChart {
        series: DaySeries,
    }

    #[derive(Debug, Clone, Copy)]
    pub struct View {
        offset: Vector,
        zoom: f32,
        drag_from: Option<Point>,
    }

    impl Default for View {
        fn default() -> Self {
            Self {
                offset: Vector::new(0.0, 0.0),
                zoom: 1.0,
                drag_from: None,
            }
        }
    }

    impl TemperatureChart {
        pub fn new(series: DaySeries) -> Self {
            Self { series }
        }
    }

    impl<Message> Program<Message> for TemperatureChart {
        type State = View;

        fn update(
            &self,
            state: &mut View,
            event: Event,
            bounds: Rectangle,
            cursor: mouse::Cursor,
        ) -> (Status, Option<Message>) {
            let Event::Mouse(mouse_event) = event else {
                return (Status::Ignored, None);
            };

            match mouse_event {
                mouse::Event::WheelScrolled { delta } => {
                    if cursor.position_in(bounds).is_none() {
                        return (Status::Ignored, None);
                    }
                    let step = match delta {
                        mouse::ScrollDelta::Lines { y, .. } => y,
                        mouse::ScrollDelta::Pixels { y, .. } => y / 40.0,
                    };
                    state.zoom = (state.zoom * (1.0 + step * 0.1)).clamp(0.25, 8.0);
                    (Status::Captured, None)
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    match cursor.position_in(bounds) {
                        Some(position) => {
                            state.drag_from = Some(position);
                            (Status::Captured, None)
                        }
                        None => (Status::Ignored, None),
                    }
                }
                mouse::Event::CursorMoved { .. } => {
                    let (Some(from), Some(to)) = (state.drag_from, cursor.position_in(bounds))
                    else {
                        return (Status::Ignored, None);
                    };
                    state.offset = state.offset + (to - from);
                    state.drag_from = Some(to);
                    (Status::Captured, None)
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    state.drag_from = None;
                    (Status::Captured, None)
                }
                _ => (Status::Ignored, None),
            }
        }

        fn draw(
            &self,
            state: &View,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<Geometry> {
            let mut frame = Frame::new(renderer, bounds.size());
            let palette = theme.palette();
            let axis_color = palette.text;
            let stem_color = palette.primary;

            let plot = Rectangle {
                x: MARGIN_LEFT,
                y: MARGIN_TOP,
                width: (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
                height: (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            };

            let (start, end) = self.series.range();
            let span_seconds = (end - start).num_seconds() as f32;

            let temperatures = self.series.points.iter().map(|&(_, t)| t);
            let raw_min = temperatures.clone().fold(f32::INFINITY, f32::min);
            let raw_max = temperatures.fold(f32::NEG_INFINITY, f32::max);
            // the stem baseline sits at zero, so keep zero in view
            let y_min = raw_min.min(0.0) - 1.0;
            let y_max = raw_max.max(0.0) + 1.0;

            let x_of = |time: chrono::NaiveDateTime| -> f32 {
                let elapsed = (time - start).num_seconds() as f32;
                plot.x + plot.width * elapsed / span_seconds
            };
            let y_of = |value: f32| -> f32 {
                plot.y + plot.height * (y_max - value) / (y_max - y_min)
            };

            frame.with_save(|frame| {
                frame.translate(state.offset);
                frame.scale(state.zoom);

                let axis = Stroke::default().with_width(1.0).with_color(axis_color);
                let thin = Stroke::default()
                    .with_width(1.0)
                    .with_color(Color { a: 0.3, ..axis_color });

                // axes
                frame.stroke(
                    &Path::line(
                        Point::new(plot.x, plot.y),
                        Point::new(plot.x, plot.y + plot.height),
                    ),
                    axis,
                );
                frame.stroke(
                    &Path::line(
                        Point::new(plot.x, plot.y + plot.height),
                        Point::new(plot.x + plot.width, plot.y + plot.height),
                    ),
                    axis,
                );

                // time ticks, two hours apart
                for tick in self.series.ticks() {
                    let x = x_of(tick);
                    frame.stroke(
                        &Path::line(
                            Point::new(x, plot.y + plot.height),
                            Point::new(x, plot.y + plot.height + 5.0),
                        ),
                        axis,
                    );
                    frame.fill_text(Text {
                        content: tick.format("%H:%M").to_string(),
                        position: Point::new(x - 14.0, plot.y + plot.height + 8.0),
                        color: axis_color,
                        size: Pixels(11.0),
                        ..Text::default()
                    });
                }

                // temperature gridlines
                let y_steps = 6;
                for step in 0..=y_steps {
                    let value = y_min + (y_max - y_min) * step as f32 / y_steps as f32;
                    let y = y_of(value);
                    frame.stroke(
                        &Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y)),
                        thin,
                    );
                    frame.fill_text(Text {
                        content: format!("{value:.1}"),
                        position: Point::new(6.0, y - 6.0),
                        color: axis_color,
                        size: Pixels(11.0),
                        ..Text::default()
                    });
                }

                // stems with markers
                let baseline = y_of(0.0);
                let stem = Stroke::default().with_width(1.5).with_color(stem_color);
                for &(time, temperature) in &self.series.points {
                    let x = x_of(time);
                    let y = y_of(temperature);
                    frame.stroke(&Path::line(Point::new(x, baseline), Point::new(x, y)), stem);
                    frame.fill(&Path::circle(Point::new(x, y), 3.0), stem_color);
                }

                // title, axis labels, legend
                frame.fill_text(Text {
                    content: format!("Temperatura la data de {}", self.series.date),
                    position: Point::new(plot.x, 8.0),
                    color: axis_color,
                    size: Pixels(16.0),
                    ..Text::default()
                });
                frame.fill_text(Text {
                    content: "Timp".to_string(),
                    position: Point::new(
                        plot.x + plot.width / 2.0 - 14.0,
                        plot.y + plot.height + 26.0,
                    ),
                    color: axis_color,
                    size: Pixels(12.0),
                    ..Text::default()
                });
                frame.fill_text(Text {
                    content: "Temperatura(°C)".to_string(),
                    position: Point::new(6.0, plot.y - 20.0),
                    color: axis_color,
                    size: Pixels(12.0),
                    ..Text::default()
                });
                frame.fill_text(Text {
                    content: "— Temperatura".to_string(),
                    position: Point::new(plot.x + plot.width - 110.0, plot.y - 18.0),
                    color: stem_color,
                    size: Pixels(12.0),
                    ..Text::default()
                });
            });

            vec![frame.into_geometry()]
        }

        fn mouse_interaction(
            &self,
            state: &View,
            bounds: Rectangle,
            cursor: mouse::Cursor,
        ) -> mouse::Interaction {
            if state.drag_from.is_some() {
                mouse::Interaction::Grabbing
            } else if cursor.is_over(bounds) {
                mouse::Interaction::Crosshair
            } else {
                mouse::Interaction::default()
            }
        }
    }
}
