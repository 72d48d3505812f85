use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::widget::{canvas, container, image, stack};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Task, Theme, mouse};

use super::SketchPlan;
use super::strokes::{self, Segment};

/// Open the drawing window and replay the plan's pen commands over the
/// background picture. Blocks until the user closes the window.
pub fn run(plan: SketchPlan, background: &::image::DynamicImage) -> iced::Result {
    let rgba = background.to_rgba8();
    let handle = image::Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw());
    let app = SketchApp::new(plan, handle);

    iced::application("Drawing Maker", SketchApp::update, SketchApp::view)
        .window_size(Size::new(956.0, 720.0))
        .theme(SketchApp::theme)
        .run_with(move || (app, Task::none()))
}

#[derive(Debug, Clone)]
enum Message {}

struct SketchApp {
    background: image::Handle,
    strokes: StrokeCanvas,
}

impl SketchApp {
    fn new(plan: SketchPlan, background: image::Handle) -> Self {
        Self {
            background,
            strokes: StrokeCanvas {
                segments: strokes::replay(&plan.commands),
            },
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {}
    }

    fn view(&self) -> Element<'_, Message> {
        let layers = stack![
            image(self.background.clone())
                .width(Length::Fill)
                .height(Length::Fill),
            canvas(&self.strokes)
                .width(Length::Fill)
                .height(Length::Fill),
        ];

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::BLACK.into()),
                ..container::Style::default()
            })
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

struct StrokeCanvas {
    segments: Vec<Segment>,
}

impl<Message> Program<Message> for StrokeCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0;
        let pen = Stroke::default()
            .with_width(1.0)
            .with_color(Color::from_rgb(1.0, 0.0, 0.0));

        for segment in &self.segments {
            let from = Point::new(
                center_x + segment.from.x as f32,
                center_y - segment.from.y as f32,
            );
            let to = Point::new(
                center_x + segment.to.x as f32,
                center_y - segment.to.y as f32,
            );
            frame.stroke(&Path::line(from, to), pen);
        }

        vec![frame.into_geometry()]
    }
}
