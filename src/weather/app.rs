//! The weather desktop application: a main window with one input field and
//! three actions, plus secondary windows for details and the temperature
//! chart. Every action blocks the event loop for the duration of its
//! network calls.

use std::collections::BTreeMap;

use iced::widget::{button, canvas, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Font, Length, Size, Subscription, Task, Theme, window};
use tokio::runtime::Runtime;
use tracing::warn;

use super::WeatherService;
use super::chart::TemperatureChart;
use super::error::WeatherError;

/// Open the application and block until the main window is closed.
pub fn run(service: WeatherService, rt: Runtime) -> iced::Result {
    iced::daemon(WeatherApp::title, WeatherApp::update, WeatherApp::view)
        .subscription(WeatherApp::subscription)
        .theme(WeatherApp::theme)
        .run_with(move || WeatherApp::new(service, rt))
}

#[derive(Debug, Clone)]
enum Message {
    CityChanged(String),
    Search,
    ShowDetails,
    ShowChart,
    WindowOpened(window::Id),
    WindowClosed(window::Id),
}

enum Pane {
    Details { title: String, body: String },
    Chart(TemperatureChart),
}

struct WeatherApp {
    service: WeatherService,
    rt: Runtime,
    main_window: window::Id,
    panes: BTreeMap<window::Id, Pane>,
    city: String,
    report: String,
}

impl WeatherApp {
    fn new(service: WeatherService, rt: Runtime) -> (Self, Task<Message>) {
        let (main_window, open) = window::open(window::Settings {
            size: Size::new(840.0, 640.0),
            ..window::Settings::default()
        });
        (
            Self {
                service,
                rt,
                main_window,
                panes: BTreeMap::new(),
                city: String::new(),
                report: String::new(),
            },
            open.map(Message::WindowOpened),
        )
    }

    fn title(&self, window: window::Id) -> String {
        match self.panes.get(&window) {
            Some(Pane::Details { title, .. }) => title.clone(),
            Some(Pane::Chart(_)) => "Graph".to_string(),
            None => "Weather Data Processor".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CityChanged(city) => {
                self.city = city;
                Task::none()
            }
            Message::Search => {
                let city = self.city.trim().to_string();
                self.report = match self.rt.block_on(self.service.summary(&city)) {
                    Ok(report) => report,
                    Err(err) => {
                        log_failure(&err);
                        err.to_string()
                    }
                };
                Task::none()
            }
            Message::ShowDetails => {
                let city = self.city.trim().to_string();
                let pane = match self.rt.block_on(self.service.details(&city)) {
                    Ok(body) => Pane::Details {
                        title: "Detalii".to_string(),
                        body,
                    },
                    Err(err) => {
                        log_failure(&err);
                        Pane::Details {
                            title: "Eroare".to_string(),
                            body: err.to_string(),
                        }
                    }
                };
                self.open_pane(pane, Size::new(900.0, 620.0))
            }
            Message::ShowChart => {
                let city = self.city.trim().to_string();
                match self.rt.block_on(self.service.day_chart(&city)) {
                    Ok(series) => self.open_pane(
                        Pane::Chart(TemperatureChart::new(series)),
                        Size::new(900.0, 560.0),
                    ),
                    Err(err) => {
                        log_failure(&err);
                        self.report = err.to_string();
                        Task::none()
                    }
                }
            }
            Message::WindowOpened(_) => Task::none(),
            Message::WindowClosed(id) => {
                if id == self.main_window {
                    iced::exit()
                } else {
                    self.panes.remove(&id);
                    Task::none()
                }
            }
        }
    }

    fn open_pane(&mut self, pane: Pane, size: Size) -> Task<Message> {
        let (id, open) = window::open(window::Settings {
            size,
            ..window::Settings::default()
        });
        self.panes.insert(id, pane);
        open.map(Message::WindowOpened)
    }

    fn view(&self, window: window::Id) -> Element<'_, Message> {
        match self.panes.get(&window) {
            Some(Pane::Details { body, .. }) => container(
                scrollable(text(body).font(Font::MONOSPACE).size(13))
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .padding(10)
            .into(),
            Some(Pane::Chart(chart)) => canvas(chart)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => self.main_view(),
        }
    }

    fn main_view(&self) -> Element<'_, Message> {
        let input = row![
            text("Introduceti orasul:"),
            text_input("", &self.city)
                .on_input(Message::CityChanged)
                .on_submit(Message::Search)
                .width(260),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let actions = row![
            button("Search").on_press(Message::Search),
            button("Show Details").on_press(Message::ShowDetails),
            button("Grafic").on_press(Message::ShowChart),
        ]
        .spacing(10);

        let report = scrollable(text(&self.report).font(Font::MONOSPACE).size(13))
            .width(Length::Fill)
            .height(Length::Fill);

        container(
            column![input, actions, report]
                .spacing(12)
                .padding(16),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        window::close_events().map(Message::WindowClosed)
    }

    fn theme(&self, _window: window::Id) -> Theme {
        Theme::Dark
    }
}

fn log_failure(err: &WeatherError) {
    if !matches!(err, WeatherError::UnknownCity(_)) {
        warn!(error = %err, "weather action failed");
    }
}
