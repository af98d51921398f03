mod backdrop;
mod config;
mod debounce;
mod field;
mod frame_loop;
mod host;
mod modal;
mod stage;
mod style;

use std::path::Path;
use std::time::Duration;

use iced::button::{self, Button};
use iced::canvas::Canvas;
use iced::{
    Align, Application, Clipboard, Column, Command, Container, Element, Image, Length, Row,
    Settings, Space, Subscription, Text,
};
use iced_native::{window, Event};

use crate::backdrop::Backdrop;
use crate::config::Parameters;
use crate::debounce::Ticket;
use crate::host::HostProfile;
use crate::modal::{Entry, Picture, ENTRIES};
use crate::stage::Stage;

#[derive(Clone, Debug)]
enum Message {
    Frame,
    TogglePause,
    OpenDetails(&'static str),
    CloseDetails,
    ResizeSettled(Ticket),
    EventOccurred(Event),
}

struct Controls {
    pause_button: button::State,
    close_button: button::State,
    entry_buttons: Vec<button::State>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            pause_button: button::State::default(),
            close_button: button::State::default(),
            entry_buttons: ENTRIES.iter().map(|_| button::State::default()).collect(),
        }
    }
}

struct Showcase {
    stage: Stage,
    controls: Controls,
}

fn next_frame(interval: Duration) -> Command<Message> {
    Command::perform(tokio::time::sleep(interval), |_| Message::Frame)
}

impl Showcase {
    fn request_frame(&self, request: bool) -> Command<Message> {
        if request {
            next_frame(self.stage.frame_interval())
        } else {
            Command::none()
        }
    }
}

impl Application for Showcase {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Flags = Parameters;

    fn new(parameters: Self::Flags) -> (Self, Command<Message>) {
        let host = HostProfile::from_parameters(&parameters);
        let (backdrop, request) = match Backdrop::launch(&parameters, host, &mut rand::thread_rng()) {
            Some((backdrop, request)) => (Some(backdrop), request),
            None => (None, false),
        };

        let showcase = Self {
            stage: Stage::new(backdrop),
            controls: Controls::default(),
        };
        let command = showcase.request_frame(request);
        (showcase, command)
    }

    fn title(&self) -> String {
        String::from("Portfolio")
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.stage.has_backdrop() {
            iced_native::subscription::events().map(Message::EventOccurred)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Self::Message, _clipboard: &mut Clipboard) -> Command<Message> {
        let request = match message {
            Message::Frame => self.stage.frame(),
            Message::TogglePause => self.stage.toggle_pause(),
            Message::OpenDetails(key) => self.stage.open_details(key),
            Message::CloseDetails => self.stage.close_details(),
            Message::EventOccurred(Event::Window(window::Event::Resized { width, height })) => {
                if let Some((ticket, window)) = self.stage.resize_signal(width, height) {
                    return Command::perform(tokio::time::sleep(window), move |_| {
                        Message::ResizeSettled(ticket)
                    });
                }
                false
            }
            Message::EventOccurred(_) => false,
            Message::ResizeSettled(ticket) => {
                self.stage.resize_settled(ticket, &mut rand::thread_rng());
                false
            }
        };
        self.request_frame(request)
    }

    fn view(&mut self) -> Element<Message> {
        let Self { stage, controls } = self;
        let has_backdrop = stage.has_backdrop();
        let paused_by_user = stage.paused_by_user();

        let body: Element<Message> = match (stage.details(), stage.backdrop_mut()) {
            (Some(entry), _) => Container::new(details(entry, &mut controls.close_button))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y()
                .into(),
            (None, Some(backdrop)) => Canvas::new(backdrop)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            (None, None) => Space::new(Length::Fill, Length::Fill).into(),
        };

        let mut control_row = Row::new().spacing(10).align_items(Align::Center);
        if has_backdrop {
            control_row = control_row.push(
                Button::new(
                    &mut controls.pause_button,
                    Text::new(if paused_by_user { "Resume" } else { "Pause" }),
                )
                .on_press(Message::TogglePause)
                .style(style::Button),
            );
        }
        let control_row = ENTRIES
            .iter()
            .zip(controls.entry_buttons.iter_mut())
            .fold(control_row, |row, ((key, entry), state)| {
                row.push(
                    Button::new(state, Text::new(entry.title()).size(16))
                        .on_press(Message::OpenDetails(*key))
                        .style(style::Button),
                )
            });

        let content = Column::new()
            .spacing(10)
            .padding(10)
            .align_items(Align::Center)
            .push(body)
            .push(control_row);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::Container)
            .into()
    }
}

fn details<'a>(entry: &'static Entry, close_button: &'a mut button::State) -> Element<'a, Message> {
    let mut card = Column::new().spacing(12).padding(20).max_width(640);

    match entry.picture(|source| Path::new(source).exists()) {
        Some(Picture::File(path)) => {
            card = card.push(Image::new(path).width(Length::Units(320)));
        }
        Some(Picture::Placeholder(url)) => {
            card = card.push(Text::new(url).size(12));
        }
        None => {}
    }
    card = card.push(Text::new(entry.title()).size(28));
    if let Some(subtitle) = entry.subtitle() {
        card = card.push(Text::new(subtitle).size(20));
    }
    card = card.push(Text::new(entry.body()).size(16));

    let tech = entry
        .tech()
        .iter()
        .fold(Row::new().spacing(8), |row, tag| row.push(Text::new(*tag).size(14)));
    card = card.push(tech);

    if let Some(action) = entry.call_to_action() {
        let arrow = if action.external { " ->" } else { "" };
        card = card.push(Text::new(format!("{}{}  {}", action.label, arrow, action.href)).size(14));
    }

    card = card.push(
        Button::new(close_button, Text::new("Close"))
            .on_press(Message::CloseDetails)
            .style(style::Button),
    );

    Container::new(card).style(style::Dialog).into()
}

fn main() -> iced::Result {
    env_logger::init();

    let parameters = Parameters::load_or_default("parameters.json");
    let window = iced::window::Settings {
        size: (parameters.window_width, parameters.window_height),
        ..iced::window::Settings::default()
    };

    Showcase::run(Settings {
        window,
        antialiasing: true,
        ..Settings::with_flags(parameters)
    })
}
