use iced::widget::{button, column, container, row, text};
use iced::{Element, Fill, Padding, Subscription, Task, Theme};

use pickfield::config::Config;
use pickfield::form::{self, Form};
use pickfield::ui::theme;

pub struct State {
    form: Form,
    /// Body of the last submit, shown under the form
    last_submit: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Submit,
}

impl State {
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let form = Form::from_config(&config.form);
        tracing::info!("Form ready with {} field(s)", form.len());

        let state = Self {
            form,
            last_submit: None,
        };
        (state, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Pickfield")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(message) => self.form.update(message).map(Message::Form),
            Message::Submit => {
                let body = self.form.encode();
                tracing::info!("Form submitted: {}", body);
                self.last_submit = Some(body);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let submit = row![button("Submit").on_press(Message::Submit)];

        let mut content = column![self.form.view().map(Message::Form), submit]
            .spacing(16)
            .padding(Padding::new(16.0));

        if let Some(body) = &self.last_submit {
            content = content.push(text(body).size(12).color(theme::TEXT_SECONDARY));
        }

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.form.subscription().map(Message::Form)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
