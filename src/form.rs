//! The mount point for search fields.
//!
//! A [`Form`] owns its fields, routes their messages, and holds the one
//! window-wide click listener that lets each field dismiss its results panel
//! when the user clicks elsewhere.

use iced::widget::Column;
use iced::{event, mouse, Element, Subscription, Task};
use url::Url;

use crate::config::{FieldOptions, FormConfig};
use crate::error::Error;
use crate::field::{self, SearchField};

/// Handle to a mounted field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

#[derive(Debug, Clone)]
pub enum Message {
    Field(FieldId, field::Message),
    /// Left click anywhere in the window
    PointerPressed,
}

#[derive(Debug, Default)]
pub struct Form {
    base_url: Option<Url>,
    fields: Vec<(FieldId, SearchField)>,
    next_id: usize,
}

impl Form {
    /// `base_url` resolves relative field urls, as a page origin would.
    pub fn new(base_url: Option<Url>) -> Self {
        Self {
            base_url,
            fields: Vec::new(),
            next_id: 0,
        }
    }

    /// Build a form from config, skipping (and logging) fields that fail to mount.
    pub fn from_config(config: &FormConfig) -> Self {
        let base_url = config.base_url.as_deref().and_then(|raw| match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring invalid base_url '{}': {}", raw, e);
                None
            }
        });

        let mut form = Self::new(base_url);
        for options in &config.fields {
            if let Err(e) = form.mount(options) {
                tracing::error!("Failed to mount field '{}': {}", options.input_name, e);
            }
        }
        form
    }

    /// Create a search field and append it to the form.
    pub fn mount(&mut self, options: &FieldOptions) -> Result<FieldId, Error> {
        let field = SearchField::new(options, self.base_url.as_ref())?;
        self.attach(field)
    }

    /// Append an already built field.
    pub fn attach(&mut self, field: SearchField) -> Result<FieldId, Error> {
        if self.fields.iter().any(|(_, f)| f.input_name() == field.input_name()) {
            return Err(Error::DuplicateInputName(field.input_name().to_string()));
        }

        let id = FieldId(self.next_id);
        self.next_id += 1;
        tracing::info!("Mounted field '{}' as {:?}", field.input_name(), id);
        self.fields.push((id, field));
        Ok(id)
    }

    /// Detach a field. It stops rendering and stops receiving window clicks.
    /// Results still in flight for it are dropped on arrival.
    pub fn unmount(&mut self, id: FieldId) -> Option<SearchField> {
        let index = self.fields.iter().position(|(field_id, _)| *field_id == id)?;
        let (_, field) = self.fields.remove(index);
        tracing::info!("Unmounted field '{}'", field.input_name());
        Some(field)
    }

    pub fn field(&self, id: FieldId) -> Option<&SearchField> {
        self.fields
            .iter()
            .find(|(field_id, _)| *field_id == id)
            .map(|(_, field)| field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Submitted name/value pairs, in mount order
    pub fn values(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|(_, field)| {
                let hidden = field.hidden_input();
                (hidden.name(), hidden.value())
            })
            .collect()
    }

    /// The form as an `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.values())
            .finish()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Field(id, message) => {
                let Some((_, field)) = self.fields.iter_mut().find(|(field_id, _)| *field_id == id)
                else {
                    tracing::debug!("Message for unmounted field {:?} ignored", id);
                    return Task::none();
                };
                field
                    .update(message)
                    .map(move |message| Message::Field(id, message))
            }
            Message::PointerPressed => Task::batch(self.fields.iter_mut().map(|(id, field)| {
                let id = *id;
                field
                    .update(field::Message::PointerPressed)
                    .map(move |message| Message::Field(id, message))
            })),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new().spacing(16);
        for (id, field) in &self.fields {
            let id = *id;
            column = column.push(field.view().map(move |message| Message::Field(id, message)));
        }
        column.into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.fields.is_empty() {
            return Subscription::none();
        }

        event::listen_with(|event, _status, _window| match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Message::PointerPressed)
            }
            _ => None,
        })
    }
}
