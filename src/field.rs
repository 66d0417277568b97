use iced::widget::{button, column, mouse_area, row};
use iced::{Alignment, Element, Task};
use url::Url;

use crate::config::FieldOptions;
use crate::error::{Error, ResolveError};
use crate::item::Item;
use crate::source::{self, DataSource};
use crate::state::SearchState;
use crate::ui::{result_list, search_input};

/// The single value a field contributes to its form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenInput {
    name: String,
    value: String,
}

impl HiddenInput {
    fn new(name: String) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected id, or empty when nothing is selected
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Pointer moved onto (true) or off (false) the text input
    InputHovered(bool),
    /// Pointer moved into (true) or out of (false) the whole field
    WrapperHovered(bool),
    /// A click anywhere in the window
    PointerPressed,
    Resolved {
        generation: u64,
        result: Result<Vec<Item>, ResolveError>,
    },
    RowSelected(usize),
    ClearPressed,
}

/// A text input with live suggestions and a single committed selection
#[derive(Debug)]
pub struct SearchField {
    source: DataSource,
    placeholder: String,
    state: SearchState,
    hidden: HiddenInput,
    over_input: bool,
    over_wrapper: bool,
}

impl SearchField {
    pub fn new(options: &FieldOptions, base_url: Option<&Url>) -> Result<Self, Error> {
        let source = options.data_source(base_url)?;
        let mut field = Self::with_source(&options.input_name, source)?;
        field.placeholder = options.placeholder.clone();
        Ok(field)
    }

    /// Build a field around an already chosen data source.
    pub fn with_source(input_name: &str, source: DataSource) -> Result<Self, Error> {
        if input_name.trim().is_empty() {
            return Err(Error::EmptyInputName);
        }

        tracing::debug!("New search field '{}' ({:?})", input_name, source);

        Ok(Self {
            source,
            placeholder: FieldOptions::default().placeholder,
            state: SearchState::new(),
            hidden: HiddenInput::new(input_name.to_string()),
            over_input: false,
            over_wrapper: false,
        })
    }

    pub fn input_name(&self) -> &str {
        self.hidden.name()
    }

    pub fn hidden_input(&self) -> &HiddenInput {
        &self.hidden
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.state.selected()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&ResolveError> {
        self.state.last_error()
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn rows(&self) -> &[Item] {
        self.state.rows()
    }

    pub fn is_panel_open(&self) -> bool {
        self.state.is_panel_open()
    }

    pub fn is_read_only(&self) -> bool {
        self.state.is_locked()
    }

    /// The clear control is shown exactly while a selection is held
    pub fn is_clear_visible(&self) -> bool {
        self.state.is_locked()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                if self.state.set_query(query) {
                    self.search()
                } else {
                    Task::none()
                }
            }
            Message::InputHovered(inside) => {
                self.over_input = inside;
                Task::none()
            }
            Message::WrapperHovered(inside) => {
                self.over_wrapper = inside;
                Task::none()
            }
            Message::PointerPressed => {
                if self.over_input {
                    self.search()
                } else {
                    if !self.over_wrapper {
                        self.state.dismiss();
                    }
                    Task::none()
                }
            }
            Message::Resolved { generation, result } => {
                if let Err(e) = &result {
                    tracing::error!("Fetch error: {}", e);
                }
                if !self.state.settle(generation, result) {
                    tracing::debug!(
                        "Dropping stale results for '{}' (generation {})",
                        self.hidden.name,
                        generation
                    );
                }
                Task::none()
            }
            Message::RowSelected(index) => {
                if let Some(item) = self.state.select(index) {
                    self.hidden.value = item.id.clone();
                    tracing::info!("Selected item: id={} name={}", item.id, item.name);
                }
                Task::none()
            }
            Message::ClearPressed => {
                self.state.clear();
                self.hidden.value.clear();
                tracing::info!("Selected item cleared for '{}'", self.hidden.name);
                Task::none()
            }
        }
    }

    /// Resolve the current query against the data source.
    ///
    /// Local filtering settles before returning; a remote lookup leaves the
    /// field loading until the returned task delivers `Message::Resolved`.
    fn search(&mut self) -> Task<Message> {
        let ticket = self.state.begin_search();
        let generation = ticket.generation();

        match &self.source {
            DataSource::Local(items) => {
                let matches = source::filter_local(items, ticket.query());
                self.state.settle(generation, Ok(matches));
                Task::none()
            }
            DataSource::Remote(remote) => Task::perform(remote.resolve(ticket.query()), move |result| {
                Message::Resolved { generation, result }
            }),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = search_input::view(
            self.state.query(),
            &self.placeholder,
            self.is_read_only(),
            self.is_loading(),
        );

        let mut controls = row![input].spacing(8).align_y(Alignment::Center);
        if self.is_clear_visible() {
            controls = controls.push(
                button("Clear")
                    .on_press(Message::ClearPressed)
                    .style(button::secondary),
            );
        }

        let mut content = column![controls].spacing(4);
        if self.is_panel_open() {
            content = content.push(result_list::view(self.state.rows()));
        }

        mouse_area(content)
            .on_enter(Message::WrapperHovered(true))
            .on_exit(Message::WrapperHovered(false))
            .into()
    }
}
