use iced::widget::{container, mouse_area, text, Column};
use iced::{Element, Fill, Padding};

use crate::field::Message;
use crate::item::Item;
use crate::ui::theme;

/// Build the results panel, one clickable row per item.
/// Callers only render it while the panel is open.
pub fn view(rows: &[Item]) -> Element<'_, Message> {
    let mut list = Column::new().spacing(2);
    for (i, item) in rows.iter().enumerate() {
        let name = text(&item.name).size(16).color(theme::TEXT_PRIMARY);

        let row = container(name)
            .padding(Padding::from([6, 12]))
            .width(Fill)
            .style(theme::result_row);

        list = list.push(mouse_area(row).on_press(Message::RowSelected(i)));
    }

    container(list)
        .padding(4)
        .width(Fill)
        .style(theme::result_panel)
        .into()
}
