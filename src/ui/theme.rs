use iced::widget::{container, text_input};
use iced::{Border, Color, Shadow, Theme};

/// Background of the window hosting the form
pub const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.15,
    a: 1.0,
};

/// Slightly lighter surface color for the search input and results panel
const SURFACE: Color = Color {
    r: 0.18,
    g: 0.18,
    b: 0.22,
    a: 1.0,
};

/// Surface of a locked (read-only) input
const SURFACE_LOCKED: Color = Color {
    r: 0.15,
    g: 0.15,
    b: 0.18,
    a: 1.0,
};

const ACCENT: Color = Color {
    r: 0.35,
    g: 0.55,
    b: 0.85,
    a: 1.0,
};

/// Border shown while a search is resolving
const LOADING: Color = Color {
    r: 0.85,
    g: 0.65,
    b: 0.25,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.92,
    a: 1.0,
};

pub const TEXT_SECONDARY: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.6,
    a: 1.0,
};

/// Style for the container wrapping the whole form
pub fn main_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the search text input
pub fn search_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    input_style(status, false)
}

/// Style for the search text input while a search is resolving
pub fn search_input_loading(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    input_style(status, true)
}

fn input_style(status: text_input::Status, loading: bool) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    let locked = matches!(status, text_input::Status::Disabled);

    let border_color = if loading {
        LOADING
    } else if focused {
        ACCENT
    } else {
        Color::TRANSPARENT
    };

    text_input::Style {
        background: if locked { SURFACE_LOCKED } else { SURFACE }.into(),
        border: Border {
            color: border_color,
            width: if loading || focused { 2.0 } else { 0.0 },
            radius: 8.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        // greyed out while locked
        value: if locked { TEXT_SECONDARY } else { TEXT_PRIMARY },
        selection: Color {
            r: ACCENT.r,
            g: ACCENT.g,
            b: ACCENT.b,
            a: 0.3,
        },
    }
}

/// Style for the dropdown holding the result rows
pub fn result_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: Color {
                r: 0.3,
                g: 0.3,
                b: 0.35,
                a: 0.5,
            },
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::BLACK,
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for a result row
pub fn result_row(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}
