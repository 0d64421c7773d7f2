use bevy::prelude::*;

use crate::engine::assets::catalog::Record;

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN: &str = "Unknown";
const UNKNOWN_LABEL: &str = "Unknown Label";

/// Text shown in the info panel for the selected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayFields {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub genre: String,
    pub label: String,
}

impl OverlayFields {
    /// Substitute a fallback for every empty field.
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: or_fallback(&record.title, UNKNOWN_TITLE),
            artist: or_fallback(&record.artist, UNKNOWN_ARTIST),
            year: or_fallback(&record.year, UNKNOWN),
            genre: or_fallback(&record.genre, UNKNOWN),
            label: or_fallback(&record.label, UNKNOWN_LABEL),
        }
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Overlay content. `None` means the panel is hidden.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct OverlayContent {
    pub shown: Option<OverlayEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    pub index: usize,
    pub fields: OverlayFields,
}

impl OverlayContent {
    pub fn show(&mut self, index: usize, record: &Record) {
        self.shown = Some(OverlayEntry {
            index,
            fields: OverlayFields::from_record(record),
        });
    }

    pub fn hide(&mut self) {
        self.shown = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }
}

#[derive(Component)]
pub struct InfoPanel;

/// One line of the info panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    Title,
    Artist,
    Year,
    Genre,
    Label,
}

impl InfoField {
    const ALL: [InfoField; 5] = [
        InfoField::Title,
        InfoField::Artist,
        InfoField::Year,
        InfoField::Genre,
        InfoField::Label,
    ];

    pub fn render(self, fields: &OverlayFields) -> String {
        match self {
            InfoField::Title => fields.title.clone(),
            InfoField::Artist => fields.artist.clone(),
            InfoField::Year => format!("Year: {}", fields.year),
            InfoField::Genre => format!("Genre: {}", fields.genre),
            InfoField::Label => format!("Label: {}", fields.label),
        }
    }

    fn font_size(self) -> f32 {
        match self {
            InfoField::Title => 22.0,
            InfoField::Artist => 18.0,
            _ => 14.0,
        }
    }
}

pub fn spawn_info_panel(mut commands: Commands) {
    commands
        .spawn((
            InfoPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(4.0),
                flex_direction: FlexDirection::Column,
                display: Display::None,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            for field in InfoField::ALL {
                parent.spawn((
                    field,
                    Text::new(""),
                    TextFont {
                        font_size: field.font_size(),
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
        });
}

/// Mirror `OverlayContent` into the panel whenever it changes.
pub fn reflect_overlay(
    overlay: Res<OverlayContent>,
    mut panels: Query<&mut Node, With<InfoPanel>>,
    mut lines: Query<(&InfoField, &mut Text)>,
) {
    if !overlay.is_changed() {
        return;
    }

    for mut node in &mut panels {
        node.display = if overlay.is_visible() {
            Display::Flex
        } else {
            Display::None
        };
    }

    if let Some(entry) = &overlay.shown {
        for (field, mut text) in &mut lines {
            text.0 = field.render(&entry.fields);
        }
    }
}
