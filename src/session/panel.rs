use crate::render::Color;
use crate::ui::{Alignment, SpacingSpec, UiBuilder, UiContainer, UiOptions};

const HEADING: Color = Color::rgb(0x87, 0xce, 0xeb);
const DANGER: Color = Color::rgb(0xf3, 0x3a, 0x6a);

const SECTIONS: [(&str, &[&str]); 4] = [
    ("Mode:", &["drag mode - LMB", "roll mode - RMB", "pan mode - MMB"]),
    (
        "Commands:",
        &[
            "<T>",
            "<T> to <T>",
            "go <T>",
            "fly <T>",
            "fly stop",
            "halt / stop",
            "bring <T>",
            "bring this to <T>",
            "center <T>",
            "drag <T> to <T>",
        ],
    ),
    ("Noises:", &["hiss: stop"]),
    (
        "Layout:",
        &[
            "more squares",
            "less squares",
            "clear <T> past <T>",
            "clear line <T>",
            "take <T> past <T>",
            "grid reset",
        ],
    ),
];

/// Cheat-sheet listing the grid's modes and commands, vertically centred on
/// the right edge of the screen.
pub fn commands_panel() -> UiBuilder {
    let mut list = UiContainer::new(UiOptions::new().with_gap(12.0));
    for (index, (heading, entries)) in SECTIONS.iter().enumerate() {
        let mut heading_options = UiOptions::new().with_color(HEADING).bold();
        if index > 0 {
            heading_options = heading_options.with_margin(SpacingSpec::default().with_top(12.0));
        }
        list.add_text(*heading, heading_options);
        for entry in entries.iter() {
            list.add_text(*entry, UiOptions::new());
        }
    }
    list.add_text(
        "grid hide",
        UiOptions::new()
            .with_color(DANGER)
            .bold()
            .with_margin(SpacingSpec::default().with_top(12.0)),
    );

    let card = UiContainer::new(
        UiOptions::new()
            .with_background(Color::rgb(0x22, 0x22, 0x22))
            .with_border_radius(4.0)
            .with_margin(SpacingSpec::default().with_right(32.0))
            .with_padding(16.0),
    )
    .with_child(list);

    UiBuilder::new(
        UiOptions::new()
            .with_justify(Alignment::Center)
            .with_align(Alignment::End),
    )
    .with_child(card)
}
