use std::collections::VecDeque;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use screenprinter::{
    Alignment, ArrowPosition, BorderGlyphs, BorderStyle, KeySource, OutputSurface,
    RenderSettings, Result, ScreenError, ScreenRenderer, SettingsUpdate, WriteStyle,
};

/// Surface that keeps only what is currently on screen.
struct Screen {
    rows: u16,
    lines: Vec<String>,
    partial: String,
    clears: usize,
}

impl Screen {
    fn new(rows: u16) -> Self {
        Self {
            rows,
            lines: Vec::new(),
            partial: String::new(),
            clears: 0,
        }
    }
}

impl OutputSurface for Screen {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.partial.push_str(line);
        self.lines.push(std::mem::take(&mut self.partial));
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.partial.push_str(text);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.partial.clear();
        self.clears += 1;
        Ok(())
    }

    fn height(&self) -> Result<u16> {
        Ok(self.rows)
    }
}

/// Keys the player presses, in order. Nothing is ever buffered ahead of a read.
struct Player(VecDeque<KeyCode>);

impl Player {
    fn pressing(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self(codes.into_iter().collect())
    }
}

impl KeySource for Player {
    fn read_key(&mut self) -> Result<KeyEvent> {
        self.0
            .pop_front()
            .map(|code| KeyEvent::new(code, KeyModifiers::NONE))
            .ok_or_else(|| {
                ScreenError::terminal(
                    "player stopped pressing keys",
                    std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
                )
            })
    }

    fn is_pending(&mut self) -> Result<bool> {
        Ok(false)
    }
}

fn printer(
    settings: RenderSettings,
    keys: impl IntoIterator<Item = KeyCode>,
) -> ScreenRenderer<Screen, Player> {
    ScreenRenderer::new(settings, Screen::new(12), Player::pressing(keys))
        .expect("valid settings")
}

#[test]
fn zero_width_renderer_cannot_be_built() {
    let settings = RenderSettings {
        screen_width: 0,
        ..RenderSettings::default()
    };
    let result = ScreenRenderer::new(settings, Screen::new(12), Player::pressing([]));
    assert!(matches!(result, Err(ScreenError::Configuration { .. })));
}

#[test]
fn down_down_enter_selects_third_option() {
    let mut printer = printer(
        RenderSettings::default(),
        [KeyCode::Down, KeyCode::Down, KeyCode::Enter],
    );
    let selected = printer
        .print_menu_get_index_selected(&["Choose a genre"], &["Animals", "Food", "Places"], true, 0)
        .unwrap();

    assert_eq!(selected, 2);
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut printer = printer(
        RenderSettings::default(),
        [KeyCode::Up, KeyCode::Up, KeyCode::Down, KeyCode::Enter],
    );
    let selected = printer
        .print_menu_get_index_selected(&["Pick"], &["A", "B", "C", "D"], false, 0)
        .unwrap();

    assert_eq!(selected, 3);
}

#[test]
fn framed_centered_menu_matches_expected_screen() {
    let settings = RenderSettings {
        screen_width: 24,
        alignment: Alignment::CenteredBoth,
        arrow_position: ArrowPosition::BeforeAndAfter,
        border_style: BorderStyle::MenuCenteredAndScreen,
        border_glyphs: BorderGlyphs::Ascii,
        ..RenderSettings::default()
    };
    let mut printer = printer(settings, [KeyCode::Down, KeyCode::Enter]);
    let selected = printer
        .print_menu_get_index_selected(&["Again?"], &["Yes", "No"], true, 0)
        .unwrap();
    assert_eq!(selected, 1);

    let screen = &printer.surface().lines;
    let expected_frame = [
        "+-----------------+",
        "|     Again?      |",
        "| +-------------+ |",
        "| |     Yes     | |",
        "| | --> No  <-- | |",
        "| +-------------+ |",
        "+-----------------+",
    ];

    // 12 rows, 7 lines of frame: (12 - 7) / 2 = 2 blank rows above
    assert_eq!(screen.len(), 2 + expected_frame.len());
    assert!(screen[..2].iter().all(|line| line.trim().is_empty()));
    for (line, frame) in screen[2..].iter().zip(expected_frame) {
        assert_eq!(line.chars().count(), 24);
        assert_eq!(line.trim(), frame);
    }
}

#[test]
fn animated_settings_survive_a_menu() {
    let settings = RenderSettings {
        alignment: Alignment::Normal,
        write_style: WriteStyle::PerCharDelay,
        sleep_interval_ms: 1,
        ..RenderSettings::default()
    };
    let mut printer = printer(settings.clone(), [KeyCode::Enter]);
    printer
        .print_menu_get_index_selected(&["Hi"], &["Ok"], false, 0)
        .unwrap();

    assert_eq!(printer.settings(), &settings);
}

#[test]
fn settings_can_change_between_screens() {
    let mut printer = printer(
        RenderSettings {
            alignment: Alignment::Normal,
            ..RenderSettings::default()
        },
        [],
    );
    printer.print_screen(&["left"], true).unwrap();
    assert_eq!(printer.surface().lines, vec!["left"]);

    printer
        .update_settings(
            &SettingsUpdate::new()
                .alignment(Alignment::CenteredHorizontally)
                .screen_width(8),
        )
        .unwrap();
    printer.print_screen(&["mid"], true).unwrap();
    assert_eq!(printer.surface().lines, vec!["  mid   "]);

    printer.update_settings(&SettingsUpdate::new()).unwrap();
    assert_eq!(printer.settings().screen_width, 8);
}

#[test]
fn game_reads_raw_characters() {
    let mut printer = printer(
        RenderSettings::default(),
        [KeyCode::Char('e'), KeyCode::Char('Z')],
    );
    assert_eq!(printer.read_key().unwrap(), 'e');
    assert_eq!(printer.read_key().unwrap(), 'Z');
}

#[test]
fn oversized_content_is_reported_not_truncated() {
    let mut printer = printer(
        RenderSettings {
            screen_width: 10,
            ..RenderSettings::default()
        },
        [],
    );
    let err = printer
        .print_screen(&["this line is wider than ten"], true)
        .unwrap_err();

    assert!(matches!(err, ScreenError::Layout { width: 10, .. }));
    assert_eq!(printer.surface().clears, 0);
}
