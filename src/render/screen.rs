//! Screen rendering and the interactive menu loop.
//!
//! Every screen goes through the same pipeline, in order: clear, vertical offset,
//! screen border, horizontal centering, paced write. Menus run that pipeline once per
//! key press until the selection is confirmed.

use crate::error::{Result, ScreenError};
use crate::input::{key_char, KeyClass, KeySource, Navigation, TerminalKeys};
use crate::layout::{self, center_sequence, decorate_options, wrap_in_border, BorderGlyphs};
use crate::render::settings::{RenderSettings, SettingsUpdate, WriteStyle};
use crate::render::surface::{OutputSurface, TerminalOutput};
use std::ops::{Deref, DerefMut};
use std::thread;
use std::time::Duration;

/// Renders screens and menus onto an output surface, reading keys from a key source.
///
/// Owns its [`RenderSettings`] exclusively; nothing else can change them while a
/// render is in progress.
pub struct ScreenRenderer<O, K> {
    settings: RenderSettings,
    surface: O,
    keys: K,
}

impl ScreenRenderer<TerminalOutput, TerminalKeys> {
    /// Renderer drawing on stdout and reading keys from the terminal.
    pub fn for_terminal(settings: RenderSettings) -> Result<Self> {
        Self::new(settings, TerminalOutput::stdout(), TerminalKeys::new())
    }
}

impl<O: OutputSurface, K: KeySource> ScreenRenderer<O, K> {
    /// Fails with a configuration error if `settings` are invalid (zero screen width).
    pub fn new(settings: RenderSettings, surface: O, keys: K) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            surface,
            keys,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn surface(&self) -> &O {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut O {
        &mut self.surface
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    pub fn into_parts(self) -> (RenderSettings, O, K) {
        (self.settings, self.surface, self.keys)
    }

    /// Change the fields `update` sets and keep the rest.
    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        self.settings.apply(update)?;
        log::debug!("render settings updated: {:?}", self.settings);
        Ok(())
    }

    /// Apply the screen border and horizontal centering to `lines`, without writing.
    pub fn compose_screen<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<String>> {
        let settings = &self.settings;
        let centered = settings.alignment.centers_horizontally();

        let framed = if settings.border_style.frames_screen() {
            wrap_in_border(
                lines,
                layout::max_len(lines),
                centered,
                settings.border_glyphs,
            )?
        } else {
            lines.iter().map(|line| line.as_ref().to_string()).collect()
        };

        if centered {
            center_sequence(&framed, usize::from(settings.screen_width))
        } else {
            Ok(framed)
        }
    }

    /// Decorate `options` for the frame where `selected` is highlighted, framing them
    /// when the border style asks for a menu border.
    ///
    /// The menu frame is `menu_border_size` columns wide when that is non-zero and
    /// otherwise as wide as the widest decorated option. A requested size whose frame
    /// (content plus four border columns) is wider than the screen is rejected before
    /// anything is allocated.
    pub fn compose_menu<S: AsRef<str>>(
        &self,
        options: &[S],
        selected: usize,
        menu_border_size: usize,
    ) -> Result<Vec<String>> {
        let settings = &self.settings;
        let decorated = decorate_options(options, selected, settings.arrow_position);

        if !settings.border_style.frames_menu() {
            return Ok(decorated);
        }

        let inner_width = if menu_border_size > 0 {
            let max_inner_width = usize::from(settings.screen_width).saturating_sub(4);
            if menu_border_size > max_inner_width {
                return Err(ScreenError::frame_too_wide(menu_border_size, max_inner_width));
            }
            menu_border_size
        } else {
            layout::max_len(&decorated)
        };
        wrap_in_border(
            &decorated,
            inner_width,
            settings.border_style.centers_menu(),
            settings.border_glyphs,
        )
    }

    /// Print `lines` as one screen.
    ///
    /// Layout problems are reported before anything is written, so a failed call leaves
    /// the display untouched. The vertical offset counts the lines actually written, so
    /// a screen border adds two rows.
    pub fn print_screen<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        clear_before_print: bool,
    ) -> Result<()> {
        let composed = self.compose_screen(lines)?;

        if clear_before_print {
            self.surface.clear()?;
        }

        if self.settings.alignment.centers_vertically() {
            self.surface.clear()?;
            let rows = usize::from(self.surface.height()?);
            let offset = rows.saturating_sub(composed.len()) / 2;
            log::trace!(
                "centering {} line(s) in {rows} row(s): offset {offset}",
                composed.len()
            );
            for _ in 0..offset {
                self.surface.write_line("")?;
            }
        }

        for line in &composed {
            self.write_paced(line)?;
            self.keys.discard_pending()?;
        }
        self.surface.flush()
    }

    /// Concatenate `sections` and print them as one screen.
    pub fn print_screen_sections<S: AsRef<str>>(
        &mut self,
        sections: &[&[S]],
        clear_before_print: bool,
    ) -> Result<()> {
        let lines: Vec<&str> = sections
            .iter()
            .flat_map(|section| section.iter().map(|line| line.as_ref()))
            .collect();
        self.print_screen(&lines, clear_before_print)
    }

    /// Show `lines` followed by `options` and let the user pick one with the arrow keys.
    ///
    /// Up and Down move the selection circularly, Enter confirms it, anything else is
    /// ignored. Returns the index of the confirmed option. While the menu is up, writes
    /// are instant; the previous pacing is restored however the loop ends.
    pub fn print_menu_get_index_selected<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        lines: &[S],
        options: &[T],
        clear_before_printing: bool,
        menu_border_size: usize,
    ) -> Result<usize> {
        let mut navigation = Navigation::new(options.len())?;

        self.print_menu_frame(
            lines,
            options,
            navigation.selected(),
            clear_before_printing,
            menu_border_size,
        )?;

        let mut renderer = PacingOverride::new(self, 0, WriteStyle::Instant);
        loop {
            renderer.print_menu_frame(
                lines,
                options,
                navigation.selected(),
                clear_before_printing,
                menu_border_size,
            )?;

            let key = renderer.keys.read_key()?;
            if navigation.step(KeyClass::from(&key)).confirmed {
                break;
            }
        }
        drop(renderer);

        log::debug!(
            "menu selection confirmed: index {} of {}",
            navigation.selected(),
            navigation.option_count()
        );
        Ok(navigation.selected())
    }

    /// Block for one key press and return its character value.
    pub fn read_key(&mut self) -> Result<char> {
        let key = self.keys.read_key()?;
        Ok(key_char(&key))
    }

    fn print_menu_frame<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        lines: &[S],
        options: &[T],
        selected: usize,
        clear_before_printing: bool,
        menu_border_size: usize,
    ) -> Result<()> {
        let menu = self.compose_menu(options, selected, menu_border_size)?;
        let screen: Vec<&str> = lines
            .iter()
            .map(|line| line.as_ref())
            .chain(menu.iter().map(String::as_str))
            .collect();
        self.print_screen(&screen, clear_before_printing)
    }

    fn write_paced(&mut self, line: &str) -> Result<()> {
        let pause = Duration::from_millis(self.settings.sleep_interval_ms);

        match self.settings.write_style {
            WriteStyle::Instant => self.surface.write_line(line),
            WriteStyle::PerLineDelay => {
                pause_for(pause);
                self.surface.write_line(line)
            }
            WriteStyle::PerCharDelay => {
                let glyphs = self.settings.border_glyphs;
                let mut buf = [0u8; 4];
                for c in line.chars() {
                    if pauses_before(c, glyphs) {
                        pause_for(pause);
                    }
                    self.surface.write_raw(c.encode_utf8(&mut buf))?;
                }
                self.surface.write_line("")
            }
        }
    }
}

/// Per-character pacing skips whitespace and frame glyphs.
fn pauses_before(c: char, glyphs: BorderGlyphs) -> bool {
    !c.is_whitespace() && !glyphs.is_frame_char(c)
}

fn pause_for(pause: Duration) {
    if !pause.is_zero() {
        thread::sleep(pause);
    }
}

/// Temporarily replaces the renderer's pacing, putting the saved values back on drop.
struct PacingOverride<'a, O, K> {
    renderer: &'a mut ScreenRenderer<O, K>,
    saved_sleep_interval_ms: u64,
    saved_write_style: WriteStyle,
}

impl<'a, O, K> PacingOverride<'a, O, K> {
    fn new(
        renderer: &'a mut ScreenRenderer<O, K>,
        sleep_interval_ms: u64,
        write_style: WriteStyle,
    ) -> Self {
        let saved_sleep_interval_ms =
            std::mem::replace(&mut renderer.settings.sleep_interval_ms, sleep_interval_ms);
        let saved_write_style = std::mem::replace(&mut renderer.settings.write_style, write_style);
        Self {
            renderer,
            saved_sleep_interval_ms,
            saved_write_style,
        }
    }
}

impl<O, K> Deref for PacingOverride<'_, O, K> {
    type Target = ScreenRenderer<O, K>;

    fn deref(&self) -> &Self::Target {
        &*self.renderer
    }
}

impl<O, K> DerefMut for PacingOverride<'_, O, K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.renderer
    }
}

impl<O, K> Drop for PacingOverride<'_, O, K> {
    fn drop(&mut self) {
        self.renderer.settings.sleep_interval_ms = self.saved_sleep_interval_ms;
        self.renderer.settings.write_style = self.saved_write_style;
    }
}
