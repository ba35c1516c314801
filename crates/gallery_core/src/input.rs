//! Raw input translation
//!
//! Maps raw key, pointer, and touch events to gallery commands. The
//! bindings are fixed; only the swipe threshold comes from configuration.
//! Translation never checks gallery state: commands that do not apply are
//! silently dropped downstream.

use crate::command::GalleryCommand;
use crate::photo::PhotoId;

/// Swipe distance below which a touch gesture is ignored.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// A key press, already resolved to the gallery's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    /// A character key, case-sensitive.
    Char(char),
}

/// A pointer click on one of the gallery's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Thumbnail(usize),
    PrevControl,
    NextControl,
    CloseControl,
}

/// Raw input event as delivered by the render surface's event stream.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key press, with the index of the thumbnail holding input focus.
    Key {
        key: Key,
        focused_thumbnail: Option<usize>,
    },
    Click(ClickTarget),
    /// Favorite checkbox toggled for the given photo.
    CheckboxChanged(PhotoId),
    /// Touch down on the preview surface at horizontal coordinate `x`.
    TouchStart { x: f32 },
    /// Touch up on the preview surface at horizontal coordinate `x`.
    TouchEnd { x: f32 },
}

impl InputEvent {
    /// Key press without thumbnail focus.
    pub fn key(key: Key) -> Self {
        InputEvent::Key {
            key,
            focused_thumbnail: None,
        }
    }
}

/// Translates raw input events into gallery commands.
///
/// Holds the only piece of input state there is: the horizontal start
/// coordinate of an unfinished touch gesture.
pub struct InputDispatcher {
    swipe_threshold: f32,
    touch_start_x: Option<f32>,
}

impl InputDispatcher {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe_threshold,
            touch_start_x: None,
        }
    }

    /// Translate one raw event. Returns `None` for events with no binding
    /// and for swipes below the threshold.
    pub fn translate(&mut self, event: InputEvent) -> Option<GalleryCommand> {
        match event {
            InputEvent::Key {
                key,
                focused_thumbnail,
            } => Self::translate_key(key, focused_thumbnail),
            InputEvent::Click(target) => Some(match target {
                ClickTarget::Thumbnail(index) => GalleryCommand::Open(index),
                ClickTarget::PrevControl => GalleryCommand::Previous,
                ClickTarget::NextControl => GalleryCommand::Next,
                ClickTarget::CloseControl => GalleryCommand::Close,
            }),
            InputEvent::CheckboxChanged(id) => Some(GalleryCommand::ToggleFavoriteOf(id)),
            InputEvent::TouchStart { x } => {
                self.touch_start_x = Some(x);
                None
            }
            InputEvent::TouchEnd { x } => self.translate_swipe(x),
        }
    }

    fn translate_key(key: Key, focused_thumbnail: Option<usize>) -> Option<GalleryCommand> {
        match key {
            Key::Escape | Key::Space => Some(GalleryCommand::Close),
            Key::ArrowLeft => Some(GalleryCommand::Previous),
            Key::ArrowRight => Some(GalleryCommand::Next),
            // Lowercase only; 'L' is not bound.
            Key::Char('l') => Some(GalleryCommand::ToggleFavorite),
            Key::Enter => focused_thumbnail.map(GalleryCommand::Open),
            Key::Char(_) => None,
        }
    }

    fn translate_swipe(&mut self, end_x: f32) -> Option<GalleryCommand> {
        let start_x = self.touch_start_x.take()?;
        let delta = end_x - start_x;
        if delta > self.swipe_threshold {
            Some(GalleryCommand::Previous) // rightward swipe
        } else if -delta > self.swipe_threshold {
            Some(GalleryCommand::Next) // leftward swipe
        } else {
            None
        }
    }
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(dispatcher: &mut InputDispatcher, event: InputEvent) -> Option<GalleryCommand> {
        dispatcher.translate(event)
    }

    #[test]
    fn key_bindings_match_the_fixed_table() {
        let mut d = InputDispatcher::default();
        assert_eq!(
            translate(&mut d, InputEvent::key(Key::Escape)),
            Some(GalleryCommand::Close)
        );
        assert_eq!(
            translate(&mut d, InputEvent::key(Key::Space)),
            Some(GalleryCommand::Close)
        );
        assert_eq!(
            translate(&mut d, InputEvent::key(Key::ArrowLeft)),
            Some(GalleryCommand::Previous)
        );
        assert_eq!(
            translate(&mut d, InputEvent::key(Key::ArrowRight)),
            Some(GalleryCommand::Next)
        );
        assert_eq!(
            translate(&mut d, InputEvent::key(Key::Char('l'))),
            Some(GalleryCommand::ToggleFavorite)
        );
    }

    #[test]
    fn uppercase_l_and_unbound_keys_do_nothing() {
        let mut d = InputDispatcher::default();
        assert_eq!(translate(&mut d, InputEvent::key(Key::Char('L'))), None);
        assert_eq!(translate(&mut d, InputEvent::key(Key::Char('x'))), None);
    }

    #[test]
    fn enter_opens_the_focused_thumbnail_only() {
        let mut d = InputDispatcher::default();
        assert_eq!(translate(&mut d, InputEvent::key(Key::Enter)), None);
        assert_eq!(
            translate(
                &mut d,
                InputEvent::Key {
                    key: Key::Enter,
                    focused_thumbnail: Some(4),
                }
            ),
            Some(GalleryCommand::Open(4))
        );
    }

    #[test]
    fn clicks_map_to_their_controls() {
        let mut d = InputDispatcher::default();
        assert_eq!(
            translate(&mut d, InputEvent::Click(ClickTarget::Thumbnail(2))),
            Some(GalleryCommand::Open(2))
        );
        assert_eq!(
            translate(&mut d, InputEvent::Click(ClickTarget::PrevControl)),
            Some(GalleryCommand::Previous)
        );
        assert_eq!(
            translate(&mut d, InputEvent::Click(ClickTarget::NextControl)),
            Some(GalleryCommand::Next)
        );
        assert_eq!(
            translate(&mut d, InputEvent::Click(ClickTarget::CloseControl)),
            Some(GalleryCommand::Close)
        );
    }

    #[test]
    fn checkbox_change_toggles_the_named_photo() {
        let mut d = InputDispatcher::default();
        assert_eq!(
            translate(&mut d, InputEvent::CheckboxChanged("a.jpg".into())),
            Some(GalleryCommand::ToggleFavoriteOf("a.jpg".into()))
        );
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        let mut d = InputDispatcher::default();
        assert_eq!(translate(&mut d, InputEvent::TouchStart { x: 100.0 }), None);
        assert_eq!(translate(&mut d, InputEvent::TouchEnd { x: 140.0 }), None);
    }

    #[test]
    fn rightward_swipe_goes_to_previous() {
        let mut d = InputDispatcher::default();
        translate(&mut d, InputEvent::TouchStart { x: 100.0 });
        assert_eq!(
            translate(&mut d, InputEvent::TouchEnd { x: 160.0 }),
            Some(GalleryCommand::Previous)
        );
    }

    #[test]
    fn leftward_swipe_goes_to_next() {
        let mut d = InputDispatcher::default();
        translate(&mut d, InputEvent::TouchStart { x: 200.0 });
        assert_eq!(
            translate(&mut d, InputEvent::TouchEnd { x: 130.0 }),
            Some(GalleryCommand::Next)
        );
    }

    #[test]
    fn swipe_of_exactly_the_threshold_is_ignored() {
        let mut d = InputDispatcher::default();
        translate(&mut d, InputEvent::TouchStart { x: 0.0 });
        assert_eq!(translate(&mut d, InputEvent::TouchEnd { x: 50.0 }), None);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut d = InputDispatcher::default();
        assert_eq!(translate(&mut d, InputEvent::TouchEnd { x: 500.0 }), None);
    }

    #[test]
    fn each_gesture_fires_at_most_once() {
        let mut d = InputDispatcher::default();
        translate(&mut d, InputEvent::TouchStart { x: 0.0 });
        assert_eq!(
            translate(&mut d, InputEvent::TouchEnd { x: 60.0 }),
            Some(GalleryCommand::Previous)
        );
        // The start coordinate was consumed by the first gesture.
        assert_eq!(translate(&mut d, InputEvent::TouchEnd { x: 120.0 }), None);
    }
}
