//! Scripted-injection command surface.
//!
//! Tooling and automated tests drive the input pipeline through a small
//! JSON command language instead of real OS events. Each line is one
//! tagged command:
//!
//! ```json
//! {"op": "keyDown", "keysym": "W", "mask": ["CTL", "SHIFT"]}
//! {"op": "keyDown", "keycode": 87}
//! {"op": "mouseDown", "button": "RMB"}
//! {"op": "mouseMove", "x": 120, "y": -4}
//! ```
//!
//! Commands are decoded once at this boundary into strongly-typed variants;
//! nothing loosely-typed crosses into the keyboard core. Key identity can
//! be given as a `keysym` name, a native `keycode` (resolved through the
//! keyboard's translator), or a single `char`. `mask` is a combo/bit name
//! or an array of names OR-ed together; unknown names degrade to no bits
//! with a logged warning, matching the rest of the lookup-miss taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use vwinput_core::{Key, Mask, MouseButton};

use crate::keyboard::Keyboard;
use crate::sink::InputSink;

/// Error type for injection decoding.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The command line was not valid JSON or named an unknown operation.
    #[error("failed to decode injection command: {0}")]
    Decode(#[from] serde_json::Error),

    /// A key command carried neither `keysym` nor `keycode` nor `char`.
    #[error("key command specifies no key")]
    NoKey,
}

/// One decoded injection command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum InjectCommand {
    KeyDown(KeyParams),
    KeyUp(KeyParams),
    MouseDown(MouseParams),
    MouseUp(MouseParams),
    MouseMove(MoveParams),
    MouseScroll(ScrollParams),
}

/// Parameters shared by `keyDown`/`keyUp`.
///
/// Exactly one of `keysym`, `keycode`, or `char` identifies the key;
/// `keycode` takes the native-translation path, the other two the
/// canonical path. `path` targets a UI element in the full client and is
/// accepted but unused by the headless harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keysym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keycode: Option<u16>,
    #[serde(default, rename = "char", skip_serializing_if = "Option::is_none")]
    pub ch: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouseParams {
    pub button: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveParams {
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollParams {
    /// Positive scrolls up/away, negative down/toward.
    pub clicks: i32,
}

/// `mask` accepts either a single name or an array of names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaskParam {
    One(String),
    Many(Vec<String>),
}

impl MaskParam {
    /// Resolves to a mask by OR-ing per-name lookups.
    pub fn resolve(&self) -> Mask {
        match self {
            MaskParam::One(name) => Mask::from_bit_name(name),
            MaskParam::Many(names) => names
                .iter()
                .fold(Mask::NONE, |acc, name| acc | Mask::from_bit_name(name)),
        }
    }
}

fn resolve_mask(mask: &Option<MaskParam>) -> Mask {
    mask.as_ref().map(MaskParam::resolve).unwrap_or(Mask::NONE)
}

impl InjectCommand {
    /// Decodes one JSON command line.
    pub fn decode(line: &str) -> Result<Self, InjectError> {
        Ok(serde_json::from_str(line)?)
    }

    /// Applies the command by synthesizing the corresponding
    /// native-boundary call on `keyboard`.
    ///
    /// Returns whether the pipeline handled the event; lookup misses
    /// inside (unknown keycode, unknown button) degrade to `false` just as
    /// they do for real native input.
    pub fn apply(
        &self,
        keyboard: &mut Keyboard,
        sink: &mut dyn InputSink,
    ) -> Result<bool, InjectError> {
        match self {
            InjectCommand::KeyDown(params) => apply_key(params, true, keyboard, sink),
            InjectCommand::KeyUp(params) => apply_key(params, false, keyboard, sink),
            InjectCommand::MouseDown(params) => Ok(apply_mouse(params, true, sink)),
            InjectCommand::MouseUp(params) => Ok(apply_mouse(params, false, sink)),
            InjectCommand::MouseMove(params) => {
                sink.on_mouse_move(params.x, params.y, resolve_mask(&params.mask));
                Ok(true)
            }
            InjectCommand::MouseScroll(params) => {
                sink.on_mouse_scroll(params.clicks);
                Ok(true)
            }
        }
    }
}

fn apply_key(
    params: &KeyParams,
    down: bool,
    keyboard: &mut Keyboard,
    sink: &mut dyn InputSink,
) -> Result<bool, InjectError> {
    let mask = resolve_mask(&params.mask);

    if let Some(code) = params.keycode {
        return Ok(if down {
            keyboard.handle_native_key_down(code, mask, sink)
        } else {
            keyboard.handle_native_key_up(code, mask, sink)
        });
    }

    let key = match (&params.keysym, params.ch) {
        (Some(name), _) => Key::from_name(name),
        (None, Some(ch)) => Key::from_char(ch),
        (None, None) => return Err(InjectError::NoKey),
    };

    // A character with no canonical key (e.g. an accented letter) still
    // reaches the text path on key-down.
    if key == Key::None {
        if let (true, Some(ch)) = (down, params.ch) {
            return Ok(keyboard.handle_unicode_char(ch, mask, sink));
        }
        warn!(keysym = ?params.keysym, "injection names no known key");
        return Ok(false);
    }

    Ok(if down {
        keyboard.handle_key_down(key, mask, sink)
    } else {
        keyboard.handle_key_up(key, mask, sink)
    })
}

fn apply_mouse(params: &MouseParams, down: bool, sink: &mut dyn InputSink) -> bool {
    let button = MouseButton::from_name(&params.button);
    if button == MouseButton::None {
        warn!(button = %params.button, "injection names no known mouse button");
        return false;
    }
    sink.on_mouse_button(button, resolve_mask(&params.mask), down)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkEvent};
    use vwinput_core::KeyTranslator;

    fn keyboard() -> Keyboard {
        Keyboard::new(KeyTranslator::windows())
    }

    #[test]
    fn test_decode_key_down_with_mask_array() {
        // Arrange
        let line = r#"{"op": "keyDown", "keysym": "W", "mask": ["CTL", "SHIFT"]}"#;

        // Act
        let cmd = InjectCommand::decode(line).expect("decode");

        // Assert
        match &cmd {
            InjectCommand::KeyDown(params) => {
                assert_eq!(params.keysym.as_deref(), Some("W"));
                assert_eq!(resolve_mask(&params.mask), Mask::CONTROL | Mask::SHIFT);
            }
            other => panic!("decoded wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_mask_array_equals_or_of_singles() {
        let many = MaskParam::Many(vec!["CTL".to_string(), "SHIFT".to_string()]);
        let ctl = MaskParam::One("CTL".to_string());
        let shift = MaskParam::One("SHIFT".to_string());

        assert_eq!(many.resolve(), ctl.resolve() | shift.resolve());
    }

    #[test]
    fn test_combo_mask_name_resolves_like_its_bits() {
        let combo = MaskParam::One("CTL_SHIFT".to_string());
        let bits = MaskParam::Many(vec!["CTL".to_string(), "SHIFT".to_string()]);

        assert_eq!(combo.resolve(), Mask::CONTROL | Mask::SHIFT);
        assert_eq!(combo.resolve(), bits.resolve());
    }

    #[test]
    fn test_unknown_mask_name_degrades_to_no_bits() {
        let mask = MaskParam::Many(vec!["SHIFT".to_string(), "HYPER".to_string()]);
        assert_eq!(mask.resolve(), Mask::SHIFT);
    }

    #[test]
    fn test_key_down_by_keysym_reaches_the_dispatch_boundary() {
        // Arrange
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let cmd = InjectCommand::decode(r#"{"op": "keyDown", "keysym": "PgUp"}"#).unwrap();

        // Act
        let handled = cmd.apply(&mut kb, &mut sink).unwrap();

        // Assert
        assert!(handled);
        assert!(kb.is_down(Key::PageUp));
    }

    #[test]
    fn test_key_down_by_keycode_goes_through_native_translation() {
        // Arrange: 0x57 is the Windows virtual-key code for W
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let cmd = InjectCommand::decode(r#"{"op": "keyDown", "keycode": 87}"#).unwrap();

        // Act
        let handled = cmd.apply(&mut kb, &mut sink).unwrap();

        // Assert
        assert!(handled);
        assert!(kb.is_down(Key::KeyW));
    }

    #[test]
    fn test_key_down_by_char_recovers_the_canonical_key() {
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let cmd = InjectCommand::decode(r#"{"op": "keyDown", "char": "e"}"#).unwrap();

        assert!(cmd.apply(&mut kb, &mut sink).unwrap());
        assert!(kb.is_down(Key::KeyE));
    }

    #[test]
    fn test_unmappable_char_falls_through_to_the_text_path() {
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let cmd = InjectCommand::decode(r#"{"op": "keyDown", "char": "é"}"#).unwrap();

        assert!(cmd.apply(&mut kb, &mut sink).unwrap());
        assert_eq!(
            sink.events,
            vec![SinkEvent::Char { ch: 'é', mask: Mask::NONE }]
        );
    }

    #[test]
    fn test_key_command_without_any_key_is_an_error() {
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let cmd = InjectCommand::decode(r#"{"op": "keyUp"}"#).unwrap();

        assert!(matches!(
            cmd.apply(&mut kb, &mut sink),
            Err(InjectError::NoKey)
        ));
    }

    #[test]
    fn test_mouse_down_and_up_reach_the_sink() {
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let down = InjectCommand::decode(r#"{"op": "mouseDown", "button": "RMB"}"#).unwrap();
        let up = InjectCommand::decode(r#"{"op": "mouseUp", "button": "RMB"}"#).unwrap();

        assert!(down.apply(&mut kb, &mut sink).unwrap());
        assert!(up.apply(&mut kb, &mut sink).unwrap());
        assert_eq!(
            sink.events,
            vec![
                SinkEvent::MouseButton {
                    button: MouseButton::Right,
                    mask: Mask::NONE,
                    down: true
                },
                SinkEvent::MouseButton {
                    button: MouseButton::Right,
                    mask: Mask::NONE,
                    down: false
                },
            ]
        );
    }

    #[test]
    fn test_unknown_mouse_button_is_not_handled() {
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let cmd = InjectCommand::decode(r#"{"op": "mouseDown", "button": "MB9"}"#).unwrap();

        assert!(!cmd.apply(&mut kb, &mut sink).unwrap());
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_mouse_move_and_scroll_apply() {
        let mut kb = keyboard();
        let mut sink = RecordingSink::new();
        let mv = InjectCommand::decode(r#"{"op": "mouseMove", "x": 120, "y": -4}"#).unwrap();
        let scroll = InjectCommand::decode(r#"{"op": "mouseScroll", "clicks": -2}"#).unwrap();

        assert!(mv.apply(&mut kb, &mut sink).unwrap());
        assert!(scroll.apply(&mut kb, &mut sink).unwrap());
        assert_eq!(
            sink.events,
            vec![
                SinkEvent::MouseMove { x: 120, y: -4 },
                SinkEvent::MouseScroll { clicks: -2 },
            ]
        );
    }

    #[test]
    fn test_unknown_op_is_a_decode_error() {
        let result = InjectCommand::decode(r#"{"op": "teleport"}"#);
        assert!(matches!(result, Err(InjectError::Decode(_))));
    }

    #[test]
    fn test_command_json_round_trip() {
        let cmd = InjectCommand::KeyDown(KeyParams {
            keysym: Some("Home".to_string()),
            keycode: None,
            ch: None,
            mask: Some(MaskParam::Many(vec!["ALT".to_string()])),
            path: None,
        });

        let json = serde_json::to_string(&cmd).expect("serialize");
        let back = InjectCommand::decode(&json).expect("decode");

        assert_eq!(back, cmd);
    }
}
