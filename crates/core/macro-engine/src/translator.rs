use evdev::Key;
use std::fmt::Debug;
use std::str::FromStr;
use thiserror::Error;

/// Name <-> code translation for one family of input codes.
pub trait Translator: Send + Sync + Debug {
    fn resolve(&self, name: &str) -> Option<u16>;
    fn render(&self, code: u16) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Keyboard,
    Pointer,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown key namespace {0:?}, expected \"key\" or \"button\"")]
pub struct UnknownNamespace(pub String);

impl Namespace {
    fn prefix(self) -> &'static str {
        match self {
            Namespace::Keyboard => "KEY_",
            Namespace::Pointer => "BTN_",
        }
    }
}

impl FromStr for Namespace {
    type Err = UnknownNamespace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "key" | "keyboard" => Ok(Namespace::Keyboard),
            "button" | "pointer" | "mouse" => Ok(Namespace::Pointer),
            _ => Err(UnknownNamespace(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EvdevTranslator {
    namespace: Namespace,
}

impl EvdevTranslator {
    pub fn new(namespace: Namespace) -> Self {
        Self { namespace }
    }

    pub fn keyboard() -> Self {
        Self::new(Namespace::Keyboard)
    }

    pub fn pointer() -> Self {
        Self::new(Namespace::Pointer)
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Lowercase kernel name of `code` without its namespace prefix.
    pub fn key_name(&self, code: u16) -> Option<String> {
        let name = format!("{:?}", Key::new(code));
        name.strip_prefix(self.namespace.prefix())
            .map(|short| short.to_ascii_lowercase())
    }
}

impl Translator for EvdevTranslator {
    fn resolve(&self, name: &str) -> Option<u16> {
        let name = name.trim_start_matches('<').trim_end_matches('>');
        let full = format!("{}{}", self.namespace.prefix(), name.to_ascii_uppercase());
        Key::from_str(&full).ok().map(|key| key.code())
    }

    fn render(&self, code: u16) -> Option<String> {
        match self.namespace {
            Namespace::Keyboard => us_layout_char(Key::new(code)).map(str::to_string),
            Namespace::Pointer => self.key_name(code).map(|name| format!("<{}>", name)),
        }
    }
}

fn us_layout_char(key: Key) -> Option<&'static str> {
    let text = match key {
        Key::KEY_A => "a",
        Key::KEY_B => "b",
        Key::KEY_C => "c",
        Key::KEY_D => "d",
        Key::KEY_E => "e",
        Key::KEY_F => "f",
        Key::KEY_G => "g",
        Key::KEY_H => "h",
        Key::KEY_I => "i",
        Key::KEY_J => "j",
        Key::KEY_K => "k",
        Key::KEY_L => "l",
        Key::KEY_M => "m",
        Key::KEY_N => "n",
        Key::KEY_O => "o",
        Key::KEY_P => "p",
        Key::KEY_Q => "q",
        Key::KEY_R => "r",
        Key::KEY_S => "s",
        Key::KEY_T => "t",
        Key::KEY_U => "u",
        Key::KEY_V => "v",
        Key::KEY_W => "w",
        Key::KEY_X => "x",
        Key::KEY_Y => "y",
        Key::KEY_Z => "z",

        Key::KEY_1 | Key::KEY_KP1 => "1",
        Key::KEY_2 | Key::KEY_KP2 => "2",
        Key::KEY_3 | Key::KEY_KP3 => "3",
        Key::KEY_4 | Key::KEY_KP4 => "4",
        Key::KEY_5 | Key::KEY_KP5 => "5",
        Key::KEY_6 | Key::KEY_KP6 => "6",
        Key::KEY_7 | Key::KEY_KP7 => "7",
        Key::KEY_8 | Key::KEY_KP8 => "8",
        Key::KEY_9 | Key::KEY_KP9 => "9",
        Key::KEY_0 | Key::KEY_KP0 => "0",

        Key::KEY_SPACE => " ",
        Key::KEY_MINUS | Key::KEY_KPMINUS => "-",
        Key::KEY_EQUAL => "=",
        Key::KEY_KPPLUS => "+",
        Key::KEY_KPASTERISK => "*",
        Key::KEY_SLASH | Key::KEY_KPSLASH => "/",
        Key::KEY_DOT | Key::KEY_KPDOT => ".",
        Key::KEY_COMMA => ",",
        Key::KEY_SEMICOLON => ";",
        Key::KEY_APOSTROPHE => "'",
        Key::KEY_GRAVE => "`",
        Key::KEY_BACKSLASH => "\\",
        Key::KEY_LEFTBRACE => "[",
        Key::KEY_RIGHTBRACE => "]",
        Key::KEY_TAB => "\t",

        _ => return None,
    };

    Some(text)
}
