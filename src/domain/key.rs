// ============================================================================
// Keypad Keys
// Discrete input events dispatched to panels
// ============================================================================

use super::operation::{BinaryOperator, Constant, ScientificFunction};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    /// 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// `+/-`
    Negate,
    /// `AC`
    Clear,
    /// `<`
    Delete,
    /// `=`
    Equal,
    Operator(BinaryOperator),
    Function(ScientificFunction),
    Constant(Constant),
}

impl Key {
    /// Map a keyboard character to a key.
    ///
    /// Digits, `.`, `+ - * /`, `=` (or Enter), `c` for clear, backspace or
    /// `<` for delete, `n` for sign, `%`, `!`, `e` and `p` for pi.
    pub fn from_char(c: char) -> Option<Key> {
        let key = match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            '.' => Key::Point,
            '+' => Key::Operator(BinaryOperator::Add),
            '-' => Key::Operator(BinaryOperator::Subtract),
            '*' | 'x' | '×' => Key::Operator(BinaryOperator::Multiply),
            '/' | '÷' => Key::Operator(BinaryOperator::Divide),
            '=' | '\n' | '\r' => Key::Equal,
            'c' | 'C' => Key::Clear,
            '<' | '\u{8}' => Key::Delete,
            'n' | '±' => Key::Negate,
            '%' => Key::Function(ScientificFunction::Percent),
            '!' => Key::Function(ScientificFunction::Factorial),
            'e' => Key::Constant(Constant::E),
            'p' | 'π' => Key::Constant(Constant::Pi),
            _ => return None,
        };
        Some(key)
    }

    /// Parse a key sequence, skipping whitespace and unknown characters.
    pub fn sequence(input: &str) -> Vec<Key> {
        input.chars().filter_map(Key::from_char).collect()
    }

    /// The character a digit or point key enters into the display
    pub fn as_entry(&self) -> Option<char> {
        match self {
            Key::Digit(d) if *d < 10 => Some(char::from(b'0' + *d)),
            Key::Point => Some('.'),
            _ => None,
        }
    }

    /// Keys only the scientific calculator understands
    pub fn is_scientific(&self) -> bool {
        matches!(
            self,
            Key::Operator(_) | Key::Function(_) | Key::Constant(_)
        )
    }
}
