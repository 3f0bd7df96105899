/// Field delimiter between the latitude and longitude fields.
///
/// `A` never appears in an encoded body outside this role: field bodies are
/// decimal digits, and the break marker is `B`.
pub const FIELD_DELIMITER: char = 'A';

/// Marker inserted after a pair of identical adjacent symbols.
pub const DUPLICATE_BREAK: char = 'B';

/// One of the 16 symbols usable in standard DTMF signaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    Star,
    Pound,
}

impl Symbol {
    /// All 16 symbols, in tone-table order.
    pub const ALL: [Symbol; 16] = [
        Symbol::Digit0,
        Symbol::Digit1,
        Symbol::Digit2,
        Symbol::Digit3,
        Symbol::Digit4,
        Symbol::Digit5,
        Symbol::Digit6,
        Symbol::Digit7,
        Symbol::Digit8,
        Symbol::Digit9,
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::Star,
        Symbol::Pound,
    ];

    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '0' => Some(Symbol::Digit0),
            '1' => Some(Symbol::Digit1),
            '2' => Some(Symbol::Digit2),
            '3' => Some(Symbol::Digit3),
            '4' => Some(Symbol::Digit4),
            '5' => Some(Symbol::Digit5),
            '6' => Some(Symbol::Digit6),
            '7' => Some(Symbol::Digit7),
            '8' => Some(Symbol::Digit8),
            '9' => Some(Symbol::Digit9),
            'A' => Some(Symbol::A),
            'B' => Some(Symbol::B),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            '*' => Some(Symbol::Star),
            '#' => Some(Symbol::Pound),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit0 => '0',
            Symbol::Digit1 => '1',
            Symbol::Digit2 => '2',
            Symbol::Digit3 => '3',
            Symbol::Digit4 => '4',
            Symbol::Digit5 => '5',
            Symbol::Digit6 => '6',
            Symbol::Digit7 => '7',
            Symbol::Digit8 => '8',
            Symbol::Digit9 => '9',
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::Star => '*',
            Symbol::Pound => '#',
        }
    }

    /// Index into the static tone table. Matches declaration order of [`Symbol::ALL`].
    pub fn table_index(self) -> usize {
        self as usize
    }
}
