use geotone_codec::Symbol;

/// The two frequencies composing one DTMF symbol, per the keypad matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonePair {
    pub column_hz: f32,
    pub row_hz: f32,
}

const fn pair(column_hz: f32, row_hz: f32) -> TonePair {
    TonePair { column_hz, row_hz }
}

/// Tone pairs indexed by [`Symbol::table_index`].
pub static TONE_TABLE: [TonePair; 16] = [
    pair(1336.0, 941.0), // 0
    pair(1209.0, 697.0), // 1
    pair(1336.0, 697.0), // 2
    pair(1477.0, 697.0), // 3
    pair(1209.0, 770.0), // 4
    pair(1336.0, 770.0), // 5
    pair(1477.0, 770.0), // 6
    pair(1209.0, 852.0), // 7
    pair(1336.0, 852.0), // 8
    pair(1477.0, 852.0), // 9
    pair(1633.0, 697.0), // A
    pair(1633.0, 770.0), // B
    pair(1633.0, 852.0), // C
    pair(1633.0, 941.0), // D
    pair(1209.0, 941.0), // *
    pair(1477.0, 941.0), // #
];

pub fn tone_for(symbol: Symbol) -> TonePair {
    TONE_TABLE[symbol.table_index()]
}
