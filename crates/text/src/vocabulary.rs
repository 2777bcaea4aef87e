//! Fixed character vocabulary shared by training data prep and inference
//!
//! The table is an ordered symbol sequence; a symbol's position is its
//! integer code. Encoding (metadata reading) and decoding (model output)
//! must use the identical sequence or codes stop round-tripping, so the
//! table is process-wide immutable state behind [`Vocabulary::bengali`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Result, TextError};

/// Code reserved for padding unused batch positions
pub const PAD_CODE: u32 = 0;

/// Code appended to every transcript as the stop signal
pub const EOS_CODE: u32 = 1;

/// Bengali transcript alphabet: padding and end-of-sequence markers,
/// space, independent vowels, dependent vowel signs, consonants,
/// diacritics, zero-width joiner and apostrophe. Order is load-bearing:
/// position = code, and the first two entries must stay `P` and `E`.
const BENGALI_SYMBOLS: &str = concat!(
    "PE ",
    "অআইঈউঊঋএঐওঔ",
    "াি\u{09C0}\u{09C1}\u{09C2}\u{09C3}\u{09C7}\u{09C8}\u{09CB}\u{09CC}",
    "কখগঘঙচছজঝঞটঠডঢণতথদধনপফবভমযরলশষসহ",
    "\u{09DC}\u{09DD}\u{09DF}ৎংঃ\u{0981}\u{09CD}ঽ",
    "\u{200D}'",
);

static BENGALI: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::new(BENGALI_SYMBOLS));

/// Ordered symbol table with bidirectional symbol/code lookup
#[derive(Debug, Clone)]
pub struct Vocabulary {
    symbols: Vec<char>,
    codes: HashMap<char, u32>,
}

impl Vocabulary {
    /// The shared Bengali table, built once on first use
    pub fn bengali() -> &'static Vocabulary {
        &BENGALI
    }

    /// Build a table from an ordered symbol string.
    ///
    /// Repeated symbols keep their first position so the symbol→code
    /// mapping stays unambiguous.
    fn new(symbols: &str) -> Self {
        let mut table = Vocabulary {
            symbols: Vec::new(),
            codes: HashMap::new(),
        };
        for symbol in symbols.chars() {
            if table.codes.contains_key(&symbol) {
                continue;
            }
            table.codes.insert(symbol, table.symbols.len() as u32);
            table.symbols.push(symbol);
        }
        debug_assert_eq!(table.symbols[PAD_CODE as usize], 'P');
        debug_assert_eq!(table.symbols[EOS_CODE as usize], 'E');
        table
    }

    /// Number of symbols in the table
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Ordered symbols; index = code
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The end-of-sequence symbol appended to every transcript
    pub fn eos_symbol(&self) -> char {
        self.symbols[EOS_CODE as usize]
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Code for a symbol
    pub fn code(&self, symbol: char) -> Result<u32> {
        self.codes
            .get(&symbol)
            .copied()
            .ok_or(TextError::OutOfVocabulary(symbol))
    }

    /// Symbol for a code
    pub fn symbol(&self, code: u32) -> Result<char> {
        self.symbols
            .get(code as usize)
            .copied()
            .ok_or(TextError::UnknownCode(code))
    }

    /// Encode every character of `text` to its code
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        text.chars().map(|c| self.code(c)).collect()
    }

    /// Decode a code sequence back to text
    pub fn decode(&self, codes: &[u32]) -> Result<String> {
        codes.iter().map(|&code| self.symbol(code)).collect()
    }
}
