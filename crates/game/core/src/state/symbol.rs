use crate::rng::SymbolRng;

/// One token of the reel alphabet.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    Seven,
    Lemon,
    Cherry,
    Watermelon,
    Star,
    Bell,
}

impl Symbol {
    /// Every symbol, in draw order.
    pub const ALL: [Symbol; 6] = [
        Symbol::Seven,
        Symbol::Lemon,
        Symbol::Cherry,
        Symbol::Watermelon,
        Symbol::Star,
        Symbol::Bell,
    ];

    /// Emoji shown on the reel face.
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Seven => "7️⃣",
            Symbol::Lemon => "🍋",
            Symbol::Cherry => "🍒",
            Symbol::Watermelon => "🍉",
            Symbol::Star => "⭐",
            Symbol::Bell => "🔔",
        }
    }

    /// Draws a symbol uniformly at random.
    pub fn draw<R: SymbolRng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.below(Self::ALL.len() as u32) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;
    use core::str::FromStr;

    #[test]
    fn names_round_trip_case_insensitively() {
        assert_eq!(Symbol::Watermelon.to_string(), "watermelon");
        assert_eq!(Symbol::from_str("SEVEN"), Ok(Symbol::Seven));
        assert_eq!(Symbol::from_str("bell"), Ok(Symbol::Bell));
        assert!(Symbol::from_str("plum").is_err());
    }

    #[test]
    fn alphabet_has_six_distinct_glyphs() {
        let mut glyphs: Vec<&str> = Symbol::ALL.iter().map(|s| s.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 6);
        assert_eq!(<Symbol as strum::EnumCount>::COUNT, Symbol::ALL.len());
    }

    #[test]
    fn draw_reaches_every_symbol() {
        let mut rng = PcgRng::new(3);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let symbol = Symbol::draw(&mut rng);
            if !seen.contains(&symbol) {
                seen.push(symbol);
            }
        }
        assert_eq!(seen.len(), Symbol::ALL.len());
    }
}
