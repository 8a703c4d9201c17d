//! Card, rank, and suit types, plus the short text codes used in play
//! commands.

use core::fmt;

use crate::error::CardError;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// King.
    King,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
}

impl Rank {
    /// All thirteen ranks, in pack-construction order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
    ];

    /// Returns the rank's code prefix (`"A"`, `"K"`, `"Q"`, `"J"`, `"2"`
    /// through `"10"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
        }
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::Ace),
            "K" => Ok(Self::King),
            "Q" => Ok(Self::Queen),
            "J" => Ok(Self::Jack),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" => Ok(Self::Ten),
            _ => Err(CardError::UnknownRank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in pack-construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's code letter (`'C'`, `'D'`, `'H'` or `'S'`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Self::Clubs),
            'D' => Ok(Self::Diamonds),
            'H' => Ok(Self::Hearts),
            'S' => Ok(Self::Spades),
            _ => Err(CardError::UnknownSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The code of both joker cards.
pub const JOKER_CODE: &str = "JO";

/// A playing card: a rank/suit pairing, or one of the two jokers.
///
/// A joker carries neither rank nor suit, and the two jokers compare equal;
/// collections that hold cards distinguish them by position, never by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    /// A standard card with a rank and a suit.
    Standard {
        /// The card's rank.
        rank: Rank,
        /// The card's suit.
        suit: Suit,
    },
    /// A joker.
    Joker,
}

impl Card {
    /// Creates a standard card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Standard { rank, suit }
    }

    /// Returns the card's rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(rank),
            Self::Joker => None,
        }
    }

    /// Returns the card's suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(suit),
            Self::Joker => None,
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns the card's short code: `"JO"` for a joker, otherwise the rank
    /// code followed by the suit letter (`"6C"`, `"10H"`, `"AS"`).
    ///
    /// # Example
    ///
    /// ```
    /// use eights::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Rank::Ten, Suit::Hearts).code(), "10H");
    /// assert_eq!(Card::Joker.code(), "JO");
    /// ```
    #[must_use]
    pub fn code(self) -> String {
        self.to_string()
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    /// Parses a card code, case-insensitively.
    fn try_from(code: &str) -> Result<Self, Self::Error> {
        if code.eq_ignore_ascii_case(JOKER_CODE) {
            return Ok(Self::Joker);
        }
        let Some(last) = code.chars().last() else {
            return Err(CardError::UnknownSuit);
        };
        let suit = Suit::try_from(last)?;
        let rank = Rank::try_from(&code[..code.len() - last.len_utf8()])?;
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Self::Joker => f.write_str(JOKER_CODE),
        }
    }
}
