use image::Rgba;

/// One of the six amount ranges that pick the background template and, in the
/// tiered style, the text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Water,
    Green,
    Yellow,
    Orange,
    Pink,
    Red,
}

impl Tier {
    /// Maps a donation amount to its tier. Upper bounds are exclusive and the
    /// last bucket is open-ended, so every amount lands on exactly one tier.
    pub fn from_amount(amount: u64) -> Self {
        match amount {
            0..=499 => Tier::Water,
            500..=999 => Tier::Green,
            1000..=1999 => Tier::Yellow,
            2000..=4999 => Tier::Orange,
            5000..=9999 => Tier::Pink,
            _ => Tier::Red,
        }
    }

    /// Text color for the tiered style: white on the dark templates (amounts
    /// at or above 2000), black on the rest.
    pub fn font_color(self) -> Rgba<u8> {
        match self {
            Tier::Water | Tier::Green | Tier::Yellow => Rgba([0, 0, 0, 255]),
            Tier::Orange | Tier::Pink | Tier::Red => Rgba([255, 255, 255, 255]),
        }
    }
}
