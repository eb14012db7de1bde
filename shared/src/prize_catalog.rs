use std::fmt;

/// A prize that can appear on the roulette strip or in the "possible prizes" list.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub price: u32,
    /// Relative draw probability. Only meaningful inside a [`PrizeCatalog`].
    pub weight: f64,
    pub display_chance: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Empty,
    InvalidWeight { index: usize },
    TotalOverflow,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "prize catalog is empty"),
            CatalogError::InvalidWeight { index } => {
                write!(f, "prize at index {} has a non-positive weight", index)
            }
            CatalogError::TotalOverflow => write!(f, "prize weights do not sum to a finite total"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, non-empty list of prizes with strictly positive finite weights.
///
/// The only way to obtain one is [`PrizeCatalog::new`], so every catalog the
/// selector sees already satisfies its precondition.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeCatalog {
    entries: Vec<PrizeEntry>,
    total_weight: f64,
}

impl PrizeCatalog {
    pub fn new(entries: Vec<PrizeEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = entries
            .iter()
            .position(|e| !(e.weight.is_finite() && e.weight > 0.0))
        {
            return Err(CatalogError::InvalidWeight { index });
        }

        let total_weight: f64 = entries.iter().map(|e| e.weight).sum();
        if !total_weight.is_finite() {
            return Err(CatalogError::TotalOverflow);
        }
        Ok(Self { entries, total_weight })
    }

    pub fn entries(&self) -> &[PrizeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PrizeEntry> {
        self.entries.get(index)
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Share of the total weight held by `index`, in percent.
    pub fn chance_percent(&self, index: usize) -> Option<f64> {
        self.entries
            .get(index)
            .map(|e| e.weight / self.total_weight * 100.0)
    }

    /// The strip rendered under the pointer: `repetitions` back-to-back copies.
    pub fn strip(&self, repetitions: usize) -> impl Iterator<Item = &PrizeEntry> + '_ {
        (0..repetitions).flat_map(move |_| self.entries.iter())
    }
}

pub mod icons {
    pub const HEART: &str = "/assets/gifts/heart.png";
    pub const TROPHY: &str = "/assets/gifts/trophy.png";
    pub const GIFT_BOX: &str = "/assets/gifts/gift.png";
    pub const TEDDY: &str = "/assets/gifts/teddy.webp";
    pub const RING: &str = "/assets/gifts/ring.webp";
    pub const ROSE: &str = "/assets/gifts/rose.png";
    pub const DIAMOND: &str = "/assets/gifts/diamond.png";
    pub const STAR_BADGE: &str = "/assets/gifts/star-badge.svg";
    pub const BUTTON_STAR: &str = "/assets/gifts/button-star.svg";
}

const fn prize(
    icon: &'static str,
    label: &'static str,
    price: u32,
    weight: f64,
    display_chance: &'static str,
) -> PrizeEntry {
    PrizeEntry { icon, label, price, weight, display_chance }
}

const ROULETTE_PRIZES: [PrizeEntry; 6] = [
    prize(icons::HEART, "Heart", 15, 27.0, "27%"),
    prize(icons::TROPHY, "Trophy", 100, 6.0, "6%"),
    prize(icons::GIFT_BOX, "Gift Box", 25, 17.5, "17.5%"),
    prize(icons::TEDDY, "Teddy Bear", 15, 27.0, "27%"),
    prize(icons::RING, "Ring", 100, 6.0, "6%"),
    prize(icons::ROSE, "Rose", 25, 17.5, "17.5%"),
];

// Informational only: these percentages are maintained separately from the
// roulette weights and are not used by any draw.
const DISPLAY_PRIZES: [PrizeEntry; 7] = [
    prize(icons::DIAMOND, "Diamond", 100, 1.0, "1%"),
    prize(icons::TROPHY, "Trophy", 100, 1.0, "1%"),
    prize(icons::RING, "Ring", 100, 1.0, "1%"),
    prize(icons::HEART, "Heart", 15, 27.0, "27%"),
    prize(icons::TEDDY, "Teddy", 15, 27.0, "27%"),
    prize(icons::GIFT_BOX, "Gift Box", 25, 17.5, "17.5%"),
    prize(icons::ROSE, "Rose", 25, 17.5, "17.5%"),
];

/// The catalog the roulette draws from.
pub fn roulette_catalog() -> PrizeCatalog {
    PrizeCatalog {
        entries: ROULETTE_PRIZES.to_vec(),
        total_weight: ROULETTE_PRIZES.iter().map(|e| e.weight).sum(),
    }
}

pub fn display_prizes() -> &'static [PrizeEntry] {
    &DISPLAY_PRIZES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(PrizeCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_rejects_weights_summing_past_f64() {
        let mut entries = ROULETTE_PRIZES[..2].to_vec();
        entries[0].weight = f64::MAX;
        entries[1].weight = f64::MAX;
        assert_eq!(PrizeCatalog::new(entries), Err(CatalogError::TotalOverflow));
    }

    #[test]
    fn test_rejects_bad_weights() {
        let mut entries = ROULETTE_PRIZES.to_vec();
        entries[2].weight = 0.0;
        assert_eq!(
            PrizeCatalog::new(entries.clone()),
            Err(CatalogError::InvalidWeight { index: 2 })
        );

        entries[2].weight = f64::NAN;
        assert_eq!(
            PrizeCatalog::new(entries),
            Err(CatalogError::InvalidWeight { index: 2 })
        );
    }

    #[test]
    fn test_builtin_roulette_is_valid() {
        let built = PrizeCatalog::new(ROULETTE_PRIZES.to_vec()).unwrap();
        assert_eq!(built, roulette_catalog());
        assert_eq!(built.len(), 6);
        assert_eq!(built.total_weight(), 101.0);
    }

    #[test]
    fn test_strip_repeats_catalog() {
        let catalog = roulette_catalog();
        let strip: Vec<_> = catalog.strip(10).collect();
        assert_eq!(strip.len(), 60);
        assert_eq!(strip[6].label, catalog.entries()[0].label);
        assert_eq!(strip[59].label, catalog.entries()[5].label);
    }

    #[test]
    fn test_chance_percent() {
        let catalog = roulette_catalog();
        let trophy = catalog.chance_percent(1).unwrap();
        assert!((trophy - 600.0 / 101.0).abs() < 1e-9);
        assert_eq!(catalog.chance_percent(6), None);
    }
}
