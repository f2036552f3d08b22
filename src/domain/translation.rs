//! Serbian -> English product label table.
//!
//! The source catalog may grow, so lookups fall back to the input label.

use std::collections::HashMap;

const SR_TO_EN: [(&str, &str); 38] = [
    ("Pšenica", "Wheat"),
    ("Ječam", "Barley"),
    ("Kukuruz", "Corn"),
    ("Ovas", "Oat"),
    ("Raž", "Rye"),
    ("Uljana repica", "Oilseed rape"),
    ("Šećerna repa", "Sugar beet"),
    ("Suncokret", "Sunflower"),
    ("Soja", "Soy"),
    ("Duvan", "Tobacco"),
    ("Krompir", "Potato"),
    ("Paradajz", "Tomato"),
    ("Kupus i kelj", "Cabbage and kale"),
    ("Crni luk", "Onion"),
    ("Paprika", "Pepper"),
    ("Pasulj", "Bean"),
    ("Dinje i lubenice", "Melon and Watermelon"),
    ("Lucerka", "Alfalfa"),
    ("Jabuke", "Apples"),
    ("Kruške", "Pear"),
    ("Šljive", "Plum"),
    ("Orasi", "Nuts"),
    ("Grožđe", "Grapes"),
    ("Jagode", "Strawberries"),
    ("Maline", "Raspberries"),
    ("Trešnje", "Cherries"),
    ("Višnje", "Sour cherries"),
    ("Kajsije", "Apricots"),
    ("Breskve", "Peach"),
    ("mršave i mesnate svinje", "fleshy pigs"),
    ("masne i polumasne svinje", "fat pigs"),
    ("Ovce - ukupno", "sheeps"),
    ("Tovni pilići", "Chickens"),
    ("Kravlje mleko, mil.l", "Cow milk"),
    ("Ovčije mleko, mil.l", "Sheep milk"),
    ("Jaja, mil.kom.", "Eggs"),
    ("Vuna, t", "Wool"),
    ("Med, t", "Honey"),
];

/// Read-only label mapping with identity fallback.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    map: HashMap<&'static str, &'static str>,
}

impl TranslationTable {
    /// The built-in Serbian -> English product table.
    pub fn serbian_to_english() -> Self {
        Self {
            map: SR_TO_EN.iter().copied().collect(),
        }
    }

    /// Translate `label`, or return it unchanged when it is not in the table.
    pub fn translate<'a>(&'a self, label: &'a str) -> &'a str {
        self.map.get(label).map_or(label, |en| *en)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.map.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::serbian_to_english()
    }
}
