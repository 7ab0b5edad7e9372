//! Keyword taxonomy used by the fallback classifier.
//!
//! Categories are declared in a fixed array so iteration order, and therefore
//! the tie-break between equally scored categories, is stable. Several
//! categories resolve to the same final [`AestheticKey`].

use super::AestheticKey;

/// One scored category in the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxonomyCategory {
    /// Category name; unique across the table.
    pub name: &'static str,
    /// Multiplier applied to every keyword hit in this category.
    pub weight: f64,
    /// Final aesthetic the category resolves to.
    pub aesthetic: AestheticKey,
    /// Lowercase keywords; multi-word entries match as phrases.
    pub keywords: &'static [&'static str],
}

/// The taxonomy in declaration order. Earlier entries win ties.
pub const TAXONOMY: [TaxonomyCategory; 16] = [
    TaxonomyCategory {
        name: "chill",
        weight: 1.0,
        aesthetic: AestheticKey::Chill,
        keywords: &["chill", "relax", "calm", "laid back", "vibing", "mellow", "unwind", "easygoing"],
    },
    TaxonomyCategory {
        name: "energetic",
        weight: 1.0,
        aesthetic: AestheticKey::Energetic,
        keywords: &["energy", "energized", "hyped", "excited", "pumped", "fire", "lit", "buzzing"],
    },
    TaxonomyCategory {
        name: "romantic",
        weight: 1.0,
        aesthetic: AestheticKey::Romantic,
        keywords: &["love", "crush", "heart", "romantic", "butterflies", "miss", "date night", "kiss"],
    },
    TaxonomyCategory {
        name: "melancholy",
        weight: 1.0,
        aesthetic: AestheticKey::Melancholy,
        keywords: &["sad", "tired", "exhausted", "lonely", "down", "blue", "gloomy", "cry"],
    },
    TaxonomyCategory {
        name: "anxious",
        weight: 1.2,
        aesthetic: AestheticKey::Melancholy,
        keywords: &["anxious", "stressed", "worried", "nervous", "overwhelmed", "panic", "uneasy"],
    },
    TaxonomyCategory {
        name: "nostalgic",
        weight: 0.9,
        aesthetic: AestheticKey::Melancholy,
        keywords: &["nostalgic", "memories", "remember", "childhood", "old days", "used to"],
    },
    TaxonomyCategory {
        name: "chaotic",
        weight: 0.9,
        aesthetic: AestheticKey::Mysterious,
        keywords: &["chaotic", "chaos", "messy", "scattered", "restless", "unhinged", "weird"],
    },
    TaxonomyCategory {
        name: "adventurous",
        weight: 1.0,
        aesthetic: AestheticKey::Adventurous,
        keywords: &["adventure", "travel", "explore", "free", "wild", "nature", "hike", "road trip"],
    },
    TaxonomyCategory {
        name: "creative",
        weight: 1.0,
        aesthetic: AestheticKey::Creative,
        keywords: &["creative", "inspired", "art", "ideas", "flow", "create", "paint", "write"],
    },
    TaxonomyCategory {
        name: "dreamy",
        weight: 0.8,
        aesthetic: AestheticKey::Creative,
        keywords: &["dreamy", "daydream", "floating", "imagine", "whimsical"],
    },
    TaxonomyCategory {
        name: "peaceful",
        weight: 1.0,
        aesthetic: AestheticKey::Peaceful,
        keywords: &["peace", "meditate", "serene", "content", "balanced", "quiet", "still"],
    },
    TaxonomyCategory {
        name: "grateful",
        weight: 1.1,
        aesthetic: AestheticKey::Peaceful,
        keywords: &["grateful", "blessed", "thankful", "gratitude", "appreciate"],
    },
    TaxonomyCategory {
        name: "confident",
        weight: 1.0,
        aesthetic: AestheticKey::Confident,
        keywords: &["confident", "boss", "slay", "winning", "proud", "strong", "unstoppable"],
    },
    TaxonomyCategory {
        name: "focused",
        weight: 0.9,
        aesthetic: AestheticKey::Confident,
        keywords: &["focused", "productive", "grind", "discipline", "locked in", "motivated"],
    },
    TaxonomyCategory {
        name: "cozy",
        weight: 1.0,
        aesthetic: AestheticKey::Cozy,
        keywords: &["cozy", "home", "comfort", "warm", "snuggle", "rain", "blanket", "tea"],
    },
    TaxonomyCategory {
        name: "mysterious",
        weight: 1.0,
        aesthetic: AestheticKey::Mysterious,
        keywords: &["mysterious", "deep", "think", "night", "dark", "dream", "wonder"],
    },
];
