//! Static vocabulary banks for the title forge.
//!
//! Every rarity tier has three column-specific pools of ten words each;
//! column 0 is the opening word, column 1 the connector, column 2 the
//! closing word. The synergy table pairs a column-0 key with the column-2
//! substrings that complete its lore connection.

use crate::rarity::Rarity;
use rand::Rng;

/// Column index within a three-word title.
pub type Column = usize;

pub const SYNERGY_PAIRS: [(&str, [&str; 3]); 6] = [
    ("Phoenix", ["Flame", "Stars", "Sun"]),
    ("Void", ["Oblivion", "Abyss", "Infinity"]),
    ("Gods", ["Celestial", "Heaven", "Thrones"]),
    ("Shadow", ["Night", "Silence", "Void"]),
    ("Storm", ["Thunder", "Sky", "Rain"]),
    ("Blood", ["Reaper", "Blade", "Oath"]),
];

pub const WEAPON_NAMES: [&str; 10] = [
    "Slayer", "Bane", "Reaver", "Will", "Spire", "Whisper", "Howl", "Edge", "Calamity", "Verdict",
];

pub const WEAPON_SUFFIXES: [&str; 6] = [
    "of Time", "of the Void", "of Stars", "of Blood", "of Frost", "of Ember",
];

/// True when the first word carries a synergy key and the last word carries
/// one of that key's triggers. Substring containment, not equality:
/// "Void-Born" still pairs with "Oblivion".
pub fn check_synergy(first: &str, last: &str) -> bool {
    SYNERGY_PAIRS.iter().any(|(key, triggers)| {
        first.contains(key) && triggers.iter().any(|t| last.contains(t))
    })
}

/// The ten-word pool for one tier and column.
pub fn word_pool(rarity: Rarity, column: Column) -> &'static [&'static str; 10] {
    let (first, middle, end) = match rarity {
        Rarity::Common => (
            &["The", "Swift", "Dull", "Old", "Small", "Pale", "Grim", "Basic", "Wild", "Deep"],
            &["of the", "who", "from", "in", "near", "with", "by", "and", "the", "at"],
            &["Forest", "Stream", "House", "Valley", "Hill", "Tree", "Cave", "Road", "Stone", "Path"],
        ),
        Rarity::Uncommon => (
            &["Sturdy", "Sharp", "Fierce", "Cold", "Bright", "Iron", "Bronze", "Shadowed", "Quiet", "Trained"],
            &["Striking", "Watching", "Guarding", "Walking", "Breaking", "Seeking", "Bearing", "Holding", "Lifting", "Leading"],
            &["Forge", "Bridge", "Garrison", "Watch", "Blade", "Shield", "Spire", "Tome", "Keep", "Gate"],
        ),
        Rarity::Rare => (
            &["Vanguard", "Slayer", "Whispering", "Shattered", "Golden", "Silver", "Bloody", "Cursed", "Blessed", "Hidden"],
            &["Heart of", "Soul of", "Will of", "Breath of", "Bane of", "Gift of", "Fury of", "Voice of", "Eye of", "Hand of"],
            &["Kingdom", "Shadow", "Winter", "Flame", "Storm", "Spirit", "Legend", "Blood", "Oath", "Empire"],
        ),
        Rarity::Epic => (
            &["Unyielding", "Immortal", "Draconic", "Eternal", "Celestial", "Abyssal", "Sovereign", "Void-Born", "Ghostly", "Primal"],
            &["Who Shatters", "Who Devours", "Who Reclaims", "Who Defies", "Who Commands", "Who Forges", "Who Banishes", "Who Weaves", "Who Rends", "Who Ascends"],
            &["Titans", "Gods", "Dragons", "Realms", "Destiny", "Aeons", "Existence", "Infinity", "Oblivion", "Creation"],
        ),
        Rarity::Legendary => (
            &["Myth-Forged", "Star-Touched", "Age-Old", "Sacred", "Ancestral", "Hallowed", "Doomed", "Radiant", "Obsidian", "Luminescent"],
            &["of Infinite", "of the Sacred", "of Lost", "of Ancient", "of the Great", "of Eternal", "of Silent", "of Dying", "of Born", "of Unseen"],
            &["Paragons", "Prophecies", "Monuments", "Cathedrals", "Graveyards", "Thrones", "Crowns", "Altars", "Visions", "Nightmares"],
        ),
        Rarity::Mythic => (
            &["Phoenix", "Leviathan", "Chimera", "Dragon", "Seraph", "Reaper", "Oracle", "Colossus", "Titan", "Apex"],
            &["of the Burning", "of the Frozen", "of the Endless", "of the Shifting", "of the Primal", "of the Chaotic", "of the Void", "of the Dream", "of the Abyss", "of the Zenith"],
            &["Sun", "Moon", "Sky", "Earth", "Stars", "Void", "Soul", "Mind", "Flesh", "Time"],
        ),
        Rarity::Royalty => (
            &["King's", "Queen's", "Emperor's", "Majestic", "Regal", "Noble", "Dynastic", "High", "Grand", "Imperial"],
            &["Who Rules", "Who Sits Upon", "Who Wields", "Who Commands", "Who Inherits", "Who Ascends", "Who Judges", "Who Conquers", "Who Unites", "Who Destroys"],
            &["Atlantis", "Avalon", "Olympus", "Valhalla", "Asgard", "Eden", "Nirvana", "Tartarus", "Camelot", "Elysium"],
        ),
        Rarity::Elite => (
            &["Zenith", "Pinnacle", "Apex", "Ultimate", "Supreme", "Master", "Grandmaster", "Exalted", "Superior", "Prime"],
            &["at the", "beyond the", "above the", "within the", "master of", "conqueror of", "protector of", "judge of", "scholar of", "guardian of"],
            &["Order", "Circle", "Council", "Hegemony", "Syndicate", "Foundation", "Conclave", "Ascendancy", "Zenith", "Horizon"],
        ),
        Rarity::Exotic => (
            &["Xeno", "Alien", "Otherworldly", "Unfathomable", "Inscrutable", "Bizarre", "Eldritch", "Phase", "Quantum", "Nebulous"],
            &["from the", "outside the", "through the", "beyond the", "warping the", "shredding the", "bleeding the", "twisting the", "erasing the", "mirroring the"],
            &["Dimension", "Singularity", "Wormhole", "Matrix", "Nexus", "Void", "Ether", "Plasma", "Flux", "Rift"],
        ),
        Rarity::Secret => (
            &["Hidden", "Forgotten", "Forbidden", "Masked", "Veiled", "Shadowed", "Occult", "Cipher", "Whispered", "Lost"],
            &["of the Dark", "of the Deep", "of the Night", "of the Silent", "of the Unspoken", "of the Unknown", "of the Hidden", "of the Sealed", "of the Arcane", "of the Esoteric"],
            &["Knowledge", "Truth", "Power", "Legacy", "Pact", "Rune", "Script", "Covenant", "Omen", "Prophecy"],
        ),
        Rarity::Divine => (
            &["Holy", "Saintly", "Angelic", "Godly", "Deific", "Celestial", "Seraphic", "Cherubic", "Sacrosanct", "Empyrean"],
            &["Bearer of", "Avatar of", "Vessel of", "Herald of", "Incarnation of", "Servant of", "Will of", "Grace of", "Mercy of", "Judgment of"],
            &["Heaven", "Paradise", "Light", "Purity", "Creation", "Miracles", "Grace", "Salvation", "Eternity", "Omnipotence"],
        ),
        Rarity::Fabled => (
            &["Once-Upon-a", "Dream-Woven", "Story-Bound", "Mythical", "Legendary", "Illusionary", "Narrative", "Epic", "Poetic", "Fable-Born"],
            &["Who Walked", "Who Spoke", "Who Lived", "Who Died", "Who Became", "Who Wrote", "Who Painted", "Who Dreamed", "Who Sang", "Who Told"],
            &["Tales", "Stories", "Verses", "Chapters", "Scrolls", "Myths", "Lies", "Truths", "Worlds", "Dreams"],
        ),
        Rarity::Transcendental => (
            &["Absolute", "Infinite", "Formless", "Limitless", "Unbound", "Transcendent", "Beyond", "Ultimate", "Pure", "Perfect"],
            &["Becoming the", "Surpassing the", "Dissolving the", "Unifying the", "Ascending the", "Embodying the", "Merging with", "Rising above", "Leaving the", "Reaching the"],
            &["Concept", "Idea", "Thought", "Will", "Energy", "One", "All", "None", "Nothing", "Everything"],
        ),
        Rarity::Cosmic => (
            &["Omniversal", "Galactic", "Universal", "Cosmic", "Stellar", "Interstellar", "Nebular", "Astro", "Void", "Infinite"],
            &["That Dreams", "That Rules", "That Creates", "That Destroys", "That Breathes", "That Holds", "That Weaves", "That Spawns", "That Observes", "That IS"],
            &["Reality", "Space", "Time", "Matter", "Multiverse", "Omniverse", "Chaos", "Order", "Life", "Existence"],
        ),
        Rarity::Chaos => (
            &["Glitched", "Recursive", "Fragmented", "Hyper", "Meta", "Paradoxical", "Singular", "Entropic", "Fluid", "Null"],
            &["[ERROR]", "404", "UNDEFINED", "NULL_POINTER", "OVERFLOW", "STACK", "HEAP", "SEGMENT", "VOLATILE", "ASYNC"],
            &["Void", "Source", "Output", "Kernel", "Logic", "String", "Buffer", "Array", "Object", "Function"],
        ),
    };

    match column {
        0 => first,
        1 => middle,
        _ => end,
    }
}

/// Picks a uniform word from the pool for the given tier and column.
pub fn random_word(rarity: Rarity, column: Column, rng: &mut impl Rng) -> &'static str {
    let pool = word_pool(rarity, column);
    pool[rng.gen_range(0..pool.len())]
}
