//! English word lists backing the lexicon tagger
//!
//! Closed-class words are listed exhaustively enough for descriptive prose.
//! Open-class lists only carry words the suffix heuristics would get wrong
//! or could not guess at all.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::tagger::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "such", "what", "which", "whatever", "whichever", "all",
    "both", "half", "several", "many", "much", "few", "fewer", "less", "least", "more", "most",
    "enough",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "whoever", "someone", "somebody", "something", "anyone", "anybody", "anything",
    "everyone", "everybody", "everything", "nobody", "nothing", "none", "one", "ones",
];

const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "if", "because", "while", "although", "though", "unless", "whereas", "whether", "since",
    "once", "until", "till", "when", "whenever", "where", "wherever", "so",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "without", "from", "into", "onto", "upon",
    "about", "above", "across", "after", "against", "along", "alongside", "amid", "amidst",
    "among", "amongst", "around", "as", "before", "behind", "below", "beneath", "beside",
    "besides", "between", "beyond", "despite", "down", "during", "except", "inside", "like",
    "near", "off", "out", "outside", "over", "past", "per", "than", "through", "throughout",
    "toward", "towards", "under", "underneath", "unlike", "up", "via", "within", "atop",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought", "'re", "'m", "'ve", "'ll", "'d",
];

const PARTICLES: &[&str] = &["to", "not", "n't", "'s"];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "hello", "hi", "yes", "yeah", "okay", "ok", "please", "alas",
    "hooray", "oops", "ouch", "uh", "um", "voila",
];

const ADVERBS: &[&str] = &[
    "very", "quite", "rather", "too", "also", "just", "only", "even", "still", "already",
    "almost", "always", "never", "often", "sometimes", "soon", "now", "then", "here", "there",
    "again", "ever", "perhaps", "maybe", "well", "away", "back", "together", "else", "instead",
    "somewhat", "fairly", "pretty", "so", "how", "why", "indeed", "yet", "today", "tonight",
    "abroad", "ahead", "apart", "aside", "anyway", "downstairs", "upstairs", "everywhere",
    "somewhere", "nowhere", "anywhere", "outdoors", "indoors", "forward", "backward",
];

/// Adjectives, including colours and texture words, and `-ly` adjectives that
/// would otherwise be read as adverbs.
const ADJECTIVES: &[&str] = &[
    // colours
    "red", "orange", "yellow", "green", "blue", "purple", "violet", "pink", "brown", "black",
    "white", "gray", "grey", "golden", "silver", "crimson", "scarlet", "azure", "teal", "cyan",
    "magenta", "beige", "ivory", "amber", "emerald", "turquoise", "indigo", "maroon", "navy",
    "pastel", "neon", "vivid", "pale", "dark", "light", "bright", "dim", "colorful",
    "colourful", "monochrome",
    // size and shape
    "big", "small", "large", "little", "tiny", "huge", "giant", "gigantic", "enormous", "massive",
    "tall", "short", "long", "wide", "narrow", "thick", "thin", "round", "square", "flat",
    "miniature", "slender", "chubby", "fat", "broad", "deep", "shallow", "high", "low",
    // texture and material
    "fluffy", "furry", "fuzzy", "soft", "hard", "smooth", "rough", "shiny", "glossy", "matte",
    "silky", "sleek", "wet", "dry", "wooden", "metallic", "glassy", "crystal", "velvety",
    "spiky", "curly", "wavy", "straight", "sharp", "dull", "sticky", "muddy", "dusty", "rusty",
    "sandy", "rocky", "grassy", "leafy", "snowy", "icy", "frozen", "misty", "foggy", "cloudy",
    "rainy", "sunny", "stormy", "windy", "hazy", "creamy", "crispy", "crunchy", "juicy",
    // quality and mood
    "good", "bad", "new", "old", "young", "ancient", "modern", "futuristic", "vintage",
    "retro", "classic", "beautiful", "pretty", "ugly", "cute", "adorable", "lovely", "happy",
    "sad", "angry", "calm", "quiet", "loud", "busy", "lazy", "sleepy", "cozy", "cosy", "warm",
    "cold", "hot", "cool", "fresh", "clean", "dirty", "empty", "full", "rich", "poor", "strong",
    "weak", "gentle", "fierce", "wild", "tame", "majestic", "elegant", "graceful", "serene",
    "peaceful", "dramatic", "mysterious", "magical", "surreal", "realistic", "abstract",
    "detailed", "intricate", "simple", "minimal", "minimalist", "epic", "heroic", "dreamy",
    "spooky", "eerie", "gloomy", "cheerful", "playful", "friendly", "lonely", "silly", "jolly",
    "holy", "early", "daily", "chilly", "lively", "elderly", "curious", "fancy",
    "plain", "quick", "slow", "fast", "rare", "strange", "weird", "odd", "fine", "great",
    "grand", "noble", "royal", "humble", "proud", "brave", "wise", "silent", "sweet", "sour",
    "bitter", "salty", "spicy", "tasty", "delicious", "healthy", "sick", "tired", "hungry",
    "urban", "rural", "tropical", "arctic", "cosmic", "celestial", "digital", "cinematic",
    "photorealistic", "stylized", "whimsical", "vibrant", "glowing", "radiant", "luminous",
    "other", "same", "different", "next", "last", "first", "second", "third", "main", "whole",
    "open", "closed", "free", "natural", "real", "true", "false", "human", "final", "single",
];

/// Common verb forms. Inflections ending in `-ing`/`-ed` are guessed by
/// suffix and only appear here when irregular.
const VERBS: &[&str] = &[
    "sit", "sits", "sat", "stand", "stands", "stood", "lie", "lies", "lay", "lays", "run",
    "runs", "ran", "walk", "walks", "jump", "jumps", "fly", "flies", "flew", "swim", "swims",
    "swam", "sleep", "sleeps", "slept", "eat", "eats", "ate", "eaten", "drink", "drinks",
    "drank", "look", "looks", "see", "sees", "saw", "seen", "watch", "watches", "hold", "holds",
    "held", "wear", "wears", "wore", "worn", "carry", "carries", "play", "plays", "make",
    "makes", "made", "take", "takes", "took", "taken", "give", "gives", "gave", "given", "get",
    "gets", "got", "go", "goes", "went", "gone", "come", "comes", "came", "show", "shows",
    "shown", "depict", "depicts", "feature", "features", "paint", "paints", "draw", "draws",
    "drew", "drawn", "create", "creates", "glow", "glows", "shine", "shines", "shone", "rest",
    "rests", "perch", "perches", "gaze", "gazes", "stare", "stares", "smile", "smiles", "hang",
    "hangs", "hung", "float", "floats", "surround", "surrounds", "fill", "fills", "cover",
    "covers", "reflect", "reflects", "appear", "appears", "seem", "seems", "become", "becomes",
    "became", "let", "lets", "keep", "keeps", "kept", "find", "finds", "found", "know", "knows",
    "knew", "known", "think", "thinks", "thought", "want", "wants", "like", "likes", "love",
    "loves", "hope", "hopes", "enjoy", "enjoys", "imagine", "imagines", "generate",
    "generates", "capture", "captures", "bring", "brings", "brought", "put", "puts", "set",
    "sets", "say", "says", "said", "tell", "tells", "told", "try", "tries", "use", "uses",
    "leave", "leaves", "left", "meet", "meets", "met", "grow", "grows", "grew", "grown",
    "fall", "falls", "fell", "fallen", "rise", "rises", "rose", "risen", "dance", "dances",
    "sing", "sings", "sang", "sung", "read", "reads", "write", "writes", "wrote", "written",
];

/// Nouns that the suffix heuristics would mistake for adjectives or verbs.
const NOUNS: &[&str] = &[
    "table", "cable", "fable", "stable", "vegetable", "timetable", "olive", "hive", "archive",
    "detective", "motive", "native", "relative", "fish", "dish", "wish", "radish", "polish",
    "painting", "drawing", "building", "ceiling", "clothing", "wedding", "morning", "evening",
    "ring", "king", "wing", "string", "spring", "thing", "pudding", "sibling",
    "duckling", "feeling", "lighting", "landscaping", "bed", "shed", "sled", "seed", "reed",
    "weed", "speed", "steed", "breed", "need", "creed", "deed", "feed", "sunflower", "flower",
    "photo", "photograph", "picture", "image", "portrait", "scene", "background", "foreground",
    "sky", "city", "body", "baby", "story", "party", "family", "kitty", "puppy", "bunny", "lily",
    "pony", "valley", "butterfly", "dragonfly", "jelly", "belly", "bully", "rally", "ally",
    "fly", "rose",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "dozen",
];

/// Closed-class words and their tags. Earlier lists win on overlap.
static CLOSED_CLASS: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let lists: [(&[&str], PosTag); 10] = [
        (PARTICLES, PosTag::Part),
        (AUXILIARIES, PosTag::Aux),
        (DETERMINERS, PosTag::Det),
        (PRONOUNS, PosTag::Pron),
        (COORDINATING_CONJUNCTIONS, PosTag::Cconj),
        (ADPOSITIONS, PosTag::Adp),
        (SUBORDINATING_CONJUNCTIONS, PosTag::Sconj),
        (INTERJECTIONS, PosTag::Intj),
        (NUMBER_WORDS, PosTag::Num),
        (ADVERBS, PosTag::Adv),
    ];

    let mut map = HashMap::new();
    for (words, tag) in lists {
        for word in words {
            map.entry(*word).or_insert(tag);
        }
    }
    map
});

static ADJECTIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ADJECTIVES.iter().copied().collect());

static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| VERBS.iter().copied().collect());

static NOUN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NOUNS.iter().copied().collect());

/// Tag for a closed-class word, if `lower` is one
pub fn closed_class(lower: &str) -> Option<PosTag> {
    CLOSED_CLASS.get(lower).copied()
}

pub fn is_adjective(lower: &str) -> bool {
    ADJECTIVE_SET.contains(lower)
}

pub fn is_verb(lower: &str) -> bool {
    VERB_SET.contains(lower)
}

pub fn is_noun(lower: &str) -> bool {
    NOUN_SET.contains(lower)
}

/// Pronouns after which an unknown word is read as a finite verb
pub fn is_subject_pronoun(lower: &str) -> bool {
    matches!(lower, "i" | "you" | "he" | "she" | "it" | "we" | "they")
}

/// Possessive pronouns, which introduce a noun phrase
pub fn is_possessive(lower: &str) -> bool {
    matches!(lower, "my" | "your" | "his" | "her" | "its" | "our" | "their")
}

/// Modal auxiliaries, which are followed by a bare verb
pub fn is_modal(lower: &str) -> bool {
    matches!(
        lower,
        "will" | "would" | "shall" | "should" | "can" | "could" | "may" | "might" | "must"
            | "do" | "does" | "did"
    )
}
