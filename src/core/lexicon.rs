// Lexicon - word lists and fake-text helpers for human-readable attributes
// Names, organizations, places and filler sentences; nothing here is real data

use rand::Rng;

use super::distributions::Choices;

const FIRST_NAMES: Choices<&str> = Choices::new(&[
    "Aaliyah", "Adam", "Alicia", "Amanda", "Andre", "Angela", "Brandon", "Brenda", "Carlos",
    "Catherine", "Christopher", "Crystal", "Daniel", "Danielle", "David", "Denise", "Diana",
    "Elena", "Emily", "Eric", "Fatima", "Gabriel", "Grace", "Hannah", "Isaac", "Jasmine",
    "Jennifer", "Jessica", "John", "Jose", "Joyce", "Julia", "Karen", "Keisha", "Kevin",
    "Laura", "Linda", "Lisa", "Luis", "Maria", "Mark", "Megan", "Michael", "Michelle",
    "Monica", "Nancy", "Nicole", "Patricia", "Priya", "Rachel", "Robert", "Rosa", "Ryan",
    "Samantha", "Sandra", "Sarah", "Sharon", "Stephanie", "Susan", "Tamara", "Teresa",
    "Thomas", "Tiffany", "Valerie", "Vanessa", "William", "Yolanda",
]);

const LAST_NAMES: Choices<&str> = Choices::new(&[
    "Adams", "Allen", "Anderson", "Baker", "Bell", "Brooks", "Brown", "Campbell", "Carter",
    "Chen", "Clark", "Collins", "Cook", "Cooper", "Cruz", "Davis", "Diaz", "Edwards", "Evans",
    "Flores", "Garcia", "Gomez", "Gonzalez", "Green", "Hall", "Harris", "Hernandez", "Hill",
    "Jackson", "Johnson", "Jones", "Kelly", "Kim", "King", "Lee", "Lewis", "Lopez", "Martin",
    "Martinez", "Miller", "Mitchell", "Moore", "Morgan", "Murphy", "Nguyen", "Nelson",
    "Ortiz", "Parker", "Patel", "Perez", "Phillips", "Ramirez", "Reed", "Reyes", "Rivera",
    "Roberts", "Robinson", "Rodriguez", "Sanchez", "Scott", "Smith", "Stewart", "Taylor",
    "Thomas", "Thompson", "Torres", "Turner", "Walker", "White", "Williams", "Wilson",
    "Wright", "Young",
]);

const COMPANY_SUFFIXES: Choices<&str> = Choices::new(&["Inc", "LLC", "Group", "PLC", "Ltd"]);

const CITIES: Choices<&str> = Choices::new(&[
    "Port Angela", "North Michaelside", "Lake Jennifer", "East Roberttown", "West Lisaville",
    "South Davidmouth", "New Karen", "Port Sarah", "Millerberg", "Garciafort",
    "Lake Christopher", "North Patricia", "East Maria", "Jonesview", "Smithshire",
    "West Danielle", "Port Thomas", "Williamsburgh", "New Monica", "South Teresa",
    "Lake Brandon", "Rodriguezhaven", "East Nicole", "North Luis", "Taylorport",
]);

const BS_VERBS: Choices<&str> = Choices::new(&[
    "implement", "utilize", "integrate", "streamline", "optimize", "evolve", "transform",
    "embrace", "enable", "orchestrate", "leverage", "reinvent", "aggregate", "architect",
    "enhance", "incentivize", "morph", "empower", "envisioneer", "monetize", "harness",
    "facilitate", "seize", "disintermediate", "synergize", "strategize", "deploy", "brand",
    "grow", "target", "syndicate", "synthesize", "deliver", "mesh", "incubate", "engage",
    "maximize", "benchmark", "expedite", "reintermediate", "whiteboard", "visualize",
    "repurpose", "innovate", "scale", "unleash", "drive", "extend", "engineer",
    "revolutionize", "generate", "exploit", "transition", "e-enable", "iterate",
    "cultivate", "matrix", "productize", "redefine", "recontextualize",
]);

const BS_ADJECTIVES: Choices<&str> = Choices::new(&[
    "clicks-and-mortar", "value-added", "vertical", "proactive", "robust", "revolutionary",
    "scalable", "leading-edge", "innovative", "intuitive", "strategic", "e-business",
    "mission-critical", "sticky", "one-to-one", "24/7", "end-to-end", "global", "B2B", "B2C",
    "granular", "frictionless", "virtual", "viral", "dynamic", "best-of-breed", "killer",
    "magnetic", "bleeding-edge", "web-enabled", "interactive", "dot-com", "sexy",
    "back-end", "real-time", "efficient", "front-end", "distributed", "seamless",
    "extensible", "turn-key", "world-class", "open-source", "cross-platform",
    "cross-media", "synergistic", "bricks-and-clicks", "out-of-the-box", "enterprise",
    "integrated", "impactful", "wireless", "transparent", "next-generation", "cutting-edge",
    "user-centric", "visionary", "customized", "ubiquitous", "plug-and-play",
    "collaborative", "compelling", "holistic", "rich",
]);

const BS_NOUNS: Choices<&str> = Choices::new(&[
    "synergies", "paradigms", "markets", "partnerships", "infrastructures", "platforms",
    "initiatives", "channels", "eyeballs", "communities", "ROI", "solutions", "action-items",
    "portals", "niches", "technologies", "content", "supply-chains", "convergence",
    "relationships", "architectures", "interfaces", "e-markets", "e-commerce", "systems",
    "bandwidth", "models", "mindshare", "deliverables", "users", "schemas", "networks",
    "applications", "metrics", "e-business", "functionalities", "experiences",
    "web services", "methodologies", "blockchains", "lifetime value",
]);

const LOREM_WORDS: Choices<&str> = Choices::new(&[
    "able", "about", "across", "action", "add", "agency", "agree", "air", "already", "always",
    "among", "analysis", "answer", "approach", "area", "argue", "arm", "article", "attention",
    "author", "away", "back", "bank", "base", "beat", "because", "behavior", "believe",
    "better", "beyond", "bill", "blood", "board", "body", "book", "break", "bring", "budget",
    "build", "business", "call", "camera", "campaign", "care", "career", "carry", "case",
    "catch", "cause", "central", "century", "certain", "chance", "change", "child", "choice",
    "citizen", "civil", "claim", "class", "clear", "close", "coach", "cold", "common",
    "community", "company", "compare", "condition", "consider", "control", "cost", "could",
    "country", "course", "court", "cover", "create", "crime", "cultural", "current",
    "customer", "data", "deal", "decade", "decide", "deep", "defense", "degree", "describe",
    "design", "detail", "develop", "difference", "direction", "discover", "discuss",
    "doctor", "door", "draw", "dream", "drive", "during", "early", "economy", "edge",
    "effect", "effort", "either", "election", "else", "employee", "energy", "enjoy",
    "enough", "entire", "environment", "evening", "event", "evidence", "exactly", "example",
    "expert", "explain", "face", "fact", "family", "federal", "feel", "field", "figure",
    "final", "financial", "firm", "floor", "focus", "force", "foreign", "forward", "free",
    "friend", "front", "future", "garden", "general", "girl", "goal", "government", "great",
    "group", "grow", "guess", "hair", "half", "hand", "happen", "hard", "health", "hear",
    "heart", "help", "history", "hold", "home", "hope", "hospital", "hotel", "huge", "human",
    "idea", "image", "impact", "important", "improve", "include", "increase", "indeed",
    "individual", "industry", "information", "inside", "instead", "interest", "interview",
    "involve", "issue", "itself", "join", "just", "keep", "kind", "kitchen", "know", "land",
    "language", "large", "late", "later", "lawyer", "lead", "learn", "least", "leave",
    "left", "legal", "less", "letter", "level", "life", "light", "likely", "line", "list",
    "listen", "little", "local", "long", "look", "loss", "machine", "main", "maintain",
    "majority", "manage", "management", "market", "matter", "maybe", "measure", "media",
    "medical", "meeting", "member", "memory", "mention", "message", "method", "middle",
    "might", "military", "million", "mind", "minute", "miss", "mission", "model", "modern",
    "moment", "money", "month", "morning", "mother", "move", "movement", "music", "must",
    "nation", "natural", "nature", "near", "nearly", "necessary", "need", "network", "never",
    "news", "next", "night", "none", "north", "note", "nothing", "notice", "number", "occur",
    "offer", "office", "officer", "often", "once", "only", "open", "operation", "order",
    "organization", "other", "others", "outside", "owner", "page", "pain", "paper", "parent",
    "part", "particular", "partner", "party", "pass", "past", "patient", "pattern", "peace",
    "people", "perform", "perhaps", "period", "person", "personal", "phone", "physical",
    "pick", "picture", "piece", "place", "plan", "plant", "play", "point", "police", "policy",
    "political", "poor", "popular", "population", "position", "positive", "possible",
    "power", "practice", "prepare", "present", "pressure", "pretty", "prevent", "price",
    "private", "probably", "problem", "process", "produce", "product", "professional",
    "program", "project", "property", "protect", "prove", "provide", "public", "pull",
    "purpose", "push", "quality", "question", "quickly", "quite", "race", "radio", "raise",
    "range", "rate", "rather", "reach", "read", "ready", "real", "reality", "realize",
    "reason", "receive", "recent", "recently", "recognize", "record", "reduce", "reflect",
    "region", "relate", "remain", "remember", "remove", "report", "represent", "require",
    "research", "resource", "respond", "response", "rest", "result", "return", "reveal",
    "rich", "right", "rise", "risk", "road", "rock", "role", "room", "rule", "safe", "same",
    "save", "scene", "school", "science", "score", "season", "seat", "second", "section",
    "security", "seek", "seem", "sell", "send", "senior", "sense", "series", "serious",
    "serve", "service", "seven", "several", "shake", "share", "shoulder", "show", "side",
    "sign", "significant", "similar", "simple", "simply", "since", "sing", "single", "sister",
    "site", "situation", "skill", "small", "social", "society", "soldier", "some", "someone",
    "something", "sometimes", "song", "soon", "sort", "sound", "source", "south", "space",
    "speak", "special", "specific", "speech", "spend", "sport", "spring", "staff", "stage",
    "stand", "standard", "star", "start", "state", "statement", "station", "stay", "step",
    "still", "stock", "stop", "store", "story", "strategy", "street", "strong", "structure",
    "student", "study", "stuff", "style", "subject", "success", "successful", "suddenly",
    "suffer", "suggest", "summer", "support", "sure", "surface", "system", "table", "take",
    "talk", "task", "teach", "theory", "team", "technology", "television", "tell", "tend",
    "term", "test", "than", "thank", "their", "themselves", "theory", "there", "these",
    "thing", "think", "third", "those", "though", "thought", "thousand", "threat", "three",
    "through", "throughout", "throw", "thus", "time", "today", "together", "tonight", "total",
    "tough", "toward", "town", "trade", "traditional", "training", "travel", "treat",
    "treatment", "tree", "trial", "trip", "trouble", "true", "truth", "turn", "type", "under",
    "understand", "unit", "until", "upon", "usually", "value", "various", "very", "victim",
    "view", "violence", "visit", "voice", "vote", "wait", "walk", "wall", "want", "watch",
    "water", "weapon", "wear", "week", "weight", "well", "west", "western", "whatever",
    "whether", "which", "while", "white", "whole", "whom", "whose", "wide", "wife", "will",
    "wind", "window", "wish", "with", "within", "without", "woman", "wonder", "word", "work",
    "worker", "world", "worry", "would", "write", "writer", "wrong", "yard", "yeah", "year",
    "young", "yourself",
]);

/// Fake-text helpers. Every function draws from the caller's RNG only.
pub struct Lexicon;

impl Lexicon {
    /// "First Last"
    pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
        format!("{} {}", FIRST_NAMES.pick(rng), LAST_NAMES.pick(rng))
    }

    /// Organization name in one of three shapes: "Smith Inc", "Lee-Patel", "Kim, Cruz and Diaz"
    pub fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
        match rng.random_range(0..3) {
            0 => format!("{} {}", LAST_NAMES.pick(rng), COMPANY_SUFFIXES.pick(rng)),
            1 => format!("{}-{}", LAST_NAMES.pick(rng), LAST_NAMES.pick(rng)),
            _ => format!(
                "{}, {} and {}",
                LAST_NAMES.pick(rng),
                LAST_NAMES.pick(rng),
                LAST_NAMES.pick(rng)
            ),
        }
    }

    pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
        CITIES.pick(rng).to_string()
    }

    /// Title-cased buzzword phrase, e.g. "Leverage Seamless Platforms"
    pub fn catch_phrase<R: Rng + ?Sized>(rng: &mut R) -> String {
        let words = [BS_VERBS.pick(rng), BS_ADJECTIVES.pick(rng), BS_NOUNS.pick(rng)];
        words
            .iter()
            .map(|phrase| title_case(phrase))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Capitalized sentence ending in a period.
    ///
    /// The word count varies between 60% and 140% of `nb_words` (at least one word).
    pub fn sentence<R: Rng + ?Sized>(rng: &mut R, nb_words: usize) -> String {
        let low = (nb_words * 60).div_ceil(100);
        let high = nb_words * 140 / 100;
        let count = rng.random_range(low..=high.max(low)).max(1);

        let mut text = (0..count)
            .map(|_| LOREM_WORDS.pick(rng))
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(first) = text.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        text.push('.');
        text
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(['-', ' '])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let sentence = Lexicon::sentence(&mut rng, 15);
            assert!(sentence.ends_with('.'));
            assert!(sentence.chars().next().unwrap().is_ascii_uppercase());
            let words = sentence.split_whitespace().count();
            assert!((9..=21).contains(&words), "{} words", words);
        }
    }

    #[test]
    fn test_single_word_sentence() {
        let mut rng = StdRng::seed_from_u64(2);
        let sentence = Lexicon::sentence(&mut rng, 1);
        assert_eq!(sentence.split_whitespace().count(), 1);
    }

    #[test]
    fn test_catch_phrase_is_title_cased() {
        let mut rng = StdRng::seed_from_u64(3);
        let phrase = Lexicon::catch_phrase(&mut rng);
        assert!(phrase
            .split(' ')
            .filter(|w| !w.is_empty())
            .all(|w| w.chars().next().unwrap().is_uppercase() || w.starts_with(char::is_numeric)));
    }

    #[test]
    fn test_person_name_has_two_parts() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(Lexicon::person_name(&mut rng).split(' ').count(), 2);
    }
}
