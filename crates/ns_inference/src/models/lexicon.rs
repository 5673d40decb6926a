//! Rule-based polarity scoring in the style of VADER.
//!
//! Every token is looked up in a word-polarity lexicon and the raw valence
//! is then adjusted by the words around it (boosters, negations, "but",
//! idioms), by ALL-CAPS emphasis and by trailing punctuation. The summed
//! valence is squashed into a compound score in `[-1.0, 1.0]`.

use lazy_static::lazy_static;
use ns_core::{Error, PolarityScores, Result, SentimentScorer};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const ALPHA: f64 = 15.0;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
    "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

lazy_static! {
    static ref DEFAULT_LEXICON: HashMap<String, f64> =
        parse_lexicon(include_str!("vader_lexicon.txt"));

    static ref BOOSTER_DICT: HashMap<&'static str, f64> = {
        let increments = [
            "absolutely", "amazingly", "awfully", "completely", "considerable",
            "considerably", "decidedly", "deeply", "effing", "enormous", "enormously",
            "entirely", "especially", "exceptional", "exceptionally", "extreme",
            "extremely", "fabulously", "flipping", "flippin", "frackin", "fracking",
            "fricking", "frickin", "frigging", "friggin", "fully", "fuckin", "fucking",
            "fuggin", "fugging", "greatly", "hella", "highly", "hugely", "incredible",
            "incredibly", "intensely", "major", "majorly", "more", "most",
            "particularly", "purely", "quite", "really", "remarkably", "so",
            "substantially", "thoroughly", "total", "totally", "tremendous",
            "tremendously", "uber", "unbelievably", "unusually", "utter", "utterly",
            "very",
        ];
        let decrements = [
            "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof",
            "kind-of", "less", "little", "marginal", "marginally", "occasional",
            "occasionally", "partly", "scarce", "scarcely", "slight", "slightly",
            "somewhat", "sort of", "sorta", "sortof", "sort-of",
        ];
        increments
            .into_iter()
            .map(|w| (w, B_INCR))
            .chain(decrements.into_iter().map(|w| (w, B_DECR)))
            .collect()
    };

    static ref SPECIAL_CASES: HashMap<&'static str, f64> = [
        ("the shit", 3.0),
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("badass", 1.5),
        ("bus stop", 0.0),
        ("yeah right", -2.0),
        ("kiss of death", -1.5),
        ("to die for", 3.0),
        ("beating heart", 3.1),
        ("broken heart", -2.9),
    ]
    .into_iter()
    .collect();
}

fn parse_lexicon(raw: &str) -> HashMap<String, f64> {
    raw.lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let token = fields.next()?.trim();
            let valence = fields.next()?.trim().parse::<f64>().ok()?;
            (!token.is_empty()).then(|| (token.to_string(), valence))
        })
        .collect()
}

/// Python-style `str.isupper`: at least one cased character and no
/// lowercase ones.
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

fn negated(word: &str) -> bool {
    is_any(word, NEGATE) || word.contains("n't")
}

fn is_any(word: &str, options: &[&str]) -> bool {
    options.iter().any(|option| *option == word)
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Tokens of the text with surrounding punctuation removed, unless that
/// would leave two characters or fewer (keeps emoticons such as `:)`).
struct SentiText {
    words: Vec<String>,
    lower: Vec<String>,
    cap_differential: bool,
}

impl SentiText {
    fn new(text: &str) -> Self {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
                if stripped.chars().count() <= 2 {
                    token.to_string()
                } else {
                    stripped.to_string()
                }
            })
            .collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();
        let caps = words.iter().filter(|w| is_upper(w)).count();
        let cap_differential = caps > 0 && caps < words.len();
        Self {
            words,
            lower,
            cap_differential,
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

/// Lexicon-and-rules sentiment engine.
#[derive(Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
}

impl fmt::Debug for LexiconScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconScorer")
            .field("lexicon_size", &self.lexicon.len())
            .finish()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON.clone(),
        }
    }

    /// Loads a `token<TAB>valence[<TAB>...]` lexicon file, such as the
    /// upstream `vader_lexicon.txt`, over the built-in table.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = parse_lexicon(&std::fs::read_to_string(path)?);
        if entries.is_empty() {
            return Err(Error::Config(format!(
                "No lexicon entries found in {}",
                path.display()
            )));
        }
        tracing::info!("📖 Loaded {} lexicon entries from {}", entries.len(), path.display());
        Ok(Self::new().with_entries(entries))
    }

    /// Adds or overrides lexicon entries. Tokens are matched lowercase.
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (token, valence) in entries {
            self.lexicon.insert(token.into().to_lowercase(), valence);
        }
        self
    }

    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let sentitext = SentiText::new(text);
        let mut sentiments = Vec::with_capacity(sentitext.len());

        for (i, lower) in sentitext.lower.iter().enumerate() {
            if BOOSTER_DICT.contains_key(lower.as_str()) {
                sentiments.push(0.0);
                continue;
            }
            if lower == "kind" && sentitext.lower.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&sentitext, i));
        }

        but_check(&sentitext.lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, sentitext: &SentiText, i: usize) -> f64 {
        let lower = &sentitext.lower;
        let item_lower = lower[i].as_str();
        let Some(&base) = self.lexicon.get(item_lower) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another polar word is treated as a negator,
        // not as a negative word of its own.
        if item_lower == "no" && lower.get(i + 1).is_some_and(|next| self.in_lexicon(next)) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && (lower[i - 1] == "or" || lower[i - 1] == "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(&sentitext.words[i]) && sentitext.cap_differential {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i > start_i && !self.in_lexicon(&lower[i - (start_i + 1)]) {
                let mut scalar = scalar_inc_dec(
                    &sentitext.words[i - (start_i + 1)],
                    valence,
                    sentitext.cap_differential,
                );
                if start_i == 1 && scalar != 0.0 {
                    scalar *= 0.95;
                }
                if start_i == 2 && scalar != 0.0 {
                    scalar *= 0.9;
                }
                valence += scalar;
                valence = negation_check(valence, lower, start_i, i);
                if start_i == 2 {
                    valence = special_idioms_check(valence, lower, i);
                }
            }
        }

        least_check(valence, lower, i, |w| self.in_lexicon(w))
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &str {
        "vader"
    }

    fn score(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }

    fn polarity(&self, text: &str) -> Option<PolarityScores> {
        Some(self.polarity_scores(text))
    }
}

fn scalar_inc_dec(word: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(&booster) = BOOSTER_DICT.get(word.to_lowercase().as_str()) else {
        return 0.0;
    };
    let mut scalar = booster;
    if valence < 0.0 {
        scalar *= -1.0;
    }
    if is_upper(word) && cap_differential {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    match start_i {
        0 => {
            if negated(&lower[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if lower[i - 2] == "never" && is_any(&lower[i - 1], &["so", "this"]) {
                return valence * 1.25;
            } else if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                return valence;
            } else if negated(&lower[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if lower[i - 3] == "never"
                && (is_any(&lower[i - 2], &["so", "this"]) || is_any(&lower[i - 1], &["so", "this"]))
            {
                return valence * 1.25;
            } else if lower[i - 3] == "without" && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt") {
                return valence;
            } else if negated(&lower[i - 3]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

fn special_idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let onezero = format!("{} {}", lower[i - 1], lower[i]);
    let twoonezero = format!("{} {} {}", lower[i - 2], lower[i - 1], lower[i]);
    let twoone = format!("{} {}", lower[i - 2], lower[i - 1]);
    let threetwoone = format!("{} {} {}", lower[i - 3], lower[i - 2], lower[i - 1]);
    let threetwo = format!("{} {}", lower[i - 3], lower[i - 2]);

    for seq in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(&special) = SPECIAL_CASES.get(seq.as_str()) {
            valence = special;
            break;
        }
    }

    if lower.len() > i + 1 {
        let zeroone = format!("{} {}", lower[i], lower[i + 1]);
        if let Some(&special) = SPECIAL_CASES.get(zeroone.as_str()) {
            valence = special;
        }
    }
    if lower.len() > i + 2 {
        let zeroonetwo = format!("{} {} {}", lower[i], lower[i + 1], lower[i + 2]);
        if let Some(&special) = SPECIAL_CASES.get(zeroonetwo.as_str()) {
            valence = special;
        }
    }

    for ngram in [&threetwoone, &threetwo, &twoone] {
        if let Some(&booster) = BOOSTER_DICT.get(ngram.as_str()) {
            valence += booster;
        }
    }
    valence
}

fn least_check(valence: f64, lower: &[String], i: usize, in_lexicon: impl Fn(&str) -> bool) -> f64 {
    if i > 1 && !in_lexicon(lower[i - 1].as_str()) && lower[i - 1] == "least" {
        if lower[i - 2] != "at" && lower[i - 2] != "very" {
            return valence * N_SCALAR;
        }
    } else if i > 0 && !in_lexicon(lower[i - 1].as_str()) && lower[i - 1] == "least" {
        return valence * N_SCALAR;
    }
    valence
}

/// Clauses after "but" dominate the ones before it.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *sentiment *= 0.5;
        } else if si > bi {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep_count = text.matches('!').count().min(4) as f64;
    let qm_count = text.matches('?').count();
    let qm_amplifier = match qm_count {
        0 | 1 => 0.0,
        2 | 3 => qm_count as f64 * 0.18,
        _ => 0.96,
    };
    ep_count * 0.292 + qm_amplifier
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        LexiconScorer::new().score(text)
    }

    #[test]
    fn test_lexicon_loaded() {
        let scorer = LexiconScorer::new();
        assert!(scorer.lexicon_size() > 400);
        assert_eq!(scorer.lexicon.get("good"), Some(&1.9));
    }

    #[test]
    fn test_single_word_compound() {
        assert_eq!(compound("good"), 0.4404);
        assert_eq!(compound("the meeting is on Tuesday"), 0.0);
        assert_eq!(compound(""), 0.0);
    }

    #[test]
    fn test_common_news_words() {
        assert_eq!(compound("super"), 0.5994);
        assert_eq!(compound("important"), 0.2023);
        assert!(compound("shares boost") > 0.05);
        assert!(compound("an important step") > 0.05);
        assert!(compound("talks stall amid fears of a crisis") < -0.05);
    }

    #[test]
    fn test_polar_headlines() {
        assert!(compound("excellent, wonderful, amazing news") > 0.8);
        assert!(compound("terrible, awful disaster") < -0.8);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound("this is good") > 0.0);
        assert!(compound("this is not good") < 0.0);
        assert!(compound("this isn't good") < 0.0);
        assert!(compound("this is never good") < 0.0);
    }

    #[test]
    fn test_boosters_and_dampeners() {
        assert!(compound("the plan is very good") > compound("the plan is good"));
        assert!(compound("the plan is slightly good") < compound("the plan is good"));
    }

    #[test]
    fn test_caps_emphasis() {
        assert!(compound("the result is GREAT") > compound("the result is great"));
        // All-caps text carries no differential emphasis.
        assert_eq!(compound("THE RESULT IS GREAT"), compound("the result is great"));
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert!(compound("good!!!") > compound("good"));
        assert_eq!(compound("good!!!!!!"), compound("good!!!!"));
        assert!(compound("bad??") < compound("bad"));
    }

    #[test]
    fn test_but_shifts_weight() {
        assert!(compound("the food is good but the service is terrible") < 0.0);
        assert!(compound("the service is terrible but the food is great") > 0.0);
    }

    #[test]
    fn test_idioms_and_kind_of() {
        assert!(compound("she has a broken heart") < compound("she has a broken arm"));
        assert!(compound("it was kind of good") < compound("it was good"));
    }

    #[test]
    fn test_least() {
        assert!(compound("the least good option") < 0.0);
        assert!(compound("at least good") > 0.0);
    }

    #[test]
    fn test_polarity_proportions() {
        let scores = LexiconScorer::new().polarity_scores("good and bad");
        assert!(scores.pos > 0.0);
        assert!(scores.neg > 0.0);
        assert!(scores.neu > 0.0);
        assert!((scores.pos + scores.neg + scores.neu - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_compound_bounds() {
        let text = "great ".repeat(200);
        let score = compound(&text);
        assert!(score <= 1.0 && score > 0.99);
    }

    #[test]
    fn test_from_file_extends_builtin_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.txt");
        std::fs::write(&path, "bullish\t2.5\t0.5\t[2, 3, 2]\nnot a valid line\ngood\t1.0\n").unwrap();

        let scorer = LexiconScorer::from_file(&path).unwrap();
        assert_eq!(scorer.lexicon.get("bullish"), Some(&2.5));
        assert_eq!(scorer.lexicon.get("good"), Some(&1.0));
        assert_eq!(scorer.lexicon.get("super"), Some(&2.9));
        assert_eq!(scorer.lexicon_size(), LexiconScorer::new().lexicon_size() + 1);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = LexiconScorer::from_file(dir.path().join("missing.txt"));
        assert!(matches!(missing, Err(Error::Io(_))));

        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "# no entries\n").unwrap();
        assert!(matches!(LexiconScorer::from_file(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_custom_entries() {
        let scorer = LexiconScorer::new().with_entries([("Bullish", 2.5)]);
        assert!(scorer.score("analysts are bullish") > 0.5);
    }
}
