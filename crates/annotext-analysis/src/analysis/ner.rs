//! Named entity recognition over web/query text.
//!
//! Pattern-matching extraction for the label set the indexing subsystem
//! consumes: PERSON, ORG, GPE, DATE, TIME, MONEY. Spans carry half-open
//! character offsets into the source text and are emitted left-to-right;
//! overlapping candidates keep the earliest (then longest) span.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use annotext::models::EntitySpan;

use super::tokenize::CharIndex;

// ============================================================================
// Organizations
// ============================================================================

static KNOWN_ORGS: LazyLock<Regex> = LazyLock::new(|| {
    let names = [
        "OpenAI",
        "Google",
        "Microsoft",
        "Apple",
        "Amazon",
        "Meta",
        "IBM",
        "Intel",
        "NASA",
        "FBI",
        "CIA",
        "NSA",
        "EPA",
        "WHO",
        "NATO",
        "UNESCO",
        "Interpol",
        "United Nations",
        "European Union",
        "World Bank",
        "Red Cross",
        "Reuters",
        "Associated Press",
    ];
    let alternation = names.map(regex::escape).join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("org pattern should compile")
});

static ORG_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z&]+\s+)+(?:Inc|Corp|Corporation|Company|Ltd|LLC|Group|Foundation|University|Institute|Agency|Bureau|Department|Committee|Association)\b\.?",
    )
    .expect("org suffix pattern should compile")
});

// ============================================================================
// Geopolitical entities
// ============================================================================

static KNOWN_PLACES: LazyLock<Regex> = LazyLock::new(|| {
    let names = [
        "United States",
        "United Kingdom",
        "France",
        "Germany",
        "Spain",
        "Italy",
        "China",
        "Japan",
        "India",
        "Russia",
        "Canada",
        "Australia",
        "Brazil",
        "Mexico",
        "Paris",
        "London",
        "Berlin",
        "Madrid",
        "Rome",
        "Tokyo",
        "Beijing",
        "Moscow",
        "New York",
        "San Francisco",
        "Los Angeles",
        "Chicago",
        "Boston",
        "Seattle",
        "Washington",
        "California",
        "Texas",
        "Florida",
    ];
    let alternation = names.map(regex::escape).join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("place pattern should compile")
});

// ============================================================================
// Persons
// ============================================================================

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:President|Vice President|Secretary|Director|General|Senator|Governor|Mayor|Judge|Professor|Dr\.|Prof\.|Mr\.|Mrs\.|Ms\.)\s+)([A-Z][a-z]+(?:\s+[A-Z]\.?)?\s+[A-Z][a-z]+)",
    )
    .expect("title pattern should compile")
});

static CAPITALIZED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]{2,}(?:\s+[A-Z]\.?\s+|\s+)[A-Z][a-z]{2,})\b")
        .expect("capitalized name pattern should compile")
});

// Leading title words; "President John" is not itself a name.
static TITLE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "President", "Vice", "Secretary", "Director", "General", "Senator", "Governor", "Mayor",
        "Judge", "Professor", "Dr", "Prof", "Mr", "Mrs", "Ms",
    ]
    .into_iter()
    .collect()
});

// Capitalized pairs that look like names but aren't — reduces false positives.
static NAME_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "United States",
        "United Kingdom",
        "United Nations",
        "European Union",
        "New York",
        "San Francisco",
        "Los Angeles",
        "World Bank",
        "Red Cross",
        "Associated Press",
        "The United",
    ]
    .into_iter()
    .collect()
});

// ============================================================================
// Dates, times, money
// ============================================================================

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let month = "(?:January|February|March|April|May|June|July|August|September|October|November|December)";
    vec![
        // March 5, 2021 / March 5
        Regex::new(&format!(r"\b{month}\s+\d{{1,2}}(?:,\s+\d{{4}})?\b")).unwrap(),
        // 5 March 2021
        Regex::new(&format!(r"\b\d{{1,2}}\s+{month}\s+\d{{4}}\b")).unwrap(),
        // ISO: 2021-03-05
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
        // 3/5/2021
        Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap(),
    ]
});

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}:\d{2}(?::\d{2})?(?:\s*(?:am|pm|AM|PM))?\b")
        .expect("time pattern should compile")
});

static MONEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\d[\d,]*(?:\.\d+)?(?:\s+(?:thousand|million|billion|trillion))?")
        .expect("money pattern should compile")
});

#[derive(Debug)]
struct Candidate {
    start: usize,
    end: usize,
    label: &'static str,
    text: String,
}

/// Extract entity spans from text, left-to-right, offsets in characters.
pub fn extract_entity_spans(text: &str, index: &CharIndex) -> Vec<EntitySpan> {
    let mut candidates = Vec::new();

    collect_matches(&KNOWN_ORGS, text, "ORG", &mut candidates);
    collect_org_suffix(text, &mut candidates);
    collect_matches(&KNOWN_PLACES, text, "GPE", &mut candidates);
    collect_persons(text, &mut candidates);
    for pattern in DATE_PATTERNS.iter() {
        collect_matches(pattern, text, "DATE", &mut candidates);
    }
    collect_matches(&TIME_PATTERN, text, "TIME", &mut candidates);
    collect_matches(&MONEY_PATTERN, text, "MONEY", &mut candidates);

    // Earliest start wins; at equal starts prefer the longest span.
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(a.label.cmp(b.label))
    });

    let mut spans = Vec::new();
    let mut last_end = 0;
    for cand in candidates {
        if cand.start >= last_end {
            last_end = cand.end;
            spans.push(EntitySpan {
                surface_text: cand.text,
                label: cand.label.to_string(),
                start_offset: index.char_at(cand.start),
                end_offset: index.char_at(cand.end),
            });
        }
    }
    spans
}

fn collect_matches(
    pattern: &Regex,
    text: &str,
    label: &'static str,
    candidates: &mut Vec<Candidate>,
) {
    for m in pattern.find_iter(text) {
        candidates.push(Candidate {
            start: m.start(),
            end: m.end(),
            label,
            text: m.as_str().to_string(),
        });
    }
}

// The suffix pattern can pick up a leading determiner ("The Acme Group");
// the determiner is not part of the organization name.
fn collect_org_suffix(text: &str, candidates: &mut Vec<Candidate>) {
    for m in ORG_SUFFIX.find_iter(text) {
        let mut start = m.start();
        let mut surface = m.as_str();
        for det in ["The ", "A ", "An "] {
            if let Some(rest) = surface.strip_prefix(det) {
                start += det.len();
                surface = rest;
                break;
            }
        }
        candidates.push(Candidate {
            start,
            end: m.end(),
            label: "ORG",
            text: surface.to_string(),
        });
    }
}

fn collect_persons(text: &str, candidates: &mut Vec<Candidate>) {
    for cap in TITLE_PATTERN.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            if is_plausible_name(name.as_str()) {
                candidates.push(Candidate {
                    start: name.start(),
                    end: name.end(),
                    label: "PERSON",
                    text: name.as_str().to_string(),
                });
            }
        }
    }

    for cap in CAPITALIZED_NAME.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            let surface = name.as_str().trim();
            if is_plausible_name(surface)
                && !NAME_STOPWORDS.contains(surface)
                && !starts_with_title(surface)
            {
                candidates.push(Candidate {
                    start: name.start(),
                    end: name.end(),
                    label: "PERSON",
                    text: surface.to_string(),
                });
            }
        }
    }
}

fn starts_with_title(name: &str) -> bool {
    name.split_whitespace()
        .next()
        .map(|w| {
            let w = w.trim_end_matches('.');
            TITLE_WORDS.contains(w) || matches!(w, "The" | "A" | "An")
        })
        .unwrap_or(false)
}

fn is_plausible_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 || parts.len() > 4 {
        return false;
    }
    parts.iter().all(|p| {
        let first = p.chars().next().unwrap_or('a');
        first.is_uppercase() && p.len() >= 2
    })
}
