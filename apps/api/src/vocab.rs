//! Vocabulary tables: versioned lookup data injected into extraction, ATS
//! analysis, and suggestion generation.
//!
//! Lists live here, not inline in scoring logic, so they can be revised (or
//! replaced wholesale at construction) without touching any algorithm.
//! Components receive an `Arc<Vocabulary>`; nothing reads these slices
//! directly.

use std::collections::HashSet;

/// Bumped whenever a built-in list changes, so scores can be traced back to
/// the vocabulary that produced them.
pub const VOCAB_VERSION: &str = "1.2.0";

const TECHNICAL_SKILLS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "rust", "go", "c", "c++", "c#", "ruby", "php",
    "swift", "kotlin", "scala", "r", "matlab", "perl", "sql", "html", "css", "bash",
    // Frameworks and libraries
    "react", "angular", "vue", "svelte", "next.js", "node.js", "express", "django", "flask",
    "fastapi", "spring", "spring boot", "rails", ".net", "laravel", "pytorch", "tensorflow",
    "pandas", "numpy", "scikit-learn", "graphql", "rest",
    // Data stores
    "postgresql", "postgres", "mysql", "sqlite", "mongodb", "redis", "elasticsearch", "cassandra",
    "dynamodb", "kafka", "rabbitmq",
    // Cloud and infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins", "linux",
    "nginx", "serverless", "lambda", "ci/cd", "git", "github actions", "gitlab",
    // Practices
    "microservices", "distributed systems", "machine learning", "deep learning", "data analysis",
    "etl", "devops", "tdd", "agile", "scrum", "oauth", "grpc",
];

const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "collaboration", "problem solving",
    "critical thinking", "time management", "adaptability", "mentoring", "public speaking",
    "negotiation", "conflict resolution", "project management", "stakeholder management",
    "decision making", "creativity", "attention to detail", "empathy",
];

/// Verbs that open a strong, outcome-oriented bullet point.
const ACTION_VERBS: &[&str] = &[
    "achieved", "architected", "automated", "built", "created", "delivered", "designed",
    "developed", "drove", "engineered", "established", "implemented", "improved", "increased",
    "launched", "led", "managed", "optimized", "orchestrated", "owned", "reduced", "redesigned",
    "refactored", "scaled", "shipped", "spearheaded", "streamlined", "transformed",
];

/// Vague openers that hide the author's actual contribution.
const WEAK_VERBS: &[&str] = &[
    "responsible for", "worked on", "helped", "assisted", "participated in", "involved in",
    "tasked with", "duties included",
];

const BUZZWORDS: &[&str] = &[
    "team player", "hard worker", "go-getter", "self-starter", "think outside the box",
    "synergy", "results-driven", "detail-oriented", "dynamic", "proactive", "guru", "ninja",
    "rockstar", "passionate",
];

const INFORMAL_WORDS: &[&str] = &[
    "stuff", "things", "a lot", "lots of", "gonna", "wanna", "kinda", "cool", "awesome",
];

/// Misspellings that ATS keyword matchers silently fail on.
const MISSPELLINGS: &[&str] = &[
    "recieve", "seperate", "occured", "definately", "managment", "experiance", "acheive",
    "sucessful", "responsibilites", "enviroment", "profesional", "comunication",
];

/// Role-agnostic terms ATS scanners weight when screening résumés.
const IMPORTANT_KEYWORDS: &[&str] = &[
    "managed", "led", "developed", "created", "implemented", "designed", "launched", "delivered",
    "improved", "increased", "reduced", "optimized", "automated", "analyzed", "collaborated",
    "mentored", "leadership", "strategy", "architecture", "performance", "scalability",
    "reliability", "security", "testing", "deployment", "monitoring", "migration", "integration",
    "stakeholders", "cross-functional", "roadmap", "metrics", "budget", "revenue", "growth",
    "agile", "scrum", "product", "customer", "data",
];

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
    "two", "way", "who", "did", "its", "let", "she", "too", "use", "that", "with", "have",
    "this", "will", "your", "from", "they", "been", "were", "which", "their", "there", "would",
    "about", "other", "into", "more", "than", "them", "these", "some", "such", "only", "over",
    "also", "when", "where", "what", "while", "each", "both", "between", "during", "under",
];

/// Injectable vocabulary configuration. `Default` loads the built-in lists;
/// a deployment may construct one from external data instead.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub version: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
    pub weak_verbs: Vec<String>,
    pub buzzwords: Vec<String>,
    pub informal_words: Vec<String>,
    pub misspellings: Vec<String>,
    pub important_keywords: Vec<String>,
    stop_words: HashSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            version: VOCAB_VERSION.to_string(),
            technical_skills: owned(TECHNICAL_SKILLS),
            soft_skills: owned(SOFT_SKILLS),
            action_verbs: owned(ACTION_VERBS),
            weak_verbs: owned(WEAK_VERBS),
            buzzwords: owned(BUZZWORDS),
            informal_words: owned(INFORMAL_WORDS),
            misspellings: owned(MISSPELLINGS),
            important_keywords: owned(IMPORTANT_KEYWORDS),
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// `word` must already be lowercased (tokenizers lowercase before lookup).
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_technical(&self, skill: &str) -> bool {
        let lower = skill.trim().to_lowercase();
        self.technical_skills.iter().any(|s| *s == lower)
    }

    pub fn is_soft(&self, skill: &str) -> bool {
        let lower = skill.trim().to_lowercase();
        self.soft_skills.iter().any(|s| *s == lower)
    }

    pub fn is_action_verb(&self, word: &str) -> bool {
        let lower = word.trim().to_lowercase();
        self.action_verbs.iter().any(|v| *v == lower)
    }

    /// Technical vocabulary entries present in `text`, in vocabulary order.
    pub fn technical_terms_in(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.technical_skills
            .iter()
            .filter(|s| term_in_text(&lower, s))
            .cloned()
            .collect()
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Whether `term` occurs in `text_lower` without being embedded in a longer
/// alphanumeric token. Plain substring search would report "go" inside
/// "golang" or "r" inside every word; boundary checks on both sides rule
/// that out while still admitting terms with punctuation like "c++" or
/// "node.js".
pub(crate) fn term_in_text(text_lower: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(term) {
        let start = from + pos;
        let end = start + term.len();
        let open = text_lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let closed = text_lower[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if open && closed {
            return true;
        }
        from = end;
    }
    false
}
