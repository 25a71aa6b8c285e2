use rand::Rng;
use regex::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

lazy_static::lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
    static ref NOT_SLUG: Regex = Regex::new(r"[^a-z0-9-]").expect("valid regex");
}

/// `"My Cool App!"` -> `"my-cool-app"`
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    NOT_SLUG.replace_all(&hyphenated, "").into_owned()
}

pub fn deployment_url(project_name: &str, suffix: &str, domain: &str) -> String {
    format!("https://{}-{}.{}", slugify(project_name), suffix, domain)
}

/// Source of the random part of a deployment host name.
pub trait SuffixSource: Send + Sync {
    fn next_suffix(&self) -> String;
}

/// Six lowercase alphanumeric characters from the thread rng.
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SUFFIX_LEN)
            .map(|_| char::from(SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())]))
            .collect()
    }
}

/// Hands out the given suffixes in order, cycling when exhausted.
pub struct FixedSuffix {
    suffixes: Vec<String>,
    next: AtomicUsize,
}

impl FixedSuffix {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        Self {
            suffixes,
            next: AtomicUsize::new(0),
        }
    }
}

impl SuffixSource for FixedSuffix {
    fn next_suffix(&self) -> String {
        if self.suffixes.is_empty() {
            return String::new();
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.suffixes.len();
        self.suffixes[index].clone()
    }
}
