//! Knowledge-base citation tokens such as `【4:0†Menu.pdf】`.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

static CITATION: OnceLock<Regex> = OnceLock::new();
static DOCUMENT_CITATION: OnceLock<Regex> = OnceLock::new();

fn citation_re() -> &'static Regex {
    CITATION.get_or_init(|| Regex::new(r"【\d+:\d+†([^】]+)】").expect("citation pattern is valid"))
}

fn document_citation_re() -> &'static Regex {
    DOCUMENT_CITATION.get_or_init(|| {
        Regex::new(r"(?i)【\d+:\d+†[^】]+\.(?:docx|pdf|txt|doc)】")
            .expect("document citation pattern is valid")
    })
}

/// Remove matches until none remain. A single pass can splice a new token together
/// out of the text around a removed one.
fn remove_all(re: &Regex, text: &str) -> String {
    let mut out = text.to_string();
    loop {
        match re.replace_all(&out, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => out = next,
        }
    }
    out.trim().to_string()
}

/// Remove every citation token, then trim surrounding whitespace.
pub fn strip_citations(text: &str) -> String {
    remove_all(citation_re(), text)
}

/// Like [`strip_citations`], but only for tokens naming a .docx, .pdf, .txt or .doc file.
pub fn strip_citations_strict(text: &str) -> String {
    remove_all(document_citation_re(), text)
}

/// Which citation tokens are removed from replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CitationFilter {
    /// Every `【n:m†name】` token.
    #[default]
    All,
    /// Only tokens naming a document file.
    Documents,
}

impl CitationFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "documents" | "strict" => Some(Self::Documents),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Documents => "documents",
        }
    }

    pub fn strip(self, text: &str) -> String {
        match self {
            Self::All => strip_citations(text),
            Self::Documents => strip_citations_strict(text),
        }
    }
}

/// Source names referenced by citation tokens, in order of appearance.
pub fn extract_citations(text: &str) -> Vec<String> {
    citation_re()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
