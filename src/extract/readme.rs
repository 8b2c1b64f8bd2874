use crate::types::repository::ReadmeSignals;
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)!\[.*?\]\(.*?\.(png|jpg|jpeg|gif|webp|svg)\)")
        .expect("image pattern should compile")
});

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(https?://|vercel\.app|netlify\.app|github\.io)")
        .expect("link pattern should compile")
});

pub fn detect(text: &str) -> ReadmeSignals {
    ReadmeSignals {
        has_images: IMAGE_PATTERN.is_match(text),
        has_links: LINK_PATTERN.is_match(text),
    }
}
