//! Locator tables: where article bodies live on known publishers and in generic layouts.

use scraper::node::Element;

/// Tags removed from a located body before its text is read.
pub const BOILERPLATE_TAGS: &[&str] = &["script", "style", "iframe", "ins"];

/// nspna wraps ads and related-article boxes in nested divs.
const NSPNA_STRIP: &[&str] = &["script", "style", "iframe", "ins", "div", "class"];

/// How to find one candidate element in a parsed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Any element with this id.
    Id(&'static str),
    /// Any element carrying this class token.
    Class(&'static str),
    /// First element with this tag name.
    Tag(&'static str),
    /// Element with this tag and id.
    TagId(&'static str, &'static str),
    /// Element with this tag and class token.
    TagClass(&'static str, &'static str),
    /// Element with this tag and id whose class tokens contain `fragment`.
    TagIdClassFragment {
        /// Tag name
        tag: &'static str,
        /// Exact id
        id: &'static str,
        /// Substring searched in each class token
        fragment: &'static str,
    },
    /// Element with this tag where some class token contains any of the fragments.
    TagClassPattern(&'static str, &'static [&'static str]),
}

impl Locator {
    /// True if `el` satisfies this locator.
    pub fn matches(&self, el: &Element) -> bool {
        match *self {
            Self::Id(id) => el.id() == Some(id),
            Self::Class(class) => el.classes().any(|c| c == class),
            Self::Tag(tag) => el.name() == tag,
            Self::TagId(tag, id) => el.name() == tag && el.id() == Some(id),
            Self::TagClass(tag, class) => el.name() == tag && el.classes().any(|c| c == class),
            Self::TagIdClassFragment { tag, id, fragment } => {
                el.name() == tag && el.id() == Some(id) && el.classes().any(|c| c.contains(fragment))
            }
            Self::TagClassPattern(tag, fragments) => {
                el.name() == tag
                    && el
                        .classes()
                        .any(|c| fragments.iter().any(|f| c.contains(f)))
            }
        }
    }
}

/// Extraction rule for one publisher.
#[derive(Debug)]
pub struct SiteRule {
    /// Short publisher name used in logs.
    pub name: &'static str,
    /// Substring matched against the URL host.
    pub host_fragment: &'static str,
    /// Candidates tried in order; the first that locates an element wins.
    pub locators: &'static [Locator],
    /// Descendant tags removed before reading text.
    pub strip: &'static [&'static str],
}

/// Known publishers, checked in order against the URL host.
pub static SITE_RULES: &[SiteRule] = &[
    SiteRule {
        name: "naver",
        host_fragment: "news.naver.com",
        locators: &[
            Locator::TagId("div", "newsct_article"),
            // older Naver layout; the id is misspelled on the site itself
            Locator::TagId("div", "articeBody"),
        ],
        strip: BOILERPLATE_TAGS,
    },
    SiteRule {
        name: "nspna",
        host_fragment: "nspna.com",
        locators: &[
            Locator::TagId("div", "articleBody"),
            Locator::TagClass("div", "article-body"),
            Locator::TagClass("div", "article-content"),
            Locator::Tag("article"),
        ],
        strip: NSPNA_STRIP,
    },
    SiteRule {
        name: "yonhap",
        host_fragment: "yna.co.kr",
        locators: &[Locator::TagClass("article", "story-news")],
        strip: BOILERPLATE_TAGS,
    },
    SiteRule {
        name: "hankyung",
        host_fragment: "hankyung.com",
        locators: &[Locator::TagId("div", "articletxt")],
        strip: BOILERPLATE_TAGS,
    },
];

/// Used when no publisher rule matched or its locators found nothing.
pub static GENERIC_LOCATORS: &[Locator] = &[
    Locator::Tag("article"),
    Locator::TagClassPattern("div", &["article", "content", "body"]),
];

/// Last-resort cascade; the first candidate with non-empty text wins.
pub static SECONDARY_LOCATORS: &[Locator] = &[
    Locator::TagIdClassFragment {
        tag: "div",
        id: "articleBody",
        fragment: "view_con",
    },
    Locator::Id("articleBody"),
    Locator::Class("article-body"),
    Locator::Class("article-content"),
    Locator::Class("view_con"),
    Locator::Id("news_content"),
    Locator::Id("content"),
    Locator::Id("textBody"),
    Locator::Id("article_content"),
    Locator::Id("article"),
    Locator::Class("article"),
    Locator::Id("article-view-content-div"),
    Locator::Tag("article"),
    Locator::TagClass("section", "article"),
];

/// Rule whose host fragment occurs in `host`, if any.
pub fn rule_for_host(host: &str) -> Option<&'static SiteRule> {
    let host = host.to_ascii_lowercase();
    SITE_RULES.iter().find(|r| host.contains(r.host_fragment))
}
