//! Parsed article page.

use scraper::{ElementRef, Html, Node};

use super::rules::Locator;

/// A parsed HTML page that can be searched for article bodies.
///
/// Lookups return the first match in document order. The page is never mutated:
/// stripping happens while text is read, so the same document can be queried again
/// by a later locator stage.
pub struct ArticleDocument {
    html: Html,
}

impl ArticleDocument {
    /// Parses a full HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    /// Trimmed text of the first `<title>` element, or empty.
    pub fn title(&self) -> String {
        self.find_by_tag("title")
            .map(|t| t.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// First element satisfying `locator`.
    pub fn locate(&self, locator: &Locator) -> Option<ElementRef<'_>> {
        self.elements().find(|el| locator.matches(el.value()))
    }

    /// First element with this id.
    pub fn find_by_id(&self, id: &'static str) -> Option<ElementRef<'_>> {
        self.locate(&Locator::Id(id))
    }

    /// First element carrying this class token.
    pub fn find_by_class(&self, class: &'static str) -> Option<ElementRef<'_>> {
        self.locate(&Locator::Class(class))
    }

    /// First element with this tag name.
    pub fn find_by_tag(&self, tag: &'static str) -> Option<ElementRef<'_>> {
        self.locate(&Locator::Tag(tag))
    }

    /// First element with this tag name and class token.
    pub fn find_by_tag_class(
        &self,
        tag: &'static str,
        class: &'static str,
    ) -> Option<ElementRef<'_>> {
        self.locate(&Locator::TagClass(tag, class))
    }

    /// Trimmed, non-empty text fragments of `el` in document order, with descendants
    /// named in `strip` left out. `el` itself is never stripped, even when its own tag
    /// is listed.
    pub fn fragments<'a>(el: ElementRef<'a>, strip: &[&str]) -> Vec<&'a str> {
        let mut parts = Vec::new();
        collect_text(el, strip, &mut parts);
        parts
    }

    /// [`Self::fragments`] joined with a single space.
    pub fn text_of(el: ElementRef<'_>, strip: &[&str]) -> String {
        Self::fragments(el, strip).join(" ")
    }
}

fn collect_text<'a>(el: ElementRef<'a>, strip: &[&str], out: &mut Vec<&'a str>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed);
                }
            }
            Node::Element(e) if !strip.contains(&e.name()) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, strip, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::BOILERPLATE_TAGS;

    const PAGE: &str = r#"<html><head><title>  헤드라인 | 신문  </title>
        <style>.x { color: red }</style></head>
        <body>
          <div id="wrap" class="layout main">
            <article class="story">
              <p>첫 문단.</p>
              <script>var tracker = 1;</script>
              <p>  둘째   문단. </p>
              <ins class="ad">광고</ins>
              <div class="box"><span>상자</span></div>
            </article>
          </div>
        </body></html>"#;

    #[test]
    fn title_is_trimmed() {
        assert_eq!(ArticleDocument::parse(PAGE).title(), "헤드라인 | 신문");
        assert_eq!(ArticleDocument::parse("<p>no title</p>").title(), "");
    }

    #[test]
    fn finders_return_first_in_document_order() {
        let doc = ArticleDocument::parse(PAGE);
        assert_eq!(doc.find_by_id("wrap").unwrap().value().name(), "div");
        assert_eq!(doc.find_by_class("main").unwrap().value().id(), Some("wrap"));
        assert_eq!(doc.find_by_tag("article").unwrap().value().name(), "article");
        assert!(doc.find_by_tag_class("div", "story").is_none());
        assert!(doc.find_by_tag_class("article", "story").is_some());
        assert!(doc.find_by_id("missing").is_none());
        assert_eq!(
            doc.find_by_tag_class("article", "story").map(|e| e.id()),
            doc.locate(&Locator::TagClass("article", "story")).map(|e| e.id())
        );
    }

    #[test]
    fn text_skips_stripped_tags_and_normalizes_fragments() {
        let doc = ArticleDocument::parse(PAGE);
        let article = doc.locate(&Locator::Tag("article")).unwrap();
        let text = ArticleDocument::text_of(article, BOILERPLATE_TAGS);
        assert_eq!(text, "첫 문단. 둘째   문단. 상자");
        assert!(!text.contains("tracker"));
        assert!(!text.contains("광고"));
    }

    #[test]
    fn stripping_div_keeps_the_located_div() {
        let doc = ArticleDocument::parse(
            r#"<div id="articleBody">본문<div class="related">관련기사</div>끝</div>"#,
        );
        let body = doc.find_by_id("articleBody").unwrap();
        assert_eq!(ArticleDocument::text_of(body, &["div"]), "본문 끝");
    }

    #[test]
    fn fragments_are_trimmed_and_non_empty() {
        let doc = ArticleDocument::parse("<article><p> 가 </p>\n<p></p><p>나다</p></article>");
        let article = doc.find_by_tag("article").unwrap();
        assert_eq!(ArticleDocument::fragments(article, BOILERPLATE_TAGS), ["가", "나다"]);
        assert_eq!(ArticleDocument::text_of(article, BOILERPLATE_TAGS), "가 나다");
    }

    #[test]
    fn stripping_is_repeatable() {
        let doc = ArticleDocument::parse(PAGE);
        let article = doc.locate(&Locator::Tag("article")).unwrap();
        let once = ArticleDocument::text_of(article, BOILERPLATE_TAGS);
        let twice = ArticleDocument::text_of(article, BOILERPLATE_TAGS);
        assert_eq!(once, twice);
    }
}
