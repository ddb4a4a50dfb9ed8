use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::analysis::RawProductText;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static product selector must parse")
}

/// Title candidates, tried in order until one has text.
static TITLE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "#productTitle",
        "#title",
        ".product-title-word-break",
        ".ppd",
        ".a-size-large.product-title-word-break",
    ]
    .into_iter()
    .map(selector)
    .collect()
});

static PRICE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "#priceblock_ourprice",
        "#priceblock_dealprice",
        "#price_inside_buybox",
    ]
    .into_iter()
    .map(selector)
    .collect()
});

static BULLET_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["#feature-bullets ul li", "#feature-bullets li"]
        .into_iter()
        .map(selector)
        .collect()
});

static TECH_SPEC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    selector("#productDetails_techSpec_section_1, #technicalSpecifications_feature_div")
});

static DETAIL_ROW_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "#productDetails_detailBullets_sections1 tr",
        "#detailBullets_feature_div li",
    ]
    .into_iter()
    .map(selector)
    .collect()
});

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("table"));

/// Collapse runs of whitespace to one space and trim.
pub fn clean_text(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw, " ").trim().to_string()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

/// Parsed product page. Not `Send`; extract the text before crossing an await.
pub struct ProductPage {
    document: Html,
}

impl ProductPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    fn first_text(&self, selector: &Selector) -> String {
        self.document
            .select(selector)
            .next()
            .map(element_text)
            .unwrap_or_default()
    }

    fn joined_text(&self, selector: &Selector, separator: &str) -> String {
        self.document
            .select(selector)
            .map(element_text)
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn title(&self) -> String {
        TITLE_SELECTORS
            .iter()
            .map(|selector| clean_text(&self.first_text(selector)))
            .find(|title| !title.is_empty())
            .unwrap_or_default()
    }

    /// Displayed price from the first price block with text, if any.
    pub fn price(&self) -> Option<String> {
        PRICE_SELECTORS
            .iter()
            .map(|selector| clean_text(&self.first_text(selector)))
            .find(|price| !price.is_empty())
    }

    pub fn bullets(&self) -> String {
        BULLET_SELECTORS
            .iter()
            .map(|selector| self.joined_text(selector, " | "))
            .find(|bullets| !bullets.is_empty())
            .map(|bullets| clean_text(&bullets))
            .unwrap_or_default()
    }

    /// Technical-spec sections first, then the detail-bullet rows, then every table.
    pub fn details(&self) -> String {
        let tech = self.joined_text(&TECH_SPEC_SELECTOR, "\n");
        if !clean_text(&tech).is_empty() {
            return clean_text(&tech);
        }

        let rows = DETAIL_ROW_SELECTORS
            .iter()
            .map(|selector| self.joined_text(selector, " | "))
            .find(|rows| !rows.is_empty())
            .unwrap_or_default();
        if !clean_text(&rows).is_empty() {
            return clean_text(&rows);
        }

        clean_text(&self.joined_text(&TABLE_SELECTOR, "\n"))
    }

    pub fn product_text(&self) -> RawProductText {
        RawProductText {
            title: self.title(),
            price: self.price(),
            bullet_text: self.bullets(),
            detail_text: self.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Intel\n\tCore   i7  "), "Intel Core i7");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn title_falls_back_through_selectors() {
        let html = r#"<html><body>
            <span id="productTitle">   </span>
            <h1 id="title">  Lenovo   ThinkPad E14 </h1>
        </body></html>"#;
        let page = ProductPage::parse(html);
        assert_eq!(page.title(), "Lenovo ThinkPad E14");
    }

    #[test]
    fn price_falls_back_through_price_blocks() {
        let html = r#"<div>
            <span id="priceblock_ourprice">  </span>
            <span id="priceblock_dealprice"> ₹ 54,990 </span>
            <span id="price_inside_buybox">₹ 59,990</span>
        </div>"#;
        assert_eq!(
            ProductPage::parse(html).price().as_deref(),
            Some("₹ 54,990")
        );

        let buybox = r#"<div id="price_inside_buybox">$899.99</div>"#;
        assert_eq!(
            ProductPage::parse(buybox).price().as_deref(),
            Some("$899.99")
        );
    }

    #[test]
    fn missing_price_is_none() {
        let html = r#"<span id="productTitle">Acer Aspire 5 Laptop</span>"#;
        assert_eq!(ProductPage::parse(html).price(), None);
    }

    #[test]
    fn bullets_are_joined_with_pipes() {
        let html = r#"<div id="feature-bullets"><ul>
            <li>16GB RAM</li>
            <li>512GB SSD</li>
        </ul></div>"#;
        let page = ProductPage::parse(html);
        assert_eq!(page.bullets(), "16GB RAM | 512GB SSD");
    }

    #[test]
    fn details_prefer_tech_spec_section() {
        let html = r#"
            <table id="productDetails_techSpec_section_1"><tr><th>RAM</th><td>16 GB</td></tr></table>
            <div id="detailBullets_feature_div"><ul><li>ASIN: B0TEST</li></ul></div>
        "#;
        let page = ProductPage::parse(html);
        assert_eq!(page.details(), "RAM 16 GB");
    }

    #[test]
    fn details_fall_back_to_detail_bullets_then_tables() {
        let bullets = r#"<div id="detailBullets_feature_div"><ul>
            <li>Weight: 1.4 kg</li><li>Battery: 8 hours</li></ul></div>"#;
        assert_eq!(
            ProductPage::parse(bullets).details(),
            "Weight: 1.4 kg | Battery: 8 hours"
        );

        let tables = r#"<table><tr><td>Screen</td><td>1920x1080</td></tr></table>"#;
        assert_eq!(ProductPage::parse(tables).details(), "Screen 1920x1080");
    }

    #[test]
    fn empty_page_yields_empty_fields() {
        let text = ProductPage::parse("<html></html>").product_text();
        assert_eq!(text, RawProductText::default());
    }
}
