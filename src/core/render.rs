//! Compatibility report rendering.
//!
//! The service response is resolved to a [`CompatibilityResult`], turned
//! into a list of blocks and product cards, and rendered through askama
//! templates, which escape every text field.

use crate::domain::model::{CompatibilityResult, ProductRecommendation};
use crate::utils::error::{Result, ZodiacError};
use askama::Template;
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Phân tích tương thích";
pub const PENDING_TEXT: &str = "Đang phân tích...";
pub const DEFAULT_PRODUCT_NAME: &str = "Sản phẩm gợi ý";
pub const PAGE_TITLE: &str = "Kết quả phân tích cung hoàng đạo";

const FALLBACK_HEADING: &str = "👥 Phân tích chi tiết";

struct CannedProduct {
    name: &'static str,
    description: &'static str,
    image_url: &'static str,
}

const CANNED_PRODUCTS: [CannedProduct; 4] = [
    CannedProduct {
        name: "Nhẫn đôi cung hoàng đạo",
        description: "Nhẫn đôi thiết kế theo cung hoàng đạo của hai bạn",
        image_url: "https://via.placeholder.com/300x200/FFB6C1/FFFFFF?text=Nhẫn+Đôi",
    },
    CannedProduct {
        name: "Vòng tay may mắn",
        description: "Vòng tay đá quý phù hợp với cung hoàng đạo",
        image_url: "https://via.placeholder.com/300x200/87CEEB/FFFFFF?text=Vòng+Tay",
    },
    CannedProduct {
        name: "Dây chuyền cặp đôi",
        description: "Dây chuyền symbol cung hoàng đạo của hai bạn",
        image_url: "https://via.placeholder.com/300x200/F0E68C/FFFFFF?text=Dây+Chuyền",
    },
    CannedProduct {
        name: "Tranh canvas cung hoàng đạo",
        description: "Tranh nghệ thuật về sự kết hợp của hai cung",
        image_url: "https://via.placeholder.com/300x200/DDA0DD/FFFFFF?text=Tranh+Canvas",
    },
];

pub enum Block<'a> {
    Summary(&'a str),
    Section(&'static str, &'a str),
    LifeAreas(Vec<LifeArea<'a>>),
}

pub struct LifeArea<'a> {
    pub heading: &'static str,
    pub body: &'a str,
}

pub struct ProductCard<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub link: &'a str,
    pub new_tab: bool,
}

impl<'a> ProductCard<'a> {
    fn from_recommendation(product: &'a ProductRecommendation) -> Self {
        Self {
            name: product.name.as_deref().unwrap_or(DEFAULT_PRODUCT_NAME),
            description: product.description.as_deref().unwrap_or(""),
            price: product.price.as_deref(),
            image_url: product.image_url.as_deref(),
            link: product.shop_url.as_deref().unwrap_or("#"),
            new_tab: true,
        }
    }

    fn canned(product: &'static CannedProduct) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: None,
            image_url: Some(product.image_url),
            link: "#",
            new_tab: false,
        }
    }
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate<'a> {
    pub level_class: String,
    pub score: String,
    pub title: &'a str,
    pub blocks: Vec<Block<'a>>,
    pub products: Vec<ProductCard<'a>>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    content: &'a str,
}

/// Picks the compatibility payload out of a decoded response.
///
/// Preference: `compatibility_analysis`, then `analysis`, then the response
/// itself. Only a non-object response has no payload.
pub fn resolve_payload(response: &Value) -> Result<CompatibilityResult> {
    let nested = ["compatibility_analysis", "analysis"]
        .iter()
        .filter_map(|key| response.get(*key))
        .find(|candidate| candidate.is_object());
    if let Some(payload) = nested {
        return Ok(CompatibilityResult::from_value(payload));
    }

    if !response.is_object() {
        return Err(ZodiacError::MissingPayload);
    }
    Ok(CompatibilityResult::from_value(response))
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

fn build_blocks(result: &CompatibilityResult) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();

    if let Some(summary) = result.zodiac_summary.as_deref() {
        blocks.push(Block::Summary(summary));
    }

    let sections = [
        ("🌟 Tính cách và cung hoàng đạo của 2 người", &result.personality_analysis),
        ("⚖️ Điểm khác biệt của 2 người", &result.differences),
        ("💪 Điểm mạnh khi kết nối", &result.strengths),
    ];
    for (heading, body) in sections {
        if let Some(body) = body.as_deref() {
            blocks.push(Block::Section(heading, body));
        }
    }

    if result.has_life_areas() {
        let areas = [
            ("🏠 Đời sống", &result.life_benefits),
            ("💼 Công việc", &result.work_benefits),
            ("💕 Tình cảm", &result.love_benefits),
        ]
        .into_iter()
        .filter_map(|(heading, body)| body.as_deref().map(|body| LifeArea { heading, body }))
        .collect();
        blocks.push(Block::LifeAreas(areas));
    }

    if let Some(advice) = result.advice.as_deref() {
        blocks.push(Block::Section("💡 Lời khuyên", advice));
    }

    if blocks.is_empty() {
        let text = result
            .personality_analysis
            .as_deref()
            .or(result.description.as_deref())
            .or(result.analysis.as_deref())
            .unwrap_or(PENDING_TEXT);
        blocks.push(Block::Section(FALLBACK_HEADING, text));
    }

    blocks
}

fn build_products(result: &CompatibilityResult) -> Vec<ProductCard<'_>> {
    match &result.product_recommendations {
        Some(products) => products.iter().map(ProductCard::from_recommendation).collect(),
        None => CANNED_PRODUCTS.iter().map(ProductCard::canned).collect(),
    }
}

pub fn build_report(result: &CompatibilityResult) -> ReportTemplate<'_> {
    let score = result.score();
    ReportTemplate {
        level_class: result.tier().css_class(),
        score: format_score(score),
        title: result
            .compatibility_level
            .as_deref()
            .or(result.title.as_deref())
            .unwrap_or(DEFAULT_TITLE),
        blocks: build_blocks(result),
        products: build_products(result),
    }
}

/// Renders the results fragment for the analysis content area.
pub fn render_report(result: &CompatibilityResult) -> Result<String> {
    let html = build_report(result).render()?;
    tracing::debug!("Rendered report ({} bytes)", html.len());
    Ok(html)
}

/// Wraps a rendered fragment in a standalone HTML document.
pub fn render_page(fragment: &str) -> Result<String> {
    Ok(PageTemplate {
        title: PAGE_TITLE,
        content: fragment,
    }
    .render()?)
}
