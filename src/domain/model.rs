use crate::domain::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_SCORE: f64 = 50.0;

/// Field values of one person form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonFields {
    pub name: String,
    pub birthdate: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormData {
    pub person1: Option<PersonFields>,
    pub person2: Option<PersonFields>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub birthdate: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "zodiacSign")]
    pub zodiac_sign: ZodiacSign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub person1: PersonInput,
    pub person2: PersonInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Perfect,
}

impl SeverityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            SeverityTier::Perfect
        } else if score >= 70.0 {
            SeverityTier::High
        } else if score >= 40.0 {
            SeverityTier::Medium
        } else {
            SeverityTier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
            SeverityTier::Perfect => "perfect",
        }
    }

    pub fn css_class(self) -> String {
        format!("level-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductRecommendation {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub shop_url: Option<String>,
}

impl ProductRecommendation {
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: text_field(value, "name"),
            description: text_field(value, "description"),
            price: text_or_number_field(value, "price"),
            image_url: text_field(value, "image_url"),
            shop_url: text_field(value, "shop_url"),
        }
    }
}

/// Compatibility payload as returned by the analysis service.
///
/// Every field is optional; empty strings and values of the wrong JSON
/// type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub compatibility_score: Option<f64>,
    pub compatibility_level: Option<String>,
    pub title: Option<String>,
    pub zodiac_summary: Option<String>,
    pub personality_analysis: Option<String>,
    pub differences: Option<String>,
    pub strengths: Option<String>,
    pub life_benefits: Option<String>,
    pub work_benefits: Option<String>,
    pub love_benefits: Option<String>,
    pub advice: Option<String>,
    pub description: Option<String>,
    pub analysis: Option<String>,
    pub product_recommendations: Option<Vec<ProductRecommendation>>,
}

impl CompatibilityResult {
    pub fn from_value(value: &Value) -> Self {
        Self {
            compatibility_score: value
                .get("compatibility_score")
                .and_then(number_like)
                .filter(|score| score.is_finite())
                .map(|score| score.clamp(0.0, 100.0)),
            compatibility_level: text_field(value, "compatibility_level"),
            title: text_field(value, "title"),
            zodiac_summary: text_field(value, "zodiac_summary"),
            personality_analysis: text_field(value, "personality_analysis"),
            differences: text_field(value, "differences"),
            strengths: text_field(value, "strengths"),
            life_benefits: text_field(value, "life_benefits"),
            work_benefits: text_field(value, "work_benefits"),
            love_benefits: text_field(value, "love_benefits"),
            advice: text_field(value, "advice"),
            description: text_field(value, "description"),
            analysis: text_field(value, "analysis"),
            product_recommendations: value
                .get("product_recommendations")
                .and_then(|v| v.as_array())
                .map(|items| items.iter().map(ProductRecommendation::from_value).collect()),
        }
    }

    pub fn score(&self) -> f64 {
        self.compatibility_score.unwrap_or(DEFAULT_SCORE)
    }

    pub fn tier(&self) -> SeverityTier {
        SeverityTier::from_score(self.score())
    }

    pub fn has_life_areas(&self) -> bool {
        self.life_benefits.is_some() || self.work_benefits.is_some() || self.love_benefits.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Horoscope {
    pub description: Option<String>,
    pub compatibility: Option<String>,
    pub mood: Option<String>,
    pub color: Option<String>,
    pub lucky_number: Option<String>,
    pub lucky_time: Option<String>,
    pub current_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn text_or_number_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Number(n) => Some(n.to_string()),
        _ => text_field(value, key),
    }
}

fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse().ok(),
        _ => None,
    }
}
