//! Content records fetched from the content store
//!
//! Field names follow the camelCase schema produced by
//! [`camelize_keys`](crate::services::normalizer::camelize_keys). Every
//! optional field deserializes to `None` and every list to empty, so a
//! sparse document never fails to load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::de::null_as_default;

// ============================================================================
// Content type discriminator
// ============================================================================

/// Page content type, drives which page layout and item card are used
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    PhysicalProduct,
    ServiceOffer,
    ListItem,
    Place,
    Person,
    /// Any discriminator this build does not know; rendered with base layouts
    Unknown(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PhysicalProduct => "physical_product",
            Self::ServiceOffer => "service_offer",
            Self::ListItem => "list_item",
            Self::Place => "place",
            Self::Person => "person",
            Self::Unknown(raw) => raw,
        }
    }

    /// Physical products and service offers share commerce layouts
    pub fn is_commerce(&self) -> bool {
        matches!(self, Self::PhysicalProduct | Self::ServiceOffer)
    }

    pub fn is_place(&self) -> bool {
        matches!(self, Self::Place)
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Self::Person)
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for ContentType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "physical_product" => Self::PhysicalProduct,
            "service_offer" => Self::ServiceOffer,
            "list_item" => Self::ListItem,
            "place" => Self::Place,
            "person" => Self::Person,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<ContentType> for String {
    fn from(ct: ContentType) -> Self {
        ct.as_str().to_string()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Site config (site-config.json)
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub site_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub site_title: String,
    pub site_description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "null_as_default")]
    pub articles: Vec<ArticleMeta>,
    pub stats: Option<SiteStats>,
}

impl SiteConfig {
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.category_id == category_id)
    }

    /// Find a page by id across all categories (first match wins)
    pub fn find_page(&self, page_id: &str) -> Option<(&Category, &PageMeta)> {
        self.categories
            .iter()
            .find_map(|c| c.page(page_id).map(|p| (c, p)))
    }

    /// Published articles, newest first
    pub fn published_articles(&self) -> Vec<&ArticleMeta> {
        let mut articles: Vec<&ArticleMeta> =
            self.articles.iter().filter(|a| a.is_published()).collect();
        articles.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        articles
    }

    /// Featured published articles ordered by `featured_order`, at most `limit`
    pub fn featured_articles(&self, limit: usize) -> Vec<&ArticleMeta> {
        let mut articles: Vec<&ArticleMeta> = self
            .articles
            .iter()
            .filter(|a| a.featured && a.is_published())
            .collect();
        articles.sort_by_key(|a| a.featured_order);
        articles.truncate(limit);
        articles
    }

    pub fn article(&self, slug: &str) -> Option<&ArticleMeta> {
        self.articles
            .iter()
            .find(|a| a.article_slug == slug && a.is_published())
    }

    /// Sorted unique tags across published articles
    pub fn article_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .articles
            .iter()
            .filter(|a| a.is_published())
            .flat_map(|a| a.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_items_analyzed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_items_featured: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_pages: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_categories: u64,
    pub total_articles: Option<u64>,
    pub total_articles_published: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_title: String,
    pub category_slug: Option<String>,
    pub icon_prompt: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: Vec<PageMeta>,
    pub stats: Option<CategoryStats>,
}

impl Category {
    pub fn page(&self, page_id: &str) -> Option<&PageMeta> {
        self.pages.iter().find(|p| p.page_id == page_id)
    }
}

/// Stats block as stored in site-config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_products_analyzed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_products_featured: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_pages: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: String,
}

/// Page summary listed under a category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub page_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub page_title: String,
    pub page_slug: Option<String>,
    pub items_featured: Option<u64>,
    pub items_analyzed: Option<u64>,
    pub last_updated: Option<String>,
    pub metadata: Option<PageMetadata>,
}

impl PageMeta {
    pub fn analyzed(&self) -> u64 {
        self.items_analyzed.unwrap_or(0)
    }

    pub fn featured(&self) -> u64 {
        self.items_featured.unwrap_or(0)
    }

    pub fn diversity_metric(&self) -> Option<&DiversityMetric> {
        self.metadata.as_ref()?.diversity_metric.as_ref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetadata {
    pub avg_rating: Option<f64>,
    pub total_reviews: Option<u64>,
    pub price_range: Option<PriceRange>,
    pub diversity_metric: Option<DiversityMetric>,
    pub research_date: Option<String>,
}

/// Either a preformatted range ("$20-$80") or numeric bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceRange {
    Display(String),
    Bounds {
        min: Option<f64>,
        max: Option<f64>,
        #[serde(default)]
        currency: Option<String>,
    },
}

/// Coverage breadth of a page, e.g. 12 "brands"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityMetric {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

// ============================================================================
// Site content (site-content.json)
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    #[serde(deserialize_with = "null_as_default")]
    pub schema_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branding: Branding,
    #[serde(deserialize_with = "null_as_default")]
    pub hero: HeroContent,
    #[serde(deserialize_with = "null_as_default")]
    pub trust_indicators: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories_section: SectionTitle,
    #[serde(deserialize_with = "null_as_default")]
    pub about: About,
    #[serde(deserialize_with = "null_as_default")]
    pub footer: Footer,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branding {
    #[serde(deserialize_with = "null_as_default")]
    pub site_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    #[serde(deserialize_with = "null_as_default")]
    pub badge: HeroBadgeContent,
    /// Raw HTML (may contain `<br />`)
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subheadline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta: Link,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBadgeContent {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTitle {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    #[serde(deserialize_with = "null_as_default")]
    pub about_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub copyright: String,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
}

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub rank: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tagline: String,
    pub badge: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    /// Key/value facts in document order
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub description_html: String,
    pub rating: Option<Rating>,
    pub media: Option<Media>,
    #[serde(deserialize_with = "null_as_default")]
    pub cta: Vec<CallToAction>,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type_data: ContentTypeData,
}

impl Item {
    pub fn commerce(&self) -> Option<&CommerceData> {
        self.content_type_data.commerce.as_ref()
    }

    pub fn place(&self) -> Option<&PlaceData> {
        self.content_type_data.place.as_ref()
    }

    pub fn pricing(&self) -> Option<&Pricing> {
        self.commerce()?.source.as_ref()?.pricing.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.place()?.location.as_ref()
    }

    /// Attributes as display strings; non-string values use their JSON form
    pub fn attribute_pairs(&self) -> Vec<(&str, String)> {
        self.attributes
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.as_str(), value)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub scale: f64,
    pub count: Option<u64>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub video: Option<Video>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alt: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub merchant: Option<String>,
}

/// Type-specific item data; only the entry matching the page type is set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentTypeData {
    pub commerce: Option<CommerceData>,
    pub place: Option<PlaceData>,
    pub person: Option<Map<String, Value>>,
    pub list_item: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceData {
    pub source: Option<CommerceSource>,
    #[serde(deserialize_with = "null_as_default")]
    pub pros: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cons: Vec<String>,
    pub review: Option<Review>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommerceSource {
    #[serde(deserialize_with = "null_as_default")]
    pub merchant: String,
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_display: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub pricing: Option<Pricing>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    /// "$299.99", "Free", "$95/year"
    #[serde(deserialize_with = "null_as_default")]
    pub display: String,
    pub value: Option<f64>,
    pub currency: Option<String>,
    /// one_time | monthly | annual | free
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "null_as_default")]
    pub editorial: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verdict: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceData {
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
}

// ============================================================================
// Page content (page-content.json)
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageContent {
    #[serde(deserialize_with = "null_as_default")]
    pub schema_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub page_content_type: ContentType,
    #[serde(deserialize_with = "null_as_default")]
    pub page_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub h1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub introduction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    pub last_updated: Option<String>,
    pub disclosure: Option<String>,
    /// schema.org JSON-LD, emitted as-is
    pub schema: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    pub comparison_table: Option<ComparisonTable>,
    #[serde(deserialize_with = "null_as_default")]
    pub buyer_guide: Vec<BuyerGuideSection>,
    #[serde(deserialize_with = "null_as_default")]
    pub faq: Vec<FaqItem>,
    pub final_recommendation: Option<FinalRecommendation>,
    pub additional_sections: Option<AdditionalSections>,
    pub related_content: Option<RelatedContent>,
    pub analytics: Option<Value>,
    pub compliance: Option<Compliance>,
}

impl PageContent {
    pub fn comparison_enabled(&self) -> bool {
        self.comparison_table.as_ref().is_some_and(|t| t.enabled)
    }

    pub fn location_map(&self) -> Option<&LocationMap> {
        self.additional_sections.as_ref()?.location_map.as_ref()
    }

    pub fn related_pages(&self) -> &[RelatedPage] {
        self.related_content
            .as_ref()
            .map(|r| r.pages.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonTable {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub columns: Vec<ComparisonColumn>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonColumn {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuyerGuideSection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_html: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalRecommendation {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    pub cta: Option<LabeledLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledLink {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalSections {
    pub location_map: Option<LocationMap>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationMap {
    #[serde(deserialize_with = "null_as_default")]
    pub center: String,
    #[serde(deserialize_with = "null_as_default")]
    pub places: Vec<MapPlace>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapPlace {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedContent {
    #[serde(deserialize_with = "null_as_default")]
    pub pages: Vec<RelatedPage>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedPage {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Compliance {
    #[serde(deserialize_with = "null_as_default")]
    pub requires_disclosure: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub regulated_category: bool,
    pub ftc_compliant: Option<bool>,
    pub gdpr_compliant: Option<bool>,
    pub notes: Option<String>,
}

// ============================================================================
// Articles
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub article_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub article_slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub article_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub article_content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_description: String,
    /// ISO date (YYYY-MM-DD or RFC 3339); sorts lexically
    #[serde(deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub featured_order: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_pages: Vec<String>,
}

impl ArticleMeta {
    pub fn is_published(&self) -> bool {
        self.status == "published"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(slug: &str, status: &str, date: &str, tags: &[&str]) -> ArticleMeta {
        ArticleMeta {
            article_id: slug.into(),
            article_slug: slug.into(),
            article_title: slug.to_uppercase(),
            published_date: date.into(),
            status: status.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    // ========== ContentType ==========

    #[test]
    fn test_content_type_known_values() {
        assert_eq!(
            ContentType::from("physical_product".to_string()),
            ContentType::PhysicalProduct
        );
        assert_eq!(ContentType::from("place".to_string()), ContentType::Place);
        assert_eq!(ContentType::from("person".to_string()), ContentType::Person);
    }

    #[test]
    fn test_content_type_unknown_kept_verbatim() {
        let ct: ContentType = serde_json::from_str("\"recipe\"").unwrap();
        assert_eq!(ct, ContentType::Unknown("recipe".into()));
        assert_eq!(ct.as_str(), "recipe");
    }

    #[test]
    fn test_content_type_serializes_as_string() {
        let json = serde_json::to_string(&ContentType::ServiceOffer).unwrap();
        assert_eq!(json, "\"service_offer\"");
    }

    #[test]
    fn test_commerce_types() {
        assert!(ContentType::PhysicalProduct.is_commerce());
        assert!(ContentType::ServiceOffer.is_commerce());
        assert!(!ContentType::Place.is_commerce());
        assert!(!ContentType::ListItem.is_commerce());
    }

    // ========== Sparse documents ==========

    #[test]
    fn test_page_meta_missing_counts_are_zero() {
        let page: PageMeta = serde_json::from_str(r#"{"pageId": "p", "pageTitle": "P"}"#).unwrap();
        assert_eq!(page.analyzed(), 0);
        assert_eq!(page.featured(), 0);
        assert!(page.diversity_metric().is_none());
    }

    #[test]
    fn test_price_range_string_or_bounds() {
        let s: PriceRange = serde_json::from_str("\"$20-$80\"").unwrap();
        assert_eq!(s, PriceRange::Display("$20-$80".into()));

        let b: PriceRange =
            serde_json::from_str(r#"{"min": 19.5, "max": 80, "currency": "USD"}"#).unwrap();
        assert!(matches!(b, PriceRange::Bounds { min: Some(_), max: Some(_), .. }));
    }

    #[test]
    fn test_item_accessors_absent() {
        let item: Item = serde_json::from_str(r#"{"rank": 1, "name": "X"}"#).unwrap();
        assert!(item.pricing().is_none());
        assert!(item.location().is_none());
        assert!(item.cta.is_empty());
    }

    #[test]
    fn test_item_pricing_accessor() {
        let item: Item = serde_json::from_str(
            r#"{"rank": 1, "name": "X", "contentTypeData": {"commerce": {"source": {"merchant": "amazon", "merchantDisplay": "Amazon", "url": "https://a", "pricing": {"display": "$10", "type": "one_time"}}}}}"#,
        )
        .unwrap();
        let pricing = item.pricing().unwrap();
        assert_eq!(pricing.display, "$10");
        assert_eq!(pricing.kind.as_deref(), Some("one_time"));
    }

    #[test]
    fn test_attribute_pairs_keep_order_and_stringify() {
        let item: Item = serde_json::from_str(
            r#"{"attributes": {"weight": "2kg", "ports": 4, "color": "red"}}"#,
        )
        .unwrap();
        let pairs = item.attribute_pairs();
        assert_eq!(
            pairs,
            vec![
                ("weight", "2kg".to_string()),
                ("ports", "4".to_string()),
                ("color", "red".to_string())
            ]
        );
    }

    // ========== SiteConfig lookups ==========

    #[test]
    fn test_published_articles_newest_first() {
        let config = SiteConfig {
            articles: vec![
                article("old", "published", "2025-01-01", &[]),
                article("draft", "draft", "2026-01-01", &[]),
                article("new", "published", "2025-06-01", &[]),
            ],
            ..Default::default()
        };
        let slugs: Vec<&str> = config
            .published_articles()
            .iter()
            .map(|a| a.article_slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["new", "old"]);
    }

    #[test]
    fn test_featured_articles_ordered_and_limited() {
        let mut a = article("a", "published", "2025-01-01", &[]);
        a.featured = true;
        a.featured_order = 3;
        let mut b = article("b", "published", "2025-01-01", &[]);
        b.featured = true;
        b.featured_order = 1;
        let mut c = article("c", "draft", "2025-01-01", &[]);
        c.featured = true;
        let mut d = article("d", "published", "2025-01-01", &[]);
        d.featured = true;
        d.featured_order = 2;
        let config = SiteConfig {
            articles: vec![a, b, c, d],
            ..Default::default()
        };
        let slugs: Vec<&str> = config
            .featured_articles(2)
            .iter()
            .map(|a| a.article_slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["b", "d"]);
    }

    #[test]
    fn test_article_tags_sorted_unique_published_only() {
        let config = SiteConfig {
            articles: vec![
                article("a", "published", "2025-01-01", &["tools", "basics"]),
                article("b", "published", "2025-01-02", &["tools"]),
                article("c", "draft", "2025-01-03", &["secret"]),
            ],
            ..Default::default()
        };
        assert_eq!(config.article_tags(), vec!["basics", "tools"]);
    }

    #[test]
    fn test_draft_article_not_found_by_slug() {
        let config = SiteConfig {
            articles: vec![article("c", "draft", "2025-01-03", &[])],
            ..Default::default()
        };
        assert!(config.article("c").is_none());
    }

    #[test]
    fn test_find_page_across_categories() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"categories": [
                {"categoryId": "a", "pages": [{"pageId": "one"}]},
                {"categoryId": "b", "pages": [{"pageId": "two"}]}
            ]}"#,
        )
        .unwrap();
        let (cat, page) = config.find_page("two").unwrap();
        assert_eq!(cat.category_id, "b");
        assert_eq!(page.page_id, "two");
        assert!(config.find_page("three").is_none());
    }

    // ========== explicit nulls ==========

    #[test]
    fn test_null_lists_and_strings_read_as_empty() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"siteId": "shop", "siteTitle": null, "articles": null,
                "categories": [{"categoryId": "saws", "pages": null}],
                "stats": {"totalItemsAnalyzed": 5, "lastUpdated": null}}"#,
        )
        .unwrap();
        assert_eq!(config.site_title, "");
        assert!(config.articles.is_empty());
        assert!(config.categories[0].pages.is_empty());
        let stats = config.stats.unwrap();
        assert_eq!(stats.total_items_analyzed, 5);
        assert_eq!(stats.last_updated, "");
    }

    #[test]
    fn test_null_item_fields() {
        let item: Item = serde_json::from_str(
            r#"{"rank": 1, "name": "A", "summary": null, "highlights": null,
                "attributes": null, "media": {"images": null},
                "contentTypeData": {"commerce": {"pros": null, "cons": ["Loud"]},
                                    "place": {"location": {"address": null, "coordinates": {"lat": null, "lng": 2.5}}}}}"#,
        )
        .unwrap();
        assert!(item.summary.is_empty());
        assert!(item.attributes.is_empty());
        assert!(item.media.unwrap().images.is_empty());
        let commerce = item.content_type_data.commerce.as_ref().unwrap();
        assert!(commerce.pros.is_empty());
        assert_eq!(commerce.cons, vec!["Loud"]);
        let location = item.content_type_data.place.as_ref().unwrap().location.as_ref().unwrap();
        assert_eq!(location.address, "");
        assert_eq!(location.coordinates, Some(Coordinates { lat: 0.0, lng: 2.5 }));
    }

    #[test]
    fn test_null_page_sections() {
        let page: PageContent = serde_json::from_str(
            r#"{"pageContentType": null, "items": null, "faq": null, "buyerGuide": null,
                "comparisonTable": {"enabled": null}}"#,
        )
        .unwrap();
        assert_eq!(page.page_content_type, ContentType::default());
        assert!(page.items.is_empty());
        assert!(page.faq.is_empty());
        assert!(!page.comparison_enabled());
    }
}
