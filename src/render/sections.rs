//! Page sections rendered around the item list

use askama::Template;

use super::items::maps_url;
use super::LinkView;
use crate::services::aggregator::format_number;
use crate::types::{BuyerGuideSection, FaqItem, FinalRecommendation, Item, LocationMap, RelatedPage};

/// Side-by-side comparison of all items on a commerce page
#[derive(Template)]
#[template(path = "sections/comparison.html")]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

struct ComparisonRow {
    rank: u32,
    name: String,
    badge: String,
    best_for: String,
    price: String,
    has_rating: bool,
    rating: f64,
    rating_suffix: String,
    cta: Vec<LinkView>,
}

impl ComparisonTable {
    pub fn new(items: &[Item]) -> Self {
        let rows = items
            .iter()
            .map(|item| {
                let rating = item.rating.as_ref();
                let rating_suffix = match rating {
                    Some(r) if r.scale > 0.0 => format!("/ {}", r.scale),
                    Some(r) => r
                        .count
                        .filter(|c| *c > 0)
                        .map(|c| format!("({})", format_number(c)))
                        .unwrap_or_default(),
                    None => String::new(),
                };
                ComparisonRow {
                    rank: item.rank,
                    name: item.name.clone(),
                    badge: item.badge.clone().unwrap_or_default(),
                    best_for: item.tagline.clone(),
                    price: item
                        .pricing()
                        .map(|p| p.display.clone())
                        .filter(|d| !d.is_empty())
                        .unwrap_or_else(|| "-".to_string()),
                    has_rating: rating.is_some(),
                    rating: rating.map(|r| r.value).unwrap_or_default(),
                    rating_suffix,
                    cta: item
                        .cta
                        .iter()
                        .map(|c| LinkView {
                            url: c.url.clone(),
                            text: c.text.clone(),
                        })
                        .collect(),
                }
            })
            .collect();
        Self { rows }
    }
}

/// Renders nothing without questions
#[derive(Template)]
#[template(path = "sections/faq.html")]
pub struct Faq<'a> {
    pub items: &'a [FaqItem],
}

#[derive(Template)]
#[template(path = "sections/buyer_guide.html")]
pub struct BuyerGuide<'a> {
    pub sections: &'a [BuyerGuideSection],
}

#[derive(Template)]
#[template(path = "sections/final_verdict.html")]
pub struct FinalVerdict<'a> {
    text: &'a str,
    has_cta: bool,
    cta_url: &'a str,
    cta_label: &'a str,
}

impl<'a> FinalVerdict<'a> {
    pub fn new(recommendation: &'a FinalRecommendation) -> Self {
        let cta = recommendation.cta.as_ref();
        Self {
            text: &recommendation.text,
            has_cta: cta.is_some(),
            cta_url: cta.map(|c| c.url.as_str()).unwrap_or_default(),
            cta_label: cta.map(|c| c.label.as_str()).unwrap_or_default(),
        }
    }
}

/// Static list of mapped places with outbound map links
#[derive(Template)]
#[template(path = "sections/place_map.html")]
pub struct PlaceMap<'a> {
    center: &'a str,
    lat: String,
    lng: String,
    places: Vec<MapEntry<'a>>,
}

struct MapEntry<'a> {
    name: &'a str,
    address: &'a str,
    map_url: String,
}

impl<'a> PlaceMap<'a> {
    /// Places at (0, 0) have no usable coordinates and are dropped
    pub fn new(map: &'a LocationMap) -> Self {
        let valid: Vec<_> = map
            .places
            .iter()
            .filter(|p| p.lat != 0.0 && p.lng != 0.0)
            .collect();

        let (lat, lng) = if valid.is_empty() {
            (String::new(), String::new())
        } else {
            let count = valid.len() as f64;
            let lat = valid.iter().map(|p| p.lat).sum::<f64>() / count;
            let lng = valid.iter().map(|p| p.lng).sum::<f64>() / count;
            (lat.to_string(), lng.to_string())
        };

        Self {
            center: &map.center,
            lat,
            lng,
            places: valid
                .into_iter()
                .map(|p| MapEntry {
                    name: &p.name,
                    address: p.address.as_deref().unwrap_or_default(),
                    map_url: maps_url(p.lat, p.lng),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "sections/related.html")]
pub struct RelatedArticles<'a> {
    pub pages: &'a [RelatedPage],
}
