//! Item cards and the content-type → card registry

use askama::Template;

use super::{LinkView, Pair};
use crate::services::aggregator::format_number;
use crate::types::{ContentType, Item, Result};

/// Renders one ranked item on a page
pub trait ItemCardRenderer: Send + Sync {
    /// Card name, emitted as the card's `data-card` attribute (e.g., "commerce")
    fn name(&self) -> &'static str;

    fn render(&self, item: &Item) -> Result<String>;
}

/// Pick the card for a page content type
pub fn item_card(content_type: &ContentType) -> &'static dyn ItemCardRenderer {
    match content_type {
        ContentType::PhysicalProduct | ContentType::ServiceOffer => &CommerceCard,
        ContentType::Place => &PlaceCard,
        ContentType::Person => &PersonCard,
        ContentType::ListItem => &ListCard,
        ContentType::Unknown(_) => &BaseCard,
    }
}

// ============================================================================
// Shared card fields
// ============================================================================

/// Fields of `cards/base.html`. Empty strings are not rendered.
struct CardView<'a> {
    kind: &'static str,
    accent: &'static str,
    rank: u32,
    badge: &'a str,
    name: &'a str,
    tagline: &'a str,
    has_image: bool,
    image_url: &'a str,
    image_alt: &'a str,
    caption: &'a str,
    summary: &'a str,
    has_rating: bool,
    rating_value: f64,
    rating_scale: String,
    rating_count: String,
    rating_source: &'a str,
    highlights: &'a [String],
    attributes_label: &'static str,
    /// Left empty by cards that show attributes their own way
    attributes: Vec<Pair>,
    description_html: &'a str,
    has_cta: bool,
    cta: LinkView,
    more_cta: Vec<LinkView>,
}

impl<'a> CardView<'a> {
    fn new(item: &'a Item, kind: &'static str, accent: &'static str) -> Self {
        let image = item.media.as_ref().and_then(|m| m.images.first());
        let rating = item.rating.as_ref();
        let (cta, more_cta) = match item.cta.split_first() {
            Some((primary, rest)) => (
                Some(LinkView {
                    url: primary.url.clone(),
                    text: primary.text.clone(),
                }),
                rest.iter()
                    .map(|cta| LinkView {
                        url: cta.url.clone(),
                        text: match cta.merchant.as_deref().filter(|m| !m.is_empty()) {
                            Some(merchant) => format!("View on {}", merchant),
                            None => cta.text.clone(),
                        },
                    })
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Self {
            kind,
            accent,
            rank: item.rank,
            badge: item.badge.as_deref().unwrap_or_default(),
            name: &item.name,
            tagline: &item.tagline,
            has_image: image.is_some(),
            image_url: image.map(|i| i.url.as_str()).unwrap_or_default(),
            image_alt: image
                .map(|i| i.alt.as_str())
                .filter(|alt| !alt.is_empty())
                .unwrap_or(&item.name),
            caption: image.and_then(|i| i.caption.as_deref()).unwrap_or_default(),
            summary: &item.summary,
            has_rating: rating.is_some(),
            rating_value: rating.map(|r| r.value).unwrap_or_default(),
            rating_scale: rating
                .filter(|r| r.scale > 0.0)
                .map(|r| r.scale.to_string())
                .unwrap_or_default(),
            rating_count: rating
                .and_then(|r| r.count)
                .filter(|c| *c > 0)
                .map(format_number)
                .unwrap_or_default(),
            rating_source: rating.and_then(|r| r.source.as_deref()).unwrap_or_default(),
            highlights: &item.highlights,
            attributes_label: "Details",
            attributes: attribute_pairs(item),
            description_html: &item.description_html,
            has_cta: cta.is_some(),
            cta: cta.unwrap_or_default(),
            more_cta,
        }
    }

    fn attributes_label(mut self, label: &'static str) -> Self {
        self.attributes_label = label;
        self
    }

    fn without_attributes(mut self) -> Self {
        self.attributes.clear();
        self
    }
}

fn attribute_pairs(item: &Item) -> Vec<Pair> {
    item.attribute_pairs()
        .into_iter()
        .map(|(key, value)| Pair {
            label: key.to_string(),
            value,
        })
        .collect()
}

pub(crate) fn maps_url(lat: f64, lng: f64) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        lat, lng
    )
}

// ============================================================================
// Cards
// ============================================================================

#[derive(Template)]
#[template(path = "cards/base.html")]
struct BaseCardTemplate<'a> {
    card: CardView<'a>,
}

pub struct BaseCard;

impl ItemCardRenderer for BaseCard {
    fn name(&self) -> &'static str {
        "base"
    }

    fn render(&self, item: &Item) -> Result<String> {
        let card = CardView::new(item, self.name(), "blue");
        Ok(BaseCardTemplate { card }.render()?)
    }
}

pub struct ListCard;

impl ItemCardRenderer for ListCard {
    fn name(&self) -> &'static str {
        "list"
    }

    fn render(&self, item: &Item) -> Result<String> {
        let card = CardView::new(item, self.name(), "gray");
        Ok(BaseCardTemplate { card }.render()?)
    }
}

#[derive(Template)]
#[template(path = "cards/commerce.html")]
struct CommerceCardTemplate<'a> {
    card: CardView<'a>,
    has_pricing: bool,
    price: &'a str,
    price_notes: &'a str,
    price_type: String,
    pros: &'a [String],
    cons: &'a [String],
    has_review: bool,
    editorial: &'a str,
    verdict: &'a str,
}

pub struct CommerceCard;

impl ItemCardRenderer for CommerceCard {
    fn name(&self) -> &'static str {
        "commerce"
    }

    fn render(&self, item: &Item) -> Result<String> {
        let pricing = item.pricing();
        let commerce = item.commerce();
        let review = commerce.and_then(|c| c.review.as_ref());

        let template = CommerceCardTemplate {
            card: CardView::new(item, self.name(), "blue").attributes_label("Key Features"),
            has_pricing: pricing.is_some(),
            price: pricing.map(|p| p.display.as_str()).unwrap_or_default(),
            price_notes: pricing.and_then(|p| p.notes.as_deref()).unwrap_or_default(),
            price_type: pricing
                .and_then(|p| p.kind.as_deref())
                .map(|kind| kind.replacen('_', " ", 1))
                .unwrap_or_default(),
            pros: commerce.map(|c| c.pros.as_slice()).unwrap_or_default(),
            cons: commerce.map(|c| c.cons.as_slice()).unwrap_or_default(),
            has_review: review.is_some(),
            editorial: review.map(|r| r.editorial.as_str()).unwrap_or_default(),
            verdict: review.map(|r| r.verdict.as_str()).unwrap_or_default(),
        };
        Ok(template.render()?)
    }
}

#[derive(Template)]
#[template(path = "cards/place.html")]
struct PlaceCardTemplate<'a> {
    card: CardView<'a>,
    address: &'a str,
    /// Empty without coordinates
    map_url: String,
}

pub struct PlaceCard;

impl ItemCardRenderer for PlaceCard {
    fn name(&self) -> &'static str {
        "place"
    }

    fn render(&self, item: &Item) -> Result<String> {
        let location = item.location().filter(|l| !l.address.is_empty());
        let template = PlaceCardTemplate {
            card: CardView::new(item, self.name(), "emerald"),
            address: location.map(|l| l.address.as_str()).unwrap_or_default(),
            map_url: location
                .and_then(|l| l.coordinates)
                .map(|c| maps_url(c.lat, c.lng))
                .unwrap_or_default(),
        };
        Ok(template.render()?)
    }
}

#[derive(Template)]
#[template(path = "cards/person.html")]
struct PersonCardTemplate<'a> {
    card: CardView<'a>,
    stats: Vec<Pair>,
}

pub struct PersonCard;

impl ItemCardRenderer for PersonCard {
    fn name(&self) -> &'static str {
        "person"
    }

    /// Attributes move from the details list into the stats grid
    fn render(&self, item: &Item) -> Result<String> {
        let template = PersonCardTemplate {
            card: CardView::new(item, self.name(), "violet").without_attributes(),
            stats: attribute_pairs(item),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CallToAction, Image, Media, Rating};

    fn card(content_type: &ContentType, item: &Item) -> String {
        item_card(content_type).render(item).unwrap()
    }

    fn item(json: &str) -> Item {
        serde_json::from_str(json).unwrap()
    }

    // ========== registry ==========

    #[test]
    fn test_registry_mapping() {
        assert_eq!(item_card(&ContentType::PhysicalProduct).name(), "commerce");
        assert_eq!(item_card(&ContentType::ServiceOffer).name(), "commerce");
        assert_eq!(item_card(&ContentType::Place).name(), "place");
        assert_eq!(item_card(&ContentType::Person).name(), "person");
        assert_eq!(item_card(&ContentType::ListItem).name(), "list");
        assert_eq!(item_card(&ContentType::Unknown("recipe".into())).name(), "base");
    }

    #[test]
    fn test_card_name_emitted_as_data_attribute() {
        let it = Item { rank: 2, ..Default::default() };
        for (content_type, name) in [
            (ContentType::PhysicalProduct, "commerce"),
            (ContentType::Place, "place"),
            (ContentType::Person, "person"),
            (ContentType::ListItem, "list"),
            (ContentType::Unknown("recipe".into()), "base"),
        ] {
            let out = card(&content_type, &it);
            assert!(out.starts_with(&format!(r#"<article class="item-card" data-card="{}" data-rank="2""#, name)), "{}", out);
        }
    }

    // ========== shared parts ==========

    #[test]
    fn test_media_first_image_only_with_name_fallback() {
        let it = Item {
            name: "Saw".into(),
            media: Some(Media {
                images: vec![
                    Image { url: "https://img/1.jpg".into(), alt: String::new(), caption: None },
                    Image { url: "https://img/2.jpg".into(), alt: "two".into(), caption: None },
                ],
                video: None,
            }),
            ..Default::default()
        };
        let out = card(&ContentType::ListItem, &it);
        assert!(out.contains(r#"src="https://img/1.jpg" alt="Saw""#));
        assert!(!out.contains("2.jpg"));
        assert!(!out.contains("figcaption"));
    }

    #[test]
    fn test_rating_count_formatted() {
        let it = Item {
            rating: Some(Rating { value: 4.5, scale: 5.0, count: Some(12345), source: None }),
            ..Default::default()
        };
        let out = card(&ContentType::ListItem, &it);
        assert!(out.contains(r#"<span class="rating-value">4.5</span>"#));
        assert!(out.contains("(12,345 reviews)"));
        assert!(out.contains("/ 5"));
        assert!(!out.contains("rating-source"));
    }

    #[test]
    fn test_cta_primary_and_merchant_links() {
        let it = Item {
            cta: vec![
                CallToAction { text: "Check price".into(), url: "https://a".into(), ..Default::default() },
                CallToAction { text: "Other".into(), url: "https://b".into(), merchant: Some("Walmart".into()), ..Default::default() },
                CallToAction { text: "Plain".into(), url: "https://c".into(), ..Default::default() },
            ],
            ..Default::default()
        };
        let out = card(&ContentType::ListItem, &it);
        assert!(out.contains("Check price →"));
        assert!(out.contains(">View on Walmart</a>"));
        assert!(out.contains(">Plain</a>"));
        assert!(out.contains("Also available at:"));
    }

    #[test]
    fn test_no_cta_block_without_links() {
        let out = card(&ContentType::ListItem, &Item::default());
        assert!(!out.contains("item-cta"));
    }

    #[test]
    fn test_description_html_is_raw() {
        let it = Item { description_html: "<p>Nice <b>saw</b></p>".into(), ..Default::default() };
        let out = card(&ContentType::ListItem, &it);
        assert!(out.contains("<p>Nice <b>saw</b></p>"));
    }

    #[test]
    fn test_name_is_escaped() {
        let it = Item { name: "<script>".into(), ..Default::default() };
        let out = card(&ContentType::ListItem, &it);
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }

    // ========== extensions ==========

    #[test]
    fn test_commerce_card_sections() {
        let it = item(
            r#"{"rank": 1, "name": "Saw", "attributes": {"Blade": "10 in"},
                "contentTypeData": {"commerce": {
                    "source": {"pricing": {"display": "$299", "type": "one_time", "notes": "sale"}},
                    "pros": ["Accurate"], "cons": [],
                    "review": {"editorial": "Great saw.", "verdict": "Buy it"}}}}"#,
        );
        let out = card(&ContentType::PhysicalProduct, &it);
        assert!(out.contains("Key Features"));
        assert!(out.contains("<dt>Blade</dt><dd>10 in</dd>"));
        assert!(out.contains(r#"<span class="price">$299</span>"#));
        assert!(out.contains("one time"));
        assert!(out.contains("✓ Pros"));
        assert!(!out.contains("✗ Cons"));
        assert!(out.contains("Verdict: Buy it"));

        let features = out.find("Key Features").unwrap();
        let price = out.find("$299").unwrap();
        assert!(features < price);
    }

    #[test]
    fn test_place_card_map_link_needs_coordinates() {
        let with = item(
            r#"{"contentTypeData": {"place": {"location": {"address": "1 Main St", "coordinates": {"lat": 40.5, "lng": -73.25}}}}}"#,
        );
        let out = card(&ContentType::Place, &with);
        assert!(out.contains("1 Main St"));
        assert!(out.contains("query=40.5,-73.25"));

        let without = item(r#"{"contentTypeData": {"place": {"location": {"address": "1 Main St"}}}}"#);
        let out = card(&ContentType::Place, &without);
        assert!(out.contains("1 Main St"));
        assert!(!out.contains("google.com/maps"));
    }

    #[test]
    fn test_person_card_stats_grid_replaces_attributes() {
        let it = item(r#"{"attributes": {"Titles": "3"}}"#);
        let out = card(&ContentType::Person, &it);
        assert!(out.contains("Stats & Info"));
        assert!(out.contains(r#"<div class="stat-label">Titles</div>"#));
        assert!(!out.contains("item-attributes"));
    }
}
