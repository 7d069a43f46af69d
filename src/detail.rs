use crate::format::{format_area, format_date, format_price};
use crate::models::Property;
use serde::Serialize;

/// Images shown in the detail gallery before collapsing into a counter
pub const PREVIEW_IMAGES: usize = 6;

/// Open/closed state of the listing detail modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    selected: Option<String>,
}

impl DetailModal {
    pub fn open(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Id of the listing shown, if open
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// Presentation-ready detail of one listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDetail {
    pub id: String,
    pub title: String,
    pub price: String,
    pub location: String,
    pub area: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub kind: String,
    pub status: String,
    pub office: String,
    pub date: String,
    pub features: Vec<String>,
    pub preview_images: Vec<String>,
    /// Images beyond the preview, rendered as `+N`
    pub hidden_images: usize,
    pub description: Option<String>,
}

impl PropertyDetail {
    pub fn from_property(property: &Property) -> Self {
        let preview_images: Vec<String> = property
            .images
            .iter()
            .take(PREVIEW_IMAGES)
            .cloned()
            .collect();

        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            price: format_price(property.price, &property.currency),
            location: property.location.clone(),
            area: format_area(property.area),
            // zero counts are hidden like missing ones
            bedrooms: property.bedrooms.filter(|&n| n > 0),
            bathrooms: property.bathrooms.filter(|&n| n > 0),
            kind: property.kind.clone(),
            status: property.status.clone(),
            office: property.office.clone(),
            date: format_date(&property.date),
            features: property.features.clone().unwrap_or_default(),
            hidden_images: property.images.len() - preview_images.len(),
            preview_images,
            description: property
                .description
                .clone()
                .filter(|d| !d.trim().is_empty()),
        }
    }
}
