use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used by listing publication dates (`DD-MM-YYYY`)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Core property listing model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    /// Surface in square meters
    pub area: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub office: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub images: Vec<String>,
    pub date: String,
}

impl Property {
    /// Publication date, if `date` is a valid `DD-MM-YYYY` string
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Read a single field for matching purposes
    pub fn field(&self, field: SearchField) -> FieldValue<'_> {
        match field {
            SearchField::Id => FieldValue::Text(&self.id),
            SearchField::Title => FieldValue::Text(&self.title),
            SearchField::Price => FieldValue::Number(self.price),
            SearchField::Currency => FieldValue::Text(&self.currency),
            SearchField::Location => FieldValue::Text(&self.location),
            SearchField::Bedrooms => self
                .bedrooms
                .map_or(FieldValue::Absent, |n| FieldValue::Number(f64::from(n))),
            SearchField::Bathrooms => self
                .bathrooms
                .map_or(FieldValue::Absent, |n| FieldValue::Number(f64::from(n))),
            SearchField::Area => FieldValue::Number(self.area),
            SearchField::Type => FieldValue::Text(&self.kind),
            SearchField::Status => FieldValue::Text(&self.status),
            SearchField::Office => FieldValue::Text(&self.office),
            SearchField::Features => self
                .features
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::List),
            SearchField::Description => self
                .description
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::Text),
            SearchField::Images => FieldValue::List(&self.images),
            SearchField::Date => FieldValue::Text(&self.date),
        }
    }
}

/// Fields of a listing that a search can look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Id,
    Title,
    Price,
    Currency,
    Location,
    Bedrooms,
    Bathrooms,
    Area,
    Type,
    Status,
    Office,
    Features,
    Description,
    Images,
    Date,
}

impl SearchField {
    /// Fields searched when nothing else is configured
    pub const DEFAULTS: [SearchField; 6] = [
        SearchField::Title,
        SearchField::Location,
        SearchField::Type,
        SearchField::Status,
        SearchField::Office,
        SearchField::Id,
    ];
}

/// Borrowed view of one listing field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    List(&'a [String]),
    Absent,
}
