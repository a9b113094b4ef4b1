//! Place category codes.

use std::fmt;

use super::error::PlaceError;

/// A category group understood by the place search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mart,
    ConvenienceStore,
    School,
    Academy,
    Parking,
    GasStation,
    SubwayStation,
    Bank,
    Culture,
    Agency,
    PublicOffice,
    Attraction,
    Lodging,
    Restaurant,
    Cafe,
    Hospital,
    Pharmacy,
}

/// (category, provider code, English label, Korean label)
const CATEGORIES: &[(Category, &str, &str, &str)] = &[
    (Category::Mart, "MT1", "mart", "대형마트"),
    (Category::ConvenienceStore, "CS2", "convenience", "편의점"),
    (Category::School, "SC4", "school", "학교"),
    (Category::Academy, "AC5", "academy", "학원"),
    (Category::Parking, "PK6", "parking", "주차장"),
    (Category::GasStation, "OL7", "gas", "주유소"),
    (Category::SubwayStation, "SW8", "subway", "지하철역"),
    (Category::Bank, "BK9", "bank", "은행"),
    (Category::Culture, "CT1", "culture", "문화시설"),
    (Category::Agency, "AG2", "agency", "중개업소"),
    (Category::PublicOffice, "PO3", "public", "공공기관"),
    (Category::Attraction, "AT4", "attraction", "관광명소"),
    (Category::Lodging, "AD5", "lodging", "숙박"),
    (Category::Restaurant, "FD6", "restaurant", "음식점"),
    (Category::Cafe, "CE7", "cafe", "카페"),
    (Category::Hospital, "HP8", "hospital", "병원"),
    (Category::Pharmacy, "PM9", "pharmacy", "약국"),
];

impl Category {
    /// Translate a user-facing label (English or Korean) or a raw provider
    /// code into a category.
    ///
    /// ```
    /// use midpoint_server::places::Category;
    ///
    /// assert_eq!(Category::from_label("cafe").unwrap(), Category::Cafe);
    /// assert_eq!(Category::from_label("카페").unwrap(), Category::Cafe);
    /// assert_eq!(Category::from_label("CE7").unwrap(), Category::Cafe);
    /// assert!(Category::from_label("zoo").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self, PlaceError> {
        let label = label.trim();
        CATEGORIES
            .iter()
            .find(|(_, code, en, ko)| {
                en.eq_ignore_ascii_case(label) || *ko == label || code.eq_ignore_ascii_case(label)
            })
            .map(|(category, ..)| *category)
            .ok_or_else(|| PlaceError::UnknownCategory(label.to_string()))
    }

    /// The provider's category group code.
    pub fn code(&self) -> &'static str {
        CATEGORIES
            .iter()
            .find(|(category, ..)| category == self)
            .map(|(_, code, ..)| *code)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_code() {
        for (category, code, ..) in CATEGORIES {
            assert_eq!(category.code(), *code);
        }
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(Category::from_label("Subway").unwrap(), Category::SubwayStation);
        assert_eq!(Category::from_label(" sw8 ").unwrap(), Category::SubwayStation);
        assert_eq!(Category::from_label("지하철역").unwrap(), Category::SubwayStation);
    }

    #[test]
    fn unknown_label() {
        let err = Category::from_label("spaceport").unwrap_err();
        assert!(matches!(err, PlaceError::UnknownCategory(ref s) if s == "spaceport"));
    }

    #[test]
    fn display_is_code() {
        assert_eq!(Category::Restaurant.to_string(), "FD6");
    }
}
