use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single plan feature as held by an editing session.
///
/// A feature loaded from the backend has `is_new = false` and usually a
/// numeric id; a feature added during the session has `is_new = true` and no
/// id. Features parsed from a bare string keep `id = None` even though
/// `is_new = false` — such rows cannot be addressed by id on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub id: Option<i64>,
    pub text: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub is_new: bool,
}

impl PlanFeature {
    /// An empty row added by the "add feature" action.
    pub fn blank() -> Self {
        Self {
            id: None,
            text: String::new(),
            is_deleted: false,
            is_new: true,
        }
    }

    pub fn persisted(id: i64, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
            is_deleted: false,
            is_new: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Must be at least {0} characters")]
    TooShort(usize),
    #[error("Must be at most {0} characters")]
    TooLong(usize),
    #[error("Contains characters that are not allowed")]
    InvalidCharacters,
    // The implemented check is `value < 0`; zero passes. The wording is kept
    // as shipped.
    #[error("Amount must be greater than 0")]
    Negative,
}

pub fn validate_plan_name(name: &str) -> Option<FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    let length = trimmed.chars().count();
    if length < 3 {
        return Some(FieldError::TooShort(3));
    }
    if length > 50 {
        return Some(FieldError::TooLong(50));
    }

    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_');
    if !allowed {
        return Some(FieldError::InvalidCharacters);
    }

    None
}

/// Subtitles allow punctuation the name validator forbids; only markup
/// characters are blocked.
pub fn validate_subtitle(subtitle: &str) -> Option<FieldError> {
    let trimmed = subtitle.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    let length = trimmed.chars().count();
    if length < 3 {
        return Some(FieldError::TooShort(3));
    }
    if length > 100 {
        return Some(FieldError::TooLong(100));
    }

    if trimmed.chars().any(|c| matches!(c, '<' | '>' | '{' | '}')) {
        return Some(FieldError::InvalidCharacters);
    }

    None
}

pub fn validate_description(description: &str) -> Option<FieldError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    let length = trimmed.chars().count();
    if length < 10 {
        return Some(FieldError::TooShort(10));
    }
    if length > 500 {
        return Some(FieldError::TooLong(500));
    }

    None
}

pub fn validate_monthly_price(price: f64) -> Option<FieldError> {
    non_negative(price)
}

pub fn validate_annual_price(price: f64) -> Option<FieldError> {
    non_negative(price)
}

fn non_negative(price: f64) -> Option<FieldError> {
    if price < 0.0 {
        return Some(FieldError::Negative);
    }
    None
}

/// Per-field validation outcome; every validator runs so all errors can be
/// shown at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanFormErrors {
    pub name: Option<FieldError>,
    pub subtitle: Option<FieldError>,
    pub description: Option<FieldError>,
    pub monthly_price: Option<FieldError>,
    pub annual_price: Option<FieldError>,
}

impl PlanFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.subtitle.is_none()
            && self.description.is_none()
            && self.monthly_price.is_none()
            && self.annual_price.is_none()
    }
}

/// The full working state of one plan-editing session. Owned by a single
/// editor; the backend only sees it at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFormData {
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub monthly_price: f64,
    pub annual_price: f64,
    pub is_popular: bool,
    pub features: Vec<PlanFeature>,
}

impl Default for PlanFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            subtitle: String::new(),
            description: String::new(),
            monthly_price: 0.0,
            annual_price: 0.0,
            is_popular: false,
            features: vec![PlanFeature::blank()],
        }
    }
}

/// Descriptor for the delete-confirmation step of a feature row.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFeatureDelete {
    pub index: usize,
    pub text: String,
}

impl PlanFormData {
    pub fn validate(&self) -> PlanFormErrors {
        PlanFormErrors {
            name: validate_plan_name(&self.name),
            subtitle: validate_subtitle(&self.subtitle),
            description: validate_description(&self.description),
            monthly_price: validate_monthly_price(self.monthly_price),
            annual_price: validate_annual_price(self.annual_price),
        }
    }

    pub fn add_feature(&mut self) {
        self.features.push(PlanFeature::blank());
    }

    /// Text edits apply only to session-created rows that are not marked
    /// deleted; persisted feature text is immutable in this model.
    pub fn edit_feature_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.features.get_mut(index) {
            Some(feature) if feature.is_new && !feature.is_deleted => {
                feature.text = text.into();
                true
            }
            _ => false,
        }
    }

    pub fn request_feature_delete(&self, index: usize) -> Option<PendingFeatureDelete> {
        let feature = self.features.get(index)?;
        let text = if feature.text.is_empty() {
            "this feature".to_string()
        } else {
            feature.text.clone()
        };

        Some(PendingFeatureDelete { index, text })
    }

    /// Marks the row deleted without removing it, so the delete can be
    /// undone before the next save. The last remaining row cannot be
    /// deleted.
    pub fn confirm_feature_delete(&mut self, index: usize) -> bool {
        if self.features.len() <= 1 {
            return false;
        }

        match self.features.get_mut(index) {
            Some(feature) => {
                feature.is_deleted = true;
                true
            }
            None => false,
        }
    }

    pub fn undo_feature_delete(&mut self, index: usize) -> bool {
        match self.features.get_mut(index) {
            Some(feature) => {
                feature.is_deleted = false;
                true
            }
            None => false,
        }
    }

    pub fn active_feature_count(&self) -> usize {
        self.features.iter().filter(|f| !f.is_deleted).count()
    }

    pub fn pending_delete_count(&self) -> usize {
        self.features.iter().filter(|f| f.is_deleted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_name_boundaries() {
        assert_eq!(validate_plan_name(""), Some(FieldError::Required));
        assert_eq!(validate_plan_name("   "), Some(FieldError::Required));
        assert_eq!(validate_plan_name("ab"), Some(FieldError::TooShort(3)));
        assert_eq!(validate_plan_name("abc"), None);
        assert_eq!(
            validate_plan_name(&"a".repeat(51)),
            Some(FieldError::TooLong(50))
        );
        assert_eq!(validate_plan_name(&"a".repeat(50)), None);
    }

    #[test]
    fn plan_name_character_class() {
        assert_eq!(validate_plan_name("Pro Plan-2_x"), None);
        assert_eq!(
            validate_plan_name("Pro Plan!"),
            Some(FieldError::InvalidCharacters)
        );
        assert_eq!(
            validate_plan_name("Plan <b>"),
            Some(FieldError::InvalidCharacters)
        );
    }

    #[test]
    fn subtitle_allows_punctuation_but_blocks_markup() {
        assert_eq!(validate_subtitle("Best value, hands down!"), None);
        assert_eq!(
            validate_subtitle("Best <em>value</em>"),
            Some(FieldError::InvalidCharacters)
        );
        assert_eq!(
            validate_subtitle("curly {braces}"),
            Some(FieldError::InvalidCharacters)
        );
        assert_eq!(validate_subtitle("ab"), Some(FieldError::TooShort(3)));
        assert_eq!(
            validate_subtitle(&"s".repeat(101)),
            Some(FieldError::TooLong(100))
        );
    }

    #[test]
    fn description_boundaries() {
        assert_eq!(validate_description(""), Some(FieldError::Required));
        assert_eq!(
            validate_description("too short"),
            Some(FieldError::TooShort(10))
        );
        assert_eq!(validate_description("exactly 10"), None);
        assert_eq!(
            validate_description(&"d".repeat(501)),
            Some(FieldError::TooLong(500))
        );
    }

    #[test]
    fn price_accepts_zero_but_not_negative() {
        assert_eq!(validate_monthly_price(0.0), None);
        assert_eq!(validate_monthly_price(-0.01), Some(FieldError::Negative));
        assert_eq!(validate_annual_price(0.0), None);
        assert_eq!(validate_annual_price(-1.0), Some(FieldError::Negative));
    }

    #[test]
    fn validators_are_idempotent() {
        let first = validate_plan_name("ab");
        let second = validate_plan_name("ab");
        assert_eq!(first, second);
    }

    #[test]
    fn validate_reports_all_fields_at_once() {
        let form = PlanFormData {
            name: "x".to_string(),
            monthly_price: -5.0,
            ..Default::default()
        };

        let errors = form.validate();
        assert_eq!(errors.name, Some(FieldError::TooShort(3)));
        assert_eq!(errors.subtitle, Some(FieldError::Required));
        assert_eq!(errors.description, Some(FieldError::Required));
        assert_eq!(errors.monthly_price, Some(FieldError::Negative));
        assert_eq!(errors.annual_price, None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn delete_marks_row_without_removing_it() {
        let mut form = PlanFormData {
            features: vec![
                PlanFeature::persisted(7, "Old feature"),
                PlanFeature::blank(),
            ],
            ..Default::default()
        };

        let pending = form.request_feature_delete(0).unwrap();
        assert_eq!(pending.text, "Old feature");
        assert!(form.confirm_feature_delete(pending.index));

        assert_eq!(form.features.len(), 2);
        assert!(form.features[0].is_deleted);
        assert_eq!(form.features[0].id, Some(7));
    }

    #[test]
    fn last_row_cannot_be_deleted() {
        let mut form = PlanFormData::default();
        assert!(!form.confirm_feature_delete(0));
        assert!(!form.features[0].is_deleted);
    }

    #[test]
    fn undo_restores_a_marked_row() {
        let mut form = PlanFormData {
            features: vec![PlanFeature::persisted(3, "Keep me"), PlanFeature::blank()],
            ..Default::default()
        };

        form.confirm_feature_delete(0);
        assert!(form.undo_feature_delete(0));
        assert!(!form.features[0].is_deleted);
    }

    #[test]
    fn request_delete_falls_back_to_placeholder_text() {
        let form = PlanFormData::default();
        let pending = form.request_feature_delete(0).unwrap();
        assert_eq!(pending.text, "this feature");
    }

    #[test]
    fn only_session_created_rows_are_editable() {
        let mut form = PlanFormData {
            features: vec![PlanFeature::persisted(1, "fixed"), PlanFeature::blank()],
            ..Default::default()
        };

        assert!(!form.edit_feature_text(0, "changed"));
        assert_eq!(form.features[0].text, "fixed");

        assert!(form.edit_feature_text(1, "Fast support"));
        assert_eq!(form.features[1].text, "Fast support");
    }
}
