//! Required-field checks for the add-invoice form.

use crate::error::AppError;
use crate::model::InvoiceDraft;

pub struct DraftValidator;

impl DraftValidator {
    pub fn validate(draft: &InvoiceDraft) -> Result<(), AppError> {
        if draft.number.trim().is_empty() {
            return Err(AppError::Validation("number is required".into()));
        }
        if draft.items.is_empty() {
            return Err(AppError::Validation("at least one item is required".into()));
        }
        for (i, item) in draft.items.iter().enumerate() {
            if item.description.trim().is_empty() {
                return Err(AppError::Validation(format!("items[{}].description is required", i)));
            }
            if item.quantity == 0 {
                return Err(AppError::Validation(format!("items[{}].quantity must be at least 1", i)));
            }
            if !item.unit_price.is_finite() || item.unit_price < 0.0 {
                return Err(AppError::Validation(format!(
                    "items[{}].unitPrice must be a non-negative number",
                    i
                )));
            }
        }
        if let Some(due) = draft.due_date {
            if due < draft.issue_date {
                return Err(AppError::Validation("dueDate must not be before issueDate".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvoiceItem;
    use chrono::NaiveDate;

    fn draft() -> InvoiceDraft {
        InvoiceDraft {
            client_id: 42,
            number: "INV-0008".into(),
            issue_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 10, 31),
            items: vec![InvoiceItem {
                description: "Oil change".into(),
                quantity: 1,
                unit_price: 80.0,
            }],
            notes: None,
        }
    }

    #[test]
    fn accepts_complete_draft() {
        assert!(DraftValidator::validate(&draft()).is_ok());
    }

    #[test]
    fn rejects_missing_number_and_items() {
        let mut d = draft();
        d.number = "  ".into();
        assert!(matches!(DraftValidator::validate(&d), Err(AppError::Validation(_))));

        let mut d = draft();
        d.items.clear();
        assert!(matches!(DraftValidator::validate(&d), Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_due_date_before_issue_date() {
        let mut d = draft();
        d.due_date = NaiveDate::from_ymd_opt(2026, 9, 1);
        let err = DraftValidator::validate(&d).unwrap_err();
        assert!(err.to_string().contains("dueDate"));
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut d = draft();
        d.items[0].quantity = 0;
        assert!(DraftValidator::validate(&d).is_err());
    }
}
