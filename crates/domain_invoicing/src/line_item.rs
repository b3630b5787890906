//! Line-item model
//!
//! Invoice rows exist in two forms: the mutable draft the form edits
//! (`LineItemDraft`) and the validated row that lands on an invoice
//! (`LineItem`). Serial numbers are positional and amounts are derived, so
//! both are recomputed together by every function that changes the row set;
//! callers never set either directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::error::InvoicingError;

/// A raw invoice row as entered in the form
///
/// `serial_number` and `amount` are derived fields. Whatever the caller
/// supplies for them is overwritten on the next mutation or on
/// [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemDraft {
    /// 1-based position, as text (kept as entered on paper invoices)
    #[serde(default)]
    pub serial_number: String,
    pub description: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub rate: Decimal,
    /// Derived `quantity * rate`; recomputed, never trusted
    #[serde(default)]
    pub amount: Decimal,
}

impl LineItemDraft {
    /// Creates a draft row from user input; derived fields start unset
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            serial_number: String::new(),
            description: description.into(),
            quantity,
            rate,
            amount: Decimal::ZERO,
        }
    }

    /// Creates an empty row for the given 1-based position
    pub fn blank(position: usize) -> Self {
        Self {
            serial_number: position.to_string(),
            description: String::new(),
            quantity: Decimal::ZERO,
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }
}

/// A validated invoice row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// 1-based position, contiguous across the item list
    pub serial_number: String,
    pub description: String,
    pub quantity: Decimal,
    pub rate: Money,
    /// Always `rate * quantity`
    pub amount: Money,
}

/// Reassigns serial numbers and recomputes amounts by position.
///
/// Serial and amount move together: any mutation of the row set passes
/// through here so neither can go stale on its own.
fn refresh(mut items: Vec<LineItemDraft>) -> Vec<LineItemDraft> {
    for (index, item) in items.iter_mut().enumerate() {
        item.serial_number = (index + 1).to_string();
        item.amount = item.quantity * item.rate;
    }
    items
}

/// Appends a blank row and renumbers.
pub fn add_item(items: &[LineItemDraft]) -> Vec<LineItemDraft> {
    let mut next = items.to_vec();
    next.push(LineItemDraft::blank(items.len() + 1));
    refresh(next)
}

/// Removes the row at `index` and renumbers the remainder.
///
/// Rejects the removal when it would leave an empty invoice or when the
/// index does not name a row.
pub fn remove_item(
    items: &[LineItemDraft],
    index: usize,
) -> Result<Vec<LineItemDraft>, InvoicingError> {
    if index >= items.len() {
        return Err(InvoicingError::ItemIndexOutOfRange { index });
    }
    if items.len() == 1 {
        return Err(InvoicingError::LastItem);
    }

    let mut next = items.to_vec();
    next.remove(index);
    Ok(refresh(next))
}

/// Validates drafts and produces the rows an invoice can carry.
///
/// Amounts are computed as `quantity * rate` and serial numbers assigned
/// from position, overwriting anything the caller supplied. Fails on an
/// empty list, an empty description, or a negative quantity or rate.
pub fn normalize(
    items: &[LineItemDraft],
    currency: Currency,
) -> Result<Vec<LineItem>, InvoicingError> {
    if items.is_empty() {
        return Err(InvoicingError::EmptyItems);
    }

    let mut normalized = Vec::with_capacity(items.len());
    for (index, draft) in items.iter().enumerate() {
        if draft.description.trim().is_empty() {
            return Err(InvoicingError::EmptyDescription { index });
        }
        if draft.quantity.is_sign_negative() && !draft.quantity.is_zero() {
            return Err(InvoicingError::NegativeQuantity { index });
        }
        if draft.rate.is_sign_negative() && !draft.rate.is_zero() {
            return Err(InvoicingError::NegativeRate { index });
        }

        let rate = Money::new(draft.rate, currency);
        normalized.push(LineItem {
            serial_number: (index + 1).to_string(),
            description: draft.description.clone(),
            quantity: draft.quantity,
            amount: rate.multiply(draft.quantity),
            rate,
        });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn drafts() -> Vec<LineItemDraft> {
        vec![
            LineItemDraft::new("Web development", dec!(2), dec!(100)),
            LineItemDraft::new("Hosting", dec!(1), dec!(50)),
        ]
    }

    #[test]
    fn normalize_computes_amount_and_serials() {
        let items = normalize(&drafts(), Currency::INR).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].serial_number, "1");
        assert_eq!(items[0].amount.amount(), dec!(200));
        assert_eq!(items[1].serial_number, "2");
        assert_eq!(items[1].amount.amount(), dec!(50));
    }

    #[test]
    fn normalize_overwrites_caller_serials() {
        let mut input = drafts();
        input[0].serial_number = "99".to_string();
        input[0].amount = dec!(123456);

        let items = normalize(&input, Currency::INR).unwrap();
        assert_eq!(items[0].serial_number, "1");
        assert_eq!(items[0].amount.amount(), dec!(200));
    }

    #[test]
    fn normalize_rejects_empty_list() {
        assert_eq!(
            normalize(&[], Currency::INR),
            Err(InvoicingError::EmptyItems)
        );
    }

    #[test]
    fn normalize_rejects_blank_description() {
        let mut input = drafts();
        input[1].description = "   ".to_string();

        assert_eq!(
            normalize(&input, Currency::INR),
            Err(InvoicingError::EmptyDescription { index: 1 })
        );
    }

    #[test]
    fn normalize_rejects_negative_numbers() {
        let mut input = drafts();
        input[0].quantity = dec!(-1);
        assert_eq!(
            normalize(&input, Currency::INR),
            Err(InvoicingError::NegativeQuantity { index: 0 })
        );

        let mut input = drafts();
        input[1].rate = dec!(-0.01);
        assert_eq!(
            normalize(&input, Currency::INR),
            Err(InvoicingError::NegativeRate { index: 1 })
        );
    }

    #[test]
    fn zero_quantity_rows_are_allowed() {
        let input = vec![LineItemDraft::new("Retainer", dec!(0), dec!(500))];
        let items = normalize(&input, Currency::INR).unwrap();
        assert!(items[0].amount.is_zero());
    }

    #[test]
    fn add_item_appends_blank_with_next_serial() {
        let next = add_item(&drafts());

        assert_eq!(next.len(), 3);
        assert_eq!(next[2].serial_number, "3");
        assert!(next[2].description.is_empty());
        assert_eq!(next[2].quantity, Decimal::ZERO);
        assert_eq!(next[2].rate, Decimal::ZERO);
        assert_eq!(next[2].amount, Decimal::ZERO);
    }

    #[test]
    fn remove_item_renumbers_contiguously() {
        let three = add_item(&drafts());
        let after = remove_item(&three, 0).unwrap();

        assert_eq!(after.len(), 2);
        assert_eq!(after[0].serial_number, "1");
        assert_eq!(after[0].description, "Hosting");
        assert_eq!(after[1].serial_number, "2");
    }

    #[test]
    fn remove_item_refreshes_amounts_with_serials() {
        let mut rows = drafts();
        rows[1].amount = dec!(9999); // stale caller-supplied value

        let after = remove_item(&rows, 0).unwrap();
        assert_eq!(after[0].amount, dec!(50));
    }

    #[test]
    fn remove_item_rejects_last_row() {
        let one = vec![LineItemDraft::new("Only row", dec!(1), dec!(10))];
        assert_eq!(remove_item(&one, 0), Err(InvoicingError::LastItem));
    }

    #[test]
    fn remove_item_rejects_bad_index() {
        assert_eq!(
            remove_item(&drafts(), 5),
            Err(InvoicingError::ItemIndexOutOfRange { index: 5 })
        );
    }
}
