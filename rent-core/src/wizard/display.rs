use crate::models::{InvoiceSummary, TenantInvoice};

/// Read model for one card in the result carousel.
///
/// The carousel holds one invoice card per tenant, in roster order,
/// followed by a single summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCard {
    Invoice(TenantInvoice),
    Summary(InvoiceSummary),
}

impl DisplayCard {
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary(_))
    }

    pub fn as_invoice(&self) -> Option<&TenantInvoice> {
        match self {
            Self::Invoice(invoice) => Some(invoice),
            Self::Summary(_) => None,
        }
    }

    pub fn as_summary(&self) -> Option<&InvoiceSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::Invoice(_) => None,
        }
    }
}

/// Index reached by moving one card forwards or backwards from `current` in a
/// carousel of `count` cards.
pub(crate) fn wrap_index(
    current: usize,
    count: usize,
    forward: bool,
) -> usize {
    if count == 0 {
        return 0;
    }
    if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wrap_index_moves_forward() {
        assert_eq!(wrap_index(0, 3, true), 1);
        assert_eq!(wrap_index(2, 3, true), 0);
    }

    #[test]
    fn wrap_index_moves_backward() {
        assert_eq!(wrap_index(1, 3, false), 0);
        assert_eq!(wrap_index(0, 3, false), 2);
    }

    #[test]
    fn wrap_index_single_card_stays_put() {
        assert_eq!(wrap_index(0, 1, true), 0);
        assert_eq!(wrap_index(0, 1, false), 0);
    }
}
