use rust_decimal::Decimal;

use crate::model::{Payment, PaymentStatus};

/// Aggregates shown on the summary cards. Always derived from a full fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_revenue: Decimal,
    pub pending_count: usize,
}

impl Summary {
    pub fn from_payments(payments: &[Payment]) -> Self {
        payments
            .iter()
            .fold(Summary::default(), |mut summary, payment| {
                match payment.status {
                    PaymentStatus::Completed => summary.total_revenue += payment.amount_or_zero(),
                    PaymentStatus::Pending => summary.pending_count += 1,
                    PaymentStatus::Cancelled => {}
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::payment;

    #[test]
    fn sums_completed_and_counts_pending() {
        let payments = vec![
            payment(1, PaymentStatus::Pending, 0, Some("Ani")),
            payment(2, PaymentStatus::Completed, 150000, Some("Budi")),
        ];

        let summary = Summary::from_payments(&payments);
        assert_eq!(summary.total_revenue, Decimal::from(150000));
        assert_eq!(summary.pending_count, 1);
    }

    #[test]
    fn pending_and_cancelled_amounts_do_not_count_as_revenue() {
        let payments = vec![
            payment(1, PaymentStatus::Pending, 90000, None),
            payment(2, PaymentStatus::Cancelled, 40000, None),
            payment(3, PaymentStatus::Completed, 25000, None),
            payment(4, PaymentStatus::Completed, 75000, None),
        ];

        let summary = Summary::from_payments(&payments);
        assert_eq!(summary.total_revenue, Decimal::from(100000));
        assert_eq!(summary.pending_count, 1);
    }

    #[test]
    fn completed_without_amount_adds_zero() {
        let mut unpriced = payment(1, PaymentStatus::Completed, 0, None);
        unpriced.amount = None;

        let summary = Summary::from_payments(&[unpriced]);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(Summary::from_payments(&[]), Summary::default());
    }
}
