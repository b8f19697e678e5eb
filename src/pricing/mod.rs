//! Pricing calculator: a pure function from (line items, order type, config)
//! to a [`PriceBreakdown`].
//!
//! All money is `rust_decimal::Decimal`; every derived field is rounded to
//! 2 decimal places with round-half-up *before* it is summed into the total,
//! so `total == subtotal + delivery_fee + tax` holds exactly.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::model::{LineItem, OrderType};

/// Pricing policy, injected into the cart actor as its context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Flat delivery fee charged on room-service orders.
    pub room_service_delivery_fee: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            // 10% tax, 5.00 room-service delivery fee.
            tax_rate: Decimal::new(10, 2),
            room_service_delivery_fee: Decimal::new(500, 2),
        }
    }
}

/// Derived totals for a cart. Never stored; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// All-zero breakdown, the result for an empty cart.
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            delivery_fee: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Rounds a monetary amount to 2 decimal places, half-up.
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the price breakdown for a set of line items.
///
/// Deterministic and side-effect free. An empty cart yields all zeroes
/// independent of order type (no delivery fee on nothing).
pub fn price_breakdown(
    items: &[LineItem],
    order_type: OrderType,
    config: &PricingConfig,
) -> PriceBreakdown {
    if items.is_empty() {
        return PriceBreakdown::zero();
    }

    let subtotal = round_money(items.iter().map(LineItem::line_total).sum());

    let delivery_fee = match order_type {
        OrderType::RoomService => round_money(config.room_service_delivery_fee),
        OrderType::Restaurant | OrderType::Takeaway => Decimal::ZERO,
    };

    let tax = round_money(subtotal * config.tax_rate);
    let total = round_money(subtotal + delivery_fee + tax);

    PriceBreakdown {
        subtotal,
        delivery_fee,
        tax,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;
    use rust_decimal_macros::dec;

    fn line(id: &str, price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            item: MenuItem::new(id, format!("Item {}", id), price, "mains"),
            quantity,
            customizations: Vec::new(),
            special_instructions: None,
        }
    }

    #[test]
    fn room_service_scenario() {
        // price 15.00 x1, RoomService, tax 0.10, fee 5.00
        let items = vec![line("a", dec!(15.00), 1)];
        let breakdown = price_breakdown(&items, OrderType::RoomService, &PricingConfig::default());

        assert_eq!(breakdown.subtotal, dec!(15.00));
        assert_eq!(breakdown.delivery_fee, dec!(5.00));
        assert_eq!(breakdown.tax, dec!(1.50));
        assert_eq!(breakdown.total, dec!(21.50));
    }

    #[test]
    fn empty_cart_is_all_zero_for_every_order_type() {
        let config = PricingConfig::default();
        for order_type in [
            OrderType::RoomService,
            OrderType::Restaurant,
            OrderType::Takeaway,
        ] {
            let breakdown = price_breakdown(&[], order_type, &config);
            assert_eq!(breakdown, PriceBreakdown::zero());
        }
    }

    #[test]
    fn no_delivery_fee_outside_room_service() {
        let items = vec![line("a", dec!(10.00), 2)];
        let config = PricingConfig::default();

        for order_type in [OrderType::Restaurant, OrderType::Takeaway] {
            let breakdown = price_breakdown(&items, order_type, &config);
            assert_eq!(breakdown.delivery_fee, Decimal::ZERO);
            assert_eq!(breakdown.total, dec!(22.00));
        }
    }

    #[test]
    fn tax_rounds_half_up_after_multiplication() {
        // subtotal 10.05 * 0.10 = 1.005 -> 1.01 half-up
        let items = vec![line("a", dec!(10.05), 1)];
        let breakdown = price_breakdown(&items, OrderType::Takeaway, &PricingConfig::default());

        assert_eq!(breakdown.tax, dec!(1.01));
        assert_eq!(breakdown.total, dec!(11.06));
    }

    #[test]
    fn total_is_exactly_the_sum_of_rounded_parts() {
        let items = vec![
            line("a", dec!(3.33), 3),
            line("b", dec!(0.99), 7),
            line("c", dec!(12.40), 1),
        ];
        let config = PricingConfig {
            tax_rate: dec!(0.0825),
            room_service_delivery_fee: dec!(4.75),
        };
        let breakdown = price_breakdown(&items, OrderType::RoomService, &config);

        assert_eq!(
            breakdown.total,
            breakdown.subtotal + breakdown.delivery_fee + breakdown.tax
        );
    }

    #[test]
    fn subtotal_is_invariant_under_reordering() {
        let a = line("a", dec!(2.50), 2);
        let b = line("b", dec!(7.25), 1);
        let c = line("c", dec!(1.10), 4);
        let config = PricingConfig::default();

        let forward = price_breakdown(&[a.clone(), b.clone(), c.clone()], OrderType::Takeaway, &config);
        let backward = price_breakdown(&[c, b, a], OrderType::Takeaway, &config);

        assert_eq!(forward, backward);
    }

    #[test]
    fn breakdown_is_deterministic() {
        let items = vec![line("a", dec!(15.00), 1), line("b", dec!(4.20), 3)];
        let config = PricingConfig::default();

        let first = price_breakdown(&items, OrderType::RoomService, &config);
        let second = price_breakdown(&items, OrderType::RoomService, &config);
        assert_eq!(first, second);
    }
}
