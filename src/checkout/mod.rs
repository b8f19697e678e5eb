//! Order validator: gates the transition from editing to submission.
//!
//! Validation is synchronous, pure, and never touches the network. On
//! success it returns a normalized [`OrderDraft`] ready for the order
//! backend; on failure the cart is untouched and stays editable.

use crate::cart_actor::CartError;
use crate::model::{ActorId, CartSession, LineItem, OrderDraft, OrderType};
use crate::pricing::{price_breakdown, PricingConfig};

/// Trims free text, mapping blank strings to `None`.
fn normalize_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

/// Validates a cart and produces the normalized draft.
///
/// Checks, in order:
/// 1. an authenticated actor is present ([`CartError::NotAuthenticated`]);
/// 2. the cart has at least one line item ([`CartError::EmptyCart`]);
/// 3. room-service orders carry a non-blank delivery address
///    ([`CartError::MissingDeliveryAddress`]).
///
/// Normalization: blank special instructions become absent, the delivery
/// address is trimmed and only kept for room-service orders, and totals are
/// computed with the pricing calculator. Quantities are already integers
/// >= 1 by the cart's own invariant.
pub fn validate(
    cart: &CartSession,
    actor: Option<ActorId>,
    config: &PricingConfig,
) -> Result<OrderDraft, CartError> {
    let placed_by = actor.ok_or(CartError::NotAuthenticated)?;

    if cart.is_empty() {
        return Err(CartError::EmptyCart);
    }

    let delivery_address = match cart.order_type {
        OrderType::RoomService => {
            let address = normalize_text(cart.delivery_address.as_deref())
                .ok_or(CartError::MissingDeliveryAddress)?;
            Some(address)
        }
        OrderType::Restaurant | OrderType::Takeaway => None,
    };

    let items: Vec<LineItem> = cart
        .items()
        .into_iter()
        .map(|mut line| {
            line.special_instructions = normalize_text(line.special_instructions.as_deref());
            line
        })
        .collect();

    let totals = price_breakdown(&items, cart.order_type, config);

    Ok(OrderDraft {
        cart_id: cart.id.clone(),
        placed_by,
        items,
        order_type: cart.order_type,
        delivery_address,
        special_instructions: normalize_text(cart.special_instructions.as_deref()),
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;
    use rust_decimal_macros::dec;

    fn guest() -> Option<ActorId> {
        Some(ActorId::new("guest_7"))
    }

    fn cart_with_burger(order_type: OrderType) -> CartSession {
        let mut cart = CartSession::new("cart_1", order_type);
        cart.set_quantity(
            MenuItem::new("item_1", "Club Burger", dec!(15.00), "mains"),
            1,
        )
        .unwrap();
        cart
    }

    #[test]
    fn empty_cart_is_rejected() {
        let cart = CartSession::new("cart_1", OrderType::Restaurant);
        let err = validate(&cart, guest(), &PricingConfig::default()).unwrap_err();
        assert_eq!(err, CartError::EmptyCart);
    }

    #[test]
    fn missing_actor_is_rejected() {
        let cart = cart_with_burger(OrderType::Restaurant);
        let err = validate(&cart, None, &PricingConfig::default()).unwrap_err();
        assert_eq!(err, CartError::NotAuthenticated);
    }

    #[test]
    fn room_service_requires_an_address() {
        let mut cart = cart_with_burger(OrderType::RoomService);
        let err = validate(&cart, guest(), &PricingConfig::default()).unwrap_err();
        assert_eq!(err, CartError::MissingDeliveryAddress);

        // Whitespace-only is still missing.
        cart.set_delivery_address(Some("   ".into())).unwrap();
        let err = validate(&cart, guest(), &PricingConfig::default()).unwrap_err();
        assert_eq!(err, CartError::MissingDeliveryAddress);
    }

    #[test]
    fn room_service_draft_carries_trimmed_address_and_totals() {
        let mut cart = cart_with_burger(OrderType::RoomService);
        cart.set_delivery_address(Some("  Room 412  ".into())).unwrap();

        let draft = validate(&cart, guest(), &PricingConfig::default()).unwrap();
        assert_eq!(draft.delivery_address.as_deref(), Some("Room 412"));
        assert_eq!(draft.totals.subtotal, dec!(15.00));
        assert_eq!(draft.totals.delivery_fee, dec!(5.00));
        assert_eq!(draft.totals.tax, dec!(1.50));
        assert_eq!(draft.totals.total, dec!(21.50));
        assert_eq!(draft.placed_by, ActorId::new("guest_7"));
    }

    #[test]
    fn address_is_dropped_for_non_delivery_orders() {
        let mut cart = cart_with_burger(OrderType::Takeaway);
        cart.set_delivery_address(Some("Room 412".into())).unwrap();

        let draft = validate(&cart, guest(), &PricingConfig::default()).unwrap();
        assert_eq!(draft.delivery_address, None);
        assert_eq!(draft.totals.delivery_fee, dec!(0.00));
    }

    #[test]
    fn blank_instructions_are_normalized_to_absent() {
        let mut cart = cart_with_burger(OrderType::Restaurant);
        cart.set_instructions(Some("  ".into())).unwrap();
        cart.customize("item_1", vec!["no pickles".into()], Some(" \t".into()))
            .unwrap();

        let draft = validate(&cart, guest(), &PricingConfig::default()).unwrap();
        assert_eq!(draft.special_instructions, None);
        assert_eq!(draft.items[0].special_instructions, None);
        assert_eq!(draft.items[0].customizations, vec!["no pickles".to_string()]);
    }

    #[test]
    fn validation_does_not_mutate_the_cart() {
        let cart = cart_with_burger(OrderType::Restaurant);
        let before = cart.clone();
        let _ = validate(&cart, guest(), &PricingConfig::default()).unwrap();
        assert_eq!(cart, before);
    }
}
