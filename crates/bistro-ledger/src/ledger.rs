//! # Cart Ledger
//!
//! The ledger is the pure computation layer of the ordering flow. Every
//! operation takes the cart explicitly; nothing here holds state between calls.
//!
//! | Operation | Mutates the cart | Fails with |
//! |-----------|------------------|------------|
//! | [`add_item`] | yes | [`LedgerError::MenuItemNotFound`] |
//! | [`update_quantity`] | yes | [`LedgerError::LineNotFound`] |
//! | [`compute_total`] | no | never (an overflowing total saturates) |
//! | [`try_total`] | no | [`LedgerError::TotalOverflow`] |
//! | [`apply_discount`] | no | never (bad input is logged and ignored) |
//! | [`is_order_valid`] | no | never |
//! | [`attempt_order`] | no | [`LedgerError::OrderRejected`] |
//!
//! Functions that accept a cart take `impl Into<Option<&Cart>>`, so both
//! `compute_total(&cart)` and `compute_total(None)` work. A missing cart
//! behaves like an empty one.

use crate::catalog::Catalog;
use crate::error::{LedgerError, Rejection};
use crate::model::{Cart, CartLine, MenuItemId};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};

/// Adds one unit of `item_id` to the cart.
///
/// An existing line has its quantity incremented; otherwise a new line with
/// quantity 1 is appended. If the item is the catalog's deal of the day, the
/// deal message is logged.
pub fn add_item<'c>(
    catalog: &Catalog,
    cart: &'c mut Cart,
    item_id: MenuItemId,
) -> Result<&'c Cart, LedgerError> {
    let Some(item) = catalog.find(item_id) else {
        warn!(%item_id, "Menu item not found");
        return Err(LedgerError::MenuItemNotFound(item_id));
    };

    match cart.line_mut(item_id) {
        Some(line) => {
            line.quantity = line.quantity.saturating_add(1);
            debug!(%item_id, quantity = line.quantity, "Incremented line");
        }
        None => {
            cart.push(CartLine::from_item(item));
            debug!(%item_id, "Appended line");
        }
    }

    if let Some(deal) = catalog.deal().filter(|deal| deal.applies_to(item_id)) {
        info!(%item_id, "{}", deal.message);
    }

    info!(%item_id, lines = cart.len(), "Added to cart");
    Ok(cart)
}

/// Changes the quantity of an existing line by `delta`.
///
/// A line whose quantity would fall below 1 is removed from the cart.
pub fn update_quantity(
    cart: &mut Cart,
    item_id: MenuItemId,
    delta: i64,
) -> Result<&Cart, LedgerError> {
    let Some(index) = cart.position(item_id) else {
        warn!(%item_id, "Line not found in cart");
        return Err(LedgerError::LineNotFound(item_id));
    };

    let current = i64::from(cart.lines()[index].quantity);
    let next = current.saturating_add(delta);
    if next < 1 {
        cart.remove_at(index);
        info!(%item_id, lines = cart.len(), "Removed line");
    } else if let Some(line) = cart.line_mut(item_id) {
        line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        info!(%item_id, quantity = line.quantity, "Updated quantity");
    }
    Ok(cart)
}

/// Sum of unit price times quantity over all lines. Zero for an empty or
/// missing cart.
///
/// A total too large for a `Decimal` is logged and reported as
/// [`Decimal::MAX`]; use [`try_total`] to get the error instead.
pub fn compute_total<'a>(cart: impl Into<Option<&'a Cart>>) -> Decimal {
    match try_total(cart) {
        Ok(total) => total,
        Err(e) => {
            warn!(error = %e, "Cart total saturated");
            Decimal::MAX
        }
    }
}

/// Like [`compute_total`], but fails when the total overflows.
pub fn try_total<'a>(cart: impl Into<Option<&'a Cart>>) -> Result<Decimal, LedgerError> {
    let Some(cart) = cart.into() else {
        return Ok(Decimal::ZERO);
    };
    cart.lines()
        .iter()
        .try_fold(Decimal::ZERO, |total, line| {
            line.subtotal().and_then(|subtotal| total.checked_add(subtotal))
        })
        .ok_or(LedgerError::TotalOverflow)
}

/// Rounds to cents, midpoint away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage discount and rounds the result to cents.
///
/// A percentage that is not a finite number, or lies outside `0..=100`,
/// leaves the total unchanged (still rounded to cents) and logs a warning.
pub fn apply_discount(total: Decimal, percent: f64) -> Decimal {
    let unchanged = round_cents(total);

    if !percent.is_finite() {
        warn!(%total, percent, "Invalid discount input: percentage must be a number");
        return unchanged;
    }
    if !(0.0..=100.0).contains(&percent) {
        warn!(%total, percent, "Discount percentage out of range, total unchanged");
        return unchanged;
    }
    let Some(percent) = Decimal::from_f64(percent) else {
        warn!(%total, percent, "Discount percentage not representable, total unchanged");
        return unchanged;
    };

    let factor = Decimal::ONE - percent / Decimal::ONE_HUNDRED;
    round_cents(total * factor)
}

/// True when the cart is non-empty and its total reaches `minimum`.
pub fn is_order_valid<'a>(cart: impl Into<Option<&'a Cart>>, minimum: Decimal) -> bool {
    match cart.into() {
        Some(cart) if !cart.is_empty() => try_total(cart).is_ok_and(|total| total >= minimum),
        _ => false,
    }
}

/// Checks whether the cart may be ordered.
///
/// Succeeds without side effects; submission is the caller's business. A
/// refusal says whether the cart was empty or the total too low.
pub fn attempt_order<'a>(
    cart: impl Into<Option<&'a Cart>>,
    minimum: Decimal,
) -> Result<(), LedgerError> {
    let cart = cart.into();
    if is_order_valid(cart, minimum) {
        info!(total = %compute_total(cart), "Order attempt is valid");
        return Ok(());
    }

    let rejection = match cart {
        Some(cart) if !cart.is_empty() => match try_total(cart) {
            Ok(total) => Rejection::BelowMinimum { minimum, total },
            Err(_) => Rejection::TotalOverflow,
        },
        _ => Rejection::EmptyCart,
    };
    warn!(reason = %rejection, "Order attempt rejected");
    Err(rejection.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::{DealOfTheDay, DEFAULT_DEAL_MESSAGE};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn cents(value: i64) -> Decimal {
        Decimal::new(value, 2)
    }

    fn line(id: u32, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            id: MenuItemId(id),
            name: format!("Item {id}"),
            price,
            category: "Mains".to_string(),
            quantity,
        }
    }

    fn cart_of(lines: Vec<CartLine>) -> Cart {
        lines.into_iter().collect()
    }

    // --- add_item ---

    #[test]
    fn test_add_item_appends_new_line() {
        let catalog = Catalog::house_menu();
        let mut cart = Cart::new();

        let updated = add_item(&catalog, &mut cart, MenuItemId(2)).unwrap();
        assert_eq!(updated.len(), 1);

        let line = cart.line(MenuItemId(2)).unwrap();
        assert_eq!(line.name, "Pizza");
        assert_eq!(line.price, cents(1099));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_add_item_increments_existing_line() {
        let catalog = Catalog::house_menu();
        let mut cart = Cart::new();

        add_item(&catalog, &mut cart, MenuItemId(1)).unwrap();
        add_item(&catalog, &mut cart, MenuItemId(1)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(MenuItemId(1)), 2);
    }

    #[test]
    fn test_add_item_keeps_insertion_order() {
        let catalog = Catalog::house_menu();
        let mut cart = Cart::new();

        for id in [4, 1, 5, 1] {
            add_item(&catalog, &mut cart, MenuItemId(id)).unwrap();
        }

        let ids: Vec<u32> = cart.lines().iter().map(|line| line.id.0).collect();
        assert_eq!(ids, vec![4, 1, 5]);
    }

    #[test]
    fn test_add_item_unknown_id() {
        let catalog = Catalog::house_menu();
        let mut cart = Cart::new();

        let err = add_item(&catalog, &mut cart, MenuItemId(42)).unwrap_err();
        assert_eq!(err, LedgerError::MenuItemNotFound(MenuItemId(42)));
        assert!(err.is_not_found());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_deal_item_does_not_change_price() {
        let catalog = Catalog::house_menu().with_deal(DealOfTheDay::default());
        let mut cart = Cart::new();

        add_item(&catalog, &mut cart, MenuItemId(1)).unwrap();
        assert_eq!(compute_total(&cart), cents(899));
    }

    #[test]
    fn test_add_deal_item_logs_deal_message() {
        let catalog = Catalog::house_menu().with_deal(DealOfTheDay::default());
        let mut cart = Cart::new();

        let logs = capture_logs(|| {
            add_item(&catalog, &mut cart, MenuItemId(1)).unwrap();
        });
        assert!(logs.contains(DEFAULT_DEAL_MESSAGE));

        let logs = capture_logs(|| {
            add_item(&catalog, &mut cart, MenuItemId(2)).unwrap();
        });
        assert!(!logs.contains(DEFAULT_DEAL_MESSAGE));
        assert!(logs.contains("Added to cart"));
    }

    #[test]
    fn test_add_item_without_deal_logs_no_message() {
        let catalog = Catalog::house_menu();
        let mut cart = Cart::new();

        let logs = capture_logs(|| {
            add_item(&catalog, &mut cart, MenuItemId(1)).unwrap();
        });
        assert!(!logs.contains(DEFAULT_DEAL_MESSAGE));
    }

    // --- update_quantity ---

    #[test]
    fn test_update_quantity_increments_and_decrements() {
        let mut cart = cart_of(vec![line(1, cents(500), 2)]);

        update_quantity(&mut cart, MenuItemId(1), 3).unwrap();
        assert_eq!(cart.quantity_of(MenuItemId(1)), 5);

        update_quantity(&mut cart, MenuItemId(1), -4).unwrap();
        assert_eq!(cart.quantity_of(MenuItemId(1)), 1);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = cart_of(vec![line(1, cents(500), 1), line(2, cents(250), 3)]);

        let updated = update_quantity(&mut cart, MenuItemId(1), -1).unwrap();
        assert_eq!(updated.len(), 1);
        assert!(cart.line(MenuItemId(1)).is_none());
        assert_eq!(cart.quantity_of(MenuItemId(2)), 3);
    }

    #[test]
    fn test_update_quantity_below_zero_removes_line() {
        let mut cart = cart_of(vec![line(1, cents(500), 2)]);

        update_quantity(&mut cart, MenuItemId(1), -10).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_missing_line() {
        let mut cart = cart_of(vec![line(1, cents(500), 2)]);

        let err = update_quantity(&mut cart, MenuItemId(3), 1).unwrap_err();
        assert_eq!(err, LedgerError::LineNotFound(MenuItemId(3)));
        assert_eq!(cart.quantity_of(MenuItemId(1)), 2);
    }

    // --- compute_total ---

    #[test]
    fn test_compute_total_empty_and_missing() {
        assert_eq!(compute_total(&Cart::new()), Decimal::ZERO);
        assert_eq!(compute_total(None), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_single_item() {
        let cart = cart_of(vec![line(1, cents(899), 1)]);
        assert_eq!(compute_total(&cart), cents(899));
    }

    #[test]
    fn test_compute_total_mixed_quantities() {
        let cart = cart_of(vec![
            line(1, cents(1000), 2),
            line(2, cents(500), 1),
            line(3, cents(250), 3),
        ]);
        assert_eq!(compute_total(&cart), cents(3250));
    }

    #[test]
    fn test_compute_total_zero_price() {
        let cart = cart_of(vec![line(1, Decimal::ZERO, 1), line(2, cents(1000), 1)]);
        assert_eq!(compute_total(&cart), cents(1000));
    }

    #[test]
    fn test_total_overflow() {
        let cart = cart_of(vec![line(1, Decimal::MAX, 1), line(2, Decimal::MAX, 1)]);
        assert_eq!(try_total(&cart), Err(LedgerError::TotalOverflow));
        assert_eq!(compute_total(&cart), Decimal::MAX);

        let cart = cart_of(vec![line(1, Decimal::MAX, u32::MAX)]);
        assert_eq!(try_total(&cart), Err(LedgerError::TotalOverflow));
    }

    #[test]
    fn test_try_total_matches_compute_total() {
        let cart = cart_of(vec![line(1, cents(1000), 2), line(2, cents(500), 1)]);
        assert_eq!(try_total(&cart), Ok(cents(2500)));
        assert_eq!(try_total(None), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_compute_total_does_not_mutate() {
        let cart = cart_of(vec![line(1, cents(1000), 2)]);
        let before = cart.clone();
        let _ = compute_total(&cart);
        assert_eq!(cart, before);
    }

    // --- apply_discount ---

    #[test]
    fn test_apply_discount_in_range() {
        assert_eq!(apply_discount(cents(10000), 10.0), cents(9000));
        assert_eq!(apply_discount(cents(5000), 0.0), cents(5000));
        assert_eq!(apply_discount(cents(5000), 100.0), Decimal::ZERO);
        assert_eq!(apply_discount(cents(1999), 15.0), cents(1699));
    }

    #[test]
    fn test_apply_discount_out_of_range_returns_total() {
        assert_eq!(apply_discount(cents(5000), -5.0), cents(5000));
        assert_eq!(apply_discount(cents(5000), 100.5), cents(5000));
        assert_eq!(apply_discount(Decimal::new(12345, 3), 150.0), cents(1235));
    }

    #[test]
    fn test_apply_discount_not_a_number() {
        assert_eq!(apply_discount(cents(5000), f64::NAN), cents(5000));
        assert_eq!(apply_discount(cents(5000), f64::INFINITY), cents(5000));
    }

    #[test]
    fn test_apply_discount_rounds_half_up_at_cent() {
        // 10.01 * 0.5 = 5.005
        assert_eq!(apply_discount(cents(1001), 50.0), cents(501));
        // 0.01 * 0.5 = 0.005
        assert_eq!(apply_discount(cents(1), 50.0), cents(1));
    }

    // --- is_order_valid / attempt_order ---

    #[test]
    fn test_is_order_valid() {
        assert!(!is_order_valid(&Cart::new(), cents(1000)));
        assert!(!is_order_valid(None, cents(1000)));
        assert!(is_order_valid(&cart_of(vec![line(1, cents(1000), 2)]), cents(1500)));
        assert!(!is_order_valid(&cart_of(vec![line(1, cents(1000), 1)]), cents(1500)));
    }

    #[test]
    fn test_is_order_valid_at_exact_minimum() {
        let cart = cart_of(vec![line(1, cents(750), 2)]);
        assert!(is_order_valid(&cart, cents(1500)));
    }

    #[test]
    fn test_attempt_order_accepts_valid_cart() {
        let cart = cart_of(vec![line(1, cents(1000), 2)]);
        assert!(attempt_order(&cart, cents(1500)).is_ok());
    }

    #[test]
    fn test_attempt_order_empty_cart_message() {
        let err = attempt_order(&Cart::new(), cents(1000)).unwrap_err();
        assert_eq!(err, LedgerError::OrderRejected(Rejection::EmptyCart));
        assert_eq!(err.to_string(), "Cannot place an order with an empty cart.");

        let err = attempt_order(None, cents(1000)).unwrap_err();
        assert_eq!(err, LedgerError::OrderRejected(Rejection::EmptyCart));
    }

    #[test]
    fn test_attempt_order_below_minimum_message() {
        let cart = cart_of(vec![line(1, cents(1000), 1)]);

        let err = attempt_order(&cart, Decimal::from(15)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::OrderRejected(Rejection::BelowMinimum {
                minimum: Decimal::from(15),
                total: cents(1000),
            })
        );
        assert_eq!(
            err.to_string(),
            "Order total is below the minimum value of $15.00."
        );
    }

    #[test]
    fn test_below_minimum_message_rounds_up() {
        let cart = cart_of(vec![line(1, cents(1000), 1)]);

        let err = attempt_order(&cart, Decimal::new(10005, 3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order total is below the minimum value of $10.01."
        );
    }

    #[test]
    fn test_attempt_order_rejects_overflowing_total() {
        let cart = cart_of(vec![line(1, Decimal::MAX, 2)]);

        assert!(!is_order_valid(&cart, Decimal::ZERO));
        assert_eq!(
            attempt_order(&cart, Decimal::ZERO).unwrap_err(),
            LedgerError::OrderRejected(Rejection::TotalOverflow)
        );
    }
}
