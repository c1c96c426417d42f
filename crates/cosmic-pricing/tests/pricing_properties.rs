use cosmic_common::{round_to_cents, Actor, CatalogItem, DiscountRule, PricingError};
use cosmic_pricing::checkout::{Cart, CartLine, CheckoutAggregator};
use cosmic_pricing::compute_price;
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn price_strategy() -> impl Strategy<Value = Decimal> {
    // whole cents up to 1M
    (0_i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Accessories".to_string()),
        Just("Laptops".to_string()),
        Just("accessories".to_string()),
        "[A-Za-z]{1,12}",
    ]
}

fn actor_strategy() -> impl Strategy<Value = Actor> {
    prop_oneof![
        Just(Actor::Anonymous),
        Just(Actor::identified(0)),
        (0_u64..5_000).prop_map(Actor::identified),
        any::<u64>().prop_map(Actor::identified),
    ]
}

fn item(price: Decimal, category: &str) -> CatalogItem {
    CatalogItem::new("p", price, category).expect("valid item")
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn anonymous_never_discounted(price in price_strategy(), category in category_strategy()) {
        let decision = compute_price(&item(price, &category), &Actor::Anonymous);
        prop_assert_eq!(decision.final_price, decision.original_price);
        prop_assert!(!decision.discount_applied);
        prop_assert!(decision.reason.is_none());
    }

    #[test]
    fn gold_ignores_category(
        price in price_strategy(),
        category in category_strategy(),
        points in 1001_u64..1_000_000,
    ) {
        let decision = compute_price(&item(price, &category), &Actor::identified(points));
        prop_assert_eq!(decision.final_price, round_to_cents(price * dec!(0.9)));
        prop_assert_eq!(decision.reason.as_deref(), Some("Gold Member 10% Discount"));
    }

    #[test]
    fn welcome_above_floor(cents in 5_001_i64..10_000_000, category in category_strategy()) {
        let price = Decimal::new(cents, 2);
        let decision = compute_price(&item(price, &category), &Actor::identified(0));
        prop_assert_eq!(decision.final_price, round_to_cents(price - dec!(5)));
        prop_assert_eq!(decision.reason.as_deref(), Some("New Member Welcome Discount"));
    }

    #[test]
    fn new_member_below_floor_pays_list(cents in 0_i64..=5_000) {
        let price = Decimal::new(cents, 2);
        let decision = compute_price(&item(price, "Laptops"), &Actor::identified(0));
        prop_assert!(!decision.discount_applied);
        prop_assert_eq!(decision.final_price, price);
    }

    #[test]
    fn member_accessory_offer(price in price_strategy(), points in 1_u64..=1000) {
        let decision = compute_price(&item(price, "Accessories"), &Actor::identified(points));
        prop_assert_eq!(decision.final_price, round_to_cents(price * dec!(0.95)));
        prop_assert_eq!(decision.rule, Some(DiscountRule::AccessoryOffer));
    }

    #[test]
    fn decision_invariants(
        price in price_strategy(),
        category in category_strategy(),
        actor in actor_strategy(),
    ) {
        let decision = compute_price(&item(price, &category), &actor);

        prop_assert!(decision.final_price <= decision.original_price);
        prop_assert!(decision.final_price >= Decimal::ZERO);
        prop_assert_eq!(decision.original_price, price);
        prop_assert_eq!(decision.discount_applied, decision.reason.is_some());
        prop_assert_eq!(decision.discount_applied, decision.rule.is_some());
        prop_assert!(decision.final_price.normalize().scale() <= 2);

        // pure: same inputs, identical decision
        let again = compute_price(&item(price, &category), &actor);
        prop_assert_eq!(again, decision);
    }

    #[test]
    fn sub_cent_prices_rejected(cents in 0_i64..100_000_000, extra in 1_i64..10) {
        let price = Decimal::new(cents * 10 + extra, 3);
        prop_assert_eq!(
            CatalogItem::new("p", price, "Laptops").unwrap_err(),
            PricingError::SubCentPrice { price }
        );
    }

    #[test]
    fn anonymous_matches_unmatched_member(price in price_strategy(), points in 1_u64..=1000) {
        let anonymous = compute_price(&item(price, "Laptops"), &Actor::Anonymous);
        let member = compute_price(&item(price, "Laptops"), &Actor::identified(points));
        prop_assert_eq!(anonymous, member);
    }

    #[test]
    fn monotonic_within_branch(
        a in price_strategy(),
        b in price_strategy(),
        category in category_strategy(),
        actor in actor_strategy(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let lo = compute_price(&item(low, &category), &actor);
        let hi = compute_price(&item(high, &category), &actor);
        if lo.rule == hi.rule {
            prop_assert!(lo.final_price <= hi.final_price);
        }
    }

    #[test]
    fn checkout_total_is_sum_of_parts(
        prices in proptest::collection::vec((1_i64..50_000, 1_u32..5), 1..8),
        actor in actor_strategy(),
    ) {
        let lines = prices.iter().enumerate().map(|(i, (cents, qty))| {
            let item = CatalogItem::new(format!("sku-{i}"), Decimal::new(*cents, 2), "Laptops")
                .expect("valid item");
            CartLine::new(item, *qty).expect("valid line")
        });
        let cart = Cart::from_lines(lines);
        let summary = CheckoutAggregator::default().summarize(&cart, &actor).expect("no overflow");

        let line_sum: Decimal = summary.lines.iter().map(|l| l.line_total).sum();
        prop_assert_eq!(summary.subtotal, line_sum);
        prop_assert_eq!(summary.total, summary.subtotal + summary.shipping + summary.tax);
        prop_assert!(summary.savings >= Decimal::ZERO);
        if summary.subtotal > dec!(300) {
            prop_assert_eq!(summary.shipping, Decimal::ZERO);
        } else {
            prop_assert_eq!(summary.shipping, dec!(15));
        }
    }
}
