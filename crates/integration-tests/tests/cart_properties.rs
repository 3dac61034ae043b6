//! Property tests over random command sequences.

use proptest::prelude::*;
use shop_cart_core::Price;
use shop_cart_integration_tests::{pid, seeded_session, visible_ids};
use shop_cart_storefront::Command;

fn arb_command() -> impl Strategy<Value = Command> {
    // Ids 0 and 7 are outside the seed catalog.
    let id = (0..=7i32).prop_map(pid);
    prop_oneof![
        id.clone().prop_map(|product_id| Command::ToggleFavorite { product_id }),
        id.clone().prop_map(|product_id| Command::AddToCart { product_id }),
        (id.clone(), -5i64..=5)
            .prop_map(|(product_id, delta)| Command::UpdateQuantity { product_id, delta }),
        id.prop_map(|product_id| Command::RemoveFromCart { product_id }),
        Just(Command::ClearCart),
        any::<bool>().prop_map(|enabled| Command::SetFavoritesOnly { enabled }),
    ]
}

proptest! {
    #[test]
    fn cart_invariants_hold(commands in proptest::collection::vec(arb_command(), 0..60)) {
        let mut session = seeded_session();
        session.dispatch_all(&commands);

        let lines = session.cart().lines();
        prop_assert!(lines.iter().all(|l| l.quantity >= 1));

        let mut ids: Vec<i32> = lines.iter().map(|l| l.product_id.as_i32()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), lines.len(), "duplicate cart lines");

        let expected: u64 = lines.iter().map(|l| l.price.amount() * u64::from(l.quantity)).sum();
        prop_assert_eq!(session.cart().total(), Price::new(expected));
    }

    #[test]
    fn favorites_view_is_subsequence(commands in proptest::collection::vec(arb_command(), 0..60)) {
        let mut session = seeded_session();
        session.dispatch_all(&commands);

        session.dispatch(&Command::SetFavoritesOnly { enabled: false });
        let all = visible_ids(&session);
        session.dispatch(&Command::SetFavoritesOnly { enabled: true });
        let favorites = visible_ids(&session);

        prop_assert_eq!(all.len(), 6);
        let mut rest = all.iter();
        for id in &favorites {
            prop_assert!(rest.any(|a| a == id));
        }
    }

    #[test]
    fn unknown_ids_never_change_state(id in prop_oneof![-3..=0i32, 7..100i32], delta in -3i64..=3) {
        let mut session = seeded_session();
        let catalog = session.catalog().clone();
        let cart = session.cart().clone();

        session.dispatch_all(&[
            Command::ToggleFavorite { product_id: pid(id) },
            Command::AddToCart { product_id: pid(id) },
            Command::UpdateQuantity { product_id: pid(id), delta },
            Command::RemoveFromCart { product_id: pid(id) },
        ]);

        prop_assert_eq!(session.catalog(), &catalog);
        prop_assert_eq!(session.cart(), &cart);
    }
}
