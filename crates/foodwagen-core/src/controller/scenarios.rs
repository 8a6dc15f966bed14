//! Storefront Scenarios
//!
//! Listing, form and delete controllers driven together against the
//! in-memory store, the way the page wires them.

#[cfg(test)]
mod tests {
    use crate::controller::{
        DeleteController, DeleteOutcome, FormController, FormPhase, ListingController, LoadOutcome,
        SubmitOutcome,
    };
    use crate::error::StoreError;
    use crate::models::FormField;
    use crate::store::{MemoryFoodStore, StoreOp};

    fn fill_new_meal(form: &mut FormController, price: &str) {
        for (field, value) in [
            (FormField::FoodName, "Margherita"),
            (FormField::FoodRating, "4.5"),
            (FormField::FoodImage, "https://img.test/margherita.png"),
            (FormField::FoodPrice, price),
            (FormField::RestaurantName, "Luigi's"),
            (FormField::RestaurantLogo, "https://img.test/luigi.png"),
            (FormField::RestaurantStatus, "Open Now"),
        ] {
            form.edit_field(field, value.to_string());
        }
    }

    #[tokio::test]
    async fn test_create_then_edit_price_round_trip() {
        let store = MemoryFoodStore::new();
        let mut listing = ListingController::new();
        let mut form = FormController::new();

        listing.load(&store, None).await;
        assert!(listing.is_empty());

        form.open_create();
        fill_new_meal(&mut form, "10.00");
        assert!(matches!(form.submit(&store).await, Ok(SubmitOutcome::Saved(_))));
        form.close();
        assert_eq!(listing.load(&store, None).await, LoadOutcome::Replaced(1));
        assert_eq!(listing.foods()[0].display_price(), "10.00");

        let created = listing.foods()[0].clone();
        form.open_edit(&created);
        assert_eq!(form.value(FormField::FoodPrice), "10.00");
        form.edit_field(FormField::FoodPrice, "12.50".to_string());
        assert!(matches!(form.submit(&store).await, Ok(SubmitOutcome::Saved(_))));
        assert_eq!(form.phase(), FormPhase::Saved);
        form.close();

        listing.load(&store, None).await;
        let updated = &listing.foods()[0];
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.price, "12.50");
        assert_eq!(updated.display_price(), "12.50");

        assert_eq!(
            store.journal(),
            vec![
                StoreOp::List(None),
                StoreOp::Create("Margherita".to_string()),
                StoreOp::List(None),
                StoreOp::Update(created.id.clone()),
                StoreOp::List(None),
            ]
        );
    }

    #[tokio::test]
    async fn test_cancelled_dialog_still_refreshes_after_create() {
        let store = MemoryFoodStore::new();
        let mut listing = ListingController::new();
        let mut form = FormController::new();
        listing.load(&store, None).await;

        form.open_create();
        fill_new_meal(&mut form, "9.50");
        let submission = form.begin_submit().unwrap();
        form.close();

        let result = submission.send(&store).await;
        let outcome = form.finish_submit(submission.ticket, result);
        assert!(matches!(outcome, SubmitOutcome::SavedAfterClose(_)));
        if outcome.wrote() {
            listing.load(&store, None).await;
        }

        assert_eq!(listing.foods().len(), 1);
        assert_eq!(listing.foods()[0].display_price(), "9.50");
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_refresh_failure_after_delete_keeps_cards() {
        let store = MemoryFoodStore::new();
        let mut listing = ListingController::new();
        let mut form = FormController::new();
        let mut dialog = DeleteController::new();

        for price in ["3", "4"] {
            form.open_create();
            fill_new_meal(&mut form, price);
            form.submit(&store).await.unwrap();
        }
        form.close();
        listing.load(&store, None).await;
        assert_eq!(listing.foods().len(), 2);

        dialog.open(listing.foods()[0].clone());
        assert!(matches!(dialog.remove(&store).await, Some(DeleteOutcome::Deleted(_))));

        store.fail_with(StoreError::Status(503));
        let shown = listing.foods().to_vec();
        assert_eq!(listing.load(&store, None).await, LoadOutcome::Kept(StoreError::Status(503)));
        assert_eq!(listing.foods(), shown.as_slice());
        assert!(!listing.is_loading());
    }
}
