#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pantry_planner::inventory::InventoryItem;
    use pantry_planner::recipe::{Recipe, RecipeIngredient};
    use pantry_planner::{plan_meals, EngineConfig};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pantry() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new(1, "onion").with_quantity(1.0).with_unit("kg"),
            InventoryItem::new(2, "tomato").with_quantity(1.5).with_unit("kg"),
            InventoryItem::new(3, "rice").with_quantity(3.0).with_unit("kg"),
            InventoryItem::new(4, "pasta").with_quantity(1.0).with_unit("kg"),
        ]
    }

    #[test]
    fn test_plan_never_over_commits_any_item() {
        let items = pantry();
        let recipes = vec![
            Recipe::new("Onion Rice")
                .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.7, "kg"))
                .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"))
                .with_tags(&["indian"])
                .with_time(20),
            Recipe::new("Onion Pasta")
                .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.6, "kg"))
                .with_ingredient(RecipeIngredient::new("pasta").with_quantity(0.4, "kg"))
                .with_tags(&["italian"])
                .with_time(25),
            Recipe::new("Tomato Rice")
                .with_ingredient(RecipeIngredient::new("tomato").with_quantity(1.0, "kg"))
                .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"))
                .with_tags(&["south-indian"])
                .with_time(30),
        ];

        let plan = plan_meals(&recipes, &items, day(2025, 6, 10), &EngineConfig::default()).unwrap();

        // The core allocation property: per item, reservations across
        // all accepted recipes stay within the snapshot amount.
        for item in &items {
            let reserved: f64 = plan
                .meals
                .iter()
                .flat_map(|meal| meal.reserved.iter())
                .filter(|r| r.item_id == item.id)
                .map(|r| r.quantity)
                .sum();
            assert!(
                reserved <= item.remaining_quantity + 1e-9,
                "item {} over-committed: {} > {}",
                item.name,
                reserved,
                item.remaining_quantity
            );
            assert!((plan.ledger.reserved_for(item.id) - reserved).abs() < 1e-9);
        }
    }

    #[test]
    fn test_contested_onion_scenario() {
        // Two recipes want the same onion; inventory has 1 kg. A is
        // accepted first with 0.7, so B sees 0.3 and covers onion at
        // 0.5, not 1.0.
        let items = vec![
            InventoryItem::new(1, "onion").with_quantity(1.0).with_unit("kg"),
            InventoryItem::new(2, "rice").with_quantity(3.0).with_unit("kg"),
            InventoryItem::new(3, "pasta").with_quantity(1.0).with_unit("kg"),
        ];
        let recipe_a = Recipe::new("A")
            .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.7, "kg"))
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"))
            .with_tags(&["x"])
            .with_time(10);
        let recipe_b = Recipe::new("B")
            .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.6, "kg"))
            .with_ingredient(RecipeIngredient::new("pasta").with_quantity(0.4, "kg"))
            .with_tags(&["y"])
            .with_time(20);

        let plan =
            plan_meals(&[recipe_a, recipe_b], &items, day(2025, 6, 10), &EngineConfig::default())
                .unwrap();
        assert_eq!(plan.meals[0].recipe_title, "A");

        let onion_b = plan.meals[1].reserved.iter().find(|r| r.item_id == 1).unwrap();
        assert!((onion_b.quantity - 0.3).abs() < 1e-9);
        // Effective score for B: onion at 0.5, pasta at 1.0.
        assert!((plan.meals[1].effective_score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_missing_quantity_does_not_crash_planning() {
        // The historical crash: an ingredient without a quantity field
        // read as a required key. It must plan cleanly instead.
        let items = pantry();
        let recipes = vec![Recipe::new("Seasoned Rice")
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"))
            .with_ingredient(RecipeIngredient::new("salt"))
            .with_ingredient(RecipeIngredient::new("pepper").with_bare_quantity(0.0))];

        let plan = plan_meals(&recipes, &items, day(2025, 6, 10), &EngineConfig::default()).unwrap();
        assert_eq!(plan.meals.len(), 1);
        let reserved_ids: Vec<i64> = plan.meals[0].reserved.iter().map(|r| r.item_id).collect();
        assert_eq!(reserved_ids, vec![3]);
    }

    #[test]
    fn test_below_threshold_candidates_are_rejected() {
        let items = vec![InventoryItem::new(1, "saffron").with_quantity(0.1).with_unit("g")];
        // Requires far more saffron than exists: coverage 0.1/10.
        let recipes = vec![Recipe::new("Saffron Feast")
            .with_ingredient(RecipeIngredient::new("saffron").with_quantity(10.0, "g"))];

        let plan = plan_meals(&recipes, &items, day(2025, 6, 10), &EngineConfig::default()).unwrap();
        assert!(plan.meals.is_empty());
        assert!(plan.ledger.is_empty());
    }

    #[test]
    fn test_abandoned_plan_leaves_snapshot_untouched() {
        let items = pantry();
        let before = items.clone();
        let recipes = vec![Recipe::new("Onion Rice")
            .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.5, "kg"))
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"))];

        let plan = plan_meals(&recipes, &items, day(2025, 6, 10), &EngineConfig::default()).unwrap();
        assert_eq!(plan.meals.len(), 1);
        // Dropping the plan is all it takes to abandon it.
        drop(plan);
        assert_eq!(items, before);
    }

    #[test]
    fn test_expiring_stock_prioritized_within_plan() {
        let today = day(2025, 6, 10);
        let items = vec![
            InventoryItem::new(1, "milk")
                .with_quantity(1.0)
                .with_unit("l")
                .with_expiry(day(2025, 6, 11)),
            InventoryItem::new(2, "rice").with_quantity(3.0).with_unit("kg"),
        ];
        let milk_recipe = Recipe::new("Kheer")
            .with_ingredient(RecipeIngredient::new("milk").with_quantity(0.5, "l"))
            .with_tags(&["dessert"])
            .with_time(40);
        let rice_recipe = Recipe::new("Plain Rice")
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"))
            .with_tags(&["staple"])
            .with_time(15);

        let mut config = EngineConfig::default();
        config.planner.target_recipes = 1;
        let plan = plan_meals(&[rice_recipe, milk_recipe], &items, today, &config).unwrap();
        // The expiring milk pushes Kheer ahead of the faster rice.
        assert_eq!(plan.meals[0].recipe_title, "Kheer");
    }
}
