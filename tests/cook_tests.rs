#[cfg(test)]
mod tests {
    use pantry_planner::inventory::InventoryItem;
    use pantry_planner::recipe::{Recipe, RecipeIngredient};
    use pantry_planner::{cook_recipe, EngineConfig};

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_cook_tomato_scenario_hits_zero_not_negative() {
        // 1.5 kg tomato, recipe needs 2 kg: deduct 1.5, land on 0.0.
        let items = vec![InventoryItem::new(1, "tomato")
            .with_quantity(1.5)
            .with_unit("kg")];
        let recipe = Recipe::new("Tomato Chutney")
            .with_ingredient(RecipeIngredient::new("tomato").with_quantity(2.0, "kg"));

        let result = cook_recipe(&recipe, &items, &config());
        assert_eq!(result.deltas.get(&1), Some(&0.0));
        assert_eq!(result.used[0].used, 1.5);
    }

    #[test]
    fn test_deduction_bounds_hold_for_every_item() {
        let items = vec![
            InventoryItem::new(1, "tomato").with_quantity(0.3).with_unit("kg"),
            InventoryItem::new(2, "onion").with_quantity(2.0).with_unit("kg"),
            InventoryItem::new(3, "rice").with_quantity(1.0).with_unit("kg"),
        ];
        let recipe = Recipe::new("Everything Bowl")
            .with_ingredient(RecipeIngredient::new("tomato").with_quantity(1.0, "kg"))
            .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.5, "kg"))
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(1.0, "kg"));

        let result = cook_recipe(&recipe, &items, &config());
        for item in &items {
            let new_remaining = result.deltas.get(&item.id).copied().unwrap();
            assert!(new_remaining >= 0.0);
            assert!(new_remaining <= item.remaining_quantity);
        }
    }

    #[test]
    fn test_unmatched_and_garnish_ingredients() {
        let items = vec![InventoryItem::new(1, "rice")
            .with_quantity(2.0)
            .with_unit("kg")];
        let recipe = Recipe::new("Fancy Rice")
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"))
            .with_ingredient(RecipeIngredient::new("truffle").with_quantity(0.05, "kg"))
            .with_ingredient(RecipeIngredient::new("salt"));

        let result = cook_recipe(&recipe, &items, &config());
        // Truffle is a shortfall; salt (no quantity) is not.
        assert_eq!(result.shortfalls, vec!["truffle".to_string()]);
        assert_eq!(result.deltas.len(), 1);
        assert_eq!(result.deltas.get(&1), Some(&1.5));
    }

    #[test]
    fn test_cook_after_plan_consumes_planned_amounts() {
        // A confirmed plan and a later cook agree on what gets used.
        let items = vec![
            InventoryItem::new(1, "onion").with_quantity(1.0).with_unit("kg"),
            InventoryItem::new(2, "rice").with_quantity(2.0).with_unit("kg"),
        ];
        let recipe = Recipe::new("Onion Rice")
            .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.4, "kg"))
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.5, "kg"));

        let result = cook_recipe(&recipe, &items, &config());
        assert_eq!(result.deltas.get(&1), Some(&0.6));
        assert_eq!(result.deltas.get(&2), Some(&1.5));

        // Applying the deltas and cooking again drains further, still
        // never below zero.
        let after: Vec<InventoryItem> = items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if let Some(new_remaining) = result.deltas.get(&item.id) {
                    item.remaining_quantity = *new_remaining;
                }
                item
            })
            .collect();
        let second = cook_recipe(&recipe, &after, &config());
        let onion_left = *second.deltas.get(&1).unwrap();
        assert!((onion_left - 0.2).abs() < 1e-9);
    }
}
