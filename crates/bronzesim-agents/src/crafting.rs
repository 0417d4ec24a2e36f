//! Crafting recipes.
//!
//! The recipe set is closed: pots, bronze, and tools. Each craft op
//! attempts its units independently; a unit without full ingredients is
//! skipped silently, and every completed unit costs fatigue.

use bronzesim_types::Item;

use crate::agent::Agent;

/// A crafting recipe: inputs consumed and fatigue per completed unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    /// The item produced (one per completed unit).
    pub output: Item,
    /// Input materials consumed per unit.
    pub inputs: &'static [(Item, u32)],
    /// Fatigue added per completed unit.
    pub fatigue: f32,
}

/// Look up the recipe for an item. Items without a recipe cannot be
/// crafted; a `craft` op naming one is a no-op.
pub const fn recipe_for(item: Item) -> Option<Recipe> {
    match item {
        Item::Pot => Some(Recipe {
            output: Item::Pot,
            inputs: &[(Item::Clay, 2), (Item::Wood, 1)],
            fatigue: 0.01,
        }),
        Item::Bronze => Some(Recipe {
            output: Item::Bronze,
            inputs: &[(Item::Copper, 1), (Item::Tin, 1), (Item::Wood, 2)],
            fatigue: 0.02,
        }),
        Item::Tool => Some(Recipe {
            output: Item::Tool,
            inputs: &[(Item::Bronze, 1)],
            fatigue: 0.02,
        }),
        _ => None,
    }
}

/// Attempt `amount` crafts of an item against the agent's inventory.
pub fn craft(agent: &mut Agent, item: Item, amount: u32) {
    let Some(recipe) = recipe_for(item) else {
        return;
    };
    for _ in 0..amount {
        let affordable = recipe
            .inputs
            .iter()
            .all(|&(input, need)| agent.stock(input) >= need);
        if !affordable {
            continue;
        }
        for &(input, need) in recipe.inputs {
            let _ = agent.take_stock(input, need);
        }
        agent.add_stock(recipe.output, 1);
        agent.add_fatigue(recipe.fatigue);
    }
}
