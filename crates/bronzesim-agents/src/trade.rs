//! Barter against settlement valuations.
//!
//! An agent trades through its household's settlement: for each item it
//! wants (grain, fish, tool, pot, in that order) and does not already
//! hold in quantity, it offers two units of its most-valued surplus item
//! for one unit of the want. The settlement accepts when the offered
//! item is valued at least as highly as the want.

use bronzesim_types::Item;

use crate::agent::{Agent, Settlement};

/// Items an agent tries to acquire, in priority order.
pub const WANTS: [Item; 4] = [Item::Grain, Item::Fish, Item::Tool, Item::Pot];

/// Holding this many of a want satisfies it.
const WANT_SATISFIED_AT: u32 = 3;
/// Minimum stock of an item before it can be offered.
const OFFER_MIN_STOCK: u32 = 6;
/// Units of the offer exchanged for one unit of the want.
const OFFER_UNITS: u32 = 2;
/// Fatigue per completed exchange.
const TRADE_FATIGUE: f32 = 0.01;

/// Run one trading session for the agent at its settlement.
pub fn trade(agent: &mut Agent, settlement: &Settlement) {
    for want in WANTS {
        if agent.stock(want) >= WANT_SATISFIED_AT {
            continue;
        }

        // Offer the most-valued item held in surplus.
        let mut offer = Item::Fish;
        let mut best_score = -1.0_f32;
        for item in Item::ALL {
            if item == want || agent.stock(item) < OFFER_MIN_STOCK {
                continue;
            }
            let score = settlement.valuation(item);
            if score > best_score {
                best_score = score;
                offer = item;
            }
        }
        if agent.stock(offer) < OFFER_MIN_STOCK {
            continue;
        }

        if settlement.valuation(offer) >= settlement.valuation(want)
            && agent.take_stock(offer, OFFER_UNITS)
        {
            agent.add_stock(want, 1);
            agent.add_fatigue(TRADE_FATIGUE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settlement_valuing(pairs: &[(Item, f32)]) -> Settlement {
        let mut settlement = Settlement::default();
        for &(item, value) in pairs {
            if let Some(slot) = settlement.valuations.get_mut(item.index()) {
                *slot = value;
            }
        }
        settlement
    }

    #[test]
    fn surplus_is_swapped_for_a_want() {
        let mut agent = Agent::default();
        agent.add_stock(Item::Wood, 10);
        let settlement = settlement_valuing(&[(Item::Wood, 2.0), (Item::Grain, 1.5)]);
        trade(&mut agent, &settlement);
        // Wood funds grain, fish, and tool; by the pot want the wood
        // stock has dropped below the surplus floor.
        assert_eq!(agent.stock(Item::Grain), 1);
        assert_eq!(agent.stock(Item::Fish), 1);
        assert_eq!(agent.stock(Item::Tool), 1);
        assert_eq!(agent.stock(Item::Pot), 0);
        assert_eq!(agent.stock(Item::Wood), 4);
        assert!((agent.fatigue - 0.03).abs() < 1e-6);
    }

    #[test]
    fn satisfied_wants_are_skipped() {
        let mut agent = Agent::default();
        agent.add_stock(Item::Grain, 3);
        agent.add_stock(Item::Wood, 10);
        let settlement = settlement_valuing(&[(Item::Wood, 2.0)]);
        trade(&mut agent, &settlement);
        assert_eq!(agent.stock(Item::Grain), 3);
    }

    #[test]
    fn no_surplus_means_no_trade() {
        let mut agent = Agent::default();
        agent.add_stock(Item::Wood, 5);
        let settlement = settlement_valuing(&[(Item::Wood, 3.0)]);
        trade(&mut agent, &settlement);
        assert_eq!(agent.stock(Item::Grain), 0);
        assert_eq!(agent.stock(Item::Wood), 5);
        assert!(agent.fatigue.abs() < f32::EPSILON);
    }

    #[test]
    fn undervalued_offers_are_rejected() {
        let mut agent = Agent::default();
        agent.add_stock(Item::Clay, 10);
        let settlement = settlement_valuing(&[(Item::Clay, 0.5), (Item::Grain, 1.5)]);
        trade(&mut agent, &settlement);
        assert_eq!(agent.stock(Item::Grain), 0);
        assert_eq!(agent.stock(Item::Clay), 10);
    }

    #[test]
    fn highest_valued_surplus_is_offered() {
        let mut agent = Agent::default();
        agent.add_stock(Item::Clay, 6);
        agent.add_stock(Item::Bronze, 6);
        let settlement =
            settlement_valuing(&[(Item::Clay, 1.1), (Item::Bronze, 1.9), (Item::Grain, 1.2)]);
        trade(&mut agent, &settlement);
        // Bronze outranks clay, so bronze funds the grain.
        assert_eq!(agent.stock(Item::Bronze), 4);
        assert_eq!(agent.stock(Item::Clay), 6);
        assert_eq!(agent.stock(Item::Grain), 1);
    }

    #[test]
    fn each_exchange_costs_fatigue() {
        let mut agent = Agent::default();
        agent.add_stock(Item::Wood, 20);
        let settlement = settlement_valuing(&[(Item::Wood, 2.0)]);
        trade(&mut agent, &settlement);
        // All four wants were funded.
        assert!((agent.fatigue - 0.04).abs() < 1e-6);
    }
}
