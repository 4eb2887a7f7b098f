/// Property-based tests for bracket generation using proptest
///
/// These tests verify the structural invariants of a single-elimination
/// bracket across a wide range of field sizes.
use league_pairing::bracket::{
    BracketSlot, bracket_size, generate_single_elimination_bracket, seed_order,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn round_one(slots: &[BracketSlot]) -> Vec<&BracketSlot> {
    slots.iter().filter(|s| s.round == 1).collect()
}

proptest! {
    #[test]
    fn test_slot_count_matches_bracket_size(count in 2usize..=512) {
        let slots = generate_single_elimination_bracket(count).unwrap();
        prop_assert_eq!(slots.len(), bracket_size(count) - 1);
    }

    #[test]
    fn test_rounds_halve_down_to_final(count in 2usize..=512) {
        let slots = generate_single_elimination_bracket(count).unwrap();
        let mut expected = bracket_size(count) / 2;
        let mut round = 1u32;
        while expected > 0 {
            let in_round = slots.iter().filter(|s| s.round == round).count();
            prop_assert_eq!(in_round, expected, "round {}", round);
            expected /= 2;
            round += 1;
        }
        let finals: Vec<_> = slots.iter().filter(|s| s.next_position.is_none()).collect();
        prop_assert_eq!(finals.len(), 1);
    }

    #[test]
    fn test_bye_count_and_recipients(count in 2usize..=512) {
        let slots = generate_single_elimination_bracket(count).unwrap();
        let byes: Vec<_> = round_one(&slots).into_iter().filter(|s| s.is_bye).collect();
        prop_assert_eq!(byes.len(), bracket_size(count) - count);

        // Byes belong to the strongest seeds
        let recipients: BTreeSet<u32> = byes.iter().filter_map(|s| s.bye_seed()).collect();
        let strongest: BTreeSet<u32> = (1..=byes.len() as u32).collect();
        prop_assert_eq!(recipients, strongest);

        // A bye never has both sides filled or both empty
        for slot in byes {
            prop_assert!(slot.seed1.is_some() != slot.seed2.is_some());
        }
    }

    #[test]
    fn test_round_one_covers_each_seed_once(count in 2usize..=512) {
        let slots = generate_single_elimination_bracket(count).unwrap();
        let mut seeds: Vec<u32> = round_one(&slots)
            .into_iter()
            .flat_map(|s| [s.seed1, s.seed2])
            .flatten()
            .collect();
        seeds.sort_unstable();
        let expected: Vec<u32> = (1..=count as u32).collect();
        prop_assert_eq!(seeds, expected);
    }

    #[test]
    fn test_wiring_points_to_parent(count in 2usize..=512) {
        let slots = generate_single_elimination_bracket(count).unwrap();
        for slot in &slots {
            if let Some(next) = slot.next_position {
                prop_assert_eq!(next.round, slot.round + 1);
                prop_assert_eq!(next.position, slot.position.div_ceil(2));
                prop_assert_eq!(next.slot, 2 - (slot.position % 2) as u8);
            }
        }
    }

    #[test]
    fn test_seed_pairs_sum_to_complement(exponent in 1u32..=10) {
        // Round-1 opponents always add up to bracket size + 1
        let size = 1usize << exponent;
        let order = seed_order(size).unwrap();
        for pair in order.chunks_exact(2) {
            prop_assert_eq!((pair[0] + pair[1]) as usize, size + 1);
        }
    }
}
