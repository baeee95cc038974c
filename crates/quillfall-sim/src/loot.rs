//! Upgrade selection — prosperity-shifted rarity rolls over the catalog.

use quillfall_core::constants::*;
use quillfall_core::enums::Rarity;
use quillfall_core::modifiers::ModifierPipeline;
use quillfall_core::upgrades::{base_catalog, Upgrade};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Options for one selection call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionOptions {
    /// Drop common upgrades from the pool entirely (rigged chests).
    pub exclude_common: bool,
    /// Reserve the first slot for a rare-or-better pick (rigged chests).
    pub guarantee_rare: bool,
}

/// Rarity weights after the prosperity shift.
///
/// A prosperity-proportional fraction of the common and uncommon mass moves
/// into rare/epic/legendary at fixed split ratios. Weights never go
/// negative; `exclude_common` zeroes common before the shift.
pub fn shifted_weights(prosperity: f32, exclude_common: bool) -> [f32; 5] {
    let mut weights = RARITY_WEIGHTS;
    if exclude_common {
        weights[0] = 0.0;
    }

    let shift = prosperity * RARITY_SHIFT_PER_POINT;
    let from_common = weights[0] * shift * RARITY_SHIFT_FROM_COMMON;
    let from_uncommon = weights[1] * shift * RARITY_SHIFT_FROM_UNCOMMON;
    weights[0] -= from_common;
    weights[1] -= from_uncommon;

    let moved = from_common + from_uncommon;
    weights[2] += moved * RARITY_SHIFT_SPLIT[0];
    weights[3] += moved * RARITY_SHIFT_SPLIT[1];
    weights[4] += moved * RARITY_SHIFT_SPLIT[2];
    weights
}

fn roll_rarity(weights: &[f32; 5], rng: &mut ChaCha8Rng) -> Rarity {
    let total: f32 = weights.iter().sum();
    let mut roll = rng.gen_range(0.0..total);
    for (i, w) in weights.iter().enumerate() {
        if roll < *w {
            return Rarity::ALL[i];
        }
        roll -= w;
    }
    Rarity::Legendary
}

/// Draw up to `count` distinct upgrades for a choice screen.
///
/// Filters out upgrades already at their stack cap, rolls a rarity tier
/// from the shifted weights, then picks uniformly within the tier. A
/// rolled tier with no remaining candidates is re-rolled; once the weighted
/// pool runs dry the result is topped up from whatever is left. Fewer than
/// `count` results just means the catalog is exhausted.
pub fn random_upgrades(
    pipeline: &ModifierPipeline,
    count: usize,
    prosperity: f32,
    options: SelectionOptions,
    rng: &mut ChaCha8Rng,
) -> Vec<Upgrade> {
    let mut pool: Vec<Upgrade> = base_catalog()
        .into_iter()
        .filter(|u| match u.max_stacks {
            Some(cap) => pipeline.upgrade_count(&u.id) < cap,
            None => true,
        })
        .filter(|u| !(options.exclude_common && u.rarity == Rarity::Common))
        .collect();

    let weights = shifted_weights(prosperity, options.exclude_common);
    let mut picked: Vec<Upgrade> = Vec::with_capacity(count);

    if options.guarantee_rare && picked.len() < count {
        let rare_indices: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, u)| u.rarity >= Rarity::Rare)
            .map(|(i, _)| i)
            .collect();
        if !rare_indices.is_empty() {
            let idx = rare_indices[rng.gen_range(0..rare_indices.len())];
            picked.push(pool.swap_remove(idx));
        }
    }

    while picked.len() < count && !pool.is_empty() {
        let mut found = false;
        for _ in 0..16 {
            let rarity = roll_rarity(&weights, rng);
            let tier: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|(_, u)| u.rarity == rarity)
                .map(|(i, _)| i)
                .collect();
            if !tier.is_empty() {
                let idx = tier[rng.gen_range(0..tier.len())];
                picked.push(pool.swap_remove(idx));
                found = true;
                break;
            }
        }
        if !found {
            // Every rolled tier came up empty; fill from the leftovers
            let idx = rng.gen_range(0..pool.len());
            picked.push(pool.swap_remove(idx));
        }
    }

    picked
}
