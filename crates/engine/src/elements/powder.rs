//! Powder: falls, then slides diagonally; sinks through liquids by swapping.

use crate::api::CellApi;
use crate::cell::MaterialClass;

/// Powder can move into air and displace any liquid.
fn yields_to_powder(class: MaterialClass) -> bool {
    matches!(class, MaterialClass::Empty | MaterialClass::Liquid)
}

/// Take up to `weight` steps down, or diagonally down on the tick's
/// preferred side first. Stops at the first step with nowhere to go.
pub fn update_powder(api: &mut CellApi) {
    let weight = api.grid.registry().weight(api.material());
    for _ in 0..weight {
        let targets = api.fall_targets();
        if !api.try_move(&targets, yields_to_powder) {
            break;
        }
    }
    api.settle();
}
