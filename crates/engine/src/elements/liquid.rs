//! Liquid: falls like powder but only into empty cells, then spreads
//! sideways once it cannot fall any further.

use crate::api::CellApi;
use crate::cell::MaterialClass;

fn is_empty(class: MaterialClass) -> bool {
    class == MaterialClass::Empty
}

pub fn update_liquid(api: &mut CellApi) {
    let registry = api.grid.registry();
    let material = api.material();
    let (weight, viscosity) = (registry.weight(material), registry.viscosity(material));

    for _ in 0..weight {
        let targets = api.fall_targets();
        if !api.try_move(&targets, is_empty) {
            spread(api, viscosity);
            break;
        }
    }
    api.settle();
}

/// Up to `viscosity` one-cell sideways steps, preferred side first.
/// Ends early when both sides are blocked.
pub fn spread(api: &mut CellApi, viscosity: u32) {
    for _ in 0..viscosity {
        let targets = api.side_targets();
        if !api.try_move(&targets, is_empty) {
            break;
        }
    }
}
