//! Per-class movement rules dispatched from the update loop.

mod liquid;
mod powder;
#[cfg(test)]
mod settling_test;

pub use liquid::spread;

use crate::api::CellApi;
use crate::cell::MaterialClass;

/// Dispatch to the movement rule for `class`.
///
/// Empty, Solid and Gas never move and are skipped before calling this.
pub fn update_cell(class: MaterialClass, api: &mut CellApi) {
    match class {
        MaterialClass::Powder => powder::update_powder(api),
        MaterialClass::Liquid => liquid::update_liquid(api),
        MaterialClass::Empty | MaterialClass::Solid | MaterialClass::Gas => {}
    }
}
