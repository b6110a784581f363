//! Material and class types for the simulation grid.

use std::fmt;

use serde::Deserialize;

use crate::error::UnknownClass;

/// Discriminant values are the bytes handed to the renderer and the
/// `index` field of the elements file — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Material {
    #[default]
    Air = 0,
    Sand = 1,
    Stone = 2,
    Water = 3,
    Bedrock = 4,
}

impl Material {
    /// Number of materials; sizes every per-material table.
    pub const COUNT: usize = 5;

    /// Every material in ordinal order.
    pub const ALL: [Material; Self::COUNT] = [
        Material::Air,
        Material::Sand,
        Material::Stone,
        Material::Water,
        Material::Bedrock,
    ];

    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "Air"),
            Self::Sand => write!(f, "Sand"),
            Self::Stone => write!(f, "Stone"),
            Self::Water => write!(f, "Water"),
            Self::Bedrock => write!(f, "Bedrock"),
        }
    }
}

/// Physical class of a material. Selects the movement rule in `Grid::update`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum MaterialClass {
    #[default]
    Empty = 0,
    Powder = 1,
    Solid = 2,
    Liquid = 3,
    Gas = 4,
}

impl TryFrom<u8> for MaterialClass {
    type Error = UnknownClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Powder),
            2 => Ok(Self::Solid),
            3 => Ok(Self::Liquid),
            4 => Ok(Self::Gas),
            other => Err(UnknownClass(other)),
        }
    }
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Powder => write!(f, "Powder"),
            Self::Solid => write!(f, "Solid"),
            Self::Liquid => write!(f, "Liquid"),
            Self::Gas => write!(f, "Gas"),
        }
    }
}

/// RGBA8 display color. Presentation only; the engine never reads it.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Deserialize)]
#[serde(from = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}
