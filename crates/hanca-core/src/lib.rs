// hanca-core: alphabet, casing and shared types for the Hanca engine.

pub mod analysis;
pub mod case;
pub mod character;
pub mod enums;
pub mod token;
