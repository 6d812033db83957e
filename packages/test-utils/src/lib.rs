mod datagen;

pub use self::datagen::*;
