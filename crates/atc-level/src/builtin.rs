//! Levels bundled with the game.

use atc_core::geometry::Geometry;

use crate::error::LevelError;
use crate::parser::parse_named;

/// Level loaded when none is chosen.
pub const DEFAULT_LEVEL: &str = "default";

const LEVELS: &[(&str, &str)] = &[
    ("default", DEFAULT),
    ("easy", EASY),
    ("crossover", CROSSOVER),
    ("novice", NOVICE),
];

const DEFAULT: &str = "
update = 5;
newplane = 5;
width = 30;
height = 21;

exit:    ( 12 0 w ) ( 29 0 e ) ( 29 7 d ) ( 29 17 d )
         ( 9 20 z ) ( 0 13 a ) ( 0 7 a ) ( 0 0 q );
beacon:  ( 12 7 ) ( 12 17 );
airport: ( 20 15 w ) ( 20 18 d );
line:    [ ( 1 1 ) ( 6 6 ) ]
         [ ( 12 1 ) ( 12 6 ) ]
         [ ( 13 7 ) ( 28 7 ) ]
         [ ( 28 1 ) ( 13 16 ) ]
         [ ( 1 13 ) ( 11 13 ) ]
         [ ( 12 8 ) ( 12 16 ) ]
         [ ( 11 18 ) ( 10 19 ) ]
         [ ( 13 17 ) ( 28 17 ) ]
         [ ( 1 7 ) ( 11 7 ) ];
";

const EASY: &str = "
update = 7;
newplane = 12;
width = 15;
height = 15;

exit:    ( 7 0 w ) ( 14 7 d ) ( 7 14 x ) ( 0 7 a );
beacon:  ( 7 7 );
airport: ( 3 11 w );
line:    [ ( 1 7 ) ( 13 7 ) ] [ ( 7 1 ) ( 7 13 ) ];
";

const CROSSOVER: &str = "
update = 5;
newplane = 5;
width = 21;
height = 21;

exit:    ( 0 0 q ) ( 20 0 e ) ( 20 20 c ) ( 0 20 z ) ( 10 0 w ) ( 10 20 x );
beacon:  ( 10 10 ) ( 5 5 ) ( 15 15 );
airport: ( 5 15 d ) ( 15 5 a );
line:    [ ( 1 1 ) ( 19 19 ) ] [ ( 19 1 ) ( 1 19 ) ];
";

const NOVICE: &str = "
update = 6;
newplane = 8;
width = 12;
height = 10;

exit:    ( 0 4 a ) ( 11 4 d );
beacon:  ( 6 4 );
airport: ( 6 6 d );
";

/// Names of the built-in levels, default first.
pub fn names() -> impl Iterator<Item = &'static str> {
    LEVELS.iter().map(|(name, _)| *name)
}

/// Source text of a built-in level.
pub fn source(name: &str) -> Option<&'static str> {
    LEVELS
        .iter()
        .find(|(level, _)| *level == name)
        .map(|(_, text)| *text)
}

/// Parse a built-in level by name.
pub fn load(name: &str) -> Result<Geometry, LevelError> {
    let text = source(name).ok_or_else(|| LevelError::UnknownLevel {
        name: name.to_string(),
    })?;
    parse_named(name, text)
}
