//! Text level format.
//!
//! ```text
//! update = 5;
//! newplane = 5;
//! width = 30;
//! height = 21;
//! exit:    ( 12 0 w ) ( 29 7 d );
//! beacon:  ( 12 7 ) ( 12 17 );
//! airport: ( 20 15 w );
//! line:    [ ( 1 1 ) ( 6 6 ) ];
//! ```
//!
//! Statements end with `;` and may span lines. The four scalars must each be
//! declared exactly once, before any entity declaration.

use glam::IVec2;
use tracing::debug;

use atc_core::constants::{MAX_ARENA_SIZE, MIN_ARENA_SIZE, MIN_DESTINATIONS, MIN_PERIOD};
use atc_core::geometry::{Airport, Beacon, Exit, Geometry, Line};
use atc_core::octant;

use crate::error::LevelError;

/// Parse an anonymous level.
pub fn parse(text: &str) -> Result<Geometry, LevelError> {
    parse_named("level", text)
}

/// Parse a level, naming it in syntax errors.
pub fn parse_named(name: &str, text: &str) -> Result<Geometry, LevelError> {
    let mut builder = LevelBuilder::default();
    for statement in statements(name, text)? {
        builder.apply(name, &statement)?;
    }
    let geometry = builder.finish()?;
    debug!(
        level = name,
        width = geometry.width,
        height = geometry.height,
        exits = geometry.exits.len(),
        airports = geometry.airports.len(),
        beacons = geometry.beacons.len(),
        "parsed level"
    );
    Ok(geometry)
}

/// Split into `;`-terminated statements with whitespace runs collapsed.
fn statements(name: &str, text: &str) -> Result<Vec<String>, LevelError> {
    let mut pieces: Vec<String> = text
        .split(';')
        .map(|piece| piece.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    // Whatever follows the last `;` is unterminated.
    if let Some(tail) = pieces.pop() {
        if !tail.is_empty() {
            return Err(LevelError::Syntax {
                level: name.to_string(),
                statement: tail,
            });
        }
    }
    Ok(pieces.into_iter().filter(|s| !s.is_empty()).collect())
}

#[derive(Debug, Clone, Copy)]
enum Scalar {
    Update,
    NewPlane,
    Width,
    Height,
}

impl Scalar {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "update" => Some(Self::Update),
            "newplane" => Some(Self::NewPlane),
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::NewPlane => "newplane",
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    fn min(self) -> u32 {
        match self {
            Self::Update | Self::NewPlane => MIN_PERIOD,
            Self::Width | Self::Height => MIN_ARENA_SIZE,
        }
    }

    fn max(self) -> Option<u32> {
        match self {
            Self::Update | Self::NewPlane => None,
            Self::Width | Self::Height => Some(MAX_ARENA_SIZE),
        }
    }
}

/// Arena bounds, available once the scalars are declared.
#[derive(Debug, Clone, Copy)]
struct Arena {
    width: i32,
    height: i32,
}

impl Arena {
    fn is_interior(self, pos: IVec2) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    fn contains(self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn is_on_boundary(self, pos: IVec2) -> bool {
        pos.x == 0 || pos.x == self.width - 1 || pos.y == 0 || pos.y == self.height - 1
    }

    /// Zone code per axis: 0 = low edge, 1 = between, 2 = high edge.
    fn zone(self, pos: IVec2) -> (u8, u8) {
        let axis = |v: i32, size: i32| {
            if v == 0 {
                0
            } else if v == size - 1 {
                2
            } else {
                1
            }
        };
        (axis(pos.x, self.width), axis(pos.y, self.height))
    }

    fn out_of_range(self, kind: &'static str, pos: IVec2) -> LevelError {
        LevelError::PointOutOfRange {
            kind,
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Whether `dir` leaves the arena from a boundary zone.
///
/// ```text
/// 00---10---20        7  0  1
/// |          |         \ | /
/// 01   11   21        6-- --2
/// |          |         / | \
/// 02---12---22        5  4  3
/// ```
fn points_outward(zone: (u8, u8), dir: u8) -> bool {
    match zone {
        (0, 0) => dir == 7,
        (0, 1) => (5..=7).contains(&dir),
        (0, 2) => dir == 5,
        (1, 0) => dir == 7 || dir <= 1,
        // Not on the boundary; unreachable for a validated exit.
        (1, 1) => true,
        (1, 2) => (3..=5).contains(&dir),
        (2, 0) => dir == 1,
        (2, 1) => (1..=3).contains(&dir),
        (2, 2) => dir == 3,
        _ => false,
    }
}

/// Accumulates declarations; converted to a [`Geometry`] only by `finish`.
#[derive(Debug, Default)]
struct LevelBuilder {
    update: Option<i32>,
    new_plane: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
    beacons: Vec<Beacon>,
    exits: Vec<Exit>,
    airports: Vec<Airport>,
    lines: Vec<Line>,
}

impl LevelBuilder {
    fn slot(&mut self, scalar: Scalar) -> &mut Option<i32> {
        match scalar {
            Scalar::Update => &mut self.update,
            Scalar::NewPlane => &mut self.new_plane,
            Scalar::Width => &mut self.width,
            Scalar::Height => &mut self.height,
        }
    }

    fn set(&mut self, scalar: Scalar, value: i32) -> Result<(), LevelError> {
        let slot = self.slot(scalar);
        if slot.is_some() {
            return Err(LevelError::Redefinition {
                field: scalar.name(),
            });
        }
        if value < scalar.min() as i32 {
            return Err(LevelError::TooSmall {
                field: scalar.name(),
                min: scalar.min(),
            });
        }
        if let Some(max) = scalar.max().filter(|&max| value > max as i32) {
            return Err(LevelError::TooLarge {
                field: scalar.name(),
                max,
            });
        }
        *slot = Some(value);
        Ok(())
    }

    fn arena(&self) -> Result<Arena, LevelError> {
        match (self.update, self.new_plane, self.width, self.height) {
            (Some(_), Some(_), Some(width), Some(height)) => Ok(Arena { width, height }),
            _ => Err(LevelError::MissingScalars),
        }
    }

    fn apply(&mut self, level: &str, statement: &str) -> Result<(), LevelError> {
        let syntax = || LevelError::Syntax {
            level: level.to_string(),
            statement: format!("{statement};"),
        };
        let scan_error = |err: ScanError| match err {
            ScanError::Malformed => syntax(),
            ScanError::BadDirection(key) => LevelError::BadDirection { key },
            ScanError::Overflow(digits) => LevelError::NumberTooLarge { digits },
        };

        if let Some((name, value)) = statement.split_once('=') {
            let scalar = Scalar::from_name(name.trim()).ok_or_else(syntax)?;
            let mut scanner = Scanner::new(value);
            let value = scanner.number().map_err(scan_error)?;
            if !scanner.at_end() {
                return Err(syntax());
            }
            return self.set(scalar, value);
        }

        let Some((kind, body)) = statement.split_once(':') else {
            return Err(syntax());
        };
        let kind = kind.trim();
        if !matches!(kind, "beacon" | "exit" | "airport" | "line") {
            return Err(syntax());
        }
        let arena = self.arena()?;
        let mut scanner = Scanner::new(body);

        match kind {
            "beacon" => {
                for pos in scanner.many(Scanner::point).map_err(scan_error)? {
                    if !arena.is_interior(pos) {
                        return Err(arena.out_of_range("beacon", pos));
                    }
                    self.beacons.push(Beacon { pos });
                }
            }
            "airport" => {
                for (pos, dir) in scanner.many(Scanner::directed_point).map_err(scan_error)? {
                    if !arena.is_interior(pos) {
                        return Err(arena.out_of_range("airport", pos));
                    }
                    self.airports.push(Airport { pos, dir });
                }
            }
            "exit" => {
                for (pos, dir) in scanner.many(Scanner::directed_point).map_err(scan_error)? {
                    if !arena.contains(pos) || !arena.is_on_boundary(pos) {
                        return Err(LevelError::NotOnEdge { x: pos.x, y: pos.y });
                    }
                    if !points_outward(arena.zone(pos), dir) {
                        return Err(LevelError::BadExitDirection {
                            x: pos.x,
                            y: pos.y,
                            dir,
                        });
                    }
                    self.exits.push(Exit { pos, dir });
                }
            }
            _ => {
                for line in scanner.many(Scanner::line).map_err(scan_error)? {
                    for end in [line.from, line.to] {
                        if !arena.contains(end) {
                            return Err(arena.out_of_range("line endpoint", end));
                        }
                    }
                    let span = (line.to - line.from).abs();
                    if span.x != span.y && span.x != 0 && span.y != 0 {
                        return Err(LevelError::BadLine {
                            from: (line.from.x, line.from.y),
                            to: (line.to.x, line.to.y),
                        });
                    }
                    self.lines.push(line);
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Geometry, LevelError> {
        let (Some(update), Some(new_plane), Some(width), Some(height)) =
            (self.update, self.new_plane, self.width, self.height)
        else {
            return Err(LevelError::MissingScalars);
        };

        let found = self.exits.len() + self.airports.len();
        if found < MIN_DESTINATIONS {
            return Err(LevelError::InsufficientDestinations { found });
        }

        Ok(Geometry {
            width,
            height,
            update_secs: update as u32,
            new_plane_time: new_plane as u32,
            beacons: self.beacons,
            exits: self.exits,
            airports: self.airports,
            lines: self.lines,
        })
    }
}

#[derive(Debug, Clone)]
enum ScanError {
    Malformed,
    BadDirection(char),
    Overflow(String),
}

/// Cursor over the body of one statement.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn at_end(&mut self) -> bool {
        self.rest = self.rest.trim_start();
        self.rest.is_empty()
    }

    fn expect(&mut self, c: char) -> Result<(), ScanError> {
        self.rest = self.rest.trim_start();
        self.rest = self.rest.strip_prefix(c).ok_or(ScanError::Malformed)?;
        Ok(())
    }

    fn number(&mut self) -> Result<i32, ScanError> {
        self.rest = self.rest.trim_start();
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Err(ScanError::Malformed);
        }
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        digits
            .parse()
            .map_err(|_| ScanError::Overflow(digits.to_string()))
    }

    fn direction(&mut self) -> Result<u8, ScanError> {
        self.rest = self.rest.trim_start();
        let mut chars = self.rest.chars();
        let key = chars.next().ok_or(ScanError::Malformed)?;
        if !key.is_ascii_alphabetic() {
            return Err(ScanError::Malformed);
        }
        self.rest = chars.as_str();
        // Level text takes lowercase keys only.
        if key.is_ascii_uppercase() {
            return Err(ScanError::BadDirection(key));
        }
        octant::from_key(key).ok_or(ScanError::BadDirection(key))
    }

    /// `( x y )`
    fn point(&mut self) -> Result<IVec2, ScanError> {
        self.expect('(')?;
        let x = self.number()?;
        let y = self.number()?;
        self.expect(')')?;
        Ok(IVec2::new(x, y))
    }

    /// `( x y d )`
    fn directed_point(&mut self) -> Result<(IVec2, u8), ScanError> {
        self.expect('(')?;
        let x = self.number()?;
        let y = self.number()?;
        let dir = self.direction()?;
        self.expect(')')?;
        Ok((IVec2::new(x, y), dir))
    }

    /// `[ ( x1 y1 ) ( x2 y2 ) ]`
    fn line(&mut self) -> Result<Line, ScanError> {
        self.expect('[')?;
        let from = self.point()?;
        let to = self.point()?;
        self.expect(']')?;
        Ok(Line { from, to })
    }

    /// Repeat `item` until the input is exhausted.
    fn many<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ScanError>,
    ) -> Result<Vec<T>, ScanError> {
        let mut items = Vec::new();
        while !self.at_end() {
            items.push(item(self)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outward_corners_allow_one_heading() {
        let corners = [((0, 0), 7), ((2, 0), 1), ((2, 2), 3), ((0, 2), 5)];
        for (zone, good) in corners {
            for dir in 0..8 {
                assert_eq!(points_outward(zone, dir), dir == good, "{zone:?} {dir}");
            }
        }
    }

    #[test]
    fn test_outward_edges_allow_three_headings() {
        let allowed: Vec<u8> = (0..8).filter(|&d| points_outward((1, 0), d)).collect();
        assert_eq!(allowed, vec![0, 1, 7]);
        let allowed: Vec<u8> = (0..8).filter(|&d| points_outward((2, 1), d)).collect();
        assert_eq!(allowed, vec![1, 2, 3]);
        let allowed: Vec<u8> = (0..8).filter(|&d| points_outward((1, 2), d)).collect();
        assert_eq!(allowed, vec![3, 4, 5]);
        let allowed: Vec<u8> = (0..8).filter(|&d| points_outward((0, 1), d)).collect();
        assert_eq!(allowed, vec![5, 6, 7]);
        assert!((0..8).all(|d| points_outward((1, 1), d)));
    }

    #[test]
    fn test_statements_collapse_whitespace() {
        let parsed = statements("t", "  width =\n 10 ;\n\n exit: (0 1 a)\n (9 1 d);").unwrap();
        assert_eq!(parsed, vec!["width = 10", "exit: (0 1 a) (9 1 d)"]);
    }

    #[test]
    fn test_unterminated_statement_is_syntax_error() {
        let err = statements("t", "width = 10;\nheight = 10").unwrap_err();
        assert_eq!(
            err,
            LevelError::Syntax {
                level: "t".to_string(),
                statement: "height = 10".to_string()
            }
        );
    }

    #[test]
    fn test_scanner_reads_directed_points() {
        let mut scanner = Scanner::new(" ( 3 4 d )(0 9 q) ");
        let points = scanner.many(Scanner::directed_point).ok().unwrap();
        assert_eq!(points, vec![(IVec2::new(3, 4), 2), (IVec2::new(0, 9), 7)]);
    }

    #[test]
    fn test_scanner_rejects_uppercase_direction() {
        let mut scanner = Scanner::new("(0 9 Q)");
        assert!(matches!(
            scanner.directed_point(),
            Err(ScanError::BadDirection('Q'))
        ));
    }
}
