//! Edge actions: pure functions over a command [`Context`].
//!
//! Each action receives the key its edge accepted. Actions only ever edit
//! the context's copy of the selected aircraft.

use atc_core::constants::CEILING;
use atc_core::enums::{PlaceKind, PlaneStatus};
use atc_core::fleet::Fleet;
use atc_core::geometry::Geometry;
use atc_core::octant;
use atc_core::plane::Plane;
use atc_core::types::{Course, PlaneId};

use crate::error::CommandError;

pub type Action = fn(&mut Context<'_>, char) -> Result<(), CommandError>;

/// Which way a relative turn or altitude change goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Left,
    Right,
    Up,
    Down,
}

/// Working state while a command is replayed.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    pub geometry: &'a Geometry,
    pub fleet: &'a Fleet,
    /// Copy of the selected aircraft.
    pub plane: Option<Plane>,
    /// Kind of place named after "towards".
    pub target: Option<PlaceKind>,
    /// Number of the place named after "towards".
    pub target_no: Option<usize>,
    pub sense: Option<Sense>,
}

impl<'a> Context<'a> {
    pub fn new(geometry: &'a Geometry, fleet: &'a Fleet) -> Self {
        Self {
            geometry,
            fleet,
            plane: None,
            target: None,
            target_no: None,
            sense: None,
        }
    }

    fn plane(&mut self) -> Result<&mut Plane, CommandError> {
        self.plane.as_mut().ok_or(CommandError::UnknownPlane)
    }
}

fn digit(key: char) -> usize {
    key.to_digit(10).unwrap_or(0) as usize
}

fn heading(key: char) -> u8 {
    octant::from_key(key).unwrap_or(0)
}

// ---- Selection ----

pub fn set_plane(ctx: &mut Context<'_>, key: char) -> Result<(), CommandError> {
    let plane = PlaneId::from_letter(key)
        .and_then(|id| ctx.fleet.get(id))
        .ok_or(CommandError::UnknownPlane)?;
    ctx.plane = Some(plane.clone());
    Ok(())
}

// ---- Heading ----

/// Any new heading order replaces a pending delay.
pub fn turn(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    let plane = ctx.plane()?;
    if plane.altitude == 0 {
        return Err(CommandError::TurnOnGround);
    }
    plane.delay = None;
    Ok(())
}

pub fn circle(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    let plane = ctx.plane()?;
    if plane.altitude == 0 {
        return Err(CommandError::CircleOnGround);
    }
    plane.course = Course::Circling;
    plane.delay = None;
    Ok(())
}

fn turn_by(ctx: &mut Context<'_>, delta: i32) -> Result<(), CommandError> {
    let plane = ctx.plane()?;
    plane.course = Course::Heading(octant::rotate(plane.dir, delta));
    Ok(())
}

pub fn left(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    ctx.sense = Some(Sense::Left);
    turn_by(ctx, -1)
}

pub fn right(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    ctx.sense = Some(Sense::Right);
    turn_by(ctx, 1)
}

pub fn hard_left(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    turn_by(ctx, -2)
}

pub fn hard_right(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    turn_by(ctx, 2)
}

pub fn to_dir(ctx: &mut Context<'_>, key: char) -> Result<(), CommandError> {
    ctx.plane()?.course = Course::Heading(heading(key));
    Ok(())
}

/// Turn by the angle of a direction key, in the sense chosen by `l`/`r`.
pub fn rel_dir(ctx: &mut Context<'_>, key: char) -> Result<(), CommandError> {
    let angle = i32::from(heading(key));
    let sense = ctx.sense;
    match sense {
        Some(Sense::Left) => turn_by(ctx, -angle),
        Some(Sense::Right) => turn_by(ctx, angle),
        _ => Ok(()),
    }
}

// ---- Towards ----

pub fn toward_beacon(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    ctx.target = Some(PlaceKind::Beacon);
    Ok(())
}

pub fn toward_exit(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    ctx.target = Some(PlaceKind::Exit);
    Ok(())
}

pub fn toward_airport(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    ctx.target = Some(PlaceKind::Airport);
    Ok(())
}

/// Head for the numbered place chosen after "towards".
pub fn target_number(ctx: &mut Context<'_>, key: char) -> Result<(), CommandError> {
    let number = digit(key);
    let kind = ctx.target.unwrap_or(PlaceKind::Beacon);
    let pos = ctx
        .geometry
        .place(kind, number)
        .ok_or(CommandError::UnknownPlace(kind))?;
    ctx.target_no = Some(number);

    let plane = ctx.plane()?;
    let offset = pos - plane.pos;
    plane.course = Course::Heading(octant::bearing(offset.x, offset.y));
    Ok(())
}

/// Hold the turn until the aircraft reaches a beacon straight ahead.
///
/// After a "towards" order, the post-beacon heading is worked out from the
/// beacon rather than from where the aircraft is now.
pub fn delay_beacon(ctx: &mut Context<'_>, key: char) -> Result<(), CommandError> {
    let number = digit(key);
    let beacon = ctx
        .geometry
        .beacons
        .get(number)
        .map(|b| b.pos)
        .ok_or(CommandError::UnknownPlace(PlaceKind::Beacon))?;
    let target = match (ctx.target, ctx.target_no) {
        (Some(kind), Some(n)) => ctx.geometry.place(kind, n),
        _ => None,
    };

    let plane = ctx.plane()?;
    if (beacon - plane.pos).signum() != octant::displacement(plane.dir) {
        return Err(CommandError::BeaconNotInPath);
    }
    plane.delay = Some(number);

    if let Some(target) = target {
        let offset = target - beacon;
        if offset.x == 0 && offset.y == 0 {
            return Err(CommandError::AlreadyThere);
        }
        let dir = octant::bearing(offset.x, offset.y);
        if dir == plane.dir {
            return Err(CommandError::AlreadyHeading);
        }
        plane.course = Course::Heading(dir);
    }
    Ok(())
}

// ---- Altitude ----

pub fn climb(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    ctx.sense = Some(Sense::Up);
    Ok(())
}

pub fn descend(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    ctx.sense = Some(Sense::Down);
    Ok(())
}

pub fn set_altitude(ctx: &mut Context<'_>, key: char) -> Result<(), CommandError> {
    let altitude = digit(key) as i32;
    let plane = ctx.plane()?;
    if plane.altitude == altitude && plane.target_altitude == plane.altitude {
        return Err(CommandError::AlreadyAtAltitude);
    }
    plane.target_altitude = altitude;
    Ok(())
}

pub fn set_relative_altitude(ctx: &mut Context<'_>, key: char) -> Result<(), CommandError> {
    let amount = digit(key) as i32;
    if amount == 0 {
        return Err(CommandError::AltitudeUnchanged);
    }
    let sense = ctx.sense;
    let plane = ctx.plane()?;
    let altitude = match sense {
        Some(Sense::Down) => plane.altitude - amount,
        _ => plane.altitude + amount,
    };
    if altitude < 0 {
        return Err(CommandError::AltitudeTooLow);
    }
    if altitude > CEILING {
        return Err(CommandError::AltitudeTooHigh);
    }
    plane.target_altitude = altitude;
    Ok(())
}

// ---- Status ----

fn set_status(ctx: &mut Context<'_>, status: PlaneStatus) -> Result<(), CommandError> {
    let plane = ctx.plane()?;
    if plane.altitude == 0 {
        return Err(CommandError::StatusOnGround(status));
    }
    if plane.status == status {
        return Err(CommandError::AlreadyStatus(status));
    }
    plane.status = status;
    Ok(())
}

pub fn mark(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    set_status(ctx, PlaneStatus::Marked)
}

pub fn unmark(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    set_status(ctx, PlaneStatus::Unmarked)
}

pub fn ignore(ctx: &mut Context<'_>, _key: char) -> Result<(), CommandError> {
    set_status(ctx, PlaneStatus::Ignored)
}
