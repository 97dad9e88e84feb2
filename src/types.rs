use serde::{Deserialize, Serialize};

use crate::helpers::wrap_degrees;

///Celestial reference frame qualifying an equatorial coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Frame {
    #[default]
    Icrs,
    Fk5,
}

///Equatorial coordinate pair in decimal degrees, frame qualified.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EquatorialCoord {
    pub ra: f64,
    pub dec: f64,
    pub frame: Frame,
}

impl EquatorialCoord {
    ///Right ascension and declination in decimal degrees, ICRS.
    pub fn from_degrees(ra: f64, dec: f64) -> EquatorialCoord {
        EquatorialCoord {
            ra: wrap_degrees(ra),
            dec,
            frame: Frame::Icrs,
        }
    }

    pub fn with_frame(mut self, frame: Frame) -> EquatorialCoord {
        self.frame = frame;
        self
    }
}

///Topocentric horizontal coordinate, degrees.
///Azimuth is measured from North, increasing Eastward.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HorizontalCoord {
    pub altitude: f64,
    pub azimuth: f64,
}

impl HorizontalCoord {
    pub fn zenith_distance(&self) -> f64 {
        90. - self.altitude
    }

    ///Plane-parallel airmass, the secant of the zenith distance.
    ///None at or below the horizon where the secant diverges.
    pub fn airmass(&self) -> Option<f64> {
        if self.altitude <= 0. {
            None
        } else {
            Some(1. / self.altitude.to_radians().sin())
        }
    }
}
