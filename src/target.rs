use serde::{Deserialize, Serialize};

use crate::types::EquatorialCoord;
use crate::Error;

///A named fixed celestial target. Immutable once built, meant to be
///shared read-only across plotting calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FixedTarget {
    pub name: String,
    pub coord: EquatorialCoord,
}

impl FixedTarget {
    pub fn new(coord: EquatorialCoord, name: &str) -> FixedTarget {
        FixedTarget {
            name: name.to_string(),
            coord,
        }
    }

    ///Builds a target from sexagesimal strings, e.g.
    ///`"06h45m08.9173s"` and `"-16d42m58.017s"`.
    pub fn from_sexagesimal(ra: &str, dec: &str, name: &str) -> Result<FixedTarget, Error> {
        let coord = EquatorialCoord::from_degrees(parse_ra(ra)?, parse_dec(dec)?);
        Ok(FixedTarget::new(coord, name))
    }
}

///Parses `"HHhMMmSS.Ss"` right ascension into decimal degrees.
pub fn parse_ra(field: &str) -> Result<f64, Error> {
    let bad = || Error::InvalidRightAscension(field.to_string());
    let (hours, rest) = field.trim().split_once('h').ok_or_else(bad)?;
    let (minutes, rest) = rest.split_once('m').ok_or_else(bad)?;
    let seconds = rest.strip_suffix('s').ok_or_else(bad)?;
    let hours: f64 = hours.parse().map_err(|_| bad())?;
    let minutes: f64 = minutes.parse().map_err(|_| bad())?;
    let seconds: f64 = seconds.parse().map_err(|_| bad())?;
    if hours < 0. || minutes < 0. || minutes >= 60. || seconds < 0. || seconds >= 60. {
        return Err(bad());
    }
    Ok((hours + minutes / 60. + seconds / 3600.) * 15.)
}

///Parses `"+DDdMMmSS.Ss"` declination into decimal degrees.
pub fn parse_dec(field: &str) -> Result<f64, Error> {
    let bad = || Error::InvalidDeclination(field.to_string());
    let trimmed = field.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1., rest),
        None => (1., trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (degrees, rest) = rest.split_once('d').ok_or_else(bad)?;
    let (minutes, rest) = rest.split_once('m').ok_or_else(bad)?;
    let seconds = rest.strip_suffix('s').ok_or_else(bad)?;
    let degrees: f64 = degrees.parse().map_err(|_| bad())?;
    let minutes: f64 = minutes.parse().map_err(|_| bad())?;
    let seconds: f64 = seconds.parse().map_err(|_| bad())?;
    if degrees < 0. || minutes < 0. || minutes >= 60. || seconds < 0. || seconds >= 60. {
        return Err(bad());
    }
    let dec = sign * (degrees + minutes / 60. + seconds / 3600.);
    if !(-90. ..=90.).contains(&dec) {
        return Err(bad());
    }
    Ok(dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::assert_almost_eq;

    #[test]
    fn test_parse_sirius() {
        let sirius =
            FixedTarget::from_sexagesimal("06h45m08.9173s", "-16d42m58.017s", "Sirius").unwrap();
        assert_eq!(sirius.name, "Sirius");
        assert_almost_eq(sirius.coord.ra, 101.287155, 1e-4);
        assert_almost_eq(sirius.coord.dec, -16.716116, 1e-4);
    }

    #[test]
    fn test_parse_polaris() {
        let polaris =
            FixedTarget::from_sexagesimal("02h31m49.09s", "+89d15m50.8s", "Polaris").unwrap();
        assert_almost_eq(polaris.coord.ra, 37.954542, 1e-4);
        assert_almost_eq(polaris.coord.dec, 89.264111, 1e-4);
    }

    #[test]
    fn test_reject_malformed_ra() {
        assert!(parse_ra("06:45:08.9").is_err());
        assert!(parse_ra("06h61m00s").is_err());
        assert!(parse_ra("abchdefmghis").is_err());
    }

    #[test]
    fn test_reject_out_of_range_dec() {
        assert!(parse_dec("-91d00m00s").is_err());
        assert!(parse_dec("16d42m61s").is_err());
    }
}
