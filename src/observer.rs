use std::f64::consts::PI;

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::helpers::{modulus, wrap_degrees};
use crate::types::{EquatorialCoord, HorizontalCoord};

///A fixed geodetic observing site plus its atmospheric and timezone
///context. Shared read-only across plotting calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Observer {
    ///Geodetic latitude, decimal degrees, North positive
    pub lat: f64,
    ///Geodetic longitude, decimal degrees, East positive
    pub long: f64,
    ///Elevation above sea level, meters
    pub elevation: f64,
    ///Atmospheric pressure in hPa. Zero disables refraction.
    pub pressure: f64,
    ///Ambient temperature, degrees Celsius
    pub temperature: f64,
    ///Relative humidity, 0..1
    pub relative_humidity: f64,
    ///Timezone as seconds East of UTC
    pub utc_offset: i32,
    pub name: String,
    pub description: String,
}

impl Observer {
    ///Point is Lat/long/elevation. Atmosphere defaults to vacuum
    ///(no refraction) and the timezone to UTC.
    pub fn new(point: [f64; 3], name: &str) -> Observer {
        Observer {
            lat: point[0],
            long: point[1],
            elevation: point[2],
            pressure: 0.,
            temperature: 0.,
            relative_humidity: 0.,
            utc_offset: 0,
            name: name.to_string(),
            description: String::new(),
        }
    }

    pub fn with_atmosphere(
        mut self,
        pressure_hpa: f64,
        temperature_c: f64,
        relative_humidity: f64,
    ) -> Observer {
        self.pressure = pressure_hpa;
        self.temperature = temperature_c;
        self.relative_humidity = relative_humidity;
        self
    }

    pub fn with_timezone(mut self, timezone: FixedOffset) -> Observer {
        self.utc_offset = timezone.local_minus_utc();
        self
    }

    pub fn with_description(mut self, description: &str) -> Observer {
        self.description = description.to_string();
        self
    }

    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset).unwrap_or_else(|| Utc.fix())
    }

    pub fn local_time(&self, time: DateTime<Utc>) -> DateTime<FixedOffset> {
        time.with_timezone(&self.timezone())
    }

    ///Local apparent sidereal time in radians, GMST plus East longitude.
    pub fn local_sidereal_time(&self, time: DateTime<Utc>) -> f64 {
        modulus(gmst_radians(time) + self.long.to_radians(), 2. * PI)
    }

    ///Converts an equatorial coordinate to the topocentric horizontal
    ///frame at the given instant, refraction corrected when the site
    ///carries a non-zero pressure.
    pub fn altaz(&self, coord: &EquatorialCoord, time: DateTime<Utc>) -> HorizontalCoord {
        let hour_angle = self.local_sidereal_time(time) - coord.ra.to_radians();
        let (sin_ha, cos_ha) = hour_angle.sin_cos();
        let (sin_dec, cos_dec) = coord.dec.to_radians().sin_cos();
        let (sin_lat, cos_lat) = self.lat.to_radians().sin_cos();
        // North/East/Up components of the target unit vector
        let north = cos_lat * sin_dec - sin_lat * cos_dec * cos_ha;
        let east = -cos_dec * sin_ha;
        let up = sin_lat * sin_dec + cos_lat * cos_dec * cos_ha;
        let altitude = up.asin().to_degrees();
        let azimuth = wrap_degrees(east.atan2(north).to_degrees());
        HorizontalCoord {
            altitude: altitude + self.refraction_degrees(altitude),
            azimuth,
        }
    }

    pub fn airmass(&self, coord: &EquatorialCoord, time: DateTime<Utc>) -> Option<f64> {
        self.altaz(coord, time).airmass()
    }

    ///Bennett 1982 refraction, scaled for site pressure and temperature.
    fn refraction_degrees(&self, altitude: f64) -> f64 {
        if self.pressure <= 0. || altitude < -5. {
            return 0.;
        }
        let arg = (altitude + 10.3 / (altitude + 5.11)).to_radians();
        let arcminutes = 1.02 / arg.tan();
        arcminutes / 60. * (self.pressure / 1010.) * (283. / (273. + self.temperature))
    }
}

///Greenwich mean sidereal time in radians.
///Meeus' approach from celestrak https://celestrak.org/columns/v02n02/
fn gmst_radians(time: DateTime<Utc>) -> f64 {
    let years = time.year() as f64 - 1.;
    let a = (years / 100.).trunc();
    let b = 2. - a + (a / 4.).trunc();
    let julian_year = (365.25 * years).trunc() + (30.6001_f64 * 14.).trunc() + 1720994.5 + b;
    let julian_day = julian_year + time.ordinal() as f64;
    let j2000_day = julian_day - 2451545.0;
    let seconds_of_day = time.num_seconds_from_midnight() as f64;
    let t = j2000_day / 36525.0;
    let theta_0 =
        24110.54841 + 8640184.812866 * t + 0.093104 * t * t - t * t * t * 6.2 * 10_f64.powf(-6.);
    let side_time = modulus(theta_0 + 1.00273790934 * seconds_of_day, 86400.);
    2. * PI * side_time / 86400.
}
