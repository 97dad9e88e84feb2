use std::f64;

pub fn modulus(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

///Wraps an angle in degrees into [0,360)
pub fn wrap_degrees(angle: f64) -> f64 {
    modulus(angle, 360.)
}

#[cfg(test)]
pub fn assert_almost_eq(a: f64, b: f64, eps: f64) {
    if (a - b).abs() > eps {
        assert_eq!(a, b)
    }
}

#[cfg(test)]
pub fn quick_gen_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> chrono::DateTime<chrono::Utc> {
    use chrono::TimeZone;
    chrono::Utc
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_modulus() {
        assert_almost_eq(modulus(-90., 360.), 270., 1e-12);
        assert_almost_eq(modulus(370., 360.), 10., 1e-12);
        assert_almost_eq(wrap_degrees(720.5), 0.5, 1e-12);
    }
}
