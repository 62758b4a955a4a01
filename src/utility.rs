pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Seconds per minute
    pub const MS: i32 = 60;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Seconds per degree
    pub const DS: i32 = DM * MS;
}

/// Evaluate a polynomial, highest order coefficient first
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

pub(crate) trait GeoMath {
    fn arcsec_to_deg(&self) -> Self;
    fn split_dms(&self) -> (i64, i64, f64);
}

impl GeoMath for f64 {
    fn arcsec_to_deg(&self) -> f64 {
        *self / f64::from(dms::DS)
    }

    /// Splits the magnitude of an angle into whole degrees, whole minutes and
    /// seconds rounded to hundredths. Rounding carries into the minutes and
    /// degrees, so seconds never read 60.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn split_dms(&self) -> (i64, i64, f64) {
        let cs_per_minute = 100 * i64::from(dms::MS);
        let cs_per_degree = cs_per_minute * i64::from(dms::DM);
        let total = (self.abs() * cs_per_degree as f64).round() as i64;

        (
            total / cs_per_degree,
            total % cs_per_degree / cs_per_minute,
            (total % cs_per_minute) as f64 / 100.,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn polyval_highest_order_first() {
        // 2x^2 + 3x + 4 at x = 2
        assert_abs_diff_eq!(polyval(&[2., 3., 4.], 2.), 18.);
        assert_abs_diff_eq!(polyval(&[], 2.), 0.);
    }

    #[test]
    fn arcseconds() {
        assert_abs_diff_eq!(3600_f64.arcsec_to_deg(), 1.);
        assert_abs_diff_eq!((-1800_f64).arcsec_to_deg(), -0.5);
    }

    #[test]
    fn split_negative_angle() {
        let (d, m, s) = (-37.5125_f64).split_dms();
        assert_eq!(d, 37);
        assert_eq!(m, 30);
        assert_abs_diff_eq!(s, 45.);
    }

    #[test]
    fn split_carries_rounded_seconds() {
        let (d, m, s) = 33.9_f64.split_dms();
        assert_eq!((d, m), (33, 54));
        assert_abs_diff_eq!(s, 0.);

        let (d, m, s) = 10.999_999_9_f64.split_dms();
        assert_eq!((d, m), (11, 0));
        assert_abs_diff_eq!(s, 0.);
    }
}
