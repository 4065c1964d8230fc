/// Degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::TAU / 360.0)
}

/// Radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * (360.0 / std::f32::consts::TAU)
}

pub mod angles {
    /// π/4 (45°)
    pub const FRAC_PI_4: f32 = std::f32::consts::FRAC_PI_4;
    /// π/3 (60°)
    pub const FRAC_PI_3: f32 = std::f32::consts::FRAC_PI_3;
    /// π/2 (90°)
    pub const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;
    /// π (180°)
    pub const PI: f32 = std::f32::consts::PI;
    /// 2π (360°)
    pub const TAU: f32 = std::f32::consts::TAU;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        assert!((radians(180.0) - angles::PI).abs() < 1e-6);
        assert!((degrees(angles::FRAC_PI_2) - 90.0).abs() < 1e-4);
        assert!((degrees(radians(42.0)) - 42.0).abs() < 1e-4);
    }
}
