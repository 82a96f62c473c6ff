// Schwarzschild radius from first principles

use crate::error::VizError;

// ============================================================================
// PHYSICAL CONSTANTS (SI UNITS)
// ============================================================================

// Gravitational constant in m^3 kg^-1 s^-2 (CODATA 2018)
pub const G: f64 = 6.67430e-11;

// Speed of light in m/s (exact by definition)
pub const C: f64 = 299_792_458.0;

// One solar mass in kg (IAU nominal value)
pub const SOLAR_MASS: f64 = 1.98847e30;

// ============================================================================
// RADIUS CALCULATION
// ============================================================================

// Calculate the Schwarzschild radius for a given mass
//
// Physics: The Schwarzschild radius is the radius of the event horizon of
// a non-rotating black hole. Compress any mass inside this radius and not
// even light can escape.
//
// Math: Rs = 2GM / c^2, with M converted from solar masses to kg.
//
// Scaling: Rs is linear in M. One solar mass gives Rs ~ 2.95 km, so a
// 10 solar mass black hole has Rs ~ 29.5 km.
//
// Non-finite or non-positive masses are rejected up front: the grid and
// field synthesis downstream both require a strictly positive radius, and
// silently propagating a NaN radius would only surface as a corrupt image.
pub fn schwarzschild_radius(mass_solar: f64) -> Result<f64, VizError> {
    if !mass_solar.is_finite() || mass_solar <= 0.0 {
        return Err(VizError::InvalidMass(mass_solar));
    }

    let mass_kg = mass_solar * SOLAR_MASS;
    Ok(2.0 * G * mass_kg / (C * C))
}
