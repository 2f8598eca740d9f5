use crate::Error;
use crate::reactive::ModulationPolicy;

/// What happens to a modulation voltage before interpolation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Clamp into `[voltage_low, voltage_high]`.
    Clamp,
    /// Use the absolute value, with no clamping.
    Mirror,
}

impl From<bool> for BoundaryPolicy {
    #[inline]
    fn from(clamp: bool) -> Self {
        if clamp { BoundaryPolicy::Clamp } else { BoundaryPolicy::Mirror }
    }
}

/// Linear map from modulation voltage to a reactive parameter.
///
/// `param_low` is produced at `voltage_low` and `param_high` at
/// `voltage_high`. The output is not bounded: under `BoundaryPolicy::Mirror`
/// it extrapolates past either end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearCalibration {
    pub(crate) param_low: f64,
    pub(crate) param_high: f64,
    pub(crate) voltage_low: f64,
    pub(crate) voltage_high: f64,
    pub(crate) policy: BoundaryPolicy,
}

impl LinearCalibration {
    /// Creates a calibration, rejecting non-finite values and a zero-width
    /// voltage domain.
    pub fn new(
        param_low: f64,
        param_high: f64,
        voltage_low: f64,
        voltage_high: f64,
        policy: BoundaryPolicy,
    ) -> Result<Self, Error> {
        for (name, value) in [
            ("param_low", param_low),
            ("param_high", param_high),
            ("voltage_low", voltage_low),
            ("voltage_high", voltage_high),
        ] {
            if !value.is_finite() {
                return Err(Error::NonFinite { name, value });
            }
        }
        check_domain(voltage_low, voltage_high)?;

        Ok(Self { param_low, param_high, voltage_low, voltage_high, policy })
    }

    #[inline]
    pub fn param_low(&self) -> f64 {
        self.param_low
    }
    #[inline]
    pub fn param_high(&self) -> f64 {
        self.param_high
    }
    #[inline]
    pub fn voltage_low(&self) -> f64 {
        self.voltage_low
    }
    #[inline]
    pub fn voltage_high(&self) -> f64 {
        self.voltage_high
    }
    #[inline]
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }
}

impl ModulationPolicy for LinearCalibration {
    #[inline]
    fn interpolate(&self, modulation_voltage: f64) -> f64 {
        let v = match self.policy {
            // voltage_low may exceed voltage_high, so no f64::clamp
            BoundaryPolicy::Clamp => {
                if modulation_voltage < self.voltage_low {
                    self.voltage_low
                } else if modulation_voltage > self.voltage_high {
                    self.voltage_high
                } else {
                    modulation_voltage
                }
            }
            BoundaryPolicy::Mirror => modulation_voltage.abs(),
        };

        let t = (v - self.voltage_low) / (self.voltage_high - self.voltage_low);
        lerp(self.param_low, self.param_high, t)
    }
}

/// `a + t·(b - a)`, exact at `t == 0` and `t == 1` and monotone in `t`.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if (a <= 0.0 && b >= 0.0) || (a >= 0.0 && b <= 0.0) {
        return t * b + (1.0 - t) * a;
    }
    if t == 1.0 {
        return b;
    }

    let x = a + t * (b - a);
    if x.is_nan() {
        return x;
    }
    // rounding must not carry x across b
    if (t > 1.0) == (b > a) { x.max(b) } else { x.min(b) }
}

pub(crate) fn check_domain(voltage_low: f64, voltage_high: f64) -> Result<(), Error> {
    if voltage_low == voltage_high {
        return Err(Error::DegenerateDomain { voltage: voltage_low });
    }
    Ok(())
}

/// Energy `½·param·state²` held by a reactive element.
#[inline]
pub fn stored_energy(param: f64, state: f64) -> f64 {
    0.5 * param * state.powi(2)
}

/// State that keeps the stored energy unchanged when the parameter moves
/// from `param_old` to `param_new`.
///
/// The result is never negative; the sign of `state_old` is dropped.
#[inline]
pub fn rescale_state(param_old: f64, state_old: f64, param_new: f64) -> f64 {
    let energy = stored_energy(param_old, state_old);
    f64::sqrt(2.0 * energy / param_new)
}
