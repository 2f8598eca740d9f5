use crate::reactive::{Load, Quantity};

/// Leaves the state untouched between updates.
#[derive(Copy, Clone, Debug, Default)]
pub struct Lossless;
impl<Q: Quantity> Load<Q> for Lossless {
    #[inline]
    fn next_state(&self, _param: f64, state: f64, _delta_t: f64) -> f64 {
        state
    }
}

/// Discharges the element into a resistor.
///
/// The state decays with the time constant `L/R` for an inductor and `RC`
/// for a capacitor, evaluated with the parameter of the current step.
#[derive(Copy, Clone, Debug)]
pub struct ResistiveLoad {
    pub resistance: f64,
}
impl<Q: Quantity> Load<Q> for ResistiveLoad {
    #[inline]
    fn next_state(&self, param: f64, state: f64, delta_t: f64) -> f64 {
        let tau = Q::time_constant(param, self.resistance);
        state * f64::exp(-delta_t / tau)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::{Capacitance, Inductance};
    use approx::assert_relative_eq;

    #[test]
    fn resistive_decay() {
        let load = ResistiveLoad { resistance: 10.0 };
        // tau = 1 s
        let i = <ResistiveLoad as Load<Inductance>>::next_state(&load, 10.0, 2.0, 1.0);
        assert_relative_eq!(i, 2.0 * (-1.0f64).exp(), epsilon = 1e-12);

        let v = <ResistiveLoad as Load<Capacitance>>::next_state(&load, 0.05, 3.0, 0.5);
        assert_relative_eq!(v, 3.0 * (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn lossless_holds() {
        assert_eq!(<Lossless as Load<Inductance>>::next_state(&Lossless, 1.0, -4.0, 1.0), -4.0);
    }
}
