use crate::reactive::{Integration, Quantity};

/// Inductance in henries. The paired state is the inductor current.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Inductance;

/// Capacitance in farads. The paired state is the capacitor voltage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capacitance;

impl Quantity for Inductance {
    const NAME: &'static str = "Inductance";
    const ELEMENT: &'static str = "Inductor (variable)";
    const SYMBOL: &'static str = "L";
    const UNIT: &'static str = "H";
    const STATE_SYMBOL: &'static str = "I";
    const STATE_UNIT: &'static str = "A";
    const MIN: f64 = 1e-2;
    const MAX: f64 = 10.0;
    const DEFAULT_LOW: f64 = 10.0;
    const DEFAULT_HIGH: f64 = 0.1;

    #[inline]
    fn companion_resistance(param: f64, delta_t: f64, integration: Integration) -> f64 {
        match integration {
            Integration::Trapezoidal => 2.0 * param / delta_t,
            Integration::BackwardEuler => param / delta_t,
        }
    }

    #[inline]
    fn history_source(
        resistance: f64,
        state: f64,
        across: f64,
        integration: Integration,
    ) -> f64 {
        match integration {
            Integration::Trapezoidal => across / resistance + state,
            Integration::BackwardEuler => state,
        }
    }

    #[inline]
    fn time_constant(param: f64, resistance: f64) -> f64 {
        param / resistance
    }
}

impl Quantity for Capacitance {
    const NAME: &'static str = "Capacitance";
    const ELEMENT: &'static str = "Capacitor (variable)";
    const SYMBOL: &'static str = "C";
    const UNIT: &'static str = "F";
    const STATE_SYMBOL: &'static str = "V";
    const STATE_UNIT: &'static str = "V";
    const MIN: f64 = 1e-12;
    const MAX: f64 = 1.0;
    const DEFAULT_LOW: f64 = 100e-6;
    const DEFAULT_HIGH: f64 = 1e-6;

    #[inline]
    fn companion_resistance(param: f64, delta_t: f64, integration: Integration) -> f64 {
        match integration {
            Integration::Trapezoidal => delta_t / (2.0 * param),
            Integration::BackwardEuler => delta_t / param,
        }
    }

    #[inline]
    fn history_source(
        resistance: f64,
        state: f64,
        across: f64,
        integration: Integration,
    ) -> f64 {
        match integration {
            Integration::Trapezoidal => -state / resistance - across,
            Integration::BackwardEuler => -state / resistance,
        }
    }

    #[inline]
    fn time_constant(param: f64, resistance: f64) -> f64 {
        param * resistance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inductor_companion_matches_trapezoidal_rule() {
        let r = Inductance::companion_resistance(2.0, 1e-3, Integration::Trapezoidal);
        assert_relative_eq!(r, 4000.0);
        let hist = Inductance::history_source(r, 0.5, 8.0, Integration::Trapezoidal);
        assert_relative_eq!(hist, 0.502, epsilon = 1e-12);
        assert_relative_eq!(
            Inductance::history_source(r, 0.5, 8.0, Integration::BackwardEuler),
            0.5
        );
    }

    #[test]
    fn capacitor_companion_matches_trapezoidal_rule() {
        let r = Capacitance::companion_resistance(1e-6, 1e-6, Integration::Trapezoidal);
        assert_relative_eq!(r, 0.5);
        let hist = Capacitance::history_source(r, 2.0, 0.25, Integration::Trapezoidal);
        assert_relative_eq!(hist, -4.25);
        let r = Capacitance::companion_resistance(1e-6, 1e-6, Integration::BackwardEuler);
        assert_relative_eq!(
            Capacitance::history_source(r, 2.0, 0.25, Integration::BackwardEuler),
            -2.0
        );
    }

    #[test]
    fn time_constants() {
        assert_relative_eq!(Inductance::time_constant(10.0, 5.0), 2.0);
        assert_relative_eq!(Capacitance::time_constant(1e-6, 1e3), 1e-3, epsilon = 1e-15);
    }
}
