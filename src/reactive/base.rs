use std::marker::PhantomData;

use crate::reactive::Quantity;

/// Numerical integration method of the companion model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Integration {
    #[default]
    Trapezoidal,
    BackwardEuler,
}

/// Norton equivalent of a reactive element over one time step.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Companion {
    /// Equivalent resistance in ohms.
    pub resistance: f64,
    /// History current source in amperes.
    pub source: f64,
}

/// The fixed-value reactive element a parametric element is built around.
///
/// The host solver reads `companion()` to stamp the element and writes the
/// solved branch values back with `commit`.
#[derive(Clone, Debug)]
pub struct ReactiveCore<Q: Quantity> {
    param: f64,
    state: f64,
    across: f64,
    delta_t: f64,
    integration: Integration,
    companion: Companion,
    quantity: PhantomData<Q>,
}

impl<Q: Quantity> ReactiveCore<Q> {
    #[inline]
    pub fn new(param: f64, delta_t: f64, integration: Integration) -> Self {
        Self {
            param,
            state: 0.0,
            across: 0.0,
            delta_t,
            integration,
            companion: Companion::default(),
            quantity: PhantomData,
        }
    }

    #[inline]
    pub fn param(&self) -> f64 {
        self.param
    }

    /// Inductor current or capacitor voltage.
    #[inline]
    pub fn state(&self) -> f64 {
        self.state
    }

    #[inline]
    pub fn across(&self) -> f64 {
        self.across
    }

    #[inline]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    #[inline]
    pub fn integration(&self) -> Integration {
        self.integration
    }

    #[inline]
    pub fn companion(&self) -> Companion {
        self.companion
    }

    /// Stores the branch values solved for the last step.
    #[inline]
    pub fn commit(&mut self, state: f64, across: f64) {
        self.state = state;
        self.across = across;
    }

    /// Recomputes the companion model for the next solve.
    pub fn begin_step(&mut self) {
        let resistance = Q::companion_resistance(self.param, self.delta_t, self.integration);

        self.companion = Companion {
            resistance,
            source: Q::history_source(resistance, self.state, self.across, self.integration),
        };
    }

    // only the owning parametric element moves the parameter
    #[inline]
    pub(crate) fn update(&mut self, param: f64, state: f64) {
        self.param = param;
        self.state = state;
    }
}
