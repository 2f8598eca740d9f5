use std::marker::PhantomData;

use crate::Error;
use crate::reactive::calibration::check_domain;
use crate::reactive::{
    BoundaryPolicy, Capacitance, Inductance, Integration, LinearCalibration, ModulationPolicy,
    Quantity, ReactiveCore,
};
use crate::units::unit_text;

/// Inductor whose inductance follows its modulation voltage.
pub type VariableInductor = ParametricElement<Inductance>;
/// Capacitor whose capacitance follows its modulation voltage.
pub type VariableCapacitor = ParametricElement<Capacitance>;

/// Lowest and highest modulation voltage accepted by `set_edit_value`.
const VOLTAGE_LIMIT: f64 = 1000.0;

/// Describes a variable inductor or capacitor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VariableElementDescriptor<Q: Quantity> {
    /// Parameter when the modulation voltage is `voltage_low`.
    pub param_low: f64,
    /// Parameter when the modulation voltage is `voltage_high`.
    pub param_high: f64,
    pub voltage_low: f64,
    pub voltage_high: f64,
    /// Clamp the modulation voltage to `[voltage_low, voltage_high]`
    /// instead of taking its absolute value.
    pub clamp_modulation: bool,
    /// Length of each simulation step, used by the companion model.
    pub delta_t: f64,
    pub integration: Integration,
    pub quantity: PhantomData<Q>,
}

impl<Q: Quantity> Default for VariableElementDescriptor<Q> {
    fn default() -> Self {
        Self {
            param_low: Q::DEFAULT_LOW,
            param_high: Q::DEFAULT_HIGH,
            voltage_low: 0.0,
            voltage_high: 10.0,
            clamp_modulation: true,
            delta_t: 5e-6,
            integration: Integration::Trapezoidal,
            quantity: PhantomData,
        }
    }
}

/// Fields reachable through the generic edit interface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditField {
    /// The live parameter. Always derived, never editable.
    Parameter,
    ParamLow,
    ParamHigh,
    VoltageLow,
    VoltageHigh,
    ClampModulation,
}

/// Label, current value and allowed range of an editable field.
#[derive(Clone, Debug, PartialEq)]
pub struct EditInfo {
    pub label: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// A reactive element whose parameter is driven by a modulation voltage.
///
/// The parameter has no setter: it changes only in `step`, which keeps the
/// stored energy continuous across the change.
#[derive(Clone, Debug)]
pub struct ParametricElement<Q: Quantity, P: ModulationPolicy = LinearCalibration> {
    core: ReactiveCore<Q>,
    policy: P,
    modulation_voltage: f64,
}

impl<Q: Quantity> ParametricElement<Q, LinearCalibration> {
    /// Creates an element calibrated by `desc`.
    ///
    /// The parameter starts at the value interpolated for 0 V.
    pub fn new(desc: VariableElementDescriptor<Q>) -> Result<Self, Error> {
        let calibration = LinearCalibration::new(
            desc.param_low,
            desc.param_high,
            desc.voltage_low,
            desc.voltage_high,
            BoundaryPolicy::from(desc.clamp_modulation),
        )?;

        Ok(Self::with_policy(calibration, desc.delta_t, desc.integration))
    }

    #[inline]
    pub fn calibration(&self) -> &LinearCalibration {
        &self.policy
    }

    /// Describes `field` the way an editing layer should present it.
    pub fn edit_info(&self, field: EditField) -> EditInfo {
        let cal = &self.policy;
        let param_label = |end: &str| format!("{} ({}) at {} Voltage", Q::NAME, Q::UNIT, end);

        match field {
            EditField::Parameter => EditInfo {
                label: format!("{} ({})", Q::NAME, Q::UNIT),
                value: self.core.param(),
                min: Q::MIN,
                max: Q::MAX,
            },
            EditField::ParamLow => EditInfo {
                label: param_label("Low"),
                value: cal.param_low,
                min: Q::MIN,
                max: Q::MAX,
            },
            EditField::ParamHigh => EditInfo {
                label: param_label("High"),
                value: cal.param_high,
                min: Q::MIN,
                max: Q::MAX,
            },
            EditField::VoltageLow => EditInfo {
                label: "Low Modulation Voltage (V)".to_string(),
                value: cal.voltage_low,
                min: -VOLTAGE_LIMIT,
                max: VOLTAGE_LIMIT,
            },
            EditField::VoltageHigh => EditInfo {
                label: "High Modulation Voltage (V)".to_string(),
                value: cal.voltage_high,
                min: -VOLTAGE_LIMIT,
                max: VOLTAGE_LIMIT,
            },
            EditField::ClampModulation => EditInfo {
                label: "Clamp Modulation Voltage".to_string(),
                value: if cal.policy == BoundaryPolicy::Clamp { 1.0 } else { 0.0 },
                min: 0.0,
                max: 1.0,
            },
        }
    }

    /// Applies an edited value.
    ///
    /// Parameter bounds that are not positive fall back to the quantity's
    /// minimum and are capped at its maximum. Voltages are clamped to
    /// ±1000 V. For `ClampModulation` any non-zero value enables clamping.
    pub fn set_edit_value(&mut self, field: EditField, value: f64) -> Result<(), Error> {
        if value.is_nan() {
            return Err(Error::NonFinite { name: "edit value", value });
        }
        let cal = &mut self.policy;

        match field {
            EditField::Parameter => {
                return Err(Error::DerivedParameter { quantity: Q::NAME });
            }
            EditField::ParamLow => cal.param_low = clamp_param::<Q>(value),
            EditField::ParamHigh => cal.param_high = clamp_param::<Q>(value),
            EditField::VoltageLow => {
                let v = value.max(-VOLTAGE_LIMIT).min(VOLTAGE_LIMIT);
                check_domain(v, cal.voltage_high)?;
                cal.voltage_low = v;
            }
            EditField::VoltageHigh => {
                let v = value.max(-VOLTAGE_LIMIT).min(VOLTAGE_LIMIT);
                check_domain(cal.voltage_low, v)?;
                cal.voltage_high = v;
            }
            EditField::ClampModulation => cal.policy = BoundaryPolicy::from(value != 0.0),
        }

        Ok(())
    }
}

impl<Q: Quantity, P: ModulationPolicy> ParametricElement<Q, P> {
    /// Creates an element driven by any modulation policy.
    pub fn with_policy(policy: P, delta_t: f64, integration: Integration) -> Self {
        let param = policy.interpolate(0.0);
        let mut core = ReactiveCore::new(param, delta_t, integration);
        core.begin_step();

        Self { core, policy, modulation_voltage: 0.0 }
    }

    /// Runs the per step update for a new modulation voltage.
    ///
    /// The stored energy is carried over to the new parameter before the base
    /// element prepares its companion model. Returns the new parameter.
    pub fn step(&mut self, modulation_voltage: f64) -> f64 {
        let param_old = self.core.param();
        let state_old = self.core.state();

        let param_new = self.policy.interpolate(modulation_voltage);
        if !param_new.is_finite() || param_new <= 0.0 {
            log::warn!(
                "{} interpolated to {} {} at {} V",
                Q::NAME, param_new, Q::UNIT, modulation_voltage,
            );
        }
        let state_new = self.policy.rescale(param_old, state_old, param_new);

        self.modulation_voltage = modulation_voltage;
        self.core.update(param_new, state_new);
        self.core.begin_step();

        param_new
    }

    /// Places the element at `modulation_voltage` without an update step.
    ///
    /// The parameter is re-derived and the state is left as it is, so this is
    /// only for setting up a starting condition.
    pub(crate) fn settle(&mut self, modulation_voltage: f64) {
        let param = self.policy.interpolate(modulation_voltage);
        let state = self.core.state();

        self.modulation_voltage = modulation_voltage;
        self.core.update(param, state);
        self.core.begin_step();
    }

    /// The live inductance or capacitance.
    #[inline]
    pub fn param(&self) -> f64 {
        self.core.param()
    }

    #[inline]
    pub fn state(&self) -> f64 {
        self.core.state()
    }

    #[inline]
    pub fn modulation_voltage(&self) -> f64 {
        self.modulation_voltage
    }

    #[inline]
    pub fn energy(&self) -> f64 {
        crate::reactive::stored_energy(self.core.param(), self.core.state())
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub fn core(&self) -> &ReactiveCore<Q> {
        &self.core
    }

    /// Write access for the host solver to commit solved branch values.
    ///
    /// The parameter itself stays out of reach.
    #[inline]
    pub fn core_mut(&mut self) -> &mut ReactiveCore<Q> {
        &mut self.core
    }

    /// Lines describing the element's present condition.
    pub fn info(&self) -> Vec<String> {
        vec![
            Q::ELEMENT.to_string(),
            format!("{} = {}", Q::STATE_SYMBOL, unit_text(self.core.state(), Q::STATE_UNIT)),
            format!("{} = {}", Q::SYMBOL, unit_text(self.core.param(), Q::UNIT)),
            format!("Vmod = {}", unit_text(self.modulation_voltage, "V")),
        ]
    }
}

#[inline]
fn clamp_param<Q: Quantity>(value: f64) -> f64 {
    if value > 0.0 { value.min(Q::MAX) } else { Q::MIN }
}
