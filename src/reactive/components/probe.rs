use crate::units::unit_text;

/// A wire with a third terminal that reports the voltage it sees.
///
/// Both ends are one node, so the probe never loads the circuit. It is used
/// to watch a modulation signal before wiring it to a variable element.
#[derive(Copy, Clone, Debug, Default)]
pub struct TestProbe {
    modulation_voltage: f64,
}

impl TestProbe {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn observe(&mut self, voltage: f64) {
        self.modulation_voltage = voltage;
    }

    #[inline]
    pub fn modulation_voltage(&self) -> f64 {
        self.modulation_voltage
    }

    pub fn info(&self) -> Vec<String> {
        vec![
            "Test Wire".to_string(),
            format!("Mod = {}", unit_text(self.modulation_voltage, "V")),
        ]
    }
}
