use crate::reactive::ModulationSource;

/// Modulation voltage given by a function of time.
pub struct FnSource<Fs> where Fs: Fn(f64) -> f64 {
    pub source_fn: Fs,
}
impl<Fs> ModulationSource for FnSource<Fs> where Fs: Fn(f64) -> f64 {
    #[inline]
    fn generate(&self, time: f64) -> f64 {
        (self.source_fn)(time)
    }
}

/// A constant modulation voltage.
#[derive(Copy, Clone, Debug)]
pub struct HeldSource {
    pub voltage: f64,
}
impl ModulationSource for HeldSource {
    #[inline]
    fn generate(&self, _time: f64) -> f64 {
        self.voltage
    }
}
