pub trait Value<T> {
    fn value(&self) -> T;
}

/// The sensor validity trait exposes whether the value carried by a parameter
/// may be trusted. A parameter outside its documented operating range is
/// flagged invalid but keeps carrying the raw value, so downstream warning
/// logic can still run a best-effort evaluation.
pub trait SensorValidity {
    /// A parameter is considered valid when the reading was inside its
    /// documented range at acquisition time.
    fn is_val(&self) -> bool;

    fn is_inv(&self) -> bool {
        !self.is_val()
    }
}

#[derive(Clone, Debug)]
pub struct SensorParameter<T> {
    value: T,
    valid: bool,
}

impl<T> SensorParameter<T> {
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn new_inv(value: T) -> Self {
        Self {
            value,
            valid: false,
        }
    }
}

impl<T> SensorValidity for SensorParameter<T> {
    fn is_val(&self) -> bool {
        self.valid
    }
}

impl<T: Default> Default for SensorParameter<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            valid: false,
        }
    }
}

impl<T> Value<T> for SensorParameter<T>
where
    T: Copy,
{
    fn value(&self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_parameter_is_valid() {
        let parameter = SensorParameter::new(42.0);
        assert!(parameter.is_val());
        assert!(!parameter.is_inv());
        assert_eq!(parameter.value(), 42.0);
    }

    #[test]
    fn new_inv_parameter_keeps_its_value() {
        let parameter = SensorParameter::new_inv(-12.5);
        assert!(parameter.is_inv());
        assert_eq!(parameter.value(), -12.5);
    }

    #[test]
    fn default_parameter_is_invalid() {
        let parameter: SensorParameter<f64> = Default::default();
        assert!(parameter.is_inv());
        assert_eq!(parameter.value(), 0.0);
    }
}
